//! Backend for the movie lookup page: static files plus `/movie` cards.
mod config;
mod movie;
mod routes;
mod static_files;
mod upstream;

pub use config::{load_config, load_config_with_key, ServerConfig, API_KEY_ENV, CONFIG_FILENAME};
pub use movie::{render_movie_page, MovieDetails};
pub use routes::{router, serve, ServerState};
pub use static_files::{content_type_for, error_page, resolve_public_path};
pub use upstream::{MovieSource, OmdbSource, UpstreamError};
