use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use page_logging::{page_error, page_info, page_warn};

use crate::static_files::{content_type_for, error_page, resolve_public_path};
use crate::{render_movie_page, MovieDetails, MovieSource};

#[derive(Clone)]
pub struct ServerState {
    source: Arc<dyn MovieSource>,
    public_dir: Arc<PathBuf>,
}

impl ServerState {
    pub fn new(source: impl MovieSource + 'static, public_dir: PathBuf) -> Self {
        Self {
            source: Arc::new(source),
            public_dir: Arc::new(public_dir),
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/movie", any(movie))
        .fallback(public_file)
        .with_state(state)
}

pub async fn serve(listener: tokio::net::TcpListener, state: ServerState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}

/// Movie card for `t`; always answers 200 with HTML, falling back to a placeholder card.
async fn movie(
    State(state): State<ServerState>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let movie = match method {
        Method::GET => lookup(state.source.as_ref(), params.get("t")).await,
        Method::POST => MovieDetails::not_implemented(),
        other => {
            page_warn!("{} /movie not allowed", other);
            MovieDetails::method_not_allowed()
        }
    };
    Html(render_movie_page(&movie))
}

async fn lookup(source: &dyn MovieSource, title: Option<&String>) -> MovieDetails {
    let Some(title) = title.filter(|title| !title.trim().is_empty()) else {
        page_warn!("/movie called without a title");
        return MovieDetails::not_found();
    };

    page_info!("Looking up {:?}", title);
    match source.find(title).await {
        Ok(movie) => movie,
        Err(err) => {
            page_warn!("Lookup of {:?} failed: {}", title, err);
            MovieDetails::not_found()
        }
    }
}

async fn public_file(State(state): State<ServerState>, uri: Uri) -> Response {
    let Some(path) = resolve_public_path(&state.public_dir, uri.path()) else {
        return not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(&path))], bytes).into_response(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => not_found(),
        Err(err) if path.is_dir() => {
            page_warn!("Directory requested {:?}: {}", path, err);
            not_found()
        }
        Err(err) => {
            page_error!("Failed to read {:?}: {}", path, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain")],
                "Internal Server Error",
            )
                .into_response()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(error_page())).into_response()
}
