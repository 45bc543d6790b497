use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use movie_server::{load_config, serve, OmdbSource, ServerState, CONFIG_FILENAME};
use page_logging::{page_info, page_warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, warnings) = load_config(Path::new(CONFIG_FILENAME));
    page_logging::initialize(config.log_destination, LevelFilter::Info, &config.log_file);
    for warning in warnings {
        page_warn!("{}", warning);
    }

    let source = OmdbSource::new(&config.upstream_base, config.api_key.clone())
        .context("invalid upstream_base")?;
    let state = ServerState::new(source, config.public_dir.clone());

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    page_info!("Server ready on {}", listener.local_addr()?);

    serve(listener, state).await?;
    Ok(())
}
