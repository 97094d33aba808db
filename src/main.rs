use podcast_home::config::AppConfig;
use podcast_home::fetcher::EpisodeFetcher;
use podcast_home::requester::Requester;
use podcast_home::server::{self, AppState};
use podcast_home::util::init_log;
use std::error::Error;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
	let _logger = init_log("info")?;

	let config = AppConfig::from_env()?;
	log::info!(
		"episode api at {}, revalidating every {}s, locale {}",
		config.api.base_url,
		config.revalidate.as_secs(),
		config.locale.code
	);

	let requester = Requester::new(&config.api)?;
	let fetcher = EpisodeFetcher::new(requester, config.locale);
	let state = Arc::new(AppState::new(fetcher, config.revalidate));

	// Warm the cache so the first visitor doesn't wait on the api.
	if let Err(err) = state.home_page().await {
		log::warn!("initial fetch failed: {}", err);
	}

	let listener = tokio::net::TcpListener::bind(config.bind).await?;
	log::info!("listening on {}", config.bind);
	axum::serve(listener, server::router(state)).await?;
	Ok(())
}
