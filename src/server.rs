use crate::error::Error;
use crate::fetcher::EpisodeFetcher;
use crate::presenter::HomePage;
use crate::render::render_home;
use crate::revalidator::Revalidator;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Duration;

pub struct AppState {
	fetcher: EpisodeFetcher,
	pages: Revalidator<HomePage>,
}

impl AppState {
	pub fn new(fetcher: EpisodeFetcher, revalidate: Duration) -> Self {
		AppState {
			fetcher,
			pages: Revalidator::new(revalidate),
		}
	}

	/// The current homepage, fetching a new one if the cached one has expired.
	pub async fn home_page(&self) -> Result<Arc<HomePage>, Error> {
		self.pages
			.get_or_refresh(|| self.fetcher.fetch_home_page())
			.await
	}
}

pub fn router(state: Arc<AppState>) -> Router {
	Router::new()
		.route("/", get(home))
		.route("/api/episodes", get(episodes))
		.with_state(state)
}

async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
	let page = state.home_page().await?;
	Ok(Html(render_home(&page, state.fetcher.locale())))
}

async fn episodes(State(state): State<Arc<AppState>>) -> Result<Json<Arc<HomePage>>, PageError> {
	Ok(Json(state.home_page().await?))
}

/// A page that could not be produced at all.
pub struct PageError(Error);

impl From<Error> for PageError {
	fn from(err: Error) -> Self {
		PageError(err)
	}
}

impl IntoResponse for PageError {
	fn into_response(self) -> Response {
		log::warn!("serving error page: {}", self.0);
		(StatusCode::BAD_GATEWAY, format!("episodes unavailable: {}", self.0)).into_response()
	}
}
