use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

struct Cached<T> {
	value: Arc<T>,
	fetched_at: Instant,
}

/// Holds the last good value and replaces it wholesale once it is older than `period`.
///
/// Refreshes are single-flight: callers that find the value stale while another
/// refresh is running wait for it and take its result. If that refresh failed,
/// they take the stale value instead of trying again themselves.
pub struct Revalidator<T> {
	period: Duration,
	cached: RwLock<Option<Cached<T>>>,
	refreshing: Mutex<()>,
	/// Failed refreshes so far. Only written while `refreshing` is held.
	failures: AtomicU64,
}

impl<T> Revalidator<T> {
	pub fn new(period: Duration) -> Self {
		Revalidator {
			period,
			cached: RwLock::new(None),
			refreshing: Mutex::new(()),
			failures: AtomicU64::new(0),
		}
	}

	/// The cached value if it is still within its period.
	pub async fn fresh(&self) -> Option<Arc<T>> {
		let cached = self.cached.read().await;
		cached
			.as_ref()
			.filter(|c| c.fetched_at.elapsed() < self.period)
			.map(|c| c.value.clone())
	}

	async fn stale(&self) -> Option<Arc<T>> {
		self.cached.read().await.as_ref().map(|c| c.value.clone())
	}

	/// Return the fresh value, or run `factory` to replace it.
	///
	/// When `factory` fails and an older value exists, the older value is returned
	/// to this caller and to everyone who was already waiting; the next call after
	/// that tries again. Without an older value the error is returned, and waiters
	/// run their own attempt since the error cannot be shared.
	pub async fn get_or_refresh<F, Fut, E>(&self, factory: F) -> Result<Arc<T>, E>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<T, E>>,
		E: Display,
	{
		if let Some(value) = self.fresh().await {
			return Ok(value);
		}

		let failures_seen = self.failures.load(Ordering::Acquire);
		let _refreshing = self.refreshing.lock().await;
		// Someone else may have refreshed while we waited.
		if let Some(value) = self.fresh().await {
			return Ok(value);
		}
		if self.failures.load(Ordering::Acquire) != failures_seen {
			if let Some(value) = self.stale().await {
				log::debug!("refresh failed while waiting, serving stale page");
				return Ok(value);
			}
		}

		log::debug!("revalidating");
		match factory().await {
			Ok(value) => {
				let value = Arc::new(value);
				*self.cached.write().await = Some(Cached {
					value: value.clone(),
					fetched_at: Instant::now(),
				});
				log::info!("revalidated, next refresh in {}s", self.period.as_secs());
				Ok(value)
			}
			Err(err) => {
				self.failures.fetch_add(1, Ordering::Release);
				match self.stale().await {
					Some(value) => {
						log::error!("revalidation failed, serving stale page: {}", err);
						Ok(value)
					}
					None => {
						log::error!("revalidation failed with nothing cached: {}", err);
						Err(err)
					}
				}
			}
		}
	}
}
