//! Refresh-generation tracking for stale-result supersession
//!
//! Refreshes can overlap: a corridor change can be triggered while the prior
//! refresh is still in flight. In-flight calls are not cancelled; instead
//! every refresh carries a monotonically increasing generation token, and a
//! finished batch is only published if its generation is still the newest one
//! started. A superseded batch is dropped on arrival, so only the latest
//! refresh's result is ever observable.

use remit_types::QuoteBatch;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Tracks the current refresh generation and the latest surviving batch.
#[derive(Debug, Default)]
pub struct RefreshTracker {
	current: AtomicU64,
	latest: RwLock<Option<QuoteBatch>>,
}

impl RefreshTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a new refresh, superseding any still in flight. Returns the
	/// generation token the resulting batch must carry to be publishable.
	pub fn begin(&self) -> u64 {
		self.current.fetch_add(1, Ordering::SeqCst) + 1
	}

	/// Generation of the newest started refresh
	pub fn current_generation(&self) -> u64 {
		self.current.load(Ordering::SeqCst)
	}

	/// Publish a finished batch unless its refresh has been superseded.
	/// Returns whether the batch became the latest observable result.
	pub fn try_publish(&self, batch: QuoteBatch) -> bool {
		let mut latest = match self.latest.write() {
			Ok(guard) => guard,
			// A poisoned lock means a writer panicked mid-publish; the stored
			// batch is still a complete value, so keep serving it and drop
			// this one.
			Err(_) => return false,
		};

		// Checked under the write lock so a slower, older refresh can never
		// overwrite a newer published batch.
		if batch.generation != self.current.load(Ordering::SeqCst) {
			return false;
		}

		*latest = Some(batch);
		true
	}

	/// Latest surviving batch, if any refresh has completed unsuperseded
	pub fn latest(&self) -> Option<QuoteBatch> {
		self.latest.read().ok().and_then(|guard| guard.clone())
	}
}
