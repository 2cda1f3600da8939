//! Core aggregation service logic

use chrono::Utc;
use futures::future::join_all;
use remit_adapters::AdapterRegistry;
use remit_types::{logo_url, AdapterError, AppStoreUrls, ProviderQuote, QuoteBatch, QuoteRequest};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

/// Failures of the aggregation run itself, as opposed to individual provider
/// failures, which collapse to empty slots and never fail a batch.
#[derive(Error, Debug)]
pub enum AggregatorError {
	#[error("no provider adapters registered")]
	NoProviders,
}

/// Service aggregating rates from all registered provider adapters.
pub struct AggregatorService {
	registry: Arc<AdapterRegistry>,
	per_provider_timeout_ms: u64,
}

impl AggregatorService {
	/// Create an aggregator over a fixed registry. The per-provider timeout
	/// bounds every adapter individually; total refresh latency is bounded by
	/// the slowest adapter, never the sum.
	pub fn new(registry: Arc<AdapterRegistry>, per_provider_timeout_ms: u64) -> Self {
		Self {
			registry,
			per_provider_timeout_ms,
		}
	}

	/// Number of registered providers; every batch has exactly this length
	pub fn provider_count(&self) -> usize {
		self.registry.len()
	}

	/// App-store deep links for a registered provider, when identifiers exist
	pub fn app_store_urls(&self, provider_name: &str) -> Option<AppStoreUrls> {
		self.registry
			.adapters()
			.iter()
			.find(|adapter| adapter.name() == provider_name)
			.and_then(|adapter| adapter.info().app_store_urls())
	}

	/// Run one aggregation cycle for the given request and refresh generation.
	///
	/// All adapters are invoked concurrently; each writes only its own
	/// registration-index slot, so batch ordering is deterministic and
	/// independent of completion order. Any adapter error, panic or timeout
	/// leaves that provider's slot empty and the rest of the batch intact. A
	/// batch where every provider came back empty is still a normal result.
	pub async fn fetch_rates(
		&self,
		request: QuoteRequest,
		generation: u64,
	) -> Result<QuoteBatch, AggregatorError> {
		if self.registry.is_empty() {
			return Err(AggregatorError::NoProviders);
		}

		let started = Instant::now();
		info!(
			source = %request.source_currency,
			target = %request.target_currency,
			providers = self.registry.len(),
			generation,
			"starting rate aggregation"
		);

		let tasks = (0..self.registry.len()).map(|index| {
			let registry = Arc::clone(&self.registry);
			let request = request.clone();
			let timeout_ms = self.per_provider_timeout_ms;

			tokio::spawn(async move {
				let adapter = &registry.adapters()[index];
				let provider = adapter.name().to_string();
				debug!(%provider, "requesting quote");

				match timeout(Duration::from_millis(timeout_ms), adapter.quote(&request)).await {
					Ok(Ok(rate)) => (index, Some(rate), None),
					Ok(Err(err)) => {
						warn!(%provider, error = %err, "provider quote failed");
						(index, None, Some(err.to_string()))
					},
					Err(_) => {
						warn!(%provider, timeout_ms, "provider timed out");
						let err = AdapterError::Timeout { timeout_ms };
						(index, None, Some(err.to_string()))
					},
				}
			})
		});

		// Preallocated, index-addressed slots: no append-on-completion races.
		let mut slots: Vec<(Option<f64>, Option<String>)> = vec![(None, None); self.registry.len()];
		for joined in join_all(tasks).await {
			match joined {
				Ok((index, rate, diagnostic)) => {
					if let Some(slot) = slots.get_mut(index) {
						*slot = (rate, diagnostic);
					}
				},
				// A panicked adapter task loses its slot content but must not
				// fail the batch; the slot stays empty.
				Err(err) => warn!(error = %err, "provider task panicked"),
			}
		}

		let quotes: Vec<ProviderQuote> = self
			.registry
			.adapters()
			.iter()
			.zip(slots)
			.map(|(adapter, (rate, diagnostic))| {
				let info = adapter.info();
				ProviderQuote {
					provider_name: info.name.clone(),
					rate,
					logo_url: logo_url(info),
					diagnostic,
				}
			})
			.collect();

		let batch = QuoteBatch {
			generation,
			created_at: Utc::now(),
			duration_ms: started.elapsed().as_millis() as u64,
			quotes,
		};

		info!(
			resolved = batch.resolved_count(),
			providers = batch.quotes.len(),
			duration_ms = batch.duration_ms,
			"rate aggregation completed"
		);

		Ok(batch)
	}
}
