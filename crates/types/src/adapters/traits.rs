//! Core adapter trait for provider implementations

use super::AdapterResult;
use crate::providers::ProviderInfo;
use crate::quotes::QuoteRequest;
use async_trait::async_trait;
use std::fmt::Debug;

/// Uniform capability every provider adapter implements.
///
/// One variant exists per provider; each encapsulates that provider's request
/// construction, transport, response extraction and normalization. Adapters
/// return typed errors internally; the orchestrator reduces any error to an
/// empty slot, so nothing an adapter does can fail a batch. New providers are
/// added by implementing this trait and registering the variant, never by
/// touching the orchestrator or the presenter.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + Debug {
	/// Static identity of the provider this adapter speaks for
	fn info(&self) -> &ProviderInfo;

	/// Provider display name (unique within a registry)
	fn name(&self) -> &str {
		&self.info().name
	}

	/// Fetch the per-unit exchange rate for the requested corridor.
	///
	/// Implementations check corridor eligibility before issuing any call and
	/// pass every extracted value through rate normalization, so an `Ok` is
	/// always a strictly positive finite per-unit rate.
	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64>;
}
