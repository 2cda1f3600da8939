//! Quote batch and API response models

use crate::providers::AppStoreUrls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One provider's result within a batch.
///
/// Invariant: `rate` is either a strictly positive finite float or `None`;
/// never zero, negative, NaN or infinite. A `None` rate carries an optional
/// diagnostic describing which failure collapsed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderQuote {
	pub provider_name: String,
	pub rate: Option<f64>,
	pub logo_url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub diagnostic: Option<String>,
}

/// The complete, fixed-order result of one aggregation cycle.
///
/// Length equals the number of registered adapters and ordering is adapter
/// registration order, independent of completion order. A batch is immutable
/// once produced and is entirely replaced by the next refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBatch {
	pub quotes: Vec<ProviderQuote>,
	/// Monotonic refresh generation this batch was produced for
	pub generation: u64,
	pub created_at: DateTime<Utc>,
	pub duration_ms: u64,
}

impl QuoteBatch {
	/// Number of providers with a resolved rate
	pub fn resolved_count(&self) -> usize {
		self.quotes.iter().filter(|q| q.rate.is_some()).count()
	}
}

/// Aggregation run statistics returned alongside the rates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationMetadata {
	pub generation: u64,
	pub duration_ms: u64,
	pub providers_queried: usize,
	pub providers_resolved: usize,
	pub created_at: DateTime<Utc>,
}

/// One display-ranked entry of the API response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
	pub provider_name: String,
	pub rate: Option<f64>,
	pub logo_url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub app_store_urls: Option<AppStoreUrls>,
}

/// API response body: the ranked rate list plus run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesResponse {
	pub rates: Vec<RateEntry>,
	/// Best available per-unit rate, when at least one provider resolved
	#[serde(skip_serializing_if = "Option::is_none")]
	pub best_rate: Option<f64>,
	pub metadata: AggregationMetadata,
}

impl RatesResponse {
	/// Assemble a response from a batch's metadata and a display-ranked list
	/// of entries. The first ranked entry with a rate is the best offer.
	pub fn from_ranked(batch: &QuoteBatch, rates: Vec<RateEntry>) -> Self {
		let best_rate = rates.iter().find_map(|entry| entry.rate);
		Self {
			best_rate,
			metadata: AggregationMetadata {
				generation: batch.generation,
				duration_ms: batch.duration_ms,
				providers_queried: batch.quotes.len(),
				providers_resolved: batch.resolved_count(),
				created_at: batch.created_at,
			},
			rates,
		}
	}
}
