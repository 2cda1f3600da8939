//! Remitly adapter
//!
//! Public calculator endpoint keyed by a "conduit" string pairing ISO-3166
//! alpha-3 countries with currency codes, e.g. `CAN:CAD-TUN:TND`. Returns the
//! base exchange rate directly, so the request amount is forwarded as-is.

use async_trait::async_trait;
use remit_types::{rate, AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest};
use serde_json::Value;
use tracing::debug;

use crate::transport::{ensure_success, ProxyClient};

#[derive(Debug)]
pub struct RemitlyAdapter {
	info: ProviderInfo,
	client: ProxyClient,
	base_url: String,
}

impl RemitlyAdapter {
	pub const DEFAULT_BASE_URL: &'static str = "https://api.remitly.io";

	pub fn new(client: ProxyClient) -> Self {
		Self::with_base_url(client, Self::DEFAULT_BASE_URL)
	}

	pub fn with_base_url(client: ProxyClient, base_url: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::new("Remitly", "remitly.com")
				.with_store_ids("com.remitly.androidapp", "id674258465"),
			client,
			base_url: base_url.into(),
		}
	}
}

#[async_trait]
impl ProviderAdapter for RemitlyAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64> {
		let conduit = format!(
			"{}:{}-{}:{}",
			request.source_currency.country_iso3(),
			request.source_currency,
			request.target_currency.country_iso3(),
			request.target_currency
		);
		let url = format!(
			"{}/v3/calculator/estimate?conduit={}&anchor=SEND&amount={}",
			self.base_url, conduit, request.amount
		);
		debug!(conduit, "requesting Remitly estimate");

		let response = ensure_success(self.client.get(&url).send().await?)?;
		let body: Value = response.json().await?;

		let raw = body
			.pointer("/estimate/exchange_rate/base_rate")
			.ok_or_else(|| AdapterError::parse("estimate.exchange_rate.base_rate"))?;
		rate::normalize(raw).ok_or_else(|| AdapterError::validation(raw))
	}
}
