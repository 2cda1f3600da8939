//! Paysend adapter
//!
//! Marketing-site calculator addressed by country slugs
//! (`send-money/from-{slug}-to-{slug}`). USD uses a distinct long slug and a
//! numeric currency code on the wire. Paysend does not serve USD→TND; that
//! corridor short-circuits without issuing a call.

use async_trait::async_trait;
use remit_types::{
	rate, AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest,
	ReceiveCurrency, SendCurrency,
};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::transport::{ensure_success, ProxyClient};

#[derive(Debug)]
pub struct PaysendAdapter {
	info: ProviderInfo,
	client: ProxyClient,
	base_url: String,
}

impl PaysendAdapter {
	pub const DEFAULT_BASE_URL: &'static str = "https://paysend.com";

	pub fn new(client: ProxyClient) -> Self {
		Self::with_base_url(client, Self::DEFAULT_BASE_URL)
	}

	pub fn with_base_url(client: ProxyClient, base_url: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::new("Paysend", "paysend.com")
				.with_store_ids("com.paysend.app", "id1140130413"),
			client,
			base_url: base_url.into(),
		}
	}

	fn source_slug(source: SendCurrency) -> &'static str {
		match source {
			SendCurrency::USD => "the-united-states-of-america",
			other => other.country_slug(),
		}
	}

	fn source_currency_param(source: SendCurrency) -> String {
		match source {
			// The endpoint only accepts USD by its numeric code.
			SendCurrency::USD => SendCurrency::USD.country_numeric().to_string(),
			other => other.to_string(),
		}
	}
}

#[async_trait]
impl ProviderAdapter for PaysendAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64> {
		if request.source_currency == SendCurrency::USD
			&& request.target_currency == ReceiveCurrency::TND
		{
			return Err(AdapterError::CorridorUnsupported {
				send: request.source_currency,
				target: request.target_currency,
			});
		}

		let url = Url::parse_with_params(
			&format!(
				"{}/api/en-ca/send-money/from-{}-to-{}",
				self.base_url,
				Self::source_slug(request.source_currency),
				request.target_currency.country_slug()
			),
			&[
				("isFrom", "true".to_string()),
				(
					"fromCurrency",
					Self::source_currency_param(request.source_currency),
				),
				("toCurrency", request.target_currency.to_string()),
			],
		)
		.map_err(|_| AdapterError::parse("send-money url"))?;
		debug!("requesting Paysend calculator");

		let response = ensure_success(self.client.post(url.as_str()).send().await?)?;
		let body: Value = response.json().await?;

		let raw = body
			.pointer("/commission/convertRate")
			.ok_or_else(|| AdapterError::parse("commission.convertRate"))?;
		rate::normalize(raw).ok_or_else(|| AdapterError::validation(raw))
	}
}
