//! Wise adapter
//!
//! Wise's comparison gateway quotes what a fixed 100-unit send receives; the
//! per-unit rate is recovered by dividing the received amount by the probe.
//! The response lists many providers; only the entry named "Wise" is ours.

use async_trait::async_trait;
use remit_types::{rate, AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::transport::{ensure_success, ProxyClient};

/// Send amount quoted instead of 1; the gateway returns a received *amount*,
/// not a rate, so the result is divided back down by this.
const PROBE_AMOUNT: f64 = 100.0;

#[derive(Debug)]
pub struct WiseAdapter {
	info: ProviderInfo,
	client: ProxyClient,
	base_url: String,
}

impl WiseAdapter {
	pub const DEFAULT_BASE_URL: &'static str = "https://wise.com";

	pub fn new(client: ProxyClient) -> Self {
		Self::with_base_url(client, Self::DEFAULT_BASE_URL)
	}

	pub fn with_base_url(client: ProxyClient, base_url: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::new("Wise", "wise.com")
				.with_store_ids("com.transferwise.android", "id612261027"),
			client,
			base_url: base_url.into(),
		}
	}
}

#[async_trait]
impl ProviderAdapter for WiseAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64> {
		let url = Url::parse_with_params(
			&format!("{}/gateway/v4/comparisons", self.base_url),
			&[
				("sendAmount", PROBE_AMOUNT.to_string()),
				("sourceCurrency", request.source_currency.to_string()),
				("targetCurrency", request.target_currency.to_string()),
				(
					"sourceCountry",
					request.source_currency.country_iso2().to_string(),
				),
				("payInMethod", "BANK_TRANSFER".to_string()),
			],
		)
		.map_err(|_| AdapterError::parse("comparisons url"))?;
		debug!("requesting Wise comparison");

		let response = ensure_success(self.client.get(url.as_str()).send().await?)?;
		let body: Value = response.json().await?;

		let providers = body
			.pointer("/providers")
			.and_then(Value::as_array)
			.ok_or_else(|| AdapterError::parse("providers"))?;

		let wise = providers
			.iter()
			.find(|p| p.pointer("/name").and_then(Value::as_str) == Some("Wise"))
			.ok_or_else(|| AdapterError::parse("providers[name=Wise]"))?;

		let raw = wise
			.pointer("/quotes/0/receivedAmount")
			.ok_or_else(|| AdapterError::parse("quotes[0].receivedAmount"))?;
		let received = rate::normalize(raw).ok_or_else(|| AdapterError::validation(raw))?;

		Ok(received / PROBE_AMOUNT)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use remit_types::{ReceiveCurrency, SendCurrency};
	use serde_json::json;
	use wiremock::matchers::{method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	#[tokio::test]
	async fn test_received_amount_divided_by_probe() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/gateway/v4/comparisons"))
			.and(query_param("sendAmount", "100"))
			.and(query_param("payInMethod", "BANK_TRANSFER"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"providers": [
					{"name": "CompetitorCo", "quotes": [{"receivedAmount": 320.0}]},
					{"name": "Wise", "quotes": [{"receivedAmount": 330.40}]}
				]
			})))
			.mount(&server)
			.await;

		let adapter = WiseAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let rate = adapter
			.quote(&QuoteRequest::unit(SendCurrency::CAD, ReceiveCurrency::TND))
			.await
			.unwrap();
		assert!((rate - 3.304).abs() < 1e-9);
	}

	#[tokio::test]
	async fn test_missing_wise_entry_is_parse_failure() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/gateway/v4/comparisons"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"providers": [{"name": "CompetitorCo", "quotes": [{"receivedAmount": 320.0}]}]
			})))
			.mount(&server)
			.await;

		let adapter = WiseAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let err = adapter
			.quote(&QuoteRequest::unit(SendCurrency::EUR, ReceiveCurrency::MAD))
			.await
			.unwrap_err();
		assert!(matches!(err, AdapterError::Parse { .. }));
	}
}
