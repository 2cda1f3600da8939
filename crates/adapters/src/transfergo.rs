//! TransferGo adapter
//!
//! Booking quotes endpoint; quoted with a 100-unit send amount for pricing
//! stability, but the response carries a rate field so no rescaling applies.

use async_trait::async_trait;
use remit_types::{rate, AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::transport::{ensure_success, ProxyClient};

const PROBE_AMOUNT: &str = "100";

#[derive(Debug)]
pub struct TransferGoAdapter {
	info: ProviderInfo,
	client: ProxyClient,
	base_url: String,
}

impl TransferGoAdapter {
	pub const DEFAULT_BASE_URL: &'static str = "https://my.transfergo.com";

	pub fn new(client: ProxyClient) -> Self {
		Self::with_base_url(client, Self::DEFAULT_BASE_URL)
	}

	pub fn with_base_url(client: ProxyClient, base_url: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::new("TransferGo", "transfergo.com")
				.with_store_ids("com.transfergo.android", "id1110641576"),
			client,
			base_url: base_url.into(),
		}
	}
}

#[async_trait]
impl ProviderAdapter for TransferGoAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64> {
		let url = Url::parse_with_params(
			&format!("{}/api/booking/quotes", self.base_url),
			&[
				(
					"fromCountryCode",
					request.source_currency.country_iso2().to_string(),
				),
				(
					"toCountryCode",
					request.target_currency.country_iso2().to_string(),
				),
				("fromCurrencyCode", request.source_currency.to_string()),
				("toCurrencyCode", request.target_currency.to_string()),
				("amount", PROBE_AMOUNT.to_string()),
				("calculationBase", "sendAmount".to_string()),
				("business", "0".to_string()),
			],
		)
		.map_err(|_| AdapterError::parse("booking quotes url"))?;
		debug!("requesting TransferGo booking quote");

		let response = ensure_success(self.client.get(url.as_str()).send().await?)?;
		let body: Value = response.json().await?;

		let raw = body
			.pointer("/options/0/rate/value")
			.ok_or_else(|| AdapterError::parse("options[0].rate.value"))?;
		rate::normalize(raw).ok_or_else(|| AdapterError::validation(raw))
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
	async fn test_first_option_rate_extracted() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/booking/quotes"))
			.and(query_param("fromCountryCode", "FR"))
			.and(query_param("toCountryCode", "TR"))
			.and(query_param("calculationBase", "sendAmount"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"options": [
					{"rate": {"value": "48.90"}},
					{"rate": {"value": "48.20"}}
				]
			})))
			.mount(&server)
			.await;

		let adapter =
			TransferGoAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let rate = adapter
			.quote(&QuoteRequest::unit(SendCurrency::EUR, ReceiveCurrency::TRY))
			.await
			.unwrap();
		assert_eq!(rate, 48.90);
	}

	#[tokio::test]
	async fn test_empty_options_is_parse_failure() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/booking/quotes"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({"options": []})))
			.mount(&server)
			.await;

		let adapter =
			TransferGoAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let err = adapter
			.quote(&QuoteRequest::unit(SendCurrency::CAD, ReceiveCurrency::COP))
			.await
			.unwrap_err();
		assert!(matches!(err, AdapterError::Parse { .. }));
	}
}
