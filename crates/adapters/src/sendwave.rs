//! SendWave adapter
//!
//! Public pricing endpoint; takes send/receive currencies plus lowercase
//! ISO alpha-2 countries and returns an effective exchange rate.

use async_trait::async_trait;
use remit_types::{rate, AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::transport::{ensure_success, ProxyClient};

#[derive(Debug)]
pub struct SendWaveAdapter {
	info: ProviderInfo,
	client: ProxyClient,
	base_url: String,
}

impl SendWaveAdapter {
	pub const DEFAULT_BASE_URL: &'static str = "https://app.sendwave.com";

	pub fn new(client: ProxyClient) -> Self {
		Self::with_base_url(client, Self::DEFAULT_BASE_URL)
	}

	pub fn with_base_url(client: ProxyClient, base_url: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::new("SendWave", "sendwave.com")
				.with_store_ids("com.mychime.waveremit.app", "id846717081"),
			client,
			base_url: base_url.into(),
		}
	}
}

#[async_trait]
impl ProviderAdapter for SendWaveAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64> {
		let url = Url::parse_with_params(
			&format!("{}/v2/pricing-public", self.base_url),
			&[
				("amountType", "SEND".to_string()),
				("receiveCurrency", request.target_currency.to_string()),
				("amount", request.amount.to_string()),
				("sendCurrency", request.source_currency.to_string()),
				(
					"sendCountryIso2",
					request.source_currency.country_iso2().to_lowercase(),
				),
				(
					"receiveCountryIso2",
					request.target_currency.country_iso2().to_lowercase(),
				),
			],
		)
		.map_err(|_| AdapterError::parse("pricing-public url"))?;
		debug!("requesting SendWave public pricing");

		let response = ensure_success(self.client.get(url.as_str()).send().await?)?;
		let body: Value = response.json().await?;

		let raw = body
			.pointer("/effectiveExchangeRate")
			.ok_or_else(|| AdapterError::parse("effectiveExchangeRate"))?;
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
	async fn test_lowercase_country_params_and_extraction() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/v2/pricing-public"))
			.and(query_param("sendCountryIso2", "ca"))
			.and(query_param("receiveCountryIso2", "ma"))
			.and(query_param("receiveCurrency", "MAD"))
			.respond_with(
				ResponseTemplate::new(200).set_body_json(json!({"effectiveExchangeRate": 7.42})),
			)
			.mount(&server)
			.await;

		let adapter =
			SendWaveAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let rate = adapter
			.quote(&QuoteRequest::unit(SendCurrency::CAD, ReceiveCurrency::MAD))
			.await
			.unwrap();
		assert_eq!(rate, 7.42);
	}

	#[tokio::test]
	async fn test_placeholder_zero_rate_rejected() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/v2/pricing-public"))
			.respond_with(
				ResponseTemplate::new(200).set_body_json(json!({"effectiveExchangeRate": 0})),
			)
			.mount(&server)
			.await;

		let adapter =
			SendWaveAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let err = adapter
			.quote(&QuoteRequest::unit(SendCurrency::EUR, ReceiveCurrency::TRY))
			.await
			.unwrap_err();
		assert!(matches!(err, AdapterError::Validation { .. }));
	}
}
