//! Profee adapter
//!
//! Terminal calculation endpoint addressed by ISO numeric country codes.
//! The response structure varies between deployments, so extraction tries
//! the known field paths in order.

use async_trait::async_trait;
use remit_types::{rate, AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest};
use serde_json::{json, Value};
use tracing::debug;

use crate::transport::{ensure_success, ProxyClient};

const PROBE_AMOUNT: u64 = 100;

/// Field paths observed across Profee API versions, tried in order
const RATE_PATHS: [&str; 3] = ["/payload/rate", "/data/rate", "/body/currencyRate/rate"];

#[derive(Debug)]
pub struct ProfeeAdapter {
	info: ProviderInfo,
	client: ProxyClient,
	base_url: String,
}

impl ProfeeAdapter {
	pub const DEFAULT_BASE_URL: &'static str = "https://terminal.profee.com";

	pub fn new(client: ProxyClient) -> Self {
		Self::with_base_url(client, Self::DEFAULT_BASE_URL)
	}

	pub fn with_base_url(client: ProxyClient, base_url: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::new("Profee", "profee.com")
				.with_store_ids("com.profee.wallet", "id1521832875"),
			client,
			base_url: base_url.into(),
		}
	}
}

#[async_trait]
impl ProviderAdapter for ProfeeAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64> {
		let url = format!("{}/api/v2/transfer/terminal/calculation", self.base_url);
		let payload = json!({
			"from": {
				"currency": request.source_currency,
				"amount": PROBE_AMOUNT,
				"country": request.source_currency.country_numeric(),
			},
			"to": {
				"currency": request.target_currency,
				"amount": null,
				"country": request.target_currency.country_numeric(),
			},
			"skipLimitValidation": true,
		});
		debug!("requesting Profee terminal calculation");

		let response = ensure_success(self.client.post(&url).json(&payload).send().await?)?;
		let body: Value = response.json().await?;

		// First path carrying a valid rate wins; a path that exists but holds
		// a placeholder falls through to the next.
		let raws: Vec<&Value> = RATE_PATHS
			.iter()
			.filter_map(|path| body.pointer(path))
			.collect();
		let first = *raws
			.first()
			.ok_or_else(|| AdapterError::parse("payload.rate | data.rate | body.currencyRate.rate"))?;
		raws.iter()
			.find_map(|raw| rate::normalize(raw))
			.ok_or_else(|| AdapterError::validation(first))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use remit_types::{ReceiveCurrency, SendCurrency};
	use wiremock::matchers::{body_partial_json, method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	#[tokio::test]
	async fn test_numeric_country_codes_in_body() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/api/v2/transfer/terminal/calculation"))
			.and(body_partial_json(json!({
				"from": {"currency": "EUR", "country": 250, "amount": 100},
				"to": {"currency": "TRY", "country": 792},
				"skipLimitValidation": true
			})))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({"payload": {"rate": 48.5}})))
			.mount(&server)
			.await;

		let adapter =
			ProfeeAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let rate = adapter
			.quote(&QuoteRequest::unit(SendCurrency::EUR, ReceiveCurrency::TRY))
			.await
			.unwrap();
		assert_eq!(rate, 48.5);
	}

	#[tokio::test]
	async fn test_placeholder_zero_falls_through_to_next_path() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/api/v2/transfer/terminal/calculation"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"payload": {"rate": 0},
				"data": {"rate": 21.04}
			})))
			.mount(&server)
			.await;

		let adapter =
			ProfeeAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let rate = adapter
			.quote(&QuoteRequest::unit(SendCurrency::CAD, ReceiveCurrency::MXN))
			.await
			.unwrap();
		assert_eq!(rate, 21.04);
	}

	#[tokio::test]
	async fn test_alternate_rate_paths_tried_in_order() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/api/v2/transfer/terminal/calculation"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"body": {"currencyRate": {"rate": "3.42"}}
			})))
			.mount(&server)
			.await;

		let adapter =
			ProfeeAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let rate = adapter
			.quote(&QuoteRequest::unit(SendCurrency::EUR, ReceiveCurrency::TND))
			.await
			.unwrap();
		assert_eq!(rate, 3.42);
	}
}
