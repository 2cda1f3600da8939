//! Ria Money Transfer adapter
//!
//! Public transfer calculator; expects a browser-shaped header set and a
//! selections body. The calculator misprices unit amounts, so 1 is promoted
//! to a 100-unit probe; the response carries an exchange-rate field, so no
//! rescaling applies. USD sends additionally require a state and zip code.

use async_trait::async_trait;
use remit_types::{
	rate, AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest, SendCurrency,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::transport::{ensure_success, ProxyClient};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

#[derive(Debug)]
pub struct RiaAdapter {
	info: ProviderInfo,
	client: ProxyClient,
	base_url: String,
}

impl RiaAdapter {
	pub const DEFAULT_BASE_URL: &'static str = "https://public.riamoneytransfer.com";

	pub fn new(client: ProxyClient) -> Self {
		Self::with_base_url(client, Self::DEFAULT_BASE_URL)
	}

	pub fn with_base_url(client: ProxyClient, base_url: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::new("Ria Money Transfer", "riamoneytransfer.com")
				.with_store_ids("com.ria.moneytransfer", "id704301633"),
			client,
			base_url: base_url.into(),
		}
	}
}

#[async_trait]
impl ProviderAdapter for RiaAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64> {
		let url = format!("{}/MoneyTransferCalculator/Calculate", self.base_url);

		// Unit amounts get mispriced; probe with 100 instead.
		let calc_amount = if request.amount == 1.0 {
			100.0
		} else {
			request.amount
		};

		let mut selections = json!({
			"countryTo": request.target_currency.country_iso2(),
			"amountFrom": calc_amount,
			"currencyFrom": request.source_currency,
			"currencyTo": request.target_currency,
			"paymentMethod": "DebitCard",
			"deliveryMethod": "BankDeposit",
			"shouldCalcAmountFrom": false,
			"shouldCalcVariableRates": true,
			"promoId": 0,
			"countryFrom": request.source_currency.country_iso2(),
		});

		if request.source_currency == SendCurrency::USD {
			selections["stateFrom"] = json!("NY");
			selections["zipCodeFrom"] = json!("10001");
		}

		debug!(amount = calc_amount, "requesting Ria calculation");

		let response = ensure_success(
			self.client
				.post(&url)
				.header("Accept", "*/*")
				.header("AppType", "2")
				.header("AppVersion", "4.0")
				.header("Client-Type", "PublicSite")
				.header("Origin", "https://www.riamoneytransfer.com")
				.header("Referer", "https://www.riamoneytransfer.com/")
				.header("User-Agent", USER_AGENT)
				.json(&json!({"selections": selections}))
				.send()
				.await?,
		)?;
		let body: Value = response.json().await?;

		let raw = body
			.pointer("/model/transferDetails/calculations/exchangeRate")
			.ok_or_else(|| AdapterError::parse("model.transferDetails.calculations.exchangeRate"))?;
		rate::normalize(raw).ok_or_else(|| AdapterError::validation(raw))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use remit_types::ReceiveCurrency;
	use wiremock::matchers::{body_partial_json, header, method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn calculation_response(rate: f64) -> Value {
		json!({
			"model": {"transferDetails": {"calculations": {"exchangeRate": rate}}}
		})
	}

	#[tokio::test]
	async fn test_unit_amount_promoted_to_probe() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/MoneyTransferCalculator/Calculate"))
			.and(header("Client-Type", "PublicSite"))
			.and(body_partial_json(json!({
				"selections": {"amountFrom": 100.0, "currencyTo": "TND", "countryFrom": "CA"}
			})))
			.respond_with(ResponseTemplate::new(200).set_body_json(calculation_response(3.27)))
			.mount(&server)
			.await;

		let adapter = RiaAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let rate = adapter
			.quote(&QuoteRequest::unit(SendCurrency::CAD, ReceiveCurrency::TND))
			.await
			.unwrap();
		assert_eq!(rate, 3.27);
	}

	#[tokio::test]
	async fn test_usd_adds_state_and_zip() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/MoneyTransferCalculator/Calculate"))
			.and(body_partial_json(json!({
				"selections": {"countryFrom": "US", "stateFrom": "NY", "zipCodeFrom": "10001"}
			})))
			.respond_with(ResponseTemplate::new(200).set_body_json(calculation_response(17.1)))
			.mount(&server)
			.await;

		let adapter = RiaAdapter::with_base_url(ProxyClient::direct(2_000).unwrap(), server.uri());
		let rate = adapter
			.quote(&QuoteRequest::unit(SendCurrency::USD, ReceiveCurrency::MXN))
			.await
			.unwrap();
		assert_eq!(rate, 17.1);
	}
}
