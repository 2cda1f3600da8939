//! TapTap Send adapter
//!
//! Single fxRates document covering every corridor TapTap serves; requires
//! app-version and device headers. The corridor table doubles as the
//! eligibility check: a source or target absent from the document means the
//! corridor is not served.

use async_trait::async_trait;
use remit_types::{rate, AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest};
use serde_json::Value;
use tracing::debug;

use crate::transport::{ensure_success, ProxyClient};

#[derive(Debug)]
pub struct TapTapAdapter {
	info: ProviderInfo,
	client: ProxyClient,
	base_url: String,
}

impl TapTapAdapter {
	pub const DEFAULT_BASE_URL: &'static str = "https://api.taptapsend.com";

	pub fn new(client: ProxyClient) -> Self {
		Self::with_base_url(client, Self::DEFAULT_BASE_URL)
	}

	pub fn with_base_url(client: ProxyClient, base_url: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::new("TapTap Send", "taptapsend.com")
				.with_store_ids("com.taptapsend", "id1435198428"),
			client,
			base_url: base_url.into(),
		}
	}
}

#[async_trait]
impl ProviderAdapter for TapTapAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64> {
		let url = format!("{}/api/fxRates", self.base_url);
		debug!("requesting TapTap Send fxRates document");

		let response = ensure_success(
			self.client
				.get(&url)
				.header("appian-version", "web/2022-05-03.0")
				.header("x-device-id", "web")
				.header("x-device-model", "web")
				.send()
				.await?,
		)?;
		let body: Value = response.json().await?;

		let countries = body
			.pointer("/availableCountries")
			.and_then(Value::as_array)
			.ok_or_else(|| AdapterError::parse("availableCountries"))?;

		let source_code = request.source_currency.code();
		let target_code = request.target_currency.code();

		let source_country = countries
			.iter()
			.find(|c| c.pointer("/currency").and_then(Value::as_str) == Some(source_code))
			.ok_or(AdapterError::CorridorUnsupported {
				send: request.source_currency,
				target: request.target_currency,
			})?;

		let corridor = source_country
			.pointer("/corridors")
			.and_then(Value::as_array)
			.and_then(|corridors| {
				corridors
					.iter()
					.find(|c| c.pointer("/currency").and_then(Value::as_str) == Some(target_code))
			})
			.ok_or(AdapterError::CorridorUnsupported {
				send: request.source_currency,
				target: request.target_currency,
			})?;

		let raw = corridor
			.pointer("/fxRate")
			.ok_or_else(|| AdapterError::parse("fxRate"))?;
		rate::normalize(raw).ok_or_else(|| AdapterError::validation(raw))
	}
}
