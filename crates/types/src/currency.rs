//! Currency corridor model
//!
//! The product serves a closed set of corridors: three send currencies and
//! six receive currencies. Provider protocols address countries in several
//! different vocabularies (ISO alpha-2, alpha-3, numeric, URL slugs), so each
//! currency exposes the projections its anchor country is known by.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors for currency parsing
#[derive(Error, Debug)]
pub enum CurrencyError {
	#[error("unsupported send currency: {0}")]
	UnsupportedSend(String),

	#[error("unsupported receive currency: {0}")]
	UnsupportedReceive(String),
}

/// Currencies a transfer can be funded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SendCurrency {
	CAD,
	USD,
	EUR,
}

/// Currencies a transfer can pay out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiveCurrency {
	TND,
	MAD,
	MXN,
	INR,
	TRY,
	COP,
}

impl SendCurrency {
	/// All send currencies, in display order
	pub const ALL: [SendCurrency; 3] = [SendCurrency::CAD, SendCurrency::USD, SendCurrency::EUR];

	/// Currency code as it appears on the wire
	pub fn code(&self) -> &'static str {
		match self {
			SendCurrency::CAD => "CAD",
			SendCurrency::USD => "USD",
			SendCurrency::EUR => "EUR",
		}
	}

	/// ISO 3166-1 alpha-2 code of the anchor country
	pub fn country_iso2(&self) -> &'static str {
		match self {
			SendCurrency::CAD => "CA",
			SendCurrency::USD => "US",
			SendCurrency::EUR => "FR",
		}
	}

	/// ISO 3166-1 alpha-3 code of the anchor country
	pub fn country_iso3(&self) -> &'static str {
		match self {
			SendCurrency::CAD => "CAN",
			SendCurrency::USD => "USA",
			SendCurrency::EUR => "FRA",
		}
	}

	/// ISO 3166-1 numeric code of the anchor country
	pub fn country_numeric(&self) -> u32 {
		match self {
			SendCurrency::CAD => 124,
			SendCurrency::USD => 840,
			SendCurrency::EUR => 250,
		}
	}

	/// Country slug as used in marketing-site URL schemes
	pub fn country_slug(&self) -> &'static str {
		match self {
			SendCurrency::CAD => "canada",
			SendCurrency::USD => "usa",
			SendCurrency::EUR => "france",
		}
	}
}

impl ReceiveCurrency {
	/// All receive currencies, in display order
	pub const ALL: [ReceiveCurrency; 6] = [
		ReceiveCurrency::TND,
		ReceiveCurrency::MAD,
		ReceiveCurrency::MXN,
		ReceiveCurrency::INR,
		ReceiveCurrency::TRY,
		ReceiveCurrency::COP,
	];

	/// Currency code as it appears on the wire
	pub fn code(&self) -> &'static str {
		match self {
			ReceiveCurrency::TND => "TND",
			ReceiveCurrency::MAD => "MAD",
			ReceiveCurrency::MXN => "MXN",
			ReceiveCurrency::INR => "INR",
			ReceiveCurrency::TRY => "TRY",
			ReceiveCurrency::COP => "COP",
		}
	}

	/// ISO 3166-1 alpha-2 code of the payout country
	pub fn country_iso2(&self) -> &'static str {
		match self {
			ReceiveCurrency::TND => "TN",
			ReceiveCurrency::MAD => "MA",
			ReceiveCurrency::MXN => "MX",
			ReceiveCurrency::INR => "IN",
			ReceiveCurrency::TRY => "TR",
			ReceiveCurrency::COP => "CO",
		}
	}

	/// ISO 3166-1 alpha-3 code of the payout country
	pub fn country_iso3(&self) -> &'static str {
		match self {
			ReceiveCurrency::TND => "TUN",
			ReceiveCurrency::MAD => "MAR",
			ReceiveCurrency::MXN => "MEX",
			ReceiveCurrency::INR => "IND",
			ReceiveCurrency::TRY => "TUR",
			ReceiveCurrency::COP => "COL",
		}
	}

	/// ISO 3166-1 numeric code of the payout country
	pub fn country_numeric(&self) -> u32 {
		match self {
			ReceiveCurrency::TND => 788,
			ReceiveCurrency::MAD => 504,
			ReceiveCurrency::MXN => 484,
			ReceiveCurrency::INR => 356,
			ReceiveCurrency::TRY => 792,
			ReceiveCurrency::COP => 170,
		}
	}

	/// Country slug as used in marketing-site URL schemes
	pub fn country_slug(&self) -> &'static str {
		match self {
			ReceiveCurrency::TND => "tunisia",
			ReceiveCurrency::MAD => "morocco",
			ReceiveCurrency::MXN => "mexico",
			ReceiveCurrency::INR => "india",
			ReceiveCurrency::TRY => "turkey",
			ReceiveCurrency::COP => "colombia",
		}
	}
}

impl fmt::Display for SendCurrency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl fmt::Display for ReceiveCurrency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl std::str::FromStr for SendCurrency {
	type Err = CurrencyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"CAD" => Ok(SendCurrency::CAD),
			"USD" => Ok(SendCurrency::USD),
			"EUR" => Ok(SendCurrency::EUR),
			other => Err(CurrencyError::UnsupportedSend(other.to_string())),
		}
	}
}

impl std::str::FromStr for ReceiveCurrency {
	type Err = CurrencyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"TND" => Ok(ReceiveCurrency::TND),
			"MAD" => Ok(ReceiveCurrency::MAD),
			"MXN" => Ok(ReceiveCurrency::MXN),
			"INR" => Ok(ReceiveCurrency::INR),
			"TRY" => Ok(ReceiveCurrency::TRY),
			"COP" => Ok(ReceiveCurrency::COP),
			other => Err(CurrencyError::UnsupportedReceive(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_send_currency_country_projections() {
		assert_eq!(SendCurrency::CAD.country_iso2(), "CA");
		assert_eq!(SendCurrency::CAD.country_iso3(), "CAN");
		assert_eq!(SendCurrency::USD.country_numeric(), 840);
		assert_eq!(SendCurrency::EUR.country_slug(), "france");
	}

	#[test]
	fn test_receive_currency_country_projections() {
		assert_eq!(ReceiveCurrency::TND.country_iso3(), "TUN");
		assert_eq!(ReceiveCurrency::INR.country_iso2(), "IN");
		assert_eq!(ReceiveCurrency::COP.country_numeric(), 170);
		assert_eq!(ReceiveCurrency::TRY.country_slug(), "turkey");
	}

	#[test]
	fn test_currency_serde_roundtrip() {
		let json = serde_json::to_string(&SendCurrency::USD).unwrap();
		assert_eq!(json, "\"USD\"");
		let parsed: ReceiveCurrency = serde_json::from_str("\"MXN\"").unwrap();
		assert_eq!(parsed, ReceiveCurrency::MXN);
	}

	#[test]
	fn test_unknown_currency_rejected() {
		assert!(serde_json::from_str::<SendCurrency>("\"GBP\"").is_err());
		assert!("EGP".parse::<ReceiveCurrency>().is_err());
	}

	#[test]
	fn test_every_currency_code_parses_back() {
		for currency in SendCurrency::ALL {
			assert_eq!(currency.code().parse::<SendCurrency>().unwrap(), currency);
		}
		for currency in ReceiveCurrency::ALL {
			assert_eq!(
				currency.code().parse::<ReceiveCurrency>().unwrap(),
				currency
			);
		}
	}
}
