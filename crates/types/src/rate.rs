//! Rate normalization
//!
//! Providers return rates in wildly different shapes: bare numbers, quoted
//! strings with thousands separators, placeholder zeros when a corridor is
//! down. Normalization collapses all of that into "a strictly positive finite
//! float, or nothing" so that a placeholder zero and a missing field are
//! indistinguishable downstream.

use serde_json::Value;

/// Parse a raw string into a validated positive rate.
///
/// Strips `,` thousands separators and surrounding whitespace before parsing.
/// Returns `None` when the value does not parse, or parses to NaN, infinity,
/// zero or a negative number.
pub fn normalize_str(raw: &str) -> Option<f64> {
	let cleaned = raw.trim().replace(',', "");
	let parsed: f64 = cleaned.parse().ok()?;
	if parsed.is_finite() && parsed > 0.0 {
		Some(parsed)
	} else {
		None
	}
}

/// Normalize a raw JSON value of unknown shape into a validated positive rate.
///
/// Accepts numbers and strings; anything else (null, arrays, objects, bools)
/// is treated as missing data.
pub fn normalize(raw: &Value) -> Option<f64> {
	match raw {
		Value::Number(n) => {
			let v = n.as_f64()?;
			if v.is_finite() && v > 0.0 {
				Some(v)
			} else {
				None
			}
		},
		Value::String(s) => normalize_str(s),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_normalize_strips_thousands_separators() {
		assert_eq!(normalize_str("1,234.50"), Some(1234.50));
		assert_eq!(normalize(&json!("1,234.50")), Some(1234.50));
	}

	#[test]
	fn test_normalize_rejects_zero_and_negative() {
		assert_eq!(normalize_str("0"), None);
		assert_eq!(normalize_str("-3"), None);
		assert_eq!(normalize(&json!(0)), None);
		assert_eq!(normalize(&json!(-0.5)), None);
	}

	#[test]
	fn test_normalize_rejects_garbage() {
		assert_eq!(normalize_str("abc"), None);
		assert_eq!(normalize_str(""), None);
		assert_eq!(normalize(&Value::Null), None);
		assert_eq!(normalize(&json!({"rate": 1.2})), None);
		assert_eq!(normalize(&json!(true)), None);
	}

	#[test]
	fn test_normalize_accepts_plain_numbers() {
		assert_eq!(normalize(&json!(3.304)), Some(3.304));
		assert_eq!(normalize(&json!(21)), Some(21.0));
		assert_eq!(normalize_str(" 2.17 "), Some(2.17));
	}
}
