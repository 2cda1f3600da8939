//! Display ranking over a quote batch

use remit_types::{ProviderQuote, QuoteBatch};
use std::cmp::Ordering;

/// Stable-sort a batch for display: resolved rates first in descending
/// order, unresolved entries after them in their original registration
/// order. The first entry of the result, if resolved, is the best offer.
pub fn rank(batch: &QuoteBatch) -> Vec<ProviderQuote> {
	let mut ranked = batch.quotes.clone();
	ranked.sort_by(|a, b| match (a.rate, b.rate) {
		(Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	});
	ranked
}

#[cfg(test)]
mod tests {
	use super::*;
	use remit_types::chrono::Utc;

	fn quote(name: &str, rate: Option<f64>) -> ProviderQuote {
		ProviderQuote {
			provider_name: name.to_string(),
			rate,
			logo_url: String::from("https://unavatar.io/example.com"),
			diagnostic: None,
		}
	}

	fn batch(quotes: Vec<ProviderQuote>) -> QuoteBatch {
		QuoteBatch {
			quotes,
			generation: 1,
			created_at: Utc::now(),
			duration_ms: 0,
		}
	}

	#[test]
	fn test_resolved_rates_first_descending_then_unresolved_stable() {
		let batch = batch(vec![
			quote("A", None),
			quote("B", Some(3.1)),
			quote("C", Some(2.9)),
			quote("D", None),
		]);

		let ranked = rank(&batch);
		let names: Vec<&str> = ranked.iter().map(|q| q.provider_name.as_str()).collect();
		assert_eq!(names, vec!["B", "C", "A", "D"]);
	}

	#[test]
	fn test_all_unresolved_keeps_registration_order() {
		let batch = batch(vec![quote("A", None), quote("B", None), quote("C", None)]);
		let ranked = rank(&batch);
		let names: Vec<&str> = ranked.iter().map(|q| q.provider_name.as_str()).collect();
		assert_eq!(names, vec!["A", "B", "C"]);
	}

	#[test]
	fn test_equal_rates_keep_registration_order() {
		let batch = batch(vec![
			quote("A", Some(2.0)),
			quote("B", Some(3.0)),
			quote("C", Some(2.0)),
		]);
		let ranked = rank(&batch);
		let names: Vec<&str> = ranked.iter().map(|q| q.provider_name.as_str()).collect();
		assert_eq!(names, vec!["B", "A", "C"]);
	}
}
