//! Rate aggregation handlers

use axum::{extract::State, http::StatusCode, Json};
use remit_service::ranking;
use remit_types::{QuoteBatch, QuoteRequest, RateEntry, RatesResponse};
use tracing::{debug, warn};

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;

/// POST /api/v1/rates: run a fresh aggregation cycle for the requested
/// corridor and return the ranked result.
///
/// Each call starts a new refresh generation; if a newer refresh begins
/// while this one is in flight, this batch is still returned to its caller
/// but is not published as the latest observable result.
pub async fn post_rates(
	State(state): State<AppState>,
	Json(request): Json<QuoteRequest>,
) -> Result<Json<RatesResponse>, (StatusCode, Json<ErrorResponse>)> {
	if let Err(err) = request.validate() {
		return Err((
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new("VALIDATION_ERROR", err.to_string())),
		));
	}

	debug!(
		source = %request.source_currency,
		target = %request.target_currency,
		"rate aggregation requested"
	);

	let generation = state.refresh_tracker.begin();
	let batch = state
		.aggregator
		.fetch_rates(request, generation)
		.await
		.map_err(|err| {
			warn!(error = %err, "rate aggregation failed");
			(
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("AGGREGATION_ERROR", err.to_string())),
			)
		})?;

	if !state.refresh_tracker.try_publish(batch.clone()) {
		debug!(generation, "batch superseded by a newer refresh");
	}

	Ok(Json(ranked_response(&state, &batch)))
}

/// GET /api/v1/rates/latest: the newest published batch, ranked. Returns
/// 404 until the first refresh has completed unsuperseded.
pub async fn get_latest_rates(
	State(state): State<AppState>,
) -> Result<Json<RatesResponse>, (StatusCode, Json<ErrorResponse>)> {
	match state.refresh_tracker.latest() {
		Some(batch) => Ok(Json(ranked_response(&state, &batch))),
		None => Err((
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"NOT_FOUND",
				"no rate batch has been published yet",
			)),
		)),
	}
}

fn ranked_response(state: &AppState, batch: &QuoteBatch) -> RatesResponse {
	let rates: Vec<RateEntry> = ranking::rank(batch)
		.into_iter()
		.map(|quote| RateEntry {
			app_store_urls: state.aggregator.app_store_urls(&quote.provider_name),
			provider_name: quote.provider_name,
			rate: quote.rate,
			logo_url: quote.logo_url,
		})
		.collect();
	RatesResponse::from_ranked(batch, rates)
}
