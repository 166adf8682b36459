//! Prediction handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::{risk_level, PredictionResponse};
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    pub city: Option<String>,
}

/// Predict cloudburst risk for a city.
///
/// Linear pipeline: validate input, fetch the city's weather record, scale
/// the feature vector, classify, map the label to a risk tier.
pub async fn predict(
    State(state): State<AppState>,
    Query(query): Query<PredictQuery>,
) -> AppResult<Json<PredictionResponse>> {
    // City keys are trimmed of surrounding whitespace and matched
    // case-sensitively; a blank parameter counts as missing.
    let city = match query.city.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => city,
        _ => return Err(AppError::MissingCityParameter),
    };

    let record = state
        .store
        .fetch(city)
        .await?
        .ok_or_else(|| AppError::NotFound("City data not found".to_string()))?;

    let scaled = state.scaler.transform(record.features());
    let label = state.classifier.predict(scaled)?;

    tracing::debug!(city, label, "prediction computed");

    Ok(Json(PredictionResponse {
        city: city.to_string(),
        risk_level: risk_level(label),
        probability: label,
    }))
}
