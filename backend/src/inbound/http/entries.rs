//! Habit entry HTTP handlers.
//!
//! ```text
//! POST /add_entry
//! GET /entries
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, HabitReading, HabitReadingValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::HabitEntryResponse;
use crate::inbound::http::state::HttpState;

/// Acknowledgement returned by `/add_entry`.
pub const ENTRY_RECEIVED: &str = "Entry received successfully";

/// Request payload for submitting a daily reading.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AddEntryRequest {
    /// Hours slept, `0..=24`.
    #[schema(example = 7.5)]
    pub sleep_hours: f64,
    /// Litres of water drunk, `0..=20`.
    #[schema(example = 2.0)]
    pub water_litres: f64,
    /// Mood score, usually 1–5.
    #[schema(example = 4)]
    pub mood: i32,
}

/// Response payload for a recorded entry.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AddEntryResponse {
    #[schema(example = "Entry received successfully")]
    pub message: String,
    pub feedback: String,
}

fn validation_error(err: HabitReadingValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "value": err.value(),
        "code": "out_of_range",
    }))
}

impl TryFrom<AddEntryRequest> for HabitReading {
    type Error = Error;

    fn try_from(payload: AddEntryRequest) -> Result<Self, Self::Error> {
        HabitReading::new(payload.sleep_hours, payload.water_litres, payload.mood)
            .map_err(validation_error)
    }
}

/// Record a daily habit entry and return feedback for it.
#[utoipa::path(
    post,
    path = "/add_entry",
    request_body = AddEntryRequest,
    responses(
        (status = 200, description = "Entry stored", body = AddEntryResponse),
        (status = 422, description = "Malformed or out-of-range reading", body = ErrorEnvelope),
        (status = 500, description = "Entry could not be stored", body = ErrorEnvelope)
    ),
    tags = ["entries"],
    operation_id = "addEntry"
)]
#[post("/add_entry")]
pub async fn add_entry(
    state: web::Data<HttpState>,
    payload: web::Json<AddEntryRequest>,
) -> ApiResult<HttpResponse> {
    let reading = HabitReading::try_from(payload.into_inner())?;
    let recorded = state
        .entries
        .record_entry(reading)
        .await
        .map_err(|err| err.context("Failed to add entry"))?;

    Ok(HttpResponse::Ok().json(AddEntryResponse {
        message: ENTRY_RECEIVED.to_owned(),
        feedback: recorded.feedback,
    }))
}

/// List all entries, newest first.
#[utoipa::path(
    get,
    path = "/entries",
    responses(
        (status = 200, description = "Stored entries, newest first", body = [HabitEntryResponse]),
        (status = 500, description = "Entries could not be read", body = ErrorEnvelope)
    ),
    tags = ["entries"],
    operation_id = "listEntries"
)]
#[get("/entries")]
pub async fn list_entries(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let entries = state
        .entries_query
        .list_entries()
        .await
        .map_err(|err| err.context("Failed to get entries"))?;

    let body: Vec<HabitEntryResponse> = entries.iter().map(HabitEntryResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
#[path = "entries_tests.rs"]
mod tests;
