//! Internal diagnostics endpoint.

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::HABIT_ENTRY_COLUMNS;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::HabitEntryResponse;
use crate::inbound::http::state::HttpState;

/// Body of `/debug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DebugResponse {
    #[schema(example = 3)]
    pub database_records: u64,
    pub model_trained: bool,
    /// Column names, empty when the store holds no rows.
    pub data_columns: Vec<String>,
    /// Up to three most recent entries, newest first.
    pub sample_data: Vec<HabitEntryResponse>,
}

/// Report store size, model status and a sample of recent rows.
#[utoipa::path(
    get,
    path = "/debug",
    responses(
        (status = 200, description = "Diagnostic snapshot", body = DebugResponse),
        (status = 500, description = "Snapshot could not be taken", body = ErrorEnvelope)
    ),
    tags = ["health"],
    operation_id = "debugInfo"
)]
#[get("/debug")]
pub async fn debug_info(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let snapshot = state
        .diagnostics
        .snapshot()
        .await
        .map_err(|err| err.context("Debug info failed"))?;

    let data_columns = if snapshot.record_count == 0 {
        Vec::new()
    } else {
        HABIT_ENTRY_COLUMNS.iter().map(|c| (*c).to_owned()).collect()
    };

    Ok(HttpResponse::Ok().json(DebugResponse {
        database_records: snapshot.record_count,
        model_trained: snapshot.model_loaded,
        data_columns,
        sample_data: snapshot.sample.iter().map(HabitEntryResponse::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{DiagnosticsSnapshot, MockDiagnosticsQuery};
    use crate::domain::{Error, HabitEntry, HabitEntryId, HabitReading};
    use crate::inbound::http::test_utils::{call, state_with_diagnostics};
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn entry(id: i64) -> HabitEntry {
        HabitEntry::new(
            HabitEntryId::new(id),
            HabitReading::from_stored(7.0, 2.0, 4),
            Utc.with_ymd_and_hms(2026, 5, 1, id as u32, 0, 0)
                .single()
                .expect("valid timestamp"),
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn populated_store_lists_columns_and_sample() {
        let mut diagnostics = MockDiagnosticsQuery::new();
        diagnostics.expect_snapshot().times(1).returning(|| {
            Ok(DiagnosticsSnapshot {
                record_count: 5,
                model_loaded: false,
                sample: vec![entry(5), entry(4), entry(3)],
            })
        });

        let res = call(
            state_with_diagnostics(diagnostics),
            TestRequest::get().uri("/debug"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: DebugResponse = test::read_body_json(res).await;
        assert_eq!(body.database_records, 5);
        assert!(!body.model_trained);
        assert_eq!(
            body.data_columns,
            vec!["id", "sleep_hours", "water_litres", "mood", "timestamp"]
        );
        let ids: Vec<i64> = body.sample_data.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_store_has_no_columns() {
        let mut diagnostics = MockDiagnosticsQuery::new();
        diagnostics.expect_snapshot().times(1).returning(|| {
            Ok(DiagnosticsSnapshot {
                record_count: 0,
                model_loaded: true,
                sample: Vec::new(),
            })
        });

        let res = call(
            state_with_diagnostics(diagnostics),
            TestRequest::get().uri("/debug"),
        )
        .await;

        let body: DebugResponse = test::read_body_json(res).await;
        assert_eq!(body.database_records, 0);
        assert!(body.model_trained);
        assert!(body.data_columns.is_empty());
        assert!(body.sample_data.is_empty());
    }

    #[rstest]
    #[actix_web::test]
    async fn snapshot_faults_use_debug_context() {
        let mut diagnostics = MockDiagnosticsQuery::new();
        diagnostics
            .expect_snapshot()
            .times(1)
            .returning(|| Err(Error::internal("relation missing")));

        let res = call(
            state_with_diagnostics(diagnostics),
            TestRequest::get().uri("/debug"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let envelope: ErrorEnvelope = test::read_body_json(res).await;
        assert_eq!(envelope.error_message, "Debug info failed: relation missing");
    }
}
