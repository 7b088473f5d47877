//! Chart image handlers.
//!
//! ```text
//! GET /chart/{sleep|water|mood}?t=<cache buster>
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{ChartField, ChartImage, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Query parameters accepted by chart endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChartParams {
    /// Client cache-busting counter; not used by the server.
    #[serde(default)]
    pub t: Option<i64>,
}

/// Render one habit field as a PNG line chart.
#[utoipa::path(
    get,
    path = "/chart/{selector}",
    params(
        ("selector" = String, Path, description = "One of `sleep`, `water`, `mood`"),
        ChartParams
    ),
    responses(
        (
            status = 200,
            description = "PNG line chart (`image/png`)",
            headers(("Cache-Control" = String, description = "Always no-store"))
        ),
        (status = 422, description = "Malformed query string", body = ErrorEnvelope),
        (status = 500, description = "Unknown selector or rendering failure", body = ErrorEnvelope)
    ),
    tags = ["charts"],
    operation_id = "getChart"
)]
#[get("/chart/{selector}")]
pub async fn chart(
    state: web::Data<HttpState>,
    selector: web::Path<String>,
    _params: web::Query<ChartParams>,
) -> ApiResult<HttpResponse> {
    let selector = selector.into_inner();
    let context = format!("Failed to generate {selector} chart");
    let field = ChartField::from_selector(&selector)
        .map_err(|err| Error::internal(err.to_string()).context(&context))?;

    let image = state
        .charts
        .render_chart(field)
        .await
        .map_err(|err| err.context(&context))?;

    Ok(HttpResponse::Ok()
        .content_type(ChartImage::CONTENT_TYPE)
        .insert_header(no_store_header())
        .body(image.into_bytes()))
}
