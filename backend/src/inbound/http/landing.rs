//! Landing page handler serving the single-page client.

use std::io;
use std::path::Path;

use actix_web::{HttpResponse, get, web};
use cap_std::{ambient_authority, fs::Dir};
use tracing::error;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// File served at `/`, relative to the static directory.
pub const INDEX_FILE: &str = "index.html";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

fn read_index(static_dir: &Path) -> io::Result<String> {
    let dir = Dir::open_ambient_dir(static_dir, ambient_authority())?;
    dir.read_to_string(INDEX_FILE)
}

/// Serve `index.html` from the configured static directory.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String),
        (status = 500, description = "Landing page unreadable", body = ErrorEnvelope)
    ),
    tags = ["pages"],
    operation_id = "landingPage"
)]
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let static_dir = state.static_dir().to_path_buf();
    let html = web::block(move || read_index(&static_dir))
        .await
        .map_err(|err| Error::internal(err.to_string()))
        .and_then(|read| {
            read.map_err(|err| {
                error!(error = %err, path = %state.static_dir().display(), "index.html unreadable");
                Error::internal(err.to_string())
            })
        })
        .map_err(|err| err.context("Failed to load main page"))?;

    Ok(HttpResponse::Ok().content_type(HTML_CONTENT_TYPE).body(html))
}
