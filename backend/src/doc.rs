//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every habit endpoint and wire schema. The document is
//! served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::debug::DebugResponse;
use crate::inbound::http::entries::{AddEntryRequest, AddEntryResponse};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::schemas::HabitEntryResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Habit tracker API",
        description = "Record daily sleep, water and mood readings, list them and chart them."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::landing::index,
        crate::inbound::http::entries::add_entry,
        crate::inbound::http::entries::list_entries,
        crate::inbound::http::charts::chart,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::debug::debug_info,
    ),
    components(schemas(
        AddEntryRequest,
        AddEntryResponse,
        HabitEntryResponse,
        HealthResponse,
        DebugResponse,
        ErrorEnvelope,
    )),
    tags(
        (name = "pages", description = "Static client pages"),
        (name = "entries", description = "Habit entry submission and history"),
        (name = "charts", description = "Rendered habit charts"),
        (name = "health", description = "Health checks and diagnostics")
    )
)]
pub struct ApiDoc;
