//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod charts;
pub mod debug;
pub mod entries;
pub mod error;
pub mod health;
pub mod landing;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register the habit routes. Probe routes are added by the server.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(landing::index)
        .service(entries::add_entry)
        .service(entries::list_entries)
        .service(charts::chart)
        .service(health::health)
        .service(debug::debug_info);
}

/// JSON extractor config rejecting bad bodies with the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Query extractor config rejecting bad query strings with the error envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(error::query_error_handler)
}
