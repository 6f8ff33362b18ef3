use rocket::serde::json::Json;
use rocket::get;
use rocket::State;
use rocket::response::content::{RawHtml, RawText};
use std::sync::Arc;

use crate::structures::{AppResult, BuildInfo, HealthResponse, Metrics, StatusResponse};
use crate::web::page::WelcomePage;

// Hello endpoint: fixed payload stamped with the current UTC time.
// Query, headers and body are ignored.
#[get("/hello")]
pub fn hello() -> AppResult<Json<StatusResponse>> {
    Ok(Json(StatusResponse::now()?))
}

// Welcome page rendered at startup for the configured locale
#[get("/")]
pub fn welcome(page: &State<WelcomePage>) -> RawHtml<String> {
    RawHtml(page.0.clone())
}

#[get("/health")]
pub fn health(build: &State<BuildInfo>, metrics: &State<Arc<Metrics>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(build, metrics.touch_uptime()))
}

// Prometheus text exposition
#[get("/metrics")]
pub fn metrics_export(metrics: &State<Arc<Metrics>>) -> RawText<String> {
    metrics.touch_uptime();
    RawText(metrics.gather_text())
}
