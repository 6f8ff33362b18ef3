use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{catch, Request};

use crate::structures::ErrorResponse;

#[catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(404, "Resource not found"))
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(500, "Internal server error"))
}

#[catch(default)]
pub fn fallback(status: Status, _req: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    let reason = status.reason().unwrap_or("Unknown error");
    (status, Json(ErrorResponse::new(status.code, reason)))
}
