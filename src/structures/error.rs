use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::Request;
use thiserror::Error;
use tracing::error;

use crate::common::logging::events;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

// Platform faults surface as a bare 500; the catcher renders the JSON body.
impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        error!(event = events::HTTP_ERROR, uri = %req.uri(), error = %self, msg = "Handler failed");
        Err(Status::InternalServerError)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),
}

pub type AppResult<T> = Result<T, AppError>;
