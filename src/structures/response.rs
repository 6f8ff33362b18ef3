use serde::{Deserialize, Serialize};

/// JSON body rendered by the catchers.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub code: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self { status: "error".to_string(), code, message: message.into() }
    }
}
