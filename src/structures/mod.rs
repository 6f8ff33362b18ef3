pub mod health;
pub mod status;
pub mod response;
pub mod locale;
pub mod metrics;
pub mod error;

pub use health::{BuildInfo, HealthResponse};
pub use status::StatusResponse;
pub use response::ErrorResponse;
pub use locale::Locale;
pub use metrics::Metrics;
pub use error::{AppError, AppResult, ConfigError};
