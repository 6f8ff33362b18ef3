use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use time::macros::format_description;

/// Output encoding for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers
    #[default]
    Json,
    /// Human-readable lines for local runs
    Text,
}

/// Installs the global subscriber. Rocket's `log` records are bridged in
/// through tracing-subscriber's log integration.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    // RUST_LOG wins; fall back to info
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;

    let timer = UtcTime::new(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .event_format(fmt::format().json().with_current_span(false).with_span_list(false))
                    .fmt_fields(fmt::format::JsonFields::new())
                    .with_timer(timer)
                    .with_writer(std::io::stdout),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_timer(timer)
                    .with_writer(std::io::stdout),
            )
            .try_init()?,
    }
    Ok(())
}

pub fn short_uuid() -> String {
    let id = uuid::Uuid::new_v4().to_string();
    id.split('-').next().unwrap_or(&id).to_string()
}

pub mod events {
    pub const APP_START: &str = "app_start";
    pub const APP_READY: &str = "app_ready";
    pub const APP_SHUTDOWN: &str = "app_shutdown";

    pub const HTTP_REQUEST: &str = "http_request";
    pub const HTTP_RESPONSE: &str = "http_response";
    pub const HTTP_ERROR: &str = "http_error";
}
