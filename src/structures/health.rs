use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::structures::status::format_utc;

const UNKNOWN: &str = "unknown";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub code: u16,
    pub version: String,
    pub commit: String,
    pub built_at: String,
    pub uptime_seconds: u64,
}

impl HealthResponse {
    pub fn ok(build: &BuildInfo, uptime_seconds: u64) -> Self {
        Self {
            status: "ok".to_string(),
            code: 200,
            version: build.version.to_string(),
            commit: build.commit.to_string(),
            built_at: build.built_at.clone(),
            uptime_seconds,
        }
    }
}

// Metadata baked in by build.rs
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub built_at: String,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("BUILD_COMMIT").unwrap_or(UNKNOWN),
            built_at: epoch_to_iso(option_env!("BUILD_TIMESTAMP").unwrap_or_default()),
        }
    }
}

fn epoch_to_iso(epoch: &str) -> String {
    epoch
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|dt| format_utc(dt).ok())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_rendered_as_utc() {
        assert_eq!(epoch_to_iso("1717243200"), "2024-06-01T12:00:00.000000Z");
    }

    #[test]
    fn garbage_epoch_is_unknown() {
        assert_eq!(epoch_to_iso(""), "unknown");
        assert_eq!(epoch_to_iso("yesterday"), "unknown");
    }

    #[test]
    fn ok_carries_build_metadata() {
        let build = BuildInfo { version: "1.2.3", commit: "abc1234", built_at: "x".into() };
        let resp = HealthResponse::ok(&build, 42);
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.code, 200);
        assert_eq!(resp.version, "1.2.3");
        assert_eq!(resp.commit, "abc1234");
        assert_eq!(resp.uptime_seconds, 42);
    }
}
