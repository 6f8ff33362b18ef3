use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::structures::AppResult;

pub const HELLO_MESSAGE: &str = "Hello World. HTTP response is working!";
pub const HELLO_STATUS: &str = "success";

/// Body of `GET /hello`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}

impl StatusResponse {
    /// Builds a response stamped with the current UTC time.
    pub fn now() -> AppResult<Self> {
        Self::at(OffsetDateTime::now_utc())
    }

    pub fn at(instant: OffsetDateTime) -> AppResult<Self> {
        Ok(Self {
            message: HELLO_MESSAGE.to_string(),
            status: HELLO_STATUS.to_string(),
            timestamp: format_utc(instant)?,
        })
    }
}

/// Formats `instant` as `YYYY-MM-DDTHH:MM:SS.ffffffZ` after shifting it to UTC.
/// Fixed width, so string order matches chronological order.
pub fn format_utc(instant: OffsetDateTime) -> AppResult<String> {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
    );
    Ok(instant.to_offset(time::UtcOffset::UTC).format(format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::format_description::well_known::Rfc3339;
    use time::macros::datetime;

    #[test]
    fn fixed_instant_formats_with_micros() {
        let resp = StatusResponse::at(datetime!(2024-06-01 12:00 UTC)).unwrap();
        assert_eq!(resp.message, "Hello World. HTTP response is working!");
        assert_eq!(resp.status, "success");
        assert_eq!(resp.timestamp, "2024-06-01T12:00:00.000000Z");
    }

    #[test]
    fn offset_instants_are_normalised_to_utc() {
        let ts = format_utc(datetime!(2024-06-01 14:30:15.123456 +02:00)).unwrap();
        assert_eq!(ts, "2024-06-01T12:30:15.123456Z");
    }

    #[test]
    fn now_is_valid_rfc3339() {
        let resp = StatusResponse::now().unwrap();
        OffsetDateTime::parse(&resp.timestamp, &Rfc3339).expect("rfc3339 timestamp");
    }

    #[test]
    fn serializes_exactly_three_fields() {
        let resp = StatusResponse::at(datetime!(2024-01-01 0:00 UTC)).unwrap();
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(
            json,
            r#"{"message":"Hello World. HTTP response is working!","status":"success","timestamp":"2024-01-01T00:00:00.000000Z"}"#
        );
    }
}
