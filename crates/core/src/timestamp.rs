//! # Timestamp Codec
//!
//! Availability windows travel as text in exactly one shape:
//! `YYYY-MM-DDTHH:MM:SS.ffffffZ`. The fractional part is mandatory and may
//! carry one to six digits on input; output always carries six.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

use crate::errors::{ScheduleError, ScheduleResult};

/// Format used when rendering timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_TIME_SHAPE: &[u8] = b"dddd-dd-ddTdd:dd:dd";
const MAX_FRACTION_DIGITS: usize = 6;

/// chrono's `%Y` also takes signed and short years, so the layout is
/// checked byte by byte first
fn has_fixed_shape(date_time: &str) -> bool {
    date_time.len() == DATE_TIME_SHAPE.len()
        && date_time
            .bytes()
            .zip(DATE_TIME_SHAPE)
            .all(|(byte, &expected)| match expected {
                b'd' => byte.is_ascii_digit(),
                _ => byte == expected,
            })
}

/// Parses a timestamp in the fixed wire format
///
/// # Errors
///
/// Returns `ScheduleError::Validation` if the text is not in the
/// `YYYY-MM-DDTHH:MM:SS.ffffffZ` shape or names an impossible date.
///
/// # Example
///
/// ```
/// use interview_core::timestamp::parse;
///
/// let ts = parse("2025-01-26T04:47:36.672Z").unwrap();
/// assert_eq!(ts.timestamp_subsec_micros(), 672_000);
/// ```
pub fn parse(value: &str) -> ScheduleResult<DateTime<Utc>> {
    let invalid = || ScheduleError::Validation(format!("Invalid timestamp: {value}"));

    let without_zone = value.strip_suffix('Z').ok_or_else(invalid)?;
    let (date_time, fraction) = without_zone.rsplit_once('.').ok_or_else(invalid)?;

    if !has_fixed_shape(date_time)
        || fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let naive = NaiveDateTime::parse_from_str(date_time, DATE_TIME_FORMAT).map_err(|_| invalid())?;

    // Right-pad to microseconds: ".5" is half a second
    let micros: u32 = format!("{fraction:0<width$}", width = MAX_FRACTION_DIGITS)
        .parse()
        .map_err(|_| invalid())?;
    let naive = naive.with_nanosecond(micros * 1_000).ok_or_else(invalid)?;

    Ok(naive.and_utc())
}

/// Renders a timestamp in the fixed wire format with microsecond precision
pub fn format(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter for `DateTime<Utc>` fields carried in the wire format
///
/// ```ignore
/// #[serde(with = "interview_core::timestamp::wire")]
/// pub from: DateTime<Utc>,
/// ```
pub mod wire {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse(&text).map_err(D::Error::custom)
    }
}
