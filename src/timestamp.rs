//! Fixed human-readable timestamps (`2024-Jan-05 09:30:00`) and due-date
//! token resolution.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, SubsecRound};

use crate::error::ClikanError;

/// Layout used for every timestamp written to a data file.
pub const LAYOUT: &str = "%Y-%b-%d %H:%M:%S";

/// Sentinel accepted by `edit --date` to clear a due date.
pub const CLEAR_DATE: &str = "none";

/// Current local time, truncated to whole seconds so it survives a
/// format/parse round trip.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

pub fn format(instant: &NaiveDateTime) -> String {
    instant.format(LAYOUT).to_string()
}

/// Inverse of [`format`]. Rejects anything `format` would not have produced,
/// including unpadded days and full month names.
pub fn parse(raw: &str) -> Result<NaiveDateTime, ClikanError> {
    let parsed = NaiveDateTime::parse_from_str(raw, LAYOUT)
        .map_err(|_| ClikanError::malformed_timestamp(raw))?;
    if format(&parsed) != raw {
        return Err(ClikanError::malformed_timestamp(raw));
    }
    Ok(parsed)
}

/// Resolve `today`, `tomorrow`, `nextweek` against `now`, or parse an
/// ISO-8601 date / datetime. Bare dates resolve to midnight.
pub fn resolve_relative_date(token: &str, now: NaiveDateTime) -> Result<NaiveDateTime, ClikanError> {
    let trimmed = token.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "today" => return Ok(now.trunc_subsecs(0)),
        "tomorrow" => return Ok(now.trunc_subsecs(0) + Duration::days(1)),
        "nextweek" => return Ok(now.trunc_subsecs(0) + Duration::days(7)),
        _ => {}
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Local).naive_local().trunc_subsecs(0));
    }

    const DATETIME_LAYOUTS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(dt.trunc_subsecs(0));
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ClikanError::invalid_date(token))
}
