//! Timestamp text format used in serialized bookmarks
//!
//! Dates are written with a medium date and a full time in English, always in
//! UTC, e.g. `Jan 5, 2013 3:07:09 PM Coordinated Universal Time`. The text has
//! one-second precision; sub-second parts are dropped when formatting.
//!
//! Documents written elsewhere may carry the writer's local zone instead
//! (`Jan 5, 2013 3:07:09 PM Pacific Standard Time`). Reading accepts the
//! full English names in [`ZONE_OFFSETS`] and converts to UTC; any other zone
//! name is an error.

use crate::error::DateParseError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// strftime pattern for serialized dates
pub const DATE_FORMAT: &str = "%b %-d, %Y %-I:%M:%S %p Coordinated Universal Time";

/// Date and time part of [`DATE_FORMAT`], without the zone name
const LOCAL_FORMAT: &str = "%b %-d, %Y %-I:%M:%S %p";

/// Full zone names accepted when reading, with their offset east of UTC in
/// seconds
pub const ZONE_OFFSETS: &[(&str, i32)] = &[
    ("Coordinated Universal Time", 0),
    ("Greenwich Mean Time", 0),
    ("UTC", 0),
    ("GMT", 0),
    ("British Summer Time", 3600),
    ("Central European Time", 3600),
    ("Central European Standard Time", 3600),
    ("Central European Summer Time", 2 * 3600),
    ("Eastern European Time", 2 * 3600),
    ("Eastern European Standard Time", 2 * 3600),
    ("Eastern European Summer Time", 3 * 3600),
    ("Moscow Standard Time", 3 * 3600),
    ("India Standard Time", 5 * 3600 + 1800),
    ("China Standard Time", 8 * 3600),
    ("Japan Standard Time", 9 * 3600),
    ("Atlantic Standard Time", -4 * 3600),
    ("Atlantic Daylight Time", -3 * 3600),
    ("Eastern Standard Time", -5 * 3600),
    ("Eastern Daylight Time", -4 * 3600),
    ("Central Standard Time", -6 * 3600),
    ("Central Daylight Time", -5 * 3600),
    ("Mountain Standard Time", -7 * 3600),
    ("Mountain Daylight Time", -6 * 3600),
    ("Pacific Standard Time", -8 * 3600),
    ("Pacific Daylight Time", -7 * 3600),
];

/// Format a timestamp
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format an optional timestamp; absent dates stay absent
pub fn format_optional(date: Option<&DateTime<Utc>>) -> Option<String> {
    date.map(format_date)
}

/// Parse a timestamp written by [`format_date`], or the same pattern in one
/// of the zones listed in [`ZONE_OFFSETS`]
pub fn parse_date(text: &str) -> Result<DateTime<Utc>, DateParseError> {
    let (local, zone) = NaiveDateTime::parse_and_remainder(text.trim(), LOCAL_FORMAT)
        .map_err(|source| DateParseError::Format {
            text: text.to_string(),
            source,
        })?;

    let zone = zone.trim();
    let seconds = ZONE_OFFSETS
        .iter()
        .find(|(name, _)| *name == zone)
        .map(|(_, seconds)| *seconds)
        .ok_or_else(|| DateParseError::UnknownZone {
            text: text.to_string(),
            zone: zone.to_string(),
        })?;

    FixedOffset::east_opt(seconds)
        .and_then(|offset| local.and_local_timezone(offset).single())
        .map(|date| date.with_timezone(&Utc))
        .ok_or_else(|| DateParseError::OutOfRange {
            text: text.to_string(),
        })
}

/// Parse an optional timestamp; a missing value is not an error
pub fn parse_optional(text: Option<&str>) -> Result<Option<DateTime<Utc>>, DateParseError> {
    text.map(parse_date).transpose()
}
