//! Date helper functions

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::config::SiteConfig;

/// Parse a timestamp as the CMS exports it.
///
/// The CMS sends site-local times without an offset
/// (`2021-04-12T09:30:00`); RFC 3339 values are accepted too and are
/// reduced to UTC.
pub fn parse_cms_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|d| d.naive_utc())
        })
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Place a CMS timestamp in the display timezone.
///
/// Wall-clock times skipped by a DST jump land one hour later, the way
/// clocks read after springing forward.
pub fn localize(value: &str, tz: Tz) -> Option<DateTime<Tz>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value.trim()) {
        return Some(date.with_timezone(&tz));
    }
    let naive = parse_cms_date(value)?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(date) => Some(date),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .or_else(|| Some(tz.from_utc_datetime(&naive))),
    }
}

/// Format a CMS timestamp with the site's date format.
///
/// Values that do not parse are shown as they came in.
pub fn display_date(config: &SiteConfig, value: &str) -> String {
    match localize(value, config.tz()) {
        Some(date) => format_date(&date, &config.date_format),
        None => value.to_string(),
    }
}

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM DD, YYYY") // -> "January 15, 2024"
/// ```
pub fn format_date<Z: TimeZone>(date: &DateTime<Z>, format: &str) -> String
where
    Z::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Z: TimeZone>(date: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        // Day of month
        ("DDDD", "%j"),
        ("DD", "%d"),
        // Hour
        ("HH", "%H"),
        ("hh", "%I"),
        // Minute
        ("mm", "%M"),
        // Second
        ("ss", "%S"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("ZZ", "%z"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}
