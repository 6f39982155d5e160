use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Renders a server timestamp as `dd/MM/yyyy HH:mm`.
///
/// Empty input gives `"N/A"`; anything unparseable is returned unchanged.
/// RFC 3339 timestamps keep their own offset (no conversion to local time).
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|parsed| parsed.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
