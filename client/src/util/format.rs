//! Display formatting for API date/time strings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO `YYYY-MM-DD[...]` date as `DD/MM/YYYY`.
///
/// Anything that does not start with an ISO date is returned unchanged.
pub fn short_date(raw: &str) -> String {
    let date = raw.get(..10).unwrap_or(raw);
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d))
            if y.len() == 4 && m.len() == 2 && d.len() == 2 && date.bytes().filter(u8::is_ascii_digit).count() == 8 =>
        {
            format!("{d}/{m}/{y}")
        }
        _ => raw.to_owned(),
    }
}

/// Trim `HH:MM:SS` times to `HH:MM`.
pub fn short_time(raw: &str) -> &str {
    match raw.get(..5) {
        Some(hm) if raw.len() == 8 && raw.as_bytes()[2] == b':' && raw.as_bytes()[5] == b':' => hm,
        _ => raw,
    }
}
