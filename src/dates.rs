use chrono::{DateTime, NaiveDate, NaiveDateTime};

// Every event is displayed at 11:00 AM regardless of the stored time of day.
// This is the site's display convention, not a parsed value.
const TIME_SUFFIX: &str = "– 11:00 AM";

/// Formats an event timestamp into the card's date line, e.g.
/// `December 9, 2025 – 11:00 AM`. Unparseable input keeps the raw text.
pub fn event_date_line(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => format!("{} {TIME_SUFFIX}", date.format("%B %-d, %Y")),
        None => format!("{} {TIME_SUFFIX}", raw.trim()),
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let cleaned = input.trim();
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(cleaned, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(cleaned, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form_with_fixed_time() {
        assert_eq!(
            event_date_line("2025-12-09T11:00:00"),
            "December 9, 2025 – 11:00 AM"
        );
    }

    #[test]
    fn time_of_day_is_ignored() {
        assert_eq!(
            event_date_line("2026-01-05T09:00:00"),
            "January 5, 2026 – 11:00 AM"
        );
        assert_eq!(
            event_date_line("2026-01-05T21:45:00"),
            "January 5, 2026 – 11:00 AM"
        );
    }

    #[test]
    fn accepts_rfc3339_and_bare_dates() {
        assert_eq!(
            event_date_line("2025-12-09T18:30:00Z"),
            "December 9, 2025 – 11:00 AM"
        );
        assert_eq!(event_date_line("2026-03-14"), "March 14, 2026 – 11:00 AM");
    }

    #[test]
    fn unparseable_input_keeps_raw_text() {
        assert_eq!(event_date_line("soon"), "soon – 11:00 AM");
    }

    #[test]
    fn formatting_is_stable_across_calls() {
        let first = event_date_line("2025-12-09T11:00:00");
        let second = event_date_line("2025-12-09T11:00:00");
        assert_eq!(first, second);
    }
}
