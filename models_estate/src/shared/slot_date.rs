//! Slot date normalization.
//!
//! Booking clients send the viewing date either as a plain `YYYY-MM-DD`
//! string or as a full RFC 3339 timestamp (date pickers tend to serialize
//! whole instants). Slots are keyed by calendar date only, so both forms
//! collapse to a [`NaiveDate`] before anything touches storage.

use chrono::{DateTime, NaiveDate};
use thiserror::Error;

/// Errors that can occur while normalizing a slot date.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SlotDateError {
    #[error("Date must not be empty")]
    Empty,

    #[error("Could not interpret '{value}' as a calendar date")]
    Unparseable { value: String },
}

/// Parse a client-supplied date into the canonical calendar date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; for timestamps the
/// time-of-day component is discarded and the date is taken in the
/// timestamp's own offset.
pub fn parse_slot_date(raw: &str) -> Result<NaiveDate, SlotDateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SlotDateError::Empty);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.date_naive());
    }

    Err(SlotDateError::Unparseable {
        value: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cool_asserts::assert_matches;

    #[test]
    fn parses_plain_calendar_date() {
        let date = parse_slot_date("2024-06-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn parses_rfc3339_timestamp_and_discards_time() {
        let date = parse_slot_date("2024-06-15T14:30:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn keeps_the_timestamps_own_calendar_date_across_offsets() {
        // 23:30 in UTC-5 is already the next day in UTC; the slot date
        // stays on the sender's calendar.
        let date = parse_slot_date("2024-06-15T23:30:00-05:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let date = parse_slot_date("  2024-06-15  ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn rejects_empty_input() {
        assert_matches!(parse_slot_date("   "), Err(SlotDateError::Empty));
    }

    #[test]
    fn rejects_garbage() {
        assert_matches!(
            parse_slot_date("next tuesday"),
            Err(SlotDateError::Unparseable { value }) => {
                assert_eq!(value, "next tuesday");
            }
        );
    }

    #[test]
    fn rejects_out_of_range_calendar_dates() {
        assert_matches!(
            parse_slot_date("2024-02-30"),
            Err(SlotDateError::Unparseable { .. })
        );
    }

    #[test]
    fn equivalent_forms_normalize_to_the_same_date() {
        let from_plain = parse_slot_date("2024-06-15").unwrap();
        let from_timestamp = parse_slot_date("2024-06-15T09:00:00+02:00").unwrap();
        assert_eq!(from_plain, from_timestamp);
    }
}
