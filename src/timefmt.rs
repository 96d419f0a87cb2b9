//! Clock and duration formatting for the status screen.

use chrono::{DateTime, TimeZone, Timelike};

/// Format a duration in milliseconds as `HH:MM:SS`.
///
/// Hours are not wrapped at 24 and grow past two digits when needed.
pub fn format_elapsed(milliseconds: u64) -> String {
    let total_secs = milliseconds / 1000;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Format a time of day as `hh:mm:ss AM|PM`.
pub fn format_clock_12h<T: Timelike>(time: &T) -> String {
    let (pm, hour) = time.hour12();
    format!(
        "{:02}:{:02}:{:02} {}",
        hour,
        time.minute(),
        time.second(),
        if pm { "PM" } else { "AM" }
    )
}

/// Milliseconds from `start` to `end`, clamped at zero.
pub fn elapsed_ms<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> u64 {
    end.clone()
        .signed_duration_since(start.clone())
        .num_milliseconds()
        .max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime, Utc};

    #[test]
    fn format_elapsed_formats_correctly() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(999), "00:00:00");
        assert_eq!(format_elapsed(65_000), "00:01:05");
        assert_eq!(format_elapsed(3_661_000), "01:01:01");
    }

    #[test]
    fn format_elapsed_does_not_wrap_hours() {
        assert_eq!(format_elapsed(25 * 3_600_000), "25:00:00");
        assert_eq!(format_elapsed(100 * 3_600_000 + 59_999), "100:00:59");
    }

    #[test]
    fn clock_12h_midnight_is_twelve_am() {
        let t = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_clock_12h(&t), "12:00:00 AM");
    }

    #[test]
    fn clock_12h_afternoon() {
        let t = NaiveTime::from_hms_opt(13, 0, 0).unwrap();
        assert_eq!(format_clock_12h(&t), "01:00:00 PM");
        let t = NaiveTime::from_hms_opt(12, 5, 9).unwrap();
        assert_eq!(format_clock_12h(&t), "12:05:09 PM");
        let t = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(format_clock_12h(&t), "11:59:59 PM");
    }

    #[test]
    fn clock_12h_morning() {
        let t = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(format_clock_12h(&t), "09:30:00 AM");
    }

    #[test]
    fn elapsed_ms_clamps_negative() {
        let start = Utc::now();
        let end = start + Duration::milliseconds(1500);
        assert_eq!(elapsed_ms(&start, &end), 1500);
        assert_eq!(elapsed_ms(&end, &start), 0);
    }
}
