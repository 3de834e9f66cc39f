//! Business-day windows
//!
//! The station operates on Indian Standard Time. "Today" and "this
//! month" on the dashboard are IST calendar windows, converted back to
//! UTC for comparison against stored timestamps.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Kolkata;

/// Inclusive start and end of a UTC window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UtcWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at <= self.end
    }
}

/// Last instant of the given IST calendar date, in UTC
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let local = date.and_hms_milli_opt(23, 59, 59, 999).unwrap_or_default();
    // Kolkata has no DST transitions, so the local time is unambiguous
    Kolkata
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

/// First instant of the given IST calendar date, in UTC
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    let local = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    Kolkata
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

/// The IST calendar date containing the given instant
pub fn ist_date(at: DateTime<Utc>) -> NaiveDate {
    at.with_timezone(&Kolkata).date_naive()
}

/// The IST "today" window containing `now`
pub fn today_window(now: DateTime<Utc>) -> UtcWindow {
    let date = ist_date(now);
    UtcWindow {
        start: start_of_day(date),
        end: end_of_day(date),
    }
}

/// The IST calendar month containing `now`
pub fn month_window(now: DateTime<Utc>) -> UtcWindow {
    let date = ist_date(now);
    let first = date.with_day(1).unwrap_or(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month
        .map(|d| d - Duration::days(1))
        .unwrap_or(date);
    UtcWindow {
        start: start_of_day(first),
        end: end_of_day(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_today_window_spans_ist_day() {
        // 2025-03-10 20:30 UTC is 2025-03-11 02:00 IST
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 20, 30, 0).unwrap();
        let window = today_window(now);

        assert_eq!(ist_date(window.start), NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());
        assert!(window.contains(now));
        // IST midnight is 18:30 UTC the previous day
        assert_eq!(window.start, Utc.with_ymd_and_hms(2025, 3, 10, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_month_window_december_rollover() {
        let now = Utc.with_ymd_and_hms(2025, 12, 15, 12, 0, 0).unwrap();
        let window = month_window(now);

        assert_eq!(ist_date(window.start), NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(ist_date(window.end), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_end_of_day_is_inclusive_boundary() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let end = end_of_day(date);
        let next_start = start_of_day(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert!(end < next_start);
        assert_eq!(ist_date(end), date);
    }
}
