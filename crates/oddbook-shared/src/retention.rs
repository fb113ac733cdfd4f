//! Trailing seven-day visibility window.
//!
//! Retention is enforced at read and list time only. Files that fall out of
//! the window stay on disk but become invisible through the API.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};

use crate::constants::RETENTION_DAYS;
use crate::naming::parse_day_file_name;

/// Whether `name` is a well-formed day file whose date lies inside the
/// window `[now - 7d, now]`, both ends inclusive.
///
/// The file's date is taken at midnight in `now`'s time zone, so a file
/// dated exactly seven days back is only visible while `now` is that
/// midnight. Never panics; any malformed name yields `false`.
pub fn is_retained<Tz: TimeZone>(name: &str, now: &DateTime<Tz>) -> bool {
    let Some(date) = parse_day_file_name(name) else {
        return false;
    };
    let Some(file_start) = midnight(date, &now.timezone()) else {
        return false;
    };

    let window_start = now.clone() - Duration::days(RETENTION_DAYS);
    window_start <= file_start && file_start <= *now
}

fn midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).earliest()
}
