//! Day-file naming and header format.
//!
//! A daily entry file is named `YYYYMMDD.odd` and starts with a single
//! header line that never carries entry data:
//!
//! ```text
//! # updated 2024-06-10 mms // FIRST LINE MUST NOT CONTAIN DATA!
//! ```

use chrono::{Datelike, NaiveDate};

use crate::constants::{DAY_FILE_EXTENSION, DAY_FILE_STEM_LEN};

/// File name for the given calendar date, e.g. `20240610.odd`.
pub fn day_file_name(date: NaiveDate) -> String {
    format!(
        "{:04}{:02}{:02}.{}",
        date.year(),
        date.month(),
        date.day(),
        DAY_FILE_EXTENSION
    )
}

/// Header line written once, when a day file is created. No trailing newline.
pub fn header_line(date: NaiveDate) -> String {
    format!(
        "# updated {} mms // FIRST LINE MUST NOT CONTAIN DATA!",
        date.format("%Y-%m-%d")
    )
}

/// Parse a strict `YYYYMMDD.odd` name back into its calendar date.
///
/// Returns `None` for anything else: wrong length, non-digits, path
/// separators, a different extension, or an impossible date like `20240231`.
pub fn parse_day_file_name(name: &str) -> Option<NaiveDate> {
    let (stem, ext) = name.split_once('.')?;
    if ext != DAY_FILE_EXTENSION
        || stem.len() != DAY_FILE_STEM_LEN
        || !stem.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let year = stem[0..4].parse().ok()?;
    let month = stem[4..6].parse().ok()?;
    let day = stem[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The 8-digit date prefix of a well-formed day-file name.
pub fn date_prefix(name: &str) -> Option<&str> {
    parse_day_file_name(name).map(|_| &name[..DAY_FILE_STEM_LEN])
}
