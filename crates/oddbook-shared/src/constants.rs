/// Extension of every daily entry file.
pub const DAY_FILE_EXTENSION: &str = "odd";

/// Number of ASCII digits in a day-file stem (`YYYYMMDD`).
pub const DAY_FILE_STEM_LEN: usize = 8;

/// Length of the trailing visibility window, in days.
pub const RETENTION_DAYS: i64 = 7;

/// Name of the cookie carrying the client identifier.
pub const CLIENT_COOKIE: &str = "odd_client";

/// Lifetime of the client identifier cookie, in days.
pub const CLIENT_COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Default HTTP port, matching the historical deployment
pub const DEFAULT_HTTP_PORT: u16 = 3000;
