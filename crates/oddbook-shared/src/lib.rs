//! # oddbook-shared
//!
//! Types and pure logic shared by the oddbook store and server: client
//! identifiers, the `YYYYMMDD.odd` day-file naming scheme, the file header
//! and the trailing seven-day retention window.
//!
//! Nothing in this crate touches the filesystem.

pub mod constants;
pub mod naming;
pub mod retention;
pub mod types;

pub use naming::{date_prefix, day_file_name, header_line, parse_day_file_name};
pub use retention::is_retained;
pub use types::ClientId;
