//! # oddbook-store
//!
//! Per-client journal storage on the local filesystem.
//!
//! The store is a keyed collection of namespaces: [`EntryStore::namespace`]
//! maps a [`ClientId`](oddbook_shared::ClientId) to a [`Namespace`] handle
//! (one directory under the store root). Each namespace holds one
//! append-only `YYYYMMDD.odd` file per calendar day.
//!
//! All operations that depend on the current time take `now` explicitly so
//! callers decide which clock and time zone apply.

pub mod download;
pub mod entries;
pub mod listing;
pub mod namespace;

mod error;

pub use error::{Result, StoreError};
pub use listing::DayFile;
pub use namespace::{EntryStore, Namespace};
