//! Reading a single day file back.

use std::io::ErrorKind;

use chrono::{DateTime, TimeZone};
use oddbook_shared::is_retained;
use tokio::fs;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::namespace::Namespace;

impl Namespace {
    /// Raw bytes of the day file `name`.
    ///
    /// The name is checked against the `YYYYMMDD.odd` pattern and the
    /// retention window before any filesystem access: a malformed name and a
    /// well-formed but expired one both yield [`StoreError::Denied`]. Only a
    /// valid, retained name that is missing on disk yields
    /// [`StoreError::NotFound`].
    pub async fn read_file<Tz: TimeZone>(
        &self,
        name: &str,
        now: &DateTime<Tz>,
    ) -> Result<Vec<u8>> {
        if !is_retained(name, now) {
            return Err(StoreError::Denied(name.to_string()));
        }

        let data = match fs::read(self.dir.join(name)).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        debug!(client = %self.client, file = %name, size = data.len(), "Read day file");
        Ok(data)
    }
}
