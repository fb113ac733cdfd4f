//! Appending entries to the current day file.

use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, TimeZone};
use oddbook_shared::{day_file_name, header_line};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::namespace::Namespace;

impl Namespace {
    /// Append `entry` to the day file for `now`'s calendar date and return
    /// that file's name.
    ///
    /// The first write of a day creates the file as header, blank line,
    /// entry. Later writes append `"\n" + entry`. Creation is atomic: the
    /// initial content is staged in a hidden temp file and hard-linked into
    /// place, so concurrent first writes never produce a second header.
    pub async fn append_entry<Tz: TimeZone>(
        &self,
        entry: &str,
        now: &DateTime<Tz>,
    ) -> Result<String> {
        self.ensure().await?;

        let today = now.date_naive();
        let file_name = day_file_name(today);
        let path = self.dir.join(&file_name);

        let initial = format!("{}\n\n{}", header_line(today), entry);
        if self.create_if_absent(&file_name, &path, initial.as_bytes()).await? {
            debug!(client = %self.client, file = %file_name, "Created day file");
            return Ok(file_name);
        }

        let mut file = OpenOptions::new().append(true).open(&path).await?;
        file.write_all(format!("\n{entry}").as_bytes()).await?;
        file.flush().await?;

        debug!(client = %self.client, file = %file_name, "Appended entry");
        Ok(file_name)
    }

    /// Returns `false` if `path` already existed, leaving it untouched.
    async fn create_if_absent(
        &self,
        file_name: &str,
        path: &Path,
        content: &[u8],
    ) -> Result<bool> {
        // Leading dot keeps the staging file out of listings.
        let staging = self.dir.join(format!(".{file_name}.{}.tmp", Uuid::new_v4()));
        fs::write(&staging, content).await?;

        let linked = fs::hard_link(&staging, path).await;
        fs::remove_file(&staging).await?;

        match linked {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
