//! Store root and per-client namespace handles.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use oddbook_shared::ClientId;
use tokio::fs;
use tracing::{debug, info};

use crate::error::Result;

/// Root of the entries tree: `<root>/<client-id>/<YYYYMMDD>.odd`.
#[derive(Debug, Clone)]
pub struct EntryStore {
    root: PathBuf,
}

impl EntryStore {
    /// Open the store, creating the root directory if missing.
    pub async fn open(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root).await?;

        info!(path = %root.display(), "Entry store initialized");

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Handle to one client's namespace. Does not touch the filesystem.
    pub fn namespace(&self, client: &ClientId) -> Namespace {
        // ClientId is always a UUID, so the joined path cannot escape the root.
        Namespace {
            client: *client,
            dir: self.root.join(client.to_string()),
        }
    }
}

/// Directory holding a single client's day files.
#[derive(Debug, Clone)]
pub struct Namespace {
    pub(crate) client: ClientId,
    pub(crate) dir: PathBuf,
}

impl Namespace {
    pub fn client(&self) -> ClientId {
        self.client
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Create the namespace directory. Idempotent.
    pub async fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Wipe every file in the namespace and leave an empty directory behind.
    ///
    /// An already-missing namespace is not an error, so clearing twice in a
    /// row succeeds both times.
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_dir_all(&self.dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        self.ensure().await?;

        debug!(client = %self.client, "Cleared namespace");
        Ok(())
    }
}
