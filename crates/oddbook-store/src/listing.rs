//! Listing the retained day files of a namespace.

use chrono::{DateTime, TimeZone};
use oddbook_shared::{date_prefix, is_retained};
use serde::Serialize;
use tokio::fs;

use crate::error::Result;
use crate::namespace::Namespace;

/// One visible day file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayFile {
    /// File name, e.g. `20240610.odd`.
    pub name: String,
    /// The 8-digit date prefix of the name, e.g. `20240610`.
    pub date: String,
    /// Current on-disk size in bytes.
    pub size: u64,
}

impl Namespace {
    /// Day files inside the retention window, newest first.
    ///
    /// Creates the namespace if it is missing, so a fresh client gets an
    /// empty list rather than an error.
    pub async fn list_files<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<Vec<DayFile>> {
        self.ensure().await?;

        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                if is_retained(name, now) {
                    names.push(name.to_string());
                }
            }
        }

        // Names are fixed-width dates, so lexicographic order is date order.
        names.sort_unstable_by(|a, b| b.cmp(a));

        let mut files = Vec::with_capacity(names.len());
        for name in names {
            let metadata = fs::metadata(self.dir.join(&name)).await?;
            if !metadata.is_file() {
                continue;
            }
            let Some(date) = date_prefix(&name).map(str::to_string) else {
                continue;
            };
            files.push(DayFile {
                name,
                date,
                size: metadata.len(),
            });
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use oddbook_shared::ClientId;
    use tempfile::TempDir;

    use crate::namespace::EntryStore;

    use super::*;

    async fn test_namespace() -> (Namespace, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = EntryStore::open(dir.path().to_path_buf()).await.unwrap();
        (store.namespace(&ClientId::new()), dir)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    async fn touch(ns: &Namespace, name: &str, content: &str) {
        fs::write(ns.path().join(name), content).await.unwrap();
    }

    #[tokio::test]
    async fn fresh_namespace_lists_empty() {
        let (ns, _dir) = test_namespace().await;

        assert!(ns.list_files(&now()).await.unwrap().is_empty());
        assert!(ns.path().is_dir());
    }

    #[tokio::test]
    async fn lists_retained_files_newest_first() {
        let (ns, _dir) = test_namespace().await;
        ns.ensure().await.unwrap();
        touch(&ns, "20240605.odd", "abc").await;
        touch(&ns, "20240610.odd", "hello").await;
        touch(&ns, "20240607.odd", "").await;

        let files = ns.list_files(&now()).await.unwrap();

        assert_eq!(
            files,
            vec![
                DayFile { name: "20240610.odd".into(), date: "20240610".into(), size: 5 },
                DayFile { name: "20240607.odd".into(), date: "20240607".into(), size: 0 },
                DayFile { name: "20240605.odd".into(), date: "20240605".into(), size: 3 },
            ]
        );
    }

    #[tokio::test]
    async fn hides_files_outside_window_and_foreign_names() {
        let (ns, _dir) = test_namespace().await;
        ns.ensure().await.unwrap();
        touch(&ns, "20240603.odd", "too old").await;
        touch(&ns, "20200101.odd", "ancient").await;
        touch(&ns, "20240611.odd", "future").await;
        touch(&ns, "notes.txt", "stray").await;
        touch(&ns, ".20240610.odd.tmp", "staging").await;
        touch(&ns, "20240609.odd", "ok").await;

        let files = ns.list_files(&now()).await.unwrap();

        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["20240609.odd"]);
        // Out-of-window files are hidden, not pruned.
        assert!(ns.path().join("20200101.odd").exists());
    }

    #[tokio::test]
    async fn skips_directories_with_day_file_names() {
        let (ns, _dir) = test_namespace().await;
        ns.ensure().await.unwrap();
        fs::create_dir(ns.path().join("20240610.odd")).await.unwrap();

        assert!(ns.list_files(&now()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn size_tracks_appends() {
        let (ns, _dir) = test_namespace().await;

        ns.append_entry("hello", &now()).await.unwrap();
        let before = ns.list_files(&now()).await.unwrap()[0].size;
        ns.append_entry("world", &now()).await.unwrap();
        let after = ns.list_files(&now()).await.unwrap()[0].size;

        assert_eq!(after, before + "\nworld".len() as u64);
    }

    #[tokio::test]
    async fn serializes_as_name_date_size() {
        let file = DayFile { name: "20240610.odd".into(), date: "20240610".into(), size: 7 };
        assert_eq!(
            serde_json::to_value(&file).unwrap(),
            serde_json::json!({ "name": "20240610.odd", "date": "20240610", "size": 7 })
        );
    }
}
