//! Local report storage
//!
//! Browses the report files written by [`save_crash_report`](crate::save_crash_report).

use std::path::{Path, PathBuf};

use logcrumb_core::domain::CrashReport;

/// Entry in the local report store
#[derive(Debug, Clone)]
pub struct ReportEntry {
    /// Short id taken from the file name
    pub id: String,
    /// `panic`, `handled`, `test`, or `unknown`
    pub report_type: String,
    /// `yyyymmdd` from the file name
    pub date: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

impl ReportEntry {
    /// Whether `query` is a fragment of this entry's file name.
    fn stem_contains(&self, query: &str) -> bool {
        self.path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy().contains(query))
    }
}

/// Manages the local directory of crash report files.
pub struct LocalReportStore {
    reports_dir: PathBuf,
}

impl LocalReportStore {
    /// Creates a new store pointing at `reports_dir`.
    pub fn new(reports_dir: PathBuf) -> Self {
        Self { reports_dir }
    }

    /// List all report files, newest date first.
    pub fn list(&self) -> anyhow::Result<Vec<ReportEntry>> {
        if !self.reports_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.reports_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.extension().is_some_and(|e| e == "json") {
                continue;
            }

            let stem = path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            let (report_type, date, id) = parse_report_filename(&stem);

            entries.push(ReportEntry {
                id,
                report_type,
                date,
                size_bytes: entry.metadata()?.len(),
                path,
            });
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Find the single entry named by `query`.
    ///
    /// An exact short id wins; otherwise `query` must be a fragment of
    /// exactly one file name. A blank query matches nothing, and a fragment
    /// shared by several reports is an error.
    pub fn find(&self, query: &str) -> anyhow::Result<Option<ReportEntry>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let entries = self.list()?;
        let (exact, rest): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.id == query);
        let mut candidates: Vec<ReportEntry> = if exact.is_empty() {
            rest.into_iter()
                .filter(|e| e.stem_contains(query))
                .collect()
        } else {
            exact
        };

        match candidates.len() {
            0 => Ok(None),
            1 => Ok(candidates.pop()),
            n => anyhow::bail!("'{query}' matches {n} reports; use a report id"),
        }
    }

    /// Read a report as raw JSON.
    pub fn read(&self, query: &str) -> anyhow::Result<Option<serde_json::Value>> {
        match self.find(query)? {
            Some(entry) => {
                let content = std::fs::read_to_string(&entry.path)?;
                Ok(Some(serde_json::from_str(&content)?))
            }
            None => Ok(None),
        }
    }

    /// Read a report as a typed [`CrashReport`].
    pub fn read_report(&self, query: &str) -> anyhow::Result<Option<CrashReport>> {
        match self.read(query)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Delete the report named by `query`.
    pub fn delete(&self, query: &str) -> anyhow::Result<bool> {
        match self.find(query)? {
            Some(entry) => {
                std::fs::remove_file(&entry.path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete all reports, returning how many were removed.
    pub fn delete_all(&self) -> anyhow::Result<u32> {
        let mut count = 0;
        for entry in self.list()? {
            if std::fs::remove_file(&entry.path).is_ok() {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Returns the reports directory path.
    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }
}

/// Split a stem like `panic-20261019-a1b2c3d4` into (type, date, id).
fn parse_report_filename(stem: &str) -> (String, String, String) {
    let parts: Vec<&str> = stem.splitn(3, '-').collect();
    match parts.as_slice() {
        [kind, date, id] => (kind.to_string(), date.to_string(), id.to_string()),
        [kind, date] => (kind.to_string(), date.to_string(), stem.to_string()),
        _ => ("unknown".to_string(), String::new(), stem.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crash_report::save_crash_report;
    use logcrumb_core::domain::ReportKind;

    #[test]
    fn test_list_nonexistent_dir() {
        let store = LocalReportStore::new(PathBuf::from("/nonexistent/path"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_ignores_non_json_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        let store = LocalReportStore::new(dir.path().to_path_buf());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_store_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalReportStore::new(dir.path().to_path_buf());

        let report = CrashReport::new("test", ReportKind::Panic, "test crash", "", "");
        save_crash_report(dir.path(), &report).unwrap();
        let short_id = &report.id[..8];

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].report_type, "panic");
        assert_eq!(entries[0].id, short_id);

        let value = store.read(short_id).unwrap().unwrap();
        assert_eq!(value["message"], "test crash");

        let typed = store.read_report(short_id).unwrap().unwrap();
        assert_eq!(typed.id, report.id);

        assert!(store.delete(short_id).unwrap());
        assert!(!store.delete(short_id).unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_all() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalReportStore::new(dir.path().to_path_buf());

        for i in 0..3 {
            let path = dir.path().join(format!("test-20261019-id{i}.json"));
            std::fs::write(&path, "{}").unwrap();
        }

        assert_eq!(store.list().unwrap().len(), 3);
        assert_eq!(store.delete_all().unwrap(), 3);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("panic-20250101-aaaa.json"), "{}").unwrap();
        std::fs::write(dir.path().join("test-20261019-bbbb.json"), "{}").unwrap();

        let store = LocalReportStore::new(dir.path().to_path_buf());
        let entries = store.list().unwrap();
        assert_eq!(entries[0].id, "bbbb");
        assert_eq!(entries[1].id, "aaaa");
    }

    #[test]
    fn test_find_prefers_exact_id() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("test-20261019-abcd.json"), "{}").unwrap();
        std::fs::write(dir.path().join("test-20261019-abcdef.json"), "{}").unwrap();

        let store = LocalReportStore::new(dir.path().to_path_buf());
        assert_eq!(store.find("abcd").unwrap().unwrap().id, "abcd");
        assert_eq!(store.find("cdef").unwrap().unwrap().id, "abcdef");
    }

    #[test]
    fn test_ambiguous_fragment_deletes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("test-20261019-aaaa.json"), "{}").unwrap();
        std::fs::write(dir.path().join("test-20261019-bbbb.json"), "{}").unwrap();

        let store = LocalReportStore::new(dir.path().to_path_buf());
        assert!(store.delete("test").is_err());
        assert!(store.read("2026").is_err());
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("panic-20261019-aaaa.json"), "{}").unwrap();

        let store = LocalReportStore::new(dir.path().to_path_buf());
        assert!(!store.delete("").unwrap());
        assert!(!store.delete("   ").unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_report_filename() {
        let (t, d, id) = parse_report_filename("handled-20261019-abc12345");
        assert_eq!(t, "handled");
        assert_eq!(d, "20261019");
        assert_eq!(id, "abc12345");

        let (t, _, id) = parse_report_filename("odd");
        assert_eq!(t, "unknown");
        assert_eq!(id, "odd");
    }
}
