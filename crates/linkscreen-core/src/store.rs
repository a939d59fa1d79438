//! CSV-backed record store.
//!
//! The queue file is the single source of truth: every operation re-reads it
//! from disk and updates rewrite it whole. There is no lock — concurrent
//! writers race and the last full rewrite wins, which is acceptable for a
//! single-operator tool.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{DoneFlag, Record, StoreError};

/// First two header columns the queue file must carry.
pub const EXPECTED_HEADER: [&str; 2] = ["link", "image_done"];

/// File-backed store for the review queue.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every data line of the queue file.
    pub fn load(&self) -> Result<Vec<Record>, StoreError> {
        let raw = self.read_raw()?;
        parse_records(&raw)
    }

    /// Indices of records still awaiting a decision, in source order.
    pub fn pending_indices(records: &[Record]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.done.is_unset())
            .map(|(i, _)| i)
            .collect()
    }

    /// Count of records marked `"true"`, paired with the total record count.
    pub fn completed_count(records: &[Record]) -> (usize, usize) {
        let completed = records.iter().filter(|r| r.done.is_accepted()).count();
        (completed, records.len())
    }

    /// Set the completion flag of the first record whose URL matches exactly.
    ///
    /// The matched line is rewritten as `url,status`; the header and every
    /// other line are kept byte-for-byte, including their original
    /// line-ending layout. The file is replaced atomically (temp file in the
    /// same directory, then rename), so a failed write leaves the previous
    /// content intact.
    ///
    /// Returns the updated record list so callers can recompute pending
    /// state without a second read.
    pub fn set_status(&self, url: &str, status: &str) -> Result<Vec<Record>, StoreError> {
        let raw = self.read_raw()?;
        // Validate shape before touching the file.
        parse_records(&raw)?;

        let mut updated = false;
        let lines: Vec<String> = raw
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                if i == 0 || updated {
                    return line.to_string();
                }
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return line.to_string();
                }
                let link = match trimmed.split_once(',') {
                    Some((link, _)) => link.trim(),
                    None => trimmed,
                };
                if link == url {
                    updated = true;
                    format!("{link},{status}")
                } else {
                    line.to_string()
                }
            })
            .collect();

        if !updated {
            return Err(StoreError::RecordNotFound {
                url: url.to_string(),
            });
        }

        let contents = lines.join("\n");
        self.write_atomic(&contents)?;
        tracing::debug!(url, status, "record status updated");
        parse_records(&contents)
    }

    fn read_raw(&self) -> Result<String, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(self.path.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_atomic(&self, contents: &str) -> Result<(), StoreError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

/// Parse the full file contents into records.
///
/// The first non-blank line must be the header; its first two comma-separated
/// columns must read exactly `link` and `image_done` after per-column trim.
/// Data lines split at the first comma only: text before is the URL, text
/// after is the flag. A line with no comma is a URL with an unset flag.
/// Blank lines are skipped entirely and do not occupy an index.
pub fn parse_records(raw: &str) -> Result<Vec<Record>, StoreError> {
    let mut lines = raw.lines().filter(|l| !l.trim().is_empty());

    let header = lines.next().ok_or(StoreError::Empty)?;
    let mut columns = header.split(',').map(str::trim);
    if columns.next() != Some(EXPECTED_HEADER[0]) || columns.next() != Some(EXPECTED_HEADER[1]) {
        return Err(StoreError::MalformedHeader {
            found: header.trim().to_string(),
        });
    }

    Ok(lines.map(parse_line).collect())
}

fn parse_line(line: &str) -> Record {
    let trimmed = line.trim();
    match trimmed.split_once(',') {
        Some((url, done)) => Record {
            url: url.trim().to_string(),
            done: DoneFlag::parse(done),
        },
        None => Record {
            url: trimmed.to_string(),
            done: DoneFlag::Unset,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "link,image_done\nhttps://a,\nhttps://b,true\nhttps://c,\n";

    fn scratch(contents: &str) -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("queue.csv");
        std::fs::write(&path, contents).expect("write queue file");
        (dir, RecordStore::new(path))
    }

    #[test]
    fn load_parses_records_in_order() {
        let (_dir, store) = scratch(SAMPLE);
        let records = store.load().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].url, "https://a");
        assert_eq!(records[0].done, DoneFlag::Unset);
        assert_eq!(records[1].done, DoneFlag::Accepted);
        assert_eq!(records[2].url, "https://c");
    }

    #[test]
    fn pending_indices_skip_decided_records() {
        let (_dir, store) = scratch(SAMPLE);
        let records = store.load().unwrap();
        assert_eq!(RecordStore::pending_indices(&records), vec![0, 2]);
    }

    #[test]
    fn blank_lines_do_not_occupy_an_index() {
        let (_dir, store) = scratch("link,image_done\nhttps://a,\n\n\nhttps://b,true\n");
        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].url, "https://b");
    }

    #[test]
    fn line_without_comma_is_a_pending_url() {
        let (_dir, store) = scratch("link,image_done\nhttps://bare\n");
        let records = store.load().unwrap();
        assert_eq!(records[0].url, "https://bare");
        assert!(records[0].done.is_unset());
    }

    #[test]
    fn missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("absent.csv"));
        assert!(matches!(store.load(), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn whitespace_only_file_is_empty() {
        let (_dir, store) = scratch("  \n\n");
        assert!(matches!(store.load(), Err(StoreError::Empty)));
    }

    #[test]
    fn wrong_header_is_rejected() {
        let (_dir, store) = scratch("url,done\nhttps://a,\n");
        match store.load() {
            Err(StoreError::MalformedHeader { found }) => assert_eq!(found, "url,done"),
            other => panic!("expected MalformedHeader, got {other:?}"),
        }
    }

    #[test]
    fn header_columns_are_trimmed_but_case_sensitive() {
        let (_dir, store) = scratch(" link , image_done ,extra\nhttps://a,\n");
        assert!(store.load().is_ok());

        let (_dir, store) = scratch("Link,image_done\nhttps://a,\n");
        assert!(matches!(
            store.load(),
            Err(StoreError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn set_status_rewrites_one_line_and_returns_updated_records() {
        let (_dir, store) = scratch(SAMPLE);
        let records = store.set_status("https://a", "false").unwrap();
        assert_eq!(records[0].done, DoneFlag::Rejected);
        assert_eq!(RecordStore::pending_indices(&records), vec![2]);

        let on_disk = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            on_disk,
            "link,image_done\nhttps://a,false\nhttps://b,true\nhttps://c,\n"
        );
    }

    #[test]
    fn set_status_only_touches_the_first_duplicate() {
        let (_dir, store) = scratch("link,image_done\nhttps://dup,\nhttps://dup,\n");
        let records = store.set_status("https://dup", "true").unwrap();
        assert_eq!(records[0].done, DoneFlag::Accepted);
        assert_eq!(records[1].done, DoneFlag::Unset);
    }

    #[test]
    fn set_status_unknown_url_leaves_file_untouched() {
        let (_dir, store) = scratch(SAMPLE);
        let err = store.set_status("https://nope", "true").unwrap_err();
        assert!(matches!(err, StoreError::RecordNotFound { .. }));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), SAMPLE);
    }

    #[test]
    fn set_status_accepts_arbitrary_status_strings() {
        let (_dir, store) = scratch(SAMPLE);
        let records = store.set_status("https://a", "maybe").unwrap();
        assert_eq!(records[0].done, DoneFlag::Other("maybe".to_string()));
        // Still not pending: only an empty flag is pending.
        assert_eq!(RecordStore::pending_indices(&records), vec![2]);
    }

    #[test]
    fn completed_count_is_case_insensitive_over_true_only() {
        let (_dir, store) =
            scratch("link,image_done\nhttps://a,TRUE\nhttps://b,false\nhttps://c,\n");
        let records = store.load().unwrap();
        assert_eq!(RecordStore::completed_count(&records), (1, 3));
    }

    #[test]
    fn marking_true_increments_completed_count_by_one() {
        let (_dir, store) = scratch(SAMPLE);
        let before = RecordStore::completed_count(&store.load().unwrap()).0;
        let records = store.set_status("https://a", "true").unwrap();
        assert_eq!(RecordStore::completed_count(&records).0, before + 1);
    }
}
