//! Cache store for persisting standings payloads to disk
//!
//! Provides a `CacheStore` that writes two-line JSONL records (timestamp
//! metadata, then the raw payload) keyed by competition code, one file per
//! competition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Metadata line persisted ahead of the payload
#[derive(Debug, Serialize, Deserialize)]
struct CacheMeta {
    /// When the payload was fetched
    last_update: DateTime<Utc>,
}

/// A cache record read back from disk
#[derive(Debug, Clone, PartialEq)]
pub struct CacheRecord {
    /// When the payload was fetched
    pub last_update: DateTime<Utc>,
    /// The raw API payload exactly as it was stored
    pub payload: String,
}

/// Result of a cache lookup
///
/// `Miss` (no record) and `Corrupt` (unreadable or malformed record) are
/// distinct outcomes: both trigger a refetch, but corruption is worth a log
/// line while a miss on first run is not.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// A well-formed record was found
    Found(CacheRecord),
    /// No record exists for this competition
    Miss,
    /// A record exists but is unreadable or malformed
    Corrupt,
}

/// Manages reading and writing cached standings payloads
///
/// Records live in one directory, one `<competition>.jsonl` file per
/// competition code. Freshness is not decided here: the store reports the
/// stored timestamp and the provider compares it against its TTL.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheStore {
    /// Creates a cache store rooted at the given directory
    pub fn new(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path of the cache file for a competition code
    fn cache_path(&self, competition: &str) -> PathBuf {
        self.cache_dir
            .join(format!("{}.jsonl", competition.to_lowercase()))
    }

    /// Reads the cache record for a competition
    ///
    /// # Returns
    /// * `CacheLookup::Found` when a well-formed two-line record exists
    /// * `CacheLookup::Miss` when no file exists
    /// * `CacheLookup::Corrupt` when the file exists but the metadata line
    ///   is malformed or the payload line is missing/empty
    pub fn read(&self, competition: &str) -> CacheLookup {
        let path = self.cache_path(competition);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return CacheLookup::Miss,
            Err(err) => {
                log::warn!("Cache file {} unreadable: {}", path.display(), err);
                return CacheLookup::Corrupt;
            }
        };

        let mut lines = content.splitn(2, '\n');
        let meta_line = lines.next().unwrap_or_default();
        let payload = lines.next().unwrap_or_default().trim_end_matches('\n');

        let meta: CacheMeta = match serde_json::from_str(meta_line) {
            Ok(meta) => meta,
            Err(err) => {
                log::warn!("Cache metadata in {} malformed: {}", path.display(), err);
                return CacheLookup::Corrupt;
            }
        };

        if payload.trim().is_empty() {
            log::warn!("Cache file {} has no payload line", path.display());
            return CacheLookup::Corrupt;
        }

        CacheLookup::Found(CacheRecord {
            last_update: meta.last_update,
            payload: payload.to_string(),
        })
    }

    /// Writes a cache record for a competition, overwriting any previous one
    ///
    /// Creates the cache directory if needed. The payload is stored verbatim
    /// on the second line, preserving non-ASCII characters unescaped.
    ///
    /// # Arguments
    /// * `competition` - Competition code used to key the file
    /// * `payload` - Raw API payload to persist
    /// * `now` - Timestamp recorded as the update time
    pub fn write(
        &self,
        competition: &str,
        payload: &str,
        now: DateTime<Utc>,
    ) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;

        let meta = serde_json::to_string(&CacheMeta { last_update: now })
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(competition), format!("{}\n{}", meta, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_store() -> (CacheStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = CacheStore::new(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_read_returns_miss_for_absent_record() {
        let (store, _temp_dir) = create_test_store();

        assert_eq!(store.read("bsa"), CacheLookup::Miss);
    }

    #[test]
    fn test_write_then_read_roundtrips_payload_byte_identical() {
        let (store, _temp_dir) = create_test_store();
        let payload = r#"{"standings":[{"table":[]}],"team":"São Paulo"}"#;
        let now = Utc::now();

        store.write("bsa", payload, now).expect("Write should succeed");

        match store.read("bsa") {
            CacheLookup::Found(record) => {
                assert_eq!(record.payload, payload, "Payload must round-trip unchanged");
                assert_eq!(record.last_update, now);
            }
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("nested").join("cache");
        let store = CacheStore::new(nested.clone());

        store.write("bsa", "{}", Utc::now()).expect("Write should succeed");

        assert!(nested.join("bsa.jsonl").exists());
    }

    #[test]
    fn test_cache_path_lowercases_competition_code() {
        let (store, temp_dir) = create_test_store();

        store.write("BSA", "{}", Utc::now()).expect("Write should succeed");

        assert!(temp_dir.path().join("bsa.jsonl").exists());
    }

    #[test]
    fn test_record_file_has_metadata_line_then_payload_line() {
        let (store, temp_dir) = create_test_store();
        let now = Utc::now();

        store.write("bsa", r#"{"standings":[]}"#, now).unwrap();

        let content = fs::read_to_string(temp_dir.path().join("bsa.jsonl")).unwrap();
        let mut lines = content.lines();
        let meta_line = lines.next().expect("Metadata line should exist");
        let payload_line = lines.next().expect("Payload line should exist");

        assert!(meta_line.contains("last_update"));
        assert_eq!(payload_line, r#"{"standings":[]}"#);
    }

    #[test]
    fn test_read_returns_corrupt_for_malformed_metadata() {
        let (store, temp_dir) = create_test_store();
        fs::write(
            temp_dir.path().join("bsa.jsonl"),
            "not json at all\n{\"standings\":[]}",
        )
        .unwrap();

        assert_eq!(store.read("bsa"), CacheLookup::Corrupt);
    }

    #[test]
    fn test_read_returns_corrupt_for_missing_payload_line() {
        let (store, temp_dir) = create_test_store();
        fs::write(
            temp_dir.path().join("bsa.jsonl"),
            "{\"last_update\":\"2024-06-01T12:00:00Z\"}",
        )
        .unwrap();

        assert_eq!(store.read("bsa"), CacheLookup::Corrupt);
    }

    #[test]
    fn test_read_returns_corrupt_for_empty_file() {
        let (store, temp_dir) = create_test_store();
        fs::write(temp_dir.path().join("bsa.jsonl"), "").unwrap();

        assert_eq!(store.read("bsa"), CacheLookup::Corrupt);
    }

    #[test]
    fn test_overwrite_replaces_previous_record() {
        let (store, _temp_dir) = create_test_store();
        let first = Utc::now() - Duration::hours(2);
        let second = Utc::now();

        store.write("bsa", r#"{"v":1}"#, first).unwrap();
        store.write("bsa", r#"{"v":2}"#, second).unwrap();

        match store.read("bsa") {
            CacheLookup::Found(record) => {
                assert_eq!(record.payload, r#"{"v":2}"#);
                assert_eq!(record.last_update, second);
            }
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_records_are_keyed_per_competition() {
        let (store, _temp_dir) = create_test_store();
        let now = Utc::now();

        store.write("bsa", r#"{"league":"br"}"#, now).unwrap();
        store.write("pl", r#"{"league":"en"}"#, now).unwrap();

        match (store.read("bsa"), store.read("pl")) {
            (CacheLookup::Found(br), CacheLookup::Found(en)) => {
                assert_eq!(br.payload, r#"{"league":"br"}"#);
                assert_eq!(en.payload, r#"{"league":"en"}"#);
            }
            other => panic!("Expected two Found records, got {:?}", other),
        }
    }
}
