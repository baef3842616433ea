//! Flat-file paper store.
//!
//! Records live under one root directory, partitioned by topic: each topic
//! gets a directory holding a single `papers_info.json` mapping document.
//! The layout is deliberately transparent so the files can be inspected and
//! hand-edited.
//!
//! Reads are forgiving: a missing or unreadable partition behaves like an
//! empty one. Writes are not, they surface as [`StoreError`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{StoreError, StoreResult};
use crate::models::{PaperMap, PaperRecord};

/// File name of the mapping document inside every topic partition.
pub const PAPERS_INFO_FILE: &str = "papers_info.json";

/// Normalize a topic into a partition directory name.
///
/// Lowercases, collapses whitespace runs to single underscores, and replaces
/// path separators so the result is always a single path component. Dot-only
/// names map to `_` too: a partition may never address `.` or `..`.
/// Distinct topics may normalize to the same partition and then share it.
#[must_use]
pub fn normalize_topic(topic: &str) -> String {
    let lowered = topic.to_lowercase();
    let joined = lowered.split_whitespace().collect::<Vec<_>>().join("_");
    let mapped: String =
        joined.chars().map(|c| if c == '/' || c == '\\' { '_' } else { c }).collect();
    if !mapped.is_empty() && mapped.chars().all(|c| c == '.') {
        return "_".to_string();
    }
    mapped
}

/// Store rooted at a papers directory.
#[derive(Debug, Clone)]
pub struct PaperStore {
    /// Root directory holding one subdirectory per topic.
    root: PathBuf,
}

impl PaperStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is not created here; partitions appear on first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the root directory exists at all.
    pub async fn root_exists(&self) -> bool {
        fs::try_exists(&self.root).await.unwrap_or(false)
    }

    /// Path of the mapping document for a topic.
    #[must_use]
    pub fn partition_file(&self, topic: &str) -> PathBuf {
        self.root.join(normalize_topic(topic)).join(PAPERS_INFO_FILE)
    }

    /// Load the mapping for a topic.
    ///
    /// A missing or unreadable mapping loads as empty; unreadable ones are
    /// logged since the next save will overwrite them.
    pub async fn load_topic(&self, topic: &str) -> PaperMap {
        let path = self.partition_file(topic);
        match read_mapping(&path).await {
            MappingRead::Loaded(mapping) => mapping,
            MappingRead::Missing => PaperMap::new(),
            MappingRead::Failed(reason) => {
                tracing::warn!(path = %path.display(), %reason, "unreadable mapping treated as empty");
                PaperMap::new()
            }
        }
    }

    /// Write the full mapping for a topic, creating the partition if needed.
    ///
    /// Returns the path of the written mapping document.
    ///
    /// # Errors
    ///
    /// Returns error if the partition cannot be created or written.
    pub async fn save_topic(&self, topic: &str, papers: &PaperMap) -> StoreResult<PathBuf> {
        let dir = self.root.join(normalize_topic(topic));
        fs::create_dir_all(&dir).await.map_err(|e| StoreError::io(&dir, e))?;

        let path = dir.join(PAPERS_INFO_FILE);
        let body = serde_json::to_string_pretty(papers)?;
        fs::write(&path, body).await.map_err(|e| StoreError::io(&path, e))?;

        Ok(path)
    }

    /// Scan every partition for a paper identifier, first match wins.
    ///
    /// Partitions that are missing their mapping document or fail to parse
    /// are skipped. Scan order across partitions is not specified.
    ///
    /// # Errors
    ///
    /// Returns error if the root directory cannot be listed.
    pub async fn find_paper(&self, paper_id: &str) -> StoreResult<Option<PaperRecord>> {
        let mut entries = fs::read_dir(&self.root).await.map_err(|e| StoreError::io(&self.root, e))?;

        while let Some(entry) =
            entries.next_entry().await.map_err(|e| StoreError::io(&self.root, e))?
        {
            let is_dir = entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }

            let path = entry.path().join(PAPERS_INFO_FILE);
            let mapping = match read_mapping(&path).await {
                MappingRead::Loaded(mapping) => mapping,
                MappingRead::Missing => continue,
                MappingRead::Failed(reason) => {
                    tracing::warn!(path = %path.display(), %reason, "skipping unreadable partition");
                    continue;
                }
            };

            if let Some(record) = mapping.get(paper_id) {
                return Ok(Some(record.clone()));
            }
        }

        Ok(None)
    }
}

/// Outcome of reading one mapping document.
enum MappingRead {
    Loaded(PaperMap),
    Missing,
    Failed(String),
}

async fn read_mapping(path: &Path) -> MappingRead {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return MappingRead::Missing,
        Err(err) => return MappingRead::Failed(err.to_string()),
    };
    match serde_json::from_str(&raw) {
        Ok(mapping) => MappingRead::Loaded(mapping),
        Err(err) => MappingRead::Failed(err.to_string()),
    }
}
