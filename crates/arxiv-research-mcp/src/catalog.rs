//! Paper catalog: the operations behind the MCP tools.
//!
//! Ties the index client and the flat-file store together. Search fetches
//! from the index and folds the results into the topic's partition; lookup
//! scans every partition for a stored identifier.

use std::path::PathBuf;

use crate::client::ArxivClient;
use crate::config::{Config, api};
use crate::error::{ToolError, ToolResult};
use crate::models::PaperRecord;
use crate::store::{PaperStore, normalize_topic};

/// Facade over the index client and the paper store.
#[derive(Debug)]
pub struct Catalog {
    client: ArxivClient,
    store: PaperStore,
}

impl Catalog {
    /// Create a catalog from an already-built client and store.
    #[must_use]
    pub fn new(client: ArxivClient, store: PaperStore) -> Self {
        Self { client, store }
    }

    /// Build a catalog straight from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = ArxivClient::new(config)?;
        let store = PaperStore::new(config.paper_dir.clone());
        Ok(Self::new(client, store))
    }

    /// The store this catalog persists into.
    #[must_use]
    pub fn store(&self) -> &PaperStore {
        &self.store
    }

    /// Search the index for a topic and fold the results into its partition.
    ///
    /// Returns the short identifiers of the fetched papers in relevance
    /// order. Existing records under other identifiers stay untouched;
    /// refetched identifiers are overwritten with fresh metadata.
    ///
    /// A non-positive `max_results` falls back to the default result count.
    ///
    /// # Errors
    ///
    /// Returns error when the topic is empty, the index is unreachable or
    /// sends back a malformed feed, or the partition cannot be written. The
    /// index is queried before the partition is touched, so an index failure
    /// leaves the store exactly as it was.
    pub async fn search(&self, topic: &str, max_results: i32) -> ToolResult<Vec<String>> {
        if normalize_topic(topic).is_empty() {
            return Err(ToolError::validation("topic", "must not be empty"));
        }
        let limit = if max_results <= 0 { api::DEFAULT_MAX_RESULTS } else { max_results };

        let papers = self.client.search(topic, limit).await?;

        let mut mapping = self.store.load_topic(topic).await;
        let mut paper_ids = Vec::with_capacity(papers.len());
        for paper in papers {
            paper_ids.push(paper.short_id.clone());
            mapping.insert(paper.short_id, paper.record);
        }

        let path = self.store.save_topic(topic, &mapping).await?;
        tracing::info!(topic, count = paper_ids.len(), path = %path.display(), "results saved");

        Ok(paper_ids)
    }

    /// Look a paper up by identifier across every topic partition.
    ///
    /// # Errors
    ///
    /// Returns error only when the store root exists but cannot be listed.
    pub async fn lookup(&self, paper_id: &str) -> ToolResult<LookupOutcome> {
        if !self.store.root_exists().await {
            return Ok(LookupOutcome::RootMissing { root: self.store.root().to_path_buf() });
        }

        match self.store.find_paper(paper_id).await? {
            Some(record) => Ok(LookupOutcome::Found(record)),
            None => Ok(LookupOutcome::NotFound { paper_id: paper_id.to_string() }),
        }
    }
}

/// What a lookup found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The identifier is stored; here is its record.
    Found(PaperRecord),

    /// No partition holds the identifier.
    NotFound {
        /// Identifier that was asked for.
        paper_id: String,
    },

    /// The store root directory does not exist yet.
    RootMissing {
        /// Root that was checked.
        root: PathBuf,
    },
}

impl LookupOutcome {
    /// Stored record, when the lookup found one.
    #[must_use]
    pub fn record(&self) -> Option<&PaperRecord> {
        match self {
            Self::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Render the outcome the way the lookup tool reports it: the record as
    /// pretty JSON, or a fixed explanatory sentence.
    ///
    /// # Errors
    ///
    /// Returns error if the record cannot be serialized.
    pub fn to_text(&self) -> ToolResult<String> {
        match self {
            Self::Found(record) => Ok(serde_json::to_string_pretty(record)?),
            Self::NotFound { paper_id } => {
                Ok(format!("There's no saved information related to paper {paper_id}."))
            }
            Self::RootMissing { root } => {
                Ok(format!("Papers directory '{}' does not exist.", root.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_lookup_with_missing_root_short_circuits() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::for_testing("http://127.0.0.1:9", temp.path().join("never_created"));
        let catalog = Catalog::from_config(&config).unwrap();

        let outcome = tokio_test::block_on(catalog.lookup("2301.00001v1")).unwrap();
        assert!(matches!(outcome, LookupOutcome::RootMissing { .. }));
    }

    #[test]
    fn test_not_found_text_names_the_id() {
        let outcome = LookupOutcome::NotFound { paper_id: "2301.99999v9".to_string() };
        assert_eq!(
            outcome.to_text().unwrap(),
            "There's no saved information related to paper 2301.99999v9."
        );
    }

    #[test]
    fn test_root_missing_text_names_the_root() {
        let outcome = LookupOutcome::RootMissing { root: PathBuf::from("papers") };
        assert_eq!(outcome.to_text().unwrap(), "Papers directory 'papers' does not exist.");
    }

    #[test]
    fn test_found_text_is_pretty_json() {
        let record = PaperRecord {
            title: "A Title".to_string(),
            authors: vec!["B. Author".to_string()],
            summary: "Sum.".to_string(),
            pdf_url: None,
            published: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };
        let outcome = LookupOutcome::Found(record.clone());

        let text = outcome.to_text().unwrap();
        assert!(text.starts_with("{\n"));
        let back: PaperRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
        assert_eq!(outcome.record(), Some(&record));
    }
}
