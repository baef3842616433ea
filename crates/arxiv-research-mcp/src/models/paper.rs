//! Paper records as stored in the catalog.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored metadata for one indexed paper.
///
/// Field declaration order is the key order in saved mapping files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title, whitespace runs collapsed to single spaces.
    pub title: String,

    /// Author display names in feed order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Abstract text.
    #[serde(default)]
    pub summary: String,

    /// Direct PDF link, when the index advertises one.
    #[serde(default)]
    pub pdf_url: Option<String>,

    /// Date the paper was first published.
    pub published: NaiveDate,
}

/// A paper as returned by an index search: storage key plus record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedPaper {
    /// Short arXiv identifier, e.g. `2301.00001v1`.
    pub short_id: String,

    /// The record stored under that identifier.
    pub record: PaperRecord,
}

/// Mapping from paper identifier to record, one per partition file.
///
/// `BTreeMap` keeps saved files deterministically ordered.
pub type PaperMap = BTreeMap<String, PaperRecord>;
