//! Ingestion records and record-file loading

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a record file
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON error on line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One record (paper) of the coauthorship dataset
///
/// Field names also accept the spreadsheet column names `paper_title`,
/// `doi` and `orcid`. Missing or null text fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(alias = "paper_title", default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(alias = "doi", default, deserialize_with = "null_as_empty")]
    pub doc_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub coauthors: String,
    #[serde(alias = "orcid", default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl Record {
    /// Create a record without an external identifier
    pub fn new(
        title: impl Into<String>,
        doc_id: impl Into<String>,
        coauthors: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            doc_id: doc_id.into(),
            coauthors: coauthors.into(),
            external_id: None,
        }
    }

    /// Set the external identifier field
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }
}

impl From<(String, String, String, Option<String>)> for Record {
    fn from((title, doc_id, coauthors, external_id): (String, String, String, Option<String>)) -> Self {
        Self {
            title,
            doc_id,
            coauthors,
            external_id,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Load records from a JSON array or a JSON Lines file
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, IngestError> {
    let text = std::fs::read_to_string(path)?;
    parse_records(&text)
}

/// Parse records from a JSON array or JSON Lines text
pub fn parse_records(text: &str) -> Result<Vec<Record>, IngestError> {
    if text.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(text)?);
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| IngestError::Line { line: i + 1, source })
        })
        .collect()
}
