mod json;

pub use json::JsonBackend;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Wire types mirror the two backend endpoints the UI talks to. The engine
/// only ever sees these shapes; how a backend produces them is its business.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatRequest {
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResponse {
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub data: String,
    pub search_term: String,
}

/// One entry of the results list: the matched value plus an optional
/// structural locator for display and clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One literal value to highlight in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub matches: Vec<SearchMatch>,
}

/// Pretty-print raw text, or fail with a user-facing error.
pub trait FormatService {
    fn format(&self, request: &FormatRequest) -> Result<FormatResponse>;
}

/// Search raw text for a term, returning hits for the results list and
/// literal match values for the highlight overlay.
pub trait SearchService {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}
