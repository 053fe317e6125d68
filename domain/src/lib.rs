use chrono::{DateTime, Utc}; // Creation timestamps
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error; // For domain-specific errors

// --- Domain Errors ---
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed document payload: {0}")]
    MalformedDocument(#[source] serde_json::Error),
    #[error("Malformed search request payload: {0}")]
    MalformedSearchRequest(#[source] serde_json::Error),
}

/// Decodes a JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Document ID ---

/// Identifier of a stored document. The empty id means "not yet assigned".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: String) -> Self {
        Self(id)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// True when the repository still has to assign an identifier.
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id.to_string())
    }
}
impl From<DocumentId> for String {
    fn from(doc_id: DocumentId) -> Self {
        doc_id.0
    }
}
impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Author ---

/// Creator of a document. Search compares authors by `id` only.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// --- Document ---

/// The stored record. Fields are public so a repository can merge an update
/// into the stored instance in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Empty until the repository assigns one; `null` in JSON decodes as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl Document {
    /// Creates a document without an identifier.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: DateTime<Utc>,
    ) -> Self {
        Self::with_id(DocumentId::default(), title, content, author, created)
    }

    /// Creates a document carrying a caller-supplied identifier.
    pub fn with_id(
        id: impl Into<DocumentId>,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author,
            created,
        }
    }

    /// Decodes a document from its JSON representation.
    pub fn from_json(payload: &str) -> Result<Self, DomainError> {
        serde_json::from_str(payload).map_err(DomainError::MalformedDocument)
    }
}

// --- Search Request ---

/// Filter descriptor for a repository search. Every empty list and every
/// `None` bound means "do not filter on this dimension".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Titles to match, compared for equality ignoring case (not as prefixes).
    #[serde(deserialize_with = "null_as_default")]
    pub title_prefixes: Vec<String>,
    /// Case-sensitive substrings of the content.
    #[serde(deserialize_with = "null_as_default")]
    pub contains_contents: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub author_ids: Vec<String>,
    /// Inclusive lower bound on `created`.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created`.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Decodes a search request from its JSON representation.
    pub fn from_json(payload: &str) -> Result<Self, DomainError> {
        serde_json::from_str(payload).map_err(DomainError::MalformedSearchRequest)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.title_prefixes.is_empty()
            && self.contains_contents.is_empty()
            && self.author_ids.is_empty()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }
}
