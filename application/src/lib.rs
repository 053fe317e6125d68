use domain::{Document, DocumentId, SearchRequest};

// --- Infrastructure Interfaces (Traits) ---

/// Interface for storing, searching and retrieving documents.
///
/// All operations are synchronous and total: absence is reported through
/// `Option` or an empty result, never through an error.
pub trait DocumentRepository {
    /// Upserts a document and returns the stored state.
    ///
    /// A document without an id gets a freshly generated unique one. A
    /// document whose id is already stored has its `title`, `content`,
    /// `author` and `created` written over the stored instance; otherwise it
    /// is appended with the caller's id.
    fn save(&mut self, document: Document) -> Document;

    /// Returns every stored document matching all constraints of `request`,
    /// in insertion order.
    fn search(&self, request: &SearchRequest) -> Vec<Document>;

    /// Looks a document up by its raw identifier. `None` is never found.
    fn find_by_id(&self, id: Option<&str>) -> Option<Document>;
}

/// Source of candidate document identifiers.
///
/// Candidates need not be unique; the repository retries until it gets one
/// that is not already stored.
pub trait IdGenerator {
    fn next_id(&mut self) -> DocumentId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> DocumentId,
{
    fn next_id(&mut self) -> DocumentId {
        self()
    }
}
