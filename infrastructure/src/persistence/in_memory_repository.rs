use crate::persistence::UuidIdGenerator;
use crate::search::criteria;
use application::{DocumentRepository, IdGenerator};
use domain::{Document, DocumentId, SearchRequest};
use tracing::{debug, instrument, warn};

/// Ordered in-memory document store.
///
/// Documents keep their insertion order. The store is not synchronized;
/// callers sharing it across threads must serialize access themselves.
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository<G = UuidIdGenerator> {
    documents: Vec<Document>,
    id_generator: G,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::with_generator(UuidIdGenerator)
    }
}

impl<G: IdGenerator> InMemoryDocumentRepository<G> {
    /// Creates an empty repository drawing identifiers from `id_generator`.
    pub fn with_generator(id_generator: G) -> Self {
        Self {
            documents: Vec::new(),
            id_generator,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id.as_str() == id)
    }

    /// Draws candidates until one is non-empty and not already stored.
    fn generate_new_id(&mut self) -> DocumentId {
        loop {
            let candidate = self.id_generator.next_id();
            if candidate.is_unassigned() {
                warn!("Id generator produced an empty id, retrying");
                continue;
            }
            if self.position_of(candidate.as_str()).is_some() {
                warn!(doc_id = %candidate, "Generated id collides with a stored document, retrying");
                continue;
            }
            return candidate;
        }
    }
}

// Overwrites the four mutable fields; the stored id is kept.
fn merge_into(stored: &mut Document, incoming: Document) {
    let Document {
        title,
        content,
        author,
        created,
        ..
    } = incoming;
    stored.title = title;
    stored.content = content;
    stored.author = author;
    stored.created = created;
}

impl<G: IdGenerator> DocumentRepository for InMemoryDocumentRepository<G> {
    #[instrument(skip(self, document), fields(doc_id = %document.id))]
    fn save(&mut self, mut document: Document) -> Document {
        if document.id.is_unassigned() {
            document.id = self.generate_new_id();
            debug!(doc_id = %document.id, "Assigned new id, appending document to in-memory store");
            self.documents.push(document.clone());
            return document;
        }

        match self.position_of(document.id.as_str()) {
            Some(index) => {
                debug!("Merging update into stored document");
                let stored = &mut self.documents[index];
                merge_into(stored, document);
                stored.clone()
            }
            None => {
                debug!("Appending document with caller-supplied id to in-memory store");
                self.documents.push(document.clone());
                document
            }
        }
    }

    #[instrument(skip(self, request))]
    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        debug!(
            stored = self.documents.len(),
            unconstrained = request.is_unconstrained(),
            "Searching in-memory store"
        );
        let hits: Vec<Document> = self
            .documents
            .iter()
            .filter(|doc| criteria::matches(doc, request))
            .cloned()
            .collect();
        debug!(hits = hits.len(), "In-memory search finished.");
        hits
    }

    #[instrument(skip(self))]
    fn find_by_id(&self, id: Option<&str>) -> Option<Document> {
        let Some(id) = id else {
            debug!("No id given, nothing to look up");
            return None;
        };
        self.documents.iter().find(|doc| doc.id.as_str() == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain::Author;
    use std::collections::VecDeque;

    /// Replays a fixed list of candidates, then falls back to numbered ids.
    struct ScriptedIds {
        script: VecDeque<&'static str>,
        fallback: usize,
    }

    impl ScriptedIds {
        fn new(script: &[&'static str]) -> Self {
            Self {
                script: script.iter().copied().collect(),
                fallback: 0,
            }
        }
    }

    impl IdGenerator for ScriptedIds {
        fn next_id(&mut self) -> DocumentId {
            match self.script.pop_front() {
                Some(id) => DocumentId::from(id),
                None => {
                    self.fallback += 1;
                    DocumentId::new(format!("fallback-{}", self.fallback))
                }
            }
        }
    }

    fn doc(title: &str) -> Document {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Document::new(title, "body", Author::new("a1", "Ann"), created)
    }

    #[test]
    fn new_repository_is_empty() {
        let repo = InMemoryDocumentRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
    }

    #[test]
    fn colliding_candidates_are_retried() {
        let mut repo = InMemoryDocumentRepository::with_generator(ScriptedIds::new(&[
            "dup", "dup", "", "dup", "fresh",
        ]));
        let first = repo.save(doc("one"));
        let second = repo.save(doc("two"));
        assert_eq!(first.id.as_str(), "dup");
        assert_eq!(second.id.as_str(), "fresh");
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn caller_supplied_id_is_not_regenerated() {
        let mut repo = InMemoryDocumentRepository::with_generator(ScriptedIds::new(&[]));
        let mut input = doc("mine");
        input.id = DocumentId::from("custom-id");
        let saved = repo.save(input);
        assert_eq!(saved.id.as_str(), "custom-id");
        assert_eq!(repo.id_generator.fallback, 0);
    }

    #[test]
    fn generated_id_skips_caller_supplied_ids() {
        let mut repo = InMemoryDocumentRepository::with_generator(ScriptedIds::new(&[
            "taken", "free",
        ]));
        let mut input = doc("preexisting");
        input.id = DocumentId::from("taken");
        repo.save(input);

        let generated = repo.save(doc("generated"));
        assert_eq!(generated.id.as_str(), "free");
    }

    #[test]
    fn update_keeps_position_and_id() {
        let mut repo = InMemoryDocumentRepository::new();
        let first = repo.save(doc("first"));
        repo.save(doc("second"));

        let mut update = doc("first v2");
        update.id = first.id.clone();
        update.author = Author::new("a2", "Bob");
        let updated = repo.save(update);

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.author.id, "a2");
        let titles: Vec<String> = repo
            .search(&SearchRequest::default())
            .into_iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(titles, vec!["first v2".to_string(), "second".to_string()]);
    }

    #[test]
    fn find_by_empty_string_is_not_found() {
        let mut repo = InMemoryDocumentRepository::new();
        repo.save(doc("one"));
        assert!(repo.find_by_id(Some("")).is_none());
    }
}
