use application::IdGenerator;
use domain::DocumentId;
use uuid::Uuid;

/// Generates random v4 UUIDs in their hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> DocumentId {
        DocumentId::new(Uuid::new_v4().to_string())
    }
}
