pub mod id_generator;
pub mod in_memory_repository;

pub use id_generator::UuidIdGenerator;
pub use in_memory_repository::InMemoryDocumentRepository;
