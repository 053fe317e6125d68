use chrono::{DateTime, TimeZone, Utc};
use domain::{Author, Document};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once. Verbosity follows `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn timestamp(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 9, 30, 0).unwrap()
}

/// A document without an id, authored by `author_id`.
pub fn document(title: &str, content: &str, author_id: &str, day: u32) -> Document {
    Document::new(
        title,
        content,
        Author::new(author_id, format!("Author {author_id}")),
        timestamp(day),
    )
}
