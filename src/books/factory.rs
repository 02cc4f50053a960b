use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::InMemoryBookRepository;

// The catalog lives for the process lifetime only, so the in-memory store is the sole backend.
pub fn create_book_repository() -> Arc<dyn BookRepository> {
    Arc::new(InMemoryBookRepository::new())
}
