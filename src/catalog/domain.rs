pub mod filter;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookInput, BookSummaryDto};
use crate::catalog::domain::filter::BookFilter;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookInput) -> LibraryResult<String>;
    async fn find_books(&self, filter: &BookFilter) -> LibraryResult<Vec<BookSummaryDto>>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn update_book(&self, id: &str, book: &BookInput) -> LibraryResult<()>;
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
}
