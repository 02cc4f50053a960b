pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_index_by_id(&self, id: &str) -> LibraryResult<Option<usize>>;

    async fn len(&self) -> LibraryResult<usize>;
}
