use std::sync::RwLock;

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// InMemoryBookRepository keeps books in insertion order. Every operation takes the lock
// exactly once, so concurrent requests observe the same sequential behavior.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(vec![]),
        }
    }
}

fn position(books: &[BookEntity], id: &str) -> Option<usize> {
    books.iter().position(|b| b.book_id == id)
}

#[async_trait]
impl Repository<BookEntity> for InMemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write()?;
        books.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write()?;
        let index = position(&books, entity.book_id.as_str()).ok_or_else(|| {
            LibraryError::not_found(format!("book not found for {}", entity.book_id).as_str())
        })?;
        let inserted_at = books[index].inserted_at;
        books[index] = BookEntity {
            inserted_at,
            ..entity.clone()
        };
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read()?;
        books.iter().find(|b| b.book_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write()?;
        let index = position(&books, id).ok_or_else(|| {
            LibraryError::not_found(format!("book not found for {}", id).as_str())
        })?;
        books.remove(index);
        Ok(1)
    }

    async fn all(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read()?;
        Ok(books.clone())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_index_by_id(&self, id: &str) -> LibraryResult<Option<usize>> {
        let books = self.books.read()?;
        Ok(position(&books, id))
    }

    async fn len(&self) -> LibraryResult<usize> {
        let books = self.books.read()?;
        Ok(books.len())
    }
}
