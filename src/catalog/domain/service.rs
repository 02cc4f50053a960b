use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookInput, BookSummaryDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::filter::BookFilter;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub const REASON_MISSING_NAME: &str = "missing_name";
pub const REASON_READ_PAGE_EXCEEDS_PAGE_COUNT: &str = "read_page_exceeds_page_count";

const BOOK_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
const BOOK_ID_LEN: usize = 16;

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

// Returns the book name once both catalog rules hold.
fn validate(book: &BookInput) -> LibraryResult<&str> {
    let name = match book.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(LibraryError::validation("missing name", Some(REASON_MISSING_NAME.to_string()))),
    };
    if book.read_page > book.page_count {
        return Err(LibraryError::validation(
            "readPage exceeds pageCount", Some(REASON_READ_PAGE_EXCEEDS_PAGE_COUNT.to_string())));
    }
    Ok(name)
}

fn mint_book_id() -> String {
    let mut rng = rand::thread_rng();
    (0..BOOK_ID_LEN)
        .map(|_| BOOK_ID_ALPHABET[rng.gen_range(0..BOOK_ID_ALPHABET.len())] as char)
        .collect()
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookInput) -> LibraryResult<String> {
        let name = validate(book)?;
        let book_id = mint_book_id();
        let entity = BookEntity::new(book_id.as_str(), name, book, Utc::now().naive_utc());
        self.book_repository.create(&entity).await?;
        Ok(book_id)
    }

    async fn find_books(&self, filter: &BookFilter) -> LibraryResult<Vec<BookSummaryDto>> {
        let books = self.book_repository.all().await?;
        Ok(books.iter().filter(|b| filter.matches(*b)).map(BookSummaryDto::from).collect())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn update_book(&self, id: &str, book: &BookInput) -> LibraryResult<()> {
        let name = validate(book)?;
        // the store keeps the original insertion time
        let entity = BookEntity::new(id, name, book, Utc::now().naive_utc());
        self.book_repository.update(&entity).await.map(|_| ())
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        self.book_repository.delete(id).await.map(|_| ())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            name: other.name.to_string(),
            year: other.year,
            author: other.author.to_string(),
            summary: other.summary.to_string(),
            publisher: other.publisher.to_string(),
            page_count: other.page_count,
            read_page: other.read_page,
            reading: other.reading,
            finished: other.finished,
            inserted_at: other.inserted_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookEntity> for BookSummaryDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id.to_string(),
            name: other.name.to_string(),
            publisher: other.publisher.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookInput;
    use crate::books::factory::create_book_repository;
    use crate::books::repository::BookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::filter::{BookFilter, FlagFilter};
    use crate::catalog::domain::service::{mint_book_id, REASON_MISSING_NAME, REASON_READ_PAGE_EXCEEDS_PAGE_COUNT};
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    fn new_service() -> (Box<dyn CatalogService>, Arc<dyn BookRepository>) {
        let books = create_book_repository();
        (factory::create_catalog_service(&Configuration::new(), books.clone()), books)
    }

    fn input(name: &str, publisher: &str, page_count: u32, read_page: u32, reading: bool) -> BookInput {
        let mut book = BookInput::new(name, page_count, read_page);
        book.publisher = publisher.to_string();
        book.reading = reading;
        book
    }

    #[tokio::test]
    async fn test_should_mint_fixed_length_ids() {
        let a = mint_book_id();
        let b = mint_book_id();
        assert_eq!(16, a.len());
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let (catalog_svc, _) = new_service();

        let book = input("Harry Potter", "Bloomsbury", 200, 200, false);
        let book_id = catalog_svc.add_book(&book).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_id(book_id.as_str()).await.expect("should return book");
        assert_eq!(book_id, loaded.book_id);
        assert_eq!("Harry Potter", loaded.name.as_str());
        assert!(loaded.finished);
        assert_eq!(loaded.inserted_at, loaded.updated_at);
    }

    #[tokio::test]
    async fn test_should_derive_finished_for_page_counts() {
        let (catalog_svc, _) = new_service();
        for (page_count, read_page) in [(0, 0), (10, 0), (10, 9), (10, 10), (500, 250)] {
            let book_id = catalog_svc.add_book(&input("book", "pub", page_count, read_page, false))
                .await.expect("should add book");
            let loaded = catalog_svc.find_book_by_id(book_id.as_str()).await.expect("should return book");
            assert_eq!(page_count == read_page, loaded.finished);
        }
    }

    #[tokio::test]
    async fn test_should_reject_book_without_name() {
        let (catalog_svc, books) = new_service();
        let mut book = input("", "pub", 10, 1, false);
        let res = catalog_svc.add_book(&book).await;
        assert!(matches!(res, Err(LibraryError::Validation { reason_code: Some(ref code), .. }) if code == REASON_MISSING_NAME));

        book.name = None;
        let res = catalog_svc.add_book(&book).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert_eq!(0, books.len().await.expect("should count books"));
    }

    #[tokio::test]
    async fn test_should_reject_read_page_over_page_count() {
        let (catalog_svc, books) = new_service();
        for (page_count, read_page) in [(100, 150), (0, 1), (10, 11)] {
            let res = catalog_svc.add_book(&input("book", "pub", page_count, read_page, false)).await;
            assert!(matches!(res, Err(LibraryError::Validation { reason_code: Some(ref code), .. }) if code == REASON_READ_PAGE_EXCEEDS_PAGE_COUNT));
        }
        assert_eq!(0, books.len().await.expect("should count books"));
    }

    #[tokio::test]
    async fn test_should_check_name_before_page_counts() {
        let (catalog_svc, _) = new_service();
        let res = catalog_svc.add_book(&input("", "pub", 100, 150, false)).await;
        assert!(matches!(res, Err(LibraryError::Validation { reason_code: Some(ref code), .. }) if code == REASON_MISSING_NAME));
    }

    #[tokio::test]
    async fn test_should_find_books_in_insertion_order() {
        let (catalog_svc, _) = new_service();
        let first = catalog_svc.add_book(&input("Dicoding Academy", "Dicoding", 10, 1, true)).await.expect("should add book");
        let second = catalog_svc.add_book(&input("Lain", "Other", 10, 10, false)).await.expect("should add book");

        let all = catalog_svc.find_books(&BookFilter::All).await.expect("should list books");
        assert_eq!(2, all.len());
        assert_eq!(first, all[0].id);
        assert_eq!("Dicoding", all[0].publisher.as_str());
        assert_eq!(second, all[1].id);
    }

    #[tokio::test]
    async fn test_should_filter_books() {
        let (catalog_svc, _) = new_service();
        let first = catalog_svc.add_book(&input("Dicoding Academy", "Dicoding", 10, 1, true)).await.expect("should add book");
        let second = catalog_svc.add_book(&input("Lain", "Other", 10, 10, false)).await.expect("should add book");

        let res = catalog_svc.find_books(&BookFilter::from_query(Some("dicoding"), None, None)).await.expect("should list books");
        assert_eq!(vec![first.clone()], res.iter().map(|b| b.id.clone()).collect::<Vec<_>>());

        let res = catalog_svc.find_books(&BookFilter::NameContains("nothing".to_string())).await.expect("should list books");
        assert!(res.is_empty());

        let res = catalog_svc.find_books(&BookFilter::Reading(FlagFilter::Is(true))).await.expect("should list books");
        assert_eq!(vec![first.clone()], res.iter().map(|b| b.id.clone()).collect::<Vec<_>>());

        let res = catalog_svc.find_books(&BookFilter::Finished(FlagFilter::Is(true))).await.expect("should list books");
        assert_eq!(vec![second], res.iter().map(|b| b.id.clone()).collect::<Vec<_>>());

        let res = catalog_svc.find_books(&BookFilter::Finished(FlagFilter::Unmatched)).await.expect("should list books");
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let (catalog_svc, _) = new_service();
        let book_id = catalog_svc.add_book(&input("test book", "pub", 100, 10, true)).await.expect("should add book");
        let before = catalog_svc.find_book_by_id(book_id.as_str()).await.expect("should return book");

        let mut changed = input("new title", "new pub", 100, 100, false);
        changed.author = "someone".to_string();
        catalog_svc.update_book(book_id.as_str(), &changed).await.expect("should update book");

        let loaded = catalog_svc.find_book_by_id(book_id.as_str()).await.expect("should return book");
        assert_eq!(before.book_id, loaded.book_id);
        assert_eq!(before.inserted_at, loaded.inserted_at);
        assert!(loaded.updated_at >= loaded.inserted_at);
        assert_eq!("new title", loaded.name.as_str());
        assert_eq!("someone", loaded.author.as_str());
        assert!(loaded.finished);
        assert!(!loaded.reading);
    }

    #[tokio::test]
    async fn test_should_validate_update_before_lookup() {
        let (catalog_svc, _) = new_service();
        let res = catalog_svc.update_book("unknown", &input("", "pub", 1, 1, false)).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        let res = catalog_svc.update_book("unknown", &input("x", "pub", 1, 2, false)).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        let res = catalog_svc.update_book("unknown", &input("x", "pub", 2, 1, false)).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_keep_book_on_rejected_update() {
        let (catalog_svc, _) = new_service();
        let book_id = catalog_svc.add_book(&input("test book", "pub", 100, 10, true)).await.expect("should add book");
        let res = catalog_svc.update_book(book_id.as_str(), &input("test book", "pub", 10, 100, true)).await;
        assert!(res.is_err());
        let loaded = catalog_svc.find_book_by_id(book_id.as_str()).await.expect("should return book");
        assert_eq!(100, loaded.page_count);
        assert_eq!(10, loaded.read_page);
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let (catalog_svc, _) = new_service();
        let book_id = catalog_svc.add_book(&input("test book", "pub", 10, 1, false)).await.expect("should add book");

        catalog_svc.remove_book(book_id.as_str()).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_id(book_id.as_str()).await;
        assert!(matches!(loaded, Err(LibraryError::NotFound { .. })));
        let res = catalog_svc.remove_book(book_id.as_str()).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }
}
