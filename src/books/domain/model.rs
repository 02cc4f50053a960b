use chrono::NaiveDateTime;
use crate::books::domain::Book;
use crate::books::dto::BookInput;

// BookEntity is a catalog record as held by the book store. `finished` is derived from
// the page counters and is never taken from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    pub book_id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
    pub finished: bool,
    pub inserted_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(book_id: &str, name: &str, input: &BookInput, now: NaiveDateTime) -> Self {
        Self {
            book_id: book_id.to_string(),
            name: name.to_string(),
            year: input.year,
            author: input.author.to_string(),
            summary: input.summary.to_string(),
            publisher: input.publisher.to_string(),
            page_count: input.page_count,
            read_page: input.read_page,
            reading: input.reading,
            finished: input.page_count == input.read_page,
            inserted_at: now,
            updated_at: now,
        }
    }
}

impl Book for BookEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn is_reading(&self) -> bool {
        self.reading
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
