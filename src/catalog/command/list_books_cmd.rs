use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookSummaryDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::filter::BookFilter;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Query string of GET /books; reading and finished arrive as "0"/"1".
#[derive(Debug, Default)]
pub(crate) struct ListBooksCommandRequest {
    pub(crate) name: Option<String>,
    pub(crate) reading: Option<String>,
    pub(crate) finished: Option<String>,
}

impl ListBooksCommandRequest {
    // A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| pairs.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.to_string());
        Self {
            name: first("name"),
            reading: first("reading"),
            finished: first("finished"),
        }
    }

    pub fn build_filter(&self) -> BookFilter {
        BookFilter::from_query(self.name.as_deref(), self.reading.as_deref(), self.finished.as_deref())
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookSummaryDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookSummaryDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.find_books(&req.build_filter())
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
