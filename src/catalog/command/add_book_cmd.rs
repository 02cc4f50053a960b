use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookInput;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) book: BookInput,
}

impl AddBookCommandRequest {
    pub fn new(book: BookInput) -> Self {
        Self {
            book,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddBookCommandResponse {
    pub book_id: String,
}

impl AddBookCommandResponse {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
