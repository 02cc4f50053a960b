use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookInput;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub book_id: String,
    pub book: BookInput,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, book: BookInput) -> Self {
        Self {
            book_id: book_id.to_string(),
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {}

impl UpdateBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id.as_str(), &req.book).await
            .map_err(CommandError::from).map(|_| UpdateBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookInput;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let books = create_book_repository();
        let add_cmd = AddBookCommand::new(factory::create_catalog_service(&Configuration::new(), books.clone()));
        let update_cmd = UpdateBookCommand::new(factory::create_catalog_service(&Configuration::new(), books.clone()));
        let get_cmd = GetBookCommand::new(factory::create_catalog_service(&Configuration::new(), books));

        let res = add_cmd.execute(AddBookCommandRequest::new(BookInput::new("test book", 10, 2)))
                                    .await.expect("should add book");
        let req = UpdateBookCommandRequest::new(res.book_id.as_str(), BookInput::new("new title", 10, 10));
        let _ = update_cmd.execute(req).await.expect("should update book");

        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book_id)).await.expect("should get book");
        assert_eq!("new title", loaded.book.name.as_str());
        assert!(loaded.book.finished);
    }

    #[tokio::test]
    async fn test_should_not_update_unknown_book() {
        let update_cmd = UpdateBookCommand::new(factory::create_catalog_service(&Configuration::new(), create_book_repository()));
        let res = update_cmd.execute(UpdateBookCommandRequest::new("unknown", BookInput::new("x", 1, 1))).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
