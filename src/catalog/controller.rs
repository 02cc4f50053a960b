use axum::{
    extract::{Path, Query, State},
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::{REASON_MISSING_NAME, REASON_READ_PAGE_EXCEEDS_PAGE_COUNT};
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{ApiResponse, AppState, parse_json, parse_query, ServerError};

const MSG_ADDED: &str = "Buku berhasil ditambahkan";
const MSG_UPDATED: &str = "Buku berhasil diperbarui";
const MSG_REMOVED: &str = "Buku berhasil dihapus";
const MSG_INVALID_REQUEST: &str = "Format permintaan tidak valid";

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:book_id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// BookAction picks the wire wording of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BookAction {
    Add,
    List,
    Get,
    Update,
    Remove,
}

impl BookAction {
    fn failure_prefix(&self) -> &'static str {
        match self {
            BookAction::Add => "Gagal menambahkan buku",
            BookAction::List | BookAction::Get => "Gagal menampilkan buku",
            BookAction::Update => "Gagal memperbarui buku",
            BookAction::Remove => "Buku gagal dihapus",
        }
    }

    // Only operations addressed by id can miss.
    fn not_found_message(&self) -> Option<&'static str> {
        match self {
            BookAction::Get => Some("Buku tidak ditemukan"),
            BookAction::Update => Some("Gagal memperbarui buku. Id tidak ditemukan"),
            BookAction::Remove => Some("Buku gagal dihapus. Id tidak ditemukan"),
            BookAction::Add | BookAction::List => None,
        }
    }

    fn internal_message(&self) -> &'static str {
        match self {
            BookAction::Add => "Buku gagal ditambahkan",
            BookAction::List | BookAction::Get => "Buku gagal ditampilkan",
            BookAction::Update => "Buku gagal diperbarui",
            BookAction::Remove => "Buku gagal dihapus",
        }
    }
}

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.books.clone())
}

fn validation_reason(message: &str, reason_code: Option<&str>) -> String {
    match reason_code {
        Some(REASON_MISSING_NAME) => "Mohon isi nama buku".to_string(),
        Some(REASON_READ_PAGE_EXCEEDS_PAGE_COUNT) => "readPage tidak boleh lebih besar dari pageCount".to_string(),
        _ => message.to_string(),
    }
}

fn failure(err: CommandError, action: BookAction) -> ServerError {
    let prefix = action.failure_prefix();
    warn!(error = ?err, action = ?action, "{}", prefix);
    match err {
        CommandError::Validation { message, reason_code } => {
            let reason = validation_reason(message.as_str(), reason_code.as_deref());
            ServerError::new(StatusCode::BAD_REQUEST, format!("{}. {}", prefix, reason).as_str())
        }
        CommandError::Serialization { .. } => {
            ServerError::new(StatusCode::BAD_REQUEST, format!("{}. {}", prefix, MSG_INVALID_REQUEST).as_str())
        }
        CommandError::NotFound { message } => match action.not_found_message() {
            Some(not_found) => ServerError::new(StatusCode::NOT_FOUND, not_found),
            None => ServerError::from(CommandError::NotFound { message }),
        },
        CommandError::Internal { .. } => {
            ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, action.internal_message())
        }
    }
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<ApiResponse<AddBookCommandResponse>>), ServerError> {
    let book = parse_json(json).map_err(|err| failure(err, BookAction::Add))?;
    let req = AddBookCommandRequest::new(book);
    let svc = build_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await
        .map_err(|err| failure(err, BookAction::Add))?;
    info!(book_id = res.book_id.as_str(), "book added");
    Ok((StatusCode::CREATED, Json(ApiResponse::message_with_data(MSG_ADDED, res))))
}

pub(crate) async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> Result<Json<ApiResponse<ListBooksCommandResponse>>, ServerError> {
    let Query(pairs) = parse_query(query).map_err(|err| failure(err, BookAction::List))?;
    let req = ListBooksCommandRequest::from_pairs(&pairs);
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(req).await
        .map_err(|err| failure(err, BookAction::List))?;
    Ok(Json(ApiResponse::data(res)))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<ApiResponse<GetBookCommandResponse>>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await
        .map_err(|err| failure(err, BookAction::Get))?;
    Ok(Json(ApiResponse::data(res)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<ApiResponse<()>>, ServerError> {
    let book = parse_json(json).map_err(|err| failure(err, BookAction::Update))?;
    let req = UpdateBookCommandRequest::new(book_id.as_str(), book);
    let svc = build_service(&state);
    let _ = UpdateBookCommand::new(svc).execute(req).await
        .map_err(|err| failure(err, BookAction::Update))?;
    info!(book_id = book_id.as_str(), "book updated");
    Ok(Json(ApiResponse::message(MSG_UPDATED)))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<ApiResponse<()>>, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id.to_string());
    let svc = build_service(&state);
    let _ = RemoveBookCommand::new(svc).execute(req).await
        .map_err(|err| failure(err, BookAction::Remove))?;
    info!(book_id = book_id.as_str(), "book removed");
    Ok(Json(ApiResponse::message(MSG_REMOVED)))
}
