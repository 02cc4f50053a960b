use std::sync::Arc;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) books: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, books: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config,
            books,
        }
    }
}

const STATUS_SUCCESS: &str = "success";
const STATUS_FAIL: &str = "fail";

// ApiResponse is the envelope shared by every successful reply
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self { status: STATUS_SUCCESS, message: None, data: Some(data) }
    }

    pub fn message_with_data(message: &str, data: T) -> Self {
        Self { status: STATUS_SUCCESS, message: Some(message.to_string()), data: Some(data) }
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> Self {
        Self { status: STATUS_SUCCESS, message: Some(message.to_string()), data: None }
    }
}

#[derive(Debug, Serialize)]
struct FailureBody {
    status: &'static str,
    message: String,
}

#[derive(Debug, PartialEq)]
pub struct ServerError {
    pub status: StatusCode,
    pub message: String,
}

impl ServerError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self { status, message: message.to_string() }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = FailureBody { status: STATUS_FAIL, message: self.message };
        (self.status, Json(body)).into_response()
    }
}

// Decodes a request body that axum may already have rejected (bad syntax, missing
// content type) so that every body failure ends up as a Serialization error.
pub(crate) fn parse_json<T: DeserializeOwned>(json: Result<Json<Value>, JsonRejection>) -> Result<T, CommandError> {
    let Json(value) = json.map_err(|rejection| LibraryError::serialization(rejection.body_text().as_str()))?;
    Ok(serde_json::from_value(value).map_err(LibraryError::from)?)
}

pub(crate) fn parse_query<T>(query: Result<T, QueryRejection>) -> Result<T, CommandError> {
    Ok(query.map_err(|rejection| LibraryError::serialization(rejection.body_text().as_str()))?)
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { message } => {
                ServerError::new(StatusCode::NOT_FOUND, message.as_str())
            }
            CommandError::Serialization { message } => {
                ServerError::new(StatusCode::BAD_REQUEST, message.as_str())
            }
            CommandError::Validation { message, .. } => {
                ServerError::new(StatusCode::BAD_REQUEST, message.as_str())
            }
            CommandError::Internal { .. } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}
