use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::utils::date::serializer;

// BookInput carries the caller-editable fields of a book for create and update. Only `name`
// may be absent at the boundary; it is checked before anything else is trusted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookInput {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl BookInput {
    pub fn new(name: &str, page_count: u32, read_page: u32) -> Self {
        Self {
            name: Some(name.to_string()),
            page_count,
            read_page,
            ..Default::default()
        }
    }
}

// BookDto is the full book record returned by the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(rename = "id")]
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
    #[serde(with = "serializer")]
    pub inserted_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

// BookSummaryDto is the list projection of a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummaryDto {
    pub id: String,
    pub name: String,
    pub publisher: String,
}
