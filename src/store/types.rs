//! Request/response bodies for the REST endpoints.

use serde_json::{Map, Value};

use crate::model::{Document, last_segment};
use crate::query::StructuredQuery;

use super::values::decode_fields;

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListCollectionIdsRequest {
    pub(super) page_size: u32,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub(super) page_token: String,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListCollectionIdsResponse {
    #[serde(default)]
    pub(super) collection_ids: Vec<String>,

    #[serde(default)]
    pub(super) next_page_token: String,
}

#[derive(Debug, Default, serde::Deserialize)]
pub(super) struct ListDocumentsResponse {
    #[serde(default)]
    pub(super) documents: Vec<WireDocument>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct WireDocument {
    pub(super) name: String,

    #[serde(default)]
    pub(super) fields: Map<String, Value>,
}

impl WireDocument {
    pub(super) fn into_document(self) -> Document {
        let path = document_path(&self.name).to_string();
        Document {
            id: last_segment(&path).to_string(),
            path,
            fields: decode_fields(&self.fields),
        }
    }
}

/// Resource name → store path: everything after `/documents/`.
pub(super) fn document_path(name: &str) -> &str {
    match name.split_once("/documents/") {
        Some((_, path)) => path,
        None => name,
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RunQueryRequest<'a> {
    pub(super) structured_query: &'a StructuredQuery,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct RunQueryRow {
    #[serde(default)]
    pub(super) document: Option<WireDocument>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListProjectsResponse {
    #[serde(default)]
    pub(super) results: Vec<WireProject>,

    #[serde(default)]
    pub(super) next_page_token: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WireProject {
    pub(super) project_id: String,

    #[serde(default)]
    pub(super) display_name: String,

    #[serde(default)]
    pub(super) project_number: String,

    #[serde(default)]
    pub(super) state: String,

    #[serde(default)]
    pub(super) resources: Map<String, Value>,
}
