use anyhow::{Context, Result};

use crate::config::StoreConfig;
use crate::model::{Collection, Document, Project, ProjectDetails};
use crate::query::StructuredQuery;

mod auth;
pub use self::auth::resolve_token;

mod http_client;
mod operations;
mod types;
mod values;
pub use self::values::{decode_fields, decode_value};

/// Document store surface used by the browser. Every call blocks and is
/// made from a background task, never from the render loop.
pub trait DocumentStore: Send + Sync {
    fn list_projects(&self) -> Result<Vec<Project>>;

    fn project_details(&self, project: &str) -> Result<ProjectDetails>;

    fn list_collections(&self, project: &str) -> Result<Vec<Collection>>;

    /// `limit` of zero means the default page size.
    fn list_documents(&self, project: &str, collection_path: &str, limit: u32)
    -> Result<Vec<Document>>;

    fn get_document(&self, project: &str, path: &str) -> Result<Document>;

    /// No subcollections is an empty list, not an error.
    fn list_subcollections(&self, project: &str, document_path: &str) -> Result<Vec<Collection>>;

    fn run_query(
        &self,
        project: &str,
        collection_path: &str,
        query: &StructuredQuery,
    ) -> Result<Vec<Document>>;
}

pub struct RestStore {
    cfg: StoreConfig,
    token: String,
    client: reqwest::blocking::Client,
}

impl RestStore {
    pub fn new(cfg: StoreConfig, token: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("firetree/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build reqwest client")?;
        Ok(Self { cfg, token, client })
    }
}
