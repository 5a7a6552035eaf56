use super::types::{
    ListCollectionIdsRequest, ListCollectionIdsResponse, ListDocumentsResponse,
    ListProjectsResponse, RunQueryRequest, RunQueryRow, WireDocument,
};
use super::*;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::model::parent_path;

const COLLECTION_IDS_PAGE_SIZE: u32 = 300;

impl RestStore {
    /// Collection ids under `parent` (a document path) or at the root.
    fn list_collection_ids(&self, project: &str, parent: Option<&str>) -> Result<Vec<String>> {
        let suffix = match parent {
            Some(p) => format!("/{}:listCollectionIds", p),
            None => ":listCollectionIds".to_string(),
        };
        let url = self.documents_url(project, &suffix);

        let mut ids = Vec::new();
        let mut page_token = String::new();
        loop {
            let resp = self
                .client
                .post(&url)
                .header(reqwest::header::AUTHORIZATION, self.auth())
                .json(&ListCollectionIdsRequest {
                    page_size: COLLECTION_IDS_PAGE_SIZE,
                    page_token: page_token.clone(),
                })
                .send()
                .context("list collection ids request")?;

            if parent.is_some() && !resp.status().is_success() {
                tracing::debug!(status = %resp.status(), ?parent, "no subcollections");
                return Ok(Vec::new());
            }

            let page: ListCollectionIdsResponse = self
                .ensure_ok(resp, "list collection ids")?
                .json()
                .context("parse collection ids")?;
            ids.extend(page.collection_ids);
            if page.next_page_token.is_empty() {
                break;
            }
            page_token = page.next_page_token;
        }
        Ok(ids)
    }

    fn configured_projects(&self) -> Vec<Project> {
        self.cfg
            .projects
            .iter()
            .map(|id| Project {
                id: id.clone(),
                display_name: String::new(),
            })
            .collect()
    }

    fn fetch_projects(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        let mut page_token = String::new();
        loop {
            let mut req = self
                .client
                .get(self.management_url("/projects"))
                .header(reqwest::header::AUTHORIZATION, self.auth());
            if !page_token.is_empty() {
                req = req.query(&[("pageToken", page_token.as_str())]);
            }
            let resp = req.send().context("list projects request")?;
            let page: ListProjectsResponse = self
                .ensure_ok(resp, "list projects")?
                .json()
                .context("parse projects")?;
            projects.extend(page.results.into_iter().map(|p| Project {
                id: p.project_id,
                display_name: p.display_name,
            }));
            if page.next_page_token.is_empty() {
                break;
            }
            page_token = page.next_page_token;
        }
        Ok(projects)
    }
}

impl DocumentStore for RestStore {
    fn list_projects(&self) -> Result<Vec<Project>> {
        if self.cfg.is_emulator() {
            return Ok(self.configured_projects());
        }
        match self.fetch_projects() {
            Ok(projects) => Ok(projects),
            Err(err) if !self.cfg.projects.is_empty() => {
                tracing::warn!(error = %format!("{:#}", err), "project listing failed; using configured projects");
                Ok(self.configured_projects())
            }
            Err(err) => Err(err),
        }
    }

    fn project_details(&self, project: &str) -> Result<ProjectDetails> {
        let resp = self
            .client
            .get(self.management_url(&format!("/projects/{}", project)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("get project request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("project {} not found", project);
        }

        let p: super::types::WireProject = self
            .ensure_ok(resp, "get project")?
            .json()
            .context("parse project")?;
        Ok(ProjectDetails {
            id: p.project_id,
            number: p.project_number,
            display_name: p.display_name,
            state: p.state,
            resources: p.resources,
        })
    }

    fn list_collections(&self, project: &str) -> Result<Vec<Collection>> {
        let ids = self.list_collection_ids(project, None)?;
        Ok(ids.iter().map(|id| Collection::under(None, id)).collect())
    }

    fn list_documents(
        &self,
        project: &str,
        collection_path: &str,
        limit: u32,
    ) -> Result<Vec<Document>> {
        let page_size = if limit == 0 { DEFAULT_PAGE_SIZE } else { limit };
        let resp = self
            .client
            .get(self.documents_url(project, &format!("/{}", collection_path)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .query(&[("pageSize", page_size)])
            .send()
            .context("list documents request")?;

        let body: ListDocumentsResponse = self
            .ensure_ok(resp, "list documents")?
            .json()
            .context("parse documents")?;
        Ok(body
            .documents
            .into_iter()
            .map(WireDocument::into_document)
            .collect())
    }

    fn get_document(&self, project: &str, path: &str) -> Result<Document> {
        let resp = self
            .client
            .get(self.documents_url(project, &format!("/{}", path)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("get document request")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("document {} not found", path);
        }

        let doc: WireDocument = self
            .ensure_ok(resp, "get document")?
            .json()
            .context("parse document")?;
        Ok(doc.into_document())
    }

    fn list_subcollections(&self, project: &str, document_path: &str) -> Result<Vec<Collection>> {
        let ids = self.list_collection_ids(project, Some(document_path))?;
        Ok(ids
            .iter()
            .map(|id| Collection::under(Some(document_path), id))
            .collect())
    }

    fn run_query(
        &self,
        project: &str,
        collection_path: &str,
        query: &StructuredQuery,
    ) -> Result<Vec<Document>> {
        let suffix = match parent_path(collection_path) {
            Some(parent) => format!("/{}:runQuery", parent),
            None => ":runQuery".to_string(),
        };
        let resp = self
            .client
            .post(self.documents_url(project, &suffix))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(&RunQueryRequest {
                structured_query: query,
            })
            .send()
            .context("run query request")?;

        let rows: Vec<RunQueryRow> = self
            .ensure_ok(resp, "run query")?
            .json()
            .context("parse query results")?;
        Ok(rows
            .into_iter()
            .filter_map(|row| row.document)
            .filter(|doc| !doc.name.is_empty())
            .map(WireDocument::into_document)
            .collect())
    }
}
