use super::*;

/// Results posted by background tasks. Applied on the loop thread only.
pub(in crate::tui_shell) enum Update {
    Projects(Result<Vec<Project>>),
    ProjectDetails {
        project: String,
        result: Result<ProjectDetails>,
    },
    Collections {
        project: String,
        result: Result<Vec<Collection>>,
    },
    Documents {
        collection: String,
        result: Result<Vec<Document>>,
    },
    CollectionExpanded {
        path: String,
        result: Result<Vec<Document>>,
    },
    /// `details_generation` is the Details generation when the expand
    /// started; details are only written if nothing else claimed them since.
    DocumentExpanded {
        path: String,
        details_generation: u64,
        result: Result<(Document, Vec<Collection>)>,
    },
    DocumentOpened {
        path: String,
        result: Result<Document>,
    },
    Batch {
        cached: Vec<(String, Value)>,
        fetched: Vec<(String, Result<Document>)>,
    },
    QueryResults {
        collection: String,
        node: Option<String>,
        result: Result<Vec<Document>>,
    },
}

impl App {
    pub(super) fn apply_updates(&mut self) {
        for update in self.bridge.drain() {
            self.apply(update);
        }
    }

    pub(super) fn apply(&mut self, update: Update) {
        match update {
            Update::Projects(result) => {
                self.projects_loading = false;
                match result {
                    Ok(projects) => {
                        let n = projects.len();
                        self.projects = projects;
                        self.log("projects", format!("Loaded {} projects", n), ActivityStatus::Success);
                    }
                    Err(err) => self.log_error("projects", &err),
                }
            }

            Update::ProjectDetails { project, result } => match result {
                Ok(details) => {
                    self.details = DetailsContent::Project(details);
                    self.details_scroll = 0;
                    self.project_expanded = Some(project.clone());
                    self.log("project", format!("Loaded details for {}", project), ActivityStatus::Success);
                }
                Err(err) => self.log_error("project", &err),
            },

            Update::Collections { project, result } => {
                if self.project.as_deref() != Some(project.as_str()) {
                    return;
                }
                match result {
                    Ok(collections) => {
                        let n = collections.len();
                        self.collections = collections;
                        self.collections_idx = 0;
                        self.log(
                            "collections",
                            format!("Loaded {} collections for {}", n, project),
                            ActivityStatus::Success,
                        );
                    }
                    Err(err) => self.log_error("collections", &err),
                }
            }

            Update::Documents { collection, result } => {
                self.tree_loading = false;
                match result {
                    Ok(docs) => {
                        let n = docs.len();
                        self.tree.replace(docs.iter().map(Node::document).collect());
                        self.tree_idx = 0;
                        self.selection.exit();
                        self.log(
                            "documents",
                            format!("Loaded {} documents from {}", n, collection),
                            ActivityStatus::Success,
                        );
                    }
                    Err(err) => self.log_error("documents", &err),
                }
            }

            Update::CollectionExpanded { path, result } => match result {
                Ok(docs) => {
                    let Some(idx) = self.tree.index_of(&path) else {
                        return;
                    };
                    if docs.is_empty() {
                        self.log("expand", format!("{} is empty", path), ActivityStatus::Success);
                        return;
                    }
                    let n = docs.len();
                    self.tree.expand(idx, docs.iter().map(Node::document).collect());
                    self.log(
                        "expand",
                        format!("Loaded {} documents under {}", n, path),
                        ActivityStatus::Success,
                    );
                }
                Err(err) => self.log_error("expand", &err),
            },

            Update::DocumentExpanded {
                path,
                details_generation,
                result,
            } => match result {
                Ok((doc, subcollections)) => {
                    let data = doc.data();
                    self.cache.insert(&path, data.clone());
                    if self.bridge.generation(&Target::Details) == details_generation {
                        self.details = DetailsContent::Document {
                            path: path.clone(),
                            data,
                        };
                        self.details_scroll = 0;
                    } else {
                        tracing::debug!(%path, "details moved on, expand only fills the tree");
                    }
                    let Some(idx) = self.tree.index_of(&path) else {
                        return;
                    };
                    if subcollections.is_empty() {
                        self.log("expand", format!("No subcollections under {}", path), ActivityStatus::Success);
                        return;
                    }
                    let n = subcollections.len();
                    self.tree
                        .expand(idx, subcollections.iter().map(Node::collection).collect());
                    self.log(
                        "expand",
                        format!("Loaded {} subcollections under {}", n, path),
                        ActivityStatus::Success,
                    );
                }
                Err(err) => self.log_error("expand", &err),
            },

            Update::DocumentOpened { path, result } => match result {
                Ok(doc) => {
                    let data = doc.data();
                    self.cache.insert(&path, data.clone());
                    self.details = DetailsContent::Document { path, data };
                    self.details_scroll = 0;
                }
                Err(err) => {
                    self.details = DetailsContent::Empty;
                    self.log_error("document", &err);
                }
            },

            Update::Batch { cached, fetched } => self.apply_batch(cached, fetched),

            Update::QueryResults {
                collection,
                node,
                result,
            } => {
                self.tree_loading = false;
                match result {
                    Ok(docs) => self.apply_query_results(&collection, node.as_deref(), docs),
                    Err(err) => self.log_error("query", &err),
                }
            }
        }
        self.clamp_cursors();
    }

    /// Successes are merged and shown together; each failure is its own entry.
    fn apply_batch(&mut self, cached: Vec<(String, Value)>, fetched: Vec<(String, Result<Document>)>) {
        let mut combined = serde_json::Map::new();
        for (path, data) in cached {
            combined.insert(path, data);
        }
        let fetched_any = !fetched.is_empty();
        let mut failed = 0usize;
        for (path, result) in fetched {
            match result {
                Ok(doc) => {
                    let data = doc.data();
                    self.cache.insert(&path, data.clone());
                    combined.insert(path, data);
                }
                Err(err) => {
                    failed += 1;
                    self.log("select", format!("{}: {:#}", path, err), ActivityStatus::Error);
                }
            }
        }
        let count = combined.len();
        self.details = DetailsContent::Batch {
            count,
            data: Value::Object(combined),
        };
        self.details_scroll = 0;
        let status = if failed == 0 {
            ActivityStatus::Success
        } else {
            ActivityStatus::Error
        };
        let mut msg = if fetched_any {
            format!("Fetched {} documents", count)
        } else {
            format!("Using {} cached documents", count)
        };
        if failed > 0 {
            msg.push_str(&format!(" ({} failed)", failed));
        }
        self.log("select", msg, status);
    }

    fn apply_query_results(&mut self, collection: &str, node: Option<&str>, docs: Vec<Document>) {
        for doc in &docs {
            self.cache.insert(&doc.path, doc.data());
        }
        let n = docs.len();
        let nodes: Vec<Node> = docs.iter().map(Node::document).collect();

        match node {
            None => {
                self.tree.query_replace(None, nodes);
                self.tree_idx = 0;
                self.selection.exit();
            }
            Some(path) => {
                let Some(idx) = self.tree.index_of(path) else {
                    return;
                };
                self.tree.query_replace(Some(idx), nodes);
                if let Some(first) = self.tree.get(idx + 1).filter(|_| n > 0) {
                    let first = first.path.clone();
                    self.focus_tree_path(&first);
                }
            }
        }
        self.log(
            "query",
            format!("Found {} documents in {}", n, collection),
            ActivityStatus::Success,
        );
    }
}
