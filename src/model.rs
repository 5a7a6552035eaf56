use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,

    #[serde(default)]
    pub display_name: String,
}

impl Project {
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub id: String,
    pub number: String,
    pub display_name: String,
    pub state: String,

    #[serde(default)]
    pub resources: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    pub path: String,
}

impl Collection {
    /// Collection rooted at `parent` (a document path) or at the top level.
    pub fn under(parent: Option<&str>, name: &str) -> Self {
        let path = match parent {
            Some(p) if !p.is_empty() => format!("{}/{}", p, name),
            _ => name.to_string(),
        };
        Self {
            name: name.to_string(),
            path,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub path: String,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    pub fn data(&self) -> serde_json::Value {
        serde_json::Value::Object(self.fields.clone())
    }
}

/// Last `/`-separated segment of a store path.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Parent path of a collection or document path; `None` at the top level.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}
