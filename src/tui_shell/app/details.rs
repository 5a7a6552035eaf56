use super::*;

#[derive(Clone, Debug)]
pub(in crate::tui_shell) enum DetailsContent {
    Empty,
    Loading(String),
    Project(ProjectDetails),
    Document { path: String, data: Value },
    Batch { count: usize, data: Value },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct DetailLine {
    pub(in crate::tui_shell) text: String,
    pub(in crate::tui_shell) error: bool,
}

impl DetailLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }
}

fn pretty_lines(v: &Value) -> Vec<String> {
    serde_json::to_string_pretty(v)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

impl App {
    pub(super) fn details_title(&self) -> String {
        match &self.details {
            DetailsContent::Empty | DetailsContent::Loading(_) => "Details".to_string(),
            DetailsContent::Project(p) => format!("Project {}", p.id),
            DetailsContent::Document { path, .. } => path.clone(),
            DetailsContent::Batch { count, .. } => format!("{} documents selected", count),
        }
    }

    fn details_value(&self) -> Option<Value> {
        match &self.details {
            DetailsContent::Document { data, .. } | DetailsContent::Batch { data, .. } => {
                Some(data.clone())
            }
            DetailsContent::Project(p) => serde_json::to_value(p).ok(),
            DetailsContent::Empty | DetailsContent::Loading(_) => None,
        }
    }

    /// Rendered lines after the details filter: a jq query runs against the
    /// data and its errors show inline; anything else filters lines.
    pub(super) fn details_lines(&self) -> Vec<DetailLine> {
        let value = self.details_value();
        let filter = self.filters.active_text(Panel::Details);

        if let (Some(v), true) = (&value, jq::is_query(filter)) {
            return match jq::run(filter, v) {
                Ok(results) => results
                    .iter()
                    .flat_map(pretty_lines)
                    .map(DetailLine::plain)
                    .collect(),
                Err(err) => vec![DetailLine {
                    text: format!("{:#}", err),
                    error: true,
                }],
            };
        }

        let lines = match (&self.details, value) {
            (DetailsContent::Loading(msg), _) => vec![msg.clone()],
            (_, Some(v)) => pretty_lines(&v),
            _ => vec![
                "Select a document to see its data.".to_string(),
                "Press ? for key bindings.".to_string(),
            ],
        };
        lines
            .into_iter()
            .filter(|l| matches(l, filter))
            .map(DetailLine::plain)
            .collect()
    }
}
