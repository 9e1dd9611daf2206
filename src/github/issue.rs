#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl Issue {
    /// True if any label lives under `prefix/`.
    pub fn has_label_in(&self, prefix: &str) -> bool {
        let namespace = format!("{prefix}/");
        self.labels.iter().any(|l| l.starts_with(&namespace))
    }
}

impl From<octocrab::models::issues::Issue> for Issue {
    fn from(i: octocrab::models::issues::Issue) -> Self {
        Self {
            number: i.number,
            title: i.title,
            body: i.body.unwrap_or_default(),
            labels: i.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

/// Converts search results, dropping pull requests.
pub fn issues_only(items: Vec<octocrab::models::issues::Issue>) -> Vec<Issue> {
    items
        .into_iter()
        .filter(|i| i.pull_request.is_none())
        .map(Issue::from)
        .collect()
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}: {}", self.number, self.title)
    }
}
