use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{debug, info};

use crate::config::RepoRef;
use crate::error::{Result, TriageError};
use crate::github::issue::{issues_only, Issue};

/// One page of issue search results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub items: Vec<Issue>,
    /// Page number to request next, `None` on the last page.
    pub next_page: Option<u32>,
}

#[async_trait]
pub trait IssueHost {
    async fn search_issues(&self, query: &str, page: u32, per_page: u8) -> Result<SearchPage>;

    async fn add_labels(&self, repo: &RepoRef, number: u64, labels: &[String]) -> Result<()>;
}

pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(|e| TriageError::GitHub(format!("failed to build octocrab: {e}")))?;

        Ok(Self { octocrab })
    }
}

#[async_trait]
impl IssueHost for GitHubClient {
    async fn search_issues(&self, query: &str, page: u32, per_page: u8) -> Result<SearchPage> {
        debug!("searching issues: {query} (page {page})");

        let result = self
            .octocrab
            .search()
            .issues_and_pull_requests(query)
            .per_page(per_page)
            .page(page)
            .send()
            .await?;

        let next_page = result.next.as_ref().map(|_| page + 1);
        let items = issues_only(result.items);

        Ok(SearchPage { items, next_page })
    }

    async fn add_labels(&self, repo: &RepoRef, number: u64, labels: &[String]) -> Result<()> {
        info!("adding labels {labels:?} to {repo}#{number}");

        self.octocrab
            .issues(&repo.owner, &repo.name)
            .add_labels(number, labels)
            .await?;

        Ok(())
    }
}
