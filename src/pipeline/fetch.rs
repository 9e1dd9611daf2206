use tracing::info;

use crate::config::RepoRef;
use crate::error::Result;
use crate::github::{Issue, IssueHost};

pub const PER_PAGE: u8 = 100;

pub fn search_query(repo: &RepoRef) -> String {
  format!("repo:{repo} is:issue is:open")
}

/// Collects every open issue in `repo`, in the order the search returns them.
///
/// A failed page aborts the whole fetch; nothing fetched so far is returned.
pub async fn fetch_open_issues(host: &impl IssueHost, repo: &RepoRef) -> Result<Vec<Issue>> {
  let query = search_query(repo);
  info!("fetching open issues: {query}");

  let mut issues = Vec::new();
  let mut page = 1;
  let mut pages = 0;

  loop {
    let result = host.search_issues(&query, page, PER_PAGE).await?;
    pages += 1;
    issues.extend(result.items);

    match result.next_page {
      Some(next) => page = next,
      None => break,
    }
  }

  info!("fetched {} issue(s) across {pages} page(s)", issues.len());
  Ok(issues)
}
