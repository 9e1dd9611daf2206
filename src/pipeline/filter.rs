use tracing::info;

use crate::github::Issue;

/// Drops issues that already carry a label under `prefix/`, keeping order.
pub fn filter_untriaged(issues: Vec<Issue>, prefix: &str) -> Vec<Issue> {
  let total = issues.len();
  let untriaged: Vec<Issue> = issues
    .into_iter()
    .filter(|i| !i.has_label_in(prefix))
    .collect();

  info!(
    "{} of {total} issue(s) need triage under {prefix}/",
    untriaged.len()
  );
  untriaged
}
