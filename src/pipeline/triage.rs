use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::github::{Issue, IssueHost};

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
const SKIP: &str = "next";

/// Operator decision for a single issue.
#[derive(Debug, PartialEq, Eq)]
enum Action {
  Skip,
  Label(String),
}

impl Action {
  fn from_token(token: String) -> Self {
    if token == SKIP {
      Action::Skip
    } else {
      Action::Label(token)
    }
  }
}

fn render(out: &mut impl Write, issue: &Issue, remaining: usize) -> Result<()> {
  write!(out, "{CLEAR_SCREEN}")?;
  writeln!(out, "[{}] {}", issue.number, issue.title)?;
  writeln!(out, "{}", issue.body)?;
  writeln!(out, "({remaining} remaining)")?;
  Ok(())
}

/// Prompts until the operator enters a non-blank line and returns its first token.
fn read_token(input: &mut impl BufRead, out: &mut impl Write, prefix: &str) -> Result<String> {
  let mut line = String::new();
  loop {
    write!(out, "{prefix}: ")?;
    out.flush()?;

    line.clear();
    if input.read_line(&mut line)? == 0 {
      return Err(TriageError::Input("unexpected end of input".into()));
    }

    if let Some(token) = line.split_whitespace().next() {
      return Ok(token.to_string());
    }
  }
}

/// Walks `issues` in order, asking for a label suffix for each one.
///
/// A failed label write stops the walk; labels already written stay on GitHub.
pub async fn run(
  host: &impl IssueHost,
  issues: &[Issue],
  config: &Config,
  mut input: impl BufRead,
  mut out: impl Write,
) -> Result<()> {
  for (ix, issue) in issues.iter().enumerate() {
    render(&mut out, issue, issues.len() - ix)?;

    let token = read_token(&mut input, &mut out, &config.prefix)?;
    match Action::from_token(token) {
      Action::Skip => debug!("skipped {issue}"),
      Action::Label(suffix) => {
        let label = config.label_for(&suffix);
        host
          .add_labels(&config.repo, issue.number, std::slice::from_ref(&label))
          .await?;
        info!("labeled {issue} as {label}");
      }
    }
  }

  Ok(())
}
