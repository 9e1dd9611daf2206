#[derive(Debug, thiserror::Error)]
pub enum TriageError {
  #[error("{0}")]
  ConfigMissing(String),

  #[error("invalid repo: {0}")]
  InvalidRepo(String),

  #[error("github error: {0}")]
  GitHub(String),

  #[error("input error: {0}")]
  Input(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Octocrab(#[from] octocrab::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
