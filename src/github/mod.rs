pub mod client;
pub mod issue;

pub use client::{GitHubClient, IssueHost};
pub use issue::Issue;
