mod config;
mod error;
mod git;
mod github;
mod pipeline;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;

#[derive(Parser)]
#[command(
  name = "triage",
  about = "Walk a repository's open issues and label each one under a prefix"
)]
struct Cli {
  /// Repository in org/repo form
  repo: String,

  /// Label namespace; labels are applied as <prefix>/<input>
  prefix: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    )
    .init();

  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
    Err(e) => {
      eprint!("{e}");
      std::process::exit(1);
    }
  };

  if let Err(e) = run(cli).await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}

async fn run(cli: Cli) -> Result<()> {
  let config = Config::new(&cli.repo, &cli.prefix)?;

  let token = git::config::github_token()?;
  let client = GitHubClient::new(token)?;

  let issues = pipeline::fetch::fetch_open_issues(&client, &config.repo).await?;
  let untriaged = pipeline::filter::filter_untriaged(issues, &config.prefix);

  let stdin = std::io::stdin().lock();
  let stdout = std::io::stdout().lock();
  pipeline::triage::run(&client, &untriaged, &config, stdin, stdout).await
}
