use std::process::Command;

use tracing::debug;

use crate::error::{Result, TriageError};

const TOKEN_KEY: &str = "github.token";

fn missing() -> TriageError {
    TriageError::ConfigMissing(format!("set {TOKEN_KEY} in your .gitconfig"))
}

/// Reads the GitHub access token from git config.
pub fn github_token() -> Result<String> {
    let output = Command::new("git")
        .args(["config", "--get", TOKEN_KEY])
        .output()
        .map_err(|e| {
            debug!("git config failed to spawn: {e}");
            missing()
        })?;

    if !output.status.success() {
        return Err(missing());
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(missing());
    }

    Ok(token)
}
