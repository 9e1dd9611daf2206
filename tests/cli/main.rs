use std::process::Command;

fn triage(args: &[&str]) -> std::process::Output {
  Command::new(env!("CARGO_BIN_EXE_triage"))
    .args(args)
    .output()
    .expect("failed to run triage binary")
}

#[test]
fn missing_arguments_prints_usage_and_fails() {
  let output = triage(&["org/repo"]);
  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn extra_arguments_fail_with_status_one() {
  let output = triage(&["org/repo", "triage", "extra"]);
  assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_token_is_reported() {
  let dir = std::path::Path::new(env!("CARGO_TARGET_TMPDIR"));
  let gitconfig = dir.join("empty.gitconfig");
  std::fs::write(&gitconfig, "").unwrap();

  let output = Command::new(env!("CARGO_BIN_EXE_triage"))
    .args(["org/repo", "triage"])
    .current_dir(dir)
    .env("GIT_CONFIG_GLOBAL", &gitconfig)
    .env("GIT_CONFIG_NOSYSTEM", "1")
    .output()
    .expect("failed to run triage binary");

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(
    stderr.contains("error: set github.token in your .gitconfig"),
    "stderr: {stderr}"
  );
}

#[test]
fn repo_without_slash_is_rejected() {
  let output = triage(&["orgrepo", "triage"]);
  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("error: invalid repo: orgrepo"), "stderr: {stderr}");
}

#[test]
fn repo_with_extra_segment_is_rejected() {
  let output = triage(&["org/repo/extra", "triage"]);
  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("error: invalid repo: org/repo/extra"), "stderr: {stderr}");
}
