use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

// Runs a command and returns its trimmed stdout, or None if it failed.
// A missing git binary or a tarball build must not break the build.
fn capture(cmd: &mut Command) -> Option<String> {
    let output = cmd.output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() { None } else { Some(text.to_string()) }
}

fn build_commit() -> String {
    // CI pipelines usually export the commit explicitly
    if let Ok(commit) = std::env::var("GIT_COMMIT") {
        if !commit.trim().is_empty() {
            return commit.trim().chars().take(12).collect();
        }
    }
    capture(Command::new("git").args(["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string())
}

fn build_timestamp() -> String {
    // Reproducible builds pin the timestamp via SOURCE_DATE_EPOCH
    if let Ok(epoch) = std::env::var("SOURCE_DATE_EPOCH") {
        return epoch.trim().to_string();
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_default()
}

fn git_path(flag: &str) -> Option<PathBuf> {
    capture(Command::new("git").args(["rev-parse", flag])).map(PathBuf::from)
}

// Commits on the current branch move the branch ref, not HEAD, so watch the
// resolved ref and packed-refs too.
fn watch_git_refs() {
    let Some(git_dir) = git_path("--git-dir") else { return };
    let common_dir = git_path("--git-common-dir").unwrap_or_else(|| git_dir.clone());

    let mut watched = vec![git_dir.join("HEAD"), common_dir.join("packed-refs")];
    if let Some(head_ref) = capture(Command::new("git").args(["rev-parse", "--symbolic-full-name", "HEAD"])) {
        // Detached HEAD prints "HEAD"
        if head_ref.starts_with("refs/") {
            watched.push(common_dir.join(head_ref));
        }
    }

    for path in watched.into_iter().filter(|p| p.exists()) {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}

fn main() {
    println!("cargo:rustc-env=BUILD_COMMIT={}", build_commit());
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp());

    println!("cargo:rerun-if-env-changed=GIT_COMMIT");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    watch_git_refs();
}
