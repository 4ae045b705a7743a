//! Build-script metadata injection for `themecheck --version`.
//!
//! Values come from explicit env overrides first, then git/date tooling;
//! when neither is available the value is `unknown`.

use std::env;
use std::process::Command;

const HASH_KEY: &str = "THEMECHECK_BUILD_GIT_HASH";
const TIMESTAMP_KEY: &str = "THEMECHECK_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed={HASH_KEY}");
    println!("cargo:rerun-if-env-changed={TIMESTAMP_KEY}");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let git_hash = metadata(HASH_KEY, || {
        capture("git", &["rev-parse", "--short=12", "HEAD"])
    });
    let timestamp = metadata(TIMESTAMP_KEY, build_timestamp);

    println!("cargo:rustc-env={HASH_KEY}={git_hash}");
    println!("cargo:rustc-env={TIMESTAMP_KEY}={timestamp}");
}

fn metadata(key: &str, detect: impl FnOnce() -> Option<String>) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(detect)
        .unwrap_or_else(|| "unknown".to_string())
}

// Reproducible builds pin the clock through SOURCE_DATE_EPOCH.
fn build_timestamp() -> Option<String> {
    match env::var("SOURCE_DATE_EPOCH") {
        Ok(epoch) => {
            let at = format!("@{}", epoch.trim());
            capture("date", &["-u", "-d", &at, "+%Y-%m-%dT%H:%M:%SZ"])
                .or_else(|| Some(format!("unix:{}", epoch.trim())))
        }
        Err(_) => capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]),
    }
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
