//! Stamps the binary and the web footer with a version and a short commit.
//!
//! `MOVIE_FINDER_VERSION` overrides the Cargo version (release tags);
//! `MOVIE_FINDER_GIT_SHA` or CI's `GITHUB_SHA` override the local checkout.

use std::env;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    for var in ["MOVIE_FINDER_VERSION", "MOVIE_FINDER_GIT_SHA", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=.git/HEAD");

    let version = env::var("MOVIE_FINDER_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".to_string());

    let sha = env::var("MOVIE_FINDER_GIT_SHA")
        .ok()
        .or_else(|| env::var("GITHUB_SHA").ok().map(short_sha))
        .or_else(local_sha)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=MOVIE_FINDER_VERSION={}", version);
    println!("cargo:rustc-env=MOVIE_FINDER_GIT_SHA={}", sha);
}

fn short_sha(full: String) -> String {
    full.chars().take(SHORT_SHA_LEN).collect()
}

/// `git rev-parse` of the checkout being built, if there is one.
fn local_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let sha = String::from_utf8(output.stdout).ok()?;
    Some(short_sha(sha.trim().to_string())).filter(|s| !s.is_empty())
}
