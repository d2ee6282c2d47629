//! Shared fixtures for integration tests.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

pub const JOB_POSTING: &str = "Acme Corp is looking for a Senior Python Engineer to join our data platform team. \
You will design data pipelines in Python, build reliable APIs, and mentor engineers. \
Requirements: 5+ years of Python experience, strong SQL skills, experience with data pipelines on AWS. \
Acme values clean code and automated testing.";

pub const RESUME: &str = "Senior software engineer with 7 years of experience \
building data pipelines and APIs in Python. \
Designed reliable data pipelines on AWS processing billions of events. \
Strong SQL and Python skills; led engineers through automated testing adoption.";

pub const COMPANY: &str = "Acme Corp";

/// Assorted inputs for property checks.
pub const CORPUS: &[&str] = &[
    "",
    "   \n\t ",
    "the and of a an",
    "python",
    "python python python engineer engineer",
    "fast efficient reliable code fast efficient reliable code",
    JOB_POSTING,
    RESUME,
    "We need Rust developers! Rust, Rust, RUST. Developers who love Rust and systems programming.",
    "Ｐｙｔｈｏｎ ｐｙｔｈｏｎ full-width text, café café naïve naïve",
    "C++ C# .NET node.js node.js 2024 2024 ci/cd ci/cd",
];

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
