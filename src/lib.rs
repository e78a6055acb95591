//! Headless smoke check for the investment dashboard frontend.
//!
//! Drives Chromium through the Playwright driver against a locally served
//! frontend, asserts that a fixed set of UI labels is rendered, and captures
//! a full-page screenshot as a review artifact. One line per check is written
//! to the report sink; check failures are reported there, never through the
//! exit status.

pub mod checks;
pub mod config;
pub mod runner;

use std::sync::Arc;

pub use checks::{MatchMode, PresenceCheck, SectionProbe, VerifyPlan};
pub use config::VerifyConfig;
pub use runner::{run, RunSummary};

/// Everything that can abort a verification pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Starting or talking to the Playwright driver process.
    #[error(transparent)]
    Driver(#[from] playwright::Error),
    /// Browser-side operations: navigation, queries, scrolling, screenshot.
    #[error(transparent)]
    Browser(#[from] Arc<playwright::Error>),
    /// Browser installation or writes to the report sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
