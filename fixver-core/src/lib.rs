//! # Fixver Core Library
//!
//! Shared helpers for the fixver workspace: extraction of Jira issue keys
//! from release-note text, the order-preserving set operations applied to
//! them, and formatted terminal output for user-facing messages.

pub mod issues;
pub mod output;

// Re-export the helpers used by the CLI and the client crate
pub use issues::{deduplicate, extract_issue_keys, filter_excluded};
pub use output::{
  ColorMode, format_issue_key, format_version, print_error, print_info, print_success, print_warning,
};
