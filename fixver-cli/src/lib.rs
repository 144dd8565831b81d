//! # Fixver CLI Library
//!
//! Command-line interface modules for the fixver tool, wiring the Jira fix
//! version client to clap-based commands for release pipelines.

pub mod cli;
pub mod clients;
