//! quid6-cli
//!
//! Command-line front end for QUID-6 classification. Argument parsing,
//! environment config and output rendering live here; `main.rs` only
//! installs logging and prints.

pub mod cli;
pub mod config;
pub mod output;
