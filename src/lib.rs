//! meshver - version and update checker for the meshtasticd daemon
//!
//! This library provides:
//! - Installed version detection via `meshtasticd --version`
//! - Release listing from the GitHub releases feed
//! - Update decisions by semantic-version precedence
//! - Text and JSON rendering for the `meshver` CLI

pub mod cli;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod manager;
pub mod output;
pub mod progress;

pub use manager::VersionManager;
