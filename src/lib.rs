//! taskdash - Task Dashboard Library
//!
//! This library provides the core functionality for the taskdash CLI tool,
//! a small persistent to-do list with a terminal dashboard.
//!
//! # Core Concepts
//!
//! - **Tasks**: free-text items with a stable numeric id and a completed flag
//! - **Store**: the in-memory owner of the task sequence and its operations
//! - **Slot**: one JSON file in the data directory mirroring the store
//! - **Dashboard**: a full-screen terminal view of the list and its counters
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `taskdash.toml`
//! - `error`: Error types and result aliases
//! - `output`: Shared success/error output formatting
//! - `persist`: Slot storage and atomic file writes
//! - `store`: The in-memory task store and derived statistics
//! - `ui`: The interactive dashboard built on ratatui

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod persist;
pub mod store;
pub mod ui;

pub use error::{Error, Result};
