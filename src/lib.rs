//! tl - In-Memory Task Tracking Library
//!
//! This library provides the core of the tl CLI: an insertion-ordered task
//! store with filtering, and a service layer that reports every outcome
//! through an abstract presentation contract.
//!
//! # Core Concepts
//!
//! - **Tasks**: immutable description + priority records
//! - **Task List**: the owning store; prepend, append, remove, find
//! - **Filters**: predicates deriving ordered views without mutating storage
//! - **Service**: input validation, orchestration, derived statistics
//! - **Presenter**: the outbound contract a front end implements
//!
//! # Module Organization
//!
//! - `cli`: command-line session using clap
//! - `error`: error types and result aliases
//! - `events`: JSONL event emission for external integrations
//! - `filter`: the filter predicates
//! - `output`: shared human/JSON output formatting
//! - `presenter`: the presentation contract
//! - `service`: the task service
//! - `task`: task records and the ordered store

pub mod cli;
pub mod error;
pub mod events;
pub mod filter;
pub mod output;
pub mod presenter;
pub mod service;
pub mod task;

pub use error::{Error, Result};
