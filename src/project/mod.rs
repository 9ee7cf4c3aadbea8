//! Project document parser and writer.
//!
//! A project is stored as a single markdown-like document:
//!
//! ```text
//! # Project: Apollo
//!
//! ## People
//! - Alice: backend, infra
//!
//! ## Timeline
//! - Sprint 1: (2024-01-01 to 2024-01-14) [50%] Kick-off
//!
//! ## Sprint Configuration
//! - Duration: 2 weeks
//!
//! ## Tasks
//! - Ship v1 (Alice) {Sprint 1} <needs review> [done]
//! ```
//!
//! Parsing is permissive and total: unknown sections are dropped and
//! malformed annotations degrade to absent fields. Writing emits the
//! canonical form, which parses back to the same model.

mod edit;
mod extract;
mod model;
mod parse;
mod write;


pub use model::{
    NorthStar, Person, Project, SprintConfig, Task, TaskStatus, TimelineEntry,
    DEFAULT_SPRINT_WEEKS,
};
