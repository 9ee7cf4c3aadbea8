//! Roadmap: project tracking over a single canonical text document.
//!
//! Each project lives in one markdown-like document. The structured model
//! is re-derived from the text on every read and written back whenever the
//! model changes, so the text stays the single source of truth:
//!
//! ```
//! use roadmap::project::Project;
//!
//! let doc = "# Project: Demo\n\n## Tasks\n- Ship it (Alice) [done]\n";
//! let project = Project::parse(doc);
//! assert_eq!(project.tasks[0].assignee.as_deref(), Some("Alice"));
//! assert_eq!(Project::parse(&project.to_string()), project);
//! ```

pub mod project;
pub mod schedule;
