//! Data model for a parsed project document.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Default sprint duration in weeks when none is configured.
pub const DEFAULT_SPRINT_WEEKS: u32 = 2;

/// Task completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Not started. The implicit default, never written back to text.
    #[default]
    Todo,
    /// Currently being worked on.
    InProgress,
    /// Finished.
    Done,
}

/// Synonyms accepted inside a trailing `[...]` status token.
static STATUS_SYNONYMS: Lazy<HashMap<&'static str, TaskStatus>> = Lazy::new(|| {
    HashMap::from([
        ("done", TaskStatus::Done),
        ("completed", TaskStatus::Done),
        ("complete", TaskStatus::Done),
        ("in-progress", TaskStatus::InProgress),
        ("in progress", TaskStatus::InProgress),
        ("wip", TaskStatus::InProgress),
        ("active", TaskStatus::InProgress),
    ])
});

impl TaskStatus {
    /// Normalize a bracketed status token.
    ///
    /// Unrecognized tokens collapse to `Todo`.
    pub fn from_token(token: &str) -> Self {
        let key = token.trim().to_lowercase();
        STATUS_SYNONYMS
            .get(key.as_str())
            .copied()
            .unwrap_or(Self::Todo)
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

/// A team member and what they are responsible for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    /// Display name.
    pub name: String,
    /// Responsibilities in declaration order. Duplicates are kept.
    pub responsibilities: Vec<String>,
}

/// A per-person goal attached to a timeline entry.
///
/// Carried on the model for callers that set it; the document grammar
/// neither reads nor writes north stars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NorthStar {
    /// Person the goal belongs to.
    pub person: String,
    /// The goal text.
    pub goal: String,
}

/// A named phase or sprint on the project timeline.
///
/// The label doubles as the key tasks use to reference a sprint. Dates are
/// kept as the `YYYY-MM-DD` text found in the document; nothing here checks
/// that they form a sensible calendar range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineEntry {
    /// Entry label, e.g. "Sprint 1" or "Phase 2".
    pub label: String,
    /// Free text left after annotation extraction.
    pub description: String,
    /// Completion percentage. Unclamped.
    pub percentage: Option<u32>,
    /// Planned start date.
    pub start_date: Option<String>,
    /// Planned end date.
    pub end_date: Option<String>,
    /// Actual start date.
    pub actual_start_date: Option<String>,
    /// Actual end date.
    pub actual_end_date: Option<String>,
    /// Per-person goals for this entry. Not part of the textual form.
    pub north_stars: Vec<NorthStar>,
}

impl TimelineEntry {
    /// Create an entry with only a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// A single task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    /// Task title with all annotations stripped.
    pub title: String,
    /// Assignee name. May carry a comma-joined multi-name value produced
    /// by callers; opaque here.
    pub assignee: Option<String>,
    /// Completion status.
    pub status: TaskStatus,
    /// Label of the timeline entry this task belongs to.
    pub sprint: Option<String>,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// Reserved for callers that track task ordering constraints; always
    /// empty after a parse.
    pub dependencies: Vec<String>,
}

impl Task {
    /// Create a new todo task.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Sprint cadence configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintConfig {
    /// Sprint length in weeks.
    pub duration_weeks: u32,
    /// First day of the first sprint, as `YYYY-MM-DD` text.
    pub start_date: Option<String>,
    /// Label of the sprint currently being planned.
    pub active_sprint: Option<String>,
}

impl Default for SprintConfig {
    fn default() -> Self {
        Self {
            duration_weeks: DEFAULT_SPRINT_WEEKS,
            start_date: None,
            active_sprint: None,
        }
    }
}

/// A whole project document in structured form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Project {
    /// Project title from the `# Project:` header.
    pub title: String,
    /// People in declaration order.
    pub people: Vec<Person>,
    /// Timeline entries in declaration order.
    pub timeline: Vec<TimelineEntry>,
    /// Tasks in declaration order.
    pub tasks: Vec<Task>,
    /// Sprint cadence, present once a sprint-configuration section exists.
    pub sprint_config: Option<SprintConfig>,
    /// Label of the sprint currently in flight.
    pub current_sprint: Option<String>,
    /// Free-form notes carried alongside the document. Not part of the
    /// textual form.
    pub info: Option<String>,
}

impl Project {
    /// Count of tasks still todo.
    pub fn todo_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Todo)
            .count()
    }

    /// Count of tasks in progress.
    pub fn in_progress_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::InProgress)
            .count()
    }

    /// Count of finished tasks.
    pub fn done_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .count()
    }

    /// Tasks attached to the given sprint label.
    pub fn tasks_for_sprint(&self, label: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.sprint.as_deref() == Some(label))
            .collect()
    }

    /// Look up a timeline entry by label.
    pub fn timeline_entry(&self, label: &str) -> Option<&TimelineEntry> {
        self.timeline.iter().find(|e| e.label == label)
    }

    /// Look up a person by name.
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.name == name)
    }
}
