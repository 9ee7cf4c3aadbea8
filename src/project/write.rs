//! Canonical serialization of the project model.
//!
//! Sections are written in a fixed order and empty sections are omitted,
//! so the output for a given model is always the same text.

use std::fmt;

use super::model::{Person, Project, Task, TaskStatus, TimelineEntry, DEFAULT_SPRINT_WEEKS};

impl Person {
    /// Format as a people-section line. The colon is omitted when there
    /// are no responsibilities.
    pub fn to_line(&self) -> String {
        if self.responsibilities.is_empty() {
            format!("- {}", self.name)
        } else {
            format!("- {}: {}", self.name, self.responsibilities.join(", "))
        }
    }
}

impl TimelineEntry {
    /// Format as a timeline-section line: planned range, percentage,
    /// actual range, then the description.
    pub fn to_line(&self) -> String {
        let mut line = format!("- {}:", self.label);
        if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            line.push_str(&format!(" ({} to {})", start, end));
        }
        if let Some(percentage) = self.percentage {
            line.push_str(&format!(" [{}%]", percentage));
        }
        if let (Some(start), Some(end)) = (&self.actual_start_date, &self.actual_end_date) {
            line.push_str(&format!(" {{actual: {} to {}}}", start, end));
        }
        if !self.description.is_empty() {
            line.push(' ');
            line.push_str(&self.description);
        }
        line
    }
}

impl Task {
    /// Format as a tasks-section line: assignee, sprint, remarks, status.
    ///
    /// This is the mirror image of the order extraction strips them in.
    /// `todo` is the implicit default and is never written.
    pub fn to_line(&self) -> String {
        let mut line = format!("- {}", self.title);
        if let Some(assignee) = &self.assignee {
            line.push_str(&format!(" ({})", assignee));
        }
        if let Some(sprint) = &self.sprint {
            line.push_str(&format!(" {{{}}}", sprint));
        }
        if let Some(remarks) = &self.remarks {
            line.push_str(&format!(" <{}>", remarks));
        }
        if self.status != TaskStatus::Todo {
            line.push_str(&format!(" [{}]", self.status.as_str()));
        }
        line
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = vec![format!("# Project: {}", self.title)];

        if !self.people.is_empty() {
            lines.push(String::new());
            lines.push("## People".to_string());
            for person in &self.people {
                lines.push(person.to_line());
            }
        }

        if !self.timeline.is_empty() {
            lines.push(String::new());
            lines.push("## Timeline".to_string());
            for entry in &self.timeline {
                lines.push(entry.to_line());
            }
        }

        if self.sprint_config.is_some() || self.current_sprint.is_some() {
            lines.push(String::new());
            lines.push("## Sprint Configuration".to_string());
            let duration = self
                .sprint_config
                .as_ref()
                .map_or(DEFAULT_SPRINT_WEEKS, |c| c.duration_weeks);
            lines.push(format!("- Duration: {} weeks", duration));
            if let Some(config) = &self.sprint_config {
                if let Some(date) = &config.start_date {
                    lines.push(format!("- Start Date: {}", date));
                }
                if let Some(label) = &config.active_sprint {
                    lines.push(format!("- Active Sprint: {}", label));
                }
            }
            if let Some(label) = &self.current_sprint {
                lines.push(format!("- Current Sprint: {}", label));
            }
        }

        if !self.tasks.is_empty() {
            lines.push(String::new());
            lines.push("## Tasks".to_string());
            for task in &self.tasks {
                lines.push(task.to_line());
            }
        }

        let mut out = lines.join("\n");
        if !out.ends_with('\n') {
            out.push('\n');
        }
        f.write_str(&out)
    }
}
