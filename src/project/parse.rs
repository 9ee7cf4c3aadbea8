//! Document scanner and the `parse` entry point.

use super::extract::{self, SprintFragment};
use super::model::{Project, SprintConfig, Task};

/// Logical document section the scanner is currently inside.
///
/// Carried as a local through the line walk so parsing stays reentrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    People,
    Timeline,
    Tasks,
    Sprint,
}

impl Section {
    /// Recognize a level-2 header name. Unknown headers map to `None`,
    /// which drops their content lines.
    fn recognize(raw: &str) -> Self {
        match extract::normalize_keyword(raw).as_str() {
            "people" => Self::People,
            "timeline" => Self::Timeline,
            "tasks" => Self::Tasks,
            "sprint configuration" => Self::Sprint,
            _ => Self::None,
        }
    }
}

impl Project {
    /// Parse a canonical project document.
    ///
    /// Extraction is total: any input, including the empty string, yields a
    /// `Project`. Lines under unrecognized `##` headers are dropped, and
    /// malformed annotations degrade to absent fields instead of errors.
    pub fn parse(text: &str) -> Self {
        let mut project = Project::default();
        let mut section = Section::None;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            // Header recognition runs before list-item recognition.
            if let Some(rest) = trimmed.strip_prefix("##") {
                if !rest.starts_with('#') {
                    section = Section::recognize(rest);
                    if section == Section::Sprint && project.sprint_config.is_none() {
                        project.sprint_config = Some(SprintConfig::default());
                    }
                    continue;
                }
            }
            if let Some(rest) = trimmed.strip_prefix('#') {
                // Only the `# Project: <title>` shape is meaningful; the
                // last occurrence wins. Every other header line is a
                // comment.
                if let Some(title) = match_project_title(rest) {
                    project.title = title;
                }
                continue;
            }

            let content = match trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                Some(content) => content,
                None => continue,
            };

            match section {
                Section::People => project.people.push(extract::extract_person(content)),
                Section::Timeline => {
                    project.timeline.push(extract::extract_timeline_entry(content))
                }
                Section::Tasks => project.tasks.push(extract::extract_task(content)),
                Section::Sprint => apply_sprint_fragment(&mut project, content),
                Section::None => {}
            }
        }

        recover_trailing_remarks(&mut project.tasks);
        project
    }
}

/// Match the `Project: <name>` shape of a level-1 header.
fn match_project_title(rest: &str) -> Option<String> {
    let rest = extract::strip_keyword_ci(rest.trim_start(), "project")?;
    let rest = rest.trim_start().strip_prefix(':')?;
    Some(rest.trim().to_string())
}

/// Apply one sprint-configuration line to the model.
fn apply_sprint_fragment(project: &mut Project, content: &str) {
    match extract::extract_sprint_fragment(content) {
        Some(SprintFragment::CurrentSprint(label)) => project.current_sprint = Some(label),
        Some(fragment) => {
            let config = project
                .sprint_config
                .get_or_insert_with(SprintConfig::default);
            match fragment {
                SprintFragment::Duration(weeks) => config.duration_weeks = weeks,
                SprintFragment::StartDate(date) => config.start_date = Some(date),
                SprintFragment::ActiveSprint(label) => config.active_sprint = Some(label),
                SprintFragment::CurrentSprint(_) => {}
            }
        }
        None => {}
    }
}

/// Move a remark left attached to a title into the remarks field.
///
/// A remark written before an assignee or sprint token survives the
/// right-to-left strip as a trailing `<...>` on the title; this pass picks
/// it up. Running it again is a no-op because remarks are then set.
pub(super) fn recover_trailing_remarks(tasks: &mut [Task]) {
    for task in tasks {
        if task.remarks.is_some() {
            continue;
        }
        if let Some((remarks, rest)) = extract::strip_trailing(&task.title, '<', '>') {
            task.remarks = Some(remarks);
            task.title = rest.trim().to_string();
        }
    }
}
