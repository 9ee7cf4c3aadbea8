//! Per-line field extraction for the four entity kinds.
//!
//! Each extractor consumes one list-item content string and never fails.
//! Annotations that do not match their expected shape stay in the
//! surrounding text instead of producing an error.

use super::model::{Person, Task, TaskStatus, TimelineEntry};

/// Extract a person from a people-section line.
///
/// `<name>: <resp>, <resp>, ...`; no colon means a bare name. Empty
/// responsibility pieces are discarded; order and duplicates are kept.
pub(super) fn extract_person(content: &str) -> Person {
    match content.split_once(':') {
        None => Person {
            name: content.trim().to_string(),
            responsibilities: Vec::new(),
        },
        Some((name, rest)) => Person {
            name: name.trim().to_string(),
            responsibilities: rest
                .split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
        },
    }
}

/// Extract a timeline entry from a timeline-section line.
///
/// Splits on the first colon into label and working description, then
/// removes the percentage, actual-range, and planned-range annotations in
/// that order. Whatever remains, trimmed, is the description.
pub(super) fn extract_timeline_entry(content: &str) -> TimelineEntry {
    let (label, rest) = match content.split_once(':') {
        Some((label, rest)) => (label.trim(), rest.to_string()),
        None => (content.trim(), String::new()),
    };

    let mut entry = TimelineEntry::new(label);
    let mut desc = rest;

    entry.percentage = take_percentage(&mut desc);
    if let Some((start, end)) = take_actual_range(&mut desc) {
        entry.actual_start_date = Some(start);
        entry.actual_end_date = Some(end);
    }
    if let Some((start, end)) = take_planned_range(&mut desc) {
        entry.start_date = Some(start);
        entry.end_date = Some(end);
    }
    entry.description = desc.trim().to_string();
    entry
}

/// Extract a task from a tasks-section line.
///
/// Strips trailing annotations right to left, each step working on what the
/// previous one left: `[status]`, then `<remarks>`, then `{sprint}`, then
/// `(assignee)`. The order matters when bracket types are adjacent; the
/// writer emits them in the mirror-image order so canonical lines survive
/// the trip.
pub(super) fn extract_task(content: &str) -> Task {
    let mut task = Task::new("");
    let mut rest = content.to_string();

    if let Some((token, remainder)) = strip_trailing(&rest, '[', ']') {
        task.status = TaskStatus::from_token(&token);
        rest = remainder;
    }
    if let Some((remarks, remainder)) = strip_trailing(&rest, '<', '>') {
        task.remarks = Some(remarks);
        rest = remainder;
    }
    if let Some((sprint, remainder)) = strip_trailing(&rest, '{', '}') {
        task.sprint = Some(sprint);
        rest = remainder;
    }
    if let Some((assignee, remainder)) = strip_trailing(&rest, '(', ')') {
        task.assignee = Some(assignee);
        rest = remainder;
    }
    task.title = rest.trim().to_string();
    task
}

/// One recognized line of the sprint-configuration section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SprintFragment {
    /// `Duration: <int> weeks`
    Duration(u32),
    /// `Start Date: <YYYY-MM-DD>`
    StartDate(String),
    /// `Active Sprint: <label>`
    ActiveSprint(String),
    /// `Current Sprint: <label>`, which lands on the project, not the config.
    CurrentSprint(String),
}

/// Match one sprint-configuration line. Unrecognized lines yield `None`.
pub(super) fn extract_sprint_fragment(content: &str) -> Option<SprintFragment> {
    let (key, value) = content.split_once(':')?;
    let key = normalize_keyword(key);
    let value = value.trim();
    match key.as_str() {
        "duration" => {
            let number = value.split_whitespace().next()?;
            number.parse().ok().map(SprintFragment::Duration)
        }
        "start date" => {
            is_date_like(value).then(|| SprintFragment::StartDate(value.to_string()))
        }
        "active sprint" => Some(SprintFragment::ActiveSprint(value.to_string())),
        "current sprint" => Some(SprintFragment::CurrentSprint(value.to_string())),
        _ => None,
    }
}

/// Lowercase a keyword and collapse its internal whitespace.
pub(super) fn normalize_keyword(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Strip a case-insensitive keyword prefix.
pub(super) fn strip_keyword_ci<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
    let head = s.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&s[keyword.len()..])
    } else {
        None
    }
}

/// Shape check for a `YYYY-MM-DD` token. Digits and dashes only; no
/// calendar validation.
pub(super) fn is_date_like(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Split a trailing `<open>inner<close>` group off a string.
///
/// Returns the trimmed inner text and everything before the opening
/// delimiter. The group must close the (right-trimmed) string.
pub(super) fn strip_trailing(text: &str, open: char, close: char) -> Option<(String, String)> {
    let body = text.trim_end().strip_suffix(close)?;
    let open_idx = body.rfind(open)?;
    let inner = body[open_idx + open.len_utf8()..].trim().to_string();
    Some((inner, body[..open_idx].to_string()))
}

/// Remove the first `[NN%]` token and return its value.
fn take_percentage(text: &mut String) -> Option<u32> {
    let mut search = 0;
    while let Some(rel) = text[search..].find('[') {
        let open = search + rel;
        let close = match text[open..].find(']') {
            Some(rel) => open + rel,
            None => break,
        };
        let value = text[open + 1..close]
            .strip_suffix('%')
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|d| d.parse::<u32>().ok());
        if let Some(value) = value {
            text.replace_range(open..=close, "");
            return Some(value);
        }
        search = open + 1;
    }
    None
}

/// Remove the first `{actual: <date> to <date>}` token.
fn take_actual_range(text: &mut String) -> Option<(String, String)> {
    take_delimited_range(text, '{', '}', Some("actual"))
}

/// Remove the first `(<date> to <date>)` token.
fn take_planned_range(text: &mut String) -> Option<(String, String)> {
    take_delimited_range(text, '(', ')', None)
}

/// Remove the first delimited group whose body is a date range, optionally
/// behind a `keyword:` prefix. Groups that do not match are left in place.
fn take_delimited_range(
    text: &mut String,
    open_ch: char,
    close_ch: char,
    keyword: Option<&str>,
) -> Option<(String, String)> {
    let mut search = 0;
    while let Some(rel) = text[search..].find(open_ch) {
        let open = search + rel;
        let close = match text[open..].find(close_ch) {
            Some(rel) => open + rel,
            None => break,
        };
        let inner = &text[open + open_ch.len_utf8()..close];
        let body = match keyword {
            Some(kw) => strip_keyword_ci(inner.trim_start(), kw)
                .and_then(|rest| rest.trim_start().strip_prefix(':')),
            None => Some(inner),
        };
        if let Some(range) = body.and_then(parse_date_range) {
            text.replace_range(open..=close, "");
            return Some(range);
        }
        search = open + open_ch.len_utf8();
    }
    None
}

/// Parse `<date> to <date>` with free whitespace between the three tokens.
fn parse_date_range(s: &str) -> Option<(String, String)> {
    let mut parts = s.split_whitespace();
    let start = parts.next()?;
    let sep = parts.next()?;
    let end = parts.next()?;
    if parts.next().is_some() || !sep.eq_ignore_ascii_case("to") {
        return None;
    }
    (is_date_like(start) && is_date_like(end)).then(|| (start.to_string(), end.to_string()))
}
