//! Sprint window arithmetic over the parsed sprint configuration.
//!
//! Date strings in the model are plain text. This module is the one place
//! that interprets them as calendar dates; anything that does not parse as
//! a real date yields `None` rather than an error.

use chrono::{Duration, Local, NaiveDate};

use crate::project::SprintConfig;

impl SprintConfig {
    /// The configured start date as a calendar date, if it parses.
    pub fn start(&self) -> Option<NaiveDate> {
        let raw = self.start_date.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// 1-based number of the sprint containing `date`.
    ///
    /// `None` when there is no parseable start date, the duration is zero,
    /// or `date` precedes the first sprint.
    pub fn sprint_number_on(&self, date: NaiveDate) -> Option<usize> {
        let start = self.start()?;
        if self.duration_weeks == 0 || date < start {
            return None;
        }
        let days = (date - start).num_days();
        Some((days / (i64::from(self.duration_weeks) * 7)) as usize + 1)
    }

    /// First and last day of the sprint containing `date`.
    pub fn sprint_window_on(&self, date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let number = self.sprint_number_on(date)?;
        let start = self.start()?;
        let len = i64::from(self.duration_weeks) * 7;
        let first = start + Duration::days((number as i64 - 1) * len);
        Some((first, first + Duration::days(len - 1)))
    }

    /// Window of the sprint containing today's local date.
    pub fn current_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.sprint_window_on(Local::now().date_naive())
    }
}
