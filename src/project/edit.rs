//! In-memory edit operations applied between a parse and the write-back.

use super::model::{Project, Task, TaskStatus};

impl Task {
    /// Assign this task to someone.
    pub fn assign(&mut self, assignee: &str) {
        self.assignee = Some(assignee.trim().to_string());
    }

    /// Mark this task done.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Done;
    }

    /// Revert this task to todo. Assignee and sprint are kept.
    pub fn reopen(&mut self) {
        self.status = TaskStatus::Todo;
    }

    /// Attach this task to a sprint by timeline label.
    pub fn move_to_sprint(&mut self, label: &str) {
        self.sprint = Some(label.trim().to_string());
    }
}

impl Project {
    /// Detach every task from the given sprint.
    ///
    /// Returns how many tasks were detached. Used when a sprint is
    /// re-planned and its backlog goes back to the pool.
    pub fn clear_sprint(&mut self, label: &str) -> usize {
        let mut cleared = 0;
        for task in &mut self.tasks {
            if task.sprint.as_deref() == Some(label) {
                task.sprint = None;
                cleared += 1;
            }
        }
        cleared
    }
}
