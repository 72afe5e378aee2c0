use chrono::{DateTime, Local};
use uuid::Uuid;

/// A task in the list
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique ID, never reassigned
    pub id: Uuid,
    pub title: String,
    /// Free-text label
    pub tag: String,
    /// Free-text project name
    pub project: String,
    /// Planned number of work cycles
    pub estimate_count: u32,
    /// Work cycles credited by the timer
    pub executed_count: u32,
    /// Finished
    pub checked: bool,
    /// In the trash (soft-deleted)
    pub removed: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(title: String, tag: String, project: String, estimate_count: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            tag,
            project,
            estimate_count,
            executed_count: 0,
            checked: false,
            removed: false,
            created_at: Local::now(),
        }
    }

    /// "executed/estimate" badge, e.g. "2/4"
    pub fn pomodoro_badge(&self) -> String {
        format!("{}/{}", self.executed_count, self.estimate_count)
    }

    /// Ratio of executed to estimated cycles (1.0 when nothing was estimated)
    pub fn progress_ratio(&self) -> f64 {
        if self.estimate_count == 0 {
            return 1.0;
        }
        self.executed_count as f64 / self.estimate_count as f64
    }

    /// Executed more cycles than planned
    pub fn is_over_estimate(&self) -> bool {
        self.executed_count > self.estimate_count
    }

    /// Title can be edited only while the task is open and not in the trash
    pub fn is_editable(&self) -> bool {
        !self.checked && !self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(estimate: u32, executed: u32) -> Task {
        let mut task = Task::new("Write".to_string(), String::new(), String::new(), estimate);
        task.executed_count = executed;
        task
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Read".to_string(), "doc".to_string(), "core".to_string(), 2);
        assert_eq!(task.executed_count, 0);
        assert!(!task.checked);
        assert!(!task.removed);
        assert!(task.is_editable());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = task(1, 0);
        let b = task(1, 0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_pomodoro_badge() {
        assert_eq!(task(4, 2).pomodoro_badge(), "2/4");
    }

    #[test]
    fn test_progress_ratio() {
        assert_eq!(task(0, 0).progress_ratio(), 1.0);
        assert_eq!(task(4, 1).progress_ratio(), 0.25);
        assert!(task(2, 3).is_over_estimate());
        assert!(!task(2, 2).is_over_estimate());
    }

    #[test]
    fn test_editable() {
        let mut t = task(1, 0);
        t.checked = true;
        assert!(!t.is_editable());
        t.checked = false;
        t.removed = true;
        assert!(!t.is_editable());
    }
}
