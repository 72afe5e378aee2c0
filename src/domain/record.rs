use super::enums::Phase;
use chrono::{DateTime, Local};

/// A finished phase, kept in the in-memory session log
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseRecord {
    pub phase: Phase,
    /// Label at the time the phase ended, e.g. "WORK_2"
    pub label: String,
    pub finished_at: DateTime<Local>,
    /// Title of the target task credited for this phase (work only)
    pub task_title: Option<String>,
}

impl PhaseRecord {
    pub fn new(phase: Phase, label: String, task_title: Option<String>) -> Self {
        Self {
            phase,
            label,
            finished_at: Local::now(),
            task_title,
        }
    }

    /// Log line: "HH:MM LABEL (task)"
    pub fn summary(&self) -> String {
        let time = self.finished_at.format("%H:%M");
        match &self.task_title {
            Some(title) => format!("{} {} ({})", time, self.label, title),
            None => format!("{} {}", time, self.label),
        }
    }
}

/// Number of work phases in the log
pub fn count_work_cycles(records: &[PhaseRecord]) -> usize {
    records.iter().filter(|r| r.phase == Phase::Work).count()
}
