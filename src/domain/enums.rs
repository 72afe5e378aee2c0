/// Segment of the Pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Work,
    Break,
    Lunch,
}

impl Phase {
    /// Length of the phase in duration units (one unit is a minute by default)
    pub fn duration_units(&self) -> u64 {
        match self {
            Self::Work => 25,
            Self::Break => 5,
            Self::Lunch => 30,
        }
    }

    /// Uppercase tag used in labels and logs
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Break => "BREAK",
            Self::Lunch => "LUNCH",
        }
    }
}

/// Which tasks the list pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Finished,
    Progress,
    Trash,
}

impl TaskFilter {
    /// Display name for the list pane title
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Finished => "Finished",
            Self::Progress => "In Progress",
            Self::Trash => "Trash",
        }
    }

    /// Next filter in the Tab cycle
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Finished,
            Self::Finished => Self::Progress,
            Self::Progress => Self::Trash,
            Self::Trash => Self::All,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,
    ConfirmPurge, // Empty-trash confirmation
}
