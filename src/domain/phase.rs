use super::enums::Phase;

/// Completed work cycles that trigger a lunch instead of a break
pub const WORK_CYCLES_BEFORE_LUNCH: u32 = 4;

/// Seconds in one duration unit when nothing else is configured
pub const DEFAULT_UNIT_SECS: u64 = 60;

/// Duration of a phase in seconds, given the seconds-per-unit scale.
/// Saturates instead of overflowing on absurd scales.
pub fn duration_seconds(phase: Phase, unit_secs: u64) -> u64 {
    phase.duration_units().saturating_mul(unit_secs)
}

/// Display label: "WORK_<n>" for work, the bare tag otherwise
pub fn label(phase: Phase, completed_work_cycles: u32) -> String {
    match phase {
        Phase::Work => format!("WORK_{}", completed_work_cycles),
        Phase::Break | Phase::Lunch => phase.to_tag().to_string(),
    }
}

/// Current phase plus the number of completed work cycles.
///
/// Values are never mutated; every transition returns a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseState {
    phase: Phase,
    completed_work_cycles: u32,
}

impl Default for PhaseState {
    fn default() -> Self {
        Self::new(Phase::Work, 0)
    }
}

impl PhaseState {
    pub fn new(phase: Phase, completed_work_cycles: u32) -> Self {
        Self {
            phase,
            completed_work_cycles,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn completed_work_cycles(&self) -> u32 {
        self.completed_work_cycles
    }

    pub fn label(&self) -> String {
        label(self.phase, self.completed_work_cycles)
    }

    pub fn duration_seconds(&self, unit_secs: u64) -> u64 {
        duration_seconds(self.phase, unit_secs)
    }

    /// Pure successor state.
    ///
    /// Leaving WORK counts the cycle first, then routes to LUNCH when the
    /// count is exactly four. BREAK and LUNCH always return to WORK with the
    /// counter untouched.
    #[must_use]
    pub fn next(self) -> Self {
        match self.phase {
            Phase::Work => {
                let completed = self.completed_work_cycles + 1;
                let phase = if completed == WORK_CYCLES_BEFORE_LUNCH {
                    Phase::Lunch
                } else {
                    Phase::Break
                };
                Self::new(phase, completed)
            }
            Phase::Break | Phase::Lunch => Self::new(Phase::Work, self.completed_work_cycles),
        }
    }

    /// Successor state with the counter reset on entering LUNCH, so the
    /// next round again runs four work cycles before the following lunch.
    #[must_use]
    pub fn advance(self) -> Self {
        let next = self.next();
        if next.phase == Phase::Lunch {
            Self::new(Phase::Lunch, 0)
        } else {
            next
        }
    }

    /// Inverse of [`PhaseState::advance`] for every reachable state
    #[must_use]
    pub fn retreat(self) -> Self {
        match self.phase {
            Phase::Work if self.completed_work_cycles == 0 => Self::new(Phase::Lunch, 0),
            Phase::Work => Self::new(Phase::Break, self.completed_work_cycles),
            Phase::Break => {
                Self::new(Phase::Work, self.completed_work_cycles.saturating_sub(1))
            }
            Phase::Lunch => Self::new(Phase::Work, WORK_CYCLES_BEFORE_LUNCH - 1),
        }
    }
}
