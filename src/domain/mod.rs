pub mod countdown;
pub mod enums;
pub mod phase;
pub mod record;
pub mod store;
pub mod task;

pub use countdown::{format_mm_ss, Countdown};
pub use enums::{Phase, TaskFilter, UiMode};
pub use phase::{PhaseState, DEFAULT_UNIT_SECS, WORK_CYCLES_BEFORE_LUNCH};
pub use record::{count_work_cycles, PhaseRecord};
pub use task::Task;
