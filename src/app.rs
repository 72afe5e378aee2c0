use crate::config::Config;
use crate::domain::{
    count_work_cycles, store, Countdown, Phase, PhaseRecord, PhaseState, Task, TaskFilter, UiMode,
};
use crate::notifications;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

/// Number of fields in the task form (title, tag, project, estimate)
pub const FORM_FIELDS: usize = 4;

/// Longest accepted estimate, in digits
pub const MAX_ESTIMATE_DIGITS: usize = 3;

/// Input form state for adding or editing a task
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub title: String,
    pub tag: String,
    pub project: String,
    pub estimate: String, // Parsed on submit; anything non-numeric counts as 0
    pub editing_field: usize, // 0 = title, 1 = tag, 2 = project, 3 = estimate
    pub editing_id: Option<Uuid>, // Set when editing an existing task
}

impl InputFormState {
    fn field_mut(&mut self) -> &mut String {
        match self.editing_field {
            0 => &mut self.title,
            1 => &mut self.tag,
            2 => &mut self.project,
            _ => &mut self.estimate,
        }
    }

    /// Estimate field as a cycle count
    pub fn estimate_count(&self) -> u32 {
        self.estimate.trim().parse().unwrap_or(0)
    }
}

/// Main application state.
///
/// The single owner of the phase, the countdown and the task store; the
/// event loop funnels every key press and tick through here.
pub struct AppState {
    pub phase: PhaseState,
    pub countdown: Countdown,
    pub tasks: Vec<Task>,
    pub filter: TaskFilter,
    pub selected_index: usize, // Index into the filtered view
    pub target: Option<Uuid>, // Task credited when a work phase finishes
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub history: Vec<PhaseRecord>, // Finished phases, oldest first
    pub status: Option<String>,
    pub unit_secs: u64,
    pub auto_start: bool,
    pub notify: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let phase = PhaseState::default();
        let countdown = Countdown::new(Duration::from_secs(phase.duration_seconds(config.unit_secs)));

        Self {
            phase,
            countdown,
            tasks: Vec::new(),
            filter: TaskFilter::All,
            selected_index: 0,
            target: None,
            ui_mode: UiMode::Normal,
            input_form: None,
            history: Vec::new(),
            status: None,
            unit_secs: config.unit_secs,
            auto_start: config.auto_start,
            notify: config.notify,
        }
    }

    fn phase_duration(&self) -> Duration {
        Duration::from_secs(self.phase.duration_seconds(self.unit_secs))
    }

    // ---- Timer ----

    /// Start or pause the countdown
    pub fn toggle_timer(&mut self, now: Instant) {
        self.countdown.toggle(now);
        info!(
            phase = %self.phase.label(),
            running = self.countdown.is_running(),
            "timer toggled"
        );
    }

    /// Reset the current phase to its full length and run it
    pub fn restart_timer(&mut self, now: Instant) {
        self.countdown.restart(self.phase_duration(), now, true);
        info!(phase = %self.phase.label(), "timer restarted");
    }

    /// Move to the next phase without crediting anything
    pub fn skip_phase(&mut self, now: Instant) {
        let from = self.phase.label();
        self.set_phase(self.phase.advance(), now, self.countdown.is_running());
        info!(from = %from, to = %self.phase.label(), "phase skipped");
    }

    /// Step back to the previous phase
    pub fn back_phase(&mut self, now: Instant) {
        let from = self.phase.label();
        self.set_phase(self.phase.retreat(), now, self.countdown.is_running());
        info!(from = %from, to = %self.phase.label(), "phase stepped back");
    }

    fn set_phase(&mut self, phase: PhaseState, now: Instant, run: bool) {
        self.phase = phase;
        self.countdown.restart(self.phase_duration(), now, run);
    }

    /// Advance the countdown. Returns true when a phase finished on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.countdown.tick(now) {
            self.finish_phase(now);
            return true;
        }
        false
    }

    /// Handle an expired countdown: credit the target for a finished work
    /// phase, log it, notify, and move on to the next phase.
    fn finish_phase(&mut self, now: Instant) {
        let finished = self.phase;
        let label = finished.label();

        let mut credited = None;
        if finished.phase() == Phase::Work {
            if let Some(id) = self.target {
                self.apply(|tasks| store::increment_executed(tasks, id));
                credited = store::find(&self.tasks, id).map(|t| t.title.clone());
            }
        }

        info!(phase = %label, task = ?credited, "phase finished");
        self.history.push(PhaseRecord::new(finished.phase(), label.clone(), credited));

        if self.notify {
            notifications::notify_phase_finished(&label);
        }

        self.set_phase(finished.advance(), now, self.auto_start);
        self.status = Some(notifications::phase_finished_message(&label));
    }

    /// Completed work phases this session
    pub fn work_cycles_today(&self) -> usize {
        count_work_cycles(&self.history)
    }

    // ---- Task list ----

    /// Replace the task sequence with the result of a store operation
    fn apply(&mut self, op: impl FnOnce(Vec<Task>) -> Vec<Task>) {
        let tasks = std::mem::take(&mut self.tasks);
        self.tasks = op(tasks);
        self.clamp_selection();
    }

    /// Tasks shown under the current filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        store::filter(&self.tasks, self.filter)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_index).copied()
    }

    fn selected_id(&self) -> Option<Uuid> {
        self.selected_task().map(|t| t.id)
    }

    /// The target task, if it is still in the store
    pub fn target_task(&self) -> Option<&Task> {
        self.target.and_then(|id| store::find(&self.tasks, id))
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let count = self.visible_tasks().len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_tasks().len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    /// Switch to the next filter (all -> finished -> progress -> trash)
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected_index = 0;
        debug!(filter = self.filter.name(), "filter changed");
    }

    /// Add a task directly (for testing and programmatic use)
    pub fn add_task(&mut self, title: &str, tag: &str, project: &str, estimate_count: u32) {
        self.apply(|tasks| store::add(tasks, title, tag, project, estimate_count));
    }

    pub fn toggle_checked_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.apply(|tasks| store::toggle_checked(tasks, id));
        }
    }

    /// Move the selected task to the trash, or restore it from there
    pub fn toggle_removed_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.apply(|tasks| store::toggle_removed(tasks, id));
        }
    }

    /// Make the selected task the one credited by finished work phases
    pub fn set_target_selected(&mut self) {
        match self.selected_task() {
            Some(task) if task.removed => {
                self.status = Some("Restore the task before targeting it".to_string());
            }
            Some(task) => {
                let (id, title) = (task.id, task.title.clone());
                info!(task = %title, "target task set");
                self.target = Some(id);
                self.status = Some(format!("Target: {}", title));
            }
            None => {}
        }
    }

    pub fn clear_target(&mut self) {
        self.target = None;
        self.status = Some("Target cleared".to_string());
    }

    // ---- Empty trash ----

    /// Ask for confirmation before emptying the trash
    pub fn request_empty_trash(&mut self) {
        if self.filter != TaskFilter::Trash {
            self.status = Some("Switch to the trash view to empty it".to_string());
            return;
        }
        if store::filter(&self.tasks, TaskFilter::Trash).is_empty() {
            self.status = Some("Trash is already empty".to_string());
            return;
        }
        self.ui_mode = UiMode::ConfirmPurge;
    }

    pub fn trash_count(&self) -> usize {
        store::filter(&self.tasks, TaskFilter::Trash).len()
    }

    pub fn confirm_empty_trash(&mut self) {
        let count = self.trash_count();
        self.apply(store::purge_removed);
        info!(count, "trash emptied");
        self.status = Some(format!("Deleted {} task(s)", count));
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_modal(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // ---- Input form ----

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        if self.filter == TaskFilter::Trash || self.filter == TaskFilter::Finished {
            self.status = Some("New tasks go in the all or in-progress view".to_string());
            return;
        }
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Start editing the selected task. Finished and trashed tasks are read-only.
    pub fn start_edit_task(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        if !task.is_editable() {
            self.status = Some("Finished or trashed tasks cannot be edited".to_string());
            return;
        }

        self.input_form = Some(InputFormState {
            title: task.title.clone(),
            tag: task.tag.clone(),
            project: task.project.clone(),
            estimate: task.estimate_count.to_string(),
            editing_field: 0,
            editing_id: Some(task.id),
        });
        self.ui_mode = UiMode::EditingTask;
    }

    /// Cycle the focused field (title -> tag -> project -> estimate)
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % FORM_FIELDS;
        }
    }

    /// Add character to input form (current field)
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            if form.editing_field == 3
                && (!c.is_ascii_digit() || form.estimate.len() >= MAX_ESTIMATE_DIGITS)
            {
                return;
            }
            form.field_mut().push(c);
        }
    }

    /// Backspace in input form (current field)
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.field_mut().pop();
        }
    }

    /// Submit input form and create or update the task
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            let estimate = form.estimate_count();
            let title = form.title.trim();
            let tag = form.tag.trim();
            let project = form.project.trim();

            match form.editing_id {
                Some(id) => {
                    if !title.is_empty() {
                        self.apply(|tasks| {
                            let tasks = store::edit_title(tasks, id, title);
                            let tasks = store::edit_labels(tasks, id, tag, project);
                            store::set_estimate(tasks, id, estimate)
                        });
                        info!(%id, "task edited");
                    }
                }
                None => {
                    self.add_task(title, tag, project, estimate);
                    if !title.is_empty() {
                        // New tasks are prepended; keep them selected
                        self.selected_index = 0;
                        info!(task = %title, estimate, "task added");
                    }
                }
            }
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }
}
