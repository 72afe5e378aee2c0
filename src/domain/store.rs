//! Task store operations.
//!
//! Every operation takes the whole task sequence by value and hands back the
//! new sequence. Unknown ids and blank titles leave the sequence as it was.

use super::enums::TaskFilter;
use super::task::Task;
use tracing::debug;
use uuid::Uuid;

/// Apply `f` to the task with `id`, leaving every other task untouched
fn update(mut tasks: Vec<Task>, id: Uuid, f: impl FnOnce(&mut Task)) -> Vec<Task> {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        f(task);
    }
    tasks
}

/// Prepend a new task. Blank titles are ignored.
#[must_use]
pub fn add(
    mut tasks: Vec<Task>,
    title: &str,
    tag: &str,
    project: &str,
    estimate_count: u32,
) -> Vec<Task> {
    if title.trim().is_empty() {
        return tasks;
    }

    let task = Task::new(
        title.to_string(),
        tag.to_string(),
        project.to_string(),
        estimate_count,
    );
    debug!(id = %task.id, title = %task.title, estimate_count, "task added");
    tasks.insert(0, task);
    tasks
}

#[must_use]
pub fn edit_title(tasks: Vec<Task>, id: Uuid, new_title: &str) -> Vec<Task> {
    update(tasks, id, |t| t.title = new_title.to_string())
}

#[must_use]
pub fn edit_labels(tasks: Vec<Task>, id: Uuid, tag: &str, project: &str) -> Vec<Task> {
    update(tasks, id, |t| {
        t.tag = tag.to_string();
        t.project = project.to_string();
    })
}

#[must_use]
pub fn set_estimate(tasks: Vec<Task>, id: Uuid, estimate_count: u32) -> Vec<Task> {
    update(tasks, id, |t| t.estimate_count = estimate_count)
}

/// Flip the finished flag. Tasks in the trash cannot be checked.
#[must_use]
pub fn toggle_checked(tasks: Vec<Task>, id: Uuid) -> Vec<Task> {
    update(tasks, id, |t| {
        if !t.removed {
            t.checked = !t.checked;
        }
    })
}

/// Move a task to the trash, or restore it
#[must_use]
pub fn toggle_removed(tasks: Vec<Task>, id: Uuid) -> Vec<Task> {
    update(tasks, id, |t| t.removed = !t.removed)
}

/// Permanently drop every task in the trash
#[must_use]
pub fn purge_removed(mut tasks: Vec<Task>) -> Vec<Task> {
    let before = tasks.len();
    tasks.retain(|t| !t.removed);
    debug!(purged = before - tasks.len(), "trash emptied");
    tasks
}

/// Credit one completed work cycle to a task
#[must_use]
pub fn increment_executed(tasks: Vec<Task>, id: Uuid) -> Vec<Task> {
    update(tasks, id, |t| t.executed_count += 1)
}

/// View of the tasks matching `mode`, in store order
pub fn filter(tasks: &[Task], mode: TaskFilter) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| match mode {
            TaskFilter::All => !t.removed,
            TaskFilter::Finished => t.checked && !t.removed,
            TaskFilter::Progress => !t.checked && !t.removed,
            TaskFilter::Trash => t.removed,
        })
        .collect()
}

pub fn find(tasks: &[Task], id: Uuid) -> Option<&Task> {
    tasks.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Task> {
        let tasks = add(Vec::new(), "Write report", "doc", "core", 3);
        let tasks = add(tasks, "Review PR", "code", "core", 1);
        add(tasks, "Plan sprint", "", "team", 2)
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_add_single_task() {
        let tasks = add(Vec::new(), "Write report", "doc", "core", 3);

        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.title, "Write report");
        assert_eq!(task.tag, "doc");
        assert_eq!(task.project, "core");
        assert_eq!(task.estimate_count, 3);
        assert_eq!(task.executed_count, 0);
        assert!(!task.checked);
        assert!(!task.removed);
    }

    #[test]
    fn test_add_blank_title_is_noop() {
        let tasks = sample();
        let unchanged = add(tasks.clone(), "", "doc", "core", 1);
        assert_eq!(unchanged, tasks);

        let unchanged = add(tasks.clone(), "   \t", "doc", "core", 1);
        assert_eq!(unchanged, tasks);
    }

    #[test]
    fn test_add_prepends() {
        let tasks = sample();
        let all = filter(&tasks, TaskFilter::All);
        assert_eq!(titles(&all), vec!["Plan sprint", "Review PR", "Write report"]);
    }

    #[test]
    fn test_edit_title() {
        let tasks = sample();
        let id = tasks[1].id;
        let tasks = edit_title(tasks, id, "Review PR #42");

        assert_eq!(tasks[1].title, "Review PR #42");
        assert_eq!(tasks[1].id, id);
        assert_eq!(tasks[0].title, "Plan sprint");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let tasks = sample();
        let unchanged = edit_title(tasks.clone(), Uuid::new_v4(), "Nope");
        assert_eq!(unchanged, tasks);
    }

    #[test]
    fn test_edit_labels_and_estimate() {
        let tasks = sample();
        let id = tasks[2].id;
        let tasks = edit_labels(tasks, id, "ops", "platform");
        let tasks = set_estimate(tasks, id, 5);

        assert_eq!(tasks[2].tag, "ops");
        assert_eq!(tasks[2].project, "platform");
        assert_eq!(tasks[2].estimate_count, 5);
    }

    #[test]
    fn test_toggle_checked() {
        let tasks = sample();
        let id = tasks[0].id;

        let tasks = toggle_checked(tasks, id);
        assert!(tasks[0].checked);

        let tasks = toggle_checked(tasks, id);
        assert!(!tasks[0].checked);
    }

    #[test]
    fn test_toggle_checked_ignored_in_trash() {
        let tasks = sample();
        let id = tasks[0].id;
        let tasks = toggle_removed(tasks, id);
        let tasks = toggle_checked(tasks, id);

        assert!(tasks[0].removed);
        assert!(!tasks[0].checked);
    }

    #[test]
    fn test_toggle_removed_moves_to_trash() {
        let tasks = sample();
        let id = tasks[1].id;
        let tasks = toggle_removed(tasks, id);

        let trash = filter(&tasks, TaskFilter::Trash);
        assert_eq!(titles(&trash), vec!["Review PR"]);

        let all = filter(&tasks, TaskFilter::All);
        assert!(all.iter().all(|t| t.id != id));

        // Restore
        let tasks = toggle_removed(tasks, id);
        assert!(filter(&tasks, TaskFilter::Trash).is_empty());
        assert_eq!(filter(&tasks, TaskFilter::All).len(), 3);
    }

    #[test]
    fn test_purge_removed() {
        let tasks = sample();
        let first = tasks[0].id;
        let last = tasks[2].id;
        let tasks = toggle_removed(tasks, first);
        let tasks = toggle_removed(tasks, last);

        let purged = purge_removed(tasks);
        assert_eq!(purged.len(), 1);
        assert_eq!(purged[0].title, "Review PR");
        assert!(purged.iter().all(|t| !t.removed));

        let twice = purge_removed(purged.clone());
        assert_eq!(twice, purged);
    }

    #[test]
    fn test_increment_executed() {
        let tasks = sample();
        let id = tasks[2].id;
        let tasks = increment_executed(tasks, id);
        let tasks = increment_executed(tasks, id);

        assert_eq!(tasks[2].executed_count, 2);
        assert_eq!(tasks[0].executed_count, 0);
    }

    #[test]
    fn test_increment_unknown_id_returns_input() {
        let tasks = sample();
        let unchanged = increment_executed(tasks.clone(), Uuid::new_v4());
        assert_eq!(unchanged, tasks);
    }

    #[test]
    fn test_filter_modes() {
        let tasks = sample();
        let done = tasks[0].id;
        let trashed = tasks[1].id;
        let tasks = toggle_checked(tasks, done);
        let tasks = toggle_removed(tasks, trashed);

        assert_eq!(
            titles(&filter(&tasks, TaskFilter::All)),
            vec!["Plan sprint", "Write report"]
        );
        assert_eq!(
            titles(&filter(&tasks, TaskFilter::Finished)),
            vec!["Plan sprint"]
        );
        assert_eq!(
            titles(&filter(&tasks, TaskFilter::Progress)),
            vec!["Write report"]
        );
        assert_eq!(
            titles(&filter(&tasks, TaskFilter::Trash)),
            vec!["Review PR"]
        );
    }

    #[test]
    fn test_checked_task_in_trash_is_only_in_trash() {
        let tasks = sample();
        let id = tasks[0].id;
        let tasks = toggle_checked(tasks, id);
        let tasks = toggle_removed(tasks, id);

        assert!(filter(&tasks, TaskFilter::Finished).iter().all(|t| t.id != id));
        assert!(filter(&tasks, TaskFilter::Trash).iter().any(|t| t.id == id));
    }

    #[test]
    fn test_find() {
        let tasks = sample();
        let id = tasks[1].id;
        assert_eq!(find(&tasks, id).map(|t| t.title.as_str()), Some("Review PR"));
        assert!(find(&tasks, Uuid::new_v4()).is_none());
    }
}
