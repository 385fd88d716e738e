use std::io::Write;

use colored::{ColoredString, Colorize};

use crate::error::Result;
use crate::model::Task;

pub fn status_marker(task: &Task) -> ColoredString {
    if task.completed {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Write the task list section. `show_all = false` hides completed tasks.
pub fn render_tasks<W: Write>(w: &mut W, tasks: &[Task], show_all: bool) -> Result<()> {
    writeln!(w, "\n--- Your Tasks ---")?;
    if tasks.is_empty() {
        writeln!(w, "No tasks found.")?;
        return Ok(());
    }

    for task in tasks {
        if show_all || !task.completed {
            writeln!(
                w,
                "{}. [{}] {} (Due: {})",
                task.id,
                status_marker(task),
                task.title,
                task.due_date
            )?;
            writeln!(w, "   Description: {}\n", task.description)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.into(),
            description: "desc".into(),
            due_date: "01-01-2030".into(),
            completed,
        }
    }

    fn render_to_string(tasks: &[Task], show_all: bool) -> String {
        let mut buf = Vec::new();
        render_tasks(&mut buf, tasks, show_all).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_list_prints_no_tasks_message() {
        let out = render_to_string(&[], true);
        assert!(out.contains("--- Your Tasks ---"));
        assert!(out.contains("No tasks found."));
    }

    #[test]
    fn show_all_includes_completed_tasks() {
        let tasks = vec![task(1, "open", false), task(2, "closed", true)];
        let out = render_to_string(&tasks, true);
        assert!(out.contains("open (Due: 01-01-2030)"));
        assert!(out.contains("closed (Due: 01-01-2030)"));
        assert!(out.contains("   Description: desc"));
    }

    #[test]
    fn pending_view_hides_completed_tasks() {
        let tasks = vec![task(1, "open", false), task(2, "closed", true)];
        let out = render_to_string(&tasks, false);
        assert!(out.contains("open"));
        assert!(!out.contains("closed"));
    }

    #[test]
    fn all_completed_pending_view_prints_only_header() {
        let tasks = vec![task(1, "closed", true)];
        let out = render_to_string(&tasks, false);
        assert!(out.contains("--- Your Tasks ---"));
        assert!(!out.contains("closed"));
        assert!(!out.contains("No tasks found."));
    }
}
