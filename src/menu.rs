//! The interactive menu loop. Generic over the input and output streams
//! so tests can drive a full session with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{Result, TaskbookError};
use crate::model::TaskPatch;
use crate::output;
use crate::store::TaskStore;

/// Run the menu loop until the user selects Exit or input reaches EOF.
pub fn run<R: BufRead, W: Write>(store: &mut TaskStore, mut input: R, mut out: W) -> Result<()> {
    loop {
        writeln!(out, "\n=== Task Manager ===")?;
        writeln!(out, "1. Add Task")?;
        writeln!(out, "2. View All Tasks")?;
        writeln!(out, "3. View Pending Tasks")?;
        writeln!(out, "4. Update Task")?;
        writeln!(out, "5. Delete Task")?;
        writeln!(out, "6. Exit")?;

        let Some(choice) = prompt(&mut input, &mut out, "\nSelect operation (1-6): ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => add_task(store, &mut input, &mut out)?,
            "2" => output::render_tasks(&mut out, store.tasks(), true)?,
            "3" => output::render_tasks(&mut out, store.tasks(), false)?,
            "4" => update_task(store, &mut input, &mut out)?,
            "5" => delete_task(store, &mut input, &mut out)?,
            "6" => {
                writeln!(out, "Goodbye! Your tasks are saved.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice! Please select 1-6")?,
        }
    }
}

/// Print `text` without a trailing newline and read one trimmed line.
/// `None` means EOF.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n--- Add New Task ---")?;
    let Some(title) = prompt(input, out, "Title: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(input, out, "Description: ")? else {
        return Ok(());
    };
    let Some(due_date) = prompt(input, out, "Due Date (DD-MM-YYYY): ")? else {
        return Ok(());
    };

    // A failed save keeps the task in memory; warn and carry on.
    if let Err(e) = store.add(title.clone(), description, due_date) {
        writeln!(out, "warning: could not save tasks: {e}")?;
    }
    writeln!(out, "Task '{title}' added!")?;
    Ok(())
}

fn update_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    output::render_tasks(out, store.tasks(), true)?;
    let Some(raw) = prompt(input, out, "\nEnter task ID to update: ")? else {
        return Ok(());
    };
    let Ok(id) = raw.parse::<u64>() else {
        writeln!(out, "Please enter a valid number!")?;
        return Ok(());
    };
    let Some(current) = store.get(id) else {
        writeln!(out, "Invalid task ID!")?;
        return Ok(());
    };

    writeln!(out, "\nEditing Task {}: '{}'", current.id, current.title)?;
    let title_prompt = format!("New Title [{}]: ", current.title);
    let description_prompt = format!("New Description [{}]: ", current.description);
    let due_date_prompt = format!("New Due Date [{}]: ", current.due_date);
    let completed_prompt = format!(
        "Completed? (y/n) [{}]: ",
        if current.completed { "y" } else { "n" }
    );

    let Some(title) = prompt(input, out, &title_prompt)? else {
        return Ok(());
    };
    let Some(description) = prompt(input, out, &description_prompt)? else {
        return Ok(());
    };
    let Some(due_date) = prompt(input, out, &due_date_prompt)? else {
        return Ok(());
    };
    let Some(completed) = prompt(input, out, &completed_prompt)? else {
        return Ok(());
    };

    let patch = TaskPatch {
        title: non_empty(title),
        description: non_empty(description),
        due_date: non_empty(due_date),
        completed: parse_yes_no(&completed),
    };
    if let Err(e) = store.update(id, patch) {
        writeln!(out, "warning: could not save tasks: {e}")?;
    }
    writeln!(out, "Task updated successfully!")?;
    Ok(())
}

fn delete_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    output::render_tasks(out, store.tasks(), true)?;
    let Some(raw) = prompt(input, out, "\nEnter task ID to delete: ")? else {
        return Ok(());
    };
    let Ok(id) = raw.parse::<u64>() else {
        writeln!(out, "Please enter a valid number!")?;
        return Ok(());
    };

    match store.delete(id) {
        Ok(task) => writeln!(out, "Task '{}' deleted!", task.title)?,
        Err(TaskbookError::TaskNotFound(_)) => writeln!(out, "Invalid task ID!")?,
        Err(e) => writeln!(out, "warning: could not save tasks: {e}")?,
    }
    Ok(())
}

/// Trimmed-empty input means "keep the current value".
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Only the exact tokens `y`/`n` (case-insensitive) change the flag.
fn parse_yes_no(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
