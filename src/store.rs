use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TaskbookError};
use crate::model::{Task, TaskPatch};

/// Fixed relative path of the storage file used by the binary.
pub const STORAGE_FILE: &str = "tasks.json";

/// The ordered task list plus its backing JSON file. Every mutation
/// rewrites the file in full before returning.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// An empty store. Also the fallback when [`TaskStore::load`] fails.
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            tasks: Vec::new(),
        }
    }

    /// Load the task list from `path`. A missing file yields an empty
    /// store; a read or parse failure is returned to the caller, which
    /// decides how to report it. The file on disk is left untouched
    /// either way.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::empty(path));
        }
        let data = fs::read_to_string(path)?;
        let tasks: Vec<Task> = serde_json::from_str(&data)?;
        Ok(Self {
            path: path.to_path_buf(),
            tasks,
        })
    }

    /// Serialize the full list pretty-printed and replace the storage
    /// file. Writes to a sibling temp file first and renames it into
    /// place so an interrupted save cannot truncate the previous state.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tasks)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Append a new task with `id = len + 1` and persist. Empty strings
    /// are permitted; no field is validated. A failed save leaves the
    /// appended task in memory.
    pub fn add(&mut self, title: String, description: String, due_date: String) -> Result<&Task> {
        let task = Task {
            id: self.tasks.len() as u64 + 1,
            title,
            description,
            due_date,
            completed: false,
        };
        self.tasks.push(task);
        self.save()?;
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Apply the `Some` fields of `patch` to the task with `id` and
    /// persist. An all-`None` patch changes nothing but still saves.
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> Result<()> {
        let idx = self.index_of(id)?;
        let task = &mut self.tasks[idx];
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        self.save()
    }

    /// Remove the task with `id`, renumber every remaining task to its
    /// new 1-based position, persist, and return the removed task.
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let idx = self.index_of(id)?;
        let removed = self.tasks.remove(idx);
        self.renumber();
        self.save()?;
        Ok(removed)
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        match id.checked_sub(1) {
            Some(idx) => self.tasks.get(idx as usize),
            None => None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn index_of(&self, id: u64) -> Result<usize> {
        match id.checked_sub(1) {
            Some(idx) if (idx as usize) < self.tasks.len() => Ok(idx as usize),
            _ => Err(TaskbookError::TaskNotFound(id)),
        }
    }

    fn renumber(&mut self) {
        for (idx, task) in self.tasks.iter_mut().enumerate() {
            task.id = idx as u64 + 1;
        }
    }
}
