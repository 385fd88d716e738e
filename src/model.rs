use serde::{Deserialize, Serialize};

/// One entry in the task list. `id` always equals the task's 1-based
/// position in the list; deleting a task renumbers everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Free-form text, expected `DD-MM-YYYY` but never parsed or validated.
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial edit applied by [`crate::store::TaskStore::update`]. `None`
/// means "keep the current value".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.completed.is_none()
    }
}
