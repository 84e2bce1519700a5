use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// The glyph used in shared task summaries
    pub fn glyph(self) -> &'static str {
        match self {
            Priority::Low => "🟢",
            Priority::Medium => "🟡",
            Priority::High => "🔴",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "invalid priority '{}' (expected low, medium, or high)",
                other
            )),
        }
    }
}

/// The character used inside the checkbox `[ ]`
pub fn checkbox_char(completed: bool) -> char {
    if completed { 'x' } else { ' ' }
}

/// A task with all its stored fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier like `T-014`, assigned at creation
    pub id: String,
    /// Task title, never empty after trim
    pub title: String,
    /// Optional free-form description (empty = none)
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Calendar due date, no time component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp, immutable after creation
    pub created_at: DateTime<Utc>,
}

/// Editable fields of a task. `add` turns a draft into a task by assigning
/// an id and creation timestamp; `update` replaces a task's editable fields
/// from a draft while keeping both.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        TaskDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Draft pre-filled from an existing task, for partial edits.
    pub fn from_task(task: &Task) -> Self {
        TaskDraft {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            due_date: task.due_date,
            completed: task.completed,
        }
    }
}
