use serde::Serialize;

use crate::model::task::{checkbox_char, Priority, Task};
use crate::model::theme::{theme_label, SystemScheme, ThemeColor, ThemeMode};
use crate::ops::search::SearchHit;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct SearchHitJson {
    pub task_id: String,
    pub field: &'static str,
    pub title: String,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub mode: &'static str,
    pub color: &'static str,
    pub label: String,
}

#[derive(Serialize)]
pub struct ShareJson {
    pub url: String,
    pub message: String,
}

pub fn search_hit_to_json(hit: &SearchHit, tasks: &[Task]) -> SearchHitJson {
    let title = tasks
        .iter()
        .find(|t| t.id == hit.task_id)
        .map(|t| t.title.clone())
        .unwrap_or_default();
    SearchHitJson {
        task_id: hit.task_id.clone(),
        field: hit.field.as_str(),
        title,
    }
}

pub fn theme_to_json(mode: ThemeMode, color: ThemeColor, resolved: SystemScheme) -> ThemeJson {
    ThemeJson {
        mode: mode.as_str(),
        color: color.as_str(),
        label: theme_label(resolved, color),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One-line listing entry: `[x] T-001 Buy milk · high · due 2026-08-10`
pub fn format_task_line(task: &Task) -> String {
    let mut line = format!(
        "[{}] {} {}",
        checkbox_char(task.completed),
        task.id,
        task.title
    );
    if task.priority != Priority::Medium {
        line.push_str(&format!(" · {}", task.priority.as_str()));
    }
    if let Some(due) = task.due_date {
        line.push_str(&format!(" · due {}", due));
    }
    line
}

/// Multi-line detail view for `show`
pub fn format_task_detail(task: &Task) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", task.id, task.title),
        format!("  status:   {}", if task.completed { "completed" } else { "pending" }),
        format!("  priority: {}", task.priority.as_str()),
    ];
    if let Some(due) = task.due_date {
        lines.push(format!("  due:      {}", due));
    }
    if !task.description.is_empty() {
        lines.push(format!("  note:     {}", task.description));
    }
    lines.push(format!(
        "  created:  {}",
        task.created_at.format("%Y-%m-%d %H:%M")
    ));
    lines
}
