use serde::{Deserialize, Serialize};

use crate::model::theme::{ThemeColor, ThemeMode};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the task collection is stored under
    #[serde(default = "default_tasks_key")]
    pub tasks_key: String,
    /// Key prefix for the theme preference pair
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            tasks_key: default_tasks_key(),
            theme_key: default_theme_key(),
        }
    }
}

/// Default: see io/config_io.rs template
fn default_tasks_key() -> String {
    "tasks".to_string()
}

/// Default: see io/config_io.rs template
fn default_theme_key() -> String {
    "task-manager-theme".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Prefix for assigned task IDs (`T` gives `T-001`, `T-002`, ...)
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    /// Where new tasks land in the list
    #[serde(default)]
    pub new_task_position: InsertPosition,
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            id_prefix: default_id_prefix(),
            new_task_position: InsertPosition::default(),
        }
    }
}

fn default_id_prefix() -> String {
    "T".to_string()
}

/// Where a task is inserted into the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Append to the end (insertion order, the documented default)
    #[default]
    Bottom,
    /// Prepend (newest task first)
    Top,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Mode used when no preference has been stored yet
    #[serde(default)]
    pub default_mode: ThemeMode,
    /// Color used when no preference has been stored yet
    #[serde(default)]
    pub default_color: ThemeColor,
}
