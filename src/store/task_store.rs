use chrono::Utc;

use crate::io::kv::KvStore;
use crate::model::config::{AppConfig, InsertPosition};
use crate::model::task::{Task, TaskDraft};
use crate::ops::stats::{task_stats, TaskStats};

/// Error type for task store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(String),
}

/// Owns the ordered task collection. All mutation goes through these
/// operations; every successful mutation is mirrored to the attached
/// key-value storage, fire-and-forget.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    id_prefix: String,
    default_position: InsertPosition,
    storage: Option<(KvStore, String)>,
}

impl TaskStore {
    /// A store with no persistence collaborator and default settings.
    pub fn in_memory() -> TaskStore {
        TaskStore {
            tasks: Vec::new(),
            id_prefix: "T".to_string(),
            default_position: InsertPosition::Bottom,
            storage: None,
        }
    }

    /// Load the saved collection from storage. Absent or malformed data
    /// means an empty collection.
    pub fn load(config: &AppConfig, kv: KvStore) -> TaskStore {
        let key = config.storage.tasks_key.clone();
        let tasks = match kv.get(&key) {
            Some(json) => match serde_json::from_str(&json) {
                Ok(tasks) => tasks,
                Err(e) => {
                    log::warn!("malformed task data under key '{}': {}", key, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        log::debug!("loaded {} task(s) from key '{}'", tasks.len(), key);
        TaskStore {
            tasks,
            id_prefix: config.tasks.id_prefix.clone(),
            default_position: config.tasks.new_task_position,
            storage: Some((kv, key)),
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The current collection in stored order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn stats(&self) -> TaskStats {
        task_stats(&self.tasks)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a task at the configured default position.
    pub fn add(&mut self, draft: TaskDraft) -> Result<&Task, StoreError> {
        self.add_at(draft, self.default_position)
    }

    /// Add a task at an explicit position. Assigns a fresh id and creation
    /// timestamp. Rejects an empty-after-trim title.
    pub fn add_at(
        &mut self,
        draft: TaskDraft,
        position: InsertPosition,
    ) -> Result<&Task, StoreError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = Task {
            id: self.next_id(),
            title: title.to_string(),
            description: draft.description.trim().to_string(),
            priority: draft.priority,
            due_date: draft.due_date,
            completed: draft.completed,
            created_at: Utc::now(),
        };
        let index = match position {
            InsertPosition::Bottom => {
                self.tasks.push(task);
                self.tasks.len() - 1
            }
            InsertPosition::Top => {
                self.tasks.insert(0, task);
                0
            }
        };
        self.sync();
        Ok(&self.tasks[index])
    }

    /// Replace a task's editable fields from the draft. `id` and
    /// `created_at` are preserved.
    pub fn update(&mut self, id: &str, draft: TaskDraft) -> Result<(), StoreError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        task.title = title.to_string();
        task.description = draft.description.trim().to_string();
        task.priority = draft.priority;
        task.due_date = draft.due_date;
        task.completed = draft.completed;
        self.sync();
        Ok(())
    }

    /// Remove the task with the given id. Unknown id is a no-op; returns
    /// whether a task was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            self.sync();
        }
        removed
    }

    /// Flip the completion flag. Unknown id is a no-op; returns the new
    /// flag otherwise.
    pub fn toggle_completed(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        let now = task.completed;
        self.sync();
        Some(now)
    }

    /// Set the completion flag directly. Unknown id is a no-op; returns
    /// whether a task matched.
    pub fn set_completed(&mut self, id: &str, completed: bool) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if task.completed != completed {
            task.completed = completed;
            self.sync();
        }
        true
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Next free id for the configured prefix, scanning the live
    /// collection's maximum.
    fn next_id(&self) -> String {
        let prefix_dash = format!("{}-", self.id_prefix);
        let mut max = 0usize;
        for task in &self.tasks {
            if let Some(num) = task.id.strip_prefix(&prefix_dash) {
                if let Ok(n) = num.parse::<usize>() {
                    max = max.max(n);
                }
            }
        }
        format!("{}-{:03}", self.id_prefix, max + 1)
    }

    /// Mirror the full collection to storage. Failures are logged, never
    /// surfaced: the caller's mutation has already happened.
    fn sync(&self) {
        let Some((kv, key)) = &self.storage else {
            return;
        };
        match serde_json::to_string(&self.tasks) {
            Ok(json) => {
                if let Err(e) = kv.set(key, &json) {
                    log::warn!("failed to persist tasks under key '{}': {}", key, e);
                }
            }
            Err(e) => log::warn!("failed to serialize tasks: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn store_with(titles: &[&str]) -> TaskStore {
        let mut store = TaskStore::in_memory();
        for title in titles {
            store.add(TaskDraft::new(*title)).unwrap();
        }
        store
    }

    // --- add ---

    #[test]
    fn add_grows_collection_by_one() {
        let mut store = TaskStore::in_memory();
        store.add(TaskDraft::new("Buy milk")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "Buy milk");
        assert!(!store.list()[0].completed);
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let store = store_with(&["a", "b", "c"]);
        let ids: Vec<&str> = store.list().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T-001", "T-002", "T-003"]);
    }

    #[test]
    fn add_trims_title_and_description() {
        let mut store = TaskStore::in_memory();
        let mut draft = TaskDraft::new("  Buy milk  ");
        draft.description = " 2 liters ".into();
        let task = store.add(draft).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2 liters");
    }

    #[test]
    fn add_empty_title_is_rejected() {
        let mut store = TaskStore::in_memory();
        assert!(matches!(
            store.add(TaskDraft::new("")),
            Err(StoreError::EmptyTitle)
        ));
        assert!(matches!(
            store.add(TaskDraft::new("   \t ")),
            Err(StoreError::EmptyTitle)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn add_keeps_draft_completion() {
        let mut store = TaskStore::in_memory();
        let mut draft = TaskDraft::new("already done");
        draft.completed = true;
        assert!(store.add(draft).unwrap().completed);
    }

    #[test]
    fn add_at_top_prepends() {
        let mut store = store_with(&["first"]);
        store
            .add_at(TaskDraft::new("second"), InsertPosition::Top)
            .unwrap();
        assert_eq!(store.list()[0].title, "second");
        assert_eq!(store.list()[1].title, "first");
    }

    #[test]
    fn id_not_reused_while_holder_is_live() {
        let mut store = store_with(&["a", "b"]);
        store.remove("T-001");
        let task = store.add(TaskDraft::new("c")).unwrap();
        assert_eq!(task.id, "T-003");
    }

    // --- update ---

    #[test]
    fn update_replaces_fields_preserves_identity() {
        let mut store = store_with(&["old title"]);
        let (id, created_at) = {
            let t = &store.list()[0];
            (t.id.clone(), t.created_at)
        };

        let mut draft = TaskDraft::new("new title");
        draft.description = "details".into();
        draft.priority = Priority::High;
        draft.due_date = NaiveDate::from_ymd_opt(2026, 8, 10);
        store.update(&id, draft).unwrap();

        let task = store.get(&id).unwrap();
        assert_eq!(task.title, "new title");
        assert_eq!(task.description, "details");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 8, 10));
        assert_eq!(task.id, id);
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = store_with(&["a"]);
        assert!(matches!(
            store.update("T-999", TaskDraft::new("x")),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn update_empty_title_is_rejected() {
        let mut store = store_with(&["keep me"]);
        assert!(matches!(
            store.update("T-001", TaskDraft::new("  ")),
            Err(StoreError::EmptyTitle)
        ));
        assert_eq!(store.list()[0].title, "keep me");
    }

    // --- toggle / set ---

    #[test]
    fn toggle_twice_is_identity() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.toggle_completed("T-001"), Some(true));
        assert_eq!(store.toggle_completed("T-001"), Some(false));
        assert!(!store.list()[0].completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.toggle_completed("T-999"), None);
        assert!(!store.list()[0].completed);
    }

    #[test]
    fn set_completed_direct() {
        let mut store = store_with(&["a"]);
        assert!(store.set_completed("T-001", true));
        assert!(store.list()[0].completed);
        assert!(!store.set_completed("T-999", true));
    }

    // --- remove ---

    #[test]
    fn remove_drops_the_task() {
        let mut store = store_with(&["a", "b"]);
        assert!(store.remove("T-001"));
        assert!(store.get("T-001").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        assert!(!store.remove("T-999"));
        assert_eq!(store.len(), 1);
    }

    // --- persistence sync ---

    #[test]
    fn mutations_mirror_to_storage() {
        let dir = tempfile::TempDir::new().unwrap();
        let kv = KvStore::open(dir.path().join("storage.json"));
        let config = AppConfig::default();

        let mut store = TaskStore::load(&config, kv.clone());
        store.add(TaskDraft::new("persisted")).unwrap();

        let reloaded = TaskStore::load(&config, kv);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.list()[0].title, "persisted");
    }

    #[test]
    fn malformed_saved_tasks_load_as_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let kv = KvStore::open(dir.path().join("storage.json"));
        kv.set("tasks", "not an array").unwrap();

        let store = TaskStore::load(&AppConfig::default(), kv);
        assert!(store.is_empty());
    }
}
