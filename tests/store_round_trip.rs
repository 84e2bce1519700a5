//! Round-trip tests: everything a store writes to the key-value file must
//! load back equal in content and order.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use taskmaster::io::kv::KvStore;
use taskmaster::model::config::AppConfig;
use taskmaster::model::task::{Priority, TaskDraft};
use taskmaster::model::theme::{ThemeColor, ThemeMode};
use taskmaster::ops::filter::{visible_tasks, FilterSelector};
use taskmaster::store::{PreferenceStore, TaskStore};

fn kv_in(dir: &TempDir) -> KvStore {
    KvStore::open(dir.path().join("storage.json"))
}

#[test]
fn task_collection_round_trips() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::default();

    let mut store = TaskStore::load(&config, kv_in(&dir));
    let mut milk = TaskDraft::new("Buy milk");
    milk.description = "2 liters".into();
    milk.priority = Priority::High;
    milk.due_date = NaiveDate::from_ymd_opt(2026, 8, 10);
    store.add(milk).unwrap();

    let mut rent = TaskDraft::new("Pay rent");
    rent.completed = true;
    store.add(rent).unwrap();
    store.add(TaskDraft::new("Call dentist")).unwrap();

    let reloaded = TaskStore::load(&config, kv_in(&dir));
    assert_eq!(reloaded.list(), store.list());
}

#[test]
fn round_trip_preserves_order_after_mutations() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::default();

    let mut store = TaskStore::load(&config, kv_in(&dir));
    for title in ["a", "b", "c", "d"] {
        store.add(TaskDraft::new(title)).unwrap();
    }
    store.remove("T-002");
    store.toggle_completed("T-003");
    store
        .update("T-001", {
            let mut d = TaskDraft::new("a edited");
            d.priority = Priority::Low;
            d
        })
        .unwrap();

    let reloaded = TaskStore::load(&config, kv_in(&dir));
    let titles: Vec<&str> = reloaded.list().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a edited", "c", "d"]);
    assert_eq!(reloaded.list(), store.list());
}

#[test]
fn reloaded_collection_filters_identically() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::default();

    let mut store = TaskStore::load(&config, kv_in(&dir));
    store.add(TaskDraft::new("A")).unwrap();
    let mut b = TaskDraft::new("B");
    b.completed = true;
    store.add(b).unwrap();

    let reloaded = TaskStore::load(&config, kv_in(&dir));
    let pending = visible_tasks(reloaded.list(), FilterSelector::Pending, "");
    let completed = visible_tasks(reloaded.list(), FilterSelector::Completed, "");

    let titles = |tasks: &[&taskmaster::model::task::Task]| -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    };
    assert_eq!(titles(&pending), vec!["A"]);
    assert_eq!(titles(&completed), vec!["B"]);
    assert_eq!(
        visible_tasks(reloaded.list(), FilterSelector::All, "").len(),
        2
    );
}

#[test]
fn preferences_round_trip_next_to_tasks() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::default();

    let mut store = TaskStore::load(&config, kv_in(&dir));
    store.add(TaskDraft::new("keep me")).unwrap();

    let mut prefs = PreferenceStore::load(&config, kv_in(&dir));
    prefs.set_mode(ThemeMode::Dark);
    prefs.set_color(ThemeColor::Purple);

    let prefs = PreferenceStore::load(&config, kv_in(&dir));
    assert_eq!(prefs.mode(), ThemeMode::Dark);
    assert_eq!(prefs.color(), ThemeColor::Purple);

    let store = TaskStore::load(&config, kv_in(&dir));
    assert_eq!(store.list()[0].title, "keep me");
}

#[test]
fn custom_storage_key_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.storage.tasks_key = "my-tasks".into();

    let mut store = TaskStore::load(&config, kv_in(&dir));
    store.add(TaskDraft::new("namespaced")).unwrap();

    // A store on the default key sees nothing
    let other = TaskStore::load(&AppConfig::default(), kv_in(&dir));
    assert!(other.is_empty());

    let reloaded = TaskStore::load(&config, kv_in(&dir));
    assert_eq!(reloaded.len(), 1);
}
