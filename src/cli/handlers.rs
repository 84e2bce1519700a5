use std::path::Path;

use regex::Regex;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::kv::KvStore;
use crate::io::paths;
use crate::model::config::InsertPosition;
use crate::model::task::{Priority, TaskDraft};
use crate::model::theme::{detect_system_scheme, theme_label};
use crate::ops::filter::{self, FilterSelector};
use crate::ops::{search, share};
use crate::store::{PreferenceStore, TaskStore};

type CliResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CliResult {
    let json = cli.json;
    let data_dir = paths::data_dir(cli.data_dir.as_deref());

    match cli.command {
        Commands::Add(args) => cmd_add(args, &data_dir, json),
        Commands::List(args) => cmd_list(args, &data_dir, json),
        Commands::Show(args) => cmd_show(args, &data_dir, json),
        Commands::Edit(args) => cmd_edit(args, &data_dir, json),
        Commands::Toggle(args) => cmd_toggle(args, &data_dir, json),
        Commands::Done(args) => cmd_set_completed(args, true, &data_dir, json),
        Commands::Undone(args) => cmd_set_completed(args, false, &data_dir, json),
        Commands::Rm(args) => cmd_rm(args, &data_dir, json),
        Commands::Search(args) => cmd_search(args, &data_dir, json),
        Commands::Stats => cmd_stats(&data_dir, json),
        Commands::Share(args) => cmd_share(args, &data_dir, json),
        Commands::Theme(args) => cmd_theme(args, &data_dir, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_task_store(data_dir: &Path) -> Result<TaskStore, Box<dyn std::error::Error>> {
    let config = config_io::read_config(data_dir)?;
    let kv = KvStore::open(paths::storage_file(data_dir));
    Ok(TaskStore::load(&config, kv))
}

fn load_pref_store(data_dir: &Path) -> Result<PreferenceStore, Box<dyn std::error::Error>> {
    let config = config_io::read_config(data_dir)?;
    let kv = KvStore::open(paths::storage_file(data_dir));
    Ok(PreferenceStore::load(&config, kv))
}

fn parse_due(s: &str) -> Result<chrono::NaiveDate, Box<dyn std::error::Error>> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid due date '{}' (expected YYYY-MM-DD)", s).into())
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, data_dir: &Path, json: bool) -> CliResult {
    let mut store = load_task_store(data_dir)?;

    let mut draft = TaskDraft::new(args.title);
    draft.description = args.desc;
    draft.priority = args.priority.parse::<Priority>()?;
    draft.due_date = args.due.as_deref().map(parse_due).transpose()?;
    draft.completed = args.completed;

    let task = if args.top {
        store.add_at(draft, InsertPosition::Top)?
    } else {
        store.add(draft)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("added {} {}", task.id, task.title);
    }
    Ok(())
}

fn cmd_list(args: ListArgs, data_dir: &Path, json: bool) -> CliResult {
    let store = load_task_store(data_dir)?;
    let selector = args
        .filter
        .as_deref()
        .unwrap_or("all")
        .parse::<FilterSelector>()?;
    let query = args.query.unwrap_or_default();

    let visible = filter::visible_tasks(store.list(), selector, &query);
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else if visible.is_empty() {
        println!("no tasks");
    } else {
        for task in &visible {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}

fn cmd_show(args: IdArgs, data_dir: &Path, json: bool) -> CliResult {
    let store = load_task_store(data_dir)?;
    let task = store
        .get(&args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        for line in format_task_detail(task) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_edit(args: EditArgs, data_dir: &Path, json: bool) -> CliResult {
    let mut store = load_task_store(data_dir)?;

    let mut draft = {
        let task = store
            .get(&args.id)
            .ok_or_else(|| format!("task not found: {}", args.id))?;
        TaskDraft::from_task(task)
    };
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(desc) = args.desc {
        draft.description = desc;
    }
    if let Some(priority) = args.priority {
        draft.priority = priority.parse::<Priority>()?;
    }
    if let Some(due) = args.due.as_deref() {
        draft.due_date = Some(parse_due(due)?);
    }
    if args.clear_due {
        draft.due_date = None;
    }

    store.update(&args.id, draft)?;
    if json {
        if let Some(task) = store.get(&args.id) {
            println!("{}", serde_json::to_string_pretty(task)?);
        }
    } else {
        println!("updated {}", args.id);
    }
    Ok(())
}

fn cmd_toggle(args: IdArgs, data_dir: &Path, json: bool) -> CliResult {
    let mut store = load_task_store(data_dir)?;
    let completed = store
        .toggle_completed(&args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "id": args.id, "completed": completed })
        );
    } else {
        println!(
            "{} {}",
            args.id,
            if completed { "completed" } else { "pending" }
        );
    }
    Ok(())
}

fn cmd_set_completed(args: IdArgs, completed: bool, data_dir: &Path, json: bool) -> CliResult {
    let mut store = load_task_store(data_dir)?;
    if !store.set_completed(&args.id, completed) {
        return Err(format!("task not found: {}", args.id).into());
    }

    if json {
        println!(
            "{}",
            serde_json::json!({ "id": args.id, "completed": completed })
        );
    } else {
        println!(
            "{} {}",
            args.id,
            if completed { "completed" } else { "pending" }
        );
    }
    Ok(())
}

fn cmd_rm(args: RmArgs, data_dir: &Path, json: bool) -> CliResult {
    let mut store = load_task_store(data_dir)?;

    let mut removed = 0usize;
    let mut missing = Vec::new();
    for id in &args.ids {
        if store.remove(id) {
            removed += 1;
        } else {
            missing.push(id.clone());
        }
    }

    if json {
        println!(
            "{}",
            serde_json::json!({ "removed": removed, "missing": missing })
        );
    } else if removed > 0 {
        println!("removed {} task(s)", removed);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("task not found: {}", missing.join(", ")).into())
    }
}

fn cmd_search(args: SearchArgs, data_dir: &Path, json: bool) -> CliResult {
    let store = load_task_store(data_dir)?;
    let re = Regex::new(&args.pattern)?;
    let hits = search::search_tasks(store.list(), &re);

    if json {
        let hits: Vec<SearchHitJson> = hits
            .iter()
            .map(|h| search_hit_to_json(h, store.list()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if hits.is_empty() {
        println!("no matches");
    } else {
        for hit in &hits {
            let title = store
                .get(&hit.task_id)
                .map(|t| t.title.as_str())
                .unwrap_or("");
            println!("{} [{}] {}", hit.task_id, hit.field.as_str(), title);
        }
    }
    Ok(())
}

fn cmd_stats(data_dir: &Path, json: bool) -> CliResult {
    let store = load_task_store(data_dir)?;
    let stats = store.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "{} total · {} pending · {} completed",
            stats.total, stats.pending, stats.completed
        );
    }
    Ok(())
}

fn cmd_share(args: ShareArgs, data_dir: &Path, json: bool) -> CliResult {
    let store = load_task_store(data_dir)?;

    let mut selection = Vec::new();
    for id in &args.ids {
        selection.push(
            store
                .get(id)
                .ok_or_else(|| format!("task not found: {}", id))?,
        );
    }

    let message = share::format_share_message(&selection);
    let url = share::share_url(&args.to, &selection)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ShareJson { url, message })?
        );
    } else {
        println!("{}", message);
        println!();
        println!("{}", url);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

fn cmd_theme(args: ThemeCmd, data_dir: &Path, json: bool) -> CliResult {
    let mut prefs = load_pref_store(data_dir)?;

    match args.action {
        Some(ThemeAction::Mode(a)) => prefs.set_mode(a.mode.parse()?),
        Some(ThemeAction::Color(a)) => prefs.set_color(a.color.parse()?),
        None => {}
    }

    let resolved = prefs.mode().resolve(detect_system_scheme());
    let label = theme_label(resolved, prefs.color());
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&theme_to_json(prefs.mode(), prefs.color(), resolved))?
        );
    } else {
        println!("mode:  {}", prefs.mode().as_str());
        println!("color: {}", prefs.color().as_str());
        println!("label: {}", label);
    }
    Ok(())
}
