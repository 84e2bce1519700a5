use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tm", about = concat!("[✓] taskmaster v", env!("CARGO_PKG_VERSION"), " - one list for everything"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// List tasks, optionally filtered
    List(ListArgs),
    /// Show task details
    Show(IdArgs),
    /// Edit a task's fields
    Edit(EditArgs),
    /// Flip a task's completion flag
    Toggle(IdArgs),
    /// Mark a task completed
    Done(IdArgs),
    /// Mark a task pending again
    Undone(IdArgs),
    /// Delete tasks
    Rm(RmArgs),
    /// Search tasks by regex
    Search(SearchArgs),
    /// Show task statistics
    Stats,
    /// Print a share link for selected tasks
    Share(ShareArgs),
    /// Show or change the theme preference
    Theme(ThemeCmd),
}

// ---------------------------------------------------------------------------
// Task command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Longer description
    #[arg(long, default_value = "")]
    pub desc: String,
    /// Priority (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub priority: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    /// Create the task already completed
    #[arg(long)]
    pub completed: bool,
    /// Insert at the top of the list regardless of the configured default
    #[arg(long)]
    pub top: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by state (all, pending, completed)
    #[arg(long)]
    pub filter: Option<String>,
    /// Keep only tasks whose title or description contains this text
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(long)]
    pub desc: Option<String>,
    /// New priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    /// Remove the due date
    #[arg(long, conflicts_with = "due")]
    pub clear_due: bool,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task IDs to delete
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Regex pattern to search for
    pub pattern: String,
}

#[derive(Args)]
pub struct ShareArgs {
    /// Task IDs to share
    #[arg(required = true)]
    pub ids: Vec<String>,
    /// Destination phone number
    #[arg(long)]
    pub to: String,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ThemeCmd {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Set the theme mode
    Mode(ThemeModeArgs),
    /// Set the theme color
    Color(ThemeColorArgs),
}

#[derive(Args)]
pub struct ThemeModeArgs {
    /// Theme mode (light, dark, system)
    pub mode: String,
}

#[derive(Args)]
pub struct ThemeColorArgs {
    /// Theme color (default, purple, blue)
    pub color: String,
}
