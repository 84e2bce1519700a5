use crate::model::task::Task;

/// The currently chosen subset criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterSelector {
    #[default]
    All,
    Pending,
    Completed,
}

impl FilterSelector {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterSelector::All => "all",
            FilterSelector::Pending => "pending",
            FilterSelector::Completed => "completed",
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            FilterSelector::All => true,
            FilterSelector::Pending => !task.completed,
            FilterSelector::Completed => task.completed,
        }
    }
}

impl std::str::FromStr for FilterSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterSelector::All),
            "pending" => Ok(FilterSelector::Pending),
            "completed" => Ok(FilterSelector::Completed),
            other => Err(format!(
                "invalid filter '{}' (expected all, pending, or completed)",
                other
            )),
        }
    }
}

/// The displayed subset: selector and text query applied conjunctively,
/// case-insensitive substring over title and description, input order
/// preserved. Pure; never mutates.
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    selector: FilterSelector,
    query: &str,
) -> Vec<&'a Task> {
    let query = query.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| selector.matches(task))
        .filter(|task| {
            query.is_empty()
                || task.title.to_lowercase().contains(&query)
                || task.description.to_lowercase().contains(&query)
        })
        .collect()
}
