use std::ops::Range;

use regex::Regex;

use crate::model::task::Task;

/// Which field of a task matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Id,
    Title,
    Description,
}

impl MatchField {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchField::Id => "id",
            MatchField::Title => "title",
            MatchField::Description => "description",
        }
    }
}

/// A search hit for a task field
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub task_id: String,
    pub field: MatchField,
    pub spans: Vec<Range<usize>>,
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

/// Search the collection by regex over id, title, and description. One hit
/// per matching field, in collection order.
pub fn search_tasks(tasks: &[Task], re: &Regex) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    for task in tasks {
        let spans = find_matches(re, &task.id);
        if !spans.is_empty() {
            hits.push(SearchHit {
                task_id: task.id.clone(),
                field: MatchField::Id,
                spans,
            });
        }

        let spans = find_matches(re, &task.title);
        if !spans.is_empty() {
            hits.push(SearchHit {
                task_id: task.id.clone(),
                field: MatchField::Title,
                spans,
            });
        }

        if !task.description.is_empty() {
            let spans = find_matches(re, &task.description);
            if !spans.is_empty() {
                hits.push(SearchHit {
                    task_id: task.id.clone(),
                    field: MatchField::Description,
                    spans,
                });
            }
        }
    }
    hits
}
