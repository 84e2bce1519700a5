use crate::model::task::Task;

/// Error type for share operations
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("no tasks selected")]
    EmptySelection,
    #[error("phone number '{0}' has no digits")]
    InvalidPhone(String),
}

/// The glyph used for a task's completion state in shared summaries
pub fn status_glyph(completed: bool) -> &'static str {
    if completed { "✅" } else { "⏳" }
}

/// Format the selected tasks as a human-readable multi-line summary:
/// numbered entries with status and priority glyphs, an indented
/// description line and due-date line when present, and a sign-off footer.
pub fn format_share_message(tasks: &[&Task]) -> String {
    let mut message = String::from("📋 *Shared tasks:*\n\n");
    for (index, task) in tasks.iter().enumerate() {
        message.push_str(&format!(
            "{}. {} {} *{}*\n",
            index + 1,
            status_glyph(task.completed),
            task.priority.glyph(),
            task.title
        ));
        if !task.description.is_empty() {
            message.push_str(&format!("   📝 {}\n", task.description));
        }
        if let Some(due) = task.due_date {
            message.push_str(&format!("   📅 Due: {}\n", due));
        }
        message.push('\n');
    }
    message.push_str("Sent from Task Master");
    message
}

/// Build the messaging-launcher reference for a selection: non-digits are
/// stripped from the phone number and the message is percent-encoded.
/// Launching the URL is the caller's business.
pub fn share_url(phone: &str, tasks: &[&Task]) -> Result<String, ShareError> {
    if tasks.is_empty() {
        return Err(ShareError::EmptySelection);
    }
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(ShareError::InvalidPhone(phone.to_string()));
    }
    let message = format_share_message(tasks);
    Ok(format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(&message)
    ))
}
