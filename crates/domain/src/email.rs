use crate::{date::format_date, shared::entity::ID};
use chrono::NaiveDate;

const INNER_WIDTH: usize = 60;
const DESCRIPTION_PREVIEW_LEN: usize = 40;

/// The content of a reminder notification for one recipient
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEmail {
    pub reminder_id: ID,
    pub to: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_description: Option<String>,
    pub days_until: i64,
}

fn boxed_line(content: &str) -> String {
    let truncated: String = content.chars().take(INNER_WIDTH - 1).collect();
    format!("║ {:<width$}║", truncated, width = INNER_WIDTH - 1)
}

impl ReminderEmail {
    pub fn subject(&self) -> String {
        format!("Reminder - {}", self.event_name)
    }

    /// Plain text body framed in a box, as printed by the simulated transport
    pub fn render(&self) -> String {
        let rule = "═".repeat(INNER_WIDTH);
        let plural = if self.days_until > 1 { "s" } else { "" };

        let mut lines = vec![
            format!("╔{}╗", rule),
            boxed_line("SIMULATED EMAIL"),
            format!("╠{}╣", rule),
            boxed_line(&format!("To: {}", self.to)),
            boxed_line(&format!("Subject: {}", self.subject())),
            format!("╠{}╣", rule),
            boxed_line(""),
            boxed_line(&format!("Event: {}", self.event_name)),
            boxed_line(&format!("Date: {}", format_date(&self.event_date))),
            boxed_line(&format!("In: {} day{}", self.days_until, plural)),
            boxed_line(""),
        ];
        if let Some(description) = self.event_description.as_deref().filter(|d| !d.is_empty()) {
            let preview: String = description.chars().take(DESCRIPTION_PREVIEW_LEN).collect();
            lines.push(boxed_line(&format!("Description: {}", preview)));
        }
        lines.push(boxed_line("Don't forget this important event!"));
        lines.push(boxed_line(""));
        lines.push(format!("╚{}╝", rule));

        lines.join("\n")
    }
}
