use crate::chat::{ChatMessage, Sender};
use crate::theme::Theme;
use console::style;
use std::fmt::Display;

/// Green bold: success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: timestamps, secondary text, decorative lines
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: warnings, offline replies
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green: confirmed values, paths, routes
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: bullets, the assistant's name
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// One transcript entry as a prefixed line with its `HH:MM` stamp.
///
/// Only `display_text` is ever printed.
pub fn message(msg: &ChatMessage) -> String {
    let who = match msg.sender {
        Sender::User => header("you"),
        Sender::Bot => accent("sd herbs"),
    };
    let body = msg.display_text.replace('\n', "\n    ");
    format!("{who} {}\n    {body}", dim(msg.time_label()))
}

pub fn theme_badge(theme: Theme) -> String {
    match theme {
        Theme::Dark => style("🌙 dark").magenta().to_string(),
        Theme::Light => style("☀️ light").yellow().to_string(),
    }
}
