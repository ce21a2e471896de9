use chrono::{DateTime, Utc};
use colored::Colorize;
use notez::api::{CmdMessage, MessageLevel};
use notez::config::{NotezConfig, CONFIG_KEYS};
use notez::index::DisplayNote;
use notez::model::RemoteNote;
use std::path::PathBuf;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const INDENT: &str = "    ";

/// Shown in place of suggestions for notes that never received any.
const OFFLINE_SUGGESTION: &str = "Please go online";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_notes(notes: &[DisplayNote]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for dn in notes {
        let idx_str = format!("{}. ", dn.index);
        let time_ago = format_time_ago(dn.note.created_at);

        let preview: String = dn
            .note
            .content
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let fixed_width = INDENT.width() + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let preview = truncate_to_width(&preview, available);
        let padding = available.saturating_sub(preview.width());

        println!(
            "{}{}{}{}{}",
            INDENT,
            idx_str.yellow(),
            preview,
            " ".repeat(padding),
            time_ago.dimmed()
        );

        let suggestion_line = suggestion_summary(&dn.note.suggestions);
        let prefix = format!("{}{}", INDENT, " ".repeat(idx_str.width()));
        let label = "Suggestion: ";
        let room = LINE_WIDTH.saturating_sub(prefix.width() + label.width());
        println!(
            "{}{}{}",
            prefix,
            label.bold().dimmed(),
            truncate_to_width(&suggestion_line, room).dimmed()
        );
    }
}

fn suggestion_summary(suggestions: &[String]) -> String {
    match suggestions {
        [] => OFFLINE_SUGGESTION.to_string(),
        [only] => only.clone(),
        [first, rest @ ..] => format!("{} (+{} more)", first, rest.len()),
    }
}

pub(super) fn print_full_notes(notes: &[DisplayNote]) {
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let mut header = format!(
            "{} {}",
            dn.index.to_string().yellow(),
            dn.note.created_at.to_rfc3339().dimmed()
        );
        if let Some(updated) = dn.note.updated_at {
            let edited = format!("(edited {})", updated.to_rfc3339());
            header.push_str(&format!(" {}", edited.dimmed()));
        }
        println!("{}", header);
        println!("--------------------------------");
        println!("{}", dn.note.content);

        if !dn.note.suggestions.is_empty() {
            println!();
            println!("{}", "Suggestions:".bold());
            print_suggestions(&dn.note.suggestions);
        }
    }
}

pub(super) fn print_suggestions(suggestions: &[String]) {
    for (i, s) in suggestions.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).dimmed(), s);
    }
}

pub(super) fn print_remote_notes(notes: &[RemoteNote]) {
    if notes.is_empty() {
        println!("No remote notes found.");
        return;
    }
    for note in notes {
        let preview: String = note.content.lines().next().unwrap_or("").to_string();
        let id_str = format!("[{}] ", note.id);
        let room = LINE_WIDTH.saturating_sub(INDENT.width() + id_str.width());
        println!(
            "{}{}{}",
            INDENT,
            id_str.yellow(),
            truncate_to_width(&preview, room)
        );
        for s in &note.suggestions {
            println!("{}  {} {}", INDENT, "-".dimmed(), s.dimmed());
        }
    }
}

pub(super) fn print_config(config: &NotezConfig) {
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        let shown = if value.is_empty() {
            "(unset)".dimmed().to_string()
        } else {
            value
        };
        println!("{} = {}", key, shown);
    }
}

pub(super) fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
