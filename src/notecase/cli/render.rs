use chrono::{DateTime, Utc};
use colored::*;
use notecase::api::{CmdMessage, MessageLevel};
use notecase::model::Note;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 8;
const TIME_WIDTH: usize = 16;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for note in notes {
        let id: String = note.id.chars().take(ID_WIDTH).collect();
        let labels = if note.labels.is_empty() {
            String::new()
        } else {
            format!(" [{}]", note.labels.join(", "))
        };

        let preview: String = note
            .content
            .chars()
            .take(60)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = if note.title.is_empty() {
            preview
        } else if preview.is_empty() {
            note.title.clone()
        } else {
            format!("{} {}", note.title, preview)
        };

        let fixed = ID_WIDTH + 2 + labels.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let shown = truncate_to_width(&line, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "{}  {}{}{}{}",
            id.yellow(),
            shown,
            labels.cyan(),
            " ".repeat(padding),
            format_time_ago(note.last_modified).dimmed()
        );
    }
}

pub fn print_full_note(note: &Note) {
    let title = if note.title.is_empty() {
        "(untitled)"
    } else {
        note.title.as_str()
    };
    println!("{} {}", note.id.yellow(), title.bold());
    if !note.labels.is_empty() {
        println!("{}", note.labels.join(", ").cyan());
    }
    println!("--------------------------------");
    println!("{}", note.content);
}

pub fn print_labels(labels: &[String]) {
    if labels.is_empty() {
        println!("No labels in use.");
    }
    for label in labels {
        println!("{}", label);
    }
}

pub fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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

fn format_time_ago(epoch_ms: i64) -> String {
    let Some(timestamp) = DateTime::<Utc>::from_timestamp_millis(epoch_ms) else {
        return format!("{:>width$}", "-", width = TIME_WIDTH);
    };
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = timeago::Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn time_ago_is_padded() {
        let s = format_time_ago(Utc::now().timestamp_millis());
        assert_eq!(s.width(), TIME_WIDTH);
    }
}
