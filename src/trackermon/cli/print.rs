use colored::{ColoredString, Colorize};
use trackermon::api::{CmdMessage, LoadOutcome, MessageLevel};
use trackermon::catalog::Catalog;
use trackermon::commands::CmdResult;
use trackermon::index::DisplayShow;
use trackermon::model::{Show, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const MAX_NAME_WIDTH: usize = 40;
const STATUS_WIDTH: usize = 10;

/// Feedback, then a card for each show the command created or changed, then
/// the visible list.
pub(super) fn print_result(result: &CmdResult, catalog: &Catalog) {
    print_messages(&result.messages);
    if result.show_help || result.exit {
        return;
    }
    for show in result
        .affected_shows
        .iter()
        .filter(|s| catalog.all().contains(*s))
    {
        print_show_card(show);
    }
    print_shows(&result.listed_shows);
}

fn print_show_card(show: &Show) {
    println!();
    println!("  {}", show.name().as_str().bold());
    println!(
        "  {:<9}{}",
        "Status:",
        status_colored(show.status(), show.status().title_case())
    );
    if !show.tags().is_empty() {
        println!("  {:<9}{}", "Tags:", tags_label(show).cyan());
    }
    if !show.comment().is_empty() {
        println!("  {:<9}{}", "Comment:", show.comment().as_str().dimmed());
    }
    println!();
}

pub(super) fn print_startup(outcome: &LoadOutcome, shows: &[DisplayShow]) {
    if let Some(message) = outcome.message() {
        print_messages(&[message]);
    }
    print_shows(shows);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_shows(shows: &[DisplayShow]) {
    if shows.is_empty() {
        println!("No shows found.");
        return;
    }

    let name_width = shows
        .iter()
        .map(|ds| ds.show.name().as_str().width())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);
    let index_width = shows.len().to_string().len() + 2;

    for ds in shows {
        println!("{}", format_row(ds, index_width, name_width));
    }
}

fn status_colored(status: Status, label: String) -> ColoredString {
    match status {
        Status::Watching => label.green(),
        Status::Completed => label.blue(),
        Status::Planning => label.yellow(),
        Status::Dropped => label.red(),
    }
}

fn tags_label(show: &Show) -> String {
    show.tags().iter().map(|t| t.to_string()).collect()
}

fn format_row(ds: &DisplayShow, index_width: usize, name_width: usize) -> String {
    let idx = format!("{:>width$}", format!("{}.", ds.index), width = index_width);

    let name = truncate_to_width(ds.show.name().as_str(), name_width);
    let padding = name_width.saturating_sub(name.width());

    let tags = tags_label(&ds.show);
    let used = index_width + 1 + name_width + 2 + STATUS_WIDTH + 1 + tags.width() + 2;
    let comment = if ds.show.comment().is_empty() {
        String::new()
    } else {
        truncate_to_width(ds.show.comment().as_str(), LINE_WIDTH.saturating_sub(used))
    };

    let line = format!(
        "{} {}{}  {} {}  {}",
        idx.yellow(),
        name.bold(),
        " ".repeat(padding),
        status_colored(
            ds.show.status(),
            format!("{:<width$}", ds.show.status().as_str(), width = STATUS_WIDTH)
        ),
        tags.cyan(),
        comment.dimmed()
    );
    line.trim_end().to_string()
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
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
