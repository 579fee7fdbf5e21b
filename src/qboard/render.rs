use colored::*;
use qboard::api::{MessageLevel, ProgressSummary};
use qboard::commands::CmdMessage;
use qboard::config::QboardConfig;
use qboard::model::{Difficulty, Question, SortConfig, SortDirection};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 110;
const TITLE_WIDTH: usize = 42;
const BADGE_WIDTH: usize = 7;
const FREQ_WIDTH: usize = 7;
const ACCEPT_WIDTH: usize = 8;
const DONE_MARKER: &str = "✓";
const TODO_MARKER: &str = "·";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn render_progress(progress: &ProgressSummary) -> String {
    format!(
        "{} {}/{} completed ({}%)",
        progress_bar(progress.percent, 20),
        progress.completed,
        progress.total,
        progress.percent
    )
}

fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled).green(),
        "-".repeat(width - filled).dimmed()
    )
}

pub fn render_sort(sort: &SortConfig) -> String {
    let arrow = match sort.direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    };
    format!("sorted by {} {}", sort.key.label(), arrow)
}

pub fn render_question_list(questions: &[Question], show_links: bool) -> String {
    if questions.is_empty() {
        return "No questions found.\n".to_string();
    }

    let mut out = String::new();
    let number_width = questions
        .iter()
        .map(|q| q.position.to_string().len())
        .max()
        .unwrap_or(1);

    for q in questions {
        let number = format!("{:>width$}.", q.position, width = number_width);
        let marker = if q.completed {
            DONE_MARKER.green()
        } else {
            TODO_MARKER.dimmed()
        };

        let title = pad_to_width(&truncate_to_width(&q.title, TITLE_WIDTH), TITLE_WIDTH);
        let title = if q.completed {
            title.dimmed()
        } else {
            title.normal()
        };

        let fixed = number_width + 1 + 3 + TITLE_WIDTH + BADGE_WIDTH + FREQ_WIDTH + ACCEPT_WIDTH + 4;
        let topics = truncate_to_width(&q.topic_list().join(", "), LINE_WIDTH.saturating_sub(fixed));

        out.push_str(&format!(
            "{} {} {} {} {:>fw$} {:>aw$}  {}\n",
            number.yellow(),
            marker,
            title,
            badge(q),
            q.frequency.trim(),
            q.acceptance_rate.trim(),
            topics.dimmed(),
            fw = FREQ_WIDTH,
            aw = ACCEPT_WIDTH,
        ));
        if show_links {
            out.push_str(&format!(
                "{}{}\n",
                " ".repeat(number_width + 3),
                q.link.underline()
            ));
        }
    }
    out
}

fn badge(q: &Question) -> ColoredString {
    let label = pad_to_width(
        q.badge().map(|d| d.label()).unwrap_or("Unknown"),
        BADGE_WIDTH,
    );
    match q.badge() {
        Some(Difficulty::Easy) => label.green(),
        Some(Difficulty::Medium) => label.yellow(),
        Some(Difficulty::Hard) => label.red(),
        None => label.dimmed(),
    }
}

pub fn render_config(config: &QboardConfig) -> String {
    QboardConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|v| format!("{} = {}\n", key, v)))
        .collect()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
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
