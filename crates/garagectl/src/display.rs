//! Terminal output for replies, history and menus.
//!
//! Reply text carries `**bold**` markup. With color on, the markup becomes
//! ANSI bold; without, it is stripped.

use crate::thinking::{format_elapsed, PREFIX};
use garage_shared::presets::QUICK_QUESTIONS;
use garage_shared::render::{emphasis_spans, strip_markup};
use garage_shared::{ConversationMessage, Role};
use owo_colors::OwoColorize;
use std::time::Duration;

pub const USER_PREFIX: &str = "[vous]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// One line of reply text, markup resolved
    pub fn format_line(&self, line: &str) -> String {
        if !self.color {
            return strip_markup(line);
        }
        emphasis_spans(line)
            .into_iter()
            .map(|(bold, span)| {
                if bold {
                    span.bold().to_string()
                } else {
                    span.to_string()
                }
            })
            .collect()
    }

    /// Whole reply text, line by line
    pub fn format_text(&self, text: &str) -> String {
        text.lines()
            .map(|line| self.format_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn prefix(&self, role: Role) -> String {
        match (role, self.color) {
            (Role::Bot, true) => PREFIX.bright_cyan().to_string(),
            (Role::User, true) => USER_PREFIX.bright_green().to_string(),
            (Role::Bot, false) => PREFIX.to_string(),
            (Role::User, false) => USER_PREFIX.to_string(),
        }
    }

    pub fn format_message(&self, message: &ConversationMessage) -> String {
        format!(
            "{}  {}",
            self.prefix(message.role),
            self.format_text(&message.content)
        )
    }

    pub fn print_message(&self, message: &ConversationMessage) {
        println!("{}", self.format_message(message));
        println!();
    }

    /// Bot reply followed by how long it took
    pub fn print_reply(&self, message: &ConversationMessage, elapsed: Duration) {
        println!("{}", self.format_message(message));
        self.notice(&format_elapsed(elapsed));
        println!();
    }

    /// Full history with timestamps
    pub fn print_history(&self, messages: &[ConversationMessage]) {
        for message in messages {
            let stamp = message.timestamp.format("%H:%M:%S").to_string();
            if self.color {
                println!("{} #{}", stamp.dimmed(), message.id);
            } else {
                println!("{} #{}", stamp, message.id);
            }
            self.print_message(message);
        }
    }

    pub fn print_quick_questions(&self) {
        for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
            if self.color {
                println!("  {} {}", format!("{}.", i + 1).bright_yellow(), question);
            } else {
                println!("  {}. {}", i + 1, question);
            }
        }
    }

    pub fn notice(&self, text: &str) {
        if self.color {
            println!("{}", text.dimmed());
        } else {
            println!("{}", text);
        }
    }

    pub fn warning(&self, text: &str) {
        if self.color {
            eprintln!("{} {}", "!".bright_red().bold(), text);
        } else {
            eprintln!("! {}", text);
        }
    }
}
