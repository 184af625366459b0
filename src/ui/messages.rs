//! Console messages with icon and colour prefix.
//! Colours are disabled when `NO_COLOR` is set.

use std::env;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn render(level: Level, msg: &dyn fmt::Display) -> String {
    if env::var_os("NO_COLOR").is_some() {
        format!("{} {}", level.icon(), msg)
    } else {
        format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, &msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Success, &msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Warning, &msg));
}

/// Errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Error, &msg));
}
