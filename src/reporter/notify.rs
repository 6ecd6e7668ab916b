//! Short user-facing status messages.

use colored::Colorize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Success,
    Danger,
}

impl NotifyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyLevel::Info => "info",
            NotifyLevel::Success => "success",
            NotifyLevel::Danger => "danger",
        }
    }
}

pub trait Notifier {
    fn notify(&self, message: &str, level: NotifyLevel);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, message: &str, level: NotifyLevel) {
        (**self).notify(message, level);
    }
}

/// Writes colored status lines to stderr.
pub struct StderrNotifier;

impl StderrNotifier {
    pub fn format(message: &str, level: NotifyLevel) -> String {
        match level {
            NotifyLevel::Info => message.to_string(),
            NotifyLevel::Success => message.green().to_string(),
            NotifyLevel::Danger => message.red().bold().to_string(),
        }
    }
}

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str, level: NotifyLevel) {
        eprintln!("{}", Self::format(message, level));
    }
}
