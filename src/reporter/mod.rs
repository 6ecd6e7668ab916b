pub mod json;
pub mod notify;
pub mod terminal;
pub mod text;

use crate::analysis::AnalysisResult;

pub use notify::{Notifier, NotifyLevel, StderrNotifier};

pub trait Reporter {
    fn report(&self, result: &AnalysisResult) -> String;
}
