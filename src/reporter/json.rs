use crate::analysis::AnalysisResult;
use crate::reporter::Reporter;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result)
            .unwrap_or_else(|e| error_document(&format!("Failed to serialize result: {e}")))
    }
}

/// Well-formed JSON carrying an error message.
fn error_document(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
