#[cfg(test)]
pub mod fixtures {
    use crate::analysis::{AnalysisResult, Analyzer};
    use crate::cookie::{CookieRecord, SameSite};
    use crate::input::PageContext;
    use crate::reporter::{Notifier, NotifyLevel};
    use std::sync::Mutex;

    /// Keeps notifications in memory so tests can inspect them.
    #[derive(Default)]
    pub struct RecordingNotifier {
        messages: Mutex<Vec<(NotifyLevel, String)>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<(NotifyLevel, String)> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, level: NotifyLevel) {
            self.messages
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        }
    }

    pub fn secure_page(cookie_string: Option<&str>) -> PageContext {
        PageContext::new("example.com", true, cookie_string.map(str::to_string))
    }

    /// Scored as if supplied with real attributes, on a secure page.
    pub fn create_test_result(records: Vec<CookieRecord>) -> AnalysisResult {
        Analyzer::default().analyze_records(&secure_page(None), records)
    }

    pub fn script_visible_result(cookie_string: &str) -> AnalysisResult {
        Analyzer::default().analyze(&secure_page(Some(cookie_string)))
    }

    /// Every predicate triggers: 3 + 2 + 2 + 1 + 1 + 1 = 10 on a secure page.
    pub fn worst_case_cookie() -> CookieRecord {
        CookieRecord::new("session_token", "eyJhbGciOiJIUzI1NiJ9.payload")
            .with_domain(".example.com")
            .with_secure(false)
            .with_http_only(false)
            .with_same_site(None)
    }

    /// No predicate triggers.
    pub fn hardened_cookie() -> CookieRecord {
        CookieRecord::new("prefs", "compact")
            .with_domain("example.com")
            .with_secure(true)
            .with_http_only(true)
            .with_same_site(Some(SameSite::Strict))
    }
}
