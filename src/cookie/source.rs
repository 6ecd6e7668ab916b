//! Script-visible cookie enumeration.

use super::record::{CookieRecord, Expiry, SameSite};
use crate::input::PageContext;
use tracing::trace;

/// Produces [`CookieRecord`]s from the page's ambient cookie string.
///
/// Only name and value are observable from a raw cookie string. Every other
/// field is filled with a stated default:
///
/// | field     | value                                  |
/// |-----------|----------------------------------------|
/// | domain    | page hostname                          |
/// | path      | `/`                                    |
/// | expires   | `Session`                              |
/// | secure    | page is a secure context (assumption)  |
/// | httpOnly  | always `false`                         |
/// | sameSite  | `Lax` (assumption)                     |
pub struct CookieSource<'a> {
    page: &'a PageContext,
}

impl<'a> CookieSource<'a> {
    pub fn new(page: &'a PageContext) -> Self {
        Self { page }
    }

    /// Parse the current cookie string. Missing or empty input yields an
    /// empty list.
    pub fn enumerate(&self) -> Vec<CookieRecord> {
        match self.page.cookie_string.as_deref() {
            Some(raw) => parse_cookie_string(raw, self.page),
            None => Vec::new(),
        }
    }
}

/// Split `raw` into records, in input order, keeping duplicates.
pub fn parse_cookie_string(raw: &str, page: &PageContext) -> Vec<CookieRecord> {
    raw.split(';')
        .filter_map(|segment| {
            let segment = segment.trim();
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            let name = name.trim();
            if name.is_empty() {
                trace!(segment, "Skipping cookie segment without a name");
                return None;
            }
            Some(observed_record(name, value, page))
        })
        .collect()
}

fn observed_record(name: &str, value: &str, page: &PageContext) -> CookieRecord {
    CookieRecord {
        name: name.to_string(),
        value: value.to_string(),
        domain: page.hostname.clone(),
        path: "/".to_string(),
        expires: Expiry::Session,
        secure: page.secure_context,
        http_only: false,
        same_site: Some(SameSite::Lax),
    }
}
