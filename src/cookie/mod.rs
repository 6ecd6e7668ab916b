//! Cookie data model and script-visible enumeration.

mod record;
mod source;

pub use record::{CookieRecord, Expiry, SameSite};
pub use source::{CookieSource, parse_cookie_string};
