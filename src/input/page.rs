//! Page context: what the hosting browser would expose implicitly.

use crate::error::{ExposureError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_PAGE_URL: &str = "https://localhost/";

/// Ambient state of the page being inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    /// Host the page was served from; the default domain for every cookie.
    pub hostname: String,
    /// The page was loaded over an encrypted transport.
    pub secure_context: bool,
    /// Raw `name=value; ...` cookie string, if any.
    #[serde(skip)]
    pub cookie_string: Option<String>,
}

impl PageContext {
    pub fn new(
        hostname: impl Into<String>,
        secure_context: bool,
        cookie_string: Option<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            secure_context,
            cookie_string,
        }
    }

    /// Derive hostname and transport security from a page URL.
    pub fn from_url(page_url: &str, cookie_string: Option<String>) -> Result<Self> {
        let parsed = Url::parse(page_url).map_err(|e| ExposureError::InvalidPageUrl {
            url: page_url.to_string(),
            reason: e.to_string(),
        })?;

        let hostname = parsed
            .host_str()
            .ok_or_else(|| ExposureError::InvalidPageUrl {
                url: page_url.to_string(),
                reason: "URL has no host".to_string(),
            })?
            .to_string();

        Ok(Self {
            hostname,
            secure_context: parsed.scheme() == "https",
            cookie_string,
        })
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new("localhost", true, None)
    }
}
