use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// SameSite cookie attribute. Browser export spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    #[serde(alias = "strict")]
    Strict,
    #[serde(alias = "lax")]
    Lax,
    #[serde(alias = "none", alias = "no_restriction")]
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

impl std::fmt::Display for SameSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cookie expiration. Serialized as `"Session"` or the raw timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Expiry {
    #[default]
    Session,
    At(String),
}

impl Expiry {
    pub const SESSION: &'static str = "Session";
}

impl From<&str> for Expiry {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == Self::SESSION {
            Expiry::Session
        } else {
            Expiry::At(trimmed.to_string())
        }
    }
}

impl Serialize for Expiry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expiry::Session => serializer.serialize_str(Self::SESSION),
            Expiry::At(ts) => serializer.serialize_str(ts),
        }
    }
}

impl<'de> Deserialize<'de> for Expiry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Expiry::from).unwrap_or_default())
    }
}

/// A single cookie together with its best-effort metadata.
///
/// Records produced by [`CookieSource`](super::CookieSource) can never report
/// `http_only = true`: HttpOnly cookies are invisible to script-level
/// enumeration, so any cookie that shows up there is by definition not
/// HttpOnly. `secure`, `same_site`, `domain`, `path` and `expires` are
/// assumed defaults, not observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub expires: Expiry,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_site: Option<SameSite>,
}

fn default_path() -> String {
    "/".to_string()
}

impl CookieRecord {
    /// Record with no metadata beyond name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: String::new(),
            path: default_path(),
            expires: Expiry::Session,
            secure: false,
            http_only: false,
            same_site: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn with_same_site(mut self, same_site: Option<SameSite>) -> Self {
        self.same_site = same_site;
        self
    }

    /// Domain attribute with a leading dot, i.e. shared with subdomains.
    pub fn has_broad_domain(&self) -> bool {
        self.domain.starts_with('.')
    }

    /// SameSite is `None` or not set at all.
    pub fn allows_cross_site(&self) -> bool {
        matches!(self.same_site, None | Some(SameSite::None))
    }
}
