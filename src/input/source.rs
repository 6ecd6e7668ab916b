//! Input source resolution.

use crate::cli::Cli;
use crate::cookie::CookieRecord;
use crate::error::{ExposureError, Result};
use crate::input::PageContext;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Where the cookies to analyze come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Cookie string given on the command line.
    CookieString(String),
    /// Cookie string read from a file.
    CookieFile(PathBuf),
    /// Cookie string read from standard input.
    Stdin,
    /// Pre-built records with real attributes, as JSON.
    Records(PathBuf),
    /// Nothing given; behaves like a page with no cookies.
    Empty,
}

impl InputSource {
    /// Determine the input source from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        if let Some(ref path) = cli.records {
            return Self::Records(path.clone());
        }

        if let Some(ref path) = cli.cookie_file {
            if path.as_os_str() == "-" {
                return Self::Stdin;
            }
            return Self::CookieFile(path.clone());
        }

        match cli.cookies {
            Some(ref raw) => Self::CookieString(raw.clone()),
            None => Self::Empty,
        }
    }

    /// Records from this source come from script-visible enumeration.
    pub fn is_script_visible(&self) -> bool {
        !matches!(self, Self::Records(_))
    }
}

/// Resolved page context plus, for record files, the records themselves.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub page: PageContext,
    /// Present only for [`InputSource::Records`].
    pub records: Option<Vec<CookieRecord>>,
}

/// Resolves input sources to a page context ready for analysis.
pub struct SourceResolver;

impl SourceResolver {
    pub fn resolve(cli: &Cli) -> Result<ResolvedInput> {
        let source = InputSource::from_cli(cli);
        debug!(?source, url = %cli.url, "Resolving input");

        let (cookie_string, records) = match source {
            InputSource::CookieString(raw) => (Some(raw), None),
            InputSource::CookieFile(path) => (Some(read_to_string(&path)?), None),
            InputSource::Stdin => {
                let mut raw = String::new();
                std::io::stdin()
                    .read_to_string(&mut raw)
                    .map_err(|e| ExposureError::ReadError {
                        path: "<stdin>".to_string(),
                        source: e,
                    })?;
                (Some(raw), None)
            }
            InputSource::Records(path) => (None, Some(load_records(&path)?)),
            InputSource::Empty => (None, None),
        };

        let page = PageContext::from_url(&cli.url, cookie_string.map(normalize_cookie_string))?;
        let records = records.map(|records| normalize_records(records, &page));
        Ok(ResolvedInput { page, records })
    }
}

/// Load a JSON array of cookie records.
pub fn load_records(path: &Path) -> Result<Vec<CookieRecord>> {
    let content = read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ExposureError::RecordsParse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Apply the record invariants to supplied records: names are trimmed,
/// nameless records are dropped and an unknown domain becomes the page host.
pub fn normalize_records(records: Vec<CookieRecord>, page: &PageContext) -> Vec<CookieRecord> {
    records
        .into_iter()
        .filter_map(|mut record| {
            let name = record.name.trim();
            if name.is_empty() {
                trace!(value = %record.value, "Skipping record without a name");
                return None;
            }
            record.name = name.to_string();
            if record.domain.trim().is_empty() {
                record.domain = page.hostname.clone();
            }
            Some(record)
        })
        .collect()
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ExposureError::ReadError {
        path: path.display().to_string(),
        source: e,
    })
}

// Cookie strings pasted into files usually end with a newline; a multi-line
// file is treated as one cookie string.
fn normalize_cookie_string(raw: String) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
