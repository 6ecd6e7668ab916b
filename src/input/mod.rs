//! Input layer: page context and cookie input resolution.
//!
//! This module handles:
//! - The ambient page context (hostname, transport security, cookie string)
//! - Resolving CLI arguments into that context

mod page;
pub mod source;

pub use page::{DEFAULT_PAGE_URL, PageContext};
pub use source::{InputSource, ResolvedInput, SourceResolver, load_records, normalize_records};
