//! Configuration layer for cookies-exposed.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File loading logic

mod error;
mod loading;
mod types;

pub use error::ConfigError;
pub use types::{Config, ReportConfig};
