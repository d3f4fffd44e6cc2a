//! Core types for the stringcheese localization generator.
//!
//! This crate holds the pieces every other stringcheese crate agrees on:
//! language identifiers, the on-disk naming conventions of each platform,
//! and the narrow directory-listing capability used to discover languages.

mod language;
mod listing;
pub mod paths;
mod utils;

// Language identifiers
pub use language::LanguageId;
// Directory listing
#[cfg(any(test, feature = "testing"))]
pub use listing::MemoryDir;
pub use listing::{FsDir, ListDir};
// Path resolution
pub use paths::{resolve_source_file, resolve_source_path, resolve_strings_path};
// String utilities
pub use utils::{capitalize_first, non_blank};
