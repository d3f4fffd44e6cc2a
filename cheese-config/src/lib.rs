//! Configuration for the stringcheese localization generator.
//!
//! Raw option values from the command line or a `stringcheese.toml` file are
//! turned into an immutable [`Config`] by [`ConfigBuilder`]. The config also
//! knows how to discover the languages present in the Android `res` folder
//! and where each language's output belongs in the iOS project.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod builder;
mod config;
mod defaults;
mod error;
mod raw;
mod scan;

pub use builder::ConfigBuilder;
pub use config::{Config, DartTarget, Flags};
pub use defaults::{
    DEFAULT_BASE_LANGUAGE_NAME, DEFAULT_STRINGS_NAME, DEFAULT_SWIFT_CLASS, DEFAULT_XML_NAME,
    Defaults,
};
pub use error::{Error, Result};
pub use raw::{CONFIG_FILE_NAME, RawInputs};
pub use scan::{folder_language, scan_language_folders, scan_language_ids};
