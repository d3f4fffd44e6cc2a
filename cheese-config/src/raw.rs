//! Raw, unvalidated option values.
//!
//! Inputs arrive from the command line and, optionally, from a
//! `stringcheese.toml` file. Every field is optional here; deciding what is
//! required happens in [`ConfigBuilder`](crate::ConfigBuilder).

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result};

/// Default file name for the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "stringcheese.toml";

/// Option values exactly as the user supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawInputs {
    /// Path to the Android `res` folder
    pub android: Option<String>,
    /// Path to the iOS project root
    pub ios: Option<String>,
    /// Path to the Dart output file
    pub dart: Option<String>,
    /// Text put at the top of the Dart file
    pub dart_header: Option<String>,
    /// Language used as the root set of strings
    pub lang: Option<String>,
    /// Android XML string file name
    pub xml_name: Option<String>,
    /// iOS `.strings` file name
    pub strings_name: Option<String>,
    /// Directory of the Swift key file
    pub swift_key_dir: Option<String>,
    /// Class name of the Swift key file
    pub swift_class: Option<String>,
    pub swift_key: Option<bool>,
    pub swift_arguments: Option<bool>,
    pub swift_static: Option<bool>,
    pub log_missing_strings: Option<bool>,
    pub reduce_keys: Option<bool>,
}

impl RawInputs {
    /// Read raw inputs from a `stringcheese.toml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse raw inputs with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Layer `overrides` on top of `self`; any value present in `overrides` wins.
    pub fn merge(self, overrides: RawInputs) -> RawInputs {
        RawInputs {
            android: overrides.android.or(self.android),
            ios: overrides.ios.or(self.ios),
            dart: overrides.dart.or(self.dart),
            dart_header: overrides.dart_header.or(self.dart_header),
            lang: overrides.lang.or(self.lang),
            xml_name: overrides.xml_name.or(self.xml_name),
            strings_name: overrides.strings_name.or(self.strings_name),
            swift_key_dir: overrides.swift_key_dir.or(self.swift_key_dir),
            swift_class: overrides.swift_class.or(self.swift_class),
            swift_key: overrides.swift_key.or(self.swift_key),
            swift_arguments: overrides.swift_arguments.or(self.swift_arguments),
            swift_static: overrides.swift_static.or(self.swift_static),
            log_missing_strings: overrides.log_missing_strings.or(self.log_missing_strings),
            reduce_keys: overrides.reduce_keys.or(self.reduce_keys),
        }
    }
}

impl FromStr for RawInputs {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}
