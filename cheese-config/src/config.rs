//! The validated, fully defaulted configuration handed to generators.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use stringcheese_core::{
    LanguageId, ListDir,
    paths::{self, ios},
};

use crate::{
    Result,
    scan::{scan_language_folders, scan_language_ids},
};

/// Dart output target: one file plus the header written at its top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DartTarget {
    pub path: PathBuf,
    /// Text put at the top of the Dart file, e.g. `part of core.strings;`
    pub header: String,
}

/// Feature switches for the generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    /// Generate the Swift key file
    pub swift_key: bool,
    /// Generate call-site arguments in the Swift API
    pub swift_arguments: bool,
    /// Use static accessors in the Swift API
    pub swift_static: bool,
    /// Report keys missing from a translation
    pub log_missing_strings: bool,
    /// Shorten generated keys
    pub reduce_keys: bool,
}

/// Immutable configuration built once by [`ConfigBuilder`](crate::ConfigBuilder).
///
/// Which generators run is decided solely by [`Config::targets_ios`] and
/// [`Config::targets_dart`]; both are fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) generated_at: DateTime<Local>,
    pub(crate) android_res: PathBuf,
    pub(crate) ios_root: Option<PathBuf>,
    pub(crate) dart: Option<DartTarget>,
    pub(crate) root_language: LanguageId,
    pub(crate) base_language_name: String,
    pub(crate) xml_name: String,
    pub(crate) strings_name: String,
    pub(crate) swift_key_dir: Option<PathBuf>,
    pub(crate) swift_class: String,
    pub(crate) flags: Flags,
}

impl Config {
    /// Wall-clock time the configuration was built. Opaque metadata.
    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    /// Comment line generators put at the top of every generated file.
    pub fn timestamp_header(&self) -> String {
        format!(
            "// Last generated at: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S %:z")
        )
    }

    pub fn android_res(&self) -> &Path {
        &self.android_res
    }

    pub fn ios_root(&self) -> Option<&Path> {
        self.ios_root.as_deref()
    }

    pub fn dart(&self) -> Option<&DartTarget> {
        self.dart.as_ref()
    }

    pub fn targets_ios(&self) -> bool {
        self.ios_root.is_some()
    }

    pub fn targets_dart(&self) -> bool {
        self.dart.is_some()
    }

    /// Language whose strings are the root set.
    pub fn root_language(&self) -> &LanguageId {
        &self.root_language
    }

    /// Display name for the base language (e.g. `en`).
    ///
    /// This is only a label; it never identifies a folder.
    pub fn base_language_name(&self) -> &str {
        &self.base_language_name
    }

    /// Human-readable name of a language, using the base display name for
    /// [`LanguageId::Base`].
    pub fn language_label<'a>(&'a self, language: &'a LanguageId) -> &'a str {
        language.as_tag().unwrap_or(self.base_language_name.as_str())
    }

    pub fn xml_name(&self) -> &str {
        &self.xml_name
    }

    pub fn strings_name(&self) -> &str {
        &self.strings_name
    }

    pub fn swift_class(&self) -> &str {
        &self.swift_class
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Output path of a language's `.strings` file, if iOS is targeted.
    pub fn strings_path(&self, language: &LanguageId) -> Option<PathBuf> {
        self.ios_root
            .as_deref()
            .map(|root| paths::resolve_strings_path(language, root, &self.strings_name))
    }

    /// Android string resource file in the conventional folder of a language.
    pub fn source_strings_path(&self, language: &LanguageId) -> PathBuf {
        paths::resolve_source_path(language, &self.android_res, &self.xml_name)
    }

    /// Android string resource file inside a discovered `values` folder.
    pub fn source_file_in(&self, folder: &str) -> PathBuf {
        paths::resolve_source_file(&self.android_res, folder, &self.xml_name)
    }

    /// Output path of the Swift key file, if it will be generated.
    pub fn swift_key_path(&self) -> Option<PathBuf> {
        if !self.flags.swift_key {
            return None;
        }
        self.swift_key_dir
            .as_deref()
            .map(|dir| dir.join(format!("{}.{}", self.swift_class, ios::SWIFT_EXTENSION)))
    }

    /// Discover the languages present in the configured `res` folder.
    pub fn language_ids(&self, dir: &dyn ListDir) -> Result<BTreeSet<LanguageId>> {
        scan_language_ids(dir, &self.android_res)
    }

    /// Discover the languages present in the configured `res` folder, keyed
    /// to the folder each one was found in.
    pub fn language_folders(&self, dir: &dyn ListDir) -> Result<BTreeMap<LanguageId, String>> {
        scan_language_folders(dir, &self.android_res)
    }
}
