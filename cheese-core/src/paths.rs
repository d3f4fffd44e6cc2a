//! Platform directory conventions and output path resolution.
//!
//! Android encodes a language as a `-<tag>` qualifier on the `values`
//! folder; iOS uses one `<Tag>.lproj` folder per language and a fixed
//! `Base.lproj` for the development language. The constants below are the
//! only place those names are spelled out.

use std::path::{Path, PathBuf};

use crate::{LanguageId, utils::capitalize_first};

/// Android resource conventions.
pub mod android {
    /// Token identifying a string resource folder.
    pub const VALUES_DIR: &str = "values";

    /// Separator between the folder token and its qualifiers.
    pub const QUALIFIER_SEPARATOR: char = '-';

    /// File extension for string resource files.
    pub const FILE_EXTENSION: &str = "xml";
}

/// iOS project conventions.
pub mod ios {
    /// Directory name (without suffix) for the unlocalized base language.
    pub const BASE_DIR: &str = "Base";

    /// Suffix appended to every localization directory.
    pub const DIR_SUFFIX: &str = ".lproj";

    /// File extension for `.strings` tables.
    pub const FILE_EXTENSION: &str = "strings";

    /// File extension for Swift sources.
    pub const SWIFT_EXTENSION: &str = "swift";
}

/// Name of the iOS localization directory for a language.
///
/// `Base` always maps to `Base.lproj`; a tag maps to the tag with its first
/// character upper-cased, e.g. `fr` -> `Fr.lproj`.
pub fn lproj_dir_name(language: &LanguageId) -> String {
    match language {
        LanguageId::Base => format!("{}{}", ios::BASE_DIR, ios::DIR_SUFFIX),
        LanguageId::Tag(tag) => format!("{}{}", capitalize_first(tag), ios::DIR_SUFFIX),
    }
}

/// Resolve the `.strings` output path of a language inside an iOS project.
///
/// Pure string composition: `<root>/<lproj dir>/<base_name>.strings`.
/// Empty inputs are not rejected here.
pub fn resolve_strings_path(language: &LanguageId, root: &Path, base_name: &str) -> PathBuf {
    root.join(lproj_dir_name(language))
        .join(format!("{}.{}", base_name, ios::FILE_EXTENSION))
}

/// Name of the Android `values` folder holding a language's strings.
pub fn values_dir_name(language: &LanguageId) -> String {
    match language {
        LanguageId::Base => android::VALUES_DIR.to_string(),
        LanguageId::Tag(tag) => format!(
            "{}{}{}",
            android::VALUES_DIR,
            android::QUALIFIER_SEPARATOR,
            tag
        ),
    }
}

/// Resolve the Android string resource file of a language under `res/`.
///
/// This is the conventional folder only. A language discovered in a
/// qualified folder such as `values-zh-rTW` lives in that folder instead;
/// use [`resolve_source_file`] with the folder name for those.
pub fn resolve_source_path(language: &LanguageId, res_root: &Path, xml_name: &str) -> PathBuf {
    resolve_source_file(res_root, &values_dir_name(language), xml_name)
}

/// Resolve the string resource file inside a given `values` folder.
pub fn resolve_source_file(res_root: &Path, folder: &str, xml_name: &str) -> PathBuf {
    res_root
        .join(folder)
        .join(format!("{}.{}", xml_name, android::FILE_EXTENSION))
}
