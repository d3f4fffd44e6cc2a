//! Fallback values for every optional input.

use stringcheese_core::LanguageId;

/// Display name used for the base language when no explicit tag is set.
pub const DEFAULT_BASE_LANGUAGE_NAME: &str = "en";

/// Name of the Android XML string file, without extension.
pub const DEFAULT_XML_NAME: &str = "strings";

/// Name of the generated iOS `.strings` table, without extension.
pub const DEFAULT_STRINGS_NAME: &str = "Localizable";

/// Class name of the generated Swift key file.
pub const DEFAULT_SWIFT_CLASS: &str = "StringCheese";

/// Table of defaults applied by [`ConfigBuilder`](crate::ConfigBuilder).
///
/// Passed into the builder rather than read from globals, so callers can
/// substitute their own table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Language treated as the root set of strings.
    pub root_language: LanguageId,
    /// Display name for [`LanguageId::Base`]. Not a language identifier.
    pub base_language_name: String,
    pub xml_name: String,
    pub strings_name: String,
    pub swift_class: String,
    pub swift_key: bool,
    pub swift_arguments: bool,
    pub swift_static: bool,
    pub log_missing_strings: bool,
    pub reduce_keys: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            root_language: LanguageId::Base,
            base_language_name: DEFAULT_BASE_LANGUAGE_NAME.to_string(),
            xml_name: DEFAULT_XML_NAME.to_string(),
            strings_name: DEFAULT_STRINGS_NAME.to_string(),
            swift_class: DEFAULT_SWIFT_CLASS.to_string(),
            swift_key: true,
            swift_arguments: true,
            swift_static: false,
            log_missing_strings: true,
            reduce_keys: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let defaults = Defaults::default();
        assert!(defaults.root_language.is_base());
        assert_eq!(defaults.base_language_name, "en");
        assert_eq!(defaults.xml_name, "strings");
        assert_eq!(defaults.strings_name, "Localizable");
        assert_eq!(defaults.swift_class, "StringCheese");
        assert!(defaults.swift_key);
        assert!(defaults.swift_arguments);
        assert!(!defaults.swift_static);
        assert!(defaults.log_missing_strings);
        assert!(!defaults.reduce_keys);
    }
}
