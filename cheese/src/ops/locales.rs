//! Locales operation - language discovery and output paths.

use std::path::Path;

use stringcheese_config::{Config, Result};
use stringcheese_core::{LanguageId, ListDir};

use crate::reports::{LocaleEntry, LocalesReport};

/// Execute the locales operation.
///
/// Scans the res folder once and resolves, for the base language and every
/// discovered language, its source file and its iOS output file.
pub fn locales(config: &Config, dir: &dyn ListDir) -> Result<LocalesReport> {
    let discovered = config.language_folders(dir)?;

    let missing_root = match config.root_language() {
        LanguageId::Tag(tag) if !discovered.contains_key(config.root_language()) => {
            Some(tag.clone())
        }
        _ => None,
    };

    let base_source = config.source_strings_path(&LanguageId::Base);
    let entries = std::iter::once((LanguageId::Base, base_source))
        .chain(
            discovered
                .into_iter()
                .map(|(language, folder)| (language, config.source_file_in(&folder))),
        )
        .map(|(language, source)| locale_entry(config, &language, &source))
        .collect();

    Ok(LocalesReport {
        android_res: config.android_res().to_path_buf(),
        ios_root: config.ios_root().map(|p| p.to_path_buf()),
        entries,
        missing_root,
    })
}

fn locale_entry(config: &Config, language: &LanguageId, source: &Path) -> LocaleEntry {
    let label = match language.as_tag() {
        Some(tag) => tag.to_string(),
        None => format!("{} (base)", config.language_label(language)),
    };
    let source = relative_to(source, config.android_res());
    let output = config
        .strings_path(language)
        .zip(config.ios_root())
        .map(|(path, root)| relative_to(&path, root));

    LocaleEntry {
        label,
        source,
        output,
    }
}

fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use stringcheese_config::{ConfigBuilder, Error, RawInputs};
    use stringcheese_core::{FsDir, MemoryDir};

    use super::*;
    use crate::reports::TextOutputExt;

    fn res_dir() -> MemoryDir {
        MemoryDir::new().with_dir(
            "/android/res",
            ["values-fr", "drawable", "values", "values-zh-rTW", "layout"],
        )
    }

    fn build(lang: Option<&str>, ios: Option<&str>) -> Config {
        let raw = RawInputs {
            android: Some("/android/res".to_string()),
            ios: ios.map(str::to_string),
            dart: Some("lib/strings.dart".to_string()),
            dart_header: Some("part of core.strings;".to_string()),
            lang: lang.map(str::to_string),
            ..Default::default()
        };
        ConfigBuilder::new().build(raw).unwrap()
    }

    #[test]
    fn test_locales_report_ios() {
        let config = build(None, Some("/ios/App"));
        let report = locales(&config, &res_dir()).unwrap();

        assert_eq!(report.missing_root, None);
        insta::assert_snapshot!(report.render_text(), @r"
        Source: /android/res
        Output: /ios/App

        Languages (3):
          - en (base): values/strings.xml -> Base.lproj/Localizable.strings
          - fr: values-fr/strings.xml -> Fr.lproj/Localizable.strings
          - zh: values-zh-rTW/strings.xml -> Zh.lproj/Localizable.strings
        ");
    }

    #[test]
    fn test_locales_report_without_ios() {
        let config = build(None, None);
        let report = locales(&config, &res_dir()).unwrap();

        assert!(report.entries.iter().all(|e| e.output.is_none()));
        insta::assert_snapshot!(report.render_text(), @r"
        Source: /android/res

        Languages (3):
          - en (base): values/strings.xml
          - fr: values-fr/strings.xml
          - zh: values-zh-rTW/strings.xml
        ");
    }

    #[test]
    fn test_root_language_without_folder_warns() {
        let config = build(Some("de"), Some("/ios/App"));
        let report = locales(&config, &res_dir()).unwrap();

        assert_eq!(report.missing_root.as_deref(), Some("de"));
        assert!(
            report
                .render_text()
                .starts_with("warning: root language 'de' has no values-de folder in /android/res\n")
        );
    }

    #[test]
    fn test_discovered_root_language_does_not_warn() {
        let config = build(Some("fr"), Some("/ios/App"));
        let report = locales(&config, &res_dir()).unwrap();

        assert_eq!(report.missing_root, None);
    }

    #[test]
    fn test_reported_sources_exist_on_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let res = temp.path().join("res");
        for folder in ["values", "values-fr", "values-zh-rTW"] {
            std::fs::create_dir_all(res.join(folder)).unwrap();
            std::fs::write(res.join(folder).join("strings.xml"), "<resources/>").unwrap();
        }
        let raw = RawInputs {
            android: Some(res.display().to_string()),
            ios: Some("/ios/App".to_string()),
            ..Default::default()
        };
        let config = ConfigBuilder::new().build(raw).unwrap();

        let report = locales(&config, &FsDir).unwrap();

        assert_eq!(report.entries.len(), 3);
        for entry in &report.entries {
            assert!(res.join(&entry.source).exists(), "{} is missing", entry.source);
        }
    }

    #[test]
    fn test_unreadable_res_folder() {
        let config = build(None, Some("/ios/App"));
        let err = locales(&config, &MemoryDir::new()).unwrap_err();

        assert!(matches!(*err, Error::DirectoryAccess { .. }));
    }
}
