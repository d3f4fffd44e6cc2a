//! Check operation - configuration summary.

use stringcheese_config::Config;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The config is already validated; this only collects what will be used.
pub fn check(config: &Config) -> CheckReport {
    let root_language = match config.root_language().as_tag() {
        Some(tag) => tag.to_string(),
        None => format!("base ({})", config.base_language_name()),
    };

    CheckReport {
        android_res: config.android_res().to_path_buf(),
        ios_root: config.ios_root().map(|p| p.to_path_buf()),
        dart: config.dart().cloned(),
        root_language,
        xml_file: format!("{}.xml", config.xml_name()),
        strings_file: format!("{}.strings", config.strings_name()),
        swift_key: config.swift_key_path(),
        flags: config.flags(),
    }
}

#[cfg(test)]
mod tests {
    use stringcheese_config::{ConfigBuilder, RawInputs};

    use super::*;
    use crate::reports::TextOutputExt;

    fn build(raw: RawInputs) -> Config {
        ConfigBuilder::new().build(raw).unwrap()
    }

    #[test]
    fn test_check_report_ios() {
        let config = build(RawInputs {
            android: Some("/android/res".to_string()),
            ios: Some("/ios/App".to_string()),
            ..Default::default()
        });

        insta::assert_snapshot!(check(&config).render_text(), @r"
        ✓ configuration is valid

        Source:
          android: /android/res
        Targets:
          ios: /ios/App
        Files:
          xml: strings.xml
          strings: Localizable.strings
          swift key: /ios/App/StringCheese.swift
        Options:
          root language: base (en)
          swift arguments: yes
          swift static: no
          log missing strings: yes
          reduce keys: no
        ");
    }

    #[test]
    fn test_check_report_dart_only() {
        let config = build(RawInputs {
            android: Some("/android/res".to_string()),
            dart: Some("lib/strings.dart".to_string()),
            dart_header: Some("part of core.strings;".to_string()),
            lang: Some("fr".to_string()),
            reduce_keys: Some(true),
            ..Default::default()
        });

        insta::assert_snapshot!(check(&config).render_text(), @r#"
        ✓ configuration is valid

        Source:
          android: /android/res
        Targets:
          dart: lib/strings.dart ("part of core.strings;")
        Files:
          xml: strings.xml
        Options:
          root language: fr
          swift arguments: yes
          swift static: no
          log missing strings: yes
          reduce keys: yes
        "#);
    }

    #[test]
    fn test_check_report_swift_key_disabled() {
        let config = build(RawInputs {
            android: Some("/android/res".to_string()),
            ios: Some("/ios/App".to_string()),
            swift_key: Some(false),
            ..Default::default()
        });

        let report = check(&config);
        assert_eq!(report.swift_key, None);
        assert!(report.render_text().contains("  swift key: disabled\n"));
    }
}
