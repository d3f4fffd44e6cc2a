//! Validation and defaulting of raw inputs into a [`Config`].

use std::path::PathBuf;

use chrono::{DateTime, Local};
use stringcheese_core::{LanguageId, non_blank};
use tracing::{debug, info, warn};

use crate::{
    Defaults, Error, RawInputs, Result,
    config::{Config, DartTarget, Flags},
};

const ANDROID_EXAMPLE: &str =
    "Ex: stringcheese check -a /Users/me/workspace/androidApp/app/src/main/res -i ios/App";
const TARGET_EXAMPLE: &str =
    "Ex: stringcheese check -a app/src/main/res -i /Users/me/workspace/iOSApp/iOSApp";

/// Builds a [`Config`] from [`RawInputs`].
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. the Android `res` path is present;
/// 2. at least one target is complete (iOS root, or Dart path and header);
/// 3. a Dart path is never given without its header, or the reverse.
///
/// Everything else that is absent is filled from the [`Defaults`] table.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    defaults: Defaults,
}

impl ConfigBuilder {
    /// Builder using the stock [`Defaults`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder using a custom defaults table.
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Validate `raw` and stamp the result with the current local time.
    pub fn build(&self, raw: RawInputs) -> Result<Config> {
        self.build_at(raw, Local::now())
    }

    /// Validate `raw` and stamp the result with `generated_at`.
    pub fn build_at(&self, raw: RawInputs, generated_at: DateTime<Local>) -> Result<Config> {
        let android_res = non_blank(raw.android).ok_or_else(|| {
            Error::missing_input(
                "path to your Android res folder (--android)",
                ANDROID_EXAMPLE,
            )
        })?;

        let ios_root = non_blank(raw.ios).map(PathBuf::from);
        let dart_path = non_blank(raw.dart);
        let dart_header = non_blank(raw.dart_header);

        let dart = match (dart_path, dart_header) {
            (Some(path), Some(header)) => Some(DartTarget {
                path: PathBuf::from(path),
                header,
            }),
            (path, header) => {
                if ios_root.is_none() {
                    return Err(Error::missing_input(
                        "path to an iOS project (--ios) or a Dart file (--dart with --dart-header)",
                        TARGET_EXAMPLE,
                    ));
                }
                if path.is_some() {
                    return Err(Error::incomplete_target("--dart", "--dart-header"));
                }
                if header.is_some() {
                    return Err(Error::incomplete_target("--dart-header", "--dart"));
                }
                None
            }
        };

        let root_language = match non_blank(raw.lang) {
            Some(tag) => LanguageId::tag(tag.trim()),
            None => {
                debug!(language = %self.defaults.root_language, "using default root language");
                self.defaults.root_language.clone()
            }
        };

        let xml_name = self.or_default("xml_name", raw.xml_name, &self.defaults.xml_name);
        let strings_name =
            self.or_default("strings_name", raw.strings_name, &self.defaults.strings_name);
        let swift_class =
            self.or_default("swift_class", raw.swift_class, &self.defaults.swift_class);

        // The key file lives next to the iOS project unless told otherwise.
        let swift_key_dir = match (&ios_root, non_blank(raw.swift_key_dir)) {
            (Some(_), Some(dir)) => Some(PathBuf::from(dir)),
            (Some(root), None) => {
                debug!(swift_key_dir = %root.display(), "using iOS root for the Swift key file");
                Some(root.clone())
            }
            (None, Some(dir)) => {
                warn!(swift_key_dir = %dir, "ignoring Swift key directory without an iOS target");
                None
            }
            (None, None) => None,
        };

        let flags = Flags {
            swift_key: raw.swift_key.unwrap_or(self.defaults.swift_key),
            swift_arguments: raw.swift_arguments.unwrap_or(self.defaults.swift_arguments),
            swift_static: raw.swift_static.unwrap_or(self.defaults.swift_static),
            log_missing_strings: raw
                .log_missing_strings
                .unwrap_or(self.defaults.log_missing_strings),
            reduce_keys: raw.reduce_keys.unwrap_or(self.defaults.reduce_keys),
        };

        let config = Config {
            generated_at,
            android_res: PathBuf::from(android_res),
            ios_root,
            dart,
            root_language,
            base_language_name: self.defaults.base_language_name.clone(),
            xml_name,
            strings_name,
            swift_key_dir,
            swift_class,
            flags,
        };

        info!(
            android = %config.android_res.display(),
            ios = config.targets_ios(),
            dart = config.targets_dart(),
            "configuration built"
        );

        Ok(config)
    }

    fn or_default(&self, option: &str, value: Option<String>, default: &str) -> String {
        non_blank(value).unwrap_or_else(|| {
            debug!(option, default, "using default value");
            default.to_string()
        })
    }
}
