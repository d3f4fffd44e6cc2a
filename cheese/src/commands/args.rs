use std::path::PathBuf;

use clap::Args;
use stringcheese_config::{ConfigBuilder, RawInputs};
use tracing::debug;

/// Options shared by every command that needs a configuration.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Path to a stringcheese.toml providing default options
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to your Android res folder (required)
    #[arg(short, long, value_name = "PATH")]
    pub android: Option<String>,

    /// Path to your iOS project (required if translating to iOS)
    #[arg(short, long, value_name = "PATH")]
    pub ios: Option<String>,

    /// Path to the Dart file to generate (required if translating to Dart)
    #[arg(long, value_name = "FILE")]
    pub dart: Option<String>,

    /// Text put at the top of the generated Dart file
    #[arg(long, value_name = "TEXT")]
    pub dart_header: Option<String>,

    /// Language to use as your default set of strings [default: base]
    #[arg(long, value_name = "TAG")]
    pub lang: Option<String>,

    /// Name of the string XML files in your Android project [default: strings]
    #[arg(long, value_name = "NAME")]
    pub xml_name: Option<String>,

    /// Name of the .strings file generated for iOS [default: Localizable]
    #[arg(long, value_name = "NAME")]
    pub strings_name: Option<String>,

    /// Directory of the generated Swift key file [default: the iOS project]
    #[arg(long, value_name = "PATH")]
    pub swift_key_dir: Option<String>,

    /// Class name of the generated Swift key file [default: StringCheese]
    #[arg(long, value_name = "NAME")]
    pub swift_class: Option<String>,

    /// Do not generate the Swift key file
    #[arg(long)]
    pub no_swift_key: bool,

    /// Do not generate call-site arguments in the Swift API
    #[arg(long)]
    pub no_swift_arguments: bool,

    /// Use static accessors in the Swift API
    #[arg(long)]
    pub swift_static: bool,

    /// Do not report strings missing from a translation
    #[arg(long)]
    pub quiet_missing: bool,

    /// Reduce generated keys to the shortest unique form
    #[arg(long)]
    pub reduce_keys: bool,
}

impl ConfigArgs {
    /// Raw inputs given on the command line alone.
    ///
    /// Switches that were not passed stay absent so a config file value or
    /// the default still applies.
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            android: self.android.clone(),
            ios: self.ios.clone(),
            dart: self.dart.clone(),
            dart_header: self.dart_header.clone(),
            lang: self.lang.clone(),
            xml_name: self.xml_name.clone(),
            strings_name: self.strings_name.clone(),
            swift_key_dir: self.swift_key_dir.clone(),
            swift_class: self.swift_class.clone(),
            swift_key: self.no_swift_key.then_some(false),
            swift_arguments: self.no_swift_arguments.then_some(false),
            swift_static: self.swift_static.then_some(true),
            log_missing_strings: self.quiet_missing.then_some(false),
            reduce_keys: self.reduce_keys.then_some(true),
        }
    }

    /// Load the config file, if any, and layer the command line on top.
    pub fn load(&self) -> stringcheese_config::Result<RawInputs> {
        let base = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "reading config file");
                RawInputs::from_file(path)?
            }
            None => RawInputs::default(),
        };
        Ok(base.merge(self.raw_inputs()))
    }

    /// Load and validate the configuration.
    pub fn build(&self) -> stringcheese_config::Result<stringcheese_config::Config> {
        ConfigBuilder::new().build(self.load()?)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ConfigArgs,
    }

    fn parse(argv: &[&str]) -> ConfigArgs {
        TestCli::try_parse_from(std::iter::once("stringcheese").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-a", "app/res", "-i", "ios/App"]);
        let raw = args.raw_inputs();

        assert_eq!(raw.android.as_deref(), Some("app/res"));
        assert_eq!(raw.ios.as_deref(), Some("ios/App"));
    }

    #[test]
    fn test_unset_switches_stay_absent() {
        let raw = parse(&["-a", "res"]).raw_inputs();

        assert_eq!(raw.swift_key, None);
        assert_eq!(raw.swift_arguments, None);
        assert_eq!(raw.swift_static, None);
        assert_eq!(raw.log_missing_strings, None);
        assert_eq!(raw.reduce_keys, None);
    }

    #[test]
    fn test_switches() {
        let raw = parse(&[
            "--no-swift-key",
            "--no-swift-arguments",
            "--swift-static",
            "--quiet-missing",
            "--reduce-keys",
        ])
        .raw_inputs();

        assert_eq!(raw.swift_key, Some(false));
        assert_eq!(raw.swift_arguments, Some(false));
        assert_eq!(raw.swift_static, Some(true));
        assert_eq!(raw.log_missing_strings, Some(false));
        assert_eq!(raw.reduce_keys, Some(true));
    }

    #[test]
    fn test_dart_and_header() {
        let args = parse(&["--dart", "lib/strings.dart", "--dart-header", "part of core;"]);
        let raw = args.raw_inputs();
        assert_eq!(raw.dart.as_deref(), Some("lib/strings.dart"));
        assert_eq!(raw.dart_header.as_deref(), Some("part of core;"));
    }

    #[test]
    fn test_build_without_config_file() {
        let config = parse(&["-a", "res", "-i", "ios", "--lang", "fr"])
            .build()
            .unwrap();

        assert!(config.targets_ios());
        assert_eq!(config.root_language().as_tag(), Some("fr"));
    }

    #[test]
    fn test_config_file_is_overridden_by_flags() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("stringcheese.toml");
        std::fs::write(&file, "android = \"file/res\"\nios = \"file/ios\"\n").unwrap();
        let file = file.display().to_string();

        let raw = parse(&["-c", file.as_str(), "-i", "cli/ios"]).load().unwrap();

        assert_eq!(raw.android.as_deref(), Some("file/res"));
        assert_eq!(raw.ios.as_deref(), Some("cli/ios"));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let err = parse(&["-c", "/does/not/exist/stringcheese.toml"])
            .load()
            .unwrap_err();
        assert!(matches!(*err, stringcheese_config::Error::Io { .. }));
    }

    #[test]
    fn test_build_reports_missing_android() {
        let err = parse(&["-i", "ios"]).build().unwrap_err();
        assert!(err.is_missing_input());
    }
}
