//! Check command report data structures.

use std::path::PathBuf;

use stringcheese_config::{DartTarget, Flags};

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    pub android_res: PathBuf,
    pub ios_root: Option<PathBuf>,
    pub dart: Option<DartTarget>,
    /// Root language as shown to the user, e.g. "base (en)".
    pub root_language: String,
    pub xml_file: String,
    pub strings_file: String,
    /// Swift key file path, `None` when it will not be generated.
    pub swift_key: Option<PathBuf>,
    pub flags: Flags,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted("✓ configuration is valid");
        out.newline();

        out.section("Source");
        out.key_value_indented("android", &self.android_res.display().to_string());

        out.section("Targets");
        if let Some(ios) = &self.ios_root {
            out.key_value_indented("ios", &ios.display().to_string());
        }
        if let Some(dart) = &self.dart {
            out.key_value_indented(
                "dart",
                &format!("{} ({:?})", dart.path.display(), dart.header),
            );
        }

        out.section("Files");
        out.key_value_indented("xml", &self.xml_file);
        if self.ios_root.is_some() {
            out.key_value_indented("strings", &self.strings_file);
            let swift_key = match &self.swift_key {
                Some(path) => path.display().to_string(),
                None => "disabled".to_string(),
            };
            out.key_value_indented("swift key", &swift_key);
        }

        out.section("Options");
        out.key_value_indented("root language", &self.root_language);
        out.key_value_indented("swift arguments", yes_no(self.flags.swift_arguments));
        out.key_value_indented("swift static", yes_no(self.flags.swift_static));
        out.key_value_indented("log missing strings", yes_no(self.flags.log_missing_strings));
        out.key_value_indented("reduce keys", yes_no(self.flags.reduce_keys));
    }
}
