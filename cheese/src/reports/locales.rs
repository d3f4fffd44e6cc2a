//! Locales command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// One language and where its strings are read from and written to.
#[derive(Debug)]
pub struct LocaleEntry {
    /// Display label, e.g. "en (base)" or "fr".
    pub label: String,
    /// Source file relative to the res folder.
    pub source: String,
    /// `.strings` output relative to the iOS project, if targeting iOS.
    pub output: Option<String>,
}

/// Report data from language discovery.
#[derive(Debug)]
pub struct LocalesReport {
    pub android_res: PathBuf,
    pub ios_root: Option<PathBuf>,
    /// Base language first, then discovered languages in tag order.
    pub entries: Vec<LocaleEntry>,
    /// Configured root language that has no folder in the res tree.
    pub missing_root: Option<String>,
}

impl Report for LocalesReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(tag) = &self.missing_root {
            out.warning(&format!(
                "root language '{}' has no values-{} folder in {}",
                tag,
                tag,
                self.android_res.display()
            ));
        }

        out.preformatted(&format!("Source: {}", self.android_res.display()));
        if let Some(ios) = &self.ios_root {
            out.preformatted(&format!("Output: {}", ios.display()));
        }
        out.newline();

        out.section(&format!("Languages ({})", self.entries.len()));
        for entry in &self.entries {
            let line = match &entry.output {
                Some(output) => format!("{}: {} -> {}", entry.label, entry.source, output),
                None => format!("{}: {}", entry.label, entry.source),
            };
            out.list_item(&line);
        }
    }
}
