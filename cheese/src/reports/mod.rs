//! Report data structures for commands.
//!
//! Commands build reports from a validated config, then render them to an
//! Output target.

mod check;
mod locales;
mod output;

pub use check::CheckReport;
pub use locales::{LocaleEntry, LocalesReport};
pub use output::{Report, TerminalOutput};
#[cfg(test)]
pub use output::TextOutputExt;
