use clap::Args;
use eyre::Result;
use stringcheese_core::FsDir;

use super::{UnwrapOrExit, args::ConfigArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub args: ConfigArgs,
}

impl LocalesCommand {
    /// Run the locales command
    pub fn run(&self) -> Result<()> {
        let config = self.args.build().unwrap_or_exit();

        let report = ops::locales(&config, &FsDir).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
