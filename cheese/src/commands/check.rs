use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, args::ConfigArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: ConfigArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.args.build().unwrap_or_exit();

        let report = ops::check(&config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
