use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gridcfg_model::ClusterConfig;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the configuration (defaults to ./gridcfg.toml)
    #[arg(short, long, default_value = "gridcfg.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = ClusterConfig::from_file(&self.config).unwrap_or_exit();

        let report = ops::check(&config, &self.config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
