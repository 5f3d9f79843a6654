use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gridcfg_codegen::{ConflictPolicy, GenerateOptions};
use gridcfg_core::Overwrite;
use gridcfg_model::ClusterConfig;

use super::UnwrapOrExit;
use crate::{
    language::Format,
    ops::{self, GenerateTarget},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the configuration (defaults to ./gridcfg.toml)
    #[arg(short, long, default_value = "gridcfg.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Xml)]
    pub format: Format,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Fail when two referenced classes share a short name instead of
    /// writing the second one in full
    #[arg(long)]
    pub strict_imports: bool,

    /// Name of the generated Java factory class
    #[arg(long)]
    pub class_name: Option<String>,

    /// Package of the generated Java factory class
    #[arg(long)]
    pub package: Option<String>,

    /// Keep an existing output file instead of replacing it
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = ClusterConfig::from_file(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &config,
            self.format,
            self.options(),
            GenerateTarget {
                output_dir: &self.output,
                dry_run: self.dry_run,
                overwrite: if self.keep_existing {
                    Overwrite::IfMissing
                } else {
                    Overwrite::Always
                },
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn options(&self) -> GenerateOptions {
        let mut options = GenerateOptions::default();
        if self.strict_imports {
            options = options.with_conflict_policy(ConflictPolicy::Fail);
        }
        if let Some(class_name) = &self.class_name {
            options = options.with_class_name(class_name);
        }
        if let Some(package) = &self.package {
            options = options.with_package(package);
        }
        options
    }
}
