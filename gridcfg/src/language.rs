//! Output format dispatch.
//!
//! Centralizes format-specific generator creation.

use clap::ValueEnum;
use gridcfg_codegen::{ConfigCodegen, GenerateOptions};
use gridcfg_model::ClusterConfig;

/// Target format of a generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Spring XML bean configuration
    #[default]
    Xml,
    /// Java factory class
    Java,
}

impl Format {
    /// Create a generator for this format.
    pub fn generator<'a>(
        self,
        config: &'a ClusterConfig,
        options: GenerateOptions,
    ) -> Box<dyn ConfigCodegen + 'a> {
        match self {
            Format::Xml => Box::new(gridcfg_xml::Generator::new(config, options)),
            Format::Java => Box::new(gridcfg_java::Generator::new(config, options)),
        }
    }
}
