//! Generate operation - one generation pass and its artifact.

use std::path::Path;

use eyre::{Context, Result};
use gridcfg_codegen::GenerateOptions;
use gridcfg_core::{Artifact, Overwrite};
use gridcfg_model::ClusterConfig;

use crate::{
    language::Format,
    reports::{GenerateReport, GenerationResult},
};

/// Where and how the generated file is written.
pub struct GenerateTarget<'a> {
    /// Output directory for the generated file.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// What to do when the target file exists.
    pub overwrite: Overwrite,
}

/// Execute the generate operation.
///
/// The file is only written once the whole pass has rendered.
pub fn generate(
    config: &ClusterConfig,
    format: Format,
    options: GenerateOptions,
    target: GenerateTarget,
) -> Result<GenerateReport> {
    let generator = format.generator(config, options);

    let result = if target.dry_run {
        let file = generator.preview().wrap_err("Failed to generate configuration")?;
        GenerationResult::Preview(file)
    } else {
        let content = generator
            .render()
            .wrap_err("Failed to generate configuration")?;
        let artifact = Artifact::new(target.output_dir.join(generator.file_name()), content)
            .with_overwrite(target.overwrite);
        let written = artifact.write()?;
        tracing::info!(path = %artifact.path().display(), ?written, "generation finished");
        GenerationResult::Written {
            path: artifact.path().to_path_buf(),
            result: written,
        }
    };

    Ok(GenerateReport {
        cluster_name: config.name.clone(),
        format: generator.format(),
        result,
    })
}
