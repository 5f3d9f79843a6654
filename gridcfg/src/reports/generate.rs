//! Generate command report data structures.

use std::path::PathBuf;

use gridcfg_codegen::PreviewFile;
use gridcfg_core::WriteResult;

use super::output::{Output, Report};

/// Report data from one generation pass.
#[derive(Debug)]
pub struct GenerateReport {
    /// Grid name from the configuration.
    pub cluster_name: String,
    /// Output format name.
    pub format: &'static str,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of a generation pass.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written, or kept because it already existed.
    Written { path: PathBuf, result: WriteResult },
    /// Dry-run preview.
    Preview(PreviewFile),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { path, result } => {
                out.preformatted(&format!("{} ({})", self.cluster_name, self.format));
                let key = match result {
                    WriteResult::Written => "Generated",
                    WriteResult::Skipped => "Kept existing",
                };
                out.key_value(key, &path.display().to_string());
            }
            GenerationResult::Preview(file) => {
                out.divider(&file.path);
                out.preformatted(&file.content);
                out.divider("Summary");
                out.preformatted("1 file would be generated");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_skipped_file() {
        let report = GenerateReport {
            cluster_name: "orders".to_string(),
            format: "xml",
            result: GenerationResult::Written {
                path: PathBuf::from("out/ignite-configuration.xml"),
                result: WriteResult::Skipped,
            },
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "orders (xml)",
                "Kept existing: out/ignite-configuration.xml"
            ]
        );
    }
}
