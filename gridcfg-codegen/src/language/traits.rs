//! Format-agnostic generation traits.

use eyre::Result;

/// Trait for configuration generators.
///
/// A generator renders one configuration into a single document. A failed
/// pass returns an error and no text.
pub trait ConfigCodegen {
    /// Format identifier (e.g., "xml", "java")
    fn format(&self) -> &'static str;

    /// File name of the generated document, relative to the output directory
    fn file_name(&self) -> String;

    /// Render the complete document
    fn render(&self) -> Result<String>;

    /// Preview the generated file without writing to disk
    fn preview(&self) -> Result<PreviewFile> {
        Ok(PreviewFile {
            path: self.file_name(),
            content: self.render()?,
        })
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
