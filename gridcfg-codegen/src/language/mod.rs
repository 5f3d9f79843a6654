//! Generator abstractions.
//!
//! - [`ConfigCodegen`] - Trait implemented by each output format
//! - [`GenerateOptions`] - Per-pass settings shared by all generators
//! - [`PreviewFile`] - Generated file preview

mod options;
mod traits;

pub use options::{DEFAULT_CLASS_NAME, GenerateOptions};
pub use traits::{ConfigCodegen, PreviewFile};
