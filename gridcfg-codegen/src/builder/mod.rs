//! Text emission building blocks.
//!
//! - [`Emitter`] - Ordered line accumulator with block indentation, deferred
//!   blank lines and checkpoint/rollback of speculative output
//! - [`ReferenceRegistry`] - Short-name to fully-qualified-name imports with
//!   conflict detection
//! - [`Indent`] - Indentation configuration
//! - [`EmitError`] - Structural misuse and naming conflicts

mod data_sources;
mod emitter;
mod error;
mod indent;
mod references;

pub use data_sources::{DataSource, DataSourceRegistry};
pub use emitter::Emitter;
pub use error::{EmitError, Result};
pub use indent::Indent;
pub use references::{ConflictPolicy, ImportSyntax, ReferenceRegistry};
