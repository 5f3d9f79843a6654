use gridcfg_core::Database;
use thiserror::Error;

/// Result type for emitter operations.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors raised by the [`Emitter`](super::Emitter) and its registries.
///
/// All of them are local to one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// `close_block` was called with no open block.
    #[error("cannot close block: no block is open")]
    UnbalancedBlock,

    /// `begin_speculative` was called while a checkpoint is outstanding.
    #[error("speculative block already open (started at line {started_at})")]
    NestedSpeculative { started_at: usize },

    /// Two fully-qualified names share the same short name.
    #[error("reference conflict: '{short}' already refers to '{existing}', not '{requested}'")]
    ReferenceConflict {
        short: String,
        existing: String,
        requested: String,
    },

    /// One bean id is used for two different databases.
    #[error("data source '{bean_id}' is already defined for {existing}, not {requested}")]
    DataSourceConflict {
        bean_id: String,
        existing: Database,
        requested: Database,
    },
}

impl EmitError {
    /// True for errors caused by inconsistent open/close or begin/rollback
    /// pairing in the calling routine.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            EmitError::UnbalancedBlock | EmitError::NestedSpeculative { .. }
        )
    }
}
