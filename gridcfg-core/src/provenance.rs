//! Provenance comment placed at the top of every generated artifact.

use chrono::{Local, NaiveDateTime};

/// `MM/DD/YYYY HH:MM`, 24-hour clock, zero-padded.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Format a generation timestamp for the provenance comment.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Who generated an artifact and when.
///
/// The timestamp is captured once per generation pass so that every file
/// produced by that pass carries the same value.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use gridcfg_core::Provenance;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 7)
///     .unwrap()
///     .and_hms_opt(9, 5, 0)
///     .unwrap();
/// let provenance = Provenance::new("gridcfg", at);
///
/// assert_eq!(
///     provenance.comment(),
///     "This configuration was generated by gridcfg (03/07/2024 09:05)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    tool: String,
    generated_at: NaiveDateTime,
}

impl Provenance {
    /// Create a provenance record for an explicit point in time.
    pub fn new(tool: impl Into<String>, generated_at: NaiveDateTime) -> Self {
        Self {
            tool: tool.into(),
            generated_at,
        }
    }

    /// Create a provenance record stamped with the local wall-clock time.
    pub fn now(tool: impl Into<String>) -> Self {
        Self::new(tool, Local::now().naive_local())
    }

    /// Name of the generating tool.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Time the generation pass started.
    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// The human-readable provenance sentence, without comment delimiters.
    pub fn comment(&self) -> String {
        format!(
            "This configuration was generated by {} ({})",
            self.tool,
            format_timestamp(&self.generated_at)
        )
    }
}
