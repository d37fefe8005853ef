// File: crates/sungraph-core/src/error.rs
// Summary: Error taxonomy for chart builds; all variants are terminal for one call.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// A field failed to parse (or the column was absent). The whole build
    /// aborts rather than skipping the row: a partially loaded dataset would
    /// silently shrink the rendered domain.
    #[error("row {row}: cannot parse {field} from {raw:?}")]
    Parse {
        field: String,
        raw: String,
        row: usize,
    },

    /// No rows to chart; domain extents are undefined.
    #[error("no records to chart")]
    EmptyInput,

    /// Invalid build configuration (group field, palette, plot rect).
    #[error("invalid config: {0}")]
    Config(String),
}

impl ChartError {
    pub(crate) fn parse(field: &str, raw: &str, row: usize) -> Self {
        Self::Parse {
            field: field.to_string(),
            raw: raw.to_string(),
            row,
        }
    }
}
