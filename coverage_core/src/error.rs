use thiserror::Error;

/// Raised by [`crate::validate`] when a coverage value violates one of the
/// invariants the merge driver assumes. The driver itself never raises these;
/// malformed input handed directly to `merge_functions`/`merge_scripts`/
/// `merge_processes` is a contract violation, not a recoverable error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("function `{function_name}` has an empty ranges list")]
    EmptyRanges { function_name: String },

    #[error("range [{start}, {end}) is not well-formed: start must be < end")]
    InvalidRange { start: u32, end: u32 },

    #[error(
        "function `{function_name}` ranges are not sorted by (startOffset asc, endOffset desc) at index {index}"
    )]
    UnsortedRanges { function_name: String, index: usize },

    #[error(
        "function `{function_name}` range [{start}, {end}) at index {index} does not nest inside its parent"
    )]
    RangeNotNested {
        function_name: String,
        index: usize,
        start: u32,
        end: u32,
    },
}
