pub mod error;
pub mod merge;
pub mod normalize;
pub mod range_tree;
mod sweep;
pub mod types;
pub mod validate;

pub use error::CoverageError;
pub use merge::{merge_functions, merge_processes, merge_scripts};
pub use types::{FunctionCov, ProcessCov, RangeCov, ScriptCov};

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
