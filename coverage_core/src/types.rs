use serde::{Deserialize, Serialize};

/// A half-open byte range `[start_offset, end_offset)` paired with an
/// execution count. Offsets are opaque; the merge driver never interprets
/// the source text they index into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RangeCov {
    #[serde(rename = "startOffset")]
    pub start_offset: u32,
    #[serde(rename = "endOffset")]
    pub end_offset: u32,
    pub count: u32,
}

impl RangeCov {
    pub fn new(start_offset: u32, end_offset: u32, count: u32) -> Self {
        Self {
            start_offset,
            end_offset,
            count,
        }
    }

    pub fn width(&self) -> u32 {
        self.end_offset - self.start_offset
    }
}

/// Coverage for a single function: its root range (`ranges[0]`) plus every
/// nested range recorded at block granularity, or just the root when
/// `is_block_coverage` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCov {
    #[serde(rename = "functionName")]
    pub function_name: String,
    pub ranges: Vec<RangeCov>,
    #[serde(rename = "isBlockCoverage")]
    pub is_block_coverage: bool,
}

impl FunctionCov {
    /// The function's root range. Callers are required by contract to keep
    /// `ranges` non-empty; this panics instead of returning an `Option` to
    /// keep call sites terse, matching the core's "malformed input is
    /// undefined behavior" contract (see `coverage_core::validate` for a
    /// checked alternative).
    pub fn root(&self) -> &RangeCov {
        &self.ranges[0]
    }
}

/// Coverage for a single script: every function whose source lives at `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptCov {
    #[serde(rename = "scriptId")]
    pub script_id: String,
    pub url: String,
    pub functions: Vec<FunctionCov>,
}

/// Coverage for one process's worth of scripts, the top-level value produced
/// by V8's `Profiler.takePreciseCoverage` and the shape this crate reads and
/// writes as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessCov {
    pub result: Vec<ScriptCov>,
}
