use crate::error::CoverageError;
use crate::types::{FunctionCov, ProcessCov, RangeCov, ScriptCov};

/// Checks that a function's ranges are well-formed: non-empty, each
/// `start < end`, sorted by `(startOffset asc, endOffset desc)`, and every
/// range after the first properly nests inside some ancestor already on the
/// stack. Mirrors the same stack-based nesting check `RangeTree::build_node`
/// relies on implicitly, but reports the violation instead of assuming it
/// away.
pub fn validate_function(function: &FunctionCov) -> Result<(), CoverageError> {
    let ranges = &function.ranges;
    if ranges.is_empty() {
        return Err(CoverageError::EmptyRanges {
            function_name: function.function_name.clone(),
        });
    }

    let mut stack: Vec<RangeCov> = Vec::new();
    for (index, range) in ranges.iter().enumerate() {
        if range.start_offset >= range.end_offset {
            return Err(CoverageError::InvalidRange {
                start: range.start_offset,
                end: range.end_offset,
            });
        }

        if index > 0 {
            let previous = ranges[index - 1];
            let ordered = range.start_offset > previous.start_offset
                || (range.start_offset == previous.start_offset && range.end_offset <= previous.end_offset);
            if !ordered {
                return Err(CoverageError::UnsortedRanges {
                    function_name: function.function_name.clone(),
                    index,
                });
            }
        }

        while let Some(top) = stack.last() {
            if range.start_offset >= top.end_offset {
                stack.pop();
            } else {
                break;
            }
        }

        if let Some(top) = stack.last() {
            if range.start_offset < top.start_offset || range.end_offset > top.end_offset {
                return Err(CoverageError::RangeNotNested {
                    function_name: function.function_name.clone(),
                    index,
                    start: range.start_offset,
                    end: range.end_offset,
                });
            }
        }
        stack.push(*range);
    }

    Ok(())
}

/// Validates every function in a script.
pub fn validate_script(script: &ScriptCov) -> Result<(), CoverageError> {
    for function in &script.functions {
        validate_function(function)?;
    }
    Ok(())
}

/// Validates every script in a process.
pub fn validate_process(process: &ProcessCov) -> Result<(), CoverageError> {
    for script in &process.result {
        validate_script(script)?;
    }
    Ok(())
}
