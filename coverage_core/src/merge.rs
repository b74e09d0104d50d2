use indexmap::IndexMap;

use crate::normalize;
use crate::range_tree::RangeTree;
use crate::sweep::merge_range_tree_children;
use crate::types::{FunctionCov, ProcessCov, ScriptCov};

/// A function's root span, used to group same-function `FunctionCov`
/// entries across inputs. A textual `"start;end"` key works too, but this
/// struct key avoids the allocation and formatting cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RootSpan(u32, u32);

/// Merges `n` `RangeTree`s that are known to share the same `[start, end)`.
/// Sums their deltas and recursively merges their children via the sweep in
/// `crate::sweep`.
pub fn merge_range_trees(trees: Vec<RangeTree>) -> RangeTree {
    debug_assert!(!trees.is_empty(), "merge_range_trees requires at least one tree");
    debug_assert!(
        trees
            .iter()
            .all(|t| t.start == trees[0].start && t.end == trees[0].end),
        "merge_range_trees requires all trees to share start/end"
    );
    let start = trees[0].start;
    let end = trees[0].end;
    let delta = trees.iter().fold(0i64, |acc, tree| acc.saturating_add(tree.delta));
    let children_sources = trees.into_iter().map(|tree| tree.children).collect::<Vec<_>>();
    let children = merge_range_tree_children(children_sources);
    RangeTree::new(start, end, delta, children)
}

/// Merges coverage for the same function collected across multiple runs.
/// Returns `None` on empty input. All inputs are assumed to share a root
/// span; callers that cannot guarantee this should bucket with
/// [`merge_scripts`] first or validate with [`crate::validate`].
pub fn merge_functions(mut functions: Vec<FunctionCov>) -> Option<FunctionCov> {
    if functions.is_empty() {
        return None;
    }
    if functions.len() == 1 {
        return Some(normalize::normalize_function(functions.remove(0)));
    }

    let function_name = functions[0].function_name.clone();
    let trees = functions
        .iter()
        .map(|function| RangeTree::from_sorted_ranges(&function.ranges))
        .collect::<Vec<_>>();

    let merged = merge_range_trees(trees);
    let normalized = normalize::normalize_range_tree(merged);
    let ranges = normalized.to_ranges();
    let is_block_coverage = !(ranges.len() == 1 && ranges[0].count == 0);

    Some(FunctionCov {
        function_name,
        ranges,
        is_block_coverage,
    })
}

/// Merges coverage for the same script (by URL) collected across multiple
/// processes. Returns `None` on empty input; `scriptId` of the first input
/// wins when inputs disagree (see the open question recorded in DESIGN.md).
pub fn merge_scripts(mut scripts: Vec<ScriptCov>) -> Option<ScriptCov> {
    if scripts.is_empty() {
        return None;
    }
    if scripts.len() == 1 {
        return Some(normalize::normalize_script(scripts.remove(0)));
    }

    let script_id = scripts[0].script_id.clone();
    let url = scripts[0].url.clone();
    let all_functions = scripts.into_iter().flat_map(|script| script.functions).collect::<Vec<_>>();

    let buckets = bucket_functions_by_root_span(all_functions);
    let functions = buckets
        .into_values()
        .filter_map(merge_functions)
        .collect::<Vec<_>>();

    Some(normalize::normalize_script(ScriptCov {
        script_id,
        url,
        functions,
    }))
}

/// Merges every `ScriptCov` across a set of `ProcessCov`s, grouping by URL.
/// Empty input yields an empty `ProcessCov`, never `None` — a process
/// reporting nothing is a valid (if uninteresting) observation.
pub fn merge_processes(processes: Vec<ProcessCov>) -> ProcessCov {
    let all_scripts = processes.into_iter().flat_map(|process| process.result).collect::<Vec<_>>();
    if all_scripts.is_empty() {
        return ProcessCov::default();
    }

    let mut buckets: IndexMap<String, Vec<ScriptCov>> = IndexMap::new();
    for script in all_scripts {
        buckets.entry(script.url.clone()).or_default().push(script);
    }

    let result = buckets.into_values().filter_map(merge_scripts).collect::<Vec<_>>();
    normalize::normalize_process(ProcessCov { result })
}

/// Buckets functions by root span, applying the block/function conflict
/// rule on insertion: a block-coverage candidate discards an existing
/// function-level bucket outright, and a function-level candidate is
/// dropped once a block-level bucket exists.
fn bucket_functions_by_root_span(functions: Vec<FunctionCov>) -> IndexMap<RootSpan, Vec<FunctionCov>> {
    let mut buckets: IndexMap<RootSpan, Vec<FunctionCov>> = IndexMap::new();
    for function in functions {
        let root = function.root();
        let key = RootSpan(root.start_offset, root.end_offset);
        match buckets.get_mut(&key) {
            None => {
                buckets.insert(key, vec![function]);
            }
            Some(bucket) => {
                let bucket_is_block = bucket[0].is_block_coverage;
                let candidate_is_block = function.is_block_coverage;
                if !bucket_is_block && candidate_is_block {
                    *bucket = vec![function];
                } else if !(bucket_is_block && !candidate_is_block) {
                    bucket.push(function);
                }
            }
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RangeCov;

    fn function(name: &str, block: bool, ranges: Vec<RangeCov>) -> FunctionCov {
        FunctionCov {
            function_name: name.to_string(),
            ranges,
            is_block_coverage: block,
        }
    }

    fn script(url: &str, functions: Vec<FunctionCov>) -> ScriptCov {
        ScriptCov {
            script_id: "0".to_string(),
            url: url.to_string(),
            functions,
        }
    }

    #[test]
    fn merge_functions_empty_is_none() {
        assert_eq!(merge_functions(vec![]), None);
    }

    #[test]
    fn merge_functions_singleton_normalizes() {
        let f = function(
            "f",
            true,
            vec![RangeCov::new(0, 9, 1), RangeCov::new(3, 6, 2)],
        );
        let merged = merge_functions(vec![f.clone()]).unwrap();
        assert_eq!(merged, f);
    }

    /// The block/function conflict rule lives in `bucket_functions_by_root_span`,
    /// not in `merge_functions` itself — `merge_functions` sums whatever
    /// functions it is handed, regardless of `is_block_coverage`. Exercise the
    /// rule through `merge_scripts`, which buckets by root span first.
    #[test]
    fn block_coverage_wins_over_function_coverage() {
        let function_level = script("file:///a.js", vec![function("f", false, vec![RangeCov::new(0, 10, 4)])]);
        let block_level = script(
            "file:///a.js",
            vec![function(
                "f",
                true,
                vec![RangeCov::new(0, 10, 1), RangeCov::new(3, 5, 0)],
            )],
        );
        let merged = merge_scripts(vec![function_level, block_level]).unwrap();
        assert_eq!(merged.functions.len(), 1);
        assert!(merged.functions[0].is_block_coverage);
        assert_eq!(
            merged.functions[0].ranges,
            vec![RangeCov::new(0, 10, 1), RangeCov::new(3, 5, 0)]
        );
    }

    #[test]
    fn merge_scripts_empty_is_none() {
        assert_eq!(merge_scripts(vec![]), None);
    }

    #[test]
    fn merge_processes_empty_is_empty_result() {
        assert_eq!(merge_processes(vec![]), ProcessCov::default());
    }
}
