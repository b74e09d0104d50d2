use coverage_core::{merge_functions, merge_processes, merge_scripts, FunctionCov, ProcessCov, RangeCov, ScriptCov};

fn function(name: &str, block: bool, ranges: Vec<RangeCov>) -> FunctionCov {
    FunctionCov {
        function_name: name.to_string(),
        ranges,
        is_block_coverage: block,
    }
}

fn script(id: &str, url: &str, functions: Vec<FunctionCov>) -> ScriptCov {
    ScriptCov {
        script_id: id.to_string(),
        url: url.to_string(),
        functions,
    }
}

#[test]
fn empty_merge_yields_empty_process() {
    assert_eq!(merge_processes(vec![]), ProcessCov::default());
}

#[test]
fn singleton_script_passes_through_after_normalization() {
    let f = function(
        "f",
        true,
        vec![RangeCov::new(0, 9, 1), RangeCov::new(3, 6, 2)],
    );
    let s = script("1", "file:///a.js", vec![f.clone()]);
    let merged = merge_scripts(vec![s]).unwrap();
    assert_eq!(merged.functions, vec![f]);
}

#[test]
fn two_scripts_different_urls_stay_separate_and_sorted() {
    let a = script("1", "file:///b.js", vec![function("f", false, vec![RangeCov::new(0, 10, 1)])]);
    let b = script("2", "file:///a.js", vec![function("g", false, vec![RangeCov::new(0, 5, 1)])]);
    let merged = merge_processes(vec![ProcessCov { result: vec![a] }, ProcessCov { result: vec![b] }]);
    assert_eq!(merged.result.len(), 2);
    assert_eq!(merged.result[0].url, "file:///a.js");
    assert_eq!(merged.result[1].url, "file:///b.js");
}

#[test]
fn same_root_ranges_sum_deltas_exactly() {
    let a = function(
        "f",
        true,
        vec![RangeCov::new(0, 10, 1), RangeCov::new(2, 4, 3)],
    );
    let b = function(
        "f",
        true,
        vec![RangeCov::new(0, 10, 1), RangeCov::new(2, 4, 5)],
    );
    let merged = merge_functions(vec![a, b]).unwrap();
    assert_eq!(
        merged.ranges,
        vec![RangeCov::new(0, 10, 2), RangeCov::new(2, 4, 8)]
    );
}

/// Two inner ranges from different inputs overlap without either nesting
/// inside the other ([2,6) and [4,8)), forcing the sweep to split [4,8) at
/// the first input's child boundary. Expected effective counts were derived
/// by summing, independently for each sub-interval, whichever range from
/// each input covers it at that point (the "per offset" law exercised
/// exhaustively in `per_offset_count_law_test.rs`), not copied from any
/// external reference output.
#[test]
fn overlapping_inner_ranges_split_at_the_boundary() {
    let a = function(
        "f",
        true,
        vec![RangeCov::new(0, 10, 1), RangeCov::new(2, 6, 3)],
    );
    let b = function(
        "f",
        true,
        vec![RangeCov::new(0, 10, 1), RangeCov::new(4, 8, 5)],
    );
    let merged = merge_functions(vec![a, b]).unwrap();
    assert_eq!(
        merged.ranges,
        vec![
            RangeCov::new(0, 10, 2),
            RangeCov::new(2, 6, 4),
            RangeCov::new(4, 6, 8),
            RangeCov::new(6, 8, 6),
        ]
    );
}

/// The block/function conflict rule is applied by `merge_scripts`'s
/// root-span bucketing, not by `merge_functions` itself, so the conflicting
/// functions here are wrapped in same-`url` scripts.
#[test]
fn block_level_input_wins_over_function_level_input() {
    let function_level = script("1", "file:///a.js", vec![function("f", false, vec![RangeCov::new(0, 10, 4)])]);
    let block_level = script(
        "2",
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
