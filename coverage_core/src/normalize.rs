use crate::range_tree::RangeTree;
use crate::types::{FunctionCov, ProcessCov, ScriptCov};

/// Canonicalizes a merged `RangeTree` in place (post-order): fuses adjacent
/// siblings with equal effective count, collapses a child whose single
/// grandchild spans it exactly with no count change, and prunes a childless
/// zero-delta leaf.
pub fn normalize_range_tree(tree: RangeTree) -> RangeTree {
    normalize_node(tree, 0)
}

fn normalize_node(mut node: RangeTree, parent_effective: i64) -> RangeTree {
    let node_effective = parent_effective + node.delta;
    let children = std::mem::take(&mut node.children);

    let normalized_children = children
        .into_iter()
        .map(|child| normalize_node(child, node_effective))
        .collect::<Vec<_>>();
    let fused = fuse_adjacent_equal_count(normalized_children, node_effective);
    node.children = fused.into_iter().filter_map(collapse_or_prune).collect();

    debug_assert!(
        node.children.windows(2).all(|w| w[0].end <= w[1].start),
        "normalized children must stay disjoint and start-ascending"
    );
    node
}

fn fuse_adjacent_equal_count(children: Vec<RangeTree>, parent_effective: i64) -> Vec<RangeTree> {
    let mut out: Vec<RangeTree> = Vec::with_capacity(children.len());
    for child in children {
        let child_effective = parent_effective + child.delta;
        if let Some(last) = out.last_mut() {
            let last_effective = parent_effective + last.delta;
            if last.end == child.start && last_effective == child_effective {
                last.end = child.end;
                last.children.extend(child.children);
                continue;
            }
        }
        out.push(child);
    }
    out
}

/// A child with exactly one grandchild that spans it fully and carries zero
/// additional delta is indistinguishable from that grandchild — replace the
/// child with it. Afterwards, drop a childless zero-delta leaf: it
/// contributes nothing beyond its parent's own count.
fn collapse_or_prune(mut child: RangeTree) -> Option<RangeTree> {
    while child.children.len() == 1 {
        let collapses = {
            let grandchild = &child.children[0];
            grandchild.start == child.start && grandchild.end == child.end && grandchild.delta == 0
        };
        if !collapses {
            break;
        }
        let grandchild = child.children.remove(0);
        child.children = grandchild.children;
    }

    if child.children.is_empty() && child.delta == 0 {
        return None;
    }
    Some(child)
}

/// Rebuilds a function's ranges through a `RangeTree` round-trip so that
/// even an already-merged or singleton `FunctionCov` ends up in canonical
/// shape. Does not touch `is_block_coverage` — that flag is set by
/// `merge_functions`'s own conflict-aware recomputation, not by
/// normalization.
pub fn normalize_function(function: FunctionCov) -> FunctionCov {
    let tree = RangeTree::from_sorted_ranges(&function.ranges);
    let normalized = normalize_range_tree(tree);
    FunctionCov {
        function_name: function.function_name,
        ranges: normalized.to_ranges(),
        is_block_coverage: function.is_block_coverage,
    }
}

/// Deep-normalizes a script: rebuilds every function's tree, then sorts
/// functions by root `startOffset`.
pub fn normalize_script(script: ScriptCov) -> ScriptCov {
    let mut functions = script
        .functions
        .into_iter()
        .map(normalize_function)
        .collect::<Vec<_>>();
    functions.sort_by_key(|function| function.root().start_offset);
    ScriptCov {
        script_id: script.script_id,
        url: script.url,
        functions,
    }
}

/// Deep-normalizes a process: normalizes every script, then sorts by `url`.
pub fn normalize_process(process: ProcessCov) -> ProcessCov {
    let mut result = process.result.into_iter().map(normalize_script).collect::<Vec<_>>();
    result.sort_by(|a, b| a.url.cmp(&b.url));
    ProcessCov { result }
}
