use std::collections::BTreeMap;

use crate::range_tree::RangeTree;

/// One fragment contributed by a source forest, tagged with which source
/// (by index into the list of forests being merged) it came from.
type TaggedTree = (usize, RangeTree);

/// Merges `n` forests of sibling `RangeTree`s — the children of `n` parent
/// nodes known to share the same `[start, end)` — into one normalized-order
/// (but not yet normalize()'d) sibling list. This is the sweep-line core of
/// the merge algorithm: see the module-level walkthrough in `merge.rs`.
pub fn merge_range_tree_children(children_sources: Vec<Vec<RangeTree>>) -> Vec<RangeTree> {
    let source_count = children_sources.len();
    let mut events: BTreeMap<u32, Vec<TaggedTree>> = BTreeMap::new();
    for (source_index, children) in children_sources.into_iter().enumerate() {
        for child in children {
            events.entry(child.start).or_default().push((source_index, child));
        }
    }

    let mut pending: Option<(u32, Vec<TaggedTree>)> = None;
    let mut open_range: Option<(u32, u32)> = None;
    let mut parent_to_nested: Vec<Vec<RangeTree>> = vec![Vec::new(); source_count];
    let mut output: Vec<RangeTree> = Vec::new();

    while let Some((offset, trees)) = pop_next_event(&mut events, &mut pending) {
        if let Some((open_start, open_end)) = open_range {
            if open_end <= offset {
                output.push(next_child(open_start, open_end, &mut parent_to_nested));
                open_range = None;
            }
        }

        match open_range {
            None => {
                let mut slot_end = offset + 1;
                for (_, tree) in &trees {
                    slot_end = slot_end.max(tree.end);
                }
                for (source_index, tree) in trees {
                    parent_to_nested[source_index].push(tree);
                }
                open_range = Some((offset, slot_end));
            }
            Some((_, open_end)) => {
                let mut split_off: Vec<TaggedTree> = Vec::new();
                for (source_index, mut tree) in trees {
                    if tree.end > open_end {
                        let right = tree.split(open_end);
                        split_off.push((source_index, right));
                    }
                    parent_to_nested[source_index].push(tree);
                }
                push_pending(&mut pending, open_end, split_off);
            }
        }
    }

    if let Some((open_start, open_end)) = open_range {
        output.push(next_child(open_start, open_end, &mut parent_to_nested));
    }

    output
}

/// Pops the next event, splicing in any still-pending split fragments at the
/// right moment. Pending fragments all share one offset (the currently open
/// slot's end), so a single `Option` slot is enough — no priority queue
/// needed for more than one pending offset at a time.
fn pop_next_event(
    events: &mut BTreeMap<u32, Vec<TaggedTree>>,
    pending: &mut Option<(u32, Vec<TaggedTree>)>,
) -> Option<(u32, Vec<TaggedTree>)> {
    let next_scheduled = events.keys().next().copied();
    match (pending.take(), next_scheduled) {
        (None, None) => None,
        (None, Some(_)) => events.pop_first(),
        (Some(pending_entry), None) => Some(pending_entry),
        (Some(pending_entry), Some(next_offset)) => {
            if pending_entry.0 < next_offset {
                Some(pending_entry)
            } else if pending_entry.0 == next_offset {
                let (offset, mut trees) = events.pop_first().expect("checked Some above");
                trees.extend(pending_entry.1);
                Some((offset, trees))
            } else {
                let next = events.pop_first();
                *pending = Some(pending_entry);
                next
            }
        }
    }
}

fn push_pending(
    pending: &mut Option<(u32, Vec<TaggedTree>)>,
    offset: u32,
    mut new_items: Vec<TaggedTree>,
) {
    if new_items.is_empty() {
        return;
    }
    match pending {
        Some((existing_offset, items)) if *existing_offset == offset => {
            items.append(&mut new_items);
        }
        _ => {
            *pending = Some((offset, new_items));
        }
    }
}

/// Closes an open slot `[start, end)`: for each source that contributed
/// anything, collapse its nested fragments into one tree spanning exactly
/// `[start, end)`, then merge those per-source trees into a single node.
fn next_child(start: u32, end: u32, parent_to_nested: &mut [Vec<RangeTree>]) -> RangeTree {
    let mut per_source = Vec::new();
    for nested in parent_to_nested.iter_mut() {
        let nested = std::mem::take(nested);
        if nested.is_empty() {
            continue;
        }
        if nested.len() == 1 && nested[0].start == start && nested[0].end == end {
            per_source.push(nested.into_iter().next().expect("len checked above"));
        } else {
            per_source.push(RangeTree::wrapper(start, end, nested));
        }
    }
    crate::merge::merge_range_trees(per_source)
}
