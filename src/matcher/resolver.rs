use smallvec::SmallVec;

use crate::matcher::Params;
use crate::trie::Trie;
use crate::types::NodeId;

/// Resolves cleaned path `segments` to a node, recording captures in `params`.
///
/// `keys` are the same segments as compared against literal children (case
/// folded when the router ignores case); captures always take their text
/// from `segments`. Both slices must have the same length.
///
/// At every level a literal child wins over the dynamic child, which wins
/// over the wildcard child. On a dead end the search climbs towards the root
/// and retries the nearest ancestor whose dynamic or wildcard child is not the
/// branch just abandoned. Only that alternative is tried; combinations of
/// alternatives at several ancestors are not explored.
///
/// Captures made on abandoned branches are discarded, as is everything added
/// to `params` when no node matches. A match does not imply the node has
/// handlers.
#[tracing::instrument(level = "trace", skip_all, fields(segments = segments.len() as u64))]
pub fn find_node(
    trie: &Trie,
    keys: &[&str],
    segments: &[&str],
    params: &mut Params,
) -> Option<NodeId> {
    debug_assert_eq!(keys.len(), segments.len());
    let base = params.len();
    // marks[k]: params.len() before segment k was consumed
    let mut marks: SmallVec<[usize; 8]> = SmallVec::with_capacity(segments.len());
    let mut current = NodeId::ROOT;
    let mut index = 0usize;

    'search: while index < segments.len() {
        let segment = segments[index];
        let node = trie.at(current);
        marks.push(params.len());

        if let Some(next) = node.literal_child(keys[index]) {
            current = next;
            index += 1;
            continue;
        }

        if let Some(next) = node.dynamic_child() {
            params.add(trie.at(next).placeholder(), segment);
            current = next;
            index += 1;
            continue;
        }

        if let Some(next) = node.wildcard_child() {
            params.add(trie.at(next).placeholder(), segments[index..].join("/"));
            return Some(next);
        }

        marks.pop();

        while let Some(parent_id) = trie.at(current).parent() {
            let abandoned = current;
            index -= 1;
            params.truncate(marks[index]);
            marks.truncate(index);

            let parent = trie.at(parent_id);

            if let Some(next) = parent.dynamic_child().filter(|&id| id != abandoned) {
                tracing::trace!(from = %abandoned, to = %next, depth = index, "backtracking into dynamic child");
                marks.push(params.len());
                params.add(trie.at(next).placeholder(), segments[index]);
                current = next;
                index += 1;
                continue 'search;
            }

            if let Some(next) = parent.wildcard_child().filter(|&id| id != abandoned) {
                tracing::trace!(from = %abandoned, to = %next, depth = index, "backtracking into wildcard child");
                params.add(trie.at(next).placeholder(), segments[index..].join("/"));
                return Some(next);
            }

            current = parent_id;
        }

        params.truncate(base);
        return None;
    }

    Some(current)
}
