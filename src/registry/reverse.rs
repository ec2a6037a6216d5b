use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::matcher::Params;
use crate::path::join_segments;
use crate::trie::Trie;
use crate::types::NodeId;

/// Rebuilds the path leading to `node`.
///
/// Walking from `node` towards the root, each node contributes the first
/// value `values` holds for its placeholder or, without one, its raw
/// pattern. Using a key consumes all of its values, so an ancestor sharing
/// the placeholder falls back to its pattern.
pub fn build_path(trie: &Trie, node: NodeId, values: &Params) -> String {
    let mut pending: FastHashMap<&str, &str> = FastHashMap::new();
    for (name, value) in values.iter() {
        pending.entry(name).or_insert(value);
    }

    let mut reversed: SmallVec<[&str; 8]> = SmallVec::new();
    for id in trie.lineage(node) {
        let current = trie.at(id);
        let supplied = pending.remove(current.placeholder());
        reversed.push(supplied.unwrap_or_else(|| current.pattern()));
    }

    reversed.reverse();
    join_segments(&reversed)
}

impl Trie {
    /// Path for the route registered as `name`, or `None` for unknown names.
    pub fn url_for(&self, name: &str, values: &Params) -> Option<String> {
        let node = self.named.get(name)?;
        Some(build_path(self, node, values))
    }
}
