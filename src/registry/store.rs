use hashbrown::HashMap as FastHashMap;

use crate::types::NodeId;

/// Route names owned by the trie root. Reassigning a name replaces its node.
#[derive(Debug, Default, Clone)]
pub struct NamedRoutes {
    by_name: FastHashMap<Box<str>, NodeId>,
}

impl NamedRoutes {
    pub(crate) fn assign(&mut self, name: &str, node: NodeId) -> Option<NodeId> {
        self.by_name.insert(name.into(), node)
    }

    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.by_name.iter().map(|(name, id)| (name.as_ref(), *id))
    }
}

impl crate::trie::Trie {
    /// Labels `node` with `name`. Returns the node previously holding the
    /// name, if any. `node` must belong to this trie.
    pub(crate) fn assign_name(&mut self, node: NodeId, name: &str) -> Option<NodeId> {
        self.at_mut(node).name = Some(name.into());
        self.named.assign(name, node)
    }
}
