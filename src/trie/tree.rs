use crate::registry::NamedRoutes;
use crate::trie::Node;
use crate::types::NodeId;

/// Arena-backed segment trie. `nodes[0]` is the root and every other node is
/// reachable from it through exactly one parent.
#[derive(Debug)]
pub struct Trie {
    pub(crate) nodes: Vec<Node>,
    pub(crate) named: NamedRoutes,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            named: NamedRoutes::default(),
        }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        self.at(NodeId::ROOT)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn named_routes(&self) -> &NamedRoutes {
        &self.named
    }

    // ids are only minted by this arena, so indexing cannot go out of bounds
    #[inline(always)]
    pub(crate) fn at(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline(always)]
    pub(crate) fn at_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Ancestors of `id` from the node itself up to, but excluding, the root.
    /// Empty when `id` is not part of this trie.
    pub fn lineage(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let start = Some(id).filter(|id| self.contains(*id));
        std::iter::successors(start, |current| self.at(*current).parent)
            .take_while(|current| *current != NodeId::ROOT)
    }
}
