use crate::enums::RouteMethod;
use crate::pattern::{ParsedPattern, SegmentKind, SegmentPattern};
use crate::trie::{Node, Trie};
use crate::types::{Handler, Middleware, NodeId, compose};

impl Trie {
    /// Registers `handler` for `method` at the node addressed by `pattern`,
    /// creating missing nodes on the way.
    ///
    /// `middlewares` are appended to the node's chain before the handler is
    /// wrapped, so they apply to this handler and every later registration on
    /// the same node, never to earlier ones. An existing handler for the same
    /// method is replaced.
    pub fn insert<I>(
        &mut self,
        pattern: &ParsedPattern,
        method: RouteMethod,
        handler: Handler,
        middlewares: I,
        warn_on_overwrite: bool,
    ) -> NodeId
    where
        I: IntoIterator<Item = Middleware>,
    {
        let target = self.grow(pattern.segments(), warn_on_overwrite);
        let node = self.at_mut(target);

        node.middleware.extend(middlewares);
        let wrapped = compose(handler, &node.middleware);

        if node.handlers[method.slot()].replace(wrapped).is_some() && warn_on_overwrite {
            tracing::warn!(
                pattern = pattern.normalized(),
                method = %method,
                node = %target,
                "route handler overwritten by a later registration"
            );
        }

        tracing::debug!(
            pattern = pattern.normalized(),
            method = %method,
            node = %target,
            middleware = node.middleware.len(),
            "route registered"
        );

        target
    }

    pub(crate) fn grow(&mut self, segments: &[SegmentPattern], warn_on_overwrite: bool) -> NodeId {
        let mut current = NodeId::ROOT;

        for segment in segments {
            current = match self.at(current).literal_child(segment.key()) {
                Some(existing) => existing,
                None => self.add_child(current, segment, warn_on_overwrite),
            };
        }

        current
    }

    fn add_child(
        &mut self,
        parent_id: NodeId,
        segment: &SegmentPattern,
        warn_on_overwrite: bool,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::child_of(parent_id, segment));

        let parent = self.at_mut(parent_id);
        parent.children.insert(segment.key().into(), id);

        let slot = match segment.kind() {
            SegmentKind::Literal => return id,
            SegmentKind::Dynamic => &mut parent.dynamic_child,
            SegmentKind::Wildcard => &mut parent.wildcard_child,
        };

        if let Some(previous) = slot.replace(id)
            && warn_on_overwrite
        {
            tracing::warn!(
                parent = %parent_id,
                previous = %previous,
                pattern = segment.raw(),
                "parameter child replaced; the previous one now matches only its literal text"
            );
        }

        id
    }
}
