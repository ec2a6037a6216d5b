use std::fmt;

use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::enums::{HttpMethod, METHOD_SLOT_COUNT, RouteMethod};
use crate::pattern::{SegmentKind, SegmentPattern};
use crate::types::{Handler, Middleware, NodeId};

pub(crate) type ChildMap = FastHashMap<Box<str>, NodeId>;

/// One segment of the route tree.
///
/// Nodes are owned by the [`Trie`](super::Trie) arena; `parent` is only an
/// index back into it.
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    // literal key -> child; parameter children are also indexed by their raw text
    pub(crate) children: ChildMap,
    pub(crate) dynamic_child: Option<NodeId>,
    pub(crate) wildcard_child: Option<NodeId>,
    pub(crate) pattern: Box<str>,
    pub(crate) placeholder: Box<str>,
    pub(crate) kind: SegmentKind,
    pub(crate) handlers: [Option<Handler>; METHOD_SLOT_COUNT],
    pub(crate) middleware: SmallVec<[Middleware; 2]>,
    pub(crate) name: Option<Box<str>>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            parent: None,
            children: ChildMap::new(),
            dynamic_child: None,
            wildcard_child: None,
            pattern: "".into(),
            placeholder: "".into(),
            kind: SegmentKind::Literal,
            handlers: Default::default(),
            middleware: SmallVec::new(),
            name: None,
        }
    }

    pub(crate) fn child_of(parent: NodeId, segment: &SegmentPattern) -> Self {
        Self {
            parent: Some(parent),
            pattern: segment.raw().into(),
            placeholder: segment.placeholder().into(),
            kind: segment.kind(),
            ..Self::root()
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[inline]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn literal_child(&self, key: &str) -> Option<NodeId> {
        self.children.get(key).copied()
    }

    #[inline]
    pub fn dynamic_child(&self) -> Option<NodeId> {
        self.dynamic_child
    }

    #[inline]
    pub fn wildcard_child(&self) -> Option<NodeId> {
        self.wildcard_child
    }

    pub fn has_dynamic_child(&self) -> bool {
        self.dynamic_child.is_some()
    }

    pub fn has_wildcard_child(&self) -> bool {
        self.wildcard_child.is_some()
    }

    /// Handler stored under exactly `method`, without the catch-all fallback.
    pub fn handler(&self, method: RouteMethod) -> Option<&Handler> {
        self.handlers[method.slot()].as_ref()
    }

    /// Handler for a request: the exact method first, then the catch-all.
    pub fn resolve_handler(&self, method: HttpMethod) -> Option<&Handler> {
        self.handler(RouteMethod::Only(method))
            .or_else(|| self.handler(RouteMethod::Any))
    }

    pub fn has_handlers(&self) -> bool {
        self.handlers.iter().any(Option::is_some)
    }

    pub fn middleware_len(&self) -> usize {
        self.middleware.len()
    }

    fn registered_methods(&self) -> SmallVec<[RouteMethod; METHOD_SLOT_COUNT]> {
        HttpMethod::ALL
            .into_iter()
            .map(RouteMethod::Only)
            .chain(std::iter::once(RouteMethod::Any))
            .filter(|method| self.handlers[method.slot()].is_some())
            .collect()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("parent", &self.parent)
            .field("pattern", &self.pattern)
            .field("placeholder", &self.placeholder)
            .field("kind", &self.kind)
            .field("children", &self.children.len())
            .field("dynamic_child", &self.dynamic_child)
            .field("wildcard_child", &self.wildcard_child)
            .field("methods", &self.registered_methods())
            .field("middleware", &self.middleware.len())
            .field("name", &self.name)
            .finish()
    }
}
