use std::fmt;
use std::sync::Arc;

use crate::dispatch::Context;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), BoxError>;

pub type Handler = Arc<dyn Fn(&mut Context) -> HandlerResult + Send + Sync + 'static>;
pub type Middleware = Arc<dyn Fn(Handler) -> Handler + Send + Sync + 'static>;

/// Index of a node inside the trie arena. The root is always `NodeId(0)`.
///
/// Ids carry no router identity: they are only meaningful for the router
/// that returned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn middleware<F>(f: F) -> Middleware
where
    F: Fn(Handler) -> Handler + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wraps `base` so that `chain[0]` is the outermost layer.
pub(crate) fn compose(base: Handler, chain: &[Middleware]) -> Handler {
    chain.iter().rev().fold(base, |next, layer| layer(next))
}
