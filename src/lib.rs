pub mod dispatch;
pub mod enums;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod registry;
pub mod router;
pub mod trie;
pub mod types;

pub use dispatch::{Context, HttpError, Response};
pub use enums::{HttpMethod, RouteMethod, UnsupportedMethod};
pub use matcher::Params;
pub use router::{
    Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError, RouterResult,
};
pub use types::{BoxError, Handler, HandlerResult, Middleware, NodeId, handler, middleware};
