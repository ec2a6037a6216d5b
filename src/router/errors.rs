use thiserror::Error;

use crate::pattern::PatternError;
use crate::router::RouterOptionsError;
use crate::types::NodeId;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("route name must not be empty")]
    EmptyRouteName,
    #[error("node {node} does not belong to this router")]
    UnknownNode { node: NodeId },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
