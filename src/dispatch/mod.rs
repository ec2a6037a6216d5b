mod context;
mod error;
mod invoke;

pub use context::{Context, Response};
pub use error::HttpError;
pub use invoke::invoke;
