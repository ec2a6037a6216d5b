use crate::dispatch::{Context, HttpError};
use crate::trie::Node;
use crate::types::BoxError;

/// Runs the handler `node` holds for the request method, falling back to the
/// catch-all handler.
///
/// Returns `false` when neither exists so the caller can answer with its
/// not-found handler. Once a handler ran the result is always `true`; a
/// handler error is rendered into the response here and goes no further.
pub fn invoke(node: &Node, ctx: &mut Context) -> bool {
    let Some(handler) = node.resolve_handler(ctx.method()) else {
        return false;
    };

    if let Err(err) = handler(ctx) {
        render_error(ctx, err);
    }

    true
}

fn render_error(ctx: &mut Context, err: BoxError) {
    let error = match err.downcast::<HttpError>() {
        Ok(http) => {
            tracing::warn!(code = http.code, message = %http.message, path = ctx.path(), "handler returned an application error");
            *http
        }
        Err(other) => {
            tracing::error!(error = %other, path = ctx.path(), "handler failed");
            HttpError::internal(other.to_string())
        }
    };

    ctx.set_status(error.code);
    if let Err(encode_err) = ctx.json(&error) {
        tracing::error!(error = %encode_err, "failed to encode error response");
        ctx.clear_body();
        ctx.write(error.message.as_bytes());
    }
}
