use std::fmt;
use std::sync::Arc;

use crate::dispatch::{self, Context, HttpError};
use crate::enums::{HttpMethod, RouteMethod};
use crate::matcher::{Params, find_node};
use crate::path::split_segments;
use crate::pattern::parse_pattern;
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::trie::{Node, Trie};
use crate::types::{Handler, HandlerResult, Middleware, NodeId};

/// Request router: build with the registration methods (`&mut self`), then
/// serve through [`Router::handle`] or [`Router::search`] + [`Router::invoke`]
/// (`&self`, safe to share across threads).
pub struct Router {
    trie: Trie,
    options: RouterOptions,
    prefix: String,
    not_found: Handler,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("options", &self.options)
            .field("prefix", &self.prefix)
            .field("nodes", &self.trie.len())
            .field("named_routes", &self.trie.named_routes().len())
            .finish()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Router {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            trie: Trie::new(),
            options: options.unwrap_or_default(),
            prefix: String::new(),
            not_found: Arc::new(default_not_found),
        }
    }

    /// Like [`Router::new`] but rejects invalid options.
    pub fn try_new(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.trie.node(id)
    }

    pub fn node_count(&self) -> usize {
        self.trie.len()
    }

    pub fn route<H>(
        &mut self,
        method: impl Into<RouteMethod>,
        pattern: &str,
        handler: H,
    ) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.route_with(method, pattern, handler, std::iter::empty::<Middleware>())
    }

    /// Registers `handler` with `middlewares` appended to the target node's
    /// chain first. The group prefix in effect is prepended to `pattern`.
    pub fn route_with<H, I>(
        &mut self,
        method: impl Into<RouteMethod>,
        pattern: &str,
        handler: H,
        middlewares: I,
    ) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
        I: IntoIterator<Item = Middleware>,
    {
        let full = format!("{}{}", self.prefix, pattern);
        let mut parsed = parse_pattern(&full, self.options.max_segments)?;
        if !self.options.case_sensitive {
            parsed.fold_case();
        }

        Ok(self.trie.insert(
            &parsed,
            method.into(),
            Arc::new(handler),
            middlewares,
            self.options.warn_on_overwrite,
        ))
    }

    pub fn get<H>(&mut self, pattern: &str, handler: H) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Get, pattern, handler)
    }

    pub fn post<H>(&mut self, pattern: &str, handler: H) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Post, pattern, handler)
    }

    pub fn put<H>(&mut self, pattern: &str, handler: H) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Put, pattern, handler)
    }

    pub fn delete<H>(&mut self, pattern: &str, handler: H) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Delete, pattern, handler)
    }

    pub fn patch<H>(&mut self, pattern: &str, handler: H) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Patch, pattern, handler)
    }

    pub fn options_route<H>(&mut self, pattern: &str, handler: H) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Options, pattern, handler)
    }

    pub fn head<H>(&mut self, pattern: &str, handler: H) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Head, pattern, handler)
    }

    /// Catch-all registration, used when a node has no handler for the
    /// request's exact method.
    pub fn any<H>(&mut self, pattern: &str, handler: H) -> RouterResult<NodeId>
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(RouteMethod::Any, pattern, handler)
    }

    /// Runs `f` with `prefix` prepended to every pattern it registers.
    /// Groups nest; the previous prefix is restored even when `f` fails.
    pub fn group<F>(&mut self, prefix: &str, f: F) -> RouterResult<()>
    where
        F: FnOnce(&mut Router) -> RouterResult<()>,
    {
        let previous_len = self.prefix.len();
        self.prefix.push_str(prefix);
        let result = f(self);
        self.prefix.truncate(previous_len);
        result
    }

    /// Labels `node` for reverse lookup. Reusing a name moves it to `node`.
    /// Like [`Router::invoke`], `node` must have been issued by this router.
    pub fn name(&mut self, node: NodeId, name: &str) -> RouterResult<()> {
        if name.is_empty() {
            return Err(RouterError::EmptyRouteName);
        }
        if !self.trie.contains(node) {
            return Err(RouterError::UnknownNode { node });
        }

        if let Some(previous) = self.trie.assign_name(node, name)
            && previous != node
        {
            tracing::debug!(name, previous = %previous, node = %node, "route name reassigned");
        }
        Ok(())
    }

    pub fn set_not_found<H>(&mut self, handler: H)
    where
        H: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
    {
        self.not_found = Arc::new(handler);
    }

    /// Resolves `path` to a node, adding captured parameters to `captured`.
    #[tracing::instrument(level = "trace", skip_all, fields(path = %path))]
    pub fn search(&self, path: &str, captured: &mut Params) -> Option<NodeId> {
        let segments = split_segments(path);
        if segments.len() > self.options.max_segments {
            tracing::debug!(
                segments = segments.len(),
                limit = self.options.max_segments,
                "path exceeds segment limit"
            );
            return None;
        }

        if self.options.case_sensitive {
            return find_node(&self.trie, &segments, &segments, captured);
        }
        // ASCII folding keeps byte offsets, so both splits line up
        let folded = path.to_ascii_lowercase();
        let keys = split_segments(&folded);
        find_node(&self.trie, &keys, &segments, captured)
    }

    /// Dispatches `ctx` to `node`'s handler. See [`dispatch::invoke`].
    ///
    /// `node` must come from this router. Ids are plain arena indices, so an
    /// id issued by another router is only rejected when it is out of range.
    pub fn invoke(&self, node: NodeId, ctx: &mut Context) -> bool {
        match self.trie.node(node) {
            Some(target) => dispatch::invoke(target, ctx),
            None => false,
        }
    }

    /// Search + invoke, answering with the not-found handler on any miss.
    pub fn handle(&self, ctx: &mut Context) {
        let path = ctx.path().to_owned();
        let found = self.search(&path, ctx.params_mut());

        let handled = match found {
            Some(node) => self.invoke(node, ctx),
            None => false,
        };

        if !handled {
            tracing::debug!(method = %ctx.method(), path = ctx.path(), "no route matched");
            if let Err(err) = (self.not_found)(ctx) {
                tracing::error!(error = %err, "not-found handler failed");
            }
        }
    }

    pub fn url_for(&self, name: &str, values: &Params) -> Option<String> {
        self.trie.url_for(name, values)
    }
}

fn default_not_found(ctx: &mut Context) -> HandlerResult {
    let error = HttpError::not_found();
    ctx.set_status(error.code);
    ctx.clear_body();
    ctx.write(error.message.as_bytes());
    Ok(())
}
