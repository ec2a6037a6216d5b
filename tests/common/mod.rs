#![allow(dead_code)]

use trie_mux::{Context, HandlerResult, HttpMethod, Params, Router};

pub fn reply(tag: &'static str) -> impl Fn(&mut Context) -> HandlerResult + Send + Sync + 'static {
    move |ctx: &mut Context| {
        ctx.write(tag);
        Ok(())
    }
}

pub fn serve(router: &Router, method: HttpMethod, path: &str) -> Context {
    let mut ctx = Context::new(method, path);
    router.handle(&mut ctx);
    ctx
}

pub fn body(ctx: &Context) -> &str {
    ctx.response().body_text().expect("response body should be utf-8")
}

pub fn search(router: &Router, path: &str) -> (Option<trie_mux::NodeId>, Params) {
    let mut captured = Params::new();
    let node = router.search(path, &mut captured);
    (node, captured)
}
