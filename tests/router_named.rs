mod common;

use common::reply;
use trie_mux::{NodeId, Params, Router, RouterError};

fn values<const N: usize>(pairs: [(&str, &str); N]) -> Params {
    pairs.into_iter().collect()
}

#[test]
fn router_when_named_route_built_then_substitutes_values() {
    let mut router = Router::new(None);
    let key = router.get("/users/:id", reply("profile")).expect("route should register");
    router.name(key, "profile").expect("name should be assigned");

    let url = router.url_for("profile", &values([("id", "7")]));

    assert_eq!(url.as_deref(), Some("/users/7"));
}

#[test]
fn router_when_name_unknown_then_url_for_returns_none() {
    let mut router = Router::new(None);
    router.get("/users/:id", reply("profile")).expect("route should register");

    assert_eq!(router.url_for("missing", &Params::new()), None);
}

#[test]
fn router_when_value_missing_then_pattern_text_is_kept() {
    let mut router = Router::new(None);
    let key = router
        .get("/orgs/:org/repos/:repo", reply("repo"))
        .expect("route should register");
    router.name(key, "repo").expect("name should be assigned");

    let url = router.url_for("repo", &values([("repo", "widgets")]));

    assert_eq!(url.as_deref(), Some("/orgs/:org/repos/widgets"));
}

#[test]
fn router_when_placeholder_repeats_then_deepest_node_takes_first_value_and_consumes_key() {
    let mut router = Router::new(None);
    let key = router
        .get("/:id/compare/:id", reply("compare"))
        .expect("route should register");
    router.name(key, "compare").expect("name should be assigned");

    let both = router.url_for("compare", &values([("id", "v1"), ("id", "v2")]));
    assert_eq!(both.as_deref(), Some("/:id/compare/v1"));

    let one = router.url_for("compare", &values([("id", "v2")]));
    assert_eq!(one.as_deref(), Some("/:id/compare/v2"));
}

#[test]
fn router_when_wildcard_route_named_then_tail_value_is_inserted_verbatim() {
    let mut router = Router::new(None);
    let key = router
        .get("/static/*path", reply("static"))
        .expect("route should register");
    router.name(key, "static").expect("name should be assigned");

    let url = router.url_for("static", &values([("path", "css/site.css")]));

    assert_eq!(url.as_deref(), Some("/static/css/site.css"));
}

#[test]
fn router_when_literal_route_named_then_ignores_unrelated_values() {
    let mut router = Router::new(None);
    let key = router
        .get("/health/live", reply("live"))
        .expect("route should register");
    router.name(key, "live").expect("name should be assigned");

    let url = router.url_for("live", &values([("id", "7")]));

    assert_eq!(url.as_deref(), Some("/health/live"));
}

#[test]
fn router_when_root_named_then_url_is_slash() {
    let mut router = Router::new(None);
    let key = router.get("/", reply("home")).expect("root should register");
    router.name(key, "home").expect("name should be assigned");

    assert_eq!(router.url_for("home", &Params::new()).as_deref(), Some("/"));
}

#[test]
fn router_when_name_reassigned_then_points_at_latest_node() {
    let mut router = Router::new(None);
    let old = router.get("/v1/users", reply("old")).expect("old route");
    let new = router.get("/v2/users", reply("new")).expect("new route");
    router.name(old, "users").expect("first assignment");
    router.name(new, "users").expect("second assignment");

    assert_eq!(router.trie().named_routes().get("users"), Some(new));
    assert_eq!(router.trie().named_routes().len(), 1);
    assert_eq!(
        router.url_for("users", &Params::new()).as_deref(),
        Some("/v2/users")
    );
}

#[test]
fn router_when_node_has_several_names_then_each_resolves() {
    let mut router = Router::new(None);
    let key = router.get("/users/:id", reply("user")).expect("route should register");
    router.name(key, "user").expect("first name");
    router.name(key, "member").expect("second name");

    let params = values([("id", "3")]);
    assert_eq!(router.url_for("user", &params).as_deref(), Some("/users/3"));
    assert_eq!(router.url_for("member", &params).as_deref(), Some("/users/3"));
    assert_eq!(
        router.node(key).expect("node should exist").name(),
        Some("member")
    );
}

#[test]
fn router_when_intermediate_node_named_then_url_stops_there() {
    let mut router = Router::new(None);
    router
        .get("/shop/:category/items", reply("items"))
        .expect("route should register");
    let mut captured = Params::new();
    let category = router
        .search("/shop/books", &mut captured)
        .expect("intermediate node should match");
    router.name(category, "category").expect("name should be assigned");

    let url = router.url_for("category", &values([("category", "music")]));

    assert_eq!(url.as_deref(), Some("/shop/music"));
}

#[test]
fn router_when_name_empty_then_returns_error() {
    let mut router = Router::new(None);
    let key = router.get("/users", reply("users")).expect("route should register");

    match router.name(key, "").expect_err("expected empty name error") {
        RouterError::EmptyRouteName => {}
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(router.trie().named_routes().is_empty());
}

#[test]
fn router_when_node_id_is_out_of_range_for_this_router_then_returns_error() {
    let mut donor = Router::new(None);
    let foreign = donor
        .get("/a/b/c/d", reply("deep"))
        .expect("route should register");

    let mut router = Router::new(None);
    router.get("/x", reply("x")).expect("route should register");

    match router.name(foreign, "deep").expect_err("expected unknown node error") {
        RouterError::UnknownNode { node } => assert_eq!(node, foreign),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_ne!(foreign, NodeId::ROOT);
}
