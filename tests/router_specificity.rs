use brace_router_rs::{HttpMethod, Router};

#[test]
fn router_when_concrete_pattern_and_wildcard_match_then_concrete_wins() {
    let mut router = Router::new();
    router
        .add("*", HttpMethod::Get, "wildcard")
        .expect("wildcard should register");
    router
        .add("/users/{[0-9]+}", HttpMethod::Get, "user")
        .expect("route should register");

    let found = router.find("/users/42").expect("path should match");
    assert_eq!(found.handler(HttpMethod::Get), Some(&"user"));

    let fallback = router.find("/other").expect("wildcard should catch the rest");
    assert_eq!(fallback.handler(HttpMethod::Get), Some(&"wildcard"));
}

#[test]
fn router_when_literal_and_capture_both_match_then_literal_wins() {
    let mut router = Router::new();
    router
        .add("/users/{[^/]+}", HttpMethod::Get, "by name")
        .expect("route should register");
    router
        .add("/users/active", HttpMethod::Get, "active")
        .expect("route should register");

    let found = router.find("/users/active").expect("path should match");
    assert_eq!(found.handler(HttpMethod::Get), Some(&"active"));

    let other = router.find("/users/bob").expect("capture should still match");
    assert_eq!(other.handler(HttpMethod::Get), Some(&"by name"));
    assert_eq!(other.args(), ["bob".to_string()]);
}

#[test]
fn router_when_segment_counts_differ_then_longer_pattern_wins() {
    let mut router = Router::new();
    router
        .add("/{.+}", HttpMethod::Get, "one segment")
        .expect("route should register");
    router
        .add("/a/b", HttpMethod::Get, "two segments")
        .expect("route should register");

    // One-segment patterns never match two-segment paths, so only the
    // segment-count bias is observable through disjoint paths.
    let found = router.find("/a/b").expect("two-segment path should match");
    assert_eq!(found.handler(HttpMethod::Get), Some(&"two segments"));

    let found = router.find("/a").expect("one-segment path should match");
    assert_eq!(found.handler(HttpMethod::Get), Some(&"one segment"));
}

#[test]
fn router_when_mixed_segment_beats_pure_capture() {
    let mut router = Router::new();
    router
        .add("/img/{.+}", HttpMethod::Get, "any file")
        .expect("route should register");
    router
        .add("/img/pic-{\\d+}.png", HttpMethod::Get, "numbered png")
        .expect("route should register");

    let found = router.find("/img/pic-3.png").expect("path should match");
    assert_eq!(found.handler(HttpMethod::Get), Some(&"numbered png"));
    assert_eq!(found.args(), ["3".to_string()]);
}

#[test]
fn router_when_specificity_ties_then_smaller_pattern_string_wins() {
    let mut router = Router::new();
    router
        .add("/{\\d+}/b", HttpMethod::Get, "digits then b")
        .expect("route should register");
    router
        .add("/{\\w+}/b", HttpMethod::Get, "word then b")
        .expect("route should register");

    // Both are capture+literal with identical scores; the tie breaks
    // lexicographically, independent of registration order.
    let found = router.find("/42/b").expect("path should match");
    assert_eq!(found.handler(HttpMethod::Get), Some(&"digits then b"));
}

#[test]
fn router_when_routes_added_in_reverse_then_ranking_is_unchanged() {
    let mut forward = Router::new();
    forward.add("*", HttpMethod::Get, "w").expect("should register");
    forward
        .add("/a/{.+}", HttpMethod::Get, "capture")
        .expect("should register");
    forward
        .add("/a/b", HttpMethod::Get, "literal")
        .expect("should register");

    let mut reverse = Router::new();
    reverse
        .add("/a/b", HttpMethod::Get, "literal")
        .expect("should register");
    reverse
        .add("/a/{.+}", HttpMethod::Get, "capture")
        .expect("should register");
    reverse.add("*", HttpMethod::Get, "w").expect("should register");

    for router in [&forward, &reverse] {
        let found = router.find("/a/b").expect("path should match");
        assert_eq!(found.handler(HttpMethod::Get), Some(&"literal"));
    }
}
