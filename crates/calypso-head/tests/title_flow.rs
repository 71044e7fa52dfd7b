//! End-to-end title updates through a store.

use calypso_head::prelude::*;

fn foo() -> Site {
    Site::from_json(r#"{ "ID": 10, "name": "Foo", "URL": "https://foo.blog" }"#).unwrap()
}

fn store_with_sink() -> (Store, MemoryTitleSink) {
    let sink = MemoryTitleSink::new();
    let store = Store::new(HeadState::default())
        .with(LoggingMiddleware)
        .with(DocumentTitleMiddleware::new(sink.clone()));
    (store, sink)
}

#[test]
fn navigation_sequence() {
    let (mut store, sink) = store_with_sink();

    store.dispatch(HeadAction::SitesReceived { sites: vec![foo()] });
    store.dispatch(HeadAction::group_set("sites"));
    store.dispatch(HeadAction::selected_site_set(10));
    assert_eq!(sink.get(), "Foo \u{2014} WordPress.com");

    // The count prefix counts as title text, so the separator follows it.
    store.dispatch(HeadAction::unread_count_set(3));
    assert_eq!(sink.get(), "(3)  \u{2039} Foo \u{2014} WordPress.com");

    store.dispatch(HeadAction::title_set("Reader"));
    assert_eq!(sink.get(), "(3) Reader \u{2039} Foo \u{2014} WordPress.com");

    store.dispatch(HeadAction::group_set("reader"));
    store.dispatch(HeadAction::title_set("Reader"));
    assert_eq!(sink.get(), "(3) Reader \u{2014} WordPress.com");
}

#[test]
fn repeated_dispatch_writes_once() {
    let (mut store, sink) = store_with_sink();
    store.dispatch(HeadAction::title_set("Stats"));
    store.dispatch(HeadAction::title_set("Stats"));
    assert_eq!(sink.get(), "Stats \u{2014} WordPress.com");
    assert_eq!(sink.writes(), 1);
}

#[test]
fn unknown_site_id_drops_site_part() {
    let (mut store, sink) = store_with_sink();
    store.dispatch(HeadAction::title_set("Posts"));
    store.dispatch(HeadAction::selected_site_set(999));
    assert_eq!(sink.get(), "Posts \u{2014} WordPress.com");
    assert_eq!(sink.writes(), 1);
}

#[test]
fn actions_from_json_drive_the_store() {
    let (mut store, sink) = store_with_sink();
    let actions = HeadAction::list_from_json(
        r#"[
            { "type": "SITES_RECEIVE", "sites": [{ "ID": 10, "name": "Foo" }] },
            { "type": "SECTION_GROUP_SET", "group": "editor" },
            { "type": "SELECTED_SITE_SET", "siteId": 10 },
            { "type": "DOCUMENT_HEAD_TITLE_SET", "title": "Edit &ldquo;Hello&rdquo;" }
        ]"#,
    )
    .unwrap();
    for action in actions {
        store.dispatch(action);
    }
    assert_eq!(
        sink.get(),
        "Edit \u{201c}Hello\u{201d} \u{2039} Foo \u{2014} WordPress.com"
    );
    assert_eq!(store.state().title, "Edit &ldquo;Hello&rdquo;");
}
