#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::unwrap_used, reason = "integration test — panics are the assertion mechanism")]

use std::cell::RefCell;
use std::rc::Rc;

use pagewin_core::{default_markers, PageClick, PageMarker, PaginationConfig, Paginator};

fn init_tracing() {
    drop(
        tracing_subscriber::fmt()
            .with_env_filter("pagewin_core=debug")
            .with_test_writer()
            .try_init(),
    );
}

fn labels(markers: &[PageMarker]) -> Vec<String> {
    markers.iter().map(ToString::to_string).collect()
}

#[test]
fn test_json_config_to_rendered_row() {
    init_tracing();
    let config = PaginationConfig::from_json(r#"{"total": 200, "current": 10}"#).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut paginator = Paginator::new(config, move |page: usize| sink.borrow_mut().push(page));

    assert_eq!(labels(paginator.markers()), ["1", "...", "8", "9", "10", "11", "12", "...", "20"]);

    // walk to the end through the markers the view exposes
    let last = paginator.view().unwrap().items.last().and_then(|i| i.click()).unwrap();
    paginator.click(last);
    assert_eq!(labels(paginator.markers()), ["1", "...", "16", "17", "18", "19", "20"]);
    assert!(!paginator.can_next());

    paginator.click(PageClick::Next);
    paginator.click(PageClick::Prev);

    assert_eq!(*seen.borrow(), vec![20, 19]);
    assert_eq!(paginator.markers(), default_markers(20, 19).as_slice());
}

#[test]
fn test_ellipsis_click_does_nothing() {
    let mut paginator = Paginator::detached(PaginationConfig::new(200));
    let view = paginator.view().unwrap();
    let dot = view.items.iter().find(|i| i.marker.is_ellipsis()).unwrap();

    assert!(dot.click().is_none());
    if let Some(click) = dot.click() {
        paginator.click(click);
    }
    assert_eq!(paginator.current_page(), 1);
}

#[test]
fn test_only_edges_control() {
    let config = PaginationConfig::from_json(r#"{"total": 30, "onlyEdges": true}"#).unwrap();
    let mut paginator = Paginator::detached(config);

    let view = paginator.view().unwrap();
    assert!(view.items.is_empty());
    assert_eq!(view.prev.class(), "pagination-item-prev-disabled");
    assert_eq!(view.next.class(), "pagination-item-next");

    paginator.click(view.next.click());
    paginator.click(PageClick::Next);
    assert_eq!(paginator.current_page(), 3);
    assert_eq!(paginator.view().unwrap().next.class(), "pagination-item-next-disabled");
}

#[test]
fn test_single_page_renders_nothing() {
    let config = PaginationConfig::from_json(r#"{"total": 5, "pageSize": 10}"#).unwrap();
    let mut paginator = Paginator::detached(config);

    assert_eq!(paginator.total_pages(), 1);
    assert!(paginator.view().is_none());

    paginator.click(PageClick::Next);
    assert_eq!(paginator.current_page(), 1);
}

#[test]
fn test_render_model_serializes_markers() {
    let paginator = Paginator::detached(PaginationConfig::new(200));
    let json = serde_json::to_string(paginator.markers()).unwrap();
    assert_eq!(json, r#"[1,2,3,4,5,"ellipsis",20]"#);
}
