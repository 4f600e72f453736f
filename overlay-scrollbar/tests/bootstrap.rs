use overlay_dom::{Document, ElementId, HeadNode, Overflow, Position, Rect};
use overlay_scrollbar::{
    BindError, CONTAINER_ATTR, CONTENT_ATTR, ELEMENT_TAG, Overlay, OverlayScrollbar,
    STYLE_END_MARKER, STYLE_START_MARKER, ScrollbarConfig, find_containers, init,
    inject_stylesheet,
};

/// Append a positioned container with an overflowing content child.
fn add_container(doc: &mut Document, parent: ElementId, top: f32) -> (ElementId, ElementId) {
    let container = doc.create_element("section");
    doc.set_attribute(container, CONTAINER_ATTR, "");
    doc.inline_style_mut(container).unwrap().position = Some(Position::Relative);
    doc.append_child(parent, container);
    doc.set_rect(container, Rect::new(0.0, top, 200.0, 100.0));

    let content = doc.create_element("div");
    doc.set_attribute(content, CONTENT_ATTR, "");
    doc.append_child(container, content);
    doc.set_rect(content, Rect::new(0.0, top, 200.0, 100.0));
    doc.set_scroll_height(content, 500.0);

    (container, content)
}

// ============================================================================
// Stylesheet
// ============================================================================

#[test]
fn test_stylesheet_injected_once() {
    let mut doc = Document::new(800.0, 600.0);
    let config = ScrollbarConfig::default();

    assert!(inject_stylesheet(&mut doc, &config));
    assert!(!inject_stylesheet(&mut doc, &config));

    let head = doc.head();
    assert_eq!(head.len(), 3);
    assert_eq!(head[0], HeadNode::Comment(STYLE_START_MARKER.to_string()));
    assert!(matches!(head[1], HeadNode::Style(_)));
    assert_eq!(head[2], HeadNode::Comment(STYLE_END_MARKER.to_string()));
}

#[test]
fn test_init_twice_keeps_one_stylesheet() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let (first, _) = add_container(&mut doc, body, 0.0);
    let (second, _) = add_container(&mut doc, body, 200.0);

    let _a = init(&mut doc, &[first], ScrollbarConfig::default());
    let _b = init(&mut doc, &[second], ScrollbarConfig::default());

    assert_eq!(doc.head().len(), 3);
}

#[test]
fn test_stylesheet_hides_native_scrollbars() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let (container, content) = add_container(&mut doc, body, 0.0);
    // Inline styles lose against the important content rule
    doc.inline_style_mut(content).unwrap().overflow_y = Some(Overflow::Visible);

    init(&mut doc, &[container], ScrollbarConfig::default());

    let container_style = doc.computed_style(container).unwrap();
    assert_eq!(container_style.overflow_y, Overflow::Hidden);
    assert!(container_style.native_scrollbar);

    let content_style = doc.computed_style(content).unwrap();
    assert_eq!(content_style.overflow_y, Overflow::Auto);
    assert!(!content_style.native_scrollbar);
}

// ============================================================================
// Discovery and binding
// ============================================================================

#[test]
fn test_find_containers_in_document_order() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let (outer, outer_content) = add_container(&mut doc, body, 0.0);
    let (nested, _) = add_container(&mut doc, outer_content, 20.0);
    let (last, _) = add_container(&mut doc, body, 300.0);

    // Detached containers are not discovered
    let orphan = doc.create_element("section");
    doc.set_attribute(orphan, CONTAINER_ATTR, "");

    let found = find_containers(&doc, &ScrollbarConfig::default());
    assert_eq!(found, vec![outer, nested, last]);
}

#[test]
fn test_init_binds_every_container() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let (first, _) = add_container(&mut doc, body, 0.0);
    let (second, _) = add_container(&mut doc, body, 200.0);

    let config = ScrollbarConfig::default();
    let containers = find_containers(&doc, &config);
    let overlay = init(&mut doc, &containers, config);

    assert_eq!(overlay.scrollbars().len(), 2);
    for container in [first, second] {
        let scrollbar = overlay.scrollbar_for(container).unwrap();
        assert_eq!(doc.children(container)[0], scrollbar.host());
    }
    assert_eq!(doc.listener_count(), 10);
}

#[test]
fn test_init_skips_broken_container() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let (good, _) = add_container(&mut doc, body, 0.0);

    let broken = doc.create_element("section");
    doc.set_attribute(broken, CONTAINER_ATTR, "");
    doc.append_child(body, broken);
    let plain = doc.create_element("div");
    doc.append_child(broken, plain);

    let config = ScrollbarConfig::default();
    let containers = find_containers(&doc, &config);
    let overlay = init(&mut doc, &containers, config);

    assert_eq!(overlay.scrollbars().len(), 1);
    assert!(overlay.scrollbar_for(good).is_some());
    assert!(overlay.scrollbar_for(broken).is_none());
    assert_eq!(doc.children(broken), &[plain]);
}

#[test]
fn test_bind_errors() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let (container, _) = add_container(&mut doc, body, 0.0);
    let mut overlay = Overlay::new(ScrollbarConfig::default());

    overlay.bind(&mut doc, container).unwrap();
    assert_eq!(
        overlay.bind(&mut doc, container),
        Err(BindError::AlreadyBound(container))
    );

    let detached = doc.create_element("section");
    assert_eq!(
        overlay.bind(&mut doc, detached),
        Err(BindError::MissingContainer(detached))
    );

    let empty = doc.create_element("section");
    doc.append_child(body, empty);
    assert_eq!(
        overlay.bind(&mut doc, empty),
        Err(BindError::MissingContent {
            container: empty,
            attr: CONTENT_ATTR.to_string(),
        })
    );
}

#[test]
fn test_container_gets_one_scrollbar_across_overlays() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let (container, content) = add_container(&mut doc, body, 0.0);

    let first = init(&mut doc, &[container], ScrollbarConfig::default());
    let second = init(&mut doc, &[container], ScrollbarConfig::default());

    assert_eq!(first.scrollbars().len(), 1);
    assert!(second.scrollbars().is_empty());
    let hosts = doc
        .children(container)
        .iter()
        .filter(|&&child| doc.get(child).unwrap().tag == ELEMENT_TAG)
        .count();
    assert_eq!(hosts, 1);
    assert_eq!(doc.listener_count(), 5);

    // Direct attachment is refused the same way
    let err = OverlayScrollbar::attach(&mut doc, container, content, ScrollbarConfig::default())
        .unwrap_err();
    assert_eq!(err, BindError::AlreadyBound(container));
    assert_eq!(doc.children(container).len(), 2);
}

#[test]
fn test_attach_rejects_nested_content() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let container = doc.create_element("section");
    doc.append_child(body, container);
    let wrapper = doc.create_element("div");
    doc.append_child(container, wrapper);
    let content = doc.create_element("div");
    doc.append_child(wrapper, content);

    let err = OverlayScrollbar::attach(&mut doc, container, content, ScrollbarConfig::default())
        .unwrap_err();
    assert_eq!(err, BindError::NotAChild { container, content });
    assert_eq!(doc.listener_count(), 0);
    assert_eq!(doc.children(container), &[wrapper]);
}

#[test]
fn test_bind_error_messages() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let empty = doc.create_element("section");
    doc.append_child(body, empty);

    let err = Overlay::new(ScrollbarConfig::default())
        .bind(&mut doc, empty)
        .unwrap_err();
    assert!(err.to_string().contains(CONTENT_ATTR));
}

#[test]
fn test_content_found_by_attribute_not_position() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let container = doc.create_element("section");
    doc.set_attribute(container, CONTAINER_ATTR, "");
    doc.append_child(body, container);
    doc.set_rect(container, Rect::new(0.0, 0.0, 200.0, 100.0));

    let header = doc.create_element("header");
    doc.append_child(container, header);
    let content = doc.create_element("div");
    doc.set_attribute(content, CONTENT_ATTR, "");
    doc.append_child(container, content);
    doc.set_rect(content, Rect::new(0.0, 0.0, 200.0, 100.0));
    doc.set_scroll_height(content, 300.0);

    let overlay = init(&mut doc, &[container], ScrollbarConfig::default());
    let scrollbar = overlay.scrollbar_for(container).unwrap();

    assert_eq!(scrollbar.content(), content);
    assert_eq!(doc.children(container), &[scrollbar.host(), header, content]);
    assert!(!scrollbar.is_track_hidden(&doc));
}

#[test]
fn test_custom_attributes() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let container = doc.create_element("div");
    doc.set_attribute(container, "data-pane", "");
    doc.append_child(body, container);
    let content = doc.create_element("div");
    doc.set_attribute(content, "data-pane-body", "");
    doc.append_child(container, content);

    // Default markup is ignored under a custom configuration
    add_container(&mut doc, body, 200.0);

    let config = ScrollbarConfig::new().attributes("data-pane", "data-pane-body");
    let containers = find_containers(&doc, &config);
    assert_eq!(containers, vec![container]);

    let overlay = init(&mut doc, &containers, config);
    assert_eq!(overlay.scrollbars().len(), 1);
    assert_eq!(
        doc.computed_style(content).unwrap().overflow_y,
        Overflow::Auto
    );
}

// ============================================================================
// Markup
// ============================================================================

#[test]
fn test_scrollbar_markup() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let (container, _) = add_container(&mut doc, body, 0.0);

    let config = ScrollbarConfig::new().label("Messages scrollbar");
    let overlay = init(&mut doc, &[container], config);
    let scrollbar = overlay.scrollbar_for(container).unwrap();

    assert_eq!(doc.get(scrollbar.host()).unwrap().tag, ELEMENT_TAG);
    assert_eq!(doc.children(scrollbar.host()), &[scrollbar.track()]);
    assert_eq!(doc.children(scrollbar.track()), &[scrollbar.thumb()]);
    assert_eq!(doc.attribute(scrollbar.track(), "class"), Some("track"));
    assert_eq!(doc.attribute(scrollbar.thumb(), "class"), Some("thumb"));
    assert_eq!(doc.attribute(scrollbar.thumb(), "type"), Some("button"));
    assert_eq!(
        doc.attribute(scrollbar.thumb(), "aria-label"),
        Some("Messages scrollbar")
    );

    let host = doc.computed_style(scrollbar.host()).unwrap();
    assert_eq!(host.position, Position::Absolute);
    assert_eq!(host.z_index, 20);
    assert_eq!(doc.computed_style(scrollbar.track()).unwrap().opacity, 0.0);
}

#[test]
fn test_shutdown_restores_page() {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body();
    let (first, first_content) = add_container(&mut doc, body, 0.0);
    let (second, second_content) = add_container(&mut doc, body, 200.0);

    let overlay = init(&mut doc, &[first, second], ScrollbarConfig::default());
    overlay.shutdown(&mut doc);

    assert_eq!(doc.listener_count(), 0);
    assert_eq!(doc.pending_timers(), 0);
    assert_eq!(doc.children(first), &[first_content]);
    assert_eq!(doc.children(second), &[second_content]);
}
