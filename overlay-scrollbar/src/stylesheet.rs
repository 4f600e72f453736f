//! Styles the overlay installs: the page stylesheet (once per document)
//! and the inline styles of the scrollbar's own elements.

use overlay_dom::{
    Document, HeadNode, Overflow, Position, Rule, Selector, Style, Stylesheet, Transitions,
};

use crate::config::{ScrollbarConfig, ScrollbarTheme};

pub const STYLE_START_MARKER: &str = "START - Overlay Scrollbar";
pub const STYLE_END_MARKER: &str = "END - Overlay Scrollbar";

/// Hide native scrollbars on content elements and stop containers from
/// scrolling themselves, leaving the overlay thumb as the only indicator.
pub fn page_stylesheet(config: &ScrollbarConfig) -> Stylesheet {
    Stylesheet::new()
        .rule(Rule::new(
            Selector::attribute(config.container_attr.as_str()),
            Style::new().overflow_y(Overflow::Hidden),
        ))
        .rule(
            Rule::new(
                Selector::attribute(config.content_attr.as_str()),
                Style::new()
                    .overflow_y(Overflow::Auto)
                    .native_scrollbar(false),
            )
            .important(),
        )
}

/// Install the page stylesheet between marker comments. Returns false if
/// this document already has it.
pub fn inject_stylesheet(doc: &mut Document, config: &ScrollbarConfig) -> bool {
    if doc.head_has_comment(STYLE_START_MARKER) {
        return false;
    }
    doc.append_head(HeadNode::Comment(STYLE_START_MARKER.to_string()));
    doc.append_head(HeadNode::Style(page_stylesheet(config)));
    doc.append_head(HeadNode::Comment(STYLE_END_MARKER.to_string()));
    log::debug!("[overlay] injected page stylesheet");
    true
}

pub(crate) fn host_style(theme: &ScrollbarTheme) -> Style {
    Style::new()
        .position(Position::Absolute)
        .z_index(theme.z_index)
}

pub(crate) fn track_style() -> Style {
    Style::new().opacity(0.0)
}

pub(crate) fn track_transitions(theme: &ScrollbarTheme) -> Transitions {
    Transitions::new().opacity(theme.fade.duration, theme.fade.easing)
}

pub(crate) fn thumb_style(height: f32) -> Style {
    Style::new().position(Position::Relative).height(height)
}
