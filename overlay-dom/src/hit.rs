use crate::document::Document;
use crate::element::ElementId;

/// Find the deepest rendered element containing the point.
///
/// Siblings are tested top-most first: higher `z-index` wins, and among
/// equal `z-index` the later child is on top.
pub fn hit_test(doc: &Document, x: f32, y: f32) -> Option<ElementId> {
    hit_test_element(doc, doc.body(), x, y)
}

fn hit_test_element(doc: &Document, id: ElementId, x: f32, y: f32) -> Option<ElementId> {
    let element = doc.get(id)?;
    if element.hidden || !element.rect.contains(x, y) {
        return None;
    }

    let mut children: Vec<(usize, ElementId, i16)> = element
        .children
        .iter()
        .enumerate()
        .map(|(order, &child)| (order, child, doc.computed_style(child).map_or(0, |s| s.z_index)))
        .collect();
    children.sort_by(|a, b| b.2.cmp(&a.2).then(b.0.cmp(&a.0)));

    for (_, child, _) in children {
        if let Some(hit) = hit_test_element(doc, child, x, y) {
            return Some(hit);
        }
    }

    Some(id)
}
