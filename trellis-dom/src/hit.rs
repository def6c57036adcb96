use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest enabled clickable element at the given coordinates.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    deepest(layout, root, x, y, &|el| el.clickable && !el.disabled)
}

/// Find the deepest enabled focusable element at the given coordinates.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    deepest(layout, root, x, y, &|el| el.focusable && !el.disabled)
}

fn deepest(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    // Later children are drawn last, so they win overlaps.
    element
        .child_elements()
        .iter()
        .rev()
        .find_map(|child| deepest(layout, child, x, y, accept))
        .or_else(|| accept(element).then(|| element.id.clone()))
}
