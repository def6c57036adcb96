use super::{LayoutResult, Rect};
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

/// Lay out `root` inside `available`. The root is given the whole area
/// unless its own size is `Fixed`.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = match root.width {
        Size::Fixed(w) => w.min(available.width),
        _ => available.width,
    };
    let height = match root.height {
        Size::Fixed(h) => h.min(available.height),
        _ => available.height,
    };
    place(
        root,
        Rect::new(available.x, available.y, width, height),
        &mut result,
    );
    result
}

/// Horizontal and vertical space taken by border and padding.
fn chrome(el: &Element) -> (u16, u16) {
    let border = el.style.border.thickness() * 2;
    (
        el.padding.horizontal_total() + border,
        el.padding.vertical_total() + border,
    )
}

/// Natural size of an element, including padding and border.
pub fn intrinsic_size(el: &Element) -> (u16, u16) {
    let (content_w, content_h) = match &el.content {
        Content::None => (0, 0),
        Content::Text(s) => (clamp(display_width(s)), 1),
        Content::TextInput {
            value, placeholder, ..
        } => {
            let shown = display_width(value)
                .max(placeholder.as_deref().map(display_width).unwrap_or(0));
            // One extra column for the cursor.
            (clamp(shown + 1), 1)
        }
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children.iter().map(outer_size).collect();
            let gaps = el.gap.saturating_mul(children.len().saturating_sub(1) as u16);
            match el.direction {
                Direction::Column => (
                    sizes.iter().map(|s| s.0).max().unwrap_or(0),
                    sizes.iter().fold(0u16, |acc, s| acc.saturating_add(s.1)).saturating_add(gaps),
                ),
                Direction::Row => (
                    sizes.iter().fold(0u16, |acc, s| acc.saturating_add(s.0)).saturating_add(gaps),
                    sizes.iter().map(|s| s.1).max().unwrap_or(0),
                ),
            }
        }
    };

    let (cw, ch) = chrome(el);
    (content_w.saturating_add(cw), content_h.saturating_add(ch))
}

/// Size a child asks for before any leftover space is shared out.
fn outer_size(el: &Element) -> (u16, u16) {
    let (iw, ih) = intrinsic_size(el);
    let w = match el.width {
        Size::Fixed(w) => w,
        _ => iw,
    };
    let h = match el.height {
        Size::Fixed(h) => h,
        _ => ih,
    };
    (w, h)
}

fn clamp(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}

fn place(el: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(el.id.clone(), rect);

    let children = match &el.content {
        Content::Children(children) if !children.is_empty() => children,
        _ => return,
    };

    let border = el.style.border.thickness();
    let inner = rect.shrink(
        el.padding.top + border,
        el.padding.right + border,
        el.padding.bottom + border,
        el.padding.left + border,
    );

    match el.direction {
        Direction::Column => place_column(el, children, inner, result),
        Direction::Row => place_row(el, children, inner, result),
    }
}

/// Split `extra` between weighted slots. The last weighted slot takes the
/// rounding remainder so the shares always add up to `extra`.
fn share_out(weights: &[Option<u16>], extra: u16) -> Vec<u16> {
    let total: u32 = weights.iter().flatten().map(|w| *w as u32).sum();
    let mut shares = vec![0u16; weights.len()];
    if total == 0 {
        return shares;
    }

    let last = weights.iter().rposition(Option::is_some);
    let mut given = 0u16;
    for (i, weight) in weights.iter().enumerate() {
        if let Some(w) = weight {
            let share = if Some(i) == last {
                extra - given
            } else {
                ((extra as u32 * *w as u32) / total) as u16
            };
            shares[i] = share;
            given += share;
        }
    }
    shares
}

fn place_column(el: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let gaps = el.gap.saturating_mul(children.len().saturating_sub(1) as u16);
    let heights: Vec<u16> = children.iter().map(|c| outer_size(c).1).collect();
    let used = heights.iter().fold(gaps, |acc, h| acc.saturating_add(*h));
    let extra = inner.height.saturating_sub(used);
    let weights: Vec<Option<u16>> = children.iter().map(|c| c.height.weight()).collect();
    let shares = share_out(&weights, extra);

    let mut y = inner.y;
    for (i, child) in children.iter().enumerate() {
        let width = match child.width {
            Size::Fixed(w) => w.min(inner.width),
            Size::Auto => intrinsic_size(child).0.min(inner.width),
            Size::Fill | Size::Flex(_) => inner.width,
        };
        let height = heights[i].saturating_add(shares[i]);
        place(child, Rect::new(inner.x, y, width, height), result);
        y = y.saturating_add(height).saturating_add(el.gap);
    }
}

fn place_row(el: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let gaps = el.gap.saturating_mul(children.len().saturating_sub(1) as u16);
    // Weighted children start from zero and only receive leftover width.
    let widths: Vec<u16> = children
        .iter()
        .map(|c| match c.width {
            Size::Fixed(w) => w,
            Size::Auto => intrinsic_size(c).0,
            Size::Fill | Size::Flex(_) => 0,
        })
        .collect();
    let used = widths.iter().fold(gaps, |acc, w| acc.saturating_add(*w));
    let extra = inner.width.saturating_sub(used);
    let weights: Vec<Option<u16>> = children.iter().map(|c| c.width.weight()).collect();
    let shares = share_out(&weights, extra);

    let mut x = inner.x;
    for (i, child) in children.iter().enumerate() {
        let remaining = inner.right().saturating_sub(x);
        let width = widths[i].saturating_add(shares[i]).min(remaining);
        let height = match child.height {
            Size::Fixed(h) => h.min(inner.height),
            Size::Auto => intrinsic_size(child).1.min(inner.height),
            Size::Fill | Size::Flex(_) => inner.height,
        };
        place(child, Rect::new(x, inner.y, width, height), result);
        x = x.saturating_add(width).saturating_add(el.gap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_out_gives_remainder_to_last() {
        assert_eq!(share_out(&[Some(1), None, Some(1)], 9), vec![4, 0, 5]);
        assert_eq!(share_out(&[Some(1), Some(2)], 9), vec![3, 6]);
        assert_eq!(share_out(&[None, None], 9), vec![0, 0]);
    }
}
