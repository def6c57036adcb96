//! Draws a laid-out element tree into a [`Buffer`].

use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, mask, tail_to_width, truncate_to_width};
use crate::types::{ColorContext, Rgb, Style, TextStyle};

/// Glyph drawn after the value of a focused text input.
const CURSOR: char = '▏';

/// Colours inherited from the nearest ancestor that set them.
#[derive(Clone, Copy)]
struct Inherited {
    fg: Rgb,
    text_style: TextStyle,
}

pub fn render_to_buffer(
    root: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    colors: &ColorContext,
) {
    let inherited = Inherited {
        fg: Cell::default().fg,
        text_style: TextStyle::new(),
    };
    render_element(root, layout, buf, colors, inherited);
}

/// Style after applying the disabled and focused overlays.
fn effective_style(el: &Element) -> Style {
    let mut style = el.style.clone();
    if el.disabled {
        if let Some(disabled) = &el.style_disabled {
            style = style.merge(disabled);
        }
    }
    if el.focused {
        if let Some(focused) = &el.style_focused {
            style = style.merge(focused);
        }
    }
    style
}

fn render_element(
    el: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    colors: &ColorContext,
    inherited: Inherited,
) {
    let Some(rect) = layout.get(&el.id).copied() else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let style = effective_style(el);
    let fg = style
        .foreground
        .as_ref()
        .map(|c| colors.to_rgb(c))
        .unwrap_or(inherited.fg);
    let text_style = inherited.text_style.union(style.text_style);

    if let Some(bg) = &style.background {
        fill(buf, rect, colors.to_rgb(bg));
    }

    if let Some(glyphs) = style.border.glyphs() {
        let border_fg = style
            .border_color
            .as_ref()
            .map(|c| colors.to_rgb(c))
            .unwrap_or(fg);
        draw_border(buf, rect, glyphs, border_fg);
    }

    let border = style.border.thickness();
    let inner = rect.shrink(
        el.padding.top + border,
        el.padding.right + border,
        el.padding.bottom + border,
        el.padding.left + border,
    );

    match &el.content {
        Content::None => {}
        Content::Text(s) => {
            let shown = truncate_to_width(s, inner.width as usize);
            let offset = align_offset(display_width(&shown), inner.width as usize, el.text_align);
            draw_text(buf, inner.x + offset as u16, inner.y, &shown, fg, text_style, inner);
        }
        Content::TextInput {
            value,
            placeholder,
            mask: mask_char,
            focused,
        } => {
            let (shown, style) = if value.is_empty() {
                let hint = placeholder.clone().unwrap_or_default();
                (hint, text_style.union(TextStyle::new().dim()))
            } else {
                match mask_char {
                    Some(m) => (mask(value, *m), text_style),
                    None => (value.clone(), text_style),
                }
            };
            let room = if *focused {
                inner.width.saturating_sub(1)
            } else {
                inner.width
            };
            // A focused value scrolls so its end stays next to the cursor.
            let shown = if *focused && !value.is_empty() {
                tail_to_width(&shown, room as usize)
            } else {
                truncate_to_width(&shown, room as usize)
            };
            draw_text(buf, inner.x, inner.y, &shown, fg, style, inner);
            if *focused {
                let cursor_x = if value.is_empty() {
                    inner.x
                } else {
                    inner.x + display_width(&shown) as u16
                };
                draw_text(buf, cursor_x, inner.y, &CURSOR.to_string(), fg, text_style, inner);
            }
        }
        Content::Children(children) => {
            let inherited = Inherited { fg, text_style };
            for child in children {
                render_element(child, layout, buf, colors, inherited);
            }
        }
    }
}

fn fill(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, glyphs: [char; 6], fg: Rgb) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let [tl, tr, bl, br, h, v] = glyphs;
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let mut put = |x: u16, y: u16, ch: char| {
        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            cell.fg = fg;
            cell.wide_continuation = false;
        }
    };

    for x in rect.x + 1..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
}

/// Write `s` starting at (`x`, `y`), clipped to `clip`. Keeps the cell
/// backgrounds already in the buffer.
fn draw_text(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    s: &str,
    fg: Rgb,
    style: TextStyle,
    clip: Rect,
) {
    if y < clip.y || y >= clip.bottom() {
        return;
    }
    let mut cx = x;
    for ch in s.chars() {
        let w = char_width(ch) as u16;
        if w == 0 {
            continue;
        }
        if cx.saturating_add(w) > clip.right() {
            break;
        }
        if let Some(cell) = buf.get_mut(cx, y) {
            cell.char = ch;
            cell.fg = fg;
            cell.style = style;
            cell.wide_continuation = false;
        }
        for extra in 1..w {
            if let Some(cell) = buf.get_mut(cx + extra, y) {
                cell.char = ' ';
                cell.wide_continuation = true;
            }
        }
        cx += w;
    }
}
