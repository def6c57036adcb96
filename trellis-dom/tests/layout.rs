use trellis_dom::layout::intrinsic_size;
use trellis_dom::{layout, Border, Edges, Element, Rect, Size, Style};

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .gap(1)
        .child(Element::text("first").id("a"))
        .child(Element::text("second").id("b"));

    let result = layout(&root, Rect::from_size(40, 10));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 40, 10)));
    assert_eq!(result.get("a"), Some(&Rect::new(0, 0, 5, 1)));
    // gap of one row between children
    assert_eq!(result.get("b"), Some(&Rect::new(0, 2, 6, 1)));
}

#[test]
fn test_row_shares_leftover_width_by_weight() {
    let root = Element::row()
        .id("root")
        .child(Element::text("xx").id("fixed").width(Size::Fixed(4)))
        .child(Element::text("a").id("one").width(Size::Flex(1)))
        .child(Element::text("b").id("two").width(Size::Flex(2)));

    let result = layout(&root, Rect::from_size(16, 1));

    assert_eq!(result.get("fixed"), Some(&Rect::new(0, 0, 4, 1)));
    assert_eq!(result.get("one"), Some(&Rect::new(4, 0, 4, 1)));
    assert_eq!(result.get("two"), Some(&Rect::new(8, 0, 8, 1)));
}

#[test]
fn test_border_and_padding_shrink_content() {
    let root = Element::col()
        .id("root")
        .style(Style::new().border(Border::Single))
        .padding(Edges::horizontal(1))
        .child(Element::text("hi").id("inner"));

    let result = layout(&root, Rect::from_size(20, 5));
    assert_eq!(result.get("inner"), Some(&Rect::new(2, 1, 2, 1)));

    // 2 for text, 2 for padding, 2 for border; 1 line plus 2 border rows
    assert_eq!(intrinsic_size(&root), (6, 3));
}

#[test]
fn test_text_input_intrinsic_width_covers_placeholder_and_cursor() {
    let input = Element::text_input("ab").placeholder("longer hint");
    assert_eq!(intrinsic_size(&input), (12, 1));
}

#[test]
fn test_fill_child_in_column_takes_remaining_height() {
    let root = Element::col()
        .id("root")
        .child(Element::text("header").id("header"))
        .child(Element::col().id("body").height(Size::Fill));

    let result = layout(&root, Rect::from_size(10, 8));
    assert_eq!(result.get("body"), Some(&Rect::new(0, 1, 10, 7)));
}
