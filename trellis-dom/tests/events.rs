use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton, MouseEvent,
    MouseEventKind,
};
use trellis_dom::{
    collect_focusable, hit_test, layout, Element, Event, FocusState, Key, Rect, Size,
};

fn form() -> Element {
    Element::col()
        .id("root")
        .child(Element::text_input("").id("name").width(Size::Fixed(10)))
        .child(Element::text_input("").id("locked").disabled(true))
        .child(
            Element::row()
                .id("actions")
                .child(Element::text("[ok]").id("ok").clickable(true).focusable(true)),
        )
}

#[test]
fn test_collect_focusable_skips_disabled() {
    assert_eq!(collect_focusable(&form()), vec!["name", "ok"]);
}

#[test]
fn test_tab_cycles_and_wraps() {
    let root = form();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("name".to_string()));
    assert_eq!(focus.focus_next(&root), Some("ok".to_string()));
    assert_eq!(focus.focus_next(&root), Some("name".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("ok".to_string()));
}

#[test]
fn test_translate_tab_emits_blur_then_focus() {
    let root = form();
    let result = layout(&root, Rect::from_size(20, 5));
    let mut focus = FocusState::new();
    focus.focus("name");

    let tab = CtEvent::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    let events = focus.translate(&tab, &root, &result);

    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "name".into()
            },
            Event::Focus {
                target: "ok".into()
            },
        ]
    );
}

#[test]
fn test_translate_key_targets_focused_element() {
    let root = form();
    let result = layout(&root, Rect::from_size(20, 5));
    let mut focus = FocusState::new();
    focus.focus("name");

    let key = CtEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    assert_eq!(
        focus.translate(&key, &root, &result),
        vec![Event::key("name", Key::Char('a'))]
    );
}

#[test]
fn test_mouse_press_focuses_and_clicks() {
    let root = form();
    let result = layout(&root, Rect::from_size(20, 5));
    let ok = *result.get("ok").expect("ok laid out");
    assert_eq!(hit_test(&result, &root, ok.x, ok.y), Some("ok".to_string()));

    let mut focus = FocusState::new();
    let press = CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtButton::Left),
        column: ok.x,
        row: ok.y,
        modifiers: KeyModifiers::NONE,
    });
    let events = focus.translate(&press, &root, &result);

    assert_eq!(focus.focused(), Some("ok"));
    assert!(matches!(
        events.last(),
        Some(Event::Click { target: Some(t), .. }) if t == "ok"
    ));
}

#[test]
fn test_apply_marks_focused_input() {
    let mut root = form();
    let mut focus = FocusState::new();
    focus.focus("name");
    focus.apply(&mut root);

    let name = trellis_dom::find_element(&root, "name").expect("name exists");
    assert!(name.focused);
    assert!(matches!(
        name.content,
        trellis_dom::Content::TextInput { focused: true, .. }
    ));
}

#[test]
fn test_validate_drops_focus_on_disabled_element() {
    let mut focus = FocusState::new();
    focus.focus("locked");
    focus.validate(&form());
    assert_eq!(focus.focused(), None);
}
