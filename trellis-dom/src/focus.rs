use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, find_element_mut, Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and turns raw terminal input
/// into targeted [`Event`]s.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus. Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.step(root, 1)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.step(root, -1)
    }

    fn step(&mut self, root: &Element, delta: isize) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let len = focusable.len() as isize;
        let current = self
            .focused
            .as_ref()
            .and_then(|id| focusable.iter().position(|f| f == id));
        let next = match current {
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
            None if delta >= 0 => 0,
            None => focusable.len() - 1,
        };

        let new_focus = focusable[next].clone();
        if self.focus(&new_focus) {
            Some(new_focus)
        } else {
            None
        }
    }

    /// Drop focus if the focused element is gone or can no longer take focus.
    pub fn validate(&mut self, root: &Element) {
        let still_valid = self
            .focused
            .as_deref()
            .and_then(|id| find_element(root, id))
            .is_some_and(|el| el.focusable && !el.disabled);
        if !still_valid && self.focused.is_some() {
            log::trace!("dropping stale focus {:?}", self.focused);
            self.focused = None;
        }
    }

    /// Mark the focused element in a freshly built tree so styles and the
    /// text cursor follow focus.
    pub fn apply(&self, root: &mut Element) {
        let Some(id) = self.focused.as_deref() else {
            return;
        };
        if let Some(el) = find_element_mut(root, id) {
            el.focused = true;
            if let Content::TextInput { focused, .. } = &mut el.content {
                *focused = true;
            }
        }
    }

    /// Translate one crossterm event into targeted events.
    ///
    /// Tab/BackTab move focus and produce `Blur`/`Focus` pairs. A mouse press
    /// focuses what it lands on and clicks the deepest clickable element.
    pub fn translate(
        &mut self,
        raw: &CrosstermEvent,
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        match raw {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let code = Key::from(key.code);
                let modifiers = Modifiers::from(key.modifiers);
                match code {
                    Key::Tab => self.move_focus(root, 1),
                    Key::BackTab => self.move_focus(root, -1),
                    _ => vec![Event::Key {
                        target: self.focused.clone(),
                        key: code,
                        modifiers,
                    }],
                }
            }
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => {
                    let (x, y) = (mouse.column, mouse.row);
                    let mut events = Vec::new();
                    if let Some(id) = hit_test_focusable(layout, root, x, y) {
                        events.extend(self.focus_events(id));
                    }
                    events.push(Event::Click {
                        target: hit_test(layout, root, x, y),
                        x,
                        y,
                        button: button.into(),
                    });
                    events
                }
                _ => Vec::new(),
            },
            CrosstermEvent::Paste(text) => vec![Event::Paste {
                target: self.focused.clone(),
                text: text.clone(),
            }],
            CrosstermEvent::Resize(width, height) => vec![Event::Resize {
                width: *width,
                height: *height,
            }],
            _ => Vec::new(),
        }
    }

    fn move_focus(&mut self, root: &Element, delta: isize) -> Vec<Event> {
        let previous = self.focused.clone();
        match self.step(root, delta) {
            Some(next) => transition(previous, next),
            None => Vec::new(),
        }
    }

    fn focus_events(&mut self, id: String) -> Vec<Event> {
        let previous = self.focused.clone();
        if self.focus(&id) {
            transition(previous, id)
        } else {
            Vec::new()
        }
    }
}

fn transition(previous: Option<String>, next: String) -> Vec<Event> {
    let mut events = Vec::with_capacity(2);
    if let Some(prev) = previous {
        events.push(Event::Blur { target: prev });
    }
    events.push(Event::Focus { target: next });
    events
}

/// IDs of enabled focusable elements, in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    collect(root, &mut ids);
    ids
}

fn collect(el: &Element, out: &mut Vec<String>) {
    if el.disabled {
        return;
    }
    if el.focusable {
        out.push(el.id.clone());
    }
    for child in el.child_elements() {
        collect(child, out);
    }
}
