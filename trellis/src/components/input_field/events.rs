//! Edits and affordance activation for the InputField.

use std::sync::atomic::Ordering;

use trellis_dom::{Event, Key, Modifiers};

use crate::widget::{Component, WidgetResult};

use super::props::{ChangeEvent, ChangeSource, InputFieldProps};
use super::state::InputField;

impl InputField {
    /// Handle a keystroke on the control.
    ///
    /// Printable characters append, Backspace drops the last character.
    /// Each edit emits exactly one change event.
    pub fn key(&self, props: &InputFieldProps, key: Key, modifiers: Modifiers) -> WidgetResult {
        if modifiers.ctrl || modifiers.alt {
            return WidgetResult::Ignored;
        }
        let mut value = props.value.clone();
        match key {
            Key::Char(c) if !c.is_control() => value.push(c),
            Key::Backspace => {
                if value.pop().is_none() {
                    return WidgetResult::Ignored;
                }
            }
            _ => return WidgetResult::Ignored,
        }
        self.emit(props, value, ChangeSource::Edit)
    }

    /// Replace the whole value.
    pub fn edit(&self, props: &InputFieldProps, value: impl Into<String>) -> WidgetResult {
        self.emit(props, value.into(), ChangeSource::Edit)
    }

    /// Insert pasted text at the end of the value.
    pub fn paste(&self, props: &InputFieldProps, text: &str) -> WidgetResult {
        // Single-line control: line breaks become spaces.
        let text: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .filter(|c| !c.is_control())
            .collect();
        let value = format!("{}{}", props.value, text);
        self.emit(props, value, ChangeSource::Paste)
    }

    /// Emit an empty value. Always emits while clearable and enabled, even
    /// when the value is already empty.
    pub fn clear(&self, props: &InputFieldProps) -> WidgetResult {
        if !props.clearable {
            return WidgetResult::Ignored;
        }
        self.emit(props, String::new(), ChangeSource::Clear)
    }

    /// Flip password visibility. Inert unless the field is an enabled
    /// password field with the toggle turned on.
    pub fn toggle_password(&self, props: &InputFieldProps) -> WidgetResult {
        if !props.has_password_toggle() {
            return WidgetResult::Ignored;
        }
        if props.disabled {
            log::trace!("{}: password toggle ignored while disabled", self.id());
            return WidgetResult::Ignored;
        }
        let Ok(mut guard) = self.inner.write() else {
            return WidgetResult::Ignored;
        };
        guard.password_visible = !guard.password_visible;
        log::debug!("{}: password visible={}", self.id(), guard.password_visible);
        drop(guard);

        self.dirty.store(true, Ordering::SeqCst);
        WidgetResult::Toggled
    }

    /// Route a targeted event to the control or an affordance.
    pub fn dispatch(&self, props: &InputFieldProps, event: &Event) -> WidgetResult {
        let Some(target) = event.target() else {
            return WidgetResult::Ignored;
        };
        if !self.owns(target) {
            return WidgetResult::Ignored;
        }

        let control = target == self.control_id();
        let clear = target == self.clear_id();
        let toggle = target == self.toggle_id();

        match event {
            Event::Key { key, modifiers, .. } if control => self.key(props, *key, *modifiers),
            Event::Paste { text, .. } if control => self.paste(props, text),
            Event::Click { .. } if clear => self.clear(props),
            Event::Click { .. } if toggle => self.toggle_password(props),
            Event::Key { key, modifiers, .. } if key.is_activation() && !modifiers.ctrl => {
                if clear {
                    self.clear(props)
                } else if toggle {
                    self.toggle_password(props)
                } else {
                    WidgetResult::Ignored
                }
            }
            Event::Focus { .. } | Event::Blur { .. } => WidgetResult::Handled,
            _ => WidgetResult::Ignored,
        }
    }

    fn emit(&self, props: &InputFieldProps, value: String, source: ChangeSource) -> WidgetResult {
        if props.disabled {
            log::trace!("{}: {source:?} ignored while disabled", self.id());
            return WidgetResult::Ignored;
        }
        if let Some(callback) = &props.on_change {
            callback.emit(ChangeEvent {
                field: self.id(),
                value,
                source,
            });
        }
        WidgetResult::Changed
    }
}
