use crate::callback::Callback;
use crate::tokens::{FieldSize, Variant};

use super::state::InputFieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Search => "search",
        }
    }
}

/// What produced a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// Typing or deleting on the control, or a whole-value edit.
    Edit,
    Paste,
    /// The clear affordance.
    Clear,
}

/// Emitted once per edit with the full new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub field: InputFieldId,
    pub value: String,
    pub source: ChangeSource,
}

/// Caller-owned inputs of an [`InputField`](super::InputField).
#[derive(Debug, Clone, Default)]
pub struct InputFieldProps {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub value: String,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub invalid: bool,
    pub disabled: bool,
    pub loading: bool,
    pub clearable: bool,
    pub show_password_toggle: bool,
    pub input_type: InputType,
    pub variant: Variant,
    pub size: FieldSize,
    pub on_change: Option<Callback<ChangeEvent>>,
}

impl InputFieldProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn show_password_toggle(mut self, show: bool) -> Self {
        self.show_password_toggle = show;
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    pub fn on_change(mut self, callback: impl Into<Callback<ChangeEvent>>) -> Self {
        self.on_change = Some(callback.into());
        self
    }

    /// Status line text and whether it is an error.
    ///
    /// An invalid field with an error message shows the message; otherwise
    /// the helper text shows, if any.
    pub fn status_text(&self) -> Option<(&str, bool)> {
        match (&self.error_message, &self.helper_text) {
            (Some(err), _) if self.invalid && !err.is_empty() => Some((err, true)),
            (_, Some(help)) if !help.is_empty() => Some((help, false)),
            _ => None,
        }
    }

    pub(super) fn shows_clear(&self) -> bool {
        self.clearable && !self.disabled && !self.value.is_empty()
    }

    pub(super) fn has_password_toggle(&self) -> bool {
        self.show_password_toggle && self.input_type == InputType::Password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wins_only_when_invalid() {
        let props = InputFieldProps::new()
            .helper_text("We never share it")
            .error_message("Bad email");
        assert_eq!(props.status_text(), Some(("We never share it", false)));

        let props = props.invalid(true);
        assert_eq!(props.status_text(), Some(("Bad email", true)));
    }

    #[test]
    fn invalid_without_message_falls_back_to_helper() {
        let props = InputFieldProps::new().invalid(true).helper_text("hint");
        assert_eq!(props.status_text(), Some(("hint", false)));
        assert_eq!(InputFieldProps::new().invalid(true).status_text(), None);
    }

    #[test]
    fn toggle_needs_password_type() {
        let props = InputFieldProps::new().show_password_toggle(true);
        assert!(!props.has_password_toggle());
        assert!(props.input_type(InputType::Password).has_password_toggle());
    }
}
