use trellis_dom::{Element, Size};

use crate::theme::{ThemeMode, TrellisTheme};
use crate::tokens::InputTokens;
use crate::widget::Component;

use super::props::{InputFieldProps, InputType};
use super::state::InputField;

impl InputField {
    /// Build the field: label, framed control with its affordances, and the
    /// status line.
    pub fn render(&self, props: &InputFieldProps, mode: ThemeMode) -> Element {
        let theme = TrellisTheme::for_mode(mode);
        let tokens = InputTokens::resolve(props.variant, props.size, &theme);
        let status = props.status_text();

        let mut control = Element::text_input(props.value.as_str())
            .id(self.control_id())
            .width(Size::Fill)
            .style(tokens.control.clone())
            .style_focused(tokens.control_focused.clone())
            .style_disabled(tokens.control_disabled.clone())
            .disabled(props.disabled)
            .data("role", "textbox")
            .data("type", props.input_type.as_str())
            .data("aria-invalid", props.invalid.to_string())
            .data("aria-disabled", props.disabled.to_string())
            .data("aria-busy", props.loading.to_string());
        if let Some(placeholder) = &props.placeholder {
            control = control.placeholder(placeholder.as_str());
        }
        if let Some(label) = &props.label {
            control = control.data("aria-label", label.as_str());
        }
        if status.is_some() {
            control = control.data("aria-describedby", self.status_id());
        }
        let revealed = props.has_password_toggle() && self.is_password_visible();
        if props.input_type == InputType::Password && !revealed {
            control = control.password();
        }

        let mut frame = Element::row()
            .id(self.frame_id())
            .width(Size::Fill)
            .padding(tokens.padding)
            .gap(1)
            .style(if props.invalid {
                tokens.frame_invalid.clone()
            } else {
                tokens.frame.clone()
            })
            .child(control);

        if props.loading {
            frame = frame.child(
                Element::text("⟳")
                    .id(self.spinner_id())
                    .style(tokens.affordance.clone())
                    .data("role", "status")
                    .data("aria-label", "Loading"),
            );
        }

        if props.shows_clear() {
            frame = frame.child(
                Element::text("✕")
                    .id(self.clear_id())
                    .clickable(true)
                    .focusable(true)
                    .style(tokens.affordance.clone())
                    .style_focused(tokens.affordance_focused.clone())
                    .data("role", "button")
                    .data("aria-label", "Clear"),
            );
        }

        if props.has_password_toggle() {
            let visible = self.is_password_visible();
            frame = frame.child(
                Element::text(if visible { "hide" } else { "show" })
                    .id(self.toggle_id())
                    .clickable(!props.disabled)
                    .focusable(!props.disabled)
                    .disabled(props.disabled)
                    .style(tokens.affordance.clone())
                    .style_focused(tokens.affordance_focused.clone())
                    .style_disabled(tokens.control_disabled.clone())
                    .data("role", "button")
                    .data("aria-label", if visible { "Hide password" } else { "Show password" })
                    .data("aria-pressed", visible.to_string()),
            );
        }

        let mut root = Element::col()
            .id(self.id_string())
            .width(Size::Fixed(tokens.width))
            .data("variant", props.variant.as_str())
            .data("size", props.size.as_str())
            .data("theme", mode.as_str());

        if let Some(label) = &props.label {
            root = root.child(
                Element::text(label.as_str())
                    .id(self.label_id())
                    .style(tokens.label.clone()),
            );
        }
        root = root.child(frame);

        if let Some((text, is_error)) = status {
            root = root.child(
                Element::text(text)
                    .id(self.status_id())
                    .style(if is_error {
                        tokens.error.clone()
                    } else {
                        tokens.helper.clone()
                    })
                    .data("role", if is_error { "alert" } else { "note" }),
            );
        }

        root
    }
}
