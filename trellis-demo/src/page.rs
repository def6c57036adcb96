//! The demo page: every input field configuration and a selectable users
//! table, composed from caller-owned state.

use email_address::EmailAddress;
use trellis::prelude::*;
use trellis::trellis_dom::{Edges, Element, Event, Size, Style};

use crate::sample::{User, user_columns};

pub const THEME_BUTTON: &str = "theme-toggle";

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Ignored,
    Handled,
    ToggleTheme,
}

pub struct DemoPage {
    users: Vec<User>,
    columns: Vec<Column<User>>,

    email: State<String>,
    password: State<String>,
    small: State<String>,
    medium: State<String>,
    large: State<String>,
    selected: State<Vec<User>>,

    email_field: InputField,
    invalid_field: InputField,
    disabled_field: InputField,
    loading_field: InputField,
    small_field: InputField,
    medium_field: InputField,
    large_field: InputField,
    password_field: InputField,
    table: DataTable<User>,
}

/// Callback that stores every change into `state`.
fn bind(state: &State<String>) -> Callback<ChangeEvent> {
    let state = state.clone();
    Callback::new(move |ev: ChangeEvent| state.set(ev.value))
}

impl DemoPage {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            columns: user_columns(),
            email: State::default(),
            password: State::default(),
            small: State::default(),
            medium: State::default(),
            large: State::default(),
            selected: State::default(),
            email_field: InputField::new(),
            invalid_field: InputField::new(),
            disabled_field: InputField::new(),
            loading_field: InputField::new(),
            small_field: InputField::new(),
            medium_field: InputField::new(),
            large_field: InputField::new(),
            password_field: InputField::new(),
            table: DataTable::new(),
        }
    }

    fn email_is_invalid(&self) -> bool {
        self.email
            .with(|email| !email.is_empty() && !EmailAddress::is_valid(email))
    }

    /// Left column of fields, then right column.
    fn fields(&self) -> [Vec<(&InputField, InputFieldProps)>; 2] {
        let email = self.email.get();
        let left = vec![
            (
                &self.email_field,
                InputFieldProps::new()
                    .label("Email")
                    .placeholder("you@domain.com")
                    .value(email.as_str())
                    .helper_text("We'll keep your email safe.")
                    .clearable(true)
                    .input_type(InputType::Email)
                    .on_change(bind(&self.email)),
            ),
            (
                &self.invalid_field,
                InputFieldProps::new()
                    .label("Invalid Email")
                    .placeholder("you@domain.com")
                    .value(email.as_str())
                    .invalid(self.email_is_invalid())
                    .error_message("Please enter a valid email address.")
                    .helper_text("Shares its value with the field above.")
                    .input_type(InputType::Email)
                    .on_change(bind(&self.email)),
            ),
            (
                &self.disabled_field,
                InputFieldProps::new()
                    .label("Disabled")
                    .placeholder("Disabled input")
                    .value("Can't edit me")
                    .disabled(true)
                    .helper_text("This field is disabled.")
                    .variant(Variant::Filled),
            ),
            (
                &self.loading_field,
                InputFieldProps::new()
                    .label("Loading")
                    .placeholder("Fetching...")
                    .value("Loading state")
                    .loading(true)
                    .helper_text("Simulating async validation…")
                    .variant(Variant::Ghost),
            ),
        ];
        let right = vec![
            (
                &self.small_field,
                InputFieldProps::new()
                    .label("Small")
                    .placeholder("sm")
                    .value(self.small.get())
                    .size(FieldSize::Sm)
                    .on_change(bind(&self.small)),
            ),
            (
                &self.medium_field,
                InputFieldProps::new()
                    .label("Medium")
                    .placeholder("md")
                    .value(self.medium.get())
                    .variant(Variant::Filled)
                    .on_change(bind(&self.medium)),
            ),
            (
                &self.large_field,
                InputFieldProps::new()
                    .label("Large")
                    .placeholder("lg")
                    .value(self.large.get())
                    .size(FieldSize::Lg)
                    .variant(Variant::Ghost)
                    .on_change(bind(&self.large)),
            ),
            (
                &self.password_field,
                InputFieldProps::new()
                    .label("Password")
                    .placeholder("••••••••")
                    .value(self.password.get())
                    .input_type(InputType::Password)
                    .show_password_toggle(true)
                    .helper_text("Use at least 8 characters.")
                    .on_change(bind(&self.password)),
            ),
        ];
        [left, right]
    }

    fn table_props(&self) -> DataTableProps<'_, User> {
        let selected = self.selected.clone();
        DataTableProps::new(&self.users, &self.columns)
            .selectable(true)
            .empty_text("No users")
            .on_row_select(move |rows: Vec<User>| selected.set(rows))
    }

    pub fn selected_line(&self) -> String {
        let names = self.selected.with(|rows| {
            rows.iter()
                .map(|u| u.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        });
        format!("Selected: {names}")
    }

    pub fn render(&self, mode: ThemeMode) -> Element {
        let theme = TrellisTheme::for_mode(mode);
        let heading = Style::new().foreground(theme.text.primary.clone()).bold();
        let muted = Style::new().foreground(theme.text.muted.clone());

        let [left, right] = self.fields();
        let column = |fields: Vec<(&InputField, InputFieldProps)>| {
            Element::col()
                .gap(1)
                .children(fields.iter().map(|(field, props)| field.render(props, mode)))
        };

        let other = match mode {
            ThemeMode::Light => "Dark",
            ThemeMode::Dark => "Light",
        };
        let header = Element::row()
            .id("demo-header")
            .width(Size::Fill)
            .gap(2)
            .child(
                Element::text("Component Demo")
                    .width(Size::Fill)
                    .style(heading.clone()),
            )
            .child(
                Element::text(format!("[ Change Theme {other} ]"))
                    .id(THEME_BUTTON)
                    .clickable(true)
                    .focusable(true)
                    .style(Style::new().foreground(theme.accent.clone()))
                    .style_focused(Style::new().foreground(theme.accent.clone()).bold().underline())
                    .data("role", "button")
                    .data("aria-pressed", (mode == ThemeMode::Dark).to_string()),
            );

        Element::col()
            .id("demo")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::symmetric(0, 1))
            .gap(1)
            .style(
                Style::new()
                    .background(theme.background.clone())
                    .foreground(theme.text.primary.clone()),
            )
            .child(header)
            .child(Element::text("InputField Demo").style(heading.clone()))
            .child(
                Element::row()
                    .id("demo-fields")
                    .gap(4)
                    .child(column(left))
                    .child(column(right)),
            )
            .child(Element::text("DataTable Demo").style(heading))
            .child(self.table.render(&self.table_props(), mode))
            .child(Element::text(self.selected_line()).id("demo-selected"))
            .child(
                Element::text("Tab focus · Enter/Space activate · Ctrl-T theme · Esc quit")
                    .style(muted),
            )
    }

    pub fn dispatch(&self, event: &Event) -> PageAction {
        if event.target() == Some(THEME_BUTTON) {
            let activated = match event {
                Event::Click { .. } => true,
                Event::Key { key, .. } => key.is_activation(),
                _ => false,
            };
            return if activated {
                PageAction::ToggleTheme
            } else {
                PageAction::Ignored
            };
        }

        for (field, props) in self.fields().iter().flatten() {
            if field.dispatch(props, event).is_handled() {
                return PageAction::Handled;
            }
        }

        if self.table.dispatch(&self.table_props(), event).is_handled() {
            return PageAction::Handled;
        }
        PageAction::Ignored
    }

    /// Whether any caller state or component changed since the last call.
    pub fn take_dirty(&self) -> bool {
        let states = [
            self.email.take_dirty(),
            self.password.take_dirty(),
            self.small.take_dirty(),
            self.medium.take_dirty(),
            self.large.take_dirty(),
            self.selected.take_dirty(),
        ];
        let fields = [self.password_field.is_dirty(), self.table.is_dirty()];
        self.password_field.clear_dirty();
        self.table.clear_dirty();
        states.into_iter().chain(fields).any(|d| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::load_users;
    use trellis::trellis_dom::{Key, find_element};

    fn page() -> DemoPage {
        DemoPage::new(load_users().expect("bundled users"))
    }

    #[test]
    fn typing_updates_both_email_fields() {
        let page = page();
        for c in "bob@".chars() {
            let ev = Event::key(page.email_field.control_id(), Key::Char(c));
            assert_eq!(page.dispatch(&ev), PageAction::Handled);
        }
        assert_eq!(page.email.get(), "bob@");
        assert!(page.email_is_invalid());

        let root = page.render(ThemeMode::Light);
        let invalid = find_element(&root, &page.invalid_field.control_id()).expect("rendered");
        assert_eq!(invalid.text_content(), Some("bob@"));
        assert_eq!(invalid.get_data("aria-invalid"), Some("true"));

        for c in "test.com".chars() {
            page.dispatch(&Event::key(page.invalid_field.control_id(), Key::Char(c)));
        }
        assert!(!page.email_is_invalid());
    }

    #[test]
    fn dirty_flag_clears_after_it_is_taken() {
        let page = page();
        let _ = page.render(ThemeMode::Light);
        assert!(!page.take_dirty());

        page.dispatch(&Event::key(page.password_field.toggle_id(), Key::Enter));
        assert!(page.take_dirty());
        assert!(!page.take_dirty());

        page.dispatch(&Event::key(page.email_field.control_id(), Key::Char('x')));
        assert!(page.take_dirty());
        assert!(!page.take_dirty());
    }

    #[test]
    fn disabled_field_ignores_typing() {
        let page = page();
        let ev = Event::key(page.disabled_field.control_id(), Key::Char('x'));
        assert_eq!(page.dispatch(&ev), PageAction::Ignored);
        assert!(!page.take_dirty());
    }

    #[test]
    fn selecting_rows_updates_selected_line() {
        let page = page();
        page.dispatch(&Event::click(page.table.row_id(&2)));
        page.dispatch(&Event::click(page.table.row_id(&1)));
        assert_eq!(page.selected_line(), "Selected: Alice, Bob");
        assert!(page.take_dirty());

        page.dispatch(&Event::click(page.table.header_cell_id("age")));
        page.dispatch(&Event::click(page.table.header_cell_id("age")));
        page.dispatch(&Event::click(page.table.row_id(&3)));
        assert_eq!(page.selected_line(), "Selected: Bob, Carol, Alice");
    }

    #[test]
    fn theme_button_requests_toggle() {
        let page = page();
        assert_eq!(page.dispatch(&Event::click(THEME_BUTTON)), PageAction::ToggleTheme);
        assert_eq!(
            page.dispatch(&Event::key(THEME_BUTTON, Key::Enter)),
            PageAction::ToggleTheme
        );
        let root = page.render(ThemeMode::Dark);
        let button = find_element(&root, THEME_BUTTON).expect("rendered");
        assert_eq!(button.text_content(), Some("[ Change Theme Light ]"));
    }
}
