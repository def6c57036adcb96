#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Single-line editable text. The value is owned by whoever built the
    /// element; the renderer only displays it.
    TextInput {
        value: String,
        placeholder: Option<String>,
        /// When set, every character of `value` is drawn as this glyph.
        mask: Option<char>,
        focused: bool,
    },
}
