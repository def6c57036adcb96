//! Controlled single-line input field.
//!
//! The caller owns the value and every flag; the field only remembers
//! whether a password is currently shown in clear text. Each edit is
//! reported through `on_change` with the full new value and the caller
//! decides what to store.

mod events;
mod props;
mod render;
mod state;

pub use props::{ChangeEvent, ChangeSource, InputFieldProps, InputType};
pub use state::{InputField, InputFieldId};
