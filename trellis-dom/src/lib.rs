//! Retained element tree for terminal widgets.
//!
//! Widgets build an [`Element`] tree every frame. The tree is laid out into
//! rectangles, drawn into a [`Buffer`], and flushed to the terminal as a diff
//! against the previous frame.

pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_by_data, find_element, find_element_mut, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{layout, LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;
