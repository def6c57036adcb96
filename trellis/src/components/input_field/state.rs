//! InputField instance state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::widget::Component;

/// Unique identifier for an InputField instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputFieldId(usize);

impl InputFieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

#[derive(Debug, Default)]
pub(super) struct InputInner {
    pub password_visible: bool,
}

/// A controlled text field.
///
/// Holds no value. Pass the current value in [`InputFieldProps`] on every
/// render and store what `on_change` reports.
///
/// [`InputFieldProps`]: super::InputFieldProps
#[derive(Debug, Clone)]
pub struct InputField {
    id: InputFieldId,
    pub(super) inner: Arc<RwLock<InputInner>>,
    pub(super) dirty: Arc<AtomicBool>,
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField {
    pub fn new() -> Self {
        Self {
            id: InputFieldId::new(),
            inner: Arc::new(RwLock::new(InputInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> InputFieldId {
        self.id
    }

    /// Whether a password value is currently shown unmasked.
    pub fn is_password_visible(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.password_visible)
            .unwrap_or(false)
    }

    pub fn label_id(&self) -> String {
        format!("{}-label", self.id)
    }

    pub fn frame_id(&self) -> String {
        format!("{}-frame", self.id)
    }

    /// The text input element that receives keystrokes and pastes.
    pub fn control_id(&self) -> String {
        format!("{}-control", self.id)
    }

    pub fn spinner_id(&self) -> String {
        format!("{}-spinner", self.id)
    }

    pub fn clear_id(&self) -> String {
        format!("{}-clear", self.id)
    }

    pub fn toggle_id(&self) -> String {
        format!("{}-toggle", self.id)
    }

    pub fn status_id(&self) -> String {
        format!("{}-status", self.id)
    }
}

impl Component for InputField {
    fn id_string(&self) -> String {
        self.id.to_string()
    }

    fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
