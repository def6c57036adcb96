//! Shared widget plumbing.
//!
//! Components render into a `trellis_dom::Element` tree and receive
//! targeted `trellis_dom::Event`s back from the host. Every affordance a
//! component draws carries an element id prefixed with the component's own
//! id, so a host can hand an event to each component and let the owner act
//! on it.

/// Result of a component handling an input event.
///
/// Tells the host what happened so it can decide whether to re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetResult {
    /// Event was not handled by this component.
    #[default]
    Ignored,
    /// Event was handled but no semantic action occurred.
    Handled,
    /// A change event was emitted to the caller.
    Changed,
    /// Internal display state flipped (password visibility).
    Toggled,
    /// Sort state of a table changed.
    Sorted,
    /// Row selection changed and was reported to the caller.
    Selected,
}

impl WidgetResult {
    /// Check if the event was handled (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, WidgetResult::Ignored)
    }
}

/// Identity and redraw bookkeeping shared by all components.
pub trait Component {
    /// Element id of the component root; affordance ids start with it.
    fn id_string(&self) -> String;

    /// Whether `element_id` belongs to this component instance.
    fn owns(&self, element_id: &str) -> bool {
        let id = self.id_string();
        element_id
            .strip_prefix(id.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
    }

    /// Check if internal UI state changed since the last `clear_dirty`.
    fn is_dirty(&self) -> bool;

    fn clear_dirty(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fake;

    impl Component for Fake {
        fn id_string(&self) -> String {
            "__input_1".into()
        }

        fn is_dirty(&self) -> bool {
            false
        }

        fn clear_dirty(&self) {}
    }

    #[test]
    fn owns_matches_whole_id_segments() {
        assert!(Fake.owns("__input_1"));
        assert!(Fake.owns("__input_1-control"));
        assert!(!Fake.owns("__input_10-control"));
        assert!(!Fake.owns("__table_1"));
    }
}
