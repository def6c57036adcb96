//! Flow layout: columns stack their children, rows share width.
//!
//! `Fixed` sizes are exact, `Auto` uses the element's intrinsic size, and
//! `Fill`/`Flex` children split whatever the container has left by weight.

mod flow;
mod rect;

use std::collections::HashMap;

pub use flow::{intrinsic_size, layout};
pub use rect::Rect;

/// Element ID to screen rectangle, produced by [`layout`].
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
