use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use trellis_dom::{Size, TextAlign};

/// Column width specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in cells.
    Fixed(u16),
    /// Share of the leftover width, by weight.
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

impl ColumnWidth {
    pub(super) fn size(self) -> Size {
        match self {
            ColumnWidth::Fixed(w) => Size::Fixed(w),
            ColumnWidth::Flex(w) => Size::Flex(w),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Alignment> for TextAlign {
    fn from(align: Alignment) -> Self {
        match align {
            Alignment::Left => TextAlign::Left,
            Alignment::Center => TextAlign::Center,
            Alignment::Right => TextAlign::Right,
        }
    }
}

/// One column of a table over records of type `T`.
pub struct Column<T> {
    /// Unique within a table.
    pub key: String,
    pub title: String,
    /// Field passed to [`Record::field`](super::Record::field).
    pub data_index: String,
    pub sortable: bool,
    pub width: ColumnWidth,
    pub align: Alignment,
    _record: PhantomData<fn(&T)>,
}

impl<T> Column<T> {
    /// Column whose key and data index are both `key`.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            sortable: false,
            width: ColumnWidth::default(),
            align: Alignment::default(),
            _record: PhantomData,
        }
    }

    pub fn data_index(mut self, data_index: impl Into<String>) -> Self {
        self.data_index = data_index.into();
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            data_index: self.data_index.clone(),
            sortable: self.sortable,
            width: self.width,
            align: self.align,
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("data_index", &self.data_index)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .finish()
    }
}

/// Report duplicate column keys. Returns false when a key repeats.
pub(super) fn check_unique_keys<T>(columns: &[Column<T>]) -> bool {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.key.as_str()) {
            log::warn!("duplicate table column key '{}'", column.key);
            debug_assert!(false, "duplicate table column key '{}'", column.key);
            return false;
        }
    }
    true
}
