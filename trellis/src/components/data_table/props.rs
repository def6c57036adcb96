use crate::callback::Callback;

use super::column::Column;
use super::record::Record;

/// Caller-owned inputs of a [`DataTable`](super::DataTable), passed to every
/// render and dispatch.
pub struct DataTableProps<'a, T: Record> {
    pub data: &'a [T],
    pub columns: &'a [Column<T>],
    pub selectable: bool,
    /// Rows are replaced by a busy indicator and selection is frozen.
    pub loading: bool,
    pub empty_text: String,
    pub on_row_select: Option<Callback<Vec<T>>>,
}

impl<'a, T: Record> DataTableProps<'a, T> {
    pub fn new(data: &'a [T], columns: &'a [Column<T>]) -> Self {
        Self {
            data,
            columns,
            selectable: false,
            loading: false,
            empty_text: "No data".into(),
            on_row_select: None,
        }
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn on_row_select(mut self, callback: impl Into<Callback<Vec<T>>>) -> Self {
        self.on_row_select = Some(callback.into());
        self
    }
}
