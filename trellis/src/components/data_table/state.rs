//! Table instance state.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::widget::{Component, WidgetResult};

use super::props::DataTableProps;
use super::record::Record;
use super::selection::{SelectAllState, Selection};
use super::sort::{ActiveSort, effective_sort, next_sort, sort_order};

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataTableId(usize);

impl DataTableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DataTableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

pub(super) struct TableInner<K: Clone + Eq + std::hash::Hash> {
    pub sort: Option<ActiveSort>,
    pub selection: Selection<K>,
}

/// A sortable, selectable table over caller-owned records.
///
/// The table never stores rows. It keeps the active sort and the ids of
/// selected rows; everything else arrives through [`DataTableProps`].
pub struct DataTable<T: Record> {
    id: DataTableId,
    pub(super) inner: Arc<RwLock<TableInner<T::Id>>>,
    pub(super) dirty: Arc<AtomicBool>,
}

impl<T: Record> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("sort", &self.sort())
            .finish_non_exhaustive()
    }
}

impl<T: Record> Default for DataTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Record> DataTable<T> {
    pub fn new() -> Self {
        Self {
            id: DataTableId::new(),
            inner: Arc::new(RwLock::new(TableInner {
                sort: None,
                selection: Selection::new(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start sorted by a column.
    pub fn with_sort(self, sort: ActiveSort) -> Self {
        self.set_sort(Some(sort));
        self
    }

    pub fn id(&self) -> DataTableId {
        self.id
    }

    pub fn sort(&self) -> Option<ActiveSort> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    pub fn set_sort(&self, sort: Option<ActiveSort>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort = sort;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Element ids
    // -------------------------------------------------------------------------

    pub fn header_id(&self) -> String {
        format!("{}-header", self.id)
    }

    pub fn header_cell_id(&self, column_key: &str) -> String {
        format!("{}-col-{}", self.id, column_key)
    }

    pub fn select_all_id(&self) -> String {
        format!("{}-select-all", self.id)
    }

    pub fn body_id(&self) -> String {
        format!("{}-body", self.id)
    }

    pub fn empty_id(&self) -> String {
        format!("{}-empty", self.id)
    }

    pub fn loading_id(&self) -> String {
        format!("{}-loading", self.id)
    }

    pub fn row_id(&self, record_id: &T::Id) -> String {
        format!("{}-row-{}", self.id, record_id)
    }

    pub fn row_checkbox_id(&self, record_id: &T::Id) -> String {
        format!("{}-check-{}", self.id, record_id)
    }

    /// Cell ids lead with the column position so no record id can forge one.
    pub fn cell_id(&self, record_id: &T::Id, column_index: usize) -> String {
        format!("{}-cell-{}-{}", self.id, column_index, record_id)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Indices into `props.data` in display order.
    pub fn display_order(&self, props: &DataTableProps<'_, T>) -> Vec<usize> {
        let sort = self.sort();
        sort_order(props.data, effective_sort(sort.as_ref(), props.columns))
    }

    /// Records in display order.
    pub fn rows<'a>(&self, props: &DataTableProps<'a, T>) -> Vec<&'a T> {
        let data = props.data;
        self.display_order(props)
            .into_iter()
            .map(|i| &data[i])
            .collect()
    }

    /// Selected records in display order.
    pub fn selected(&self, props: &DataTableProps<'_, T>) -> Vec<T> {
        self.prune(props.data);
        let order = self.display_order(props);
        let Ok(guard) = self.inner.read() else {
            return Vec::new();
        };
        order
            .into_iter()
            .map(|i| &props.data[i])
            .filter(|r| guard.selection.is_selected(&r.id()))
            .cloned()
            .collect()
    }

    pub fn is_selected(&self, record_id: &T::Id) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(record_id))
            .unwrap_or(false)
    }

    pub(super) fn select_all_state(&self, data: &[T]) -> SelectAllState {
        let ids: Vec<T::Id> = data.iter().map(Record::id).collect();
        self.inner
            .read()
            .map(|g| g.selection.coverage(&ids))
            .unwrap_or(SelectAllState::None)
    }

    /// Forget selected ids that are no longer in `data`.
    pub(super) fn prune(&self, data: &[T]) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        if guard.selection.is_empty() {
            return;
        }
        let present: HashSet<T::Id> = data.iter().map(Record::id).collect();
        let dropped = guard.selection.retain_present(&present);
        if dropped > 0 {
            log::debug!("{}: dropped {dropped} stale selected rows", self.id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Advance the sort cycle for a header click.
    pub fn click_header(&self, props: &DataTableProps<'_, T>, column_key: &str) -> WidgetResult {
        let sortable = props
            .columns
            .iter()
            .any(|c| c.key == column_key && c.sortable);
        if !sortable {
            log::trace!("{}: header '{column_key}' is not sortable", self.id);
            return WidgetResult::Ignored;
        }

        let Ok(mut guard) = self.inner.write() else {
            return WidgetResult::Ignored;
        };
        // A sort on a column that no longer applies reads as unsorted.
        let applies = effective_sort(guard.sort.as_ref(), props.columns).is_some();
        let current = if applies { guard.sort.as_ref() } else { None };
        let next = next_sort(current, column_key);
        log::debug!("{}: sort {:?} -> {:?}", self.id, guard.sort, next);
        guard.sort = next;
        drop(guard);

        self.dirty.store(true, Ordering::SeqCst);
        WidgetResult::Sorted
    }

    /// Toggle one row and report the selection.
    pub fn toggle_row(&self, props: &DataTableProps<'_, T>, record_id: &T::Id) -> WidgetResult {
        if !self.selection_enabled(props) {
            return WidgetResult::Ignored;
        }
        if !props.data.iter().any(|r| &r.id() == record_id) {
            log::trace!("{}: no row with id {record_id}", self.id);
            return WidgetResult::Ignored;
        }
        self.prune(props.data);

        let Ok(mut guard) = self.inner.write() else {
            return WidgetResult::Ignored;
        };
        let now = guard.selection.toggle(record_id.clone());
        log::debug!("{}: row {record_id} selected={now}", self.id);
        drop(guard);

        self.emit_selection(props);
        WidgetResult::Selected
    }

    /// Select every row, or clear the selection when every row is already
    /// selected.
    pub fn toggle_all(&self, props: &DataTableProps<'_, T>) -> WidgetResult {
        if !self.selection_enabled(props) {
            return WidgetResult::Ignored;
        }
        self.prune(props.data);
        let state = self.select_all_state(props.data);

        let Ok(mut guard) = self.inner.write() else {
            return WidgetResult::Ignored;
        };
        if state == SelectAllState::All {
            guard.selection.clear();
        } else {
            for record in props.data {
                guard.selection.insert(record.id());
            }
        }
        log::debug!(
            "{}: select all -> {} of {} rows",
            self.id,
            guard.selection.len(),
            props.data.len()
        );
        drop(guard);

        self.emit_selection(props);
        WidgetResult::Selected
    }

    fn selection_enabled(&self, props: &DataTableProps<'_, T>) -> bool {
        if !props.selectable {
            log::trace!("{}: selection ignored, table is not selectable", self.id);
            return false;
        }
        if props.loading {
            log::trace!("{}: selection ignored while loading", self.id);
            return false;
        }
        true
    }

    /// Report the selection to the caller. Runs with no lock held.
    fn emit_selection(&self, props: &DataTableProps<'_, T>) {
        self.dirty.store(true, Ordering::SeqCst);
        if let Some(callback) = &props.on_row_select {
            callback.emit(self.selected(props));
        }
    }
}

impl<T: Record> Component for DataTable<T> {
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
