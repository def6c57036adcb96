//! Generic data table.
//!
//! Rows come from the caller each render through [`DataTableProps`]; the
//! table keeps only its sort state and selected row ids. Sorting cycles
//! ascending, descending, unsorted per column and is stable. Selection is
//! reported through `on_row_select` in display order.

mod column;
mod events;
mod props;
mod record;
mod render;
mod selection;
mod sort;
mod state;

pub use column::{Alignment, Column, ColumnWidth};
pub use props::DataTableProps;
pub use record::{FieldValue, Record, compare_fields};
pub use selection::{SelectAllState, Selection};
pub use sort::{ActiveSort, SortDirection, effective_sort, next_sort, sort_order};
pub use state::{DataTable, DataTableId};
