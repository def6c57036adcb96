pub mod callback;
pub mod components;
pub mod state;
pub mod theme;
pub mod tokens;
pub mod widget;

pub use trellis_dom;

pub mod prelude {
    pub use crate::callback::Callback;
    pub use crate::components::data_table::{
        ActiveSort, Alignment, Column, ColumnWidth, DataTable, DataTableId, DataTableProps,
        FieldValue, Record, SortDirection,
    };
    pub use crate::components::input_field::{
        ChangeEvent, ChangeSource, InputField, InputFieldId, InputFieldProps, InputType,
    };
    pub use crate::state::State;
    pub use crate::theme::{ThemeMode, TrellisTheme};
    pub use crate::tokens::{FieldSize, Variant};
    pub use crate::widget::{Component, WidgetResult};
}
