//! Event routing for the DataTable.

use trellis_dom::Event;

use crate::widget::{Component, WidgetResult};

use super::props::DataTableProps;
use super::record::Record;
use super::state::DataTable;

impl<T: Record> DataTable<T> {
    /// Route a targeted event to the header, select-all box or a row.
    ///
    /// Clicks and Enter/Space on a focused affordance activate it; everything
    /// else is ignored.
    pub fn dispatch(&self, props: &DataTableProps<'_, T>, event: &Event) -> WidgetResult {
        let Some(target) = event.target() else {
            return WidgetResult::Ignored;
        };
        if !self.owns(target) {
            return WidgetResult::Ignored;
        }

        let activated = match event {
            Event::Click { .. } => true,
            Event::Key { key, modifiers, .. } => key.is_activation() && !modifiers.ctrl,
            _ => false,
        };
        if !activated {
            return WidgetResult::Ignored;
        }

        self.prune(props.data);

        if target == self.select_all_id() {
            return self.toggle_all(props);
        }

        if let Some(column) = props
            .columns
            .iter()
            .find(|c| target == self.header_cell_id(&c.key))
        {
            return self.click_header(props, &column.key);
        }

        for record in props.data {
            let id = record.id();
            if target == self.row_id(&id) || target == self.row_checkbox_id(&id) {
                return self.toggle_row(props, &id);
            }
        }

        WidgetResult::Ignored
    }
}
