//! Element tree for the DataTable.

use trellis_dom::{Edges, Element, Size};

use crate::theme::{ThemeMode, TrellisTheme};
use crate::tokens::TableTokens;
use crate::widget::Component;

use super::column::{Column, check_unique_keys};
use super::props::DataTableProps;
use super::record::Record;
use super::sort::effective_sort;
use super::state::DataTable;

const CHECKBOX_WIDTH: u16 = 3;

impl<T: Record> DataTable<T> {
    /// Build the table for the current props.
    pub fn render(&self, props: &DataTableProps<'_, T>, mode: ThemeMode) -> Element {
        check_unique_keys(props.columns);
        self.prune(props.data);

        let theme = TrellisTheme::for_mode(mode);
        let tokens = TableTokens::resolve(&theme);

        let body = if props.loading {
            Element::col()
                .id(self.body_id())
                .width(Size::Fill)
                .child(
                    Element::text("Loading…")
                        .id(self.loading_id())
                        .style(tokens.placeholder.clone())
                        .data("role", "status"),
                )
        } else if props.data.is_empty() {
            Element::col()
                .id(self.body_id())
                .width(Size::Fill)
                .child(
                    Element::text(props.empty_text.as_str())
                        .id(self.empty_id())
                        .style(tokens.placeholder.clone())
                        .data("role", "status")
                        .data("empty", "true"),
                )
        } else {
            let rows = self
                .rows(props)
                .into_iter()
                .map(|record| self.render_row(props, record, &tokens));
            Element::col()
                .id(self.body_id())
                .width(Size::Fill)
                .data("role", "rowgroup")
                .children(rows)
        };

        Element::col()
            .id(self.id_string())
            .width(Size::Fill)
            .style(tokens.table.clone())
            .data("role", "table")
            .data("theme", mode.as_str())
            .data("aria-busy", props.loading.to_string())
            .data("aria-multiselectable", props.selectable.to_string())
            .child(self.render_header(props, &tokens))
            .child(body)
    }

    fn render_header(&self, props: &DataTableProps<'_, T>, tokens: &TableTokens) -> Element {
        let mut header = Element::row()
            .id(self.header_id())
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .gap(1)
            .style(tokens.header.clone())
            .data("role", "row");

        if props.selectable {
            let state = self.select_all_state(props.data);
            header = header.child(
                Element::text(state.glyph())
                    .id(self.select_all_id())
                    .width(Size::Fixed(CHECKBOX_WIDTH))
                    .clickable(true)
                    .focusable(true)
                    .disabled(props.loading)
                    .style_focused(tokens.checkbox_focused.clone())
                    .data("role", "checkbox")
                    .data("aria-label", "Select all rows")
                    .data("aria-checked", state.as_aria()),
            );
        }

        let sort = self.sort();
        let active = effective_sort(sort.as_ref(), props.columns);
        for column in props.columns {
            let direction = active
                .filter(|(c, _)| c.key == column.key)
                .map(|(_, d)| d);
            let title = match direction {
                Some(d) => format!("{} {}", column.title, d.indicator()),
                None => column.title.clone(),
            };
            let mut cell = Element::text(title)
                .id(self.header_cell_id(&column.key))
                .width(column.width.size())
                .text_align(column.align.into())
                .data("role", "columnheader")
                .data("column", column.key.as_str());
            if column.sortable {
                cell = cell
                    .clickable(true)
                    .focusable(true)
                    .style_focused(tokens.header_focused.clone())
                    .data("aria-sort", direction.map_or("none", |d| d.as_aria()));
            }
            header = header.child(cell);
        }
        header
    }

    fn render_row(&self, props: &DataTableProps<'_, T>, record: &T, tokens: &TableTokens) -> Element {
        let id = record.id();
        let selected = props.selectable && self.is_selected(&id);
        let mut row = Element::row()
            .id(self.row_id(&id))
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .gap(1)
            .style(if selected {
                tokens.row_selected.clone()
            } else {
                tokens.row.clone()
            })
            .clickable(props.selectable)
            .data("role", "row")
            .data("row-id", id.to_string())
            .data("aria-selected", selected.to_string());

        if props.selectable {
            row = row.child(
                Element::text(if selected { "[x]" } else { "[ ]" })
                    .id(self.row_checkbox_id(&id))
                    .width(Size::Fixed(CHECKBOX_WIDTH))
                    .clickable(true)
                    .focusable(true)
                    .style_focused(tokens.checkbox_focused.clone())
                    .data("role", "checkbox")
                    .data("aria-checked", selected.to_string()),
            );
        }

        row.children(
            props
                .columns
                .iter()
                .enumerate()
                .map(|(index, column)| render_cell(self.cell_id(&id, index), column, record)),
        )
    }
}

fn render_cell<T: Record>(cell_id: String, column: &Column<T>, record: &T) -> Element {
    let text = record
        .field(&column.data_index)
        .map(|v| v.to_string())
        .unwrap_or_default();
    Element::text(text)
        .id(cell_id)
        .width(column.width.size())
        .text_align(column.align.into())
        .data("role", "cell")
        .data("column", column.key.as_str())
}
