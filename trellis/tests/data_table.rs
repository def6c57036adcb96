use trellis::prelude::*;
use trellis::trellis_dom::{find_by_data, find_element, Element, Event, Key};

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: &'static str,
    age: i64,
    team: Option<&'static str>,
}

impl Record for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn field(&self, data_index: &str) -> Option<FieldValue> {
        match data_index {
            "name" => Some(self.name.into()),
            "age" => Some(self.age.into()),
            "team" => self.team.map(FieldValue::from),
            _ => None,
        }
    }
}

fn user(id: u32, name: &'static str, age: i64) -> User {
    User {
        id,
        name,
        age,
        team: None,
    }
}

fn users() -> Vec<User> {
    vec![user(1, "Bob", 30), user(2, "Alice", 24)]
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("age", "Age").sortable(true).fixed(5),
        Column::new("team", "Team"),
    ]
}

fn names(rows: &[&User]) -> Vec<&'static str> {
    rows.iter().map(|u| u.name).collect()
}

fn recording<'a>(
    props: DataTableProps<'a, User>,
) -> (DataTableProps<'a, User>, State<Vec<Vec<u32>>>) {
    let log = State::new(Vec::new());
    let props = props.on_row_select({
        let log = log.clone();
        move |rows: Vec<User>| log.update(|v| v.push(rows.iter().map(|u| u.id).collect()))
    });
    (props, log)
}

fn body_rows(table: &DataTable<User>, root: &Element) -> Vec<String> {
    let body = find_element(root, &table.body_id()).expect("body rendered");
    body.child_elements()
        .iter()
        .filter_map(|row| row.get_data("row-id").map(str::to_string))
        .collect()
}

#[test]
fn test_age_sort_orders_alice_first() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols);

    assert_eq!(table.click_header(&props, "age"), WidgetResult::Sorted);
    assert_eq!(names(&table.rows(&props)), vec!["Alice", "Bob"]);

    table.click_header(&props, "age");
    assert_eq!(names(&table.rows(&props)), vec!["Bob", "Alice"]);
}

#[test]
fn test_three_clicks_restore_input_order() {
    let data = vec![user(1, "Cara", 41), user(2, "Alice", 24), user(3, "Bob", 30)];
    let cols = columns();
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols);

    for _ in 0..3 {
        table.click_header(&props, "name");
    }

    assert_eq!(table.sort(), None);
    assert_eq!(table.display_order(&props), vec![0, 1, 2]);
}

#[test]
fn test_switching_column_starts_ascending() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols);

    table.click_header(&props, "age");
    table.click_header(&props, "age");
    table.click_header(&props, "name");

    assert_eq!(table.sort(), Some(ActiveSort::ascending("name")));
    assert_eq!(names(&table.rows(&props)), vec!["Alice", "Bob"]);
}

#[test]
fn test_sort_is_stable_for_ties() {
    let data = vec![
        user(1, "d", 30),
        user(2, "a", 20),
        user(3, "c", 30),
        user(4, "b", 20),
    ];
    let cols = columns();
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols);

    table.click_header(&props, "age");
    assert_eq!(names(&table.rows(&props)), vec!["a", "b", "d", "c"]);

    table.click_header(&props, "age");
    assert_eq!(names(&table.rows(&props)), vec!["d", "c", "a", "b"]);
}

#[test]
fn test_unsortable_header_is_inert() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols);

    assert_eq!(table.click_header(&props, "team"), WidgetResult::Ignored);
    assert_eq!(table.click_header(&props, "missing"), WidgetResult::Ignored);
    assert_eq!(table.sort(), None);
}

#[test]
fn test_sort_on_vanished_column_reads_unsorted() {
    let data = users();
    let cols = columns();
    let table = DataTable::new().with_sort(ActiveSort::descending("gone"));
    let props = DataTableProps::new(&data, &cols);

    assert_eq!(table.display_order(&props), vec![0, 1]);
    table.click_header(&props, "age");
    assert_eq!(table.sort(), Some(ActiveSort::ascending("age")));
}

#[test]
fn test_missing_fields_sort_first_and_render_blank() {
    let mut data = users();
    data[0].team = Some("Core");
    let cols = columns();
    let sortable_team: Vec<Column<User>> = vec![Column::new("team", "Team").sortable(true)];
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &sortable_team);

    table.click_header(&props, "team");
    assert_eq!(names(&table.rows(&props)), vec!["Alice", "Bob"]);

    let props = DataTableProps::new(&data, &cols);
    let root = table.render(&props, ThemeMode::Light);
    let cell = find_element(&root, &table.cell_id(&2, 2)).expect("cell rendered");
    assert_eq!(cell.text_content(), Some(""));
}

#[test]
fn test_toggle_row_reports_selection_in_display_order() {
    let data = users();
    let cols = columns();
    let table = DataTable::new().with_sort(ActiveSort::ascending("age"));
    let (props, log) = recording(DataTableProps::new(&data, &cols).selectable(true));

    assert_eq!(table.toggle_row(&props, &1), WidgetResult::Selected);
    assert_eq!(table.toggle_row(&props, &2), WidgetResult::Selected);
    assert_eq!(table.toggle_row(&props, &1), WidgetResult::Selected);

    assert_eq!(log.get(), vec![vec![1], vec![2, 1], vec![2]]);
    assert_eq!(table.selected(&props), vec![data[1].clone()]);
}

#[test]
fn test_select_all_then_select_all_clears() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let (props, log) = recording(DataTableProps::new(&data, &cols).selectable(true));

    table.toggle_all(&props);
    table.toggle_all(&props);

    assert_eq!(log.get(), vec![vec![1, 2], vec![]]);
}

#[test]
fn test_select_all_from_partial_selects_everything() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let (props, log) = recording(DataTableProps::new(&data, &cols).selectable(true));

    table.toggle_row(&props, &2);
    let root = table.render(&props, ThemeMode::Light);
    let select_all = find_element(&root, &table.select_all_id()).expect("checkbox rendered");
    assert_eq!(select_all.text_content(), Some("[-]"));
    assert_eq!(select_all.get_data("aria-checked"), Some("mixed"));

    table.toggle_all(&props);
    assert_eq!(log.get().last(), Some(&vec![1, 2]));
}

#[test]
fn test_not_selectable_ignores_selection() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let (props, log) = recording(DataTableProps::new(&data, &cols));

    assert_eq!(table.toggle_row(&props, &1), WidgetResult::Ignored);
    assert_eq!(table.toggle_all(&props), WidgetResult::Ignored);
    assert!(log.get().is_empty());

    let root = table.render(&props, ThemeMode::Light);
    assert!(find_element(&root, &table.select_all_id()).is_none());
    assert!(find_element(&root, &table.row_checkbox_id(&1)).is_none());
}

#[test]
fn test_selection_drops_rows_removed_by_caller() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols).selectable(true);
    table.toggle_all(&props);

    let remaining = vec![data[1].clone(), user(3, "Cara", 41)];
    let (props, log) = recording(DataTableProps::new(&remaining, &cols).selectable(true));

    assert_eq!(table.selected(&props), vec![remaining[0].clone()]);
    table.toggle_row(&props, &3);
    assert_eq!(log.get(), vec![vec![2, 3]]);
}

#[test]
fn test_empty_data_renders_marker() {
    let data: Vec<User> = Vec::new();
    let cols = columns();
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols).empty_text("No users");

    let root = table.render(&props, ThemeMode::Light);
    let empty = find_element(&root, &table.empty_id()).expect("empty marker rendered");
    assert_eq!(empty.text_content(), Some("No users"));
    assert_eq!(find_by_data(&root, "empty", "true").len(), 1);
    assert!(body_rows(&table, &root).is_empty());
}

#[test]
fn test_loading_hides_rows_and_freezes_selection() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let (props, log) = recording(DataTableProps::new(&data, &cols).selectable(true).loading(true));

    let root = table.render(&props, ThemeMode::Light);
    assert!(find_element(&root, &table.loading_id()).is_some());
    assert!(body_rows(&table, &root).is_empty());
    assert_eq!(root.get_data("aria-busy"), Some("true"));

    assert_eq!(table.toggle_all(&props), WidgetResult::Ignored);
    assert!(log.get().is_empty());
    assert_eq!(table.click_header(&props, "age"), WidgetResult::Sorted);
}

#[test]
fn test_render_rows_follow_display_order() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols).selectable(true);

    let root = table.render(&props, ThemeMode::Dark);
    assert_eq!(body_rows(&table, &root), vec!["1", "2"]);

    table.click_header(&props, "age");
    let root = table.render(&props, ThemeMode::Dark);
    assert_eq!(body_rows(&table, &root), vec!["2", "1"]);

    let header = find_element(&root, &table.header_cell_id("age")).expect("header rendered");
    assert_eq!(header.text_content(), Some("Age ▲"));
    assert_eq!(header.get_data("aria-sort"), Some("ascending"));
    let name = find_element(&root, &table.header_cell_id("name")).expect("header rendered");
    assert_eq!(name.get_data("aria-sort"), Some("none"));
}

#[test]
fn test_dispatch_routes_header_rows_and_checkboxes() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let (props, log) = recording(DataTableProps::new(&data, &cols).selectable(true));

    let sorted = table.dispatch(&props, &Event::click(table.header_cell_id("age")));
    let by_row = table.dispatch(&props, &Event::click(table.row_id(&1)));
    let by_box = table.dispatch(&props, &Event::key(table.row_checkbox_id(&2), Key::Char(' ')));
    let all = table.dispatch(&props, &Event::key(table.select_all_id(), Key::Enter));

    assert_eq!(sorted, WidgetResult::Sorted);
    assert_eq!(by_row, WidgetResult::Selected);
    assert_eq!(by_box, WidgetResult::Selected);
    assert_eq!(all, WidgetResult::Selected);
    assert_eq!(log.get(), vec![vec![1], vec![2, 1], vec![]]);
}

#[test]
fn test_dispatch_ignores_foreign_and_inert_events() {
    let data = users();
    let cols = columns();
    let table = DataTable::new();
    let other: DataTable<User> = DataTable::new();
    let props = DataTableProps::new(&data, &cols).selectable(true);

    assert_eq!(
        table.dispatch(&props, &Event::click(other.select_all_id())),
        WidgetResult::Ignored
    );
    assert_eq!(
        table.dispatch(&props, &Event::key(table.row_id(&1), Key::Char('x'))),
        WidgetResult::Ignored
    );
    assert!(!table.is_selected(&1));
}

#[test]
fn test_string_ids_route_correctly() {
    #[derive(Clone)]
    struct Tag(&'static str);

    impl Record for Tag {
        type Id = String;

        fn id(&self) -> String {
            self.0.to_string()
        }

        fn field(&self, data_index: &str) -> Option<FieldValue> {
            (data_index == "tag").then(|| self.0.into())
        }
    }

    let data = vec![Tag("rust"), Tag("rust-lang")];
    let cols = vec![Column::new("tag", "Tag")];
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols).selectable(true);

    table.dispatch(&props, &Event::click(table.row_id(&"rust-lang".to_string())));

    assert!(table.is_selected(&"rust-lang".to_string()));
    assert!(!table.is_selected(&"rust".to_string()));
}

#[test]
fn test_row_ids_sharing_a_prefix_route_exactly() {
    #[derive(Clone)]
    struct Tag(&'static str);

    impl Record for Tag {
        type Id = String;

        fn id(&self) -> String {
            self.0.to_string()
        }

        fn field(&self, data_index: &str) -> Option<FieldValue> {
            (data_index == "tag").then(|| self.0.into())
        }
    }

    let data = vec![Tag("a"), Tag("a-select"), Tag("a-cell-0")];
    let cols = vec![Column::new("tag", "Tag")];
    let table = DataTable::new();
    let props = DataTableProps::new(&data, &cols).selectable(true);
    let a = "a".to_string();
    let a_select = "a-select".to_string();
    let a_cell = "a-cell-0".to_string();

    table.dispatch(&props, &Event::click(table.row_id(&a_select)));
    assert!(table.is_selected(&a_select));
    assert!(!table.is_selected(&a));

    table.dispatch(&props, &Event::click(table.row_id(&a_cell)));
    assert!(table.is_selected(&a_cell));
    assert!(!table.is_selected(&a));

    table.dispatch(&props, &Event::key(table.row_checkbox_id(&a), Key::Char(' ')));
    assert!(table.is_selected(&a));

    table.dispatch(&props, &Event::click(table.row_checkbox_id(&a_select)));
    assert!(!table.is_selected(&a_select));
    assert!(table.is_selected(&a));

    let root = table.render(&props, ThemeMode::Light);
    for tag in [&a, &a_select, &a_cell] {
        assert_eq!(
            find_element(&root, &table.row_id(tag)).and_then(|row| row.get_data("row-id")),
            Some(tag.as_str())
        );
        assert!(find_element(&root, &table.cell_id(tag, 0)).is_some());
    }
}
