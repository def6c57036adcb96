use super::column::Column;
use super::record::{FieldValue, Record, compare_fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Value for the `aria-sort` attribute.
    pub fn as_aria(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    pub fn indicator(&self) -> char {
        match self {
            SortDirection::Ascending => '▲',
            SortDirection::Descending => '▼',
        }
    }
}

/// The column a table is currently sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSort {
    pub column_key: String,
    pub direction: SortDirection,
}

impl ActiveSort {
    pub fn ascending(column_key: impl Into<String>) -> Self {
        Self {
            column_key: column_key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column_key: impl Into<String>) -> Self {
        Self {
            column_key: column_key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Sort state after a click on the header of `clicked`.
///
/// Cycles none, ascending, descending, none for one column; clicking a
/// different column starts it at ascending.
pub fn next_sort(current: Option<&ActiveSort>, clicked: &str) -> Option<ActiveSort> {
    match current {
        Some(active) if active.column_key == clicked => match active.direction {
            SortDirection::Ascending => Some(ActiveSort::descending(clicked)),
            SortDirection::Descending => None,
        },
        _ => Some(ActiveSort::ascending(clicked)),
    }
}

/// Column and direction the sort applies to, if the sorted column still
/// exists and is sortable.
pub fn effective_sort<'a, T>(
    sort: Option<&ActiveSort>,
    columns: &'a [Column<T>],
) -> Option<(&'a Column<T>, SortDirection)> {
    let sort = sort?;
    columns
        .iter()
        .find(|c| c.key == sort.column_key && c.sortable)
        .map(|c| (c, sort.direction))
}

/// Indices into `data` in display order. Stable: equal keys keep input order
/// in both directions.
pub fn sort_order<T: Record>(data: &[T], by: Option<(&Column<T>, SortDirection)>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    let Some((column, direction)) = by else {
        return order;
    };

    let keys: Vec<Option<FieldValue>> = data
        .iter()
        .map(|record| record.field(&column.data_index))
        .collect();

    order.sort_by(|&a, &b| {
        let ord = compare_fields(keys[a].as_ref(), keys[b].as_ref());
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row(u32, &'static str, i64);

    impl Record for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }

        fn field(&self, data_index: &str) -> Option<FieldValue> {
            match data_index {
                "name" => Some(self.1.into()),
                "score" => Some(self.2.into()),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![Row(1, "c", 2), Row(2, "a", 1), Row(3, "b", 2), Row(4, "d", 1)]
    }

    #[test]
    fn cycle_for_one_column() {
        let asc = next_sort(None, "age");
        assert_eq!(asc, Some(ActiveSort::ascending("age")));
        let desc = next_sort(asc.as_ref(), "age");
        assert_eq!(desc, Some(ActiveSort::descending("age")));
        assert_eq!(next_sort(desc.as_ref(), "age"), None);
    }

    #[test]
    fn other_column_restarts_ascending() {
        let desc = ActiveSort::descending("age");
        assert_eq!(next_sort(Some(&desc), "name"), Some(ActiveSort::ascending("name")));
    }

    #[test]
    fn effective_sort_ignores_unknown_and_unsortable() {
        let columns = vec![
            Column::<Row>::new("name", "Name"),
            Column::<Row>::new("score", "Score").sortable(true),
        ];
        assert!(effective_sort(Some(&ActiveSort::ascending("name")), &columns).is_none());
        assert!(effective_sort(Some(&ActiveSort::ascending("gone")), &columns).is_none());
        let (col, dir) = effective_sort(Some(&ActiveSort::descending("score")), &columns)
            .expect("score is sortable");
        assert_eq!(col.key, "score");
        assert_eq!(dir, SortDirection::Descending);
    }

    #[test]
    fn ties_keep_input_order_both_ways() {
        let data = rows();
        let score = Column::<Row>::new("score", "Score").sortable(true);

        let asc = sort_order(&data, Some((&score, SortDirection::Ascending)));
        assert_eq!(asc, vec![1, 3, 0, 2]);

        let desc = sort_order(&data, Some((&score, SortDirection::Descending)));
        assert_eq!(desc, vec![0, 2, 1, 3]);
    }

    #[test]
    fn no_sort_is_input_order() {
        assert_eq!(sort_order(&rows(), None), vec![0, 1, 2, 3]);
    }

    #[test]
    fn missing_field_sorts_first_ascending() {
        let data = rows();
        let missing = Column::<Row>::new("nope", "Nope").sortable(true);
        assert_eq!(
            sort_order(&data, Some((&missing, SortDirection::Ascending))),
            vec![0, 1, 2, 3]
        );
    }
}
