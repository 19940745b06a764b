use super::*;
use serde_json::json;

fn sample() -> TableData {
    TableData {
        columns: vec!["name".to_owned(), "score".to_owned()],
        data: vec![
            vec![json!("beta"), json!(10)],
            vec![json!("Alpha"), json!(2)],
            vec![json!("gamma")],
        ],
    }
}

#[test]
fn next_sort_cycles_ascending_descending_off() {
    let asc = next_sort(None, 1);
    assert_eq!(asc, Some(SortState { column: 1, descending: false }));
    let desc = next_sort(asc, 1);
    assert_eq!(desc, Some(SortState { column: 1, descending: true }));
    assert_eq!(next_sort(desc, 1), None);
}

#[test]
fn next_sort_switching_column_restarts_ascending() {
    let desc = Some(SortState { column: 0, descending: true });
    assert_eq!(next_sort(desc, 1), Some(SortState { column: 1, descending: false }));
}

#[test]
fn sort_indicator_marks_active_column_only() {
    let sort = Some(SortState { column: 0, descending: true });
    assert_eq!(sort_indicator(sort, 0), " ↓");
    assert_eq!(sort_indicator(sort, 1), "");
}

#[test]
fn visible_rows_keeps_input_order_without_sort() {
    assert_eq!(visible_rows(&sample(), "", None), vec![0, 1, 2]);
}

#[test]
fn visible_rows_filters_case_insensitively() {
    assert_eq!(visible_rows(&sample(), "ALPHA", None), vec![1]);
    assert_eq!(visible_rows(&sample(), "  ", None), vec![0, 1, 2]);
    assert_eq!(visible_rows(&sample(), "10", None), vec![0]);
}

#[test]
fn visible_rows_sorts_numbers_with_missing_cells_last() {
    let asc = Some(SortState { column: 1, descending: false });
    assert_eq!(visible_rows(&sample(), "", asc), vec![1, 0, 2]);
}

#[test]
fn row_matches_ignores_missing_cells() {
    assert!(!row_matches(&sample(), 2, "10"));
    assert!(row_matches(&sample(), 2, "gam"));
}

/// Deterministic mixed column: integers, floats, numeric strings, text and gaps.
fn mixed_column(rows: usize, seed: u64) -> TableData {
    let mut state = seed;
    let data = (0..rows)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            let n = (state >> 33) % 100;
            match (state >> 20) % 6 {
                0 => vec![json!(n)],
                1 => vec![json!(n as f64 / 7.0)],
                2 => vec![json!(n.to_string())],
                3 => vec![json!("n/a")],
                4 => vec![serde_json::Value::Null],
                _ => Vec::new(),
            }
        })
        .collect();
    TableData { columns: vec!["value".to_owned()], data }
}

#[test]
fn visible_rows_sorts_large_mixed_columns() {
    for seed in 0..50 {
        let table = mixed_column(500, seed);
        for descending in [false, true] {
            let rows = visible_rows(&table, "", Some(SortState { column: 0, descending }));
            assert_eq!(rows.len(), 500);
        }
        let rows = visible_rows(&table, "", Some(SortState { column: 0, descending: false }));
        let first_text = rows
            .iter()
            .position(|&row| !matches!(table.data[row].first(), Some(serde_json::Value::Number(_))));
        if let Some(boundary) = first_text {
            assert!(
                rows[boundary..]
                    .iter()
                    .all(|&row| !matches!(table.data[row].first(), Some(serde_json::Value::Number(_))))
            );
        }
    }
}
