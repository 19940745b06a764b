//! In-page interactive grid for tables at or below the column threshold.
//!
//! Headers sort on click (ascending, descending, then input order) and a
//! search box filters rows by any cell's text. Cells holding nested data URIs
//! render as thumbnails or nested sandboxed frames.

#[cfg(test)]
#[path = "table_grid_test.rs"]
mod table_grid_test;

use leptos::prelude::*;

use crate::components::full_screen::FullScreen;
use crate::components::sandboxed_frame::SandboxedFrame;
use crate::config::use_render_config;
use crate::payload::TableData;
use crate::render::cell::{CellContent, classify_cell, compare_values, display_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub descending: bool,
}

/// Sort state after clicking `column`.
#[must_use]
pub fn next_sort(current: Option<SortState>, column: usize) -> Option<SortState> {
    match current {
        Some(SortState { column: active, descending: false }) if active == column => {
            Some(SortState { column, descending: true })
        }
        Some(SortState { column: active, descending: true }) if active == column => None,
        _ => Some(SortState { column, descending: false }),
    }
}

fn sort_indicator(sort: Option<SortState>, column: usize) -> &'static str {
    match sort {
        Some(SortState { column: active, descending }) if active == column => {
            if descending { " ↓" } else { " ↑" }
        }
        _ => "",
    }
}

/// Whether any cell of `row` contains `query`, ignoring case.
#[must_use]
pub fn row_matches(table: &TableData, row: usize, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    table
        .row_cells(row)
        .flatten()
        .any(|value| display_text(value).to_lowercase().contains(&needle))
}

/// Row indices to display, filtered by `query` and ordered by `sort`.
#[must_use]
pub fn visible_rows(table: &TableData, query: &str, sort: Option<SortState>) -> Vec<usize> {
    let mut rows: Vec<usize> = (0..table.row_count())
        .filter(|&row| row_matches(table, row, query))
        .collect();
    if let Some(SortState { column, descending }) = sort {
        let cell = |row: usize| table.data.get(row).and_then(|cells| cells.get(column));
        rows.sort_by(|&a, &b| {
            let cmp = compare_values(cell(a), cell(b));
            if descending { cmp.reverse() } else { cmp }
        });
    }
    rows
}

fn cell_view(content: CellContent) -> AnyView {
    match content {
        CellContent::Empty => ().into_any(),
        CellContent::Image(src) => view! { <img class="table-grid__thumb" src=src alt=""/> }.into_any(),
        CellContent::Rich { kind, document } => view! {
            <div class="table-grid__nested">
                <SandboxedFrame document=document title=kind.as_str()/>
            </div>
        }
        .into_any(),
        CellContent::Text(text) => text.into_any(),
    }
}

#[component]
pub fn TableGrid(table: TableData) -> impl IntoView {
    let config = use_render_config();
    let headers = table.columns.clone();
    let total_rows = table.row_count();
    let table = StoredValue::new(table);
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(None::<SortState>);
    let rows = Memo::new(move |_| table.with_value(|t| visible_rows(t, &query.get(), sort.get())));

    view! {
        <div class="table-grid">
            <FullScreen>
                <div class="table-grid__bar">
                    <input
                        class="table-grid__search"
                        type="search"
                        placeholder="Search"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <span class="table-grid__count">
                        {move || format!("{} of {total_rows} rows", rows.get().len())}
                    </span>
                </div>
                <div class="table-grid__scroll">
                    <table class="table-grid__table">
                        <thead>
                            <tr>
                                {headers.into_iter().enumerate().map(|(column, name)| view! {
                                    <th
                                        class="table-grid__head"
                                        on:click=move |_| sort.update(|s| *s = next_sort(*s, column))
                                    >
                                        {name}
                                        {move || sort_indicator(sort.get(), column)}
                                    </th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let config = config.get();
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let cells: Vec<CellContent> = table.with_value(|t| {
                                            t.row_cells(row).map(|value| classify_cell(value, &config, 0)).collect()
                                        });
                                        view! {
                                            <tr>
                                                {cells.into_iter().map(|cell| view! {
                                                    <td class="table-grid__cell">{cell_view(cell)}</td>
                                                }).collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </FullScreen>
        </div>
    }
}
