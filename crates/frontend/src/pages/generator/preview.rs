use contracts::upload::UploadSummary;
use leptos::prelude::*;
use serde_json::{Map, Value};

/// The preview shows at most this many named columns; anything beyond
/// collapses into a single "..." marker column.
pub const COLUMN_LIMIT: usize = 8;

/// Cell text is cut at this many characters, with a trailing ellipsis.
pub const CELL_LIMIT: usize = 50;

/// Column names to render as headers, and whether the "..." marker
/// column follows them.
pub fn preview_columns(columns: &[String]) -> (Vec<String>, bool) {
    let shown: Vec<String> = columns.iter().take(COLUMN_LIMIT).cloned().collect();
    (shown, columns.len() > COLUMN_LIMIT)
}

/// Stringified, truncated cell content. Missing and null cells render
/// empty.
pub fn cell_text(row: &Map<String, Value>, column: &str) -> String {
    let text = match row.get(column) {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };
    if text.chars().count() > CELL_LIMIT {
        let cut: String = text.chars().take(CELL_LIMIT).collect();
        format!("{}...", cut)
    } else {
        text
    }
}

/// Sample-row table for a fresh upload. Renders exactly the rows the
/// server sent; only the column count is capped.
#[component]
pub fn PreviewTable(summary: UploadSummary) -> impl IntoView {
    let (columns, overflow) = preview_columns(&summary.columns);

    let header_cells = {
        let mut cells: Vec<_> = columns
            .iter()
            .map(|column| view! { <th class="table__header-cell">{column.clone()}</th> })
            .collect();
        if overflow {
            cells.push(view! { <th class="table__header-cell">{"...".to_string()}</th> });
        }
        cells
    };

    let body_rows = summary
        .sample_data
        .iter()
        .map(|row| {
            let mut cells: Vec<_> = columns
                .iter()
                .map(|column| view! { <td class="table__cell">{cell_text(row, column)}</td> })
                .collect();
            if overflow {
                cells.push(view! { <td class="table__cell">{"...".to_string()}</td> });
            }
            view! { <tr class="table__row">{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="preview-table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>{header_cells}</tr>
                </thead>
                <tbody>{body_rows}</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn columns(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("col{}", index)).collect()
    }

    #[test]
    fn ten_columns_cap_at_eight_with_marker() {
        let (shown, overflow) = preview_columns(&columns(10));
        assert_eq!(shown.len(), 8);
        assert!(overflow);
    }

    #[test]
    fn five_columns_render_unchanged() {
        let (shown, overflow) = preview_columns(&columns(5));
        assert_eq!(shown.len(), 5);
        assert!(!overflow);
    }

    #[test]
    fn nine_columns_also_overflow() {
        let (shown, overflow) = preview_columns(&columns(9));
        assert_eq!(shown.len(), 8);
        assert!(overflow);
    }

    fn row(value: Value) -> Map<String, Value> {
        let mut row = Map::new();
        row.insert("col".to_string(), value);
        row
    }

    #[test]
    fn long_cells_truncate_with_ellipsis() {
        let text = "x".repeat(60);
        let rendered = cell_text(&row(json!(text)), "col");
        assert_eq!(rendered.len(), 53);
        assert!(rendered.ends_with("..."));
        assert!(rendered.starts_with(&"x".repeat(50)));
    }

    #[test]
    fn exactly_fifty_chars_are_left_alone() {
        let text = "y".repeat(50);
        assert_eq!(cell_text(&row(json!(text)), "col"), text);
    }

    #[test]
    fn missing_and_null_cells_render_empty() {
        assert_eq!(cell_text(&Map::new(), "col"), "");
        assert_eq!(cell_text(&row(Value::Null), "col"), "");
    }

    #[test]
    fn non_string_cells_are_stringified() {
        assert_eq!(cell_text(&row(json!(42)), "col"), "42");
        assert_eq!(cell_text(&row(json!(true)), "col"), "true");
    }
}
