//! Terminal rendering of views with `comfy-table`.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tabview_model::{PageToken, ViewResult};
use tabview_views::{ColumnFormat, ViewDefinition, ViewRegistry};

use crate::format::{cell_text, numeric_value};

/// Whether tables carry ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Styling {
    /// Style only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

pub fn apply_table_style(table: &mut Table, styling: Styling) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    match styling {
        Styling::Auto => {}
        Styling::Always => {
            table.enforce_styling();
        }
        Styling::Never => {
            table.force_no_tty();
        }
    }
}

/// The table of known views for `tabview views`.
pub fn views_table(registry: &ViewRegistry, styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("View"),
        header_cell("Title"),
        header_cell("Fixture"),
        header_cell("Search"),
        header_cell("Filters"),
        header_cell("Page size"),
    ]);
    apply_table_style(&mut table, styling);
    align_column(&mut table, 5, CellAlignment::Right);
    for view in registry.iter() {
        let searchable = view
            .searchable
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let filters = if view.filters.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(
                view.filters
                    .iter()
                    .map(|filter| format!("{}: {}", filter.key, filter.choices.join(" / ")))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
        };
        table.add_row(vec![
            Cell::new(&view.name).add_attribute(Attribute::Bold),
            Cell::new(&view.title),
            Cell::new(&view.fixture),
            Cell::new(searchable),
            filters,
            Cell::new(view.default_page_size),
        ]);
    }
    table
}

/// The current page of `result` laid out with `view`'s columns.
pub fn view_table(view: &ViewDefinition, result: &ViewResult<'_>, styling: Styling) -> Table {
    let mut table = Table::new();
    table.set_header(
        view.columns
            .iter()
            .map(|column| header_cell(&column.header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table, styling);
    for (index, column) in view.columns.iter().enumerate() {
        if column.format != ColumnFormat::Text {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for record in &result.rows {
        table.add_row(
            view.columns
                .iter()
                .map(|column| {
                    let value = tabview_engine::resolve(record, &column.path);
                    let Some(text) = cell_text(value, column.format) else {
                        return dim_cell("-");
                    };
                    match (column.format, value.and_then(numeric_value)) {
                        (ColumnFormat::Revenue, Some(amount)) => {
                            Cell::new(text).fg(revenue_color(amount))
                        }
                        _ => Cell::new(text),
                    }
                })
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Zero and gains render green, losses red.
pub fn revenue_color(amount: f64) -> Color {
    if amount >= 0.0 { Color::Green } else { Color::Red }
}

/// `Showing 11-20 of 42`.
pub fn range_line(result: &ViewResult<'_>) -> String {
    format!("Showing {}", result.range())
}

/// Page controls with the current page bracketed: `1 … 4 [5] 6 … 10`.
pub fn page_window_line(result: &ViewResult<'_>) -> String {
    result
        .page_window
        .iter()
        .map(|token| match token {
            PageToken::Page(page) if *page == result.page => format!("[{page}]"),
            PageToken::Page(page) => page.to_string(),
            PageToken::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full text output of `tabview show`.
pub fn render_view(view: &ViewDefinition, result: &ViewResult<'_>, styling: Styling) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    if result.total_items == 0 {
        let _ = writeln!(out, "No matching records.");
    } else {
        let _ = writeln!(out, "{}", view_table(view, result, styling));
    }
    let _ = writeln!(out, "{}", range_line(result));
    let _ = write!(out, "{}", page_window_line(result));
    out
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
