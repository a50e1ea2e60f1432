//! End-to-end view computations over console-shaped records.

use serde_json::json;
use tabview_engine::{Selection, ViewEngine, compute_view};
use tabview_model::{FieldPath, PageToken, Record, SortDirection, ViewIntent, ViewState};

fn path(text: &str) -> FieldPath {
    FieldPath::new(text).expect("valid path")
}

fn named(names: &[&str]) -> Vec<Record> {
    names
        .iter()
        .map(|name| Record::try_from(json!({ "name": name })).expect("record"))
        .collect()
}

fn row(name: &str) -> Record {
    Record::try_from(json!({ "name": name })).expect("record")
}

fn names<'a>(rows: &[&'a Record]) -> Vec<&'a str> {
    rows.iter()
        .map(|row| row.get("name").and_then(|v| v.as_text()).expect("name"))
        .collect()
}

fn campaigns() -> Vec<Record> {
    [
        ("Khuyến mãi Tết", "Riêng tư", "Trần Lan", 100),
        ("Back to school", "Công khai", "Lê Minh", -50),
        ("Black Friday", "Công khai", "Phạm Anh", 0),
        ("Hè rực rỡ", "Riêng tư", "Nguyễn An", 2500),
    ]
    .into_iter()
    .map(|(name, visibility, manager, amount)| {
        Record::try_from(json!({
            "name": name,
            "visibility": visibility,
            "manager": {"name": manager, "email": "x@example.com"},
            "revenue": {"amount": amount, "change": "+1%"}
        }))
        .expect("campaign")
    })
    .collect()
}

#[test]
fn first_page_of_twelve() {
    let records: Vec<Record> = (0..12).map(|i| row(&format!("r{i:02}"))).collect();
    let state = ViewState::new(5);
    let view = compute_view(&records, &state, &[path("name")]);
    assert_eq!(view.total_items, 12);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.page, 1);
    assert_eq!(names(&view.rows), vec!["r00", "r01", "r02", "r03", "r04"]);
    assert_eq!(
        view.page_window,
        vec![PageToken::Page(1), PageToken::Page(2), PageToken::Page(3)]
    );
    assert_eq!(view.range().to_string(), "1-5 of 12");
    assert!(!view.has_previous());
    assert!(view.has_next());
}

#[test]
fn search_is_case_insensitive_substring() {
    let records = named(&["Anna", "Bob", "Anh"]);
    let state = ViewState::default().with_search("an");
    let view = compute_view(&records, &state, &[path("name")]);
    assert_eq!(names(&view.rows), vec!["Anna", "Anh"]);
}

#[test]
fn sort_nested_amount_descending() {
    let records: Vec<Record> = [100, -50, 0]
        .into_iter()
        .map(|amount| Record::try_from(json!({"revenue": {"amount": amount}})).expect("record"))
        .collect();
    let state = ViewState::default().with_sort(path("revenue.amount"), SortDirection::Descending);
    let view = compute_view(&records, &state, &[]);
    let amounts: Vec<f64> = view
        .rows
        .iter()
        .map(|row| {
            row.get("revenue")
                .and_then(|v| v.as_map())
                .and_then(|m| m.get("amount"))
                .and_then(|v| v.as_number())
                .expect("amount")
        })
        .collect();
    assert_eq!(amounts, vec![100.0, 0.0, -50.0]);
}

#[test]
fn empty_collection_has_one_page() {
    let records: Vec<Record> = Vec::new();
    let view = compute_view(&records, &ViewState::default(), &[path("name")]);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.total_items, 0);
    assert!(view.rows.is_empty());
    assert_eq!(view.page_window, vec![PageToken::Page(1)]);
    assert_eq!(view.range().to_string(), "0-0 of 0");
}

#[test]
fn stale_page_is_clamped_after_filter_narrows() {
    let records: Vec<Record> = (0..100)
        .map(|i| {
            let name = if i < 15 { format!("match {i}") } else { format!("other {i}") };
            row(&name)
        })
        .collect();
    let mut state = ViewState::default().with_search("match");
    state.page = 9;
    let view = compute_view(&records, &state, &[path("name")]);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.page, 2);
    assert_eq!(view.rows.len(), 5);
    assert_eq!(view.range().to_string(), "11-15 of 15");
}

#[test]
fn search_and_filter_combine_with_and() {
    let records = campaigns();
    let state = ViewState::default()
        .with_search("an")
        .with_filter("visibility", "Riêng tư");
    let view = compute_view(&records, &state, &[path("name"), path("manager.name")]);
    assert_eq!(names(&view.rows), vec!["Khuyến mãi Tết", "Hè rực rỡ"]);

    let all = state.with_filter("visibility", "all");
    let view = compute_view(&records, &all, &[path("name"), path("manager.name")]);
    assert_eq!(view.total_items, 4);
}

#[test]
fn filter_on_field_no_record_has_matches_everything() {
    let records = named(&["Anna", "Bob"]);
    let state = ViewState::default().with_filter("status", "active");
    let view = compute_view(&records, &state, &[path("name")]);
    assert_eq!(view.total_items, 2);
}

#[test]
fn filter_on_partially_present_field_drops_records_without_it() {
    let mut records = campaigns();
    records.push(row("Không có trạng thái"));
    let state = ViewState::default().with_filter("visibility", "Công khai");
    let view = compute_view(&records, &state, &[]);
    assert_eq!(names(&view.rows), vec!["Back to school", "Black Friday"]);
}

#[test]
fn sort_by_name_uses_locale_order() {
    let records = campaigns();
    let state = ViewState::default().apply(ViewIntent::ToggleSort(path("name")));
    let view = compute_view(&records, &state, &[]);
    assert_eq!(
        names(&view.rows),
        vec!["Back to school", "Black Friday", "Hè rực rỡ", "Khuyến mãi Tết"]
    );
    let state = state.apply(ViewIntent::ToggleSort(path("name")));
    let view = compute_view(&records, &state, &[]);
    assert_eq!(names(&view.rows)[0], "Khuyến mãi Tết");
}

#[test]
fn unknown_sort_field_keeps_input_order() {
    let records = campaigns();
    let state = ViewState::default().with_sort(path("owner.name"), SortDirection::Descending);
    let view = compute_view(&records, &state, &[]);
    assert_eq!(
        names(&view.rows),
        vec!["Khuyến mãi Tết", "Back to school", "Black Friday", "Hè rực rỡ"]
    );
}

#[test]
fn engine_selects_current_page_rows() {
    let records: Vec<Record> = (0..12).map(|i| row(&format!("u{i}"))).collect();
    let engine = ViewEngine::new(vec![path("name")]);
    let state = ViewState::new(5).with_page(2);
    let view = engine.compute(&records, &state);
    let mut selection = Selection::new();
    selection.toggle_page(view.row_keys());
    assert!(selection.is_page_selected(view.row_keys()));
    assert_eq!(selection.keys().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
    selection.toggle(7);
    assert!(!selection.is_page_selected(view.row_keys()));
}

#[test]
fn page_window_renders_compactly() {
    let records: Vec<Record> = (0..95).map(|i| row(&format!("c{i}"))).collect();
    let state = ViewState::new(10).with_page(5);
    let view = compute_view(&records, &state, &[]);
    let rendered = view
        .page_window
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    insta::assert_snapshot!(rendered, @"1 ... 4 5 6 ... 10");
}
