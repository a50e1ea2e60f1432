//! Tests for fixture discovery and loading from disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use tabview_ingest::{IngestError, list_fixture_files, load_records};
use tabview_model::FieldValue;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_dir() -> PathBuf {
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("tabview_ingest_{stamp}_{seq}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn lists_only_fixture_files_sorted() {
    let dir = temp_dir();
    write(&dir, "user.json", "[]");
    write(&dir, "campaigns.JSON", "[]");
    write(&dir, "customers.csv", "khachHang\n");
    write(&dir, "notes.txt", "ignored");
    fs::create_dir_all(dir.join("nested.json")).expect("create nested dir");

    let files = list_fixture_files(&dir).expect("list fixtures");
    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert_eq!(names, vec!["campaigns.JSON", "customers.csv", "user.json"]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = temp_dir().join("absent");
    let err = list_fixture_files(&dir).expect_err("missing dir");
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn loads_json_fixture() {
    let dir = temp_dir();
    let path = write(
        &dir,
        "campaigns.json",
        r#"[
            {"name": "Khuyến mãi Tết", "visibility": "Riêng tư",
             "manager": {"name": "Trần Lan", "email": "lan@example.com"},
             "revenue": {"amount": 1250, "change": "+5%"}},
            {"name": "Black Friday", "visibility": "Công khai",
             "manager": {"name": "Phạm Anh", "email": "anh@example.com"},
             "revenue": {"amount": -300, "change": "-2%"}}
        ]"#,
    );
    let records = load_records(&path).expect("load json");
    assert_eq!(records.len(), 2);
    let revenue = records[1]
        .get("revenue")
        .and_then(FieldValue::as_map)
        .expect("revenue");
    assert_eq!(
        revenue.get("amount").and_then(FieldValue::as_number),
        Some(-300.0)
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn loads_csv_fixture_with_unicode_headers() {
    let dir = temp_dir();
    let path = write(
        &dir,
        "user.csv",
        "\u{feff}Nhân viên,Số điện thoại,Vai trò\nNguyễn An,0901234567,Quản trị\nLê Minh,0912345678,Nhân viên\n",
    );
    let records = load_records(&path).expect("load csv");
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].get("Nhân viên").and_then(FieldValue::as_text),
        Some("Nguyễn An")
    );
    assert_eq!(
        records[1].get("Số điện thoại").and_then(FieldValue::as_text),
        Some("0912345678")
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rejects_unknown_extension_and_missing_file() {
    let dir = temp_dir();
    let txt = write(&dir, "notes.txt", "hello");
    assert!(matches!(
        load_records(&txt),
        Err(IngestError::UnsupportedExtension { .. })
    ));
    assert!(matches!(
        load_records(&dir.join("absent.json")),
        Err(IngestError::FileNotFound { .. })
    ));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = temp_dir();
    let path = write(&dir, "broken.json", "[{\"name\": ");
    let err = load_records(&path).expect_err("broken json");
    assert!(matches!(err, IngestError::JsonParse { .. }));
    assert!(err.to_string().contains("broken.json"));

    let _ = fs::remove_dir_all(&dir);
}
