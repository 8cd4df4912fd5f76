// tests/export.rs
use std::fs;

use ksis_export::data::Record;
use ksis_export::file::export;
use ksis_export::normalize::Schema;
use ksis_export::ExportError;

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn writes_bom_header_and_padded_rows() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("nested").join("cup.csv");

    let schema = Schema::with_fields(["Name", "Club", "Score", "Vault", "Beam"]);
    let records = vec![
        record(&[("Name", "Jane DOE"), ("Club", "North, Gym"), ("Score", "52.1"), ("Vault", "13.2")]),
        record(&[("Name", "Ann ROE"), ("Beam", "12.0"), ("Stray", "ignored")]),
    ];
    let n = export(&records, &schema, &dest).unwrap();
    assert_eq!(n, 2);

    let bytes = fs::read(&dest).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Name,Club,Score,Beam,Vault");
    assert_eq!(lines[1], r#"Jane DOE,"North, Gym",52.1,,13.2"#);
    assert_eq!(lines[2], "Ann ROE,,,12.0,");
    assert!(!text.contains("ignored"));
}

#[test]
fn unwritable_destination_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let schema = Schema::with_fields(["Name"]);
    let err = export(&[record(&[("Name", "x")])], &schema, dir.path()).unwrap_err();
    assert!(matches!(err, ExportError::Destination { .. }), "got {err:?}");
}
