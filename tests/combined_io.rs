// Read-write handles: independent read cursor and append position.
use csv_table::prelude::*;
use csv_table::{Record, RecordReaderWriter, RowReaderWriter, TableOptions};

#[test]
fn write_appends_while_read_starts_at_top() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("rw.csv");
    std::fs::write(&path, "a,b\n").expect("seed");

    let mut table = RowReaderWriter::open(&path);
    table.write_line(&["c", "d"]).expect("write");

    assert_eq!(
        table.read_next_line().expect("first"),
        Some(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(
        table.read_next_line().expect("second"),
        Some(vec!["c".to_string(), "d".to_string()])
    );
    assert_eq!(table.read_next_line().expect("end"), None);
    drop(table);

    assert_eq!(std::fs::read_to_string(&path).expect("read"), "a,b\nc,d\n");
}

#[test]
fn lines_written_after_reaching_end_become_readable() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("tail.csv");
    std::fs::write(&path, "1\n").expect("seed");

    let mut table = RowReaderWriter::open(&path);
    assert_eq!(table.read_all_lines().expect("rows"), vec![vec!["1"]]);

    table.write_line(&["2"]).expect("write");
    assert_eq!(table.read_next_line().expect("row"), Some(vec!["2".to_string()]));
}

#[test]
fn read_write_creates_missing_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("fresh.csv");

    let mut table = RowReaderWriter::try_open(&path, TableOptions::default()).expect("open");
    assert!(table.read_next_line().expect("empty").is_none());
    table.write_line(&["x"]).expect("write");
    drop(table);

    assert_eq!(std::fs::read_to_string(&path).expect("read"), "x\n");
}

#[test]
fn record_header_discovered_then_appended_to() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("records.csv");
    std::fs::write(&path, "id,name\n1,foo,\n").expect("seed");

    let mut table = RecordReaderWriter::open(&path);
    assert!(table.read_fieldnames().expect("header"));
    assert_eq!(table.fieldnames(), ["id", "name"]);

    let mut added = Record::new();
    added.insert("id".to_string(), "2".to_string());
    added.insert("name".to_string(), "bar".to_string());
    table.write_line(&added).expect("write");

    let records = table.read_all_lines().expect("records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "foo");
    assert_eq!(records[1], added);
}

#[test]
fn append_terminates_unfinished_last_line() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("unterminated.csv");
    std::fs::write(&path, "a,b").expect("seed");

    let mut table = RowReaderWriter::open(&path);
    table.write_line(&["c", "d"]).expect("write");
    assert_eq!(
        table.read_all_lines().expect("rows"),
        vec![vec!["a", "b"], vec!["c", "d"]]
    );
    drop(table);

    assert_eq!(std::fs::read_to_string(&path).expect("read"), "a,b\nc,d\n");
}

#[test]
fn append_after_reading_unfinished_last_line() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("unterminated.csv");
    std::fs::write(&path, "a,b").expect("seed");

    let mut table = RowReaderWriter::open(&path);
    assert_eq!(table.read_all_lines().expect("rows"), vec![vec!["a", "b"]]);

    table.write_line(&["c", "d"]).expect("write");
    assert_eq!(
        table.read_next_line().expect("row"),
        Some(vec!["c".to_string(), "d".to_string()])
    );
    assert_eq!(table.read_next_line().expect("end"), None);
    drop(table);

    assert_eq!(std::fs::read_to_string(&path).expect("read"), "a,b\nc,d\n");
}
