use tests::*;

use pretty_assertions::assert_eq;
use rowbind::{scan, Record, Runner, Scanner, Schema};

#[derive(Debug, Default, PartialEq, Record)]
struct Entry {
    pub count: i64,
    pub label: String,
}

fn entry(count: i64, label: &str) -> Entry {
    Entry {
        count,
        label: label.to_string(),
    }
}

fn entries() -> Schema<Entry> {
    Schema::new([
        scan::int().to("count"),
        scan::string().default("unknown").to("label"),
    ])
    .unwrap()
}

#[test]
fn all_applies_defaults() {
    init_tracing();

    let mut rows = MockRows::new([row![1, Value::Null], row![2, "b"]]);
    let read = entries().all(&mut rows).unwrap();

    assert_eq!(read, vec![entry(1, "unknown"), entry(2, "b")]);
    assert_eq!(rows.scanned(), 2);
    assert_eq!(rows.closed(), 1);
}

#[test]
fn all_without_rows_is_empty() {
    let mut rows = MockRows::empty();
    let read = entries().all(&mut rows).unwrap();

    assert!(read.is_empty());
    assert_eq!(rows.closed(), 1);
}

#[test]
fn one_requires_exactly_one_row() {
    let schema = entries();

    let mut rows = MockRows::new([row![7, "x"]]);
    assert_eq!(schema.one(&mut rows).unwrap(), entry(7, "x"));
    assert_eq!(rows.closed(), 1);

    let mut rows = MockRows::empty();
    let err = schema.one(&mut rows).unwrap_err();
    assert!(err.is_no_rows());
    assert_eq!(err.to_string(), "no rows in result set");
    assert_eq!(rows.closed(), 1);

    let mut rows = MockRows::new([row![1, "a"], row![2, "b"]]);
    let err = schema.one(&mut rows).unwrap_err();
    assert!(err.is_too_many_rows());
    assert_eq!(rows.closed(), 1);
}

#[test]
fn first_ignores_extra_rows() {
    let schema = entries();

    let mut rows = MockRows::new([row![1, "a"], row![2, "b"], row![3, "c"]]);
    assert_eq!(schema.first(&mut rows).unwrap(), entry(1, "a"));
    assert_eq!(rows.scanned(), 1);
    assert_eq!(rows.remaining(), 2);
    assert_eq!(rows.closed(), 1);

    let mut rows = MockRows::empty();
    assert!(schema.first(&mut rows).unwrap_err().is_no_rows());
}

#[test]
fn null_leaves_zero_value() {
    let schema =
        Schema::<Entry>::new([scan::int().to("count"), scan::string().to("label")]).unwrap();

    let mut rows = MockRows::new([row![Value::Null, Value::Null]]);
    assert_eq!(schema.one(&mut rows).unwrap(), Entry::default());
}

#[derive(Debug, Default, PartialEq, Record)]
struct Optional {
    pub count: Option<i64>,
    pub label: Option<String>,
}

#[test]
fn nullable_fields_tell_absent_from_zero() {
    let schema = Schema::<Optional>::new([
        scan::int().nullable().to("count"),
        scan::string().nullable().to("label"),
    ])
    .unwrap();

    let mut rows = MockRows::new([row![0, Value::Null], row![Value::Null, ""]]);
    let read = schema.all(&mut rows).unwrap();

    assert_eq!(
        read,
        vec![
            Optional {
                count: Some(0),
                label: None,
            },
            Optional {
                count: None,
                label: Some(String::new()),
            },
        ]
    );
}

#[test]
fn cursor_error_is_reported() {
    let mut rows = MockRows::new([row![1, "a"]]).fail_with(rowbind::err!("connection lost"));
    let err = entries().all(&mut rows).unwrap_err();

    assert_eq!(err.to_string(), "connection lost");
    assert_eq!(rows.closed(), 1);
}

#[test]
fn close_error_is_reported() {
    let mut rows = MockRows::new([row![1, "a"]]).fail_close(rowbind::err!("socket reset"));
    let err = entries().all(&mut rows).unwrap_err();

    assert!(err.is_close_failure());
    assert_eq!(err.to_string(), "failed to close rows: socket reset");
}

#[test]
fn close_error_keeps_primary_error() {
    let mut rows = MockRows::empty().fail_close(rowbind::err!("socket reset"));
    let err = entries().one(&mut rows).unwrap_err();

    assert!(err.is_close_failure());
    assert!(err.is_no_rows());
    assert_eq!(
        err.to_string(),
        "no rows in result set; closing rows also failed: socket reset"
    );
}

#[test]
fn row_errors_name_the_scanner() {
    let schema = Schema::<Entry>::new([
        scan::string().parse_int(10, 64).to("count"),
        scan::string().to("label"),
    ])
    .unwrap();

    let mut rows = MockRows::new([row!["1", "a"], row!["x", "b"]]);
    let err = schema.all(&mut rows).unwrap_err();

    assert!(err.is_parse_failure());
    assert_eq!(
        err.to_string(),
        "scanner 0 (count): ParseInt: parsing \"x\": invalid syntax"
    );
    assert_eq!(rows.closed(), 1);
}

#[test]
fn mismatched_column_count_fails() {
    let mut rows = MockRows::new([row![1]]);
    assert!(entries().all(&mut rows).is_err());
    assert_eq!(rows.closed(), 1);
}

#[test]
fn scan_single_row() {
    let schema = entries();

    assert_eq!(
        schema.scan_row(MockRow(Some(row![3, Value::Null]))).unwrap(),
        entry(3, "unknown")
    );
    assert!(schema.scan_row(MockRow(None)).unwrap_err().is_no_rows());
}

#[test]
fn runner_reused_across_cursors() {
    let mut runner =
        Runner::<Entry>::new(&[scan::int().to("count"), scan::string().to("label")]).unwrap();
    assert_eq!(runner.columns(), 2);

    let first = runner.all(&mut MockRows::new([row![1, "a"]])).unwrap();
    let second = runner.all(&mut MockRows::new([row![2, "b"]])).unwrap();

    assert_eq!(first, vec![entry(1, "a")]);
    assert_eq!(second, vec![entry(2, "b")]);
}

#[test]
fn empty_scanner_list_reads_whole_record() {
    let mut runner = Runner::<i64>::new(&[]).unwrap();
    assert_eq!(runner.columns(), 1);

    let read = runner.all(&mut MockRows::new([row![5], row![6]])).unwrap();
    assert_eq!(read, vec![5, 6]);

    let schema = Schema::<String>::new(Vec::<Scanner>::new()).unwrap();
    assert_eq!(
        schema.one(&mut MockRows::new([row!["hello"]])).unwrap(),
        "hello"
    );
}

#[test]
fn struct_without_representation_needs_scanners() {
    let err = Runner::<Entry>::new(&[]).unwrap_err();
    assert!(err.is_type_incompatible());
}

#[test]
fn pipeline_without_path_binds_root() {
    let schema = Schema::<i32>::new([scan::string().trim_space().parse_int(10, 32)]).unwrap();
    let read = schema.all(&mut MockRows::new([row![" 12 "]])).unwrap();
    assert_eq!(read, vec![12]);
}
