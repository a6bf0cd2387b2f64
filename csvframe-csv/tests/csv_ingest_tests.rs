use csvframe_column_map::{ColumnData, ColumnStore, ColumnType};
use csvframe_csv::{ColumnStoreCsvExt, CsvReadOptions, IngestSchema, read_csv};
use csvframe_result::Error;
use csvframe_test_utils::{init_tracing_for_tests, write_temp_csv};

fn write_customer_csv() -> tempfile::NamedTempFile {
    write_temp_csv(
        "code,first,last,balance,visits\n\
         CUST0000010231,María,Alba,12.5,3\n\
         CUST0000010235,George,\"Lucas, Jr.\",7,11\n",
    )
}

#[test]
fn csv_ingest_names_and_types_columns_positionally() {
    init_tracing_for_tests();
    let csv_file = write_customer_csv();

    let store = ColumnStore::from_csv(
        csv_file.path(),
        &["CUSTOMER_CODE", "FIRSTNAME", "LASTNAME", "BALANCE", "VISITS"],
        &["CHAR", "CHAR", "CHAR", "FLOAT", "INTEGER"],
    )
    .expect("ingest customers");

    assert_eq!(
        store.column_names(),
        ["CUSTOMER_CODE", "FIRSTNAME", "LASTNAME", "BALANCE", "VISITS"]
    );
    assert_eq!(
        store.get("CUSTOMER_CODE").unwrap().as_utf8().unwrap(),
        ["CUST0000010231", "CUST0000010235"]
    );
    assert_eq!(
        store.get("FIRSTNAME").unwrap().as_utf8().unwrap(),
        ["Maria", "George"]
    );
    assert_eq!(
        store.get("LASTNAME").unwrap().as_utf8().unwrap(),
        ["Alba", "Lucas, Jr."]
    );
    assert_eq!(store.get("BALANCE").unwrap(), &ColumnData::Float64(vec![12.5, 7.0]));
    assert_eq!(store.get("VISITS").unwrap(), &ColumnData::Int64(vec![3, 11]));
    assert_eq!(store.row_count(), 2);
}

#[test]
fn csv_ingest_ignores_header_text() {
    init_tracing_for_tests();
    let csv_file = write_temp_csv("10,20\n30,40\n");

    let store = ColumnStore::from_csv(csv_file.path(), &["A", "B"], &["INTEGER", "INTEGER"])
        .expect("ingest");
    assert_eq!(store.get("A").unwrap(), &ColumnData::Int64(vec![30]));
    assert_eq!(store.get("B").unwrap(), &ColumnData::Int64(vec![40]));
}

#[test]
fn csv_ingest_keeps_header_row_when_disabled() {
    init_tracing_for_tests();
    let csv_file = write_temp_csv("a;b\nc;d\n");
    let schema = IngestSchema::new(vec!["X", "Y"], vec![ColumnType::Utf8, ColumnType::Utf8])
        .expect("schema");
    let options = CsvReadOptions {
        has_header: false,
        delimiter: b';',
        ..Default::default()
    };

    let store = read_csv(csv_file.path(), &schema, &options).expect("ingest");
    assert_eq!(store.get("X").unwrap().as_utf8().unwrap(), ["a", "c"]);
    assert_eq!(store.get("Y").unwrap().as_utf8().unwrap(), ["b", "d"]);
}

#[test]
fn csv_ingest_strips_embedded_quotes() {
    init_tracing_for_tests();
    let csv_file = write_temp_csv("t\n\"He said \"\"no\"\"\"\n");

    let store = ColumnStore::from_csv(csv_file.path(), &["T"], &["STRING"]).expect("ingest");
    assert_eq!(store.get("T").unwrap().as_utf8().unwrap(), ["He said no"]);
}

#[test]
fn csv_ingest_cast_failure_aborts() {
    init_tracing_for_tests();
    let csv_file = write_temp_csv("id,price\n1,2.75\n2,abc\n");

    let err = ColumnStore::from_csv(csv_file.path(), &["ID", "PRICE"], &["INTEGER", "FLOAT"])
        .unwrap_err();
    match err {
        Error::TypeCast {
            column,
            row,
            value,
            target,
        } => {
            assert_eq!(column, "PRICE");
            assert_eq!(row, 1);
            assert_eq!(value, "abc");
            assert_eq!(target, "FLOAT");
        }
        other => panic!("expected TypeCast, got {other:?}"),
    }
}

#[test]
fn csv_ingest_rejects_mismatched_configuration() {
    init_tracing_for_tests();
    let csv_file = write_temp_csv("a\n1\n");

    let err = ColumnStore::from_csv(csv_file.path(), &["A", "B"], &["INTEGER"]).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn csv_ingest_missing_file_is_io_error() {
    init_tracing_for_tests();
    let dir = tempfile::tempdir().expect("tmp dir");
    let missing = dir.path().join("missing.csv");

    let err = ColumnStore::from_csv(&missing, &["A"], &["STRING"]).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
