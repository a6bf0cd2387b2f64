use csv::Terminator;
use csvframe_column_map::{ColumnData, ColumnStore};
use csvframe_csv::{ColumnStoreCsvExt, CsvWriteOptions, TextEncoding, export_csv};
use csvframe_result::Error;
use csvframe_test_utils::{init_tracing_for_tests, write_temp_csv};
use tempfile::NamedTempFile;

fn sample_store() -> ColumnStore {
    ColumnStore::from_columns([
        ("ID", ColumnData::from(vec![1i64, 2, 3])),
        ("NAME", ColumnData::from(vec!["alpha", "beta", "gamma"])),
        ("SCORE", ColumnData::from(vec![0.5, 10.0, 2.25])),
    ])
    .expect("sample store")
}

#[test]
fn export_writes_header_and_one_line_per_row() {
    init_tracing_for_tests();
    let store = sample_store();
    let out_file = NamedTempFile::new().expect("create export csv");

    let rows = store.export(out_file.path()).expect("export csv");
    assert_eq!(rows, store.row_count());

    let contents = std::fs::read_to_string(out_file.path()).expect("read exported csv");
    let expected = "ID,NAME,SCORE\r\n1,alpha,0.5\r\n2,beta,10.0\r\n3,gamma,2.25\r\n";
    assert_eq!(contents, expected);
}

#[test]
fn export_with_custom_options() {
    init_tracing_for_tests();
    let store = sample_store();
    let out_file = NamedTempFile::new().expect("create export csv");

    let options = CsvWriteOptions {
        include_header: false,
        delimiter: b'|',
        encoding: TextEncoding::Utf8,
        terminator: Terminator::Any(b'\n'),
    };
    export_csv(&store, out_file.path(), &options).expect("export csv");

    let contents = std::fs::read_to_string(out_file.path()).expect("read exported csv");
    assert_eq!(contents, "1|alpha|0.5\n2|beta|10.0\n3|gamma|2.25\n");
}

#[test]
fn export_fails_on_characters_outside_latin1() {
    init_tracing_for_tests();
    let store = ColumnStore::from_columns([("SYMBOL", ColumnData::from(vec!["$", "€"]))])
        .expect("store");
    let out_file = NamedTempFile::new().expect("create export csv");

    let err = store.export(out_file.path()).unwrap_err();
    assert!(matches!(err, Error::Encoding { ch: '€', .. }));
}

#[test]
fn export_then_ingest_reproduces_values() {
    init_tracing_for_tests();
    let store = sample_store();
    let out_file = NamedTempFile::new().expect("create export csv");
    store.export(out_file.path()).expect("export csv");

    let reloaded = ColumnStore::from_csv(
        out_file.path(),
        &["ID", "NAME", "SCORE"],
        &["INTEGER", "STRING", "FLOAT"],
    )
    .expect("ingest exported csv");
    assert_eq!(reloaded, store);
}

#[test]
fn ingest_then_export_then_ingest_is_stable() {
    init_tracing_for_tests();
    let source = write_temp_csv("k,v\nx,1.5\ny,2\n");
    let names = ["K", "V"];
    let dtypes = ["STRING", "FLOAT"];

    let first = ColumnStore::from_csv(source.path(), &names, &dtypes).expect("ingest");
    let out_file = NamedTempFile::new().expect("create export csv");
    first.export(out_file.path()).expect("export");
    let second = ColumnStore::from_csv(out_file.path(), &names, &dtypes).expect("re-ingest");

    assert_eq!(first, second);
}
