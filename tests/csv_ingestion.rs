use rust_tabular_ml::ingestion::csv::{read_csv, read_csv_from_path, read_csv_from_reader};
use rust_tabular_ml::types::{Cell, ColumnKind};
use rust_tabular_ml::IngestionError;

#[test]
fn read_csv_happy_path() {
    let df = read_csv("tests/fixtures/people.csv").unwrap();

    assert_eq!(df.rows(), 2);
    assert_eq!(df.get_column_names(), vec!["id", "name", "score", "active"]);
    assert_eq!(df.column_kind("id").unwrap(), ColumnKind::Numeric);
    assert_eq!(df.column_kind("active").unwrap(), ColumnKind::Categorical);
    assert_eq!(df.at(0, "name").unwrap(), Cell::Text("Ada"));
    assert_eq!(df.at(1, "score").unwrap(), 87.0);
}

#[test]
fn read_csv_with_tab_delimiter() {
    let df = read_csv_from_path("tests/fixtures/people.tsv", b'\t', true).unwrap();
    assert_eq!(df.cols(), 4);
    assert_eq!(df.at(0, "score").unwrap(), 98.5);
}

#[test]
fn read_csv_without_headers_treats_first_line_as_data() {
    let df = read_csv_from_path("tests/fixtures/people.csv", b',', false).unwrap();
    assert_eq!(df.rows(), 3);
    assert_eq!(df.get_column_names(), vec!["column_0", "column_1", "column_2", "column_3"]);
    // The header text makes every column categorical.
    assert_eq!(df.column_kind("column_0").unwrap(), ColumnKind::Categorical);
    assert_eq!(df.at(0, 0).unwrap(), Cell::Text("id"));
}

#[test]
fn read_csv_trims_cells() {
    let input = "id , name\n 1 ,  Ada \n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let df = read_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(df.get_column_names(), vec!["id", "name"]);
    assert_eq!(df.at(0, "id").unwrap(), 1.0);
    assert_eq!(df.at(0, "name").unwrap(), Cell::Text("Ada"));
}

#[test]
fn read_csv_errors_on_duplicate_headers() {
    let err = read_csv("tests/fixtures/duplicate_headers.csv").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("duplicate header 'id'"));
}

#[test]
fn read_csv_errors_on_missing_file() {
    let err = read_csv("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, IngestionError::Csv(_)));
}
