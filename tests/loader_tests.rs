use filmscope_rs::data::{RawValue, normalize, rows_from_csv_reader};

const CSV: &str = "\
Title,ReleaseYear,Director,IMDb,Minutes,BoxOffice
Castle in the Sky,1986,Hayao Miyazaki,8.0,125,\"$15,542,039\"
My Neighbor Totoro,1988,Hayao Miyazaki,8.1,86,
";

#[test]
fn csv_rows_keep_source_column_order_and_blank_cells_become_null() {
    let rows = rows_from_csv_reader(CSV.as_bytes()).expect("read csv");
    assert_eq!(rows.len(), 2);

    let columns: Vec<&str> = rows[0].keys().map(String::as_str).collect();
    assert_eq!(
        columns,
        vec!["Title", "ReleaseYear", "Director", "IMDb", "Minutes", "BoxOffice"]
    );

    assert_eq!(rows[1].get("BoxOffice"), Some(&RawValue::Null));
}

#[test]
fn csv_rows_normalize_through_the_alias_tables() {
    let rows = rows_from_csv_reader(CSV.as_bytes()).expect("read csv");
    let record = normalize(&rows[0]);

    assert_eq!(record.title.as_deref(), Some("Castle in the Sky"));
    assert_eq!(record.year, 1986.0);
    assert_eq!(record.gross, 15_542_039.0);

    let record = normalize(&rows[1]);
    assert!(record.gross.is_nan());
    assert_eq!(record.runtime, 86.0);
}

#[test]
fn malformed_csv_surfaces_a_load_error() {
    // Unclosed quote makes the reader fail mid-stream.
    let result = rows_from_csv_reader("a,b\n\"broken,1\n2,3".as_bytes());
    assert!(result.is_err());
}
