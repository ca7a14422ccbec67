use std::fs;

use report_builder::io::{read_csv_table, read_tsv_table};
use report_builder::plots::plot_scatter;
use report_builder::{DataTable, ReportError, TableConfig};

#[test]
fn csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.csv");
    fs::write(&path, "sample,reads,mean_q\nbarcode01,125431,12.4\nbarcode02,98210,11.9\n")
        .unwrap();

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.columns(), ["sample", "reads", "mean_q"]);
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.rows()[1][0], "barcode02");
}

#[test]
fn tsv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.tsv");
    fs::write(&path, "name\tvalue\ndepth\t31.2\n").unwrap();

    let table = read_tsv_table(&path).unwrap();
    assert_eq!(table.columns(), ["name", "value"]);
    assert_eq!(table.n_rows(), 1);
}

#[test]
fn ragged_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "a,b\n1,2\n3\n").unwrap();

    assert!(read_csv_table(&path).is_err());
}

#[test]
fn mismatched_columns_are_invalid() {
    let err = DataTable::from_columns(
        vec!["a".to_string(), "b".to_string()],
        vec![vec!["1".to_string()], vec!["2".to_string(), "3".to_string()]],
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::InvalidArgument(_)));
}

#[test]
fn mismatched_rows_are_invalid() {
    let mut table = DataTable::new(vec!["only".to_string()]);
    let err = table
        .push_row(vec!["1".to_string(), "2".to_string()])
        .unwrap_err();
    assert!(matches!(err, ReportError::InvalidArgument(_)));
}

#[test]
fn index_labels_must_match_row_count() {
    let mut table = DataTable::new(vec!["v".to_string()]);
    table.push_row(vec!["1".to_string()]).unwrap();
    let err = table
        .clone()
        .with_index(vec!["r1".to_string(), "r2".to_string()])
        .unwrap_err();
    assert!(matches!(err, ReportError::InvalidArgument(_)));

    let labeled = table.with_index(vec!["r1".to_string()]).unwrap();
    let config = TableConfig {
        index: true,
        ..TableConfig::default()
    };
    let markup = labeled.to_markup(&config).into_string();
    assert!(markup.contains("r1"));
}

#[test]
fn rows_added_after_index_labels_fall_back_to_row_numbers() {
    let mut table = DataTable::new(vec!["v".to_string()]);
    table.push_row(vec!["1".to_string()]).unwrap();
    let mut table = table.with_index(vec!["r1".to_string()]).unwrap();
    table.push_row(vec!["2".to_string()]).unwrap();

    let config = TableConfig {
        index: true,
        ..TableConfig::default()
    };
    let markup = table.to_markup(&config).into_string();
    assert!(markup.contains("r1"));
    assert!(markup.contains("<td>2</td>"));
}

#[test]
fn extra_options_pass_through_to_init_json() {
    let mut config = TableConfig::default();
    config
        .extra
        .insert("perPageSelect".to_string(), serde_json::json!([5, 10, 25]));

    let json = config.to_options_json();
    assert!(json.contains("\"perPageSelect\":[5,10,25]"));
    assert!(json.contains("\"sortable\":true"));
    assert!(json.contains("\"perPage\":10"));
}

#[test]
fn plot_helpers_validate_parallel_lengths() {
    let err = match plot_scatter(
        &[vec![1.0, 2.0]],
        &[vec![1.0]],
        vec!["trace".to_string()],
        "t",
        "x",
        "y",
    ) {
        Err(err) => err,
        Ok(_) => panic!("expected plot_scatter to reject mismatched lengths"),
    };
    assert!(matches!(err, ReportError::InvalidArgument(_)));

    let ok = plot_scatter(
        &[vec![1.0, 2.0]],
        &[vec![3.0, 4.0]],
        vec!["trace".to_string()],
        "t",
        "x",
        "y",
    );
    assert!(ok.is_ok());
}
