// File: crates/bench-plot/tests/loader.rs
// Purpose: Loader behavior on well-formed, header-only and malformed result files.

use std::io::Write;
use std::path::Path;

use bench_plot::loader::{from_reader, load};
use bench_plot::{LoadError, Sample, Samples};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn loads_rows_in_file_order() {
    let file = write_csv("changes,avg_ms\n10,1.5\n20,2.75\n30,4.0\n");
    let samples = load(file.path()).expect("load");
    assert_eq!(samples.changes(), &[10, 20, 30]);
    assert_eq!(samples.avg_time_ms(), &[1.5, 2.75, 4.0]);
}

#[test]
fn series_lengths_match_row_count() {
    let mut csv = String::from("changes,avg_ms\n");
    for i in 0..250 {
        csv.push_str(&format!("{},{}\n", 1000 - i, i as f64 * 0.25));
    }
    let samples = load(write_csv(&csv).path()).expect("load");
    assert_eq!(samples.len(), 250);
    assert_eq!(samples.changes().len(), samples.avg_time_ms().len());
    // no re-sorting: first row first
    assert_eq!(samples.iter().next(), Some(Sample { change_count: 1000, avg_time_ms: 0.0 }));
}

#[test]
fn header_only_yields_empty_series() {
    let samples = load(write_csv("changes,avg_ms\n").path()).expect("load");
    assert!(samples.is_empty());
    assert!(samples.changes().is_empty());
    assert!(samples.avg_time_ms().is_empty());
}

#[test]
fn header_is_discarded_without_inspection() {
    // looks like data, still skipped
    let samples = load(write_csv("1,2.0\n3,4.0\n").path()).expect("load");
    assert_eq!(samples.changes(), &[3]);
}

#[test]
fn whitespace_extra_fields_and_exponents_are_accepted() {
    let samples = load(write_csv("changes,avg_ms,note\n 5 , 1e-3 ,warm\n6,2.5E1\n").path()).expect("load");
    assert_eq!(samples.changes(), &[5, 6]);
    assert_eq!(samples.avg_time_ms(), &[0.001, 25.0]);
}

#[test]
fn crlf_line_endings() {
    let samples = load(write_csv("changes,avg_ms\r\n1,0.5\r\n2,0.75\r\n").path()).expect("load");
    assert_eq!(samples.changes(), &[1, 2]);
}

#[test]
fn non_numeric_change_count_is_a_parse_error() {
    let err = load(write_csv("changes,avg_ms\n10,1.5\nabc,1.0\n").path()).expect_err("must fail");
    assert!(err.is_parse_error());
    match err {
        LoadError::InvalidNumber { line, field, value, .. } => {
            assert_eq!((line, field), (3, 0));
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn fractional_change_count_is_rejected() {
    let err = load(write_csv("changes,avg_ms\n10.5,1.5\n").path()).expect_err("must fail");
    assert!(matches!(err, LoadError::InvalidNumber { field: 0, .. }));
}

#[test]
fn non_numeric_time_is_a_parse_error() {
    let err = load(write_csv("changes,avg_ms\n10,fast\n").path()).expect_err("must fail");
    assert!(matches!(err, LoadError::InvalidNumber { line: 2, field: 1, .. }));
    assert!(err.to_string().contains("\"fast\""));
}

#[test]
fn short_row_is_a_parse_error() {
    let err = load(write_csv("changes,avg_ms\n10,1.5\n20\n").path()).expect_err("must fail");
    assert!(matches!(err, LoadError::MissingField { line: 3, found: 1 }));
    assert!(err.is_parse_error());
}

#[test]
fn blank_row_between_samples_is_a_parse_error() {
    let err = load(write_csv("changes,avg_ms\n10,1.5\n\n20,2.75\n").path()).expect_err("must fail");
    assert!(err.is_parse_error());
    assert!(matches!(err, LoadError::MissingField { line: 3, found: 0 }), "{err:?}");
}

#[test]
fn trailing_blank_line_is_a_parse_error() {
    let err = load(write_csv("changes,avg_ms\n10,1.5\n\n").path()).expect_err("must fail");
    assert!(matches!(err, LoadError::MissingField { line: 3, found: 0 }), "{err:?}");
}

#[test]
fn blank_rows_after_crlf_keep_their_line() {
    let err = load(write_csv("changes,avg_ms\r\n10,1.5\r\n\r\n\r\n20,2.75\r\n").path())
        .expect_err("must fail");
    assert!(matches!(err, LoadError::MissingField { line: 3, found: 0 }), "{err:?}");
}

#[test]
fn whitespace_only_row_has_one_empty_field() {
    let err = load(write_csv("changes,avg_ms\n10,1.5\n   \n").path()).expect_err("must fail");
    assert!(matches!(err, LoadError::MissingField { line: 3, found: 1 }), "{err:?}");
}

#[test]
fn blank_first_line_is_the_header() {
    let samples = load(write_csv("\n10,1.5\n20,2.75\n").path()).expect("load");
    assert_eq!(samples.changes(), &[10, 20]);
}

#[test]
fn crlf_errors_report_the_physical_line() {
    let err = load(write_csv("changes,avg_ms\r\n10,1.5\r\n20,1.5\r\nabc,1.0\r\n").path())
        .expect_err("must fail");
    assert!(matches!(err, LoadError::InvalidNumber { line: 4, field: 0, .. }), "{err:?}");
}

#[test]
fn missing_final_newline_is_accepted() {
    let samples = load(write_csv("changes,avg_ms\n10,1.5\n20,2.75").path()).expect("load");
    assert_eq!(samples.changes(), &[10, 20]);
}

#[test]
fn empty_file_has_no_header() {
    let err = load(write_csv("").path()).expect_err("must fail");
    assert!(matches!(err, LoadError::MissingHeader { .. }));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.csv");
    let err = load(&path).expect_err("must fail");
    assert!(matches!(err, LoadError::NotFound { ref path } if path.ends_with("out.csv")));
    assert!(!err.is_parse_error());
}

#[test]
fn invalid_utf8_is_malformed() {
    let bytes: &[u8] = b"changes,avg_ms\n1,\xff\xfe\n";
    let err = from_reader(bytes, Path::new("mem.csv")).expect_err("must fail");
    assert!(matches!(err, LoadError::Malformed { .. }));
}

#[test]
fn loading_twice_is_identical() {
    let file = write_csv("changes,avg_ms\n100,0.1\n200,0.30000000000000004\n300,1e308\n");
    let first = load(file.path()).expect("first load");
    let second = load(file.path()).expect("second load");
    assert_eq!(first, second);
    let bits = |s: &Samples| s.avg_time_ms().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first), bits(&second));
}
