//! End-to-end: EOD files on disk → MarketDataset → curves → slope compare.

use chrono::NaiveDate;
use eodlab_core::curve::{slope, slope_compare, Curve};
use eodlab_core::data::{DataError, DatasetError, EodDirectory, MarketDataset, ParseError};
use eodlab_core::{EodConfig, PriceField, SymbolId};
use std::fs;
use std::path::Path;

const HEADER: &str = "<ticker>,<date>,<open>,<high>,<low>,<close>,<vol>";

fn write_day(dir: &Path, date: &str, rows: &[&str]) {
    let mut body = String::from(HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    fs::write(dir.join(format!("NYSE_{date}.txt")), body).unwrap();
}

fn fixture(dir: &Path) {
    write_day(
        dir,
        "20190923",
        &[
            "A,20190923,78.00,78.50,77.00,78.00,1000",
            "AA,20190923,20.00,20.50,19.50,20.00,500",
        ],
    );
    write_day(
        dir,
        "20190924",
        &[
            "A,20190924,78.29,78.39,75.64,76.00,4317500",
            "AA,20190924,20.00,21.00,19.90,21.00,700",
        ],
    );
    // AA missing on the 25th
    write_day(dir, "20190925", &["A,20190925,76.00,77.00,75.00,77.00,2000"]);
    write_day(
        dir,
        "20190926",
        &[
            "AA,20190926,21.00,23.50,21.00,23.00,800",
            "A,20190926,77.00,80.00,76.50,80.00,2500",
        ],
    );
    write_day(
        dir,
        "20190927",
        &[
            "A,20190927,80.00,80.00,78.00,78.00,2500",
            "AA,20190927,23.00,24.00,22.00,24.00,900",
        ],
    );
    fs::write(dir.join("README.md"), "not an EOD file").unwrap();
}

fn load(dir: &Path) -> Result<MarketDataset, DatasetError> {
    MarketDataset::load(&EodDirectory::new(dir, "NYSE_", "txt"))
}

#[test]
fn builds_dataset_from_directory() {
    let tmp = tempfile::tempdir().unwrap();
    fixture(tmp.path());

    let ds = load(tmp.path()).unwrap();
    assert_eq!(ds.date_count(), 5);
    assert_eq!(ds.symbol_count(), 2);
    assert_eq!(ds.len(), 9);
    assert_eq!(ds.symbol_name(SymbolId(0)), Some("A"));
    assert_eq!(ds.symbol_name(SymbolId(1)), Some("AA"));
    assert_eq!(ds.dates().first(), NaiveDate::from_ymd_opt(2019, 9, 23));
}

#[test]
fn curves_follow_the_date_axis() {
    let tmp = tempfile::tempdir().unwrap();
    fixture(tmp.path());
    let ds = load(tmp.path()).unwrap();

    let aa = ds.extract_curve("AA", PriceField::Close);
    assert_eq!(aa.xs(), vec![0, 1, 3, 4]);
    assert_eq!(aa.y(2), None);
    assert_eq!(aa.y(3), Some(23.0));

    let vol = ds.extract_curve_by_name("A", "volume").unwrap();
    assert_eq!(vol.y(1), Some(4_317_500.0));
}

#[test]
fn slope_compare_over_real_files() {
    let tmp = tempfile::tempdir().unwrap();
    fixture(tmp.path());
    let ds = load(tmp.path()).unwrap();

    let a = ds.extract_curve("A", PriceField::Close);
    let aa = ds.extract_curve("AA", PriceField::Close);

    // A closes 78, 76, 77, 80, 78 at x = 0..=4 -> slopes -2, 1, 3 at x = 0, 1, 2
    let sa = slope(&a).unwrap();
    assert_eq!(sa.xs(), vec![0, 1, 2]);
    assert_eq!(sa.y(2), Some(3.0));

    // AA closes 20, 21, 23, 24 at x = 0, 1, 3, 4 -> slopes 1 at x = 0, 1 at x = 1
    let saa = slope(&aa).unwrap();
    assert_eq!(saa.xs(), vec![0, 1]);
    assert_eq!(saa.y(1), Some(1.0));

    // aligned at x = 0 (-2 - 1) and x = 1 (1 - 1); walk stops past AA's last x = 1
    let result = slope_compare(&a, &aa);
    assert_eq!(result.gaps, 0);
    assert!((result.score - -3.0).abs() < 1e-6);
}

#[test]
fn unknown_symbol_compares_as_empty() {
    let tmp = tempfile::tempdir().unwrap();
    fixture(tmp.path());
    let ds = load(tmp.path()).unwrap();

    let a = ds.extract_curve("A", PriceField::Close);
    let nope = ds.extract_curve("NOPE", PriceField::Close);
    assert!(nope.is_empty());

    let result = slope_compare(&a, &nope);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.gaps, 3);
}

#[test]
fn malformed_row_aborts_the_whole_build() {
    let tmp = tempfile::tempdir().unwrap();
    fixture(tmp.path());
    write_day(
        tmp.path(),
        "20190930",
        &[
            "A,20190930,78.00,78.50,77.00,78.00,1000",
            "AA,20190930,20.00,20.50,19.50,twenty,500",
        ],
    );

    let err = load(tmp.path()).unwrap_err();
    match err {
        DatasetError::Parse { date, row, source } => {
            assert_eq!(date, NaiveDate::from_ymd_opt(2019, 9, 30).unwrap());
            assert_eq!(row, 2);
            assert!(matches!(source, ParseError::InvalidNumber { field: "close", .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn row_dated_off_axis_aborts() {
    let tmp = tempfile::tempdir().unwrap();
    write_day(
        tmp.path(),
        "20190923",
        &["A,20190922,78.00,78.50,77.00,78.00,1000"],
    );

    let err = load(tmp.path()).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::Parse {
            source: ParseError::DateNotOnAxis { .. },
            ..
        }
    ));
}

#[test]
fn short_row_aborts() {
    let tmp = tempfile::tempdir().unwrap();
    write_day(tmp.path(), "20190923", &["A,20190923,78.00"]);

    let err = load(tmp.path()).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::Parse {
            source: ParseError::FieldCount { found: 3 },
            ..
        }
    ));
}

#[test]
fn impossible_date_in_file_name_aborts_the_build() {
    let tmp = tempfile::tempdir().unwrap();
    fixture(tmp.path());
    fs::write(tmp.path().join("NYSE_20191332.txt"), format!("{HEADER}\n")).unwrap();

    let err = load(tmp.path()).unwrap_err();
    match err {
        DatasetError::Data(DataError::InvalidFileDate { path, .. }) => {
            assert_eq!(path, tmp.path().join("NYSE_20191332.txt"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_directory_gives_empty_dataset() {
    let tmp = tempfile::tempdir().unwrap();
    let ds = load(tmp.path()).unwrap();
    assert!(ds.is_empty());
    assert_eq!(ds.date_count(), 0);
}

#[test]
fn config_drives_directory_layout() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("AMEX_20200102.csv"),
        format!("{HEADER}\nX,20200102,1,1,1,1,1\n"),
    )
    .unwrap();

    let cfg = EodConfig::from_toml(&format!(
        "data_dir = {:?}\nfile_prefix = \"AMEX_\"\nfile_extension = \"csv\"\n",
        tmp.path().display().to_string()
    ))
    .unwrap();
    let ds = MarketDataset::load(&EodDirectory::from_config(&cfg)).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.symbol_id("X"), Some(SymbolId(0)));
}
