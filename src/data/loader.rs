use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use super::model::{Dataset, LinearModel};
use crate::error::PlotError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the observed data from a CSV file with `km` and `price` columns.
///
/// Layout: header row, then one record per line. Columns are located by
/// name, so order does not matter and extra columns are ignored:
///
/// ```text
/// km,price
/// 240000,3650
/// 139800,3800
/// ```
pub fn load_dataset(path: &Path) -> Result<Dataset, PlotError> {
    let mut reader = open(path)?;
    let headers = read_headers(&mut reader, path)?;
    let km_idx = column_index(&headers, path, "km")?;
    let price_idx = column_index(&headers, path, "price")?;

    let mut dataset = Dataset::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| read_error(path, source))?;
        let row = row_no + 1;

        let km = parse_cell(&record, km_idx, path, row, "km")?;
        let price = parse_cell(&record, price_idx, path, row, "price")?;
        dataset.push(km, price);
    }

    log::info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load the regression coefficients from a CSV file with `a` and `b` columns.
///
/// Only the first data row is read; anything after it (further rows, extra
/// columns such as a learning rate) is ignored.
pub fn load_model(path: &Path) -> Result<LinearModel, PlotError> {
    let mut reader = open(path)?;
    let headers = read_headers(&mut reader, path)?;
    let a_idx = column_index(&headers, path, "a")?;
    let b_idx = column_index(&headers, path, "b")?;

    let record = match reader.records().next() {
        Some(result) => result.map_err(|source| read_error(path, source))?,
        None => {
            return Err(PlotError::NoRows {
                path: path.to_path_buf(),
            })
        }
    };

    let model = LinearModel::new(
        parse_cell(&record, a_idx, path, 1, "a")?,
        parse_cell(&record, b_idx, path, 1, "b")?,
    );
    log::debug!("Loaded model a={} b={} from {}", model.a, model.b, path.display());
    Ok(model)
}

// ---------------------------------------------------------------------------
// CSV helpers
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<csv::Reader<File>, PlotError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| read_error(path, source))
}

fn read_headers(reader: &mut csv::Reader<File>, path: &Path) -> Result<StringRecord, PlotError> {
    reader
        .headers()
        .cloned()
        .map_err(|source| read_error(path, source))
}

fn column_index(
    headers: &StringRecord,
    path: &Path,
    column: &'static str,
) -> Result<usize, PlotError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| PlotError::MissingColumn {
            path: path.to_path_buf(),
            column,
        })
}

fn parse_cell(
    record: &StringRecord,
    idx: usize,
    path: &Path,
    row: usize,
    column: &'static str,
) -> Result<f64, PlotError> {
    let text = record.get(idx).unwrap_or("");
    text.parse::<f64>().map_err(|_| PlotError::NotNumeric {
        path: path.to_path_buf(),
        row,
        column,
        value: text.to_string(),
    })
}

fn read_error(path: &Path, source: csv::Error) -> PlotError {
    PlotError::Read {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::ErrorKind;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn loads_scenario_pair() {
        let dataset = load_dataset(&fixture("scenario_data.csv")).unwrap();
        let model = load_model(&fixture("scenario_model.csv")).unwrap();

        assert_eq!(dataset.km(), &[0.0, 100000.0]);
        assert_eq!(dataset.price(), &[10000.0, 5000.0]);
        assert_eq!(model, LinearModel::new(-0.05, 10000.0));
        assert_eq!(model.derived_series(&dataset), vec![10000.0, 5000.0]);
    }

    #[test]
    fn loads_full_dataset_in_file_order() {
        let dataset = load_dataset(&fixture("data.csv")).unwrap();
        assert_eq!(dataset.len(), 24);
        assert_eq!(dataset.points().next(), Some([240000.0, 3650.0]));
        assert_eq!(dataset.points().last(), Some([61789.0, 8290.0]));
    }

    #[test]
    fn columns_are_found_by_name() {
        let dataset = load_dataset(&fixture("reordered_data.csv")).unwrap();
        assert_eq!(dataset.km(), &[1000.0, 2000.0]);
        assert_eq!(dataset.price(), &[9000.0, 8000.0]);
    }

    #[test]
    fn model_reads_only_first_row() {
        let model = load_model(&fixture("model.csv")).unwrap();
        assert_eq!(model, LinearModel::new(-0.021448963, 8499.599649));
    }

    #[test]
    fn loading_twice_gives_identical_series() {
        let first = {
            let ds = load_dataset(&fixture("data.csv")).unwrap();
            load_model(&fixture("model.csv")).unwrap().derived_series(&ds)
        };
        let second = {
            let ds = load_dataset(&fixture("data.csv")).unwrap();
            load_model(&fixture("model.csv")).unwrap().derived_series(&ds)
        };
        assert_eq!(first, second);
    }

    #[test]
    fn missing_price_column_is_load_error() {
        let err = load_dataset(&fixture("no_price.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
        assert!(matches!(err, PlotError::MissingColumn { column: "price", .. }));
    }

    #[test]
    fn missing_model_column_is_load_error() {
        let err = load_model(&fixture("model_missing_b.csv")).unwrap_err();
        assert!(matches!(err, PlotError::MissingColumn { column: "b", .. }));
    }

    #[test]
    fn model_without_rows_fails() {
        let err = load_model(&fixture("empty_model.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
        assert!(matches!(err, PlotError::NoRows { .. }));
    }

    #[test]
    fn missing_file_is_load_error() {
        let err = load_dataset(&fixture("does_not_exist.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
        assert!(err.to_string().contains("does_not_exist.csv"));
    }

    #[test]
    fn non_numeric_cell_is_compute_error() {
        let err = load_dataset(&fixture("bad_number.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Compute);
        match err {
            PlotError::NotNumeric {
                row, column, value, ..
            } => {
                assert_eq!(row, 2);
                assert_eq!(column, "price");
                assert_eq!(value, "cheap");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_coefficient_is_compute_error() {
        let err = load_model(&fixture("bad_model.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Compute);
        match err {
            PlotError::NotNumeric {
                row, column, value, ..
            } => {
                assert_eq!(row, 1);
                assert_eq!(column, "b");
                assert_eq!(value, "steep");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn headers_and_fields_are_trimmed() {
        let dataset = load_dataset(&fixture("padded_data.csv")).unwrap();
        assert_eq!(dataset.km(), &[1000.0, 2000.0]);
        assert_eq!(dataset.price(), &[9000.0, 8000.0]);
    }

    #[test]
    fn multiline_cell_keeps_its_text() {
        let err = load_dataset(&fixture("multiline_cell.csv")).unwrap_err();
        assert!(matches!(
            err,
            PlotError::NotNumeric { ref value, .. } if value == "a\nb"
        ));
    }

    #[test]
    fn ragged_row_is_load_error() {
        let err = load_dataset(&fixture("ragged.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
    }
}
