use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use thiserror::Error;

use super::model::{BlockDataset, BlockRecord};

// ---------------------------------------------------------------------------
// Row-level error taxonomy
// ---------------------------------------------------------------------------

/// Errors for rows that violate the fixed CSV layout.
///
/// Any of these aborts the whole run: malformed rows are never skipped.
/// Row numbers are 0-based and count data rows (the header is excluded).
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("row {row}: identifier '{key}' does not split into <block>_<layer>")]
    MalformedIdentifier { row: usize, key: String },

    #[error("row {row}: block index 0 is out of range (blocks are numbered from 1)")]
    BlockOutOfRange { row: usize },

    #[error("row {row}: value '{text}' is not numeric")]
    NonNumericValue { row: usize, text: String },

    #[error("row {row}: value '{text}' is not finite")]
    NonFiniteValue { row: usize, text: String },

    #[error("no data rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a block/layer dataset from a file.  Dispatch by extension.
///
/// Only `.csv` is supported: a header row followed by rows whose first
/// column is a composite identifier `"<block>_<layer>"` and whose second
/// column is a numeric value.
pub fn load_file(path: &Path) -> Result<BlockDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_csv(file)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse the fixed two-column layout from any reader.
///
/// Columns are addressed by position, not by header name; the header row is
/// only required to be present and to carry at least two columns.
pub fn read_csv<R: Read>(input: R) -> Result<BlockDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader.headers().context("reading CSV header")?;
    if headers.len() < 2 {
        bail!(
            "expected at least two columns (identifier, value), found {}",
            headers.len()
        );
    }

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let key = record.get(0).unwrap_or("");
        let raw_value = record.get(1).unwrap_or("");

        let (block, layer) = split_identifier(key, row_no)?;

        let value: f64 = raw_value.trim().parse().map_err(|_| DataError::NonNumericValue {
            row: row_no,
            text: raw_value.to_string(),
        })?;
        if !value.is_finite() {
            return Err(DataError::NonFiniteValue {
                row: row_no,
                text: raw_value.to_string(),
            }
            .into());
        }

        records.push(BlockRecord { block, layer, value });
    }

    if records.is_empty() {
        bail!(DataError::Empty);
    }

    Ok(BlockDataset::from_records(records))
}

/// Split a composite identifier `"<block>_<layer>"` into its integer parts.
fn split_identifier(key: &str, row: usize) -> Result<(u32, u32), DataError> {
    let malformed = || DataError::MalformedIdentifier {
        row,
        key: key.to_string(),
    };

    let parts: Vec<&str> = key.split('_').collect();
    if parts.len() != 2 {
        return Err(malformed());
    }

    let block: u32 = parts[0].trim().parse().map_err(|_| malformed())?;
    let layer: u32 = parts[1].trim().parse().map_err(|_| malformed())?;

    if block == 0 {
        return Err(DataError::BlockOutOfRange { row });
    }

    Ok((block, layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv_text: &str) -> Result<BlockDataset> {
        read_csv(csv_text.as_bytes())
    }

    #[test]
    fn parses_the_fixed_layout() {
        let ds = parse("block_layer,value\n1_0,5.0\n1_1,10.0\n2_0,0.0\n").unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.unique_blocks, vec![1, 2]);
        assert_eq!(ds.records[0], BlockRecord { block: 1, layer: 0, value: 5.0 });
        assert_eq!(ds.records[2].composite_key(), "2_0");
    }

    #[test]
    fn header_names_do_not_matter() {
        let ds = parse("id,measurement\n3_2,-1.5\n").unwrap();
        assert_eq!(ds.records[0], BlockRecord { block: 3, layer: 2, value: -1.5 });
    }

    #[test]
    fn rejects_identifier_with_one_part() {
        let err = parse("k,v\n12,1.0\n").unwrap_err();
        let data_err = err.downcast::<DataError>().unwrap();
        assert_eq!(
            data_err,
            DataError::MalformedIdentifier { row: 0, key: "12".into() }
        );
    }

    #[test]
    fn rejects_identifier_with_three_parts() {
        let err = parse("k,v\n1_2_3,1.0\n").unwrap_err();
        assert!(matches!(
            err.downcast::<DataError>().unwrap(),
            DataError::MalformedIdentifier { .. }
        ));
    }

    #[test]
    fn rejects_non_integer_identifier_parts() {
        let err = parse("k,v\na_1,1.0\n").unwrap_err();
        assert!(matches!(
            err.downcast::<DataError>().unwrap(),
            DataError::MalformedIdentifier { .. }
        ));
    }

    #[test]
    fn rejects_block_zero() {
        let err = parse("k,v\n0_1,1.0\n").unwrap_err();
        assert_eq!(
            err.downcast::<DataError>().unwrap(),
            DataError::BlockOutOfRange { row: 0 }
        );
    }

    #[test]
    fn rejects_non_numeric_value() {
        let err = parse("k,v\n1_0,abc\n").unwrap_err();
        assert_eq!(
            err.downcast::<DataError>().unwrap(),
            DataError::NonNumericValue { row: 0, text: "abc".into() }
        );
    }

    #[test]
    fn rejects_non_finite_value() {
        let err = parse("k,v\n1_0,NaN\n").unwrap_err();
        assert!(matches!(
            err.downcast::<DataError>().unwrap(),
            DataError::NonFiniteValue { .. }
        ));
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse("k,v\n").unwrap_err();
        assert_eq!(err.downcast::<DataError>().unwrap(), DataError::Empty);
    }

    #[test]
    fn rejects_single_column_header() {
        assert!(parse("only\n1_0\n").is_err());
    }

    #[test]
    fn rejects_unsupported_extension() {
        let err = load_file(Path::new("data.parquet")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
