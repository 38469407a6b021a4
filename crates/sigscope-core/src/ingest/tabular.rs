//! Tabular I/Q Parser
//!
//! Decodes comma-delimited text with a header row into an I/Q component
//! pair. The header must contain columns named exactly `real` and `imag`
//! (case-sensitive); extra columns are ignored and row order is time order.
//!
//! Schema problems fail fast with full diagnostics: a missing column error
//! names every absent column and lists the columns actually present, since
//! that message is the only feedback a caller gets to fix a malformed file.
//! Non-numeric cells inside the two required columns are format errors;
//! a header with zero data rows is an empty pair, not an error.

use std::io::BufRead;

use crate::types::{IqPair, Sample, SignalError, SignalResult};

/// Column name for the in-phase component
pub const IN_PHASE_COLUMN: &str = "real";
/// Column name for the quadrature component
pub const QUADRATURE_COLUMN: &str = "imag";

/// Decode a delimited table into an I/Q component pair.
pub fn parse<R: BufRead>(reader: &mut R) -> SignalResult<IqPair> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        // A file with no header has no columns at all
        None => {
            return Err(SignalError::MissingColumns {
                missing: vec![IN_PHASE_COLUMN.to_string(), QUADRATURE_COLUMN.to_string()],
                available: Vec::new(),
            })
        }
    };

    let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();
    let i_index = columns.iter().position(|c| c == IN_PHASE_COLUMN);
    let q_index = columns.iter().position(|c| c == QUADRATURE_COLUMN);

    let (i_index, q_index) = match (i_index, q_index) {
        (Some(i), Some(q)) => (i, q),
        (i, q) => {
            let mut missing = Vec::new();
            if i.is_none() {
                missing.push(IN_PHASE_COLUMN.to_string());
            }
            if q.is_none() {
                missing.push(QUADRATURE_COLUMN.to_string());
            }
            return Err(SignalError::MissingColumns {
                missing,
                available: columns,
            });
        }
    };

    let mut in_phase = Vec::new();
    let mut quadrature = Vec::new();

    for (row, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        let needed = i_index.max(q_index) + 1;
        if fields.len() < needed {
            return Err(SignalError::RaggedRow {
                row,
                found: fields.len(),
                expected: needed,
            });
        }

        in_phase.push(parse_cell(fields[i_index], IN_PHASE_COLUMN, row)?);
        quadrature.push(parse_cell(fields[q_index], QUADRATURE_COLUMN, row)?);
    }

    Ok(IqPair::new(in_phase, quadrature))
}

fn parse_cell(cell: &str, column: &str, row: usize) -> SignalResult<Sample> {
    cell.trim()
        .parse::<Sample>()
        .map_err(|_| SignalError::BadCell {
            column: column.to_string(),
            row,
            value: cell.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_bpsk_table() {
        let mut input = Cursor::new("bits,real,imag\n0,1,0\n1,-1,0\n");
        let pair = parse(&mut input).unwrap();

        assert_eq!(pair.in_phase, vec![1.0, -1.0]);
        assert_eq!(pair.quadrature, vec![0.0, 0.0]);
    }

    #[test]
    fn test_missing_imag_names_column_and_lists_header() {
        let mut input = Cursor::new("bits,real\n0,1\n");
        let err = parse(&mut input).unwrap_err();

        match err {
            SignalError::MissingColumns { missing, available } => {
                assert_eq!(missing, vec!["imag".to_string()]);
                assert_eq!(available, vec!["bits".to_string(), "real".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_both_columns() {
        let mut input = Cursor::new("a,b\n1,2\n");
        let err = parse(&mut input).unwrap_err();

        match err {
            SignalError::MissingColumns { missing, .. } => {
                assert_eq!(missing, vec!["real".to_string(), "imag".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_schema_error_even_with_zero_rows() {
        let mut input = Cursor::new("bits,real\n");
        assert!(matches!(
            parse(&mut input).unwrap_err(),
            SignalError::MissingColumns { .. }
        ));
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let mut input = Cursor::new("Real,Imag\n1,2\n");
        let err = parse(&mut input).unwrap_err();

        match err {
            SignalError::MissingColumns { missing, available } => {
                assert_eq!(missing.len(), 2);
                assert_eq!(available, vec!["Real".to_string(), "Imag".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_is_empty_pair() {
        let mut input = Cursor::new("real,imag\n");
        let pair = parse(&mut input).unwrap();
        assert!(pair.is_empty());
    }

    #[test]
    fn test_non_numeric_cell_is_format_error() {
        let mut input = Cursor::new("real,imag\n1,0\nx,0\n");
        let err = parse(&mut input).unwrap_err();

        match err {
            SignalError::BadCell { column, row, value } => {
                assert_eq!(column, "real");
                assert_eq!(row, 1);
                assert_eq!(value, "x");
            }
            other => panic!("expected BadCell, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_ragged() {
        let mut input = Cursor::new("real,imag\n1\n");
        assert!(matches!(
            parse(&mut input).unwrap_err(),
            SignalError::RaggedRow { row: 0, found: 1, expected: 2 }
        ));
    }

    #[test]
    fn test_float_cells_and_blank_lines() {
        let mut input = Cursor::new("real,imag\n0.5,-0.25\n\n1e2,3\n");
        let pair = parse(&mut input).unwrap();

        assert_eq!(pair.in_phase, vec![0.5, 100.0]);
        assert_eq!(pair.quadrature, vec![-0.25, 3.0]);
    }
}
