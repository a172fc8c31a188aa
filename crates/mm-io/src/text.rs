use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use memmap2::Mmap;
use mm_core::{Matrix, Shape};

use crate::error::{DataError, Result};

/// Parse a matrix from text: one row per line, integers separated by
/// whitespace.
///
/// Blank lines are skipped. Every non-blank line must hold the same number
/// of values as the first. Empty input yields a `[0x0]` matrix.
pub fn parse_matrix(text: &str) -> Result<Matrix> {
    let mut data = Vec::new();
    let mut rows = 0usize;
    let mut cols: Option<usize> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let before = data.len();
        for token in line.split_whitespace() {
            let value = token.parse::<i64>().map_err(|e| DataError::Format {
                line: line_no,
                reason: format!("invalid integer {:?}: {}", token, e),
            })?;
            data.push(value);
        }

        let width = data.len() - before;
        match cols {
            None => cols = Some(width),
            Some(expected) if expected != width => {
                return Err(DataError::Format {
                    line: line_no,
                    reason: format!("expected {} values, found {}", expected, width),
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    Ok(Matrix::new(data, Shape::new(rows, cols.unwrap_or(0))))
}

/// Load a matrix file.
///
/// The file is memory-mapped and parsed in place.
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    let file = File::open(path)?;
    // Mapping a zero-length file fails on some platforms.
    if file.metadata()?.len() == 0 {
        return Ok(Matrix::zeros(Shape::new(0, 0)));
    }

    let mmap = unsafe { Mmap::map(&file)? };
    let matrix = parse_matrix(std::str::from_utf8(&mmap)?)?;
    debug!("loaded {} matrix from {}", matrix.shape(), path.display());
    Ok(matrix)
}

/// Write `matrix` in the layout `parse_matrix` reads: one row per line,
/// values separated by a single space.
pub fn write_matrix<W: Write>(matrix: &Matrix, mut out: W) -> std::io::Result<()> {
    for row in matrix.iter_rows() {
        let mut values = row.iter();
        if let Some(first) = values.next() {
            write!(out, "{}", first)?;
        }
        for v in values {
            write!(out, " {}", v)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn format_matrix(matrix: &Matrix) -> String {
    let mut buf = Vec::new();
    write_matrix(matrix, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Save `matrix` to `path`, creating parent directories as needed.
pub fn save_matrix(matrix: &Matrix, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_matrix(matrix, BufWriter::new(file))?;
    debug!("saved {} matrix to {}", matrix.shape(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let m = parse_matrix("1 2 3\n4 5 6\n").unwrap();
        assert_eq!(m.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        // Trailing spaces as older writers emitted, tabs, CRLF and blank lines.
        let m = parse_matrix("1 2 \r\n\n  -3\t4\n\n").unwrap();
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![-3, 4]]);
    }

    #[test]
    fn test_parse_empty() {
        let m = parse_matrix("").unwrap();
        assert_eq!(m.shape(), Shape::new(0, 0));
        let m = parse_matrix("\n  \n").unwrap();
        assert_eq!(m.shape(), Shape::new(0, 0));
    }

    #[test]
    fn test_parse_bad_token() {
        let err = parse_matrix("1 2\n3 x\n").unwrap_err();
        match err {
            DataError::Format { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("\"x\""));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_ragged() {
        let err = parse_matrix("1 2\n\n3\n").unwrap_err();
        match err {
            DataError::Format { line, reason } => {
                assert_eq!(line, 3);
                assert_eq!(reason, "expected 2 values, found 1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_format() {
        let m = Matrix::from_rows(vec![vec![19, 22], vec![43, -50]]).unwrap();
        assert_eq!(format_matrix(&m), "19 22\n43 -50\n");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("m.txt");
        let m = Matrix::from_rows(vec![vec![1, 0, 2], vec![7, 8, 9]]).unwrap();

        save_matrix(&m, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1 0 2\n7 8 9\n");
        assert_eq!(load_matrix(&path).unwrap(), m);
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();
        assert_eq!(load_matrix(&path).unwrap().shape(), Shape::new(0, 0));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_matrix(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        std::fs::write(&path, [0xff, 0xfe, b'1']).unwrap();
        assert!(matches!(load_matrix(&path).unwrap_err(), DataError::Utf8(_)));
    }
}
