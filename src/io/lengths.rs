use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{NplotError, Result};

/// Open a lengths file for reading, handles gzipped files automatically
pub fn open_lengths(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read one non-negative integer per line. Surrounding whitespace on a line
/// is ignored; a blank or otherwise malformed line fails with the line
/// number and offending text.
pub fn read_lengths(path: &Path) -> Result<Vec<u64>> {
    let reader = open_lengths(path)?;
    let mut lengths = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        let value = trimmed.parse::<u64>().map_err(|_| NplotError::Parse {
            path: path.to_path_buf(),
            line: i + 1,
            value: trimmed.to_string(),
        })?;
        lengths.push(value);
    }
    Ok(lengths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_one_integer_per_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  100").unwrap();
        writeln!(file, "30 ").unwrap();
        writeln!(file, "5").unwrap();

        let lengths = read_lengths(file.path()).unwrap();
        assert_eq!(lengths, vec![100, 30, 5]);
    }

    #[test]
    fn empty_file_yields_empty_vector() {
        let file = NamedTempFile::new().unwrap();
        assert!(read_lengths(file.path()).unwrap().is_empty());
    }

    #[test]
    fn malformed_line_reports_position() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "100").unwrap();
        writeln!(file, "forty").unwrap();

        match read_lengths(file.path()) {
            Err(NplotError::Parse { line, value, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "forty");
            }
            other => panic!("expected parse error, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn blank_line_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "100").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "30").unwrap();

        assert!(matches!(
            read_lengths(file.path()),
            Err(NplotError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn negative_value_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "-5").unwrap();

        assert!(matches!(
            read_lengths(file.path()),
            Err(NplotError::Parse { line: 1, .. })
        ));
    }
}
