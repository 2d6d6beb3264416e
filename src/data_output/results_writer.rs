// src/data_output/results_writer.rs

use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_RESULTS_FILE, RESULTS_DELIMITER};
use crate::data_analysis::series::Series;
use crate::error::{FunctionPlotError, Result};

/// Writes a series as `<x> <y>` lines to a file under an explicit base directory.
#[derive(Debug, Clone)]
pub struct ResultsWriter {
    base_dir: PathBuf,
    file_name: PathBuf,
}

impl ResultsWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_name: PathBuf::from(DEFAULT_RESULTS_FILE),
        }
    }

    /// Overrides the output file name (default `results.txt`).
    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.file_name)
    }

    /// Writes the series, replacing any previous content. Returns the path written.
    pub fn write(&self, series: &Series) -> Result<PathBuf> {
        let path = self.output_path();
        let file = File::create(&path)?;
        write_series(BufWriter::new(file), series)?;
        log::info!("  Wrote {} samples to '{}'.", series.len(), path.display());
        Ok(path)
    }
}

/// Serializes one `x y` record per sample, floats in `Display` form.
pub fn write_series<W: Write>(writer: W, series: &Series) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(RESULTS_DELIMITER)
        .has_headers(false)
        .from_writer(writer);
    for (x, y) in series.iter() {
        wtr.write_record([x.to_string(), y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parses `x y` lines back into a series. Blank lines are skipped.
pub fn read_series<R: Read>(reader: R) -> Result<Series> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(RESULTS_DELIMITER)
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut x_values = Vec::new();
    let mut y_values = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;
        let parse_field = |idx: usize| -> Result<f64> {
            record
                .get(idx)
                .and_then(|val_str| val_str.parse::<f64>().ok())
                .ok_or_else(|| FunctionPlotError::MalformedResults {
                    line: row_index + 1,
                    content: record.iter().collect::<Vec<_>>().join(" "),
                })
        };
        x_values.push(parse_field(0)?);
        y_values.push(parse_field(1)?);
    }
    Series::from_parts(x_values, y_values)
}

/// Reads a results file written by [`ResultsWriter::write`].
pub fn read_results_file(path: &Path) -> Result<Series> {
    let file = File::open(path)?;
    read_series(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(x: Vec<f64>, y: Vec<f64>) -> Series {
        Series::from_parts(x, y).unwrap()
    }

    #[test]
    fn test_line_format() {
        let mut buf = Vec::new();
        write_series(&mut buf, &series(vec![0.0, 0.5, 1.0], vec![-1.25, 2.0, 3.5])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 -1.25\n0.5 2\n1 3.5\n");
    }

    #[test]
    fn test_non_finite_values_written_verbatim() {
        let mut buf = Vec::new();
        let s = series(vec![0.0, 1.0, 2.0], vec![f64::INFINITY, f64::NEG_INFINITY, f64::NAN]);
        write_series(&mut buf, &s).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 inf\n1 -inf\n2 NaN\n");
    }

    #[test]
    fn test_empty_series_writes_nothing() {
        let mut buf = Vec::new();
        write_series(&mut buf, &Series::default()).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_read_rejects_garbage() {
        let err = read_series("1 2\n3 x\n".as_bytes()).unwrap_err();
        match err {
            FunctionPlotError::MalformedResults { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "3 x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_parses_non_finite() {
        let s = read_series("0 inf\n1 NaN\n".as_bytes()).unwrap();
        assert_eq!(s.x(), &[0.0, 1.0]);
        assert!(s.y()[0].is_infinite());
        assert!(s.y()[1].is_nan());
    }

    #[test]
    fn test_output_path_under_base_dir() {
        let writer = ResultsWriter::new("/data/run");
        assert_eq!(writer.output_path(), PathBuf::from("/data/run/results.txt"));
        let renamed = ResultsWriter::new("/data/run").with_file_name("out.txt");
        assert_eq!(renamed.output_path(), PathBuf::from("/data/run/out.txt"));
    }
}
