//! Single-column comment readers with format auto-detection
//!
//! Input is one spreadsheet column of free text. CSV files must carry
//! exactly one column; JSONL objects contribute the value of their
//! text field; plain text files contribute one comment per line.
//! Blank cells are dropped at read time, the way a spreadsheet import
//! drops empty rows before processing.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::info;

/// Default JSONL field holding the comment text
const DEFAULT_TEXT_FIELD: &str = "text";

/// Streaming reader over the comments of an input file
pub trait CommentReader: Iterator<Item = Result<String>> {
    /// Number of rows consumed so far, including skipped blanks
    fn rows_processed(&self) -> usize;
}

/// CSV reader for headerless single-column files
pub struct CsvColumnReader {
    records: csv::StringRecordsIntoIter<File>,
    rows: usize,
}

impl CsvColumnReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path.as_ref())?;

        Ok(Self {
            records: reader.into_records(),
            rows: 0,
        })
    }
}

impl Iterator for CsvColumnReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e.into())),
            };
            self.rows += 1;

            if record.len() != 1 {
                return Some(Err(Error::InvalidFile(format!(
                    "expected a single column, row {} has {} fields",
                    self.rows,
                    record.len()
                ))));
            }

            let value = record[0].to_string();
            if value.trim().is_empty() {
                continue;
            }
            return Some(Ok(value));
        }
    }
}

impl CommentReader for CsvColumnReader {
    fn rows_processed(&self) -> usize {
        self.rows
    }
}

/// Plain-text reader, one comment per line
pub struct LineReader {
    lines: Lines<BufReader<File>>,
    rows: usize,
}

impl LineReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            rows: 0,
        })
    }
}

impl Iterator for LineReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.rows += 1;

            if line.trim().is_empty() {
                continue;
            }
            return Some(Ok(line));
        }
    }
}

impl CommentReader for LineReader {
    fn rows_processed(&self) -> usize {
        self.rows
    }
}

/// JSONL reader extracting one text field per object
pub struct JsonlCommentReader {
    lines: Lines<BufReader<File>>,
    field: String,
    rows: usize,
}

impl JsonlCommentReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            field: DEFAULT_TEXT_FIELD.to_string(),
            rows: 0,
        })
    }

    /// Use a different field as the comment text
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}

impl Iterator for JsonlCommentReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.rows += 1;

            if line.trim().is_empty() {
                continue;
            }

            let value: serde_json::Value = match serde_json::from_str(&line) {
                Ok(value) => value,
                Err(e) => return Some(Err(e.into())),
            };

            let text = match value.get(&self.field).and_then(|v| v.as_str()) {
                Some(text) => text.to_string(),
                None => {
                    return Some(Err(Error::InvalidFile(format!(
                        "line {} has no string field {:?}",
                        self.rows, self.field
                    ))))
                }
            };

            if text.trim().is_empty() {
                continue;
            }
            return Some(Ok(text));
        }
    }
}

impl CommentReader for JsonlCommentReader {
    fn rows_processed(&self) -> usize {
        self.rows
    }
}

/// Open a comment column with format detection by file extension.
///
/// Supported: `.csv` (single column), `.txt` (line per comment),
/// `.jsonl`/`.json` (text field per object).
pub fn open_comments<P: AsRef<Path>>(path: P) -> Result<Box<dyn CommentReader>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::UnsupportedFormat("No file extension found".to_string()))?;

    info!("Opening comments: {:?} (format: {})", path, extension);

    match extension {
        "csv" => Ok(Box::new(CsvColumnReader::open(path)?)),
        "txt" => Ok(Box::new(LineReader::open(path)?)),
        "jsonl" | "json" => Ok(Box::new(JsonlCommentReader::open(path)?)),
        _ => Err(Error::UnsupportedFormat(format!(
            "Unsupported file extension: {}",
            extension
        ))),
    }
}

/// Read a whole comment column into memory, preserving order.
pub fn read_comments<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    open_comments(path)?.collect()
}
