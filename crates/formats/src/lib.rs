//! Comment column I/O
//!
//! Readers for the single-column input files the pipeline ingests
//! (CSV, JSONL, plain text) with automatic format detection, plus
//! writers for filtered and annotated output.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{Error, Result};
pub use reader::{open_comments, read_comments, CommentReader};
pub use writer::{write_annotated_csv, write_comments};
