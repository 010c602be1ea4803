//! Writers for filtered and annotated comment output

use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write (comment, sentiment) pairs as an annotated CSV with a header.
pub fn write_annotated_csv<P, I, C, S>(path: P, rows: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (C, S)>,
    C: AsRef<str>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["comment", "sentiment"])?;

    let mut count = 0usize;
    for (comment, sentiment) in rows {
        writer.write_record([comment.as_ref(), sentiment.as_ref()])?;
        count += 1;
    }
    writer.flush()?;

    info!("Wrote {} annotated comments to {:?}", count, path);
    Ok(())
}

/// Write retained comments, one per row.
///
/// `.csv` output gets a single-column file with a header; any other
/// extension gets plain lines.
pub fn write_comments<P: AsRef<Path>>(path: P, comments: &[String]) -> Result<()> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "csv")
        .unwrap_or(false);

    if is_csv {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["comment"])?;
        for comment in comments {
            writer.write_record([comment.as_str()])?;
        }
        writer.flush()?;
    } else {
        let mut writer = BufWriter::new(File::create(path)?);
        for comment in comments {
            writeln!(writer, "{}", comment)?;
        }
        writer.flush()?;
    }

    info!("Wrote {} comments to {:?}", comments.len(), path);
    Ok(())
}
