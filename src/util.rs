use crate::reports::{ReportError, ReportResult};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

fn is_gzip(path: &Path) -> bool {
    path.extension().map(|ext| ext == "gz").unwrap_or(false)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ReportError + '_ {
    move |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn open_reader(path: &Path) -> ReportResult<Box<dyn BufRead>> {
    let file = File::open(path).map_err(io_error(path))?;
    if is_gzip(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read JSON from `path`, transparently gunzipping `*.gz` files.
pub fn read_serialized<T: DeserializeOwned>(path: &Path) -> ReportResult<T> {
    let mut raw = String::new();
    open_reader(path)?
        .read_to_string(&mut raw)
        .map_err(io_error(path))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write pretty JSON to `path`, gzipped if it ends in `.gz`.
pub fn write_serialized<T: Serialize>(path: &Path, value: &T) -> ReportResult<()> {
    let file = File::create(path).map_err(io_error(path))?;

    if is_gzip(path) {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer_pretty(&mut encoder, value)?;
        encoder
            .finish()
            .and_then(|mut inner| inner.flush())
            .map_err(io_error(path))?;
    } else {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush().map_err(io_error(path))?;
    }

    Ok(())
}

/// Non-blank lines of a JSON-lines file, numbered from 1.
pub fn read_lines(path: &Path) -> ReportResult<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for (i, line) in open_reader(path)?.lines().enumerate() {
        let line = line.map_err(io_error(path))?;
        if !line.trim().is_empty() {
            lines.push((i + 1, line));
        }
    }
    Ok(lines)
}

pub fn read_text(path: &Path) -> ReportResult<String> {
    let mut raw = String::new();
    open_reader(path)?
        .read_to_string(&mut raw)
        .map_err(io_error(path))?;
    Ok(raw)
}
