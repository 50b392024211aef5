use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::model::{AbundanceTable, ColumnHeaders, CoreSet, RawRow};
use super::taxonomy::{clean_taxa_string, truncate_ranks};
use crate::error::{Result, TotemError};

/// Prefix of the header line naming the three columns.
pub const HEADER_PREFIX: &str = "#OTU ID";

/// Lines starting with this character are comments (the header included).
const COMMENT: char = '#';

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the abundance table at `path`: headers, rows, and the percent
/// conversion of both value columns.
pub fn load_table(path: &Path) -> Result<AbundanceTable> {
    let headers = read_headers(path)?;
    let raw = read_values(path)?;
    log::debug!("{}: {} data rows, columns [{headers}]", path.display(), raw.len());
    AbundanceTable::from_raw(headers, &raw, path)
}

// ---------------------------------------------------------------------------
// Table reader
// ---------------------------------------------------------------------------

/// Find the `#OTU ID` line and split it into the three column names.
///
/// When the file holds more than one such line the last one wins.
pub fn read_headers(path: &Path) -> Result<ColumnHeaders> {
    let file = File::open(path).map_err(|e| TotemError::io(path, e))?;
    let mut header_line = None;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| TotemError::io(path, e))?;
        if line.starts_with(HEADER_PREFIX) {
            header_line = Some(line);
        }
    }

    let line = header_line.ok_or_else(|| TotemError::MissingHeader {
        path: path.to_path_buf(),
    })?;
    let fields: Vec<&str> = line.trim_start_matches(COMMENT).trim_end().split('\t').collect();

    match fields.as_slice() {
        [id, value1, value2] => Ok(ColumnHeaders {
            id: id.to_string(),
            value1: value1.to_string(),
            value2: value2.to_string(),
        }),
        _ => Err(TotemError::MalformedHeader {
            path: path.to_path_buf(),
            fields: fields.len(),
        }),
    }
}

/// Read every non-comment line as `identifier \t value1 \t value2`.
pub fn read_values(path: &Path) -> Result<Vec<RawRow>> {
    let mut rows = Vec::new();

    for (line, text) in data_lines(path)? {
        let fields: Vec<&str> = text.split('\t').collect();

        match fields.as_slice() {
            [id, value1, value2] => rows.push(RawRow {
                id: id.to_string(),
                value1: value1.to_string(),
                value2: value2.to_string(),
                line,
            }),
            _ => {
                return Err(TotemError::MalformedRow {
                    path: path.to_path_buf(),
                    line,
                    fields: fields.len(),
                })
            }
        }
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Core-set loader
// ---------------------------------------------------------------------------

/// Collect the unique taxonomy labels of all `files`, each cleaned and cut to
/// its first `depth` ranks.
///
/// Core files are tab-separated with the taxonomy list in the second column,
/// e.g. `1234\t[u'k__Bacteria', u'p__Firmicutes']`.
pub fn load_core_set<P: AsRef<Path>>(files: &[P], depth: usize) -> Result<CoreSet> {
    let mut labels = Vec::new();

    for path in files {
        let path = path.as_ref();
        let before = labels.len();

        for (line, text) in data_lines(path)? {
            let raw = text.split('\t').nth(1).ok_or_else(|| TotemError::MissingTaxonomy {
                path: path.to_path_buf(),
                line,
            })?;
            labels.push(truncate_ranks(&clean_taxa_string(raw), depth));
        }

        log::debug!("{}: {} core taxa", path.display(), labels.len() - before);
    }

    Ok(labels.into_iter().collect())
}

// -- Tab-separated helpers --

/// Data lines of a file with their 1-based line numbers.
///
/// Trailing whitespace is stripped, so `a\tb\tc\t\r` has three fields.
/// Comment lines and blank lines are skipped.
fn data_lines(path: &Path) -> Result<Vec<(u64, String)>> {
    let file = File::open(path).map_err(|e| TotemError::io(path, e))?;
    let mut lines = Vec::new();

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let mut line = line.map_err(|e| TotemError::io(path, e))?;
        line.truncate(line.trim_end().len());
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }
        lines.push((idx as u64 + 1, line));
    }

    Ok(lines)
}
