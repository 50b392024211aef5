use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::error::{Result, TotemError};

/// Input fractions are converted to percentages.
pub const PERCENT_SCALE: f64 = 100.0;

// ---------------------------------------------------------------------------
// ColumnHeaders – the `#OTU ID` line
// ---------------------------------------------------------------------------

/// Names of the three table columns, taken from the `#OTU ID` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeaders {
    /// Row identifier column, normally `OTU ID`.
    pub id: String,
    /// First condition, drawn on the positive side.
    pub value1: String,
    /// Second condition, drawn mirrored on the negative side.
    pub value2: String,
}

impl fmt::Display for ColumnHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.id, self.value1, self.value2)
    }
}

// ---------------------------------------------------------------------------
// RawRow – one data line before numeric conversion
// ---------------------------------------------------------------------------

/// A data line split into its three fields, values still as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub id: String,
    pub value1: String,
    pub value2: String,
    /// 1-based line number in the source file, for error messages.
    pub line: u64,
}

// ---------------------------------------------------------------------------
// TableRow – one taxon, scaled for plotting
// ---------------------------------------------------------------------------

/// One taxon with both values in percent. `value2` is negated so it plots
/// on the mirrored side of the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub value1: f64,
    pub value2: f64,
}

impl TableRow {
    pub fn new(id: impl Into<String>, value1: f64, value2: f64) -> Self {
        TableRow {
            id: id.into(),
            value1,
            value2,
        }
    }

    /// Convert a raw row: `value1 * 100` and `-(value2 * 100)`.
    ///
    /// `inf`, `nan` and values that overflow once scaled are rejected.
    pub fn from_raw(raw: &RawRow, source: &Path) -> Result<Self> {
        let value1 = parse_percent(&raw.value1, raw.line, 2, source)?;
        let value2 = -parse_percent(&raw.value2, raw.line, 3, source)?;
        Ok(TableRow {
            id: raw.id.clone(),
            value1,
            value2,
        })
    }

    /// Combined bar length on both sides of the axis.
    pub fn magnitude(&self) -> f64 {
        self.value1.abs() + self.value2.abs()
    }
}

fn parse_percent(text: &str, line: u64, column: usize, source: &Path) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .map(|fraction| fraction * PERCENT_SCALE)
        .filter(|percent| percent.is_finite())
        .ok_or_else(|| TotemError::InvalidNumber {
            path: source.to_path_buf(),
            line,
            column,
            value: text.to_string(),
        })
}

// ---------------------------------------------------------------------------
// AbundanceTable – headers plus ordered rows
// ---------------------------------------------------------------------------

/// The parsed input table. Rows keep file order until a filter or sort
/// replaces them.
#[derive(Debug, Clone, PartialEq)]
pub struct AbundanceTable {
    pub headers: ColumnHeaders,
    pub rows: Vec<TableRow>,
}

impl AbundanceTable {
    pub fn new(headers: ColumnHeaders, rows: Vec<TableRow>) -> Self {
        AbundanceTable { headers, rows }
    }

    /// Convert raw rows read from `source`, failing on the first value that
    /// is not a number.
    pub fn from_raw(headers: ColumnHeaders, raw: &[RawRow], source: &Path) -> Result<Self> {
        let rows = raw
            .iter()
            .map(|r| TableRow::from_raw(r, source))
            .collect::<Result<Vec<_>>>()?;
        Ok(AbundanceTable { headers, rows })
    }

    /// Same headers, different rows.
    pub fn with_rows(&self, rows: Vec<TableRow>) -> Self {
        AbundanceTable {
            headers: self.headers.clone(),
            rows,
        }
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|r| r.id.as_str())
    }

    pub fn values1(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.value1)
    }

    pub fn values2(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.value2)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CoreSet – taxa to keep when `--core` is given
// ---------------------------------------------------------------------------

/// Unique, truncated taxonomy labels built from one or more core files.
///
/// Row identifiers are compared to these labels verbatim, so a table filtered
/// by a core set must use `;`-joined taxonomy strings of the same depth as
/// its identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreSet {
    labels: BTreeSet<String>,
}

impl CoreSet {
    pub fn contains(&self, id: &str) -> bool {
        self.labels.contains(id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}

impl FromIterator<String> for CoreSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        CoreSet {
            labels: iter.into_iter().collect(),
        }
    }
}
