//! Per-column profiling of a sheet: dtype label, null count, distinct count
//! and the first few non-null values.
//!
//! The first row of a sheet's used range is the header; columns count from
//! column A. Dtype labels use the dataframe vocabulary downstream tooling
//! already reads (`int64`, `float64`, `bool`, `datetime64[ns]`, `object`).

use std::collections::{HashMap, HashSet};

use calamine::Data;
use serde_json::Value;

use super::source::SheetRange;

pub const SAMPLE_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CellKind {
    Int,
    Float,
    Bool,
    DateTime,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
enum CellValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(String),
    Text(String),
}

impl CellValue {
    fn kind(&self) -> CellKind {
        match self {
            Self::Int(_) => CellKind::Int,
            Self::Float(_) => CellKind::Float,
            Self::Bool(_) => CellKind::Bool,
            Self::DateTime(_) => CellKind::DateTime,
            Self::Text(_) => CellKind::Text,
        }
    }

    /// Identity for distinct counting; integral floats and ints collide.
    fn distinct_key(&self) -> String {
        match self {
            Self::Int(value) => format!("n:{value}"),
            Self::Float(value) => format!("n:{value}"),
            Self::Bool(value) => format!("b:{value}"),
            Self::DateTime(value) => format!("d:{value}"),
            Self::Text(value) => format!("s:{value}"),
        }
    }

    fn to_json(&self, dtype: &str) -> Value {
        match self {
            Self::Int(value) if dtype == FLOAT_DTYPE => Value::from(*value as f64),
            Self::Int(value) => Value::from(*value),
            Self::Float(value) => Value::from(*value),
            Self::Bool(value) => Value::from(*value),
            Self::DateTime(value) | Self::Text(value) => Value::from(value.as_str()),
        }
    }
}

const INT_DTYPE: &str = "int64";
const FLOAT_DTYPE: &str = "float64";
const BOOL_DTYPE: &str = "bool";
const DATETIME_DTYPE: &str = "datetime64[ns]";
const OBJECT_DTYPE: &str = "object";

// Integral floats above this lose precision as i64 round-trips.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

fn float_value(value: f64) -> CellValue {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_FLOAT_INT {
        CellValue::Int(value as i64)
    } else {
        CellValue::Float(value)
    }
}

/// `None` for cells that count as null: empty cells and spreadsheet errors.
fn classify(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::Int(value) => Some(CellValue::Int(*value)),
        Data::Float(value) => Some(float_value(*value)),
        Data::Bool(value) => Some(CellValue::Bool(*value)),
        Data::String(value) => Some(CellValue::Text(value.clone())),
        Data::DateTime(value) => Some(CellValue::DateTime(
            value
                .as_datetime()
                .map(|moment| moment.format("%Y-%m-%dT%H:%M:%S").to_string())
                .unwrap_or_else(|| value.as_f64().to_string()),
        )),
        Data::DateTimeIso(value) => Some(CellValue::DateTime(value.clone())),
        other => Some(CellValue::Text(other.to_string())),
    }
}

fn dtype_label(kinds: &HashSet<CellKind>, null_count: usize) -> &'static str {
    let only = |allowed: &[CellKind]| kinds.iter().all(|kind| allowed.contains(kind));

    if kinds.is_empty() {
        // An all-null column has no values to type; dataframes default to float.
        FLOAT_DTYPE
    } else if only(&[CellKind::Int]) {
        if null_count == 0 {
            INT_DTYPE
        } else {
            FLOAT_DTYPE
        }
    } else if only(&[CellKind::Int, CellKind::Float]) {
        FLOAT_DTYPE
    } else if only(&[CellKind::Bool]) {
        if null_count == 0 {
            BOOL_DTYPE
        } else {
            OBJECT_DTYPE
        }
    } else if only(&[CellKind::DateTime]) {
        DATETIME_DTYPE
    } else {
        OBJECT_DTYPE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
    pub unique_count: usize,
    pub samples: Vec<Value>,
}

pub fn profile_column<'a>(name: &str, cells: impl IntoIterator<Item = &'a Data>) -> ColumnProfile {
    let mut null_count = 0;
    let mut kinds = HashSet::new();
    let mut distinct = HashSet::new();
    let mut samples = Vec::with_capacity(SAMPLE_LIMIT);

    for cell in cells {
        let Some(value) = classify(cell) else {
            null_count += 1;
            continue;
        };
        kinds.insert(value.kind());
        distinct.insert(value.distinct_key());
        if samples.len() < SAMPLE_LIMIT {
            samples.push(value);
        }
    }

    let dtype = dtype_label(&kinds, null_count);
    ColumnProfile {
        name: name.to_string(),
        dtype: dtype.to_string(),
        null_count,
        unique_count: distinct.len(),
        samples: samples.iter().map(|value| value.to_json(dtype)).collect(),
    }
}

fn header_label(cell: &Data) -> Option<String> {
    match classify(cell)? {
        CellValue::Text(text) if text.is_empty() => None,
        CellValue::Int(value) => Some(value.to_string()),
        CellValue::Float(value) => Some(value.to_string()),
        CellValue::Bool(value) => Some(value.to_string()),
        CellValue::DateTime(text) | CellValue::Text(text) => Some(text),
    }
}

/// Header labels for each column. Blank headers become `Unnamed: <index>`;
/// repeated labels get `.1`, `.2`, ... suffixes in order of appearance.
pub fn column_names(header: &[Data]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut repeats: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(header.len());

    for (index, cell) in header.iter().enumerate() {
        let base = header_label(cell).unwrap_or_else(|| format!("Unnamed: {index}"));
        let mut name = base.clone();
        if taken.contains(&name) {
            let counter = repeats.entry(base.clone()).or_insert(0);
            loop {
                *counter += 1;
                name = format!("{base}.{counter}");
                if !taken.contains(&name) {
                    break;
                }
            }
        }
        taken.insert(name.clone());
        names.push(name);
    }

    names
}

/// Profile every column of `range`. Returns the data row count alongside
/// the column profiles.
///
/// Used ranges begin at the first non-empty column, but sheets begin at
/// column A, so leading empty columns are profiled as all-null columns.
pub fn profile_columns(range: &SheetRange) -> (usize, Vec<ColumnProfile>) {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return (0, Vec::new());
    };
    let offset = range.start().map_or(0, |(_, column)| column as usize);
    let padded_header: Vec<Data> = std::iter::repeat(Data::Empty)
        .take(offset)
        .chain(header.iter().cloned())
        .collect();
    let names = column_names(&padded_header);
    let data_rows: Vec<&[Data]> = rows.collect();
    let empty = Data::Empty;

    let profiles = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let cells = data_rows.iter().map(|&row| {
                index
                    .checked_sub(offset)
                    .and_then(|local| row.get(local))
                    .unwrap_or(&empty)
            });
            profile_column(name, cells)
        })
        .collect();

    (data_rows.len(), profiles)
}
