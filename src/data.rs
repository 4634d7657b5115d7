use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::csv_reader::CsvData;
use crate::error::{ChartError, Result};

/// One cell of tabular input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Null,
}

impl Scalar {
    /// Number cell with negative zero folded into zero.
    pub fn number(n: f64) -> Self {
        Scalar::Number(if n == 0.0 { 0.0 } else { n })
    }

    /// Infer a cell from raw spreadsheet text: finite numbers where they
    /// parse, null for empty cells, text otherwise. Words such as `NaN` or
    /// `inf` stay text.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Scalar::Null;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Scalar::number(n),
            _ => Scalar::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Ordering used to sort records by a key column: two numbers compare
    /// numerically, every other pair compares by text rendering.
    ///
    /// This is not a total order on mixed columns (`9 < 10`, `"10" < "5x"`,
    /// `"5x" < "9"`), so it must only be used with a sort that tolerates
    /// inconsistent comparators.
    pub fn key_cmp(&self, other: &Scalar) -> Ordering {
        match (self, other) {
            (Scalar::Number(a), Scalar::Number(b)) => cmp_numbers(*a, *b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }

    /// Total order used for grid levels: numbers ascending, then text,
    /// then null.
    pub fn level_cmp(&self, other: &Scalar) -> Ordering {
        match (self, other) {
            (Scalar::Number(a), Scalar::Number(b)) => cmp_numbers(*a, *b),
            (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b),
            (Scalar::Null, Scalar::Null) => Ordering::Equal,
            (Scalar::Number(_), _) => Ordering::Less,
            (_, Scalar::Number(_)) => Ordering::Greater,
            (Scalar::Text(_), Scalar::Null) => Ordering::Less,
            (Scalar::Null, Scalar::Text(_)) => Ordering::Greater,
        }
    }
}

/// Numeric order where `-0.0 == 0.0`; NaN only ever compares by bits.
fn cmp_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Null => Ok(()),
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::number(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// One row, stored positionally against [`Dataset::headers`].
pub type Record = Vec<Scalar>;

/// The ordered records of one analysis session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Record>) -> Self {
        Self { headers, rows }
    }

    /// Build a dataset from parsed CSV text, inferring each cell.
    pub fn from_csv(csv: CsvData) -> Self {
        let rows = csv
            .rows
            .iter()
            .map(|row| {
                (0..csv.headers.len())
                    .map(|i| row.get(i).map(|s| Scalar::infer(s)).unwrap_or(Scalar::Null))
                    .collect()
            })
            .collect();
        Self {
            headers: csv.headers,
            rows,
        }
    }

    /// Build a dataset from a JSON array of objects. The column set and its
    /// order come from the first object's keys; fields missing from later
    /// objects are null and extra fields are ignored.
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value.as_array().ok_or_else(|| {
            ChartError::InvalidInput("input data must be a JSON array of objects".to_string())
        })?;

        let Some(first) = array.first() else {
            return Ok(Self::default());
        };

        let first_obj = first.as_object().ok_or_else(|| {
            ChartError::InvalidInput("items in array must be objects".to_string())
        })?;
        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::with_capacity(array.len());
        for item in array {
            let obj = item.as_object().ok_or_else(|| {
                ChartError::InvalidInput("items in array must be objects".to_string())
            })?;

            let mut row = Vec::with_capacity(headers.len());
            for header in &headers {
                let cell = match obj.get(header) {
                    Some(Value::Number(n)) => n.as_f64().map(Scalar::number).unwrap_or(Scalar::Null),
                    Some(Value::String(s)) => Scalar::Text(s.clone()),
                    Some(Value::Bool(b)) => Scalar::Text(b.to_string()),
                    Some(Value::Null) | None => Scalar::Null,
                    Some(_) => {
                        return Err(ChartError::InvalidInput(format!(
                            "unsupported value type for field '{}'",
                            header
                        )))
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at `row`/`col`, null when the row is shorter than the header list.
    pub fn cell(&self, row: usize, col: usize) -> &Scalar {
        const NULL: &Scalar = &Scalar::Null;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(NULL)
    }
}
