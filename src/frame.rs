//! Tabular dataset with named, typed columns.

use std::io::Read;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::plotting::error::{PlotError, PlotResult};

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// A single column of values. Missing numeric values are NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Categorical(Vec<Option<String>>),
    Datetime(Vec<Option<NaiveDateTime>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
            Column::Datetime(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Column::Numeric(_) => "numeric",
            Column::Categorical(_) => "categorical",
            Column::Datetime(_) => "datetime",
        }
    }

    /// Whether row `i` holds a missing value. Only NaN counts as missing
    /// in numeric columns; infinities are kept.
    pub fn is_missing(&self, i: usize) -> bool {
        match self {
            Column::Numeric(v) => v.get(i).map_or(true, |x| x.is_nan()),
            Column::Categorical(v) => v.get(i).map_or(true, Option::is_none),
            Column::Datetime(v) => v.get(i).map_or(true, Option::is_none),
        }
    }

    /// Values on a numeric axis: numbers as-is, datetimes as seconds since
    /// the Unix epoch. Categorical columns have no numeric form.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            Column::Numeric(v) => Some(v.clone()),
            Column::Datetime(v) => Some(
                v.iter()
                    .map(|d| d.map_or(f64::NAN, |d| d.and_utc().timestamp() as f64))
                    .collect(),
            ),
            Column::Categorical(_) => None,
        }
    }

    /// Row `i` as a group label.
    pub fn label_at(&self, i: usize) -> Option<String> {
        match self {
            Column::Numeric(v) => v.get(i).filter(|x| !x.is_nan()).map(|x| x.to_string()),
            Column::Categorical(v) => v.get(i).cloned().flatten(),
            Column::Datetime(v) => v.get(i).copied().flatten().map(|d| d.to_string()),
        }
    }

    /// Select rows by index.
    pub fn take(&self, rows: &[usize]) -> Column {
        match self {
            Column::Numeric(v) => Column::Numeric(rows.iter().map(|&i| v[i]).collect()),
            Column::Categorical(v) => {
                Column::Categorical(rows.iter().map(|&i| v[i].clone()).collect())
            }
            Column::Datetime(v) => Column::Datetime(rows.iter().map(|&i| v[i]).collect()),
        }
    }

    /// Infer a column from JSON values: all numbers (or null) make a numeric
    /// column, strings that all parse as dates make a datetime column, and
    /// any other mix of strings, numbers and booleans is categorical.
    fn from_json(name: &str, values: Vec<Value>) -> PlotResult<Column> {
        if values.iter().all(|v| v.is_number() || v.is_null()) {
            return Ok(Column::Numeric(
                values
                    .iter()
                    .map(|v| v.as_f64().unwrap_or(f64::NAN))
                    .collect(),
            ));
        }

        let strings: Vec<Option<String>> = values
            .into_iter()
            .map(|v| match v {
                Value::Null => Ok(None),
                Value::String(s) => Ok(Some(s)),
                Value::Number(n) => Ok(Some(n.to_string())),
                Value::Bool(b) => Ok(Some(b.to_string())),
                other => Err(PlotError::InvalidData(format!(
                    "column '{}' holds a nested value: {}",
                    name, other
                ))),
            })
            .collect::<PlotResult<_>>()?;

        let parsed: Vec<Option<NaiveDateTime>> = strings
            .iter()
            .map(|s| s.as_deref().and_then(parse_datetime))
            .collect();
        let all_dates = strings
            .iter()
            .zip(parsed.iter())
            .all(|(s, d)| s.is_none() || d.is_some());
        if all_dates {
            debug!("Column '{}' parsed as datetime", name);
            Ok(Column::Datetime(parsed))
        } else {
            Ok(Column::Categorical(strings))
        }
    }
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl From<Vec<f64>> for Column {
    fn from(v: Vec<f64>) -> Self {
        Column::Numeric(v)
    }
}

impl From<Vec<&str>> for Column {
    fn from(v: Vec<&str>) -> Self {
        Column::Categorical(v.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl From<Vec<NaiveDateTime>> for Column {
    fn from(v: Vec<NaiveDateTime>) -> Self {
        Column::Datetime(v.into_iter().map(Some).collect())
    }
}

/// One or more column names. Built from a single name or a sequence; always
/// iterated as an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct Columns(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Columns {
    fn from(v: OneOrMany) -> Self {
        match v {
            OneOrMany::One(s) => Columns(vec![s]),
            OneOrMany::Many(v) => Columns(v),
        }
    }
}

impl Columns {
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for Columns {
    fn from(s: &str) -> Self {
        Columns(vec![s.to_string()])
    }
}

impl From<String> for Columns {
    fn from(s: String) -> Self {
        Columns(vec![s])
    }
}

impl From<Vec<String>> for Columns {
    fn from(v: Vec<String>) -> Self {
        Columns(v)
    }
}

impl From<Vec<&str>> for Columns {
    fn from(v: Vec<&str>) -> Self {
        Columns(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Columns {
    fn from(v: &[&str]) -> Self {
        Columns(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Columns {
    fn from(v: [&str; N]) -> Self {
        Columns(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Ordered named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    columns: IndexMap<String, Column>,
    len: usize,
}

impl DataFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`DataFrame::insert`].
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> PlotResult<Self> {
        self.insert(name, column)?;
        Ok(self)
    }

    /// Add or replace a column. Every column must match the row count of
    /// the columns already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> PlotResult<()> {
        let name = name.into();
        let column = column.into();
        let others = self.columns.keys().any(|k| *k != name);
        if others && column.len() != self.len {
            return Err(PlotError::LengthMismatch {
                name,
                expected: self.len,
                actual: column.len(),
            });
        }
        self.len = column.len();
        self.columns.insert(name, column);
        Ok(())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> PlotResult<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| PlotError::UnknownColumn(name.to_string()))
    }

    /// A column that must be numeric.
    pub fn numeric(&self, name: &str) -> PlotResult<&[f64]> {
        match self.column(name)? {
            Column::Numeric(v) => Ok(v),
            other => Err(PlotError::InvalidData(format!(
                "column '{}' is {}, expected numeric",
                name,
                other.kind()
            ))),
        }
    }

    /// Keep only the given rows, in the given order.
    pub fn take(&self, rows: &[usize]) -> DataFrame {
        DataFrame {
            columns: self
                .columns
                .iter()
                .map(|(k, c)| (k.clone(), c.take(rows)))
                .collect(),
            len: rows.len(),
        }
    }

    /// Copy without the rows that are missing a value in any of `columns`.
    pub fn dropna(&self, columns: &Columns) -> PlotResult<DataFrame> {
        let selected = columns
            .iter()
            .map(|c| self.column(c))
            .collect::<PlotResult<Vec<_>>>()?;
        let keep: Vec<usize> = (0..self.len)
            .filter(|&i| selected.iter().all(|c| !c.is_missing(i)))
            .collect();
        if keep.len() < self.len {
            debug!("Dropped {} rows with missing values", self.len - keep.len());
        }
        Ok(self.take(&keep))
    }

    /// Row indices per distinct label of `column`, in order of first
    /// appearance. Rows with a missing label are left out.
    pub fn groups(&self, column: &str) -> PlotResult<IndexMap<String, Vec<usize>>> {
        let col = self.column(column)?;
        let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
        for i in 0..self.len {
            if let Some(label) = col.label_at(i) {
                groups.entry(label).or_default().push(i);
            }
        }
        Ok(groups)
    }

    /// Read the column-oriented JSON form `{"name": [values, ...], ...}`.
    pub fn from_json_reader<R: Read>(reader: R) -> PlotResult<DataFrame> {
        let raw: IndexMap<String, Vec<Value>> = serde_json::from_reader(reader)?;
        let mut frame = DataFrame::new();
        for (name, values) in raw {
            let column = Column::from_json(&name, values)?;
            frame.insert(name, column)?;
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        DataFrame::new()
            .with_column("a", vec![1.0, f64::NAN, 3.0])
            .unwrap()
            .with_column("b", vec![4.0, 5.0, 6.0])
            .unwrap()
            .with_column("g", vec!["x", "y", "x"])
            .unwrap()
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = sample().with_column("c", vec![1.0]).unwrap_err();
        assert!(matches!(err, PlotError::LengthMismatch { expected: 3, actual: 1, .. }));
    }

    #[test]
    fn test_replacing_sole_column_changes_length() {
        let mut df = DataFrame::new().with_column("a", vec![1.0, 2.0]).unwrap();
        df.insert("a", vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(df.len(), 3);
    }

    #[test]
    fn test_dropna_only_checks_selected_columns() {
        let df = sample();
        assert_eq!(df.dropna(&Columns::from("b")).unwrap().len(), 3);
        let dropped = df.dropna(&Columns::from(["a", "b"])).unwrap();
        assert_eq!(dropped.numeric("b").unwrap(), &[4.0, 6.0]);
        assert!(matches!(
            df.dropna(&Columns::from("zz")),
            Err(PlotError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_dropna_keeps_infinite_values() {
        let df = DataFrame::new()
            .with_column("v", vec![f64::INFINITY, f64::NAN, f64::NEG_INFINITY, 2.0])
            .unwrap();
        let kept = df.dropna(&Columns::from("v")).unwrap();
        assert_eq!(
            kept.numeric("v").unwrap(),
            &[f64::INFINITY, f64::NEG_INFINITY, 2.0]
        );
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let groups = sample().groups("g").unwrap();
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(groups["x"], vec![0, 2]);
    }

    #[test]
    fn test_columns_normalization() {
        let one: Columns = serde_json::from_str("\"a\"").unwrap();
        let many: Columns = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(one, Columns::from("a"));
        assert_eq!(many, Columns::from(vec!["a", "b"]));
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn test_from_json_infers_types() {
        let json = r#"{
            "value": [1, 2.5, null],
            "day": ["2021-01-01", "2021-01-02", null],
            "label": ["a", "b", "a"]
        }"#;
        let df = DataFrame::from_json_reader(json.as_bytes()).unwrap();
        let names: Vec<&str> = df.column_names().collect();
        assert_eq!(names, vec!["value", "day", "label"]);
        assert!(df.numeric("value").unwrap()[2].is_nan());
        assert_eq!(df.column("day").unwrap().kind(), "datetime");
        assert_eq!(df.column("label").unwrap().kind(), "categorical");
        let secs = df.column("day").unwrap().to_f64().unwrap();
        assert_eq!(secs[1] - secs[0], 86_400.0);
    }

    #[test]
    fn test_from_json_length_mismatch() {
        let json = r#"{"a": [1, 2], "b": [1]}"#;
        assert!(DataFrame::from_json_reader(json.as_bytes()).is_err());
    }
}
