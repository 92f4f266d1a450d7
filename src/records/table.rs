use std::fmt;

use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

use crate::error::{AppError, Result};
use crate::fetch::decode::{is_scalar, value_to_string};

const COLUMN_GAP: &str = "  ";
const SCALAR_COLUMN: &str = "value";

/// Column-oriented view of a JSON response, keyed by its top-level fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Shape a decoded JSON body into rows and columns.
    ///
    /// Objects of arrays become one row per index with scalar fields repeated
    /// on every row; objects of scalars become a single row; arrays of objects
    /// become one row per element.
    pub fn from_json(root: &Value) -> Result<Self> {
        match root {
            Value::Object(map) => Self::from_object(map),
            Value::Array(items) => Self::from_array(items),
            other => Err(AppError::NotTabular(format!(
                "expected an object or array at the top level, got `{}`",
                value_to_string(other)
            ))),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Result<Self> {
        let columns: Vec<String> = map.keys().cloned().collect();

        let mut length: Option<(usize, &str)> = None;
        for (key, value) in map {
            if let Value::Array(items) = value {
                match length {
                    None => length = Some((items.len(), key.as_str())),
                    Some((expected, first)) if expected != items.len() => {
                        return Err(AppError::NotTabular(format!(
                            "column `{key}` has {} entries but `{first}` has {expected}",
                            items.len()
                        )));
                    }
                    Some(_) => {}
                }
            }
        }

        let rows = match length {
            None if map.is_empty() => Vec::new(),
            None => vec![map.values().cloned().collect()],
            Some((count, _)) => (0..count)
                .map(|idx| {
                    map.values()
                        .map(|value| match value {
                            Value::Array(items) => items[idx].clone(),
                            scalar => scalar.clone(),
                        })
                        .collect()
                })
                .collect(),
        };

        Ok(Self { columns, rows })
    }

    fn from_array(items: &[Value]) -> Result<Self> {
        if items.is_empty() {
            return Ok(Self::default());
        }

        if items.iter().all(is_scalar) {
            return Ok(Self {
                columns: vec![SCALAR_COLUMN.to_string()],
                rows: items.iter().map(|item| vec![item.clone()]).collect(),
            });
        }

        let mut objects = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            match item.as_object() {
                Some(object) => objects.push(object),
                None => {
                    return Err(AppError::NotTabular(format!(
                        "array element {idx} is not an object"
                    )))
                }
            }
        }

        let mut columns: Vec<String> = Vec::new();
        for object in &objects {
            for key in object.keys() {
                if !columns.iter().any(|existing| existing == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = objects
            .iter()
            .map(|object| {
                columns
                    .iter()
                    .map(|column| object.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All cells of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.columns.iter().position(|column| column == name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return Ok(());
        }

        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(value_to_string).collect())
            .collect();

        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|column| UnicodeWidthStr::width(column.as_str()))
            .collect();
        for row in &rendered {
            for (idx, cell) in row.iter().enumerate() {
                let width = UnicodeWidthStr::width(cell.as_str());
                if width > widths[idx] {
                    widths[idx] = width;
                }
            }
        }

        write_line(f, self.columns.iter().map(String::as_str), &widths)?;
        for row in &rendered {
            write_line(f, row.iter().map(String::as_str), &widths)?;
        }
        Ok(())
    }
}

fn write_line<'a>(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> fmt::Result {
    let mut line = String::new();
    for (idx, cell) in cells.enumerate() {
        if idx > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        let pad = widths[idx].saturating_sub(UnicodeWidthStr::width(cell));
        line.push_str(&" ".repeat(pad));
    }
    writeln!(f, "{}", line.trim_end())
}
