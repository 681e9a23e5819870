use crate::domain::{AmeError, ParserResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const AME2020_COLUMN_WIDTHS: [usize; 17] =
    [1, 3, 5, 5, 5, 4, 4, 17, 13, 13, 10, 3, 12, 10, 4, 14, 11];
pub const AME2020_COLUMN_NAMES: [&str; 17] = [
    "cc", "NZ", "N", "Z", "A", "EL", "o", "ME", "MEunc", "BE", "BEunc", "B", "BDE", "BDEunc",
    "am_int", "am_rest", "amunc",
];
pub const AME2020_HEADER_ROWS: usize = 36;
pub const DEFAULT_TABLE_FILE: &str = "mass_1.mas20.txt";

/// Columns the loader reads. Every other column is skipped unparsed.
pub(crate) const REQUIRED_COLUMNS: [&str; 9] = [
    "N", "Z", "A", "EL", "ME", "MEunc", "am_int", "am_rest", "amunc",
];

/// Fixed-width layout of the mass table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub column_widths: Vec<usize>,
    pub column_names: Vec<String>,
    pub skip_rows: usize,
}

impl TableSchema {
    pub fn ame2020() -> Self {
        Self {
            column_widths: AME2020_COLUMN_WIDTHS.to_vec(),
            column_names: AME2020_COLUMN_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            skip_rows: AME2020_HEADER_ROWS,
        }
    }

    pub fn from_json(source: &str) -> ParserResult<Self> {
        let schema: Self = serde_json::from_str(source).map_err(|source| {
            AmeError::schema_mismatch(
                "INPUT.SCHEMA_JSON",
                format!("invalid table schema JSON: {source}"),
            )
        })?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn validate(&self) -> ParserResult<()> {
        self.required_column_indices().map(|_| ())
    }

    /// Checks the layout and returns the position of each of
    /// [`REQUIRED_COLUMNS`], in that order.
    pub(crate) fn required_column_indices(&self) -> ParserResult<[usize; REQUIRED_COLUMNS.len()]> {
        if self.column_widths.len() != self.column_names.len() {
            return Err(AmeError::schema_mismatch(
                "INPUT.SCHEMA_SHAPE",
                format!(
                    "schema has {} column widths but {} column names",
                    self.column_widths.len(),
                    self.column_names.len()
                ),
            ));
        }

        if let Some(position) = self.column_widths.iter().position(|width| *width == 0) {
            let name = &self.column_names[position];
            return Err(AmeError::schema_mismatch(
                "INPUT.SCHEMA_SHAPE",
                format!("column '{name}' has zero width"),
            ));
        }

        let mut indices = [0; REQUIRED_COLUMNS.len()];
        for (slot, required) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = self.column_index(required).ok_or_else(|| {
                AmeError::schema_mismatch(
                    "INPUT.SCHEMA_COLUMN",
                    format!("schema is missing required column '{required}'"),
                )
            })?;
        }
        Ok(indices)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names
            .iter()
            .position(|candidate| candidate == name)
    }

    /// Byte range of every column, in declaration order.
    pub fn column_spans(&self) -> Vec<(usize, usize)> {
        let mut start = 0;
        self.column_widths
            .iter()
            .map(|width| {
                let span = (start, start + width);
                start += width;
                span
            })
            .collect()
    }
}

impl Default for TableSchema {
    fn default() -> Self {
        Self::ame2020()
    }
}

/// Where the table lives and how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_path: PathBuf,
    pub schema: TableSchema,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_FILE),
            schema: TableSchema::default(),
        }
    }
}
