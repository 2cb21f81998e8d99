//! Data shapes handed back to the tools.

use std::fmt;

use tokio_postgres::SimpleQueryRow;

/// One row fetched over the simple-query protocol.
///
/// The simple-query protocol is text-only, so every value arrives as an
/// optional string; `None` is SQL NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlRow {
    columns: Vec<String>,
    values: Vec<Option<String>>,
}

impl SqlRow {
    pub fn new(columns: Vec<String>, values: Vec<Option<String>>) -> Self {
        Self { columns, values }
    }

    pub(crate) fn from_simple(row: &SimpleQueryRow) -> Self {
        let columns = row.columns().iter().map(|c| c.name().to_string()).collect();
        let values = (0..row.len())
            .map(|idx| row.get(idx).map(str::to_string))
            .collect();
        Self { columns, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }
}

impl fmt::Display for SqlRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(v) => write!(f, "{}", v)?,
                None => write!(f, "NULL")?,
            }
        }
        write!(f, "]")
    }
}
