//! The JSON schema descriptor the extractor is driven by.
//!
//! ```json
//! { "datamodel": "RELATIONAL",
//!   "tables": [ { "tableName": "emp", "columnNames": ["id", "name"] } ] }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SchemaError};

/// The only datamodel this tooling supports.
pub const RELATIONAL: &str = "RELATIONAL";

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDescriptor {
    pub datamodel: String,
    pub tables: Vec<TableDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescriptor {
    pub table_name: String,
    pub column_names: Vec<String>,
}

impl SchemaDescriptor {
    /// Read and parse a descriptor file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| SchemaError::File(format!("failed to read {}: {}", path.display(), e)))?;
        let descriptor: SchemaDescriptor = serde_json::from_str(&raw)?;
        Ok(descriptor)
    }

    /// Reject anything but the relational datamodel. Runs before a
    /// connection is opened, so a mismatch never reaches the server.
    pub fn ensure_relational(&self) -> Result<()> {
        if self.datamodel != RELATIONAL {
            return Err(SchemaError::Datamodel(self.datamodel.clone()));
        }
        Ok(())
    }
}
