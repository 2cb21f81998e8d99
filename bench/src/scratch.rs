//! The scratch table and stored procedure a run creates and drops.
//!
//! Both measured statements insert fixed literal rows, so the table is
//! cleared between iterations to keep the primary key satisfied on servers
//! that enforce it.

/// Renders the SQL for one run's scratch objects.
#[derive(Debug, Clone)]
pub struct ScratchSchema {
    table: String,
    procedure: String,
}

impl ScratchSchema {
    pub fn new(table: impl Into<String>, procedure: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            procedure: procedure.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn procedure(&self) -> &str {
        &self.procedure
    }

    pub fn create_table(&self) -> String {
        format!(
            "CREATE TABLE {} (id INTEGER NOT NULL, \"text\" VARCHAR(20), PRIMARY KEY (id))",
            self.table
        )
    }

    pub fn create_procedure(&self) -> String {
        format!(
            "CREATE PROCEDURE \"{}\" $ INSERT INTO {} (id, \"text\") VALUES (2, 'from procedure') $",
            self.procedure, self.table
        )
    }

    pub fn raw_insert(&self) -> String {
        format!(
            "INSERT INTO {} (id, \"text\") VALUES (1, 'from query')",
            self.table
        )
    }

    pub fn exec_procedure(&self) -> String {
        format!("EXEC PROCEDURE \"{}\"", self.procedure)
    }

    pub fn update_probe(&self) -> String {
        format!("UPDATE {} SET \"text\" = 'probe' WHERE id = 1", self.table)
    }

    pub fn clear_rows(&self) -> String {
        format!("DELETE FROM {}", self.table)
    }

    pub fn drop_procedure(&self) -> String {
        format!("DROP PROCEDURE \"{}\"", self.procedure)
    }

    pub fn drop_table(&self) -> String {
        format!("DROP TABLE {}", self.table)
    }
}
