//! Table-level migrations.

use proto_fivetran::v2::Table;
use surreal_client::Vars;

use crate::error::Error;
use crate::store::{run, Store};
use crate::tables::{raw_field_definitions, raw_index_definitions, validate_ident};

use super::{retarget, Migrator};

impl<'a, S: Store> Migrator<'a, S> {
    /// Re-creates the table's schema and indices under the new name, moves
    /// the data, and drops the source.
    pub async fn rename_table(&mut self, from: &str, to: &str) -> Result<(), Error> {
        self.copy_table(from, to).await?;
        run(self.store, &format!("REMOVE TABLE {from}"), Vars::new()).await?;
        Ok(())
    }

    /// As [`Migrator::rename_table`], but the source table survives.
    pub async fn copy_table(&mut self, from: &str, to: &str) -> Result<(), Error> {
        validate_ident(from)?;
        validate_ident(to)?;

        let fields = raw_field_definitions(self.store, from).await?;
        let mut statements = vec![format!("DEFINE TABLE OVERWRITE {to} SCHEMAFULL")];
        for definition in fields.values() {
            statements.push(retarget(definition, from, to));
        }
        run(self.store, &statements.join(";\n"), Vars::new()).await?;

        let sql = format!("INSERT INTO {to} (SELECT * FROM {from})");
        run(self.store, &sql, Vars::new()).await?;

        let indexes = raw_index_definitions(self.store, from).await?;
        if !indexes.is_empty() {
            let statements: Vec<String> = indexes
                .values()
                .map(|definition| retarget(definition, from, to))
                .collect();
            run(self.store, &statements.join(";\n"), Vars::new()).await?;
        }
        Ok(())
    }

    pub async fn drop_table(&mut self, table: &str) -> Result<(), Error> {
        validate_ident(table)?;
        run(self.store, &format!("REMOVE TABLE {table}"), Vars::new()).await?;
        Ok(())
    }

    /// Drops every store field that the incoming table spec does not
    /// declare.
    pub async fn remove_store_only_columns(&mut self, table: &Table) -> Result<(), Error> {
        let name = validate_ident(&table.name)?;

        let definitions = raw_field_definitions(self.store, name).await?;
        let mut statements = Vec::new();
        for field in definitions.keys() {
            if field == "id" || field.contains("[*]") || field.contains('.') {
                continue;
            }
            if table.columns.iter().any(|c| &c.name == field) {
                continue;
            }
            validate_ident(field)?;
            statements.push(format!("REMOVE FIELD {field} ON {name}"));
            statements.push(format!("UPDATE {name} UNSET {field}"));
        }
        if statements.is_empty() {
            return Ok(());
        }
        tracing::debug!(table = %name, dropped = statements.len() / 2, "removing store-only fields");
        run(self.store, &statements.join(";\n"), Vars::new()).await?;
        Ok(())
    }
}
