//! Column-level migrations.

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use proto_fivetran::v2::Column;
use regex::Regex;
use surreal_client::{Value, Vars};

use crate::error::Error;
use crate::store::{run, Store};
use crate::tables::{
    field_definition, parse_comment, raw_field_definitions, validate_ident, FIVETRAN_ACTIVE,
    FIVETRAN_END, FIVETRAN_START,
};
use crate::types::{decimal_precision, parse_cell};

use super::{far_future, field_names, next_ft_index, op_vars, Migrator};

/// How a version split changes the new active version's columns.
enum ColumnChange {
    Add { column: String, value: Value },
    Drop { column: String },
}

impl<'a, S: Store> Migrator<'a, S> {
    /// Defines the column and backfills rows that lack a value for it.
    pub async fn add_column_with_default_value(
        &mut self,
        table: &str,
        column: &Column,
        default: &str,
    ) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(&column.name)?;

        let ft_index = next_ft_index(self.store, table).await?;
        let statement = field_definition(
            table,
            &column.name,
            column.r#type(),
            decimal_precision(column),
            ft_index,
        )?;
        run(self.store, &statement, Vars::new()).await?;

        let value = parse_cell(column.r#type(), decimal_precision(column), default)
            .map_err(|e| Error::Data(format!("default for column {}: {e}", column.name)))?;
        let sql = format!(
            "UPDATE {table} SET {col} = $__default WHERE {col} IS NONE",
            col = column.name,
        );
        run(self.store, &sql, op_vars(&[("__default", value)])).await?;
        Ok(())
    }

    /// Adds a column to a history table: every currently-active row is
    /// closed at `op_ts − 1ms` and re-inserted as a new active version
    /// carrying the default.
    pub async fn add_column_in_history_mode(
        &mut self,
        table: &str,
        column: &Column,
        default: &str,
        op_ts: DateTime<Utc>,
    ) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(&column.name)?;
        self.ensure_before_op(table, op_ts).await?;

        let ft_index = next_ft_index(self.store, table).await?;
        let statement = field_definition(
            table,
            &column.name,
            column.r#type(),
            decimal_precision(column),
            ft_index,
        )?;
        run(self.store, &statement, Vars::new()).await?;

        let value = parse_cell(column.r#type(), decimal_precision(column), default)
            .map_err(|e| Error::Data(format!("default for column {}: {e}", column.name)))?;
        self.version_split(
            table,
            op_ts,
            None,
            ColumnChange::Add {
                column: column.name.clone(),
                value,
            },
        )
        .await
    }

    /// Removes the field definition and strips residual values.
    pub async fn drop_column(&mut self, table: &str, column: &str) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(column)?;
        let sql = format!(
            "REMOVE FIELD {column} ON {table};\nUPDATE {table} UNSET {column}"
        );
        run(self.store, &sql, Vars::new()).await?;
        Ok(())
    }

    /// Drops a column from a history table: every active row that still
    /// carries a value gets a new active version without it; prior versions
    /// close at `op_ts − 1ms`. The field is removed last so introspection
    /// hides it.
    pub async fn drop_column_in_history_mode(
        &mut self,
        table: &str,
        column: &str,
        op_ts: DateTime<Utc>,
    ) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(column)?;
        self.ensure_before_op(table, op_ts).await?;

        self.version_split(
            table,
            op_ts,
            Some(format!("{column} IS NOT NONE")),
            ColumnChange::Drop {
                column: column.to_string(),
            },
        )
        .await?;

        run(
            self.store,
            &format!("REMOVE FIELD {column} ON {table}"),
            Vars::new(),
        )
        .await?;
        Ok(())
    }

    /// Re-emits the source field's definition under the new name, copies
    /// values across, and removes the old field.
    pub async fn rename_column(&mut self, table: &str, from: &str, to: &str) -> Result<(), Error> {
        self.copy_column(table, from, to).await?;
        let sql = format!("REMOVE FIELD {from} ON {table};\nUPDATE {table} UNSET {from}");
        run(self.store, &sql, Vars::new()).await?;
        Ok(())
    }

    pub async fn copy_column(&mut self, table: &str, from: &str, to: &str) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(from)?;
        validate_ident(to)?;

        let definitions = raw_field_definitions(self.store, table).await?;
        let definition = definitions.get(from).ok_or_else(|| {
            Error::Schema(format!("column {from} is not defined on table {table}"))
        })?;
        let renamed = rename_field_definition(definition, from, to)?;

        let sql = format!("{renamed};\nUPDATE {table} SET {to} = {from}");
        run(self.store, &sql, Vars::new()).await?;
        Ok(())
    }

    /// Sets every row's column to a constant. A literal `NULL`/`null` or an
    /// empty string clears the column instead.
    pub async fn update_column_value(
        &mut self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(column)?;

        if value.is_empty() || value == "NULL" || value == "null" {
            let sql = format!("UPDATE {table} SET {column} = NONE");
            run(self.store, &sql, Vars::new()).await?;
            return Ok(());
        }

        let definitions = raw_field_definitions(self.store, table).await?;
        let definition = definitions.get(column).ok_or_else(|| {
            Error::Schema(format!("column {column} is not defined on table {table}"))
        })?;
        let meta = parse_comment(definition).ok_or_else(|| {
            Error::Schema(format!("column {column} carries no field metadata"))
        })??;
        let typed = parse_cell(meta.data_type()?, meta.decimal_precision, value)
            .map_err(|e| Error::Data(format!("value for column {column}: {e}")))?;

        let sql = format!("UPDATE {table} SET {column} = $__value");
        run(self.store, &sql, op_vars(&[("__value", typed)])).await?;
        Ok(())
    }

    /// Closes every matching active version at `op_ts − 1ms` and inserts a
    /// replacement active version at `op_ts`, with `change` applied. Loops
    /// in batches; processed rows leave the candidate set by turning
    /// inactive, so each round sees only remaining work.
    async fn version_split(
        &mut self,
        table: &str,
        op_ts: DateTime<Utc>,
        extra_filter: Option<String>,
        change: ColumnChange,
    ) -> Result<(), Error> {
        let fields = field_names(self.store, table).await?;

        let changed_column = match &change {
            ColumnChange::Add { column, .. } | ColumnChange::Drop { column } => column.clone(),
        };
        let mut projection: Vec<String> = fields
            .iter()
            .filter(|f| {
                ![FIVETRAN_START, FIVETRAN_END, FIVETRAN_ACTIVE].contains(&f.as_str())
                    && **f != changed_column
            })
            .cloned()
            .collect();
        if let ColumnChange::Add { column, .. } = &change {
            projection.push(format!("$__default AS {column}"));
        }
        projection.push(format!("$__op_ts AS {FIVETRAN_START}"));
        projection.push(format!("$__far_future AS {FIVETRAN_END}"));
        projection.push(format!("true AS {FIVETRAN_ACTIVE}"));

        let new_id =
            "array::push(array::slice(record::id(id), 0, array::len(record::id(id)) - 1), $__op_ts)";
        let mut filter = format!("{FIVETRAN_ACTIVE} = true AND {FIVETRAN_START} < $__op_ts");
        if let Some(extra) = extra_filter {
            filter = format!("{filter} AND {extra}");
        }

        let sql = format!(
            "LET $__batch = (SELECT VALUE id FROM {table} WHERE {filter} LIMIT $__limit);\n\
             INSERT INTO {table} (SELECT {new_id} AS id, {projection} FROM {table} WHERE {filter} LIMIT $__limit);\n\
             UPDATE {table} SET {FIVETRAN_END} = $__closed_end, {FIVETRAN_ACTIVE} = false WHERE id IN $__batch;\n\
             RETURN $__batch",
            projection = projection.join(", "),
        );

        let closed_end = op_ts - Duration::milliseconds(1);
        loop {
            let mut vars = op_vars(&[
                ("__op_ts", Value::Datetime(op_ts)),
                ("__far_future", Value::Datetime(far_future())),
                ("__closed_end", Value::Datetime(closed_end)),
                ("__limit", Value::Int(self.batch_size as i64)),
            ]);
            if let ColumnChange::Add { value, .. } = &change {
                vars.insert("__default".to_string(), value.clone());
            }

            let values = run(self.store, &sql, vars).await?;
            let batch = values
                .last()
                .cloned()
                .and_then(Value::into_array)
                .unwrap_or_default();
            if batch.is_empty() {
                break;
            }
            tracing::debug!(table, split = batch.len(), "closed prior versions");
        }
        Ok(())
    }
}

lazy_static! {
    static ref FIELD_NAME: Regex = Regex::new(r"^DEFINE FIELD (?:OVERWRITE )?(\S+) ON").unwrap();
}

/// Rewrites a recovered `DEFINE FIELD` statement to define another name,
/// keeping type, comment, and permissions intact.
fn rename_field_definition(definition: &str, from: &str, to: &str) -> Result<String, Error> {
    let captured = FIELD_NAME
        .captures(definition)
        .filter(|c| crate::tables::sanitize_ident(c.get(1).unwrap().as_str()) == from)
        .ok_or_else(|| {
            Error::Schema(format!("unexpected field definition {definition:?}"))
        })?;
    let span = captured.get(0).unwrap();
    Ok(format!(
        "DEFINE FIELD OVERWRITE {to} ON{}",
        &definition[span.end()..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_definitions_rename() {
        let renamed = rename_field_definition(
            "DEFINE FIELD old ON users TYPE option<string> COMMENT '{}' PERMISSIONS FULL",
            "old",
            "new",
        )
        .unwrap();
        assert_eq!(
            renamed,
            "DEFINE FIELD OVERWRITE new ON users TYPE option<string> COMMENT '{}' PERMISSIONS FULL"
        );

        // A definition for some other field is rejected.
        assert!(rename_field_definition(
            "DEFINE FIELD other ON users TYPE option<string>",
            "old",
            "new",
        )
        .is_err());
    }
}
