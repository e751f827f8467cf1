//! Transitions among the three storage modes: live, soft-delete, and
//! history. Identity-changing transitions rewrite every record id through
//! [`batch_update_ids`], appending or stripping the trailing
//! `_fivetran_start` element.

use proto_fivetran::v2::DataType;
use surreal_client::{Value, Vars};

use crate::error::Error;
use crate::store::{run, run_one, Store};
use crate::tables::{
    raw_field_definitions, raw_index_definitions, validate_ident, FIVETRAN_ACTIVE, FIVETRAN_END,
    FIVETRAN_START,
};

use super::{
    batch_copy_records_with_new_ids, batch_update_ids, far_future, far_past, field_names, op_vars,
    retarget, Migrator,
};

impl<'a, S: Store> Migrator<'a, S> {
    /// live → soft-delete: rows gain an (initially false) deleted flag.
    pub async fn live_to_soft_delete(
        &mut self,
        table: &str,
        deleted_column: &str,
    ) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(deleted_column)?;

        self.define_field_next_index(table, deleted_column, DataType::Boolean)
            .await?;
        let sql = format!("UPDATE {table} SET {deleted_column} = false");
        run(self.store, &sql, Vars::new()).await?;
        Ok(())
    }

    /// soft-delete → live: soft-deleted rows are physically removed and the
    /// flag disappears.
    pub async fn soft_delete_to_live(
        &mut self,
        table: &str,
        deleted_column: &str,
    ) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(deleted_column)?;

        let sql = format!(
            "DELETE {table} WHERE {deleted_column} = true;\n\
             REMOVE FIELD {deleted_column} ON {table};\n\
             UPDATE {table} UNSET {deleted_column}"
        );
        run(self.store, &sql, Vars::new()).await?;
        Ok(())
    }

    /// live → history: every row becomes the single active version of its
    /// key, and ids gain the trailing `_fivetran_start`.
    pub async fn live_to_history(&mut self, table: &str) -> Result<(), Error> {
        validate_ident(table)?;

        self.define_history_fields(table).await?;
        let sql = format!(
            "UPDATE {table} SET \
             {FIVETRAN_START} = $__now, {FIVETRAN_END} = $__far_future, {FIVETRAN_ACTIVE} = true"
        );
        let vars = op_vars(&[
            ("__now", Value::Datetime(chrono::Utc::now())),
            ("__far_future", Value::Datetime(far_future())),
        ]);
        run(self.store, &sql, vars).await?;

        self.append_start_to_ids(table).await
    }

    /// soft-delete → history: live rows open at the latest sync time;
    /// already-deleted rows become closed far-past versions.
    pub async fn soft_delete_to_history(
        &mut self,
        table: &str,
        deleted_column: &str,
        synced_column: &str,
    ) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(deleted_column)?;
        validate_ident(synced_column)?;

        // The sync high-water mark, before any rewriting begins.
        let sql = format!("SELECT VALUE math::max({synced_column}) FROM {table} GROUP ALL");
        let max_synced = run_one(self.store, &sql, Vars::new())
            .await?
            .into_array()
            .and_then(|mut v| (!v.is_empty()).then(|| v.remove(0)))
            .and_then(|v| v.as_datetime())
            .unwrap_or_else(far_past);

        self.define_history_fields(table).await?;

        let sql = format!(
            "UPDATE {table} SET \
             {FIVETRAN_START} = IF {deleted_column} = true {{ $__far_past }} ELSE {{ $__max_synced }}, \
             {FIVETRAN_END} = IF {deleted_column} = true {{ $__far_past }} ELSE {{ $__far_future }}, \
             {FIVETRAN_ACTIVE} = IF {deleted_column} = true {{ false }} ELSE {{ true }}"
        );
        let vars = op_vars(&[
            ("__max_synced", Value::Datetime(max_synced)),
            ("__far_past", Value::Datetime(far_past())),
            ("__far_future", Value::Datetime(far_future())),
        ]);
        run(self.store, &sql, vars).await?;

        let sql = format!(
            "REMOVE FIELD {deleted_column} ON {table};\nUPDATE {table} UNSET {deleted_column}"
        );
        run(self.store, &sql, Vars::new()).await?;

        self.append_start_to_ids(table).await
    }

    /// history → live: one row per key survives and ids drop the trailing
    /// `_fivetran_start`. With `keep_deleted_rows` the latest version of
    /// every key is kept even when inactive; otherwise inactive versions are
    /// removed outright.
    pub async fn history_to_live(
        &mut self,
        table: &str,
        keep_deleted_rows: bool,
    ) -> Result<(), Error> {
        validate_ident(table)?;

        if keep_deleted_rows {
            self.delete_non_latest_versions(table).await?;
        } else {
            let sql = format!("DELETE {table} WHERE {FIVETRAN_ACTIVE} = false");
            run(self.store, &sql, Vars::new()).await?;
        }

        self.remove_history_fields(table).await?;
        self.strip_start_from_ids(table).await
    }

    /// history → soft-delete: the latest version of every key survives with
    /// the deleted flag mirroring (the negation of) its active flag.
    pub async fn history_to_soft_delete(
        &mut self,
        table: &str,
        deleted_column: &str,
    ) -> Result<(), Error> {
        validate_ident(table)?;
        validate_ident(deleted_column)?;

        self.define_field_next_index(table, deleted_column, DataType::Boolean)
            .await?;
        self.delete_non_latest_versions(table).await?;

        let sql = format!(
            "UPDATE {table} SET {deleted_column} = IF {FIVETRAN_ACTIVE} = true {{ false }} ELSE {{ true }}"
        );
        run(self.store, &sql, Vars::new()).await?;

        self.remove_history_fields(table).await?;
        self.strip_start_from_ids(table).await
    }

    /// Copies a live or soft-delete table into a new history-mode table.
    /// Source rows become versions opened now; soft-deleted rows become
    /// inactive versions, and the flag itself is not carried over.
    pub async fn copy_table_to_history_mode(
        &mut self,
        from: &str,
        to: &str,
        soft_deleted_column: Option<&str>,
    ) -> Result<(), Error> {
        validate_ident(from)?;
        validate_ident(to)?;
        if let Some(deleted) = soft_deleted_column {
            validate_ident(deleted)?;
        }

        // Clone the source schema, minus the soft-delete flag.
        let definitions = raw_field_definitions(self.store, from).await?;
        let mut statements = vec![format!("DEFINE TABLE OVERWRITE {to} SCHEMAFULL")];
        statements.push(format!("DEFINE FIELD OVERWRITE id ON {to} TYPE array<any>"));
        for (name, definition) in &definitions {
            if name == "id" || Some(name.as_str()) == soft_deleted_column {
                continue;
            }
            statements.push(retarget(definition, from, to));
        }
        for definition in raw_index_definitions(self.store, from).await?.values() {
            let fields = crate::tables::parse_index_fields(definition);
            if soft_deleted_column.map_or(false, |del| fields.iter().any(|f| f == del)) {
                continue;
            }
            statements.push(retarget(definition, from, to));
        }
        run(self.store, &statements.join(";\n"), Vars::new()).await?;

        self.define_history_fields(to).await?;

        let active_expr = match soft_deleted_column {
            Some(deleted) => format!("IF {deleted} = true {{ false }} ELSE {{ true }}"),
            None => "true".to_string(),
        };
        let mut insert_fields: Vec<String> = field_names(self.store, from)
            .await?
            .into_iter()
            .filter(|f| Some(f.as_str()) != soft_deleted_column)
            .collect();
        insert_fields.push(format!("$__now AS {FIVETRAN_START}"));
        insert_fields.push(format!("$__far_future AS {FIVETRAN_END}"));
        insert_fields.push(format!("{active_expr} AS {FIVETRAN_ACTIVE}"));

        let vars = op_vars(&[
            ("__now", Value::Datetime(chrono::Utc::now())),
            ("__far_future", Value::Datetime(far_future())),
        ]);
        batch_copy_records_with_new_ids(
            self.store,
            from,
            "id",
            to,
            "array::push(record::id(id), $__now)",
            &insert_fields.join(", "),
            self.batch_size,
            &vars,
        )
        .await?;
        Ok(())
    }

    async fn define_history_fields(&mut self, table: &str) -> Result<(), Error> {
        self.define_field_next_index(table, FIVETRAN_START, DataType::UtcDatetime)
            .await?;
        self.define_field_next_index(table, FIVETRAN_END, DataType::UtcDatetime)
            .await?;
        self.define_field_next_index(table, FIVETRAN_ACTIVE, DataType::Boolean)
            .await?;
        let sql = format!(
            "DEFINE INDEX IF NOT EXISTS {table}_fivetran_start ON {table} FIELDS {FIVETRAN_START}"
        );
        run(self.store, &sql, Vars::new()).await?;
        Ok(())
    }

    async fn remove_history_fields(&mut self, table: &str) -> Result<(), Error> {
        let sql = format!(
            "REMOVE FIELD {FIVETRAN_START} ON {table};\n\
             REMOVE FIELD {FIVETRAN_END} ON {table};\n\
             REMOVE FIELD {FIVETRAN_ACTIVE} ON {table};\n\
             REMOVE INDEX IF EXISTS {table}_fivetran_start ON {table}"
        );
        run(self.store, &sql, Vars::new()).await?;
        Ok(())
    }

    /// Rewrites ids to `PK ++ [_fivetran_start]`, carrying all fields.
    async fn append_start_to_ids(&mut self, table: &str) -> Result<(), Error> {
        let fields = field_names(self.store, table).await?;
        batch_update_ids(
            self.store,
            table,
            "*",
            &format!("array::push(record::id(id), {FIVETRAN_START})"),
            &fields.join(", "),
            self.batch_size,
            &Vars::new(),
        )
        .await
    }

    /// Rewrites ids back to the bare primary key, dropping any residual
    /// history values by omitting those fields from the re-inserted rows.
    async fn strip_start_from_ids(&mut self, table: &str) -> Result<(), Error> {
        let fields: Vec<String> = field_names(self.store, table)
            .await?
            .into_iter()
            .filter(|f| ![FIVETRAN_START, FIVETRAN_END, FIVETRAN_ACTIVE].contains(&f.as_str()))
            .collect();
        batch_update_ids(
            self.store,
            table,
            "*",
            "array::slice(record::id(id), 0, array::len(record::id(id)) - 1)",
            &fields.join(", "),
            self.batch_size,
            &Vars::new(),
        )
        .await
    }

    /// Keeps only the version with the greatest `_fivetran_start` per
    /// logical key.
    async fn delete_non_latest_versions(&mut self, table: &str) -> Result<(), Error> {
        let sql = format!(
            "SELECT array::slice(record::id(id), 0, array::len(record::id(id)) - 1) AS pk, \
             math::max({FIVETRAN_START}) AS latest FROM {table} GROUP BY pk"
        );
        let groups = run_one(self.store, &sql, Vars::new())
            .await?
            .into_array()
            .unwrap_or_default();

        let sql = format!(
            "DELETE {table} WHERE \
             array::slice(record::id(id), 0, array::len(record::id(id)) - 1) = $__pk \
             AND {FIVETRAN_START} < $__latest"
        );
        for group in groups {
            let Some(group) = group.as_object() else {
                continue;
            };
            let (Some(pk), Some(latest)) = (group.get("pk"), group.get("latest")) else {
                continue;
            };
            let latest = latest
                .as_datetime()
                .map(Value::Datetime)
                .unwrap_or_else(|| latest.clone());
            let vars = op_vars(&[("__pk", pk.clone()), ("__latest", latest)]);
            run(self.store, &sql, vars).await?;
        }
        Ok(())
    }
}
