//! Schema migrations: roughly twenty idempotent operations over three
//! batched record-rewrite primitives. The store refuses to mutate a record's
//! identifier in place, so every identity-changing operation materializes as
//! cursor-paginated moves through a temporary table.

mod batch;
mod columns;
mod modes;
mod tables;

pub use batch::{
    batch_copy_records, batch_copy_records_with_new_ids, batch_move_records, batch_update_ids,
};

use chrono::{DateTime, TimeZone, Utc};
use proto_fivetran::v2::DataType;
use surreal_client::{Value, Vars};

use crate::error::Error;
use crate::store::{run, run_one, Store};
use crate::tables::{field_definition, parse_comment, raw_field_definitions, FIVETRAN_START};

/// Records touched per batched migration statement.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// The open end of an active history version.
pub(crate) fn far_future() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap()
}

/// Start and end of versions that were already deleted when history began.
pub(crate) fn far_past() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()
}

pub struct Migrator<'a, S> {
    store: &'a mut S,
    batch_size: usize,
}

impl<'a, S: Store> Migrator<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Migrator {
            store,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(store: &'a mut S, batch_size: usize) -> Self {
        Migrator { store, batch_size }
    }

    /// History operations carry an operation timestamp that must be strictly
    /// after every `_fivetran_start` already in the table.
    pub(crate) async fn ensure_before_op(
        &mut self,
        table: &str,
        op_ts: DateTime<Utc>,
    ) -> Result<(), Error> {
        let sql = format!("SELECT VALUE math::max({FIVETRAN_START}) FROM {table} GROUP ALL");
        let result = run_one(self.store, &sql, Vars::new()).await?;
        let max = result
            .into_array()
            .and_then(|mut v| (!v.is_empty()).then(|| v.remove(0)))
            .and_then(|v| v.as_datetime());
        if let Some(max) = max {
            if max >= op_ts {
                return Err(Error::ModeInvariant(format!(
                    "operation timestamp {op_ts} is not after the latest {FIVETRAN_START} {max}"
                )));
            }
        }
        Ok(())
    }

    /// Defines one reserved field with metadata appended at the next free
    /// `ft_index`.
    pub(crate) async fn define_field_next_index(
        &mut self,
        table: &str,
        column: &str,
        data_type: DataType,
    ) -> Result<(), Error> {
        let ft_index = next_ft_index(self.store, table).await?;
        let statement = field_definition(table, column, data_type, None, ft_index)?;
        run(self.store, &statement, Vars::new()).await?;
        Ok(())
    }
}

/// Plain field names of a table: everything defined on it except the record
/// id and nested entries.
pub(crate) async fn field_names<S: Store>(store: &mut S, table: &str) -> Result<Vec<String>, Error> {
    let definitions = raw_field_definitions(store, table).await?;
    Ok(definitions
        .keys()
        .filter(|name| *name != "id" && !name.contains("[*]") && !name.contains('.'))
        .cloned()
        .collect())
}

/// The next unused `ft_index` of a table's metadata-bearing fields.
pub(crate) async fn next_ft_index<S: Store>(store: &mut S, table: &str) -> Result<u32, Error> {
    let definitions = raw_field_definitions(store, table).await?;
    let mut next = 0;
    for definition in definitions.values() {
        if let Some(meta) = parse_comment(definition) {
            next = next.max(meta?.ft_index + 1);
        }
    }
    Ok(next)
}

/// Rewrites a recovered `DEFINE …` statement to target another table.
pub(crate) fn retarget(definition: &str, from: &str, to: &str) -> String {
    definition.replacen(&format!(" ON {from} "), &format!(" ON {to} "), 1)
}

pub(crate) fn op_vars(entries: &[(&str, Value)]) -> Vars {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_bounds() {
        assert_eq!(far_future().to_rfc3339(), "9999-12-31T23:59:59+00:00");
        assert_eq!(far_past().to_rfc3339(), "0001-01-01T00:00:00+00:00");
    }

    #[test]
    fn retarget_rewrites_only_the_table() {
        assert_eq!(
            retarget(
                "DEFINE FIELD name ON users TYPE option<string> PERMISSIONS FULL",
                "users",
                "_temp_users",
            ),
            "DEFINE FIELD name ON _temp_users TYPE option<string> PERMISSIONS FULL"
        );
        // A column that happens to share the table's name is untouched.
        assert_eq!(
            retarget(
                "DEFINE FIELD users ON users TYPE option<int> PERMISSIONS FULL",
                "users",
                "archive",
            ),
            "DEFINE FIELD users ON archive TYPE option<int> PERMISSIONS FULL"
        );
    }
}
