//! Batched record-rewrite primitives. Each round is one small transaction so
//! the store's write-ahead log stays bounded no matter the table size, and
//! every loop is re-entrant: re-running a half-finished migration continues
//! where it stopped.

use surreal_client::{Value, Vars};

use crate::error::Error;
use crate::store::{run, run_one, Store};
use crate::tables::{raw_field_definitions, validate_ident};

use super::retarget;

/// Moves every record of `from` into `to`, batch by batch. Each round
/// deletes up to `batch_size` records and re-inserts them through the
/// `insert_fields` projection, atomically. Loops until a round moves zero
/// records. Returns the number moved.
pub async fn batch_move_records<S: Store>(
    store: &mut S,
    from: &str,
    to: &str,
    select_fields: &str,
    insert_fields: &str,
    batch_size: usize,
    vars: &Vars,
) -> Result<u64, Error> {
    validate_ident(from)?;
    validate_ident(to)?;

    let sql = format!(
        "INSERT INTO {to} (SELECT {insert_fields} FROM \
         (DELETE (SELECT {select_fields} FROM {from} LIMIT $__limit) RETURN BEFORE))"
    );

    let mut moved = 0u64;
    loop {
        let mut round = vars.clone();
        round.insert("__limit".to_string(), Value::Int(batch_size as i64));
        let inserted = run_one(store, &sql, round).await?;
        let count = inserted.as_array().map_or(0, |rows| rows.len());
        moved += count as u64;
        if count == 0 {
            break;
        }
    }
    tracing::debug!(from, to, moved, "batch move complete");
    Ok(moved)
}

/// Copies records of `from` into `to` through a straight projection,
/// paginated on `id > $cursor`. Inserted records keep their source ids, so
/// the cursor follows the last inserted record. Returns the number copied.
pub async fn batch_copy_records<S: Store>(
    store: &mut S,
    from: &str,
    to: &str,
    fields: &str,
    batch_size: usize,
) -> Result<u64, Error> {
    validate_ident(from)?;
    validate_ident(to)?;

    let mut copied = 0u64;
    let mut cursor: Option<Value> = None;
    loop {
        let filter = match cursor {
            Some(_) => "WHERE id > <record> $__cursor ",
            None => "",
        };
        let sql = format!(
            "INSERT INTO {to} (SELECT {fields} FROM {from} {filter}ORDER BY id LIMIT $__limit)"
        );
        let mut vars = Vars::new();
        vars.insert("__limit".to_string(), Value::Int(batch_size as i64));
        if let Some(cursor) = &cursor {
            vars.insert("__cursor".to_string(), cursor.clone());
        }

        let inserted = run_one(store, &sql, vars).await?;
        let rows = inserted.into_array().unwrap_or_default();
        if rows.is_empty() {
            break;
        }
        copied += rows.len() as u64;
        cursor = Some(id_of(rows.last().unwrap())?);
    }
    tracing::debug!(from, to, copied, "batch copy complete");
    Ok(copied)
}

/// As [`batch_copy_records`], but inserted ids are computed from `id_expr`
/// while pagination keeps tracking the **source** id. A straight copy cursor
/// would follow the rewritten destination ids and lose its place, which is
/// why this exists as a distinct primitive.
pub async fn batch_copy_records_with_new_ids<S: Store>(
    store: &mut S,
    from: &str,
    select_fields: &str,
    to: &str,
    id_expr: &str,
    insert_fields: &str,
    batch_size: usize,
    vars: &Vars,
) -> Result<u64, Error> {
    validate_ident(from)?;
    validate_ident(to)?;

    let mut copied = 0u64;
    let mut cursor: Option<Value> = None;
    loop {
        let filter = match cursor {
            Some(_) => "WHERE id > <record> $__cursor ",
            None => "",
        };
        let sql = format!(
            "LET $__batch = (SELECT {select_fields} FROM {from} {filter}ORDER BY id LIMIT $__limit);\n\
             INSERT INTO {to} (SELECT {insert_fields}, {id_expr} AS id FROM {from} {filter}ORDER BY id LIMIT $__limit);\n\
             RETURN $__batch"
        );
        let mut round = vars.clone();
        round.insert("__limit".to_string(), Value::Int(batch_size as i64));
        if let Some(cursor) = &cursor {
            round.insert("__cursor".to_string(), cursor.clone());
        }

        let values = run(store, &sql, round).await?;
        let batch = values
            .last()
            .cloned()
            .and_then(Value::into_array)
            .unwrap_or_default();
        if batch.is_empty() {
            break;
        }
        copied += batch.len() as u64;
        cursor = Some(id_of(batch.last().unwrap())?);
    }
    tracing::debug!(from, to, copied, "batch copy with new ids complete");
    Ok(copied)
}

/// Rewrites every record id of `table` through `id_expr` by moving the rows
/// out to a same-schema temporary table and back: the store will not mutate
/// a record's identifier in place.
pub async fn batch_update_ids<S: Store>(
    store: &mut S,
    table: &str,
    select_fields: &str,
    id_expr: &str,
    insert_fields: &str,
    batch_size: usize,
    vars: &Vars,
) -> Result<(), Error> {
    validate_ident(table)?;
    let temp = format!("_temp_{table}");

    let definitions = raw_field_definitions(store, table).await?;
    let mut statements = vec![format!("DEFINE TABLE OVERWRITE {temp} SCHEMAFULL")];
    for definition in definitions.values() {
        statements.push(retarget(definition, table, &temp));
    }
    run(store, &statements.join(";\n"), Vars::new()).await?;

    let rewritten = if insert_fields.trim().is_empty() {
        format!("{id_expr} AS id")
    } else {
        format!("{id_expr} AS id, {insert_fields}")
    };
    batch_move_records(store, table, &temp, select_fields, &rewritten, batch_size, vars).await?;
    batch_move_records(store, &temp, table, "*", "*", batch_size, &Vars::new()).await?;

    run(store, &format!("REMOVE TABLE {temp}"), Vars::new()).await?;
    tracing::debug!(table, "rewrote record ids");
    Ok(())
}

fn id_of(row: &Value) -> Result<Value, Error> {
    row.as_object()
        .and_then(|row| row.get("id"))
        .cloned()
        .ok_or_else(|| Error::Schema("copied record carries no id".to_string()))
}
