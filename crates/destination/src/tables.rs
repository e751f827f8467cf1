//! Table schema mapping: idempotent definition of tables, fields and
//! indices, and introspection back into orchestrator columns via the
//! per-field metadata comments.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use proto_fivetran::v2::{
    data_type_params, Column, DataType, DataTypeParams, DecimalParams, Table,
};
use regex::Regex;
use surreal_client::{Value, Vars};

use crate::error::Error;
use crate::store::{run, Store};
use crate::types::{decimal_precision, store_type, FieldMetadata};

/// Reserved columns the orchestrator may inject.
pub const FIVETRAN_ID: &str = "_fivetran_id";
pub const FIVETRAN_SYNCED: &str = "_fivetran_synced";
pub const FIVETRAN_DELETED: &str = "_fivetran_deleted";
pub const FIVETRAN_START: &str = "_fivetran_start";
pub const FIVETRAN_END: &str = "_fivetran_end";
pub const FIVETRAN_ACTIVE: &str = "_fivetran_active";

lazy_static! {
    static ref IDENT: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
    static ref COMMENT: Regex = Regex::new(r"COMMENT '((?:[^'\\]|\\.)*)'").unwrap();
    static ref INDEX_FIELDS: Regex = Regex::new(r"(?:FIELDS|COLUMNS)\s+(.+?)(?:\s+UNIQUE|\s*$)").unwrap();
}

/// Rejects any name that could not be safely interpolated into a statement.
/// Every table and column name passes through here before query composition.
pub fn validate_ident(name: &str) -> Result<&str, Error> {
    if IDENT.is_match(name) {
        Ok(name)
    } else {
        Err(Error::InvalidIdentifier(name.to_string()))
    }
}

/// Strips the quoting the store may add around recovered identifiers.
pub fn sanitize_ident(name: &str) -> String {
    name.trim_matches(|c| c == '`' || c == '\u{27E8}' || c == '\u{27E9}')
        .to_string()
}

/// A table is in history mode when it carries the history version columns.
pub fn is_history_table(table: &Table) -> bool {
    table.columns.iter().any(|c| c.name == FIVETRAN_START)
}

pub fn primary_key_columns(table: &Table) -> Vec<&Column> {
    table.columns.iter().filter(|c| c.primary_key).collect()
}

/// One introspected store field, mapped back into the orchestrator's space.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: DataType,
    pub ft_index: u32,
    pub decimal_precision: Option<u32>,
    pub primary_key: bool,
}

impl ColumnInfo {
    pub fn into_column(self) -> Column {
        let params = self.decimal_precision.map(|precision| DataTypeParams {
            params: Some(data_type_params::Params::Decimal(DecimalParams {
                precision,
                scale: 0,
            })),
        });
        Column {
            name: self.name,
            r#type: self.data_type as i32,
            primary_key: self.primary_key,
            params,
        }
    }
}

/// Idempotently defines the table and all of its fields and indices.
pub async fn define_table<S: Store>(store: &mut S, table: &Table) -> Result<(), Error> {
    let name = validate_ident(&table.name)?;
    for column in &table.columns {
        validate_ident(&column.name)?;
    }

    let history = is_history_table(table);
    let mut statements = vec![format!("DEFINE TABLE IF NOT EXISTS {name} SCHEMAFULL")];

    // The record id is the array-valued primary key. It is surfaced as a
    // field whenever the orchestrator declares an `id` column, and always on
    // history tables where the trailing element is `_fivetran_start`.
    let id_column = table.columns.iter().position(|c| c.name == "id");
    if history || id_column.is_some() {
        let comment = match id_column {
            Some(index) => {
                let column = &table.columns[index];
                let meta = FieldMetadata::new(
                    index as u32,
                    column.r#type(),
                    decimal_precision(column),
                );
                format!(" COMMENT '{}'", meta.to_comment())
            }
            None => String::new(),
        };
        statements.push(format!(
            "DEFINE FIELD OVERWRITE id ON {name} TYPE array<any>{comment}"
        ));
    }

    for (index, column) in table.columns.iter().enumerate() {
        if column.name == "id" {
            continue;
        }
        statements.push(field_definition(
            name,
            &column.name,
            column.r#type(),
            decimal_precision(column),
            index as u32,
        )?);
    }

    if history {
        statements.push(format!(
            "DEFINE INDEX IF NOT EXISTS {name}_fivetran_start ON {name} FIELDS {FIVETRAN_START}"
        ));
        let pk: Vec<&str> = primary_key_columns(table)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        if !pk.is_empty() {
            statements.push(format!(
                "DEFINE INDEX IF NOT EXISTS {name}_pk ON {name} FIELDS {}",
                pk.join(", ")
            ));
        }
    }

    let sql = statements.join(";\n");
    run(store, &sql, Vars::new()).await?;
    tracing::debug!(table = %name, history, "defined table");
    Ok(())
}

/// Composes the `DEFINE FIELD` statement of one orchestrator column,
/// embedding its metadata comment.
pub(crate) fn field_definition(
    table: &str,
    column: &str,
    data_type: DataType,
    precision: Option<u32>,
    ft_index: u32,
) -> Result<String, Error> {
    let comment = FieldMetadata::new(ft_index, data_type, precision).to_comment();
    if data_type == DataType::Json {
        // Nested fields of a json column stay open.
        return Ok(format!(
            "DEFINE FIELD OVERWRITE {column} ON {table} FLEXIBLE TYPE option<object> COMMENT '{comment}'"
        ));
    }
    let store_type = store_type(data_type, precision)?;
    Ok(format!(
        "DEFINE FIELD OVERWRITE {column} ON {table} TYPE option<{store_type}> COMMENT '{comment}'"
    ))
}

/// Whether the database knows a table by this name.
pub async fn table_exists<S: Store>(store: &mut S, name: &str) -> Result<bool, Error> {
    validate_ident(name)?;
    let info = crate::store::run_one(store, "INFO FOR DB", Vars::new()).await?;
    Ok(tables_of(&info).map_or(false, |tables| tables.contains_key(name)))
}

/// Introspects a table into orchestrator columns, ordered by `ft_index`.
/// Distinguishes "table not found" from other failures.
pub async fn info_for_table<S: Store>(
    store: &mut S,
    name: &str,
) -> Result<Vec<ColumnInfo>, Error> {
    validate_ident(name)?;

    let sql = format!("INFO FOR DB;\nINFO FOR TABLE {name}");
    let values = run(store, &sql, Vars::new()).await?;
    let [db_info, table_info] = values.as_slice() else {
        return Err(Error::Schema("introspection returned too few results".to_string()));
    };

    let known = tables_of(db_info).map_or(false, |tables| tables.contains_key(name));
    if !known {
        return Err(Error::TableNotFound(name.to_string()));
    }

    let fields = table_info
        .as_object()
        .and_then(|info| info.get("fields"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let pk_fields = primary_key_index_fields(table_info, name);

    let mut columns = Vec::new();
    for (field_name, definition) in &fields {
        let field_name = sanitize_ident(field_name);
        // Nested entries (`col[*]`) describe array/object internals, not
        // columns.
        if field_name.contains("[*]") || field_name.contains(".") {
            continue;
        }
        let Some(definition) = definition.as_str() else {
            continue;
        };
        // Fields without metadata (e.g. a bare history `id`) are not
        // orchestrator columns.
        let Some(meta) = parse_comment(definition) else {
            continue;
        };
        let meta = meta?;
        let data_type = meta.data_type()?;
        columns.push(ColumnInfo {
            primary_key: pk_fields.contains(&field_name),
            name: field_name,
            data_type,
            ft_index: meta.ft_index,
            decimal_precision: meta.decimal_precision,
        });
    }

    columns.sort_by_key(|c| c.ft_index);
    Ok(columns)
}

/// Raw `DEFINE FIELD` statements of a table, keyed by field name. Used by
/// migrations that clone or rewrite schema.
pub(crate) async fn raw_field_definitions<S: Store>(
    store: &mut S,
    name: &str,
) -> Result<BTreeMap<String, String>, Error> {
    validate_ident(name)?;
    let info = crate::store::run_one(store, &format!("INFO FOR TABLE {name}"), Vars::new()).await?;
    Ok(raw_definitions(&info, "fields"))
}

/// Raw `DEFINE INDEX` statements of a table, keyed by index name.
pub(crate) async fn raw_index_definitions<S: Store>(
    store: &mut S,
    name: &str,
) -> Result<BTreeMap<String, String>, Error> {
    validate_ident(name)?;
    let info = crate::store::run_one(store, &format!("INFO FOR TABLE {name}"), Vars::new()).await?;
    Ok(raw_definitions(&info, "indexes"))
}

fn raw_definitions(info: &Value, kind: &str) -> BTreeMap<String, String> {
    info.as_object()
        .and_then(|info| info.get(kind))
        .and_then(Value::as_object)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|(name, def)| {
                    def.as_str()
                        .map(|def| (sanitize_ident(name), def.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn tables_of(db_info: &Value) -> Option<&BTreeMap<String, Value>> {
    db_info.as_object()?.get("tables")?.as_object()
}

/// Extracts the field metadata comment from a `DEFINE FIELD` statement.
pub(crate) fn parse_comment(definition: &str) -> Option<Result<FieldMetadata, Error>> {
    let captured = COMMENT.captures(definition)?;
    let raw = captured.get(1).unwrap().as_str().replace("\\'", "'");
    Some(FieldMetadata::from_comment(&raw).map_err(Error::from))
}

/// The columns of the table's composite primary-key index, when one exists.
fn primary_key_index_fields(table_info: &Value, table: &str) -> Vec<String> {
    let indexes = raw_definitions(table_info, "indexes");
    let Some(definition) = indexes.get(&format!("{table}_pk")) else {
        return Vec::new();
    };
    parse_index_fields(definition)
}

/// Pulls the field list out of a `DEFINE INDEX … FIELDS a, b` statement.
pub(crate) fn parse_index_fields(definition: &str) -> Vec<String> {
    INDEX_FIELDS
        .captures(definition)
        .map(|captured| {
            captured
                .get(1)
                .unwrap()
                .as_str()
                .split(',')
                .map(|f| sanitize_ident(f.trim()))
                .filter(|f| !f.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_validation() {
        assert!(validate_ident("users").is_ok());
        assert!(validate_ident("_fivetran_synced").is_ok());
        assert!(validate_ident("Table_2").is_ok());
        assert!(validate_ident("").is_err());
        assert!(validate_ident("users; REMOVE TABLE users").is_err());
        assert!(validate_ident("na-me").is_err());
        assert!(validate_ident("naïve").is_err());
    }

    #[test]
    fn sanitize_strips_store_quoting() {
        assert_eq!(sanitize_ident("`order`"), "order");
        assert_eq!(sanitize_ident("\u{27E8}weird name\u{27E9}"), "weird name");
        assert_eq!(sanitize_ident("plain"), "plain");
    }

    #[test]
    fn comments_parse_from_field_definitions() {
        let definition = "DEFINE FIELD amount ON invoices TYPE option<decimal> \
            COMMENT '{\"ft_index\":2,\"ft_data_type\":\"DECIMAL\",\"decimal_precision\":20}' \
            PERMISSIONS FULL";
        let meta = parse_comment(definition).unwrap().unwrap();
        assert_eq!(meta.ft_index, 2);
        assert_eq!(meta.data_type().unwrap(), DataType::Decimal);
        assert_eq!(meta.decimal_precision, Some(20));

        assert!(parse_comment("DEFINE FIELD x ON t TYPE option<string>").is_none());
    }

    #[test]
    fn index_fields_parse() {
        assert_eq!(
            parse_index_fields("DEFINE INDEX users_pk ON users FIELDS id, region"),
            vec!["id".to_string(), "region".to_string()]
        );
        assert_eq!(
            parse_index_fields("DEFINE INDEX u ON users COLUMNS email UNIQUE"),
            vec!["email".to_string()]
        );
    }

    #[test]
    fn history_detection() {
        let mut table = Table {
            name: "users".to_string(),
            columns: vec![Column {
                name: "id".to_string(),
                r#type: DataType::Int as i32,
                primary_key: true,
                params: None,
            }],
        };
        assert!(!is_history_table(&table));
        table.columns.push(Column {
            name: FIVETRAN_START.to_string(),
            r#type: DataType::UtcDatetime as i32,
            primary_key: false,
            params: None,
        });
        assert!(is_history_table(&table));
    }
}
