//! Table-mapper coverage: definition statements and introspection against a
//! scripted store session.

mod support;

use destination::tables::{define_table, info_for_table};
use destination::Error;
use proto_fivetran::v2::{Column, DataType, Table};
use support::{db_info, field_def, table_info, ScriptedStore};
use surreal_client::Value;

fn column(name: &str, data_type: DataType, primary_key: bool) -> Column {
    Column {
        name: name.to_string(),
        r#type: data_type as i32,
        primary_key,
        params: None,
    }
}

#[tokio::test]
async fn define_live_table_emits_schema_and_metadata() {
    let table = Table {
        name: "users".to_string(),
        columns: vec![
            column("id", DataType::Int, true),
            column("name", DataType::String, false),
            column("payload", DataType::Json, false),
        ],
    };
    let mut store = ScriptedStore::new();
    define_table(&mut store, &table).await.unwrap();

    assert_eq!(store.queries.len(), 1);
    let sql = store.sql()[0].to_string();
    assert!(sql.contains("DEFINE TABLE IF NOT EXISTS users SCHEMAFULL"));
    // A declared `id` column is the record id, typed as an array.
    assert!(sql.contains("DEFINE FIELD OVERWRITE id ON users TYPE array<any>"));
    assert!(sql.contains(
        "DEFINE FIELD OVERWRITE name ON users TYPE option<string> \
         COMMENT '{\"ft_index\":1,\"ft_data_type\":\"STRING\"}'"
    ));
    // Json columns stay open to nested fields.
    assert!(sql.contains("DEFINE FIELD OVERWRITE payload ON users FLEXIBLE TYPE option<object>"));
    // No history mode, no indices.
    assert!(!sql.contains("DEFINE INDEX"));
}

#[tokio::test]
async fn define_history_table_adds_indices() {
    let table = Table {
        name: "users".to_string(),
        columns: vec![
            column("id", DataType::Int, true),
            column("region", DataType::String, true),
            column("_fivetran_start", DataType::UtcDatetime, false),
            column("_fivetran_end", DataType::UtcDatetime, false),
            column("_fivetran_active", DataType::Boolean, false),
        ],
    };
    let mut store = ScriptedStore::new();
    define_table(&mut store, &table).await.unwrap();

    let sql = store.sql()[0].to_string();
    assert!(sql.contains(
        "DEFINE INDEX IF NOT EXISTS users_fivetran_start ON users FIELDS _fivetran_start"
    ));
    assert!(sql.contains("DEFINE INDEX IF NOT EXISTS users_pk ON users FIELDS id, region"));
}

#[tokio::test]
async fn invalid_names_are_rejected_before_composition() {
    let table = Table {
        name: "users; REMOVE TABLE users".to_string(),
        columns: vec![column("id", DataType::Int, true)],
    };
    let mut store = ScriptedStore::new();
    let err = define_table(&mut store, &table).await.unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(_)));
    assert!(store.queries.is_empty());

    let table = Table {
        name: "users".to_string(),
        columns: vec![column("na me", DataType::Int, true)],
    };
    let err = define_table(&mut store, &table).await.unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(_)));
    assert!(store.queries.is_empty());
}

#[tokio::test]
async fn info_orders_columns_by_ft_index_and_recovers_pks() {
    let mut store = ScriptedStore::new();
    store.respond_once(
        "INFO FOR DB",
        vec![
            db_info(&["users"]),
            table_info(
                &[
                    ("name", field_def("users", "name", "string", 1, "STRING")),
                    (
                        "id",
                        Value::Strand(
                            "DEFINE FIELD id ON users TYPE array<any> \
                             COMMENT '{\"ft_index\":0,\"ft_data_type\":\"INT\"}' PERMISSIONS FULL"
                                .to_string(),
                        ),
                    ),
                    // Nested entries and metadata-less fields are skipped.
                    ("payload[*]", Value::Strand("DEFINE FIELD payload[*] ON users TYPE any".to_string())),
                    ("internal", Value::Strand("DEFINE FIELD internal ON users TYPE option<bool>".to_string())),
                ],
                &[(
                    "users_pk",
                    Value::Strand("DEFINE INDEX users_pk ON users FIELDS id".to_string()),
                )],
            ),
        ],
    );

    let columns = info_for_table(&mut store, "users").await.unwrap();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].name, "id");
    assert_eq!(columns[0].data_type, DataType::Int);
    assert!(columns[0].primary_key);
    assert_eq!(columns[1].name, "name");
    assert_eq!(columns[1].ft_index, 1);
    assert!(!columns[1].primary_key);
}

#[tokio::test]
async fn missing_tables_are_distinguished() {
    let mut store = ScriptedStore::new();
    store.respond_once(
        "INFO FOR DB",
        vec![db_info(&["other"]), table_info(&[], &[])],
    );
    let err = info_for_table(&mut store, "users").await.unwrap_err();
    assert!(matches!(err, Error::TableNotFound(name) if name == "users"));
}
