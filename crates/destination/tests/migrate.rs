//! Migrator coverage: statement sequences recorded against a scripted store
//! session.

mod support;

use chrono::{TimeZone, Utc};
use destination::migrate::Migrator;
use destination::Error;
use proto_fivetran::v2::{Column, DataType, Table};
use support::{db_info, field_def, object, table_info, ScriptedStore};
use surreal_client::Value;

fn column(name: &str, data_type: DataType) -> Column {
    Column {
        name: name.to_string(),
        r#type: data_type as i32,
        primary_key: false,
        params: None,
    }
}

fn users_fields() -> Vec<(&'static str, Value)> {
    vec![
        (
            "id",
            Value::Strand(
                "DEFINE FIELD id ON users TYPE array<any> \
                 COMMENT '{\"ft_index\":0,\"ft_data_type\":\"INT\"}' PERMISSIONS FULL"
                    .to_string(),
            ),
        ),
        ("name", field_def("users", "name", "string", 1, "STRING")),
    ]
}

#[tokio::test]
async fn add_column_defines_and_backfills() {
    let mut store = ScriptedStore::new();
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(&users_fields(), &[])],
    );

    let mut migrator = Migrator::new(&mut store);
    migrator
        .add_column_with_default_value("users", &column("age", DataType::Int), "25")
        .await
        .unwrap();

    let sql = store.sql().join("\n---\n");
    // The new field lands at the next free ft_index.
    assert!(sql.contains(
        "DEFINE FIELD OVERWRITE age ON users TYPE option<int> \
         COMMENT '{\"ft_index\":2,\"ft_data_type\":\"INT\"}'"
    ));
    assert!(sql.contains("UPDATE users SET age = $__default WHERE age IS NONE"));
    let backfill = store
        .queries
        .iter()
        .find(|(s, _)| s.contains("WHERE age IS NONE"))
        .unwrap();
    assert_eq!(backfill.1.get("__default"), Some(&Value::Int(25)));
}

#[tokio::test]
async fn add_column_in_history_mode_requires_a_future_op_ts() {
    let mut store = ScriptedStore::new();
    store.respond_once(
        "math::max(_fivetran_start)",
        vec![Value::Array(vec![Value::Strand(
            "2024-06-01T00:00:00Z".to_string(),
        )])],
    );

    let mut migrator = Migrator::new(&mut store);
    let op_ts = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let err = migrator
        .add_column_in_history_mode("users", &column("age", DataType::Int), "25", op_ts)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ModeInvariant(_)));
    // Nothing was defined or rewritten.
    assert_eq!(store.queries.len(), 1);
}

#[tokio::test]
async fn add_column_in_history_mode_splits_active_versions() {
    let mut store = ScriptedStore::new();
    // No versions yet recorded at all: the precondition passes trivially.
    store.respond_once("math::max(_fivetran_start)", vec![Value::Array(vec![])]);
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(
            &[
                ("name", field_def("users", "name", "string", 0, "STRING")),
                (
                    "_fivetran_start",
                    field_def("users", "_fivetran_start", "datetime", 1, "UTC_DATETIME"),
                ),
                (
                    "_fivetran_end",
                    field_def("users", "_fivetran_end", "datetime", 2, "UTC_DATETIME"),
                ),
                (
                    "_fivetran_active",
                    field_def("users", "_fivetran_active", "bool", 3, "BOOLEAN"),
                ),
            ],
            &[],
        )],
    );
    // One round of splitting, then the candidate set runs dry.
    store.respond_once(
        "LET $__batch",
        vec![
            Value::None,
            Value::Array(vec![object(&[("id", Value::Strand("users:[1]".into()))])]),
            Value::Array(vec![]),
            Value::Array(vec![Value::Strand("users:[1, d'2024-05-01T00:00:00Z']".into())]),
        ],
    );

    let mut migrator = Migrator::new(&mut store);
    let op_ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    migrator
        .add_column_in_history_mode("users", &column("age", DataType::Int), "25", op_ts)
        .await
        .unwrap();

    let split = store
        .queries
        .iter()
        .find(|(s, _)| s.contains("LET $__batch"))
        .unwrap();
    // New versions are keyed by PK ++ [op_ts] and carry the default.
    assert!(split.0.contains(
        "array::push(array::slice(record::id(id), 0, array::len(record::id(id)) - 1), $__op_ts)"
    ));
    assert!(split.0.contains("$__default AS age"));
    assert!(split.0.contains("_fivetran_active = true AND _fivetran_start < $__op_ts"));
    // Prior versions close at one millisecond before the operation.
    assert!(split.0.contains("SET _fivetran_end = $__closed_end, _fivetran_active = false"));
    let closed = split.1.get("__closed_end").unwrap();
    assert_eq!(
        closed,
        &Value::Datetime(Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap() + chrono::Duration::milliseconds(999))
    );
    assert_eq!(split.1.get("__default"), Some(&Value::Int(25)));

    // Two rounds ran: the scripted one, then an empty one that ended the loop.
    let rounds = store
        .sql()
        .iter()
        .filter(|s| s.contains("LET $__batch"))
        .count();
    assert_eq!(rounds, 2);
}

#[tokio::test]
async fn drop_column_removes_field_and_residual_values() {
    let mut store = ScriptedStore::new();
    let mut migrator = Migrator::new(&mut store);
    migrator.drop_column("users", "age").await.unwrap();
    assert_eq!(
        store.sql(),
        vec!["REMOVE FIELD age ON users;\nUPDATE users UNSET age"]
    );
}

#[tokio::test]
async fn rename_column_copies_then_removes() {
    let mut store = ScriptedStore::new();
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(&users_fields(), &[])],
    );

    let mut migrator = Migrator::new(&mut store);
    migrator.rename_column("users", "name", "full_name").await.unwrap();

    let sql = store.sql().join("\n---\n");
    // The source definition is re-emitted, comment and all, under the new name.
    assert!(sql.contains(
        "DEFINE FIELD OVERWRITE full_name ON users TYPE option<string> \
         COMMENT '{\"ft_index\":1,\"ft_data_type\":\"STRING\"}' PERMISSIONS FULL"
    ));
    assert!(sql.contains("UPDATE users SET full_name = name"));
    assert!(sql.contains("REMOVE FIELD name ON users"));
    assert!(sql.contains("UPDATE users UNSET name"));
}

#[tokio::test]
async fn update_column_value_clears_on_null_literals() {
    let mut store = ScriptedStore::new();
    let mut migrator = Migrator::new(&mut store);
    migrator.update_column_value("users", "name", "NULL").await.unwrap();
    migrator.update_column_value("users", "name", "").await.unwrap();
    assert_eq!(
        store.sql(),
        vec!["UPDATE users SET name = NONE", "UPDATE users SET name = NONE"]
    );
}

#[tokio::test]
async fn update_column_value_binds_a_typed_value() {
    let mut store = ScriptedStore::new();
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(&users_fields(), &[])],
    );
    let mut migrator = Migrator::new(&mut store);
    migrator.update_column_value("users", "name", "carol").await.unwrap();

    let update = store
        .queries
        .iter()
        .find(|(s, _)| s.contains("SET name = $__value"))
        .unwrap();
    assert_eq!(
        update.1.get("__value"),
        Some(&Value::Strand("carol".to_string()))
    );
}

#[tokio::test]
async fn rename_table_recreates_schema_and_moves_rows() {
    let mut store = ScriptedStore::new();
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(
            &users_fields(),
            &[(
                "users_pk",
                Value::Strand("DEFINE INDEX users_pk ON users FIELDS id".to_string()),
            )],
        )],
    );

    let mut migrator = Migrator::new(&mut store);
    migrator.rename_table("users", "people").await.unwrap();

    let sql = store.sql().join("\n---\n");
    assert!(sql.contains("DEFINE TABLE OVERWRITE people SCHEMAFULL"));
    assert!(sql.contains("DEFINE FIELD name ON people TYPE option<string>"));
    assert!(sql.contains("INSERT INTO people (SELECT * FROM users)"));
    assert!(sql.contains("DEFINE INDEX users_pk ON people FIELDS id"));
    assert!(sql.contains("REMOVE TABLE users"));
    // Copy leaves the source; rename drops it last.
    assert!(store.sql().last().unwrap().contains("REMOVE TABLE users"));
}

#[tokio::test]
async fn live_to_history_sets_fields_and_rewrites_ids() {
    let mut store = ScriptedStore::new();
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(
            &[
                ("name", field_def("users", "name", "string", 0, "STRING")),
                (
                    "_fivetran_start",
                    field_def("users", "_fivetran_start", "datetime", 1, "UTC_DATETIME"),
                ),
                (
                    "_fivetran_end",
                    field_def("users", "_fivetran_end", "datetime", 2, "UTC_DATETIME"),
                ),
                (
                    "_fivetran_active",
                    field_def("users", "_fivetran_active", "bool", 3, "BOOLEAN"),
                ),
            ],
            &[],
        )],
    );
    store.respond_always("INFO FOR TABLE _temp_users", vec![table_info(&[], &[])]);

    let mut migrator = Migrator::new(&mut store);
    migrator.live_to_history("users").await.unwrap();

    let sql = store.sql().join("\n---\n");
    assert!(sql.contains("DEFINE FIELD OVERWRITE _fivetran_start ON users TYPE option<datetime>"));
    assert!(sql.contains(
        "UPDATE users SET _fivetran_start = $__now, _fivetran_end = $__far_future, _fivetran_active = true"
    ));
    // Ids are rewritten through a temp table move, appending the start.
    assert!(sql.contains("DEFINE TABLE OVERWRITE _temp_users SCHEMAFULL"));
    assert!(sql.contains("array::push(record::id(id), _fivetran_start) AS id"));
    assert!(sql.contains(
        "DELETE (SELECT * FROM users LIMIT $__limit) RETURN BEFORE"
    ));
    assert!(sql.contains("DELETE (SELECT * FROM _temp_users LIMIT $__limit) RETURN BEFORE"));
    assert!(store.sql().last().unwrap().contains("REMOVE TABLE _temp_users"));

    let update = store
        .queries
        .iter()
        .find(|(s, _)| s.contains("SET _fivetran_start = $__now"))
        .unwrap();
    assert_eq!(
        update.1.get("__far_future").unwrap(),
        &Value::Datetime(Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap())
    );
}

#[tokio::test]
async fn history_to_live_drops_inactive_versions_and_strips_ids() {
    let mut store = ScriptedStore::new();
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(
            &[
                ("name", field_def("users", "name", "string", 0, "STRING")),
                (
                    "_fivetran_start",
                    field_def("users", "_fivetran_start", "datetime", 1, "UTC_DATETIME"),
                ),
            ],
            &[],
        )],
    );
    store.respond_always("INFO FOR TABLE _temp_users", vec![table_info(&[], &[])]);

    let mut migrator = Migrator::new(&mut store);
    migrator.history_to_live("users", false).await.unwrap();

    let sql = store.sql().join("\n---\n");
    assert!(sql.contains("DELETE users WHERE _fivetran_active = false"));
    assert!(sql.contains("REMOVE FIELD _fivetran_start ON users"));
    assert!(sql.contains("REMOVE FIELD _fivetran_end ON users"));
    assert!(sql.contains("REMOVE FIELD _fivetran_active ON users"));
    assert!(sql.contains(
        "array::slice(record::id(id), 0, array::len(record::id(id)) - 1) AS id"
    ));
}

#[tokio::test]
async fn soft_delete_to_history_rewrites_rows_by_deleted_flag() {
    let mut store = ScriptedStore::new();
    store.respond_once(
        "math::max(_fivetran_synced)",
        vec![Value::Array(vec![Value::Strand(
            "2024-06-01T00:00:00Z".to_string(),
        )])],
    );
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(
            &[("name", field_def("users", "name", "string", 0, "STRING"))],
            &[],
        )],
    );
    store.respond_always("INFO FOR TABLE _temp_users", vec![table_info(&[], &[])]);

    let mut migrator = Migrator::new(&mut store);
    migrator
        .soft_delete_to_history("users", "_fivetran_deleted", "_fivetran_synced")
        .await
        .unwrap();

    let sql = store.sql().join("\n---\n");
    assert!(sql.contains(
        "_fivetran_start = IF _fivetran_deleted = true { $__far_past } ELSE { $__max_synced }"
    ));
    assert!(sql.contains(
        "_fivetran_active = IF _fivetran_deleted = true { false } ELSE { true }"
    ));
    assert!(sql.contains("REMOVE FIELD _fivetran_deleted ON users"));
    assert!(sql.contains("UPDATE users UNSET _fivetran_deleted"));
    assert!(sql.contains("array::push(record::id(id), _fivetran_start) AS id"));

    let rewrite = store
        .queries
        .iter()
        .find(|(s, _)| s.contains("$__max_synced"))
        .unwrap();
    assert_eq!(
        rewrite.1.get("__max_synced").unwrap(),
        &Value::Datetime(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(
        rewrite.1.get("__far_past").unwrap(),
        &Value::Datetime(Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn copy_table_to_history_mode_versions_soft_deleted_rows() {
    let mut store = ScriptedStore::new();
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(
            &[
                ("name", field_def("users", "name", "string", 0, "STRING")),
                ("deleted", field_def("users", "deleted", "bool", 1, "BOOLEAN")),
            ],
            &[],
        )],
    );
    store.respond_always("INFO FOR TABLE archive", vec![table_info(&[], &[])]);

    let mut migrator = Migrator::new(&mut store);
    migrator
        .copy_table_to_history_mode("users", "archive", Some("deleted"))
        .await
        .unwrap();

    let sql = store.sql().join("\n---\n");
    assert!(sql.contains("DEFINE TABLE OVERWRITE archive SCHEMAFULL"));
    assert!(sql.contains("DEFINE FIELD OVERWRITE id ON archive TYPE array<any>"));
    // The soft-delete flag itself is not carried over.
    assert!(sql.contains("DEFINE FIELD name ON archive"));
    assert!(!sql.contains("DEFINE FIELD deleted ON archive"));
    // Copied rows version at now, with activity derived from the flag.
    assert!(sql.contains("array::push(record::id(id), $__now) AS id"));
    assert!(sql.contains("IF deleted = true { false } ELSE { true } AS _fivetran_active"));
    assert!(sql.contains("$__far_future AS _fivetran_end"));
}

#[tokio::test]
async fn remove_store_only_columns_drops_undeclared_fields() {
    let mut store = ScriptedStore::new();
    store.respond_always(
        "INFO FOR TABLE users",
        vec![table_info(
            &[
                ("name", field_def("users", "name", "string", 0, "STRING")),
                ("leftover", field_def("users", "leftover", "int", 1, "INT")),
            ],
            &[],
        )],
    );

    let table = Table {
        name: "users".to_string(),
        columns: vec![column("name", DataType::String)],
    };
    let mut migrator = Migrator::new(&mut store);
    migrator.remove_store_only_columns(&table).await.unwrap();

    let sql = store.sql().join("\n---\n");
    assert!(sql.contains("REMOVE FIELD leftover ON users"));
    assert!(sql.contains("UPDATE users UNSET leftover"));
    assert!(!sql.contains("REMOVE FIELD name ON users"));
}

#[tokio::test]
async fn db_info_helper_is_well_formed() {
    // Guards the shared fixture shape the other suites rely on.
    let info = db_info(&["users"]);
    let tables = info.as_object().unwrap().get("tables").unwrap();
    assert!(tables.as_object().unwrap().contains_key("users"));
}
