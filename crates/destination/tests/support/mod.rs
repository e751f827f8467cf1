//! Shared helpers for integration tests: a scripted store session that
//! records every statement, and builders for batch files.

#![allow(dead_code)]

use std::collections::BTreeMap;

use async_trait::async_trait;
use destination::store::Store;
use surreal_client::{QueryResult, Value, Vars};

#[derive(Debug)]
struct Rule {
    needle: String,
    values: Vec<Value>,
    once: bool,
}

/// A store double: every query is recorded, and responses are produced from
/// substring-matched rules, falling back to one empty result per statement.
#[derive(Debug, Default)]
pub struct ScriptedStore {
    pub queries: Vec<(String, Vars)>,
    rules: Vec<Rule>,
    fail_on: Option<String>,
}

impl ScriptedStore {
    pub fn new() -> ScriptedStore {
        ScriptedStore::default()
    }

    /// The next query whose text contains `needle` answers with `values`,
    /// one per statement. Consumed after one use.
    pub fn respond_once(&mut self, needle: &str, values: Vec<Value>) {
        self.rules.push(Rule {
            needle: needle.to_string(),
            values,
            once: true,
        });
    }

    /// Every query whose text contains `needle` answers with `values`.
    pub fn respond_always(&mut self, needle: &str, values: Vec<Value>) {
        self.rules.push(Rule {
            needle: needle.to_string(),
            values,
            once: false,
        });
    }

    /// The next query whose text contains `needle` fails with a
    /// statement-level error.
    pub fn fail_on(&mut self, needle: &str) {
        self.fail_on = Some(needle.to_string());
    }

    pub fn sql(&self) -> Vec<&str> {
        self.queries.iter().map(|(sql, _)| sql.as_str()).collect()
    }

    pub fn vars_of(&self, index: usize) -> &Vars {
        &self.queries[index].1
    }
}

#[async_trait]
impl Store for ScriptedStore {
    async fn query(
        &mut self,
        sql: &str,
        vars: Vars,
    ) -> Result<Vec<QueryResult>, surreal_client::Error> {
        self.queries.push((sql.to_string(), vars));

        if let Some(position) = self.rules.iter().position(|r| sql.contains(&r.needle)) {
            let values = self.rules[position].values.clone();
            if self.rules[position].once {
                self.rules.remove(position);
            }
            return Ok(values
                .into_iter()
                .map(|v| QueryResult::new(String::new(), Ok(v)))
                .collect());
        }

        if let Some(needle) = &self.fail_on {
            if sql.contains(needle.as_str()) {
                let needle = needle.clone();
                self.fail_on = None;
                return Ok(vec![QueryResult::new(
                    String::new(),
                    Err(format!("injected failure for {needle:?}")),
                )]);
            }
        }

        let statements = sql
            .split(';')
            .filter(|s| !s.trim().is_empty())
            .count()
            .max(1);

        Ok((0..statements)
            .map(|_| QueryResult::new(String::new(), Ok(Value::Array(Vec::new()))))
            .collect())
    }
}

pub fn object(entries: &[(&str, Value)]) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<BTreeMap<String, Value>>(),
    )
}

/// A `DEFINE FIELD` statement carrying orchestrator metadata, as the store
/// would report it back from introspection.
pub fn field_def(table: &str, column: &str, store_type: &str, ft_index: u32, ft_type: &str) -> Value {
    Value::Strand(format!(
        "DEFINE FIELD {column} ON {table} TYPE option<{store_type}> \
         COMMENT '{{\"ft_index\":{ft_index},\"ft_data_type\":\"{ft_type}\"}}' PERMISSIONS FULL"
    ))
}

/// An `INFO FOR TABLE` result with the given field definitions.
pub fn table_info(fields: &[(&str, Value)], indexes: &[(&str, Value)]) -> Value {
    object(&[
        ("events", object(&[])),
        ("fields", object(fields)),
        ("indexes", object(indexes)),
        ("lives", object(&[])),
        ("tables", object(&[])),
    ])
}

/// An `INFO FOR DB` result knowing the given tables.
pub fn db_info(tables: &[&str]) -> Value {
    let entries: Vec<(&str, Value)> = tables
        .iter()
        .map(|t| (*t, Value::Strand(format!("DEFINE TABLE {t} SCHEMAFULL"))))
        .collect();
    object(&[("tables", object(&entries))])
}
