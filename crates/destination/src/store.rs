//! The injectable store-session seam. Components are generic over [`Store`]
//! so that tests can script and record the statements a component issues.

use async_trait::async_trait;
use surreal_client::{QueryResult, Session, Value, Vars};

use crate::config::Config;
use crate::error::Error;

#[async_trait]
pub trait Store: Send {
    async fn query(
        &mut self,
        sql: &str,
        vars: Vars,
    ) -> Result<Vec<QueryResult>, surreal_client::Error>;
}

#[async_trait]
impl Store for Session {
    async fn query(
        &mut self,
        sql: &str,
        vars: Vars,
    ) -> Result<Vec<QueryResult>, surreal_client::Error> {
        Session::query(self, sql, vars).await
    }
}

/// Opens a session per the configuration: connect, sign in, and select the
/// namespace plus the request's database when one is named.
pub async fn open_session(config: &Config, database: Option<&str>) -> Result<Session, Error> {
    let mut session = Session::connect(&config.url).await?;
    session.signin(&config.credentials).await?;
    if let Some(database) = database {
        session.use_ns_db(&config.namespace, database).await?;
    }
    Ok(session)
}

/// Runs statements and unwraps every per-statement outcome, failing on the
/// first statement-level error.
pub async fn run<S: Store + ?Sized>(
    store: &mut S,
    sql: &str,
    vars: Vars,
) -> Result<Vec<Value>, Error> {
    let results = store.query(sql, vars).await?;
    results
        .into_iter()
        .map(|r| r.ok().map_err(Error::from))
        .collect()
}

/// As [`run`], returning just the first statement's value.
pub async fn run_one<S: Store + ?Sized>(
    store: &mut S,
    sql: &str,
    vars: Vars,
) -> Result<Value, Error> {
    let mut values = run(store, sql, vars).await?;
    if values.is_empty() {
        return Err(Error::Store(surreal_client::Error::Protocol(
            "query produced no statement results".to_string(),
        )));
    }
    Ok(values.remove(0))
}
