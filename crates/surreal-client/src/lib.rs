//! A minimal SurrealDB session client speaking the JSON rpc protocol over a
//! websocket. Only the surface this service needs: sign-in, namespace and
//! database selection, and `query` with named bind variables.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

mod error;
mod value;

pub use error::Error;
pub use value::{Value, Vars};

/// Sign-in scope of a session.
#[derive(Debug, Clone)]
pub enum Credentials {
    Root {
        username: String,
        password: String,
    },
    Namespace {
        namespace: String,
        username: String,
        password: String,
    },
    Token(String),
}

/// The outcome of one statement within a query request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub time: String,
    result: Result<Value, String>,
}

impl QueryResult {
    pub fn new(time: String, result: Result<Value, String>) -> Self {
        QueryResult { time, result }
    }

    /// Unwraps the statement result, mapping a statement-level failure into
    /// [`Error::Query`].
    pub fn ok(self) -> Result<Value, Error> {
        self.result.map_err(Error::Query)
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn err_message(&self) -> Option<&str> {
        self.result.as_ref().err().map(|s| s.as_str())
    }
}

/// One websocket session with the store. Sessions are cheap and are opened
/// per request; requests on a session are strictly sequential.
pub struct Session {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
    next_id: u64,
}

impl Session {
    /// Opens a websocket connection to the store's rpc endpoint.
    pub async fn connect(endpoint: &str) -> Result<Session, Error> {
        let parsed =
            url::Url::parse(endpoint).map_err(|_| Error::BadUrl(endpoint.to_string()))?;
        match parsed.scheme() {
            "ws" | "wss" => (),
            _ => return Err(Error::BadUrl(endpoint.to_string())),
        }

        let (ws, _response) = connect_async(endpoint).await?;
        tracing::debug!(%endpoint, "store session connected");
        Ok(Session { ws, next_id: 0 })
    }

    /// Signs the session in with the given scope.
    pub async fn signin(&mut self, credentials: &Credentials) -> Result<(), Error> {
        match credentials {
            Credentials::Root { username, password } => {
                tracing::debug!(scope = "root", "store sign-in");
                self.request(
                    "signin",
                    serde_json::json!([{ "user": username, "pass": password }]),
                )
                .await?;
            }
            Credentials::Namespace {
                namespace,
                username,
                password,
            } => {
                tracing::debug!(scope = "namespace", ns = %namespace, "store sign-in");
                self.request(
                    "signin",
                    serde_json::json!([{ "ns": namespace, "user": username, "pass": password }]),
                )
                .await?;
            }
            Credentials::Token(token) => {
                tracing::debug!(scope = "token", "store sign-in");
                self.request("authenticate", serde_json::json!([token]))
                    .await?;
            }
        }
        Ok(())
    }

    /// Selects the namespace and database all later statements run against.
    pub async fn use_ns_db(&mut self, ns: &str, db: &str) -> Result<(), Error> {
        tracing::debug!(%ns, %db, "store use");
        self.request("use", serde_json::json!([ns, db])).await?;
        Ok(())
    }

    /// Runs one or more SurrealQL statements, returning one result per
    /// statement.
    pub async fn query(&mut self, sql: &str, vars: Vars) -> Result<Vec<QueryResult>, Error> {
        let bound: serde_json::Map<String, serde_json::Value> = vars
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        let raw = self
            .request("query", serde_json::json!([sql, bound]))
            .await?;

        let entries = match raw {
            serde_json::Value::Array(entries) => entries,
            other => {
                return Err(Error::Protocol(format!(
                    "expected an array of statement results, got {other}"
                )))
            }
        };
        entries.into_iter().map(parse_query_result).collect()
    }

    /// Sends a close frame and drops the connection.
    pub async fn close(mut self) {
        let _ = self.ws.close(None).await;
    }

    async fn request(
        &mut self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, Error> {
        self.next_id += 1;
        let id = self.next_id;
        let frame = serde_json::json!({ "id": id, "method": method, "params": params });
        self.ws.send(Message::Text(frame.to_string())).await?;

        loop {
            let message = self.ws.next().await.ok_or(Error::Closed)??;
            match message {
                Message::Text(text) => {
                    let response: serde_json::Value = serde_json::from_str(&text)
                        .map_err(|e| Error::Protocol(e.to_string()))?;
                    // Anything without our id (e.g. a live query notification)
                    // is not the reply we're waiting on.
                    if response.get("id").and_then(|v| v.as_u64()) != Some(id) {
                        continue;
                    }
                    if let Some(err) = response.get("error") {
                        return Err(Error::Rpc {
                            code: err.get("code").and_then(|c| c.as_i64()).unwrap_or(0),
                            message: err
                                .get("message")
                                .and_then(|m| m.as_str())
                                .unwrap_or("unknown error")
                                .to_string(),
                        });
                    }
                    return Ok(response
                        .get("result")
                        .cloned()
                        .unwrap_or(serde_json::Value::Null));
                }
                Message::Ping(_) | Message::Pong(_) | Message::Binary(_) | Message::Frame(_) => {
                    continue
                }
                Message::Close(_) => return Err(Error::Closed),
            }
        }
    }
}

fn parse_query_result(entry: serde_json::Value) -> Result<QueryResult, Error> {
    let status = entry
        .get("status")
        .and_then(|s| s.as_str())
        .ok_or_else(|| Error::Protocol("statement result is missing a status".to_string()))?;
    let time = entry
        .get("time")
        .and_then(|t| t.as_str())
        .unwrap_or_default()
        .to_string();

    let result = match status {
        "OK" => Ok(Value::from_json(
            entry.get("result").cloned().unwrap_or(serde_json::Value::Null),
        )),
        _ => Err(entry
            .get("result")
            .and_then(|r| r.as_str())
            .unwrap_or("statement failed")
            .to_string()),
    };
    Ok(QueryResult::new(time, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_results_parse_ok_and_err() {
        let ok = parse_query_result(serde_json::json!({
            "result": [{"id": "users:[1]"}],
            "status": "OK",
            "time": "81.3µs",
        }))
        .unwrap();
        assert!(ok.is_ok());

        let err = parse_query_result(serde_json::json!({
            "result": "There was a problem with the database",
            "status": "ERR",
            "time": "12µs",
        }))
        .unwrap();
        assert_eq!(err.err_message(), Some("There was a problem with the database"));
    }

    #[test]
    fn missing_status_is_a_protocol_error() {
        assert!(parse_query_result(serde_json::json!({"result": []})).is_err());
    }
}
