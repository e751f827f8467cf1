//! End-to-end coverage of the session against a stub websocket rpc endpoint.

use futures_util::{SinkExt, StreamExt};
use surreal_client::{Credentials, Session, Vars};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

/// Serves a single websocket connection, answering each rpc by method.
async fn serve_stub(listener: TcpListener) {
    let (stream, _) = listener.accept().await.unwrap();
    let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();

    while let Some(Ok(message)) = ws.next().await {
        let text = match message {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };
        let frame: serde_json::Value = serde_json::from_str(&text).unwrap();
        let id = frame["id"].clone();
        let method = frame["method"].as_str().unwrap();

        let reply = match method {
            "signin" | "use" => serde_json::json!({ "id": id, "result": null }),
            "query" => {
                let sql = frame["params"][0].as_str().unwrap();
                if sql.contains("boom") {
                    serde_json::json!({
                        "id": id,
                        "result": [
                            { "result": "table does not exist", "status": "ERR", "time": "2µs" },
                        ],
                    })
                } else {
                    serde_json::json!({
                        "id": id,
                        "result": [
                            {
                                "result": [ { "id": "users:[1]", "name": "alice" } ],
                                "status": "OK",
                                "time": "81µs",
                            },
                        ],
                    })
                }
            }
            other => serde_json::json!({
                "id": id,
                "error": { "code": -32601, "message": format!("unknown method {other}") },
            }),
        };
        ws.send(Message::Text(reply.to_string())).await.unwrap();
    }
}

#[tokio::test]
async fn session_signs_in_and_queries() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve_stub(listener));

    let mut session = Session::connect(&format!("ws://{addr}/rpc")).await.unwrap();
    session
        .signin(&Credentials::Root {
            username: "root".to_string(),
            password: "root".to_string(),
        })
        .await
        .unwrap();
    session.use_ns_db("fivetran", "demo").await.unwrap();

    let results = session
        .query("SELECT * FROM users", Vars::new())
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    let rows = results.into_iter().next().unwrap().ok().unwrap();
    let rows = rows.into_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].as_object().unwrap().get("name").unwrap().as_str(),
        Some("alice")
    );

    let failed = session.query("SELECT * FROM boom", Vars::new()).await.unwrap();
    assert!(failed[0].err_message().unwrap().contains("does not exist"));

    session.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn connect_rejects_non_websocket_urls() {
    assert!(Session::connect("http://localhost:8000").await.is_err());
    assert!(Session::connect("not a url").await.is_err());
}
