#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bad endpoint url: '{0}'")]
    BadUrl(String),

    #[error("websocket transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("connection closed by the store")]
    Closed,

    #[error("malformed rpc response: {0}")]
    Protocol(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("query failed: {0}")]
    Query(String),
}
