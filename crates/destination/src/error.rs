use crate::input::InputError;
use crate::types::ValueError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(#[from] surreal_client::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("invalid identifier {0:?}: names may only contain letters, digits and underscores")]
    InvalidIdentifier(String),

    #[error("table {0} was not found")]
    TableNotFound(String),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("data error: {0}")]
    Data(String),

    #[error("mode invariant violated: {0}")]
    ModeInvariant(String),

    #[error("operation is not implemented")]
    NotImplemented,
}
