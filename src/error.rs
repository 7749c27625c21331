use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug, Serialize, Deserialize, PartialEq, Clone)]
pub enum ClientError {
    #[error("Error creating Client: {0}")]
    CreateClient(String),

    #[error("Error sending query: {0}")]
    Request(String),

    #[error("Error decoding query result: {0}")]
    Decode(String),

    #[error("Server responded with status {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Error writing query result: {0}")]
    Write(String),
}
