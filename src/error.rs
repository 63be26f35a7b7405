use thiserror::Error;

#[derive(Error, Debug)]
pub enum BugforgeError {
    #[error("Invalid block reference: {0}")]
    InvalidBlock(String),

    #[error("Block '{kind}' has no slot named '{slot}'")]
    MissingSlot { kind: String, slot: String },

    #[error("Index {index} out of range for slot '{slot}' with {len} children")]
    IndexOutOfRange {
        slot: String,
        index: usize,
        len: usize,
    },

    #[error("Mutation error: {0}")]
    Mutation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BugforgeError>;
