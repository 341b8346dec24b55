use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackermonError {
    #[error("{0}")]
    Validation(String),

    #[error("This show already exists in Trackermon")]
    DuplicateShow,

    #[error("Show not found: {0}")]
    ShowNotFound(String),

    #[error("The show index provided is invalid")]
    InvalidIndex(usize),

    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,

    #[error("Data file format error: {0}")]
    DataFormat(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid command format!\n{usage}")]
    ArgumentFormat { usage: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrackermonError>;
