use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("empty file")]
    EmptyDocument,

    #[error("missing top-level {field}")]
    MissingField { field: String },

    #[error("{field} must be a list")]
    TypeMismatch { field: String },

    #[error("no {field} defined")]
    EmptyCollection { field: String },

    #[error("service missing required field: {field}")]
    MissingServiceField { field: String },

    #[error("{reason}")]
    ValueMismatch {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BlueprintError>;
