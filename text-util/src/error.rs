use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextUtilError {
    #[error("Datasource configuration error: {0}")]
    Config(String),

    #[error("Invalid SQL identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No row matches document id {0}")]
    MissingDocument(String),
}

pub type Result<T> = std::result::Result<T, TextUtilError>;
