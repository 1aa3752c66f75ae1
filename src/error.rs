use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Layout Error: key '{label}' has no hitbox")]
    MissingHitbox { label: char },

    #[error("Layout Error: hitbox of key '{label}' is missing field '{field}'")]
    MissingField { label: char, field: &'static str },

    #[error("Layout Error: hitbox of key '{label}' extends past the i32 coordinate range")]
    CoordinateOverflow { label: char },
}

pub type GridResult<T> = Result<T, GridError>;
