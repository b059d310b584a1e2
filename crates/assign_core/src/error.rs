use std::fmt;

#[derive(Debug)]
pub enum EnhanceError {
    InvalidTeamRecord(String),
    InvalidManagerPool(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for EnhanceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EnhanceError::InvalidTeamRecord(msg) => {
                write!(f, "Invalid team record: {}", msg)
            }
            EnhanceError::InvalidManagerPool(msg) => {
                write!(f, "Invalid manager pool: {}", msg)
            }
            EnhanceError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            EnhanceError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for EnhanceError {}

impl From<serde_json::Error> for EnhanceError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            EnhanceError::DeserializationError(err.to_string())
        } else {
            EnhanceError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
