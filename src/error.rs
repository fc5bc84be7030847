use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomqlError {
    /// A dimension fell outside the open interval allowed for the operation.
    #[error("{0}")]
    Validation(String),

    /// An entity lookup came back empty.
    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoomqlError {
    /// Machine-readable code reported in the GraphQL `extensions` object.
    pub fn code(&self) -> &'static str {
        match self {
            RoomqlError::Validation(_) => "VALIDATION_ERROR",
            RoomqlError::NotFound(_) => "NOT_FOUND",
            RoomqlError::Storage(_) => "STORAGE_ERROR",
            RoomqlError::Config(_)
            | RoomqlError::Io(_)
            | RoomqlError::Yaml(_)
            | RoomqlError::Json(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for RoomqlError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub type Result<T> = std::result::Result<T, RoomqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages_are_verbatim() {
        let err = RoomqlError::NotFound("Room not found".to_string());
        assert_eq!(err.to_string(), "Room not found");

        let err = RoomqlError::Validation("Dimensions have to be less than 100".to_string());
        assert_eq!(err.to_string(), "Dimensions have to be less than 100");
    }

    #[test]
    fn test_extend_sets_code() {
        let err = RoomqlError::Validation("too big".to_string()).extend();
        assert_eq!(err.message, "too big");
        let ext = err.extensions.expect("extensions set");
        assert_eq!(
            ext.get("code"),
            Some(&async_graphql::Value::from("VALIDATION_ERROR"))
        );
    }

    #[test]
    fn test_storage_error_is_prefixed() {
        let err = RoomqlError::Storage("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Storage error: lock poisoned");
        assert_eq!(err.code(), "STORAGE_ERROR");
    }
}
