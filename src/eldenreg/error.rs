use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The user list could not be written back. Never swallowed: a caller
    /// seeing this must not report a successful registration.
    #[error("Failed to save user data: {0}")]
    PersistenceWrite(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RegistryError {
    pub fn is_persistence_write(&self) -> bool {
        matches!(self, RegistryError::PersistenceWrite(_))
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
