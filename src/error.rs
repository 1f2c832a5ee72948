use thiserror::Error;

/// Reasons a string is not recognizable as a token.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("missing prefix")]
    MissingPrefix,

    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("payload too short: {len} bytes")]
    PayloadTooShort { len: usize },
}

#[derive(Debug, Error)]
pub enum CasegoError {
    #[error("Invalid token: {0}")]
    Format(#[from] FormatError),

    /// Wrong password and tampered data are reported identically.
    #[error("Authentication failed: wrong password or corrupted token")]
    Authentication,

    #[error("KDF error: {0}")]
    Derivation(String),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Plaintext must not be empty")]
    EmptyPlaintext,

    #[error("Decrypted data is not valid UTF-8")]
    InvalidUtf8,

    #[error("Worker task failed: {0}")]
    Offload(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl CasegoError {
    pub fn is_format(&self) -> bool {
        matches!(self, CasegoError::Format(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, CasegoError::Authentication)
    }
}

pub type Result<T> = std::result::Result<T, CasegoError>;
