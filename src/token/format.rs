use crate::crypto::aead::NONCE_LENGTH;

pub use crate::crypto::aead::TAG_LENGTH;

/// Literal tag that precedes the base64 payload of every token.
pub const PREFIX: &str = "casego:";

/// Length of the scrypt salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// Length of the AES-GCM IV in bytes.
pub const IV_LENGTH: usize = NONCE_LENGTH;

/// Bytes before the ciphertext: salt(16) + iv(12) + tag(16).
pub const HEADER_LENGTH: usize = SALT_LENGTH + IV_LENGTH + TAG_LENGTH;

/// Smallest decoded payload: the fixed segments plus at least 1 byte of ciphertext.
pub const MIN_PAYLOAD_LENGTH: usize = HEADER_LENGTH + 1;

pub const IV_OFFSET: usize = SALT_LENGTH;
pub const TAG_OFFSET: usize = IV_OFFSET + IV_LENGTH;
pub const CIPHERTEXT_OFFSET: usize = TAG_OFFSET + TAG_LENGTH;
