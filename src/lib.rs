#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod crypto;
pub mod error;
pub mod telemetry;
pub mod token;

pub use crate::core::offload::{decrypt_async, encrypt_async};
pub use crate::core::pipeline::{
    decrypt, decrypt_to_string, decrypt_token, decrypt_with_aad, encrypt, encrypt_with_aad,
};
pub use crate::error::{CasegoError, FormatError, Result};
pub use crate::token::Token;
