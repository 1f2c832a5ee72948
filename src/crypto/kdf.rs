use rand::RngCore;
use secrecy::{ExposeSecretMut, SecretBox};

use crate::error::{CasegoError, Result};

pub const KEY_LENGTH: usize = 32;

/// Derived symmetric key, zeroized on drop.
pub type DerivedKey = SecretBox<[u8; KEY_LENGTH]>;

/// scrypt cost parameters.
///
/// Tokens do not record these, so changing them orphans every existing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

impl KdfParams {
    /// N = 16384, r = 8, p = 1 (about 16 MiB of working memory).
    pub const V1: KdfParams = KdfParams {
        log_n: 14,
        r: 8,
        p: 1,
    };
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::V1
    }
}

pub fn generate_salt<const N: usize>() -> [u8; N] {
    let mut salt = [0u8; N];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<DerivedKey> {
    derive_key_with(password, salt, &KdfParams::V1)
}

pub fn derive_key_with(password: &[u8], salt: &[u8], params: &KdfParams) -> Result<DerivedKey> {
    let scrypt_params = scrypt::Params::new(params.log_n, params.r, params.p, KEY_LENGTH)
        .map_err(|e| CasegoError::Derivation(e.to_string()))?;

    let mut key = SecretBox::new(Box::new([0u8; KEY_LENGTH]));
    scrypt::scrypt(password, salt, &scrypt_params, key.expose_secret_mut())
        .map_err(|e| CasegoError::Derivation(e.to_string()))?;

    Ok(key)
}
