//! Password-based encryption and decryption of payloads into [`Token`]s.
//!
//! Each call generates its own salt and IV, derives a fresh key with scrypt and
//! drops it (zeroized) before returning. Calls share no state and may run in
//! parallel.

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::crypto::aead::{self, Sealed};
use crate::crypto::kdf;
use crate::error::{CasegoError, Result};
use crate::token::format::{IV_LENGTH, SALT_LENGTH};
use crate::token::Token;

/// Encrypt `plaintext` under `password`.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Token> {
    encrypt_with_aad(plaintext, password, &[])
}

/// Encrypt and bind `aad` into the authentication tag. The same `aad` must be
/// supplied to [`decrypt_with_aad`]; it is not stored in the token.
pub fn encrypt_with_aad(plaintext: &[u8], password: &str, aad: &[u8]) -> Result<Token> {
    let salt: [u8; SALT_LENGTH] = kdf::generate_salt();
    let iv = aead::generate_nonce();
    seal(plaintext, password.as_bytes(), aad, salt, iv)
}

pub(crate) fn seal(
    plaintext: &[u8],
    password: &[u8],
    aad: &[u8],
    salt: [u8; SALT_LENGTH],
    iv: [u8; IV_LENGTH],
) -> Result<Token> {
    if plaintext.is_empty() {
        return Err(CasegoError::EmptyPlaintext);
    }

    let key = kdf::derive_key(password, &salt)?;
    let Sealed { ciphertext, tag } = aead::encrypt(&key, &iv, plaintext, aad)?;
    debug!(
        ciphertext_len = ciphertext.len(),
        aad_len = aad.len(),
        "sealed token"
    );

    Ok(Token::from_segments(salt, iv, tag, ciphertext))
}

/// Decrypt a token string. Wrong password and tampering both yield
/// [`CasegoError::Authentication`].
pub fn decrypt(token: &str, password: &str) -> Result<Vec<u8>> {
    decrypt_with_aad(token, password, &[])
}

pub fn decrypt_with_aad(token: &str, password: &str, aad: &[u8]) -> Result<Vec<u8>> {
    let token = Token::decode(token)?;
    open(&token, password.as_bytes(), aad)
}

/// Decrypt an already parsed token.
pub fn decrypt_token(token: &Token, password: &str) -> Result<Vec<u8>> {
    open(token, password.as_bytes(), &[])
}

/// Decrypt and interpret the plaintext as UTF-8.
pub fn decrypt_to_string(token: &str, password: &str) -> Result<String> {
    let plaintext = decrypt(token, password)?;
    String::from_utf8(plaintext).map_err(|e| {
        drop(Zeroizing::new(e.into_bytes()));
        CasegoError::InvalidUtf8
    })
}

fn open(token: &Token, password: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    let key = kdf::derive_key(password, token.salt())?;
    let plaintext = aead::decrypt(&key, token.iv(), token.ciphertext(), token.tag(), aad)
        .inspect_err(|_| warn!("token failed authentication"))?;
    debug!(plaintext_len = plaintext.len(), "opened token");
    Ok(plaintext)
}
