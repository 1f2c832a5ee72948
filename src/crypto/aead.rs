use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce, Tag};
use rand::RngCore;
use secrecy::ExposeSecret;
use zeroize::Zeroizing;

use crate::crypto::kdf::DerivedKey;
use crate::error::{CasegoError, Result};

pub const NONCE_LENGTH: usize = 12;
pub const TAG_LENGTH: usize = 16;

pub fn generate_nonce() -> [u8; NONCE_LENGTH] {
    let mut nonce = [0u8; NONCE_LENGTH];
    rand::thread_rng().fill_bytes(&mut nonce);
    nonce
}

/// Ciphertext with its detached authentication tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LENGTH],
}

pub fn encrypt(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LENGTH],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<Sealed> {
    let cipher = Aes256Gcm::new(key.expose_secret().into());

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(nonce), aad, &mut buffer)
        .map_err(|e| CasegoError::Encryption(e.to_string()))?;

    let mut tag_bytes = [0u8; TAG_LENGTH];
    tag_bytes.copy_from_slice(&tag);

    Ok(Sealed {
        ciphertext: buffer,
        tag: tag_bytes,
    })
}

/// Verifies the tag and decrypts. On failure no plaintext is produced.
pub fn decrypt(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LENGTH],
    ciphertext: &[u8],
    tag: &[u8; TAG_LENGTH],
    aad: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.expose_secret().into());

    let mut buffer = Zeroizing::new(ciphertext.to_vec());
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(nonce),
            aad,
            &mut buffer,
            Tag::from_slice(tag),
        )
        .map_err(|_| CasegoError::Authentication)?;

    Ok(std::mem::take(&mut *buffer))
}
