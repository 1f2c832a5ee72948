use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{FormatError, Result};
use crate::token::format::{
    CIPHERTEXT_OFFSET, HEADER_LENGTH, IV_LENGTH, IV_OFFSET, MIN_PAYLOAD_LENGTH, PREFIX,
    SALT_LENGTH, TAG_LENGTH, TAG_OFFSET,
};

/// A parsed token: `casego:` + base64(salt || iv || tag || ciphertext).
///
/// Segments are fixed-width except the trailing ciphertext; the layout carries
/// no length headers. Values are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    salt: [u8; SALT_LENGTH],
    iv: [u8; IV_LENGTH],
    tag: [u8; TAG_LENGTH],
    ciphertext: Vec<u8>,
}

impl Token {
    pub fn from_segments(
        salt: [u8; SALT_LENGTH],
        iv: [u8; IV_LENGTH],
        tag: [u8; TAG_LENGTH],
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            salt,
            iv,
            tag,
            ciphertext,
        }
    }

    pub fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }

    pub fn iv(&self) -> &[u8; IV_LENGTH] {
        &self.iv
    }

    pub fn tag(&self) -> &[u8; TAG_LENGTH] {
        &self.tag
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Raw payload bytes in wire order, before base64.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(HEADER_LENGTH + self.ciphertext.len());
        data.extend_from_slice(&self.salt);
        data.extend_from_slice(&self.iv);
        data.extend_from_slice(&self.tag);
        data.extend_from_slice(&self.ciphertext);
        data
    }

    /// Split a raw payload by fixed offsets.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_PAYLOAD_LENGTH {
            return Err(FormatError::PayloadTooShort { len: data.len() }.into());
        }

        Ok(Self {
            salt: segment(data, 0),
            iv: segment(data, IV_OFFSET),
            tag: segment(data, TAG_OFFSET),
            ciphertext: data[CIPHERTEXT_OFFSET..].to_vec(),
        })
    }

    /// Encode to the transport string. Never contains whitespace.
    pub fn encode(&self) -> String {
        let mut out = String::from(PREFIX);
        STANDARD.encode_string(self.to_bytes(), &mut out);
        out
    }

    pub fn decode(s: &str) -> Result<Self> {
        let payload = s.strip_prefix(PREFIX).ok_or(FormatError::MissingPrefix)?;
        let data = STANDARD.decode(payload).map_err(FormatError::from)?;
        Self::from_bytes(&data)
    }
}

fn segment<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[offset..offset + N]);
    out
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Token {
    type Err = crate::error::CasegoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
