//! Async wrappers that keep scrypt off the async executor.
//!
//! The work runs on tokio's blocking pool. Dropping the returned future does
//! not cancel the derivation; it runs to completion and its result is discarded.

use tokio::task;

use crate::core::pipeline;
use crate::error::{CasegoError, Result};
use crate::token::Token;

pub async fn encrypt_async(plaintext: Vec<u8>, password: String) -> Result<Token> {
    task::spawn_blocking(move || pipeline::encrypt(&plaintext, &password))
        .await
        .map_err(|e| CasegoError::Offload(e.to_string()))?
}

pub async fn decrypt_async(token: String, password: String) -> Result<Vec<u8>> {
    task::spawn_blocking(move || pipeline::decrypt(&token, &password))
        .await
        .map_err(|e| CasegoError::Offload(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_async_roundtrip() {
        let token = encrypt_async(b"async payload".to_vec(), "pw".to_string())
            .await
            .unwrap();
        let plaintext = decrypt_async(token.encode(), "pw".to_string())
            .await
            .unwrap();
        assert_eq!(plaintext, b"async payload");
    }

    #[tokio::test]
    async fn test_async_wrong_password() {
        let token = encrypt_async(b"x".to_vec(), "right".to_string())
            .await
            .unwrap();
        let result = decrypt_async(token.encode(), "wrong".to_string()).await;
        assert!(matches!(result, Err(CasegoError::Authentication)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_calls_are_independent() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                tokio::spawn(async move {
                    let password = format!("pw-{i}");
                    let plaintext = format!("message {i}").into_bytes();
                    let token = encrypt_async(plaintext.clone(), password.clone()).await?;
                    let opened = decrypt_async(token.encode(), password).await?;
                    Ok::<_, CasegoError>((plaintext, opened))
                })
            })
            .collect();

        for handle in handles {
            let (plaintext, opened) = handle.await.unwrap().unwrap();
            assert_eq!(plaintext, opened);
        }
    }
}
