//! At-rest protection for the server password.
//!
//! The password is sealed with AES-256-GCM under a key derived from the
//! username, so the stored config can be read back without asking the user
//! for a master passphrase. The stored value is
//! `base64(nonce || ciphertext || tag)` with a 12-byte nonce and the standard
//! padded base64 alphabet. Changing the salt, digest or layout breaks every
//! config file written so far.

use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce, aead::Aead};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

const KEY_SALT: &str = "subcli-salt-v1";
const NONCE_LEN: usize = 12;

fn cipher_for(username: &str) -> Aes256Gcm {
    let digest = Sha256::digest(format!("{username}{KEY_SALT}").as_bytes());
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(digest.as_slice()))
}

/// Encrypts `password` for storage in the config file.
///
/// A fresh random nonce is drawn for every call, so encrypting the same
/// password twice yields two different strings.
pub fn encrypt_password(password: &str, username: &str) -> Result<String> {
    let cipher = cipher_for(username);

    let mut nonce = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce);

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), password.as_bytes())
        .map_err(|_| Error::Encryption)?;

    let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&sealed);
    Ok(STANDARD.encode(out))
}

/// Recovers the plaintext password written by [`encrypt_password`].
///
/// # Errors
///
/// Returns [`Error::Decryption`] if the input is not valid base64, is shorter
/// than a nonce, fails authentication (wrong username or tampered data) or
/// does not decrypt to UTF-8.
pub fn decrypt_password(encoded: &str, username: &str) -> Result<String> {
    let raw = STANDARD
        .decode(encoded)
        .map_err(|e| Error::Decryption(e.to_string()))?;

    if raw.len() < NONCE_LEN {
        return Err(Error::Decryption("ciphertext too short".to_string()));
    }

    let (nonce, sealed) = raw.split_at(NONCE_LEN);
    let plain = cipher_for(username)
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| Error::Decryption("message authentication failed".to_string()))?;

    String::from_utf8(plain).map_err(|e| Error::Decryption(e.to_string()))
}
