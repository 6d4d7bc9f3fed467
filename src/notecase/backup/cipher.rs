//! Password based sealing of backup archives.
//!
//! Every call to [`encrypt`] draws a fresh random salt and IV, so the same
//! password never reuses a key/nonce pair.

use crate::error::{NotecaseError, Result};
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

pub const SALT_LEN: usize = 16;
pub const IV_LEN: usize = 12;
pub const TAG_LEN: usize = 16;
pub const KEY_LEN: usize = 32;
pub const PBKDF2_ITERATIONS: u32 = 120_000;

/// PBKDF2-HMAC-SHA256, 256-bit output.
pub fn derive_key(password: &[u8], salt: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Seals `plain` as `salt | iv | ciphertext+tag`.
pub fn encrypt(plain: &[u8], password: &str) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut iv);

    let key = derive_key(password.as_bytes(), &salt);
    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| NotecaseError::Encryption)?;
    let sealed = cipher
        .encrypt(Nonce::from_slice(&iv), plain)
        .map_err(|_| NotecaseError::Encryption)?;

    let mut out = Vec::with_capacity(SALT_LEN + IV_LEN + sealed.len());
    out.extend_from_slice(&salt);
    out.extend_from_slice(&iv);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Opens a blob produced by [`encrypt`].
///
/// A wrong password, tampering or truncation all fail with
/// [`NotecaseError::Decryption`]; no partial plaintext is ever returned.
pub fn decrypt(sealed: &[u8], password: &str) -> Result<Vec<u8>> {
    if sealed.len() < SALT_LEN + IV_LEN + TAG_LEN {
        return Err(NotecaseError::Decryption);
    }
    let (salt, rest) = sealed.split_at(SALT_LEN);
    let (iv, ciphertext) = rest.split_at(IV_LEN);

    let key = derive_key(password.as_bytes(), salt);
    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| NotecaseError::Decryption)?;
    cipher
        .decrypt(Nonce::from_slice(iv), ciphertext)
        .map_err(|_| NotecaseError::Decryption)
}
