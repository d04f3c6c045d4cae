//! Field-level encryption for sensitive strings
//!
//! Wraps AES-256-GCM behind a [`FieldCipher`] that encrypts one string field
//! at a time (the payment method, in this crate). The cipher is constructed
//! once at startup with its key derived eagerly, then shared by reference
//! across request handlers; there is no lazy global state to synchronize.
//!
//! The wire form is `base64(nonce || ciphertext+tag)`. A fresh random nonce
//! is generated per call, so identical plaintexts encrypt to different
//! ciphertexts. GCM authentication makes any corruption or key mismatch a
//! detectable [`TrackerError::Decryption`] instead of garbled plaintext.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{TrackerError, TrackerResult};

use super::key_derivation::{derive_key, KeyDerivationParams};

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// Encrypts and decrypts individual string fields
pub struct FieldCipher {
    cipher: Aes256Gcm,
}

impl FieldCipher {
    /// Build a cipher from a passphrase and persisted derivation parameters
    ///
    /// Key derivation is the expensive step (Argon2id); do this once at
    /// startup and share the cipher by reference.
    pub fn new(passphrase: &str, params: &KeyDerivationParams) -> TrackerResult<Self> {
        let key = derive_key(passphrase, params)?;
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| TrackerError::Encryption(format!("Failed to create cipher: {}", e)))?;
        Ok(Self { cipher })
    }

    /// Encrypt a field value
    ///
    /// Empty input passes through unchanged: absent fields stay absent
    /// rather than turning into ciphertext noise.
    pub fn encrypt_field(&self, plaintext: &str) -> TrackerResult<String> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| TrackerError::Encryption(format!("Encryption failed: {}", e)))?;

        let mut combined = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        combined.extend_from_slice(&nonce_bytes);
        combined.extend_from_slice(&ciphertext);

        Ok(STANDARD.encode(combined))
    }

    /// Decrypt a field value previously produced by [`encrypt_field`]
    ///
    /// Empty input passes through unchanged. Any malformed, truncated, or
    /// wrong-key input fails with [`TrackerError::Decryption`].
    ///
    /// [`encrypt_field`]: FieldCipher::encrypt_field
    pub fn decrypt_field(&self, stored: &str) -> TrackerResult<String> {
        if stored.is_empty() {
            return Ok(String::new());
        }

        let combined = STANDARD
            .decode(stored)
            .map_err(|e| TrackerError::Decryption(format!("Invalid encoding: {}", e)))?;

        if combined.len() <= NONCE_SIZE {
            return Err(TrackerError::Decryption(format!(
                "Ciphertext too short: {} bytes",
                combined.len()
            )));
        }

        let (nonce_bytes, ciphertext) = combined.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self.cipher.decrypt(nonce, ciphertext).map_err(|_| {
            TrackerError::Decryption("Invalid key or corrupted ciphertext".to_string())
        })?;

        String::from_utf8(plaintext)
            .map_err(|e| TrackerError::Decryption(format!("Invalid UTF-8 in plaintext: {}", e)))
    }

    /// Encrypt an optional field, treating `None` and `""` as identity
    pub fn encrypt_opt(&self, value: Option<&str>) -> TrackerResult<Option<String>> {
        match value {
            Some(v) if !v.is_empty() => Ok(Some(self.encrypt_field(v)?)),
            other => Ok(other.map(String::from)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cipher(passphrase: &str) -> FieldCipher {
        let params = KeyDerivationParams {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
            ..KeyDerivationParams::new()
        };
        FieldCipher::new(passphrase, &params).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let cipher = test_cipher("test_passphrase");
        for plaintext in ["Visa **** 4242", "cash", "über-card 💳"] {
            let encrypted = cipher.encrypt_field(plaintext).unwrap();
            assert_ne!(encrypted, plaintext);
            assert_eq!(cipher.decrypt_field(&encrypted).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_empty_is_identity() {
        let cipher = test_cipher("test_passphrase");
        assert_eq!(cipher.encrypt_field("").unwrap(), "");
        assert_eq!(cipher.decrypt_field("").unwrap(), "");
    }

    #[test]
    fn test_option_helpers() {
        let cipher = test_cipher("test_passphrase");
        assert_eq!(cipher.encrypt_opt(None).unwrap(), None);
        assert_eq!(cipher.encrypt_opt(Some("")).unwrap(), Some(String::new()));

        let encrypted = cipher.encrypt_opt(Some("debit card")).unwrap().unwrap();
        assert_eq!(cipher.decrypt_field(&encrypted).unwrap(), "debit card");
    }

    #[test]
    fn test_nonce_randomization() {
        let cipher = test_cipher("test_passphrase");
        let a = cipher.encrypt_field("same plaintext").unwrap();
        let b = cipher.encrypt_field("same plaintext").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_corrupted_ciphertext_fails() {
        let cipher = test_cipher("test_passphrase");
        let encrypted = cipher.encrypt_field("Visa **** 4242").unwrap();

        // Flip one byte of the decoded payload and re-encode
        let mut raw = STANDARD.decode(&encrypted).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0xFF;
        let tampered = STANDARD.encode(raw);

        let result = cipher.decrypt_field(&tampered);
        assert!(matches!(result, Err(TrackerError::Decryption(_))));
    }

    #[test]
    fn test_wrong_key_fails() {
        let cipher1 = test_cipher("passphrase one");
        let cipher2 = test_cipher("passphrase two");

        let encrypted = cipher1.encrypt_field("Mastercard").unwrap();
        let result = cipher2.decrypt_field(&encrypted);
        assert!(matches!(result, Err(TrackerError::Decryption(_))));
    }

    #[test]
    fn test_malformed_inputs_fail() {
        let cipher = test_cipher("test_passphrase");

        // Not base64 at all
        assert!(matches!(
            cipher.decrypt_field("%%% not base64 %%%"),
            Err(TrackerError::Decryption(_))
        ));

        // Valid base64 but shorter than a nonce
        let short = STANDARD.encode([0u8; 4]);
        assert!(matches!(
            cipher.decrypt_field(&short),
            Err(TrackerError::Decryption(_))
        ));
    }
}
