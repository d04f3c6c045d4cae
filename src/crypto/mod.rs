//! Cryptographic functions for spendtrack
//!
//! Provides AES-256-GCM field encryption with Argon2id key derivation for
//! the sensitive payment-method field on expenses.

pub mod field_cipher;
pub mod key_derivation;
pub mod secure_memory;

pub use field_cipher::FieldCipher;
pub use key_derivation::{derive_key, DerivedKey, KeyDerivationParams};
pub use secure_memory::SecureString;
