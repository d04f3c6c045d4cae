//! User settings for spendtrack
//!
//! Persists the current-user identity and the key-derivation parameters the
//! field cipher needs to reproduce its key across restarts. The encryption
//! passphrase itself never lands on disk: it is resolved from the
//! environment at startup.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::auth::IdentityResolver;
use crate::crypto::{KeyDerivationParams, SecureString};
use crate::error::{TrackerError, TrackerResult};
use crate::models::UserIdentity;
use crate::store::write_json_atomic;

/// Environment variable supplying the field-encryption passphrase
pub const PASSPHRASE_ENV: &str = "SPENDTRACK_ENCRYPTION_KEY";

/// User settings for spendtrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// The identity expenses are recorded against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserIdentity>,

    /// Key derivation parameters (salt, Argon2 costs); created at init so
    /// ciphertexts stay decryptable across restarts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_params: Option<KeyDerivationParams>,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            user: None,
            key_params: None,
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk, atomically like the data stores do
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Get the key derivation parameters, failing if init has not run
    pub fn require_key_params(&self) -> TrackerResult<&KeyDerivationParams> {
        self.key_params.as_ref().ok_or_else(|| {
            TrackerError::Config("No encryption parameters; run 'spendtrack init' first".into())
        })
    }
}

impl IdentityResolver for Settings {
    fn current_user(&self) -> TrackerResult<UserIdentity> {
        self.user.clone().ok_or_else(|| {
            TrackerError::Config("No user configured; run 'spendtrack init' first".into())
        })
    }
}

/// Resolve the encryption passphrase from the environment
///
/// Absence is a startup configuration error, never a per-request one.
pub fn passphrase_from_env() -> TrackerResult<SecureString> {
    match std::env::var(PASSPHRASE_ENV) {
        Ok(value) if !value.is_empty() => Ok(SecureString::from(value)),
        _ => Err(TrackerError::Config(format!(
            "{} is not set; the encryption passphrase must be supplied by the environment",
            PASSPHRASE_ENV
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.user.is_none());
        assert!(settings.key_params.is_none());
        assert!(!settings.setup_completed);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(!settings.setup_completed);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            user: Some(UserIdentity::new("alex")),
            key_params: Some(KeyDerivationParams::new()),
            setup_completed: true,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.user, settings.user);
        assert!(loaded.setup_completed);
        assert_eq!(
            loaded.key_params.unwrap().salt,
            settings.key_params.unwrap().salt
        );
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::default();
        settings.save(&paths).unwrap();
        settings.save(&paths).unwrap();

        assert!(paths.settings_file().exists());
        assert!(!paths.settings_file().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_identity_resolver() {
        let mut settings = Settings::default();
        assert!(settings.current_user().is_err());

        let user = UserIdentity::new("alex");
        settings.user = Some(user.clone());
        assert_eq!(settings.current_user().unwrap(), user);
    }

    #[test]
    fn test_require_key_params() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.require_key_params(),
            Err(TrackerError::Config(_))
        ));

        settings.key_params = Some(KeyDerivationParams::new());
        assert!(settings.require_key_params().is_ok());
    }
}
