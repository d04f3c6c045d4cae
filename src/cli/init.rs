//! Initialization command
//!
//! Creates the data directory, the user identity expenses are recorded
//! against, the key derivation parameters, and the default category set.

use crate::config::{Settings, TrackerPaths, PASSPHRASE_ENV};
use crate::crypto::KeyDerivationParams;
use crate::error::TrackerResult;
use crate::models::{default_categories, UserIdentity};
use crate::store::DataStore;

use super::open_store;

/// Handle `spendtrack init`
pub fn handle_init(
    paths: &TrackerPaths,
    settings: &mut Settings,
    username: Option<String>,
) -> TrackerResult<()> {
    if settings.setup_completed {
        println!("spendtrack is already initialized at {}", paths.base_dir().display());
        return Ok(());
    }

    paths.ensure_directories()?;

    let user = UserIdentity::new(username.unwrap_or_else(whoami));
    settings.user = Some(user.clone());
    settings.key_params = Some(KeyDerivationParams::new());

    let mut store = open_store(paths)?;
    if store.list_categories()?.is_empty() {
        for category in default_categories() {
            store.save_category(category)?;
        }
    }

    settings.setup_completed = true;
    settings.save(paths)?;

    println!("Initialized spendtrack for '{}'", user.username);
    println!("Data directory: {}", paths.base_dir().display());
    println!();
    println!("Set {} to your encryption passphrase before adding", PASSPHRASE_ENV);
    println!("expenses with a payment method.");

    Ok(())
}

fn whoami() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "default".to_string())
}
