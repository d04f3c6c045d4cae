//! CLI command handlers for spendtrack
//!
//! Each submodule owns one command area: a clap `Subcommand` enum plus a
//! `handle_*_command` function. The binary wires them to shared state
//! (paths, settings, store, cipher).

pub mod category;
pub mod expense;
pub mod init;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use init::handle_init;
pub use report::handle_report_command;

use crate::config::{passphrase_from_env, Settings, TrackerPaths};
use crate::crypto::{FieldCipher, SecureString};
use crate::error::TrackerResult;
use crate::store::JsonStore;

/// Open the JSON store under the configured data directory
pub fn open_store(paths: &TrackerPaths) -> TrackerResult<JsonStore> {
    JsonStore::open(paths.expenses_file(), paths.categories_file())
}

/// Build the field cipher from settings and the environment passphrase
///
/// Falls back to an interactive prompt when the environment variable is
/// unset and a terminal is attached; otherwise the missing variable stays a
/// configuration error.
pub fn build_cipher(settings: &Settings) -> TrackerResult<FieldCipher> {
    let params = settings.require_key_params()?;
    let passphrase = resolve_passphrase()?;
    FieldCipher::new(passphrase.as_str(), params)
}

fn resolve_passphrase() -> TrackerResult<SecureString> {
    match passphrase_from_env() {
        Ok(passphrase) => Ok(passphrase),
        Err(err) => match rpassword::prompt_password("Encryption passphrase: ") {
            Ok(entered) if !entered.is_empty() => Ok(SecureString::from(entered)),
            _ => Err(err),
        },
    }
}
