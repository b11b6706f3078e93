//! Default values for configuration options.

use std::path::PathBuf;

pub use crate::client::DEFAULT_API_URL as API_URL;

/// Default payment method identifier (bank cards).
pub const PAYMENT_METHOD: &str = "381";

/// Directory under the user config directory holding the config file.
pub const CONFIG_DIR_NAME: &str = "payop";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Fallback output for `init` when no user config directory exists.
pub const LOCAL_CONFIG_FILE: &str = "payop.toml";

/// Default config file location: `<config_dir>/payop/config.toml`.
///
/// Returns `None` on platforms without a user config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
