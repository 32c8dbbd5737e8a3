//! Path utilities for the Zellij sandbox environment.
//!
//! In the plugin sandbox the host filesystem is mounted under `/host`, which
//! usually resolves to the directory Zellij was started from (typically the
//! user's home).

use std::path::PathBuf;

/// Returns the data directory for Sommelier storage and traces.
///
/// Resolves to `/host/.local/share/zellij/sommelier` in the sandbox, which is
/// `~/.local/share/zellij/sommelier` on the host when Zellij starts from home.
///
/// # Examples
///
/// ```
/// use sommelier::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/sommelier");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("sommelier")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use sommelier::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/cellar.toml"), "/host/themes/cellar.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
