//! Path utilities for the Zellij sandbox environment.
//!
//! This module provides functions for working with filesystem paths in the
//! Zellij plugin sandbox, where the host filesystem is mounted under `/host`.

use std::path::PathBuf;

/// Returns the data directory for Mealdeck storage.
///
/// The directory is located at `/host/.local/share/zellij/mealdeck` in the
/// Zellij sandbox. In Zellij's plugin environment, `/host` points to the cwd
/// of the last focused terminal, or the folder where Zellij was started if
/// that's not available.
///
/// This typically resolves to the user's home directory when Zellij is started
/// from a home directory terminal, making the actual path
/// `~/.local/share/zellij/mealdeck`. The JSON state file `mealdeck.json` and
/// the log file live within this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("mealdeck")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// In the Zellij sandbox environment, the host's home directory (`~`) maps to
/// `/host`. This function converts tilde-prefixed paths to their sandbox
/// equivalents; used for theme file paths given in plugin configuration.
///
/// # Examples
///
/// ```
/// use mealdeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/mine.toml"), "/host/themes/mine.toml");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host_mount() {
        assert_eq!(
            get_data_dir().to_str().unwrap(),
            "/host/.local/share/zellij/mealdeck"
        );
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~/x"), "/host/x");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
        assert_eq!(expand_tilde("relative/theme.toml"), "relative/theme.toml");
    }
}
