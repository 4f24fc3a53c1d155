//! `~` expansion for configured paths.

use std::path::PathBuf;

/// `~` and `~/rest` resolve against the home directory; anything else is
/// returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };
    if path == "~" {
        return home;
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}
