//! Paths inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which normally maps to the
//! directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Directory holding the plugin's trace file.
///
/// ```
/// use moviebrowser::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/moviebrowser")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("moviebrowser")
}

/// Rewrites a leading `~` to the sandbox host root.
///
/// ```
/// use moviebrowser::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
