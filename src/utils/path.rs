//! Path utilities: expand ~ in user-provided directories.

use std::path::PathBuf;

/// `~` and `~/...` resolve against the home directory; anything else is
/// taken as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path {
        "~" => "",
        p if p.starts_with("~/") => &p[2..],
        p => return PathBuf::from(p),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
