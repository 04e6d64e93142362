//! Path utilities: expand `~`, turn user-supplied output paths into absolute ones.

use crate::errors::AppResult;
use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `~/x.csv` → `/home/me/x.csv`, `out/x.csv` → `<cwd>/out/x.csv`.
pub fn resolve_output(path: &str) -> AppResult<String> {
    let p = expand_tilde(path.trim());
    let abs = if p.is_absolute() {
        p
    } else {
        env::current_dir()?.join(p)
    };
    Ok(abs.to_string_lossy().to_string())
}
