use anyhow::{Context as _, Result};
use kube_prompt_types::Theme;
use std::path::PathBuf;
use tracing::debug;

pub const APP_NAME: &str = "kprompt";
pub const THEME_FILE: &str = "theme.json";

/// Theme file to use: an explicit path, else `$XDG_CONFIG_HOME/kprompt/theme.json` if present.
pub fn theme_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(shellexpand::tilde(path).to_string()));
    }
    let xdg_dir = xdg::BaseDirectories::with_prefix(APP_NAME).ok()?;
    xdg_dir.find_config_file(THEME_FILE)
}

pub fn load_theme(explicit: Option<&str>) -> Result<Theme> {
    match theme_path(explicit) {
        Some(path) => Theme::load_from_file(&path)
            .with_context(|| format!("failed to load theme {}", path.display())),
        None => {
            debug!("no theme file, using defaults");
            Ok(Theme::default())
        }
    }
}
