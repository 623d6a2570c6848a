use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the XDG/HOME config base.
const APP_DIR: &str = "appstore";

/// Return candidate locations for a config file, HOME first, then XDG.
fn config_candidates(file: &str) -> Vec<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join(file));
    }
    if let Some(xdg) = xdg_config.as_deref()
        && !xdg.trim().is_empty()
    {
        candidates.push(Path::new(xdg).join(APP_DIR).join(file));
    }
    candidates
}

/// Determine the configuration file path for the THEME, if one exists.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    config_candidates("theme.conf")
        .into_iter()
        .find(|p| p.is_file())
}

/// Determine the configuration file path for SETTINGS, if one exists.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    config_candidates("settings.conf")
        .into_iter()
        .find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/appstore`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// XDG config directory for the app store (ensured to exist)
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/appstore/logs" (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    /// What: Config, logs and settings paths resolve under a temporary HOME
    ///
    /// - Input: HOME pointed at a fresh temp dir containing `settings.conf`
    /// - Output: Directories end with the expected names; settings file is found
    #[test]
    fn paths_config_logs_and_settings_under_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let orig_xdg = std::env::var_os("XDG_CONFIG_HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe {
            std::env::set_var("HOME", base.path());
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert!(cfg.ends_with("appstore"));
        assert!(logs.ends_with("logs"));
        assert!(super::resolve_settings_config_path().is_none());
        std::fs::write(cfg.join("settings.conf"), "show_featured = false\n").expect("write");
        assert_eq!(
            super::resolve_settings_config_path(),
            Some(cfg.join("settings.conf"))
        );
        unsafe {
            match orig_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
            if let Some(v) = orig_xdg {
                std::env::set_var("XDG_CONFIG_HOME", v);
            }
        }
    }
}
