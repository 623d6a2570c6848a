use std::fs;
use std::path::PathBuf;

use crate::theme::parsing::{normalize_key, parse_bool, strip_inline_comment};
use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// What: Parse settings.conf content into `settings`.
///
/// Inputs:
/// - `content`: Content of the settings file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys are ignored; unparsable values keep the current value.
/// - `recent_update_days` must be non-negative.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = parse_key_value(line) else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(raw_val);
        match key.as_str() {
            "catalog_path" | "catalog" | "catalog_file" => {
                settings.catalog_path = if val.is_empty() {
                    None
                } else {
                    Some(expand_home(val))
                };
            }
            "recent_update_days" | "recent_days" => match val.parse::<i64>() {
                Ok(v) if v >= 0 => settings.recent_update_days = v,
                _ => tracing::warn!(value = %val, "ignoring invalid recent_update_days"),
            },
            "show_featured" | "featured_visible" => {
                if let Some(b) = parse_bool(val) {
                    settings.show_featured = b;
                }
            }
            "show_keybinds_footer" | "keybinds_visible" => {
                if let Some(b) = parse_bool(val) {
                    settings.show_keybinds_footer = b;
                }
            }
            _ => {}
        }
    }
}

/// Expand a leading `~/` using `$HOME`.
fn expand_home(val: &str) -> PathBuf {
    if let Some(rest) = val.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(val)
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when the file is
///   missing or unreadable.
#[must_use]
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let Some(path) = resolve_settings_config_path() else {
        tracing::debug!("no settings.conf found; using defaults");
        return out;
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::info!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Known keys are applied, comments and unknown keys skipped
    ///
    /// - Input: Settings text with comments, aliases and an unknown key
    /// - Output: Fields updated accordingly
    fn parse_settings_applies_known_keys() {
        let content = "\
# App store settings
catalog_path = /srv/apps.yaml   # shared catalog
recent-update-days = 30
show_featured = no
; legacy comment
keybinds_visible = off
mystery = 1
";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s.catalog_path, Some(PathBuf::from("/srv/apps.yaml")));
        assert_eq!(s.recent_update_days, 30);
        assert!(!s.show_featured);
        assert!(!s.show_keybinds_footer);
    }

    #[test]
    /// What: Invalid values keep defaults
    fn parse_settings_keeps_defaults_on_bad_values() {
        let mut s = Settings::default();
        parse_settings(
            "recent_update_days = -4\nshow_featured = sometimes\ncatalog_path =\n",
            &mut s,
        );
        assert_eq!(s, Settings::default());
    }
}
