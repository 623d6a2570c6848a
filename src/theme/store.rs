use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::parsing::{canonical_for_key, normalize_key, parse_color_value};
use super::paths::resolve_theme_config_path;
use super::types::Theme;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Process-wide palette, loaded on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Apply `key = color` overrides from theme.conf content onto `theme`.
///
/// Output:
/// - Number of keys applied.
///
/// Details:
/// - Unknown keys and unparsable colors are logged and skipped.
pub(crate) fn apply_theme_overrides(content: &str, theme: &mut Theme) -> usize {
    let mut applied = 0;
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = parse_key_value(line) else {
            continue;
        };
        let Some(canon) = canonical_for_key(&normalize_key(raw_key)) else {
            tracing::warn!(key = %raw_key, "unknown theme key");
            continue;
        };
        let Some(color) = parse_color_value(raw_val) else {
            tracing::warn!(key = %raw_key, value = %raw_val, "invalid theme color");
            continue;
        };
        let slot = match canon {
            "base" => &mut theme.base,
            "mantle" => &mut theme.mantle,
            "crust" => &mut theme.crust,
            "surface1" => &mut theme.surface1,
            "surface2" => &mut theme.surface2,
            "overlay1" => &mut theme.overlay1,
            "overlay2" => &mut theme.overlay2,
            "text" => &mut theme.text,
            "subtext0" => &mut theme.subtext0,
            "subtext1" => &mut theme.subtext1,
            "sapphire" => &mut theme.sapphire,
            "mauve" => &mut theme.mauve,
            "green" => &mut theme.green,
            "yellow" => &mut theme.yellow,
            "red" => &mut theme.red,
            "lavender" => &mut theme.lavender,
            "peach" => &mut theme.peach,
            _ => &mut theme.blue,
        };
        *slot = color;
        applied += 1;
    }
    applied
}

fn load_theme_from_file(path: &Path) -> Theme {
    let mut theme = Theme::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            let applied = apply_theme_overrides(&content, &mut theme);
            tracing::info!(path = %path.display(), applied, "loaded theme configuration");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read theme; using default palette");
        }
    }
    theme
}

/// Return the application's theme palette.
///
/// The built-in palette is Catppuccin Mocha; `theme.conf` in the config
/// directory may override individual colors (`key = #RRGGBB` or `R,G,B`).
#[must_use]
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| {
        resolve_theme_config_path().map_or_else(Theme::default, |p| load_theme_from_file(&p))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    /// What: Overrides apply to canonical and alias keys, bad lines are skipped
    fn theme_overrides_apply_aliases_and_skip_invalid() {
        let mut th = Theme::default();
        let applied = apply_theme_overrides(
            "background_base = #000000\nbadge_blue = 1,2,3\nnope = #ffffff\ntext = zzz\n",
            &mut th,
        );
        assert_eq!(applied, 2);
        assert_eq!(th.base, Color::Rgb(0, 0, 0));
        assert_eq!(th.blue, Color::Rgb(1, 2, 3));
        assert_eq!(th.text, Theme::default().text);
    }
}
