use ratatui::style::Color;

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string potentially containing inline comments.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Accepts `#RRGGBB` hex and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    // Hex formats: #RRGGBB or RRGGBB
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    // Decimal triplet: R,G,B
    let parts: Vec<&str> = t.split(',').map(str::trim).collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.parse::<u8>().ok()?;
        let g = g.parse::<u8>().ok()?;
        let b = b.parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// What: Map a normalized theme key (lowercase, underscores) to the palette field name.
///
/// Output:
/// - `Some(&'static str)` containing the canonical key when recognized; `None` otherwise.
pub(crate) fn canonical_for_key(norm: &str) -> Option<&'static str> {
    match norm {
        "base" | "background" | "background_base" => Some("base"),
        "mantle" | "background_mantle" => Some("mantle"),
        "crust" | "background_crust" => Some("crust"),
        "surface1" | "surface_level1" => Some("surface1"),
        "surface2" | "surface_level2" => Some("surface2"),
        "overlay1" | "overlay_primary" => Some("overlay1"),
        "overlay2" | "overlay_secondary" => Some("overlay2"),
        "text" | "text_primary" => Some("text"),
        "subtext0" | "text_secondary" => Some("subtext0"),
        "subtext1" | "text_tertiary" => Some("subtext1"),
        "sapphire" | "accent_interactive" => Some("sapphire"),
        "mauve" | "accent_heading" | "badge_purple" => Some("mauve"),
        "green" | "semantic_success" | "badge_green" => Some("green"),
        "yellow" | "semantic_warning" | "badge_yellow" => Some("yellow"),
        "red" | "semantic_error" | "badge_red" => Some("red"),
        "lavender" | "accent_emphasis" => Some("lavender"),
        "peach" | "badge_orange" => Some("peach"),
        "blue" | "badge_blue" => Some("blue"),
        _ => None,
    }
}

/// What: Normalize a config key: lowercase, with `.`, `-` and spaces as `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Interpret common truthy spellings.
///
/// Output:
/// - `Some(true)` for true/1/yes/on, `Some(false)` for false/0/no/off, `None` otherwise.
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Remove trailing `// ...` or `# ...` comments from a value.
///
/// Details:
/// - A leading `#` is preserved so hex colors survive.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}
