//! Non-interactive listings printed by `--list`, `--featured` and `--people`.

use std::io::Write;

use crate::catalog::{AppRecord, Catalog};
use crate::logic::{FilterState, distinct_people, featured, filter, result_count_label};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Print the records matching `state`.
///
/// Inputs:
/// - `out`: Destination writer (stdout in the binary)
/// - `catalog`: Loaded catalog
/// - `state`: Filter built from the CLI flags
/// - `json`: Emit a JSON array instead of text lines
///
/// Details:
/// - Text mode prints one line per app followed by the count label.
pub fn print_listing<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    state: &FilterState,
    json: bool,
) -> Result<()> {
    let apps = filter(catalog.apps(), state);
    tracing::info!(results = apps.len(), active = state.is_active(), "cli listing");
    write_apps(out, catalog, &apps, json)?;
    if !json {
        writeln!(out, "{}", result_count_label(apps.len()))?;
    }
    Ok(())
}

/// Print the featured records.
pub fn print_featured<W: Write>(out: &mut W, catalog: &Catalog, json: bool) -> Result<()> {
    let apps = featured(catalog.apps());
    write_apps(out, catalog, &apps, json)
}

/// Print the person list, `Everyone` first.
pub fn print_people<W: Write>(out: &mut W, catalog: &Catalog, json: bool) -> Result<()> {
    let people = distinct_people(catalog.apps());
    if json {
        serde_json::to_writer_pretty(&mut *out, &people)?;
        writeln!(out)?;
    } else {
        for p in &people {
            writeln!(out, "{p}")?;
        }
    }
    Ok(())
}

fn write_apps<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    apps: &[&AppRecord],
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, apps)?;
        writeln!(out)?;
        return Ok(());
    }
    for a in apps {
        let icon = catalog.category_icon(&a.category);
        let mut line = format!("{} {} [{}] {icon} {}", a.icon, a.name, a.platform, a.category);
        if !a.team.is_empty() {
            line.push_str(&format!(" ({})", a.team));
        }
        if a.featured {
            line.push_str(" *");
        }
        writeln!(out, "{line}")?;
        if !a.description.is_empty() {
            writeln!(out, "    {}", a.description)?;
        }
    }
    Ok(())
}
