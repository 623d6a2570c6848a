//! Person selector options.

use std::collections::BTreeSet;

use crate::catalog::{AppRecord, EVERYONE};

/// What: Collect every person an app was designed for.
///
/// Inputs:
/// - `apps`: Records to scan
///
/// Output:
/// - `"Everyone"` first, then the remaining distinct names sorted ascending.
///
/// Details:
/// - The sentinel is always present, even for an empty catalog, because the
///   person selector offers it unconditionally.
#[must_use]
pub fn distinct_people<'a, I>(apps: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a AppRecord>,
{
    let names: BTreeSet<&str> = apps
        .into_iter()
        .flat_map(|app| app.designed_for.iter().map(String::as_str))
        .filter(|p| *p != EVERYONE)
        .collect();
    std::iter::once(EVERYONE)
        .chain(names)
        .map(ToString::to_string)
        .collect()
}
