//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::ALL;
use crate::logic::FilterState;

/// appstore - Browse an internal app catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "appstore")]
#[command(version)]
#[command(about = "Browse, search and filter an internal app catalog", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Load the catalog from a JSON or YAML file instead of the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Search text matched against app names and descriptions
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only apps in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only apps on this platform
    #[arg(long)]
    pub platform: Option<String>,

    /// Only apps owned by this team
    #[arg(long)]
    pub team: Option<String>,

    /// Only apps designed for this person (apps for Everyone always match)
    #[arg(long)]
    pub person: Option<String>,

    /// List featured apps and exit
    #[arg(long)]
    pub featured: bool,

    /// Print the people apps were designed for and exit
    #[arg(long)]
    pub people: bool,

    /// Print matching apps and exit instead of opening the TUI
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Print listings as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// What: Build the initial filter from the selector and query flags.
    ///
    /// Output:
    /// - `FilterState` with unspecified fields left unrestricted.
    #[must_use]
    pub fn filter_state(&self) -> FilterState {
        let pick = |v: Option<&str>| v.unwrap_or(ALL).to_string();
        FilterState {
            query: self.query.clone().unwrap_or_default(),
            category: pick(self.category.as_deref()),
            platform: pick(self.platform.as_deref()),
            team: pick(self.team.as_deref()),
            person: pick(self.person.as_deref()),
        }
    }

    /// What: Decide whether this run prints to stdout instead of opening the TUI.
    ///
    /// Details:
    /// - `--list`, `--json`, `--featured` and `--people` print.
    /// - Filter flags alone open the TUI with those filters pre-applied.
    #[must_use]
    pub const fn wants_listing(&self) -> bool {
        self.list || self.json || self.featured || self.people
    }
}

/// What: Run the non-interactive modes selected by `args`.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `catalog`: Loaded catalog
///
/// Output:
/// - `Ok(true)` when a listing was printed and the TUI should not start.
///
/// Details:
/// - `--people` wins over `--featured`, which wins over the filtered listing.
pub fn process_args(
    args: &Args,
    catalog: &crate::catalog::Catalog,
) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    use crate::args::list;

    if !args.wants_listing() {
        return Ok(false);
    }
    let mut out = std::io::stdout().lock();
    if args.people {
        list::print_people(&mut out, catalog, args.json)?;
    } else if args.featured {
        list::print_featured(&mut out, catalog, args.json)?;
    } else {
        list::print_listing(&mut out, catalog, &args.filter_state(), args.json)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Filter flags build the filter without forcing listing mode
    fn args_filter_flags_build_state() {
        let args = Args::parse_from(["appstore", "--person", "Chris", "-q", "csv"]);
        assert!(!args.wants_listing());
        assert!(Args::parse_from(["appstore", "-l", "--team", "Ops"]).wants_listing());
        let state = args.filter_state();
        assert_eq!(state.person, "Chris");
        assert_eq!(state.query, "csv");
        assert_eq!(state.category, "all");
        assert_eq!(state.team, "all");
    }

    #[test]
    /// What: Bare invocation opens the TUI with no filters
    fn args_default_opens_tui() {
        let args = Args::parse_from(["appstore"]);
        assert!(!args.wants_listing());
        assert!(!args.filter_state().is_active());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    /// What: Catalog path and output switches parse
    fn args_catalog_and_json() {
        let args = Args::parse_from(["appstore", "--catalog", "apps.yaml", "--json", "-v"]);
        assert_eq!(args.catalog, Some(PathBuf::from("apps.yaml")));
        assert!(args.json);
        assert!(args.verbose);
        assert!(args.wants_listing());
    }
}
