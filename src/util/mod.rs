//! Small utility helpers: config line parsing, dates, and launching links.

pub mod config;

use std::process::Command;

use chrono::NaiveDate;

/// What: Today's date in the local time zone.
///
/// Output:
/// - Calendar date used as `now` for the recent-update badge.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// What: Check whether the runtime should skip real terminal and process side effects.
///
/// Output:
/// - `true` when `APPSTORE_TEST_HEADLESS=1`.
#[must_use]
pub fn is_headless() -> bool {
    std::env::var("APPSTORE_TEST_HEADLESS").ok().as_deref() == Some("1")
}

/// What: Format a date the way the store shows it (e.g., "Nov 19, 2025").
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// What: Open a URL in the default browser (cross-platform).
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; spawns a background process to open the URL.
///
/// Details:
/// - On Windows, uses `cmd /c start`.
/// - On Unix-like systems (Linux/macOS), uses `xdg-open` (Linux) or `open` (macOS).
/// - Spawns the command in a background thread and logs failures.
/// - During tests and headless runs this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
pub fn open_url(url: &str) {
    if is_headless() {
        tracing::debug!(url, "headless mode; not opening url");
        return;
    }
    #[cfg(not(test))]
    {
        use std::process::Stdio;

        let url = url.to_string();
        std::thread::spawn(move || {
            let spawned = launcher_command(&url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .or_else(|_| {
                    // macOS fallback when xdg-open is missing
                    Command::new("open")
                        .arg(&url)
                        .stdin(Stdio::null())
                        .stdout(Stdio::null())
                        .stderr(Stdio::null())
                        .spawn()
                });
            match spawned {
                Ok(_) => tracing::info!(url = %url, "opened url"),
                Err(e) => tracing::warn!(url = %url, error = %e, "failed to open url"),
            }
        });
    }
}

/// Platform launcher for a URL.
#[cfg_attr(test, allow(dead_code))]
fn launcher_command(url: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/c", "start", "", url]);
        cmd
    }
    #[cfg(not(target_os = "windows"))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}
