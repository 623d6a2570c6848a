//! Recently-updated badge rule.

use chrono::NaiveDate;

use crate::catalog::AppRecord;

/// Default window, in days, for the "recently updated" badge.
pub const RECENT_UPDATE_DAYS: i64 = 90;

/// What: Decide whether an app shows the "recently updated" badge.
///
/// Inputs:
/// - `app`: Record whose newest update is `updates[0]`
/// - `now`: Reference date (usually today)
///
/// Output:
/// - `true` iff the app has updates and the newest is at most 90 days old.
#[must_use]
pub fn has_recent_update(app: &AppRecord, now: NaiveDate) -> bool {
    has_update_within(app, now, RECENT_UPDATE_DAYS)
}

/// What: Same as [`has_recent_update`] with a configurable window.
///
/// Details:
/// - The bound is inclusive. Updates dated after `now` count as recent.
#[must_use]
pub fn has_update_within(app: &AppRecord, now: NaiveDate, days: i64) -> bool {
    app.updates
        .first()
        .is_some_and(|latest| (now - latest.date).num_days() <= days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AppUpdate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    fn rec_with_updates(dates: &[NaiveDate]) -> AppRecord {
        AppRecord {
            id: "x".to_string(),
            name: "X".to_string(),
            description: String::new(),
            icon: String::new(),
            icon_bg: String::new(),
            category: "Media".to_string(),
            platform: "Slack".to_string(),
            team: String::new(),
            designed_for: vec!["Everyone".to_string()],
            url: "#".to_string(),
            date_added: date(2025, 1, 1),
            featured: false,
            updates: dates
                .iter()
                .map(|d| AppUpdate {
                    version: "1.0".to_string(),
                    date: *d,
                    notes: String::new(),
                    previous_url: None,
                })
                .collect(),
            version_history: Vec::new(),
        }
    }

    #[test]
    /// What: No updates means no badge
    fn recent_update_absent_is_false() {
        assert!(!has_recent_update(&rec_with_updates(&[]), date(2025, 12, 1)));
    }

    #[test]
    /// What: Window is inclusive at exactly 90 days
    ///
    /// - Input: Update on 2025-09-02; now 90 and 91 days later
    /// - Output: true at 90, false at 91
    fn recent_update_boundary_inclusive() {
        let app = rec_with_updates(&[date(2025, 9, 2)]);
        let at_90 = date(2025, 9, 2) + chrono::Days::new(90);
        assert!(has_recent_update(&app, at_90));
        assert!(!has_recent_update(&app, at_90 + chrono::Days::new(1)));
    }

    #[test]
    /// What: Only the first (newest by convention) update is consulted
    fn recent_update_uses_first_entry() {
        let app = rec_with_updates(&[date(2024, 1, 1), date(2025, 11, 30)]);
        assert!(!has_recent_update(&app, date(2025, 12, 1)));
    }

    #[test]
    /// What: Custom window and future-dated updates
    fn recent_update_custom_window_and_future() {
        let app = rec_with_updates(&[date(2025, 11, 1)]);
        assert!(!has_update_within(&app, date(2025, 12, 1), 7));
        assert!(has_update_within(&app, date(2025, 11, 5), 7));
        assert!(has_recent_update(&app, date(2025, 10, 1)));
    }
}
