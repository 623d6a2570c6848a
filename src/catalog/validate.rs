use std::collections::HashMap;

use super::error::CatalogError;
use super::types::{AppRecord, EVERYONE};

/// What: Check catalog records for the data-quality rules the store relies on.
///
/// Inputs:
/// - `apps`: Records in catalog order
///
/// Output:
/// - `Ok(())` when every record has an `id`, a `name`, a non-empty
///   `designedFor`, and ids are unique; the first violation otherwise.
///
/// Details:
/// - Records mixing `"Everyone"` with named people are accepted; they match
///   every person filter anyway. A warning is logged so maintainers can tidy
///   the entry.
pub fn validate(apps: &[AppRecord]) -> Result<(), CatalogError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(apps.len());
    for (index, app) in apps.iter().enumerate() {
        if app.id.trim().is_empty() {
            return Err(CatalogError::MissingField { index, field: "id" });
        }
        if app.name.trim().is_empty() {
            return Err(CatalogError::MissingField {
                index,
                field: "name",
            });
        }
        if app.designed_for.is_empty() {
            return Err(CatalogError::EmptyDesignedFor { id: app.id.clone() });
        }
        if let Some(&first) = seen.get(app.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: app.id.clone(),
                first,
                second: index,
            });
        }
        seen.insert(app.id.as_str(), index);

        if app.designed_for.len() > 1 && app.is_for_everyone() {
            tracing::warn!(
                id = %app.id,
                designed_for = ?app.designed_for,
                "\"{EVERYONE}\" is mixed with named people; entry matches every person filter"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, designed_for: &[&str]) -> AppRecord {
        AppRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            icon: String::new(),
            icon_bg: String::new(),
            category: "Data".to_string(),
            platform: "Slack".to_string(),
            team: String::new(),
            designed_for: designed_for.iter().map(ToString::to_string).collect(),
            url: "#".to_string(),
            date_added: chrono::NaiveDate::from_ymd_opt(2025, 11, 19).unwrap_or_default(),
            featured: false,
            updates: Vec::new(),
            version_history: Vec::new(),
        }
    }

    #[test]
    /// What: Well-formed records pass, including an empty catalog
    fn validate_accepts_clean_records() {
        assert!(validate(&[]).is_ok());
        let apps = vec![
            record("a", "Alpha", &["Everyone"]),
            record("b", "Beta", &["Julia", "Phil"]),
        ];
        assert!(validate(&apps).is_ok());
    }

    #[test]
    /// What: Duplicate ids are reported with both positions
    fn validate_rejects_duplicate_ids() {
        let apps = vec![
            record("a", "Alpha", &["Everyone"]),
            record("b", "Beta", &["Everyone"]),
            record("a", "Again", &["Everyone"]),
        ];
        match validate(&apps) {
            Err(CatalogError::DuplicateId { id, first, second }) => {
                assert_eq!(id, "a");
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    /// What: Blank id/name and empty designedFor are rejected
    fn validate_rejects_missing_fields() {
        assert!(matches!(
            validate(&[record("  ", "Alpha", &["Everyone"])]),
            Err(CatalogError::MissingField { index: 0, field: "id" })
        ));
        assert!(matches!(
            validate(&[record("a", "", &["Everyone"])]),
            Err(CatalogError::MissingField {
                index: 0,
                field: "name"
            })
        ));
        assert!(matches!(
            validate(&[record("a", "Alpha", &[])]),
            Err(CatalogError::EmptyDesignedFor { .. })
        ));
    }

    #[test]
    /// What: Mixing the Everyone sentinel with named people is tolerated
    fn validate_allows_everyone_mixed_with_names() {
        let apps = vec![record("a", "Alpha", &["Everyone", "Chris"])];
        assert!(validate(&apps).is_ok());
    }
}
