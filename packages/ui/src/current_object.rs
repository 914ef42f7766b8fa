//! Which object the shell is focused on.
//!
//! Object-scoped pages carry the id in the URL. Pages outside an object
//! (employees, profile) fall back to the last object the user worked in,
//! which the shell keeps in [`store::PrefStore`]. The URL always wins so a
//! shared link opens the object it names, whatever the viewer did last.

use api::Project;

/// Resolve the current object id for the shell chrome.
pub fn resolve_current_object(route_id: Option<i64>, stored_id: Option<i64>) -> Option<i64> {
    route_id.or(stored_id)
}

/// Display name for the current object, if it is still in the list.
pub fn object_name(projects: &[Project], id: Option<i64>) -> Option<&str> {
    let id = id?;
    projects
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ProjectStatus;

    fn project(id: i64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            address: None,
            client: None,
            start_date: None,
            end_date: None,
            status: ProjectStatus::InProgress,
            contract_amount: None,
            planned_cost: None,
            notes: None,
        }
    }

    #[test]
    fn url_wins_over_stored() {
        assert_eq!(resolve_current_object(Some(3), Some(9)), Some(3));
    }

    #[test]
    fn stored_fills_in_when_url_has_none() {
        assert_eq!(resolve_current_object(None, Some(9)), Some(9));
        assert_eq!(resolve_current_object(None, None), None);
        assert_eq!(resolve_current_object(Some(3), None), Some(3));
    }

    #[test]
    fn name_lookup_tolerates_stale_ids() {
        let projects = vec![project(1, "Riverside house"), project(2, "Garage block")];
        assert_eq!(object_name(&projects, Some(2)), Some("Garage block"));
        // Deleted on another device; the id no longer resolves.
        assert_eq!(object_name(&projects, Some(99)), None);
        assert_eq!(object_name(&projects, None), None);
    }
}
