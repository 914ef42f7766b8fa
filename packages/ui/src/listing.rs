//! Search and sort plumbing shared by the list pages.
//!
//! All of this runs on data already in memory. Pages keep the raw rows in a
//! signal, derive the visible slice on every render, and never mutate the
//! source list while filtering.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn flip(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// The active sort column of a table.
///
/// Clicking the active column flips direction; clicking a different column
/// selects it and resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    pub field: F,
    pub dir: SortDir,
}

impl<F: PartialEq> SortOrder<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            dir: SortDir::Asc,
        }
    }

    pub fn toggle(&mut self, field: F) {
        if self.field == field {
            self.dir = self.dir.flip();
        } else {
            self.field = field;
            self.dir = SortDir::Asc;
        }
    }

    /// Header suffix for the column, empty when the column is inactive.
    pub fn indicator(&self, field: &F) -> &'static str {
        if self.field != *field {
            ""
        } else if self.dir == SortDir::Asc {
            " \u{25B4}"
        } else {
            " \u{25BE}"
        }
    }
}

/// Case-insensitive substring match over a row's searchable fields.
/// A blank query matches everything.
pub fn matches_search(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// Sort under the active direction. `sort_by` is stable, and descending only
/// reverses non-equal pairs, so rows comparing equal keep their backend order
/// either way.
pub fn sort_rows<T>(rows: &mut [T], dir: SortDir, mut cmp: impl FnMut(&T, &T) -> Ordering) {
    rows.sort_by(|a, b| {
        let ord = cmp(a, b);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

pub fn cmp_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches_search("", &["Riverside house"]));
        assert!(matches_search("   ", &["Riverside house"]));
    }

    #[test]
    fn search_is_case_insensitive_and_multi_field() {
        let fields = &["Riverside house", "Lenina 14", "Ivanov"];
        assert!(matches_search("RIVER", fields));
        assert!(matches_search("lenina", fields));
        assert!(matches_search("ivan", fields));
        assert!(!matches_search("garage", fields));
    }

    #[test]
    fn filters_compose_independently() {
        // (name, status) rows run through search and a status predicate the
        // way the pages chain them.
        let rows = [
            ("Alpha tower", "active"),
            ("Alpha annex", "blocked"),
            ("Beta yard", "active"),
        ];
        let pick = |query: &str, status: Option<&str>| -> Vec<&str> {
            rows.iter()
                .filter(|(name, _)| matches_search(query, &[name]))
                .filter(|(_, s)| status.map_or(true, |want| *s == want))
                .map(|(name, _)| *name)
                .collect()
        };

        assert_eq!(pick("alpha", None), vec!["Alpha tower", "Alpha annex"]);
        assert_eq!(pick("alpha", Some("active")), vec!["Alpha tower"]);
        // Dropping the status filter must not disturb what search matched.
        assert_eq!(pick("alpha", None), vec!["Alpha tower", "Alpha annex"]);
        assert_eq!(pick("", Some("active")), vec!["Alpha tower", "Beta yard"]);
    }

    #[test]
    fn toggle_same_field_flips_direction() {
        let mut order = SortOrder::new("name");
        assert_eq!(order.dir, SortDir::Asc);
        order.toggle("name");
        assert_eq!(order.dir, SortDir::Desc);
        order.toggle("name");
        assert_eq!(order.dir, SortDir::Asc);
    }

    #[test]
    fn toggle_new_field_resets_to_ascending() {
        let mut order = SortOrder::new("name");
        order.toggle("name");
        assert_eq!(order.dir, SortDir::Desc);
        order.toggle("created");
        assert_eq!(order.field, "created");
        assert_eq!(order.dir, SortDir::Asc);
    }

    #[test]
    fn descending_reverses_non_tied_rows() {
        let mut rows = vec![3, 1, 2];
        sort_rows(&mut rows, SortDir::Asc, |a, b| a.cmp(b));
        assert_eq!(rows, vec![1, 2, 3]);
        sort_rows(&mut rows, SortDir::Desc, |a, b| a.cmp(b));
        assert_eq!(rows, vec![3, 2, 1]);
    }

    #[test]
    fn tied_rows_keep_backend_order_in_both_directions() {
        // Same key, distinct payloads. The payload order is the backend order.
        let mut rows = vec![("b", 1), ("a", 2), ("a", 3), ("b", 4)];
        sort_rows(&mut rows, SortDir::Asc, |x, y| x.0.cmp(y.0));
        assert_eq!(rows, vec![("a", 2), ("a", 3), ("b", 1), ("b", 4)]);
        sort_rows(&mut rows, SortDir::Desc, |x, y| x.0.cmp(y.0));
        assert_eq!(rows, vec![("b", 1), ("b", 4), ("a", 2), ("a", 3)]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut once = vec![("a", 2), ("a", 1), ("b", 3)];
        sort_rows(&mut once, SortDir::Asc, |x, y| x.0.cmp(y.0));
        let mut twice = once.clone();
        sort_rows(&mut twice, SortDir::Asc, |x, y| x.0.cmp(y.0));
        assert_eq!(once, twice);
    }

    #[test]
    fn cmp_str_ignores_case() {
        assert_eq!(cmp_str("alpha", "ALPHA"), Ordering::Equal);
        assert_eq!(cmp_str("Beta", "alpha"), Ordering::Greater);
    }

    #[test]
    fn cmp_f64_treats_nan_as_equal() {
        assert_eq!(cmp_f64(1.0, 2.0), Ordering::Less);
        assert_eq!(cmp_f64(f64::NAN, 1.0), Ordering::Equal);
    }
}
