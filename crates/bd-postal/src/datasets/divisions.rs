//! Hierarchical division store
//!
//! Prefix suggestions over the division tree, scoped by parent lookups.
//! Division names are looked up by exact match while the prefix filters
//! are case-insensitive; both behaviors are preserved from the source
//! dataset's service.

use crate::errors::{AppError, AppResult};
use crate::models::DivisionNode;

/// Read-only store over the division tree.
#[derive(Debug, Clone)]
pub struct DivisionStore {
    divisions: Vec<DivisionNode>,
}

impl DivisionStore {
    pub fn new(divisions: Vec<DivisionNode>) -> Self {
        Self { divisions }
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    /// Division names whose lower-cased form starts with the lower-cased
    /// prefix, in dataset order.
    pub fn suggest_divisions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.divisions
            .iter()
            .filter(|d| d.name.to_lowercase().starts_with(&prefix))
            .map(|d| d.name.clone())
            .collect()
    }

    /// Zila names under `division` starting with the prefix.
    ///
    /// Fails with NotFound when no division has exactly that name; a
    /// case-different request does not match.
    pub fn suggest_zilas(&self, division: &str, prefix: &str) -> AppResult<Vec<String>> {
        let node = self.find_division(division)?;
        let prefix = prefix.to_lowercase();
        Ok(node
            .zilas
            .iter()
            .filter(|z| z.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect())
    }

    /// Upazila names under `division` starting with the prefix, gated on
    /// `zila` being one of that division's zilas.
    ///
    /// The list filtered is the division-level upazila list; the dataset
    /// does not nest upazilas under zilas.
    pub fn suggest_upazilas(
        &self,
        division: &str,
        zila: &str,
        prefix: &str,
    ) -> AppResult<Vec<String>> {
        let node = self.find_division(division)?;
        if !node.zilas.iter().any(|z| z == zila) {
            return Err(AppError::not_found("Zila"));
        }

        let prefix = prefix.to_lowercase();
        Ok(node
            .upazilas
            .iter()
            .filter(|u| u.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect())
    }

    fn find_division(&self, name: &str) -> AppResult<&DivisionNode> {
        self.divisions
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| AppError::not_found("Division"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> DivisionStore {
        DivisionStore::new(vec![
            DivisionNode {
                name: "Rajshahi".to_string(),
                zilas: vec![
                    "Pabna".to_string(),
                    "Bogura".to_string(),
                    "Naogaon".to_string(),
                ],
                upazilas: vec![
                    "Paba".to_string(),
                    "Ishwardi".to_string(),
                    "Shibganj".to_string(),
                ],
            },
            DivisionNode {
                name: "Rangpur".to_string(),
                zilas: vec!["Dinajpur".to_string(), "Kurigram".to_string()],
                upazilas: vec!["Pirganj".to_string(), "Birampur".to_string()],
            },
        ])
    }

    #[test]
    fn division_suggestions_are_prefix_matched_case_insensitively() {
        let store = sample_store();
        assert_eq!(store.suggest_divisions("ra"), vec!["Rajshahi", "Rangpur"]);
        assert_eq!(store.suggest_divisions("RAJ"), vec!["Rajshahi"]);
        assert!(store.suggest_divisions("x").is_empty());
    }

    #[test]
    fn empty_prefix_suggests_every_division_in_order() {
        let store = sample_store();
        assert_eq!(store.suggest_divisions(""), vec!["Rajshahi", "Rangpur"]);
    }

    #[test]
    fn zila_suggestions_filter_within_the_division() {
        let store = sample_store();
        assert_eq!(
            store.suggest_zilas("Rajshahi", "p").unwrap(),
            vec!["Pabna"]
        );
        assert_eq!(
            store.suggest_zilas("Rajshahi", "").unwrap(),
            vec!["Pabna", "Bogura", "Naogaon"]
        );
    }

    #[test]
    fn division_lookup_is_exact_case() {
        let store = sample_store();
        let err = store.suggest_zilas("rajshahi", "p").unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Division not found");
    }

    #[test]
    fn upazila_suggestions_require_zila_membership() {
        let store = sample_store();

        let err = store
            .suggest_upazilas("Rajshahi", "Dinajpur", "p")
            .unwrap_err();
        assert_eq!(err.to_string(), "Zila not found");

        let err = store.suggest_upazilas("Sylhet", "Pabna", "p").unwrap_err();
        assert_eq!(err.to_string(), "Division not found");
    }

    #[test]
    fn upazila_suggestions_come_from_the_division_level_list() {
        let store = sample_store();
        // Any zila of the division gates access to the same upazila list.
        assert_eq!(
            store.suggest_upazilas("Rajshahi", "Pabna", "sh").unwrap(),
            vec!["Shibganj"]
        );
        assert_eq!(
            store.suggest_upazilas("Rajshahi", "Bogura", "sh").unwrap(),
            vec!["Shibganj"]
        );
    }
}
