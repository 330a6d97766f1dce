//! Flat postal record store
//!
//! Substring search and hierarchical equality filters over the flat
//! dataset. Every query is a full O(n) scan; the dataset is small, static
//! and loaded once, so no index is kept.

use super::unique::unique_in_order;
use crate::models::{DivisionSummary, PostOfficeEntry, PostalRecord};

/// Read-only store over the flat postal dataset.
///
/// All name comparisons are case-insensitive; post codes are compared
/// verbatim. Results preserve dataset order.
#[derive(Debug, Clone)]
pub struct PostalStore {
    records: Vec<PostalRecord>,
}

impl PostalStore {
    pub fn new(records: Vec<PostalRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Free-text suggestion search.
    ///
    /// A record matches when its district, upazila or post office contains
    /// the lower-cased term as a substring, or its post code contains the
    /// term verbatim. The empty term matches every record; that is
    /// pass-through behavior, not an error.
    pub fn search(&self, term: &str) -> Vec<PostalRecord> {
        let term = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.district.to_lowercase().contains(&term)
                    || r.upazila.to_lowercase().contains(&term)
                    || r.post_office.to_lowercase().contains(&term)
                    || r.post_code.contains(&term)
            })
            .cloned()
            .collect()
    }

    /// Distinct values of one field across all records, first-occurrence
    /// order.
    pub fn unique_values<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&PostalRecord) -> &str,
    {
        unique_in_order(self.records.iter().map(|r| field(r).to_string()))
    }

    /// Everything known about one division: unique districts, upazilas,
    /// post offices and postal codes of the matching records.
    ///
    /// The summary echoes the lower-cased requested name. An unknown name
    /// yields four empty lists, never an error.
    pub fn by_division(&self, name: &str) -> DivisionSummary {
        let name = name.to_lowercase();
        let subset: Vec<&PostalRecord> = self
            .records
            .iter()
            .filter(|r| r.division.to_lowercase() == name)
            .collect();

        DivisionSummary {
            division: name,
            districts: unique_in_order(subset.iter().map(|r| r.district.clone())),
            upazilas: unique_in_order(subset.iter().map(|r| r.upazila.clone())),
            post_offices: unique_in_order(subset.iter().map(|r| r.post_office.clone())),
            postal_codes: unique_in_order(subset.iter().map(|r| r.post_code.clone())),
        }
    }

    /// Unique districts under a division (case-insensitive name match).
    pub fn districts_of_division(&self, division: &str) -> Vec<String> {
        let division = division.to_lowercase();
        unique_in_order(
            self.records
                .iter()
                .filter(|r| r.division.to_lowercase() == division)
                .map(|r| r.district.clone()),
        )
    }

    /// Unique upazilas under a district within a division.
    pub fn upazilas_of_district(&self, division: &str, district: &str) -> Vec<String> {
        let division = division.to_lowercase();
        let district = district.to_lowercase();
        unique_in_order(
            self.records
                .iter()
                .filter(|r| {
                    r.division.to_lowercase() == division && r.district.to_lowercase() == district
                })
                .map(|r| r.upazila.clone()),
        )
    }

    /// Post offices under an upazila, one entry per matching record.
    ///
    /// Not deduplicated: the same post office name may repeat with
    /// different codes, and verbatim duplicate rows are passed through.
    pub fn post_offices_of_upazila(
        &self,
        division: &str,
        district: &str,
        upazila: &str,
    ) -> Vec<PostOfficeEntry> {
        let division = division.to_lowercase();
        let district = district.to_lowercase();
        let upazila = upazila.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.division.to_lowercase() == division
                    && r.district.to_lowercase() == district
                    && r.upazila.to_lowercase() == upazila
            })
            .map(|r| PostOfficeEntry {
                post_office: r.post_office.clone(),
                post_code: r.post_code.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        division: &str,
        district: &str,
        upazila: &str,
        post_office: &str,
        post_code: &str,
    ) -> PostalRecord {
        PostalRecord {
            division: division.to_string(),
            district: district.to_string(),
            upazila: upazila.to_string(),
            post_office: post_office.to_string(),
            post_code: post_code.to_string(),
        }
    }

    fn sample_store() -> PostalStore {
        PostalStore::new(vec![
            record("Dhaka", "Dhaka", "Savar", "Savar", "1340"),
            record("Dhaka", "Dhaka", "Savar", "Savar Cantonment", "1344"),
            record("Dhaka", "Gazipur", "Gazipur Sadar", "Gazipur", "1700"),
            record("Chattogram", "Chattogram", "Pahartali", "Pahartali", "4202"),
            record("Dhaka", "Dhaka", "Savar", "Savar", "1340"),
        ])
    }

    #[test]
    fn search_matches_any_name_field_case_insensitively() {
        let store = sample_store();

        let by_district = store.search("gazip");
        assert_eq!(by_district.len(), 1);
        assert_eq!(by_district[0].district, "Gazipur");

        let by_upazila = store.search("SAVAR");
        assert_eq!(by_upazila.len(), 3);

        let by_post_office = store.search("cantonment");
        assert_eq!(by_post_office.len(), 1);
    }

    #[test]
    fn search_matches_post_code_verbatim() {
        let store = sample_store();
        let hits = store.search("420");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].post_code, "4202");
    }

    #[test]
    fn empty_term_returns_entire_dataset_in_order() {
        let store = sample_store();
        let hits = store.search("");
        assert_eq!(hits.len(), store.len());
        assert_eq!(hits[0].post_code, "1340");
        assert_eq!(hits[4].post_code, "1340");
    }

    #[test]
    fn search_preserves_dataset_order() {
        let store = sample_store();
        let hits = store.search("savar");
        let codes: Vec<&str> = hits.iter().map(|r| r.post_code.as_str()).collect();
        assert_eq!(codes, vec!["1340", "1344", "1340"]);
    }

    #[test]
    fn unique_values_dedupes_in_first_occurrence_order() {
        let store = sample_store();
        assert_eq!(
            store.unique_values(|r| &r.district),
            vec!["Dhaka", "Gazipur", "Chattogram"]
        );
        assert_eq!(store.unique_values(|r| &r.division), vec!["Dhaka", "Chattogram"]);
    }

    #[test]
    fn by_division_is_case_insensitive_and_echoes_lowercased_name() {
        let store = sample_store();
        let summary = store.by_division("DHAKA");
        assert_eq!(summary.division, "dhaka");
        assert_eq!(summary.districts, vec!["Dhaka", "Gazipur"]);
        assert_eq!(summary.upazilas, vec!["Savar", "Gazipur Sadar"]);
        assert_eq!(
            summary.post_offices,
            vec!["Savar", "Savar Cantonment", "Gazipur"]
        );
        assert_eq!(summary.postal_codes, vec!["1340", "1344", "1700"]);
    }

    #[test]
    fn by_division_unknown_name_yields_empty_lists() {
        let store = sample_store();
        let summary = store.by_division("Narnia");
        assert_eq!(summary.division, "narnia");
        assert!(summary.districts.is_empty());
        assert!(summary.upazilas.is_empty());
        assert!(summary.post_offices.is_empty());
        assert!(summary.postal_codes.is_empty());
    }

    #[test]
    fn districts_of_division_case_variants_agree() {
        let store = sample_store();
        assert_eq!(
            store.districts_of_division("DHAKA"),
            store.districts_of_division("dhaka")
        );
        assert_eq!(store.districts_of_division("dhaka"), vec!["Dhaka", "Gazipur"]);
    }

    #[test]
    fn upazilas_of_district_filters_both_levels() {
        let store = sample_store();
        assert_eq!(
            store.upazilas_of_district("dhaka", "gazipur"),
            vec!["Gazipur Sadar"]
        );
        assert!(store.upazilas_of_district("chattogram", "gazipur").is_empty());
    }

    #[test]
    fn post_offices_are_not_deduplicated() {
        let store = sample_store();
        let offices = store.post_offices_of_upazila("dhaka", "dhaka", "savar");
        assert_eq!(offices.len(), 3);
        assert_eq!(offices[0].post_office, "Savar");
        assert_eq!(offices[0].post_code, "1340");
        assert_eq!(offices[1].post_office, "Savar Cantonment");
        assert_eq!(offices[2].post_code, "1340");
    }
}
