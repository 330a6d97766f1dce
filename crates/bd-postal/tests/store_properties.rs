//! Property tests for the store layer
//!
//! Covers the search and uniqueness invariants: any case-folded substring
//! of a record's district is found by search, the empty term is the
//! identity, and uniqueness extraction is duplicate-free and
//! order-preserving.

use proptest::prelude::*;
use std::collections::HashSet;

use bd_postal::datasets::{PostalStore, unique::unique_in_order};
use bd_postal::models::PostalRecord;

fn record_from_district(district: &str, index: usize) -> PostalRecord {
    PostalRecord {
        division: format!("Division{}", index % 3),
        district: district.to_string(),
        upazila: format!("Upazila{index}"),
        post_office: format!("Post Office {index}"),
        post_code: format!("{:04}", 1000 + index),
    }
}

proptest! {
    #[test]
    fn search_finds_every_record_by_district_substring(
        districts in proptest::collection::vec("[A-Za-z]{1,10}", 1..20),
        record_index in any::<prop::sample::Index>(),
        substring_start in any::<prop::sample::Index>(),
    ) {
        let records: Vec<PostalRecord> = districts
            .iter()
            .enumerate()
            .map(|(i, d)| record_from_district(d, i))
            .collect();
        let store = PostalStore::new(records.clone());

        let chosen = &records[record_index.index(records.len())];
        let folded = chosen.district.to_lowercase();
        let term = &folded[substring_start.index(folded.len())..];

        let hits = store.search(term);
        prop_assert!(
            hits.iter().any(|r| r == chosen),
            "record with district {:?} not found for term {:?}",
            chosen.district,
            term
        );
    }

    #[test]
    fn empty_term_is_the_identity(
        districts in proptest::collection::vec("[A-Za-z]{1,10}", 0..20),
    ) {
        let records: Vec<PostalRecord> = districts
            .iter()
            .enumerate()
            .map(|(i, d)| record_from_district(d, i))
            .collect();
        let store = PostalStore::new(records.clone());

        prop_assert_eq!(store.search(""), records);
    }

    #[test]
    fn unique_in_order_is_duplicate_free_and_order_preserving(
        values in proptest::collection::vec(0u8..20, 0..100),
    ) {
        let out = unique_in_order(values.clone());

        let distinct: HashSet<u8> = out.iter().copied().collect();
        prop_assert_eq!(distinct.len(), out.len(), "output contains duplicates");

        let mut expected = Vec::new();
        for value in &values {
            if !expected.contains(value) {
                expected.push(*value);
            }
        }
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn unique_values_is_a_subsequence_of_the_source(
        districts in proptest::collection::vec("[A-Za-z]{1,6}", 0..30),
    ) {
        let records: Vec<PostalRecord> = districts
            .iter()
            .enumerate()
            .map(|(i, d)| record_from_district(d, i))
            .collect();
        let store = PostalStore::new(records);

        let uniques = store.unique_values(|r| &r.district);

        // Every unique value appears in the source, in matching order.
        let mut cursor = 0;
        for value in &uniques {
            let found = districts[cursor..].iter().position(|d| d == value);
            prop_assert!(found.is_some(), "{value:?} out of order or missing");
            cursor += found.unwrap() + 1;
        }
    }
}
