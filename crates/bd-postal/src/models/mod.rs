//! Domain models for the postal geography datasets
//!
//! Two dataset shapes exist side by side: a flat table of postal records
//! and a division tree with zila/upazila name lists. They are loaded from
//! separate files and queried by separate stores; no unifying interface is
//! forced over them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the flat postal dataset.
///
/// The serde renames preserve the source file's capitalized keys, so a
/// record serializes back byte-for-byte the way the dataset spells it.
/// `post_code` stays a string: codes are substring-matched, never treated
/// as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostalRecord {
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "Upozila")]
    pub upazila: String,
    #[serde(rename = "Post_Office")]
    pub post_office: String,
    #[serde(rename = "Post_Code")]
    pub post_code: String,
}

/// A division entry in the hierarchical dataset.
///
/// Zilas and upazilas are both flat lists directly under the division;
/// upazilas are NOT nested under zilas in the source data. Membership in a
/// list is the sole authority for "belongs to this division".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DivisionNode {
    pub name: String,
    pub zilas: Vec<String>,
    pub upazilas: Vec<String>,
}

/// Top-level shape of the hierarchical dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionsFile {
    pub divisions: Vec<DivisionNode>,
}

/// Summary of a single division over the flat dataset.
///
/// `division` echoes the lower-cased requested name; the four lists are
/// unique values over the matching records, first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DivisionSummary {
    pub division: String,
    pub districts: Vec<String>,
    pub upazilas: Vec<String>,
    pub post_offices: Vec<String>,
    pub postal_codes: Vec<String>,
}

/// A post office with its postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostOfficeEntry {
    pub post_office: String,
    pub post_code: String,
}
