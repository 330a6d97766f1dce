//! Dataset loading and the in-memory stores
//!
//! Both datasets are read exactly once at process start and held immutably
//! for the lifetime of the process. A missing or malformed file is fatal:
//! the service must never come up with a partial or absent dataset. After
//! load there are no writers, so the stores are shared across request
//! handlers without any locking.

use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::{DivisionsFile, PostalRecord};

pub mod divisions;
pub mod postal;
pub mod unique;

pub use divisions::DivisionStore;
pub use postal::PostalStore;

/// Load the flat postal dataset from a JSON array of records.
pub fn load_postal_store(path: &Path) -> AppResult<PostalStore> {
    let contents = read_dataset(path)?;
    let records: Vec<PostalRecord> = serde_json::from_str(&contents)
        .map_err(|e| AppError::dataset(path.display().to_string(), e.to_string()))?;

    tracing::info!(
        records = records.len(),
        path = %path.display(),
        "postal dataset loaded"
    );
    Ok(PostalStore::new(records))
}

/// Load the hierarchical division dataset.
pub fn load_division_store(path: &Path) -> AppResult<DivisionStore> {
    let contents = read_dataset(path)?;
    let file: DivisionsFile = serde_json::from_str(&contents)
        .map_err(|e| AppError::dataset(path.display().to_string(), e.to_string()))?;

    tracing::info!(
        divisions = file.divisions.len(),
        path = %path.display(),
        "division dataset loaded"
    );
    Ok(DivisionStore::new(file.divisions))
}

fn read_dataset(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| AppError::dataset(path.display().to_string(), e.to_string()))
}
