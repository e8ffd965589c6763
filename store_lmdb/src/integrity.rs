//! LMDB database integrity checks.
//!
//! Meant to run right after opening an environment, to detect corruption
//! before any entity is read or written.

use std::sync::Arc;

use heed::types::Bytes;
use heed::Env;

use crate::environment::{ENTITIES_DB, META_DB};
use crate::meta::VOTER_REF_KEY;
use crate::LmdbError;

/// Summary of an integrity check run.
#[derive(Debug)]
pub struct IntegrityReport {
    pub databases_checked: u32,
    pub total_entries: u64,
    pub errors: Vec<String>,
}

impl IntegrityReport {
    /// Returns `true` if no errors were detected.
    pub fn is_healthy(&self) -> bool {
        self.errors.is_empty()
    }
}

const EXPECTED_DATABASES: &[&str] = &[ENTITIES_DB, META_DB];

/// Check that every expected database opens and can be counted, and that
/// the environment knows which voter model it serves.
///
/// Read failures are recorded in the report rather than returned.
pub fn check_integrity(env: &Arc<Env>) -> Result<IntegrityReport, LmdbError> {
    let mut report = IntegrityReport {
        databases_checked: 0,
        total_entries: 0,
        errors: Vec::new(),
    };

    let rtxn = env.read_txn()?;

    for &db_name in EXPECTED_DATABASES {
        match env.open_database::<Bytes, Bytes>(&rtxn, Some(db_name)) {
            Ok(Some(db)) => {
                report.databases_checked += 1;
                match db.len(&rtxn) {
                    Ok(count) => report.total_entries += count,
                    Err(e) => report
                        .errors
                        .push(format!("failed to read database '{}': {}", db_name, e)),
                }
                if db_name == META_DB {
                    match db.get(&rtxn, VOTER_REF_KEY.as_bytes()) {
                        Ok(Some(_)) => {}
                        Ok(None) => report
                            .errors
                            .push("meta database has no voter_ref entry".to_string()),
                        Err(e) => report
                            .errors
                            .push(format!("failed to read voter_ref: {}", e)),
                    }
                }
            }
            Ok(None) => report
                .errors
                .push(format!("database '{}' is missing", db_name)),
            Err(e) => report
                .errors
                .push(format!("failed to open database '{}': {}", db_name, e)),
        }
    }

    if !report.is_healthy() {
        tracing::warn!(errors = ?report.errors, "LMDB integrity check found problems");
    }

    Ok(report)
}
