use serde::Serialize;

/// Row counts of the store, for status output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub patients: usize,
    pub sessions: usize,
    pub schema_version: i32,
}
