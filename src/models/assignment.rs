use serde::Serialize;

/// One (match, person) pairing. At most one row exists per pair; toggling
/// updates `is_working` in place.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Assignment {
    pub id: i64,
    pub match_id: i64,
    pub personnel_id: i64,
    pub is_working: bool,
}
