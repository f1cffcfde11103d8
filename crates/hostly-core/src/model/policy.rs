// ── Policy domain types ──

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOption {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

/// A property's attached policy configuration.
///
/// Times are held in the in-memory `"HH:MM"` form; the `"HH:MM AM/PM"`
/// payload form exists only at the wire boundary (see [`crate::time`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicySet {
    pub options: Vec<PolicyOption>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub cancellation_policy: Option<String>,
}

impl PolicySet {
    pub fn option_ids(&self) -> Vec<i64> {
        self.options.iter().map(|o| o.id).collect()
    }
}
