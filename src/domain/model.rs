use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One ABO/Rh blood type with its donation and reception compatibility.
///
/// The two relations are stored independently and are not required to be
/// symmetric (O- donates to all 8 types but only receives from O-).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodType {
    pub id: u32,
    pub r#type: String,
    pub can_donate_to: Vec<String>,
    pub can_receive_from: Vec<String>,
}

/// Population-level blood type prevalence for one named region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalDistribution {
    pub region: String,
    pub population: u64,
    /// Percentage per type label; values sum to ~100 but this is not enforced.
    pub distribution: HashMap<String, f64>,
}

/// One row of the derived compatibility matrix: the donate/receive sets of a
/// blood type without its `id` and `type` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityEntry {
    pub can_donate_to: Vec<String>,
    pub can_receive_from: Vec<String>,
}

/// Welcome payload for the service root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
