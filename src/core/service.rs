use crate::core::catalog::Catalog;
use crate::domain::model::{
    BloodType, CompatibilityEntry, HealthStatus, RegionalDistribution, ServiceInfo,
};
use crate::utils::error::{CatalogError, Result};
use std::collections::BTreeMap;

/// Stateless read operations over the catalog. Every operation is a pure
/// function of its input and the shared immutable catalog, so a single
/// service value can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct QueryService {
    catalog: &'static Catalog,
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryService {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::global(),
        }
    }

    /// All 8 blood type records in catalog order. Never fails.
    pub fn list_blood_types(&self) -> &[BloodType] {
        self.catalog.blood_types()
    }

    /// Looks up one blood type by exact, case-sensitive label.
    pub fn get_blood_type(&self, label: &str) -> Result<&BloodType> {
        tracing::debug!(label, "looking up blood type");

        self.catalog
            .blood_types()
            .iter()
            .find(|bt| bt.r#type == label)
            .ok_or_else(|| CatalogError::BloodTypeNotFound {
                label: label.to_string(),
            })
    }

    /// Looks up a region's distribution; the region name matches
    /// case-insensitively. The error carries the name as requested,
    /// not the normalized key.
    pub fn get_regional_distribution(&self, region: &str) -> Result<&RegionalDistribution> {
        tracing::debug!(region, "looking up regional distribution");

        self.catalog
            .regions()
            .get(&region.to_lowercase())
            .ok_or_else(|| CatalogError::RegionNotFound {
                region: region.to_string(),
            })
    }

    /// Derives the full compatibility matrix: label → donate/receive sets.
    /// Builds a fresh map of owned copies each call so callers never hold
    /// mutable views into the catalog. Never fails.
    pub fn compatibility_matrix(&self) -> BTreeMap<String, CompatibilityEntry> {
        self.catalog
            .blood_types()
            .iter()
            .map(|bt| {
                (
                    bt.r#type.clone(),
                    CompatibilityEntry {
                        can_donate_to: bt.can_donate_to.clone(),
                        can_receive_from: bt.can_receive_from.clone(),
                    },
                )
            })
            .collect()
    }

    /// Whether `donor` may donate to `recipient`. Both labels must be
    /// canonical; an unknown label on either side is a lookup failure
    /// rather than a "not compatible" answer.
    pub fn can_donate(&self, donor: &str, recipient: &str) -> Result<bool> {
        let donor = self.get_blood_type(donor)?;
        let recipient = self.get_blood_type(recipient)?;

        Ok(donor
            .can_donate_to
            .iter()
            .any(|label| *label == recipient.r#type))
    }

    /// Labels the given donor may donate to.
    pub fn compatible_recipients(&self, donor: &str) -> Result<Vec<String>> {
        Ok(self.get_blood_type(donor)?.can_donate_to.clone())
    }

    /// Labels the given recipient may receive from.
    pub fn compatible_donors(&self, recipient: &str) -> Result<Vec<String>> {
        Ok(self.get_blood_type(recipient)?.can_receive_from.clone())
    }
}

/// Welcome message object for the service root.
pub fn service_info() -> ServiceInfo {
    ServiceInfo {
        message: "Welcome to the Blood Donation Awareness API".to_string(),
    }
}

/// Liveness payload.
pub fn health() -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
    }
}
