pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::Cli;

pub use crate::core::catalog::Catalog;
pub use crate::core::service::{health, service_info, QueryService};
pub use crate::domain::model::{
    BloodType, CompatibilityEntry, HealthStatus, RegionalDistribution, ServiceInfo,
};
pub use crate::utils::error::{CatalogError, ErrorBody, Result};
