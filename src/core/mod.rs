pub mod catalog;
pub mod service;

pub use crate::domain::model::{
    BloodType, CompatibilityEntry, HealthStatus, RegionalDistribution, ServiceInfo,
};
pub use crate::utils::error::Result;
