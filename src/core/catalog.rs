use crate::domain::model::{BloodType, RegionalDistribution};
use std::collections::HashMap;
use std::sync::OnceLock;

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Immutable in-process catalog of blood type records and regional
/// distributions. Built once on first access and shared by all callers;
/// there is no mutation path and no teardown.
#[derive(Debug)]
pub struct Catalog {
    blood_types: Vec<BloodType>,
    regions: HashMap<String, RegionalDistribution>,
}

impl Catalog {
    /// Returns the process-wide catalog instance.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(Catalog::build)
    }

    /// All 8 blood type records in canonical order.
    pub fn blood_types(&self) -> &[BloodType] {
        &self.blood_types
    }

    /// Regional distributions keyed by lowercase region name.
    pub fn regions(&self) -> &HashMap<String, RegionalDistribution> {
        &self.regions
    }

    fn build() -> Catalog {
        tracing::debug!("building blood type catalog");

        let blood_types = vec![
            blood_type(1, "A+", &["A+", "AB+"], &["A+", "A-", "O+", "O-"]),
            blood_type(2, "A-", &["A+", "A-", "AB+", "AB-"], &["A-", "O-"]),
            blood_type(3, "B+", &["B+", "AB+"], &["B+", "B-", "O+", "O-"]),
            blood_type(4, "B-", &["B+", "B-", "AB+", "AB-"], &["B-", "O-"]),
            blood_type(
                5,
                "AB+",
                &["AB+"],
                &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"],
            ),
            blood_type(6, "AB-", &["AB+", "AB-"], &["A-", "B-", "AB-", "O-"]),
            blood_type(7, "O+", &["A+", "B+", "AB+", "O+"], &["O+", "O-"]),
            blood_type(
                8,
                "O-",
                &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"],
                &["O-"],
            ),
        ];

        let mut regions = HashMap::new();
        regions.insert(
            "israel".to_string(),
            RegionalDistribution {
                region: "Israel".to_string(),
                population: 8_323_659,
                distribution: distribution(&[
                    ("A+", 34.0),
                    ("A-", 4.0),
                    ("B+", 17.0),
                    ("B-", 2.0),
                    ("AB+", 7.0),
                    ("AB-", 1.0),
                    ("O+", 32.0),
                    ("O-", 3.0),
                ]),
            },
        );

        Catalog {
            blood_types,
            regions,
        }
    }
}

fn blood_type(id: u32, label: &str, donate: &[&str], receive: &[&str]) -> BloodType {
    BloodType {
        id,
        r#type: label.to_string(),
        can_donate_to: donate.iter().map(|s| s.to_string()).collect(),
        can_receive_from: receive.iter().map(|s| s.to_string()).collect(),
    }
}

fn distribution(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(label, pct)| (label.to_string(), *pct))
        .collect()
}
