// Domain layer: API-facing data model. No dependencies beyond std/serde.

pub mod model;
