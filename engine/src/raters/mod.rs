//! Vehicle raters
//!
//! Two independent, symmetric rating modules, one per vehicle class:
//!
//! - [`ground`]: ground units (armor, active protection, weapon batteries)
//! - [`ship`]: ships (weapon mounts, FTL, stealth, engine shorthand)
//!
//! Each module exports a pure `rate` function and an ordered parameter
//! schema. Nothing is shared between the two at runtime beyond the type
//! contracts in [`crate::models`]; the [`VehicleClass`] dispatch here is
//! a convenience for the presentation boundary.

pub mod engines;
pub mod ground;
pub mod ship;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{CostRecord, ParamDescriptor};

/// Errors at the vehicle-class dispatch boundary
#[derive(Debug, Error, PartialEq)]
pub enum RaterError {
    #[error("unknown vehicle class '{0}' (expected 'ground' or 'ship')")]
    UnknownVehicleClass(String),
}

/// Vehicle class selector, keyed the way the shell's menu submits it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Ground,
    Ship,
}

impl FromStr for VehicleClass {
    type Err = RaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ground" => Ok(VehicleClass::Ground),
            "ship" => Ok(VehicleClass::Ship),
            other => Err(RaterError::UnknownVehicleClass(other.to_string())),
        }
    }
}

/// Ordered parameter schema for one vehicle class
pub fn params_for(class: VehicleClass) -> Vec<ParamDescriptor> {
    match class {
        VehicleClass::Ground => ground::params(),
        VehicleClass::Ship => ship::params(),
    }
}

/// Parameter schema as pretty JSON for presentation-layer consumption
pub fn param_schema_json(class: VehicleClass) -> String {
    serde_json::to_string_pretty(&params_for(class)).expect("schema serialization should not fail")
}

/// Rate a raw form-value record for the given vehicle class
///
/// Missing or malformed fields fall back to the declared parameter
/// defaults, so the call itself cannot fail.
pub fn rate_values(class: VehicleClass, record: &Map<String, Value>) -> CostRecord {
    match class {
        VehicleClass::Ground => ground::rate(&ground::GroundInput::from_values(record)),
        VehicleClass::Ship => ship::rate(&ship::ShipInput::from_values(record)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_class_from_menu_key() {
        assert_eq!("ground".parse(), Ok(VehicleClass::Ground));
        assert_eq!("ship".parse(), Ok(VehicleClass::Ship));
        assert_eq!(
            "submarine".parse::<VehicleClass>(),
            Err(RaterError::UnknownVehicleClass("submarine".to_string()))
        );
        // Menu keys are lowercase; anything else is the shell's bug.
        assert!("Ship".parse::<VehicleClass>().is_err());
    }

    #[test]
    fn test_rate_values_dispatches_per_class() {
        let record = Map::new();
        let ground_cost = rate_values(VehicleClass::Ground, &record);
        let ship_cost = rate_values(VehicleClass::Ship, &record);

        assert_eq!(ground_cost, ground::rate(&ground::GroundInput::default()));
        assert_eq!(ship_cost, ship::rate(&ship::ShipInput::default()));
    }
}
