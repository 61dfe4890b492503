//! FFI boundary for the Python presentation shell
//!
//! JSON-in/JSON-out functions only: the shell fetches each rater's
//! parameter schema, renders a form from it, and posts the submitted
//! record back for rating. Keeping the boundary string-typed means the
//! shell never links against the engine's types.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde_json::{Map, Value};

use crate::models::CostRecord;
use crate::raters::{self, VehicleClass};

fn parse_record(values_json: &str) -> PyResult<Map<String, Value>> {
    let value: Value = serde_json::from_str(values_json)
        .map_err(|e| PyValueError::new_err(format!("invalid values JSON: {}", e)))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(PyValueError::new_err(
            "values JSON must be an object keyed by parameter id",
        )),
    }
}

fn cost_to_json(cost: &CostRecord) -> PyResult<String> {
    serde_json::to_string(cost).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Ground rater parameter schema as JSON.
#[pyfunction]
pub fn get_ground_params() -> String {
    raters::param_schema_json(VehicleClass::Ground)
}

/// Ship rater parameter schema as JSON.
#[pyfunction]
pub fn get_ship_params() -> String {
    raters::param_schema_json(VehicleClass::Ship)
}

/// Rate a ground vehicle from a JSON form-value record.
///
/// Returns the cost record as JSON. Unknown or malformed fields fall
/// back to the schema defaults; only unparseable JSON is an error.
#[pyfunction]
pub fn rate_ground(values_json: &str) -> PyResult<String> {
    let record = parse_record(values_json)?;
    cost_to_json(&raters::rate_values(VehicleClass::Ground, &record))
}

/// Rate a ship from a JSON form-value record.
#[pyfunction]
pub fn rate_ship(values_json: &str) -> PyResult<String> {
    let record = parse_record(values_json)?;
    cost_to_json(&raters::rate_values(VehicleClass::Ship, &record))
}

/// Human-readable one-line rendering of a cost record JSON.
#[pyfunction]
pub fn format_cost(cost_json: &str) -> PyResult<String> {
    let cost: CostRecord = serde_json::from_str(cost_json)
        .map_err(|e| PyValueError::new_err(format!("invalid cost JSON: {}", e)))?;
    Ok(cost.to_string())
}
