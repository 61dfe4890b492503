//! Solar Wars Vehicle Rater - Rust Core
//!
//! Pure rating engine deriving the five resource costs of a described
//! vehicle design (ground unit or ship) from a small set of numeric and
//! categorical parameters, via fixed arithmetic formulas.
//!
//! # Architecture
//!
//! - **models**: shared type contracts (cost record, parameter schema)
//! - **raters**: the two rating modules (ground, ship) plus the engine
//!   shorthand parser and the vehicle-class dispatch
//! - **values**: form-value decoding at the presentation boundary
//!
//! # Critical Invariants
//!
//! 1. Rating is stateless and deterministic: one call, one result,
//!    bit-identical on repeat
//! 2. The engine never fails: malformed engine shorthand degrades to a
//!    zero-contribution sentinel, and degenerate arithmetic (a
//!    non-positive ER divisor) propagates through f64 unguarded
//! 3. `cs_upkeep` is always `ceil(cs / 6)`

// Module declarations
pub mod models;
pub mod raters;
pub mod values;

// Re-exports for convenience
pub use models::{
    cost::{upkeep_for, CostRecord},
    params::{ParamDefault, ParamDescriptor, ParamKind},
};
pub use raters::{
    engines::{parse_engine_spec, EngineEntry, EngineSize},
    ground::{ArmorClass, GroundInput, ProtectionSuite},
    param_schema_json, params_for, rate_values,
    ship::{FtlClass, ShipInput},
    RaterError, VehicleClass,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn vehicle_rater_core_rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::get_ground_params, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::get_ship_params, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::rate_ground, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::rate_ship, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::format_cost, m)?)?;
    Ok(())
}
