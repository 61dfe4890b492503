//! Shared type contracts for the vehicle raters

pub mod cost;
pub mod params;

// Re-exports
pub use cost::{upkeep_for, CostRecord};
pub use params::{ParamDefault, ParamDescriptor, ParamKind};
