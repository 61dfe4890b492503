//! Ship rater
//!
//! Pure function from a ship description to its cost record. The engine
//! shorthand field is parsed first (see [`super::engines`]); the four
//! sub-costs are then independent sums over the same structure: a
//! per-meter length term carrying the stealth and FTL surcharges, linear
//! weapon terms, flat shield bonuses, a systems term that scales with
//! hull length, cargo, and the engine groups priced by a per-currency
//! rate table.
//!
//! Drone hulls get a per-currency multiplier inside each sub-cost; boats
//! get a uniform 0.85 applied at assembly, before each final ceiling.
//! ER is quoted at x1e9 scale for ships (ground uses x1e6) - a unit
//! convention from the published design rules, not a normalization bug.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::engines::{self, EngineEntry, EngineSize};
use crate::models::{upkeep_for, CostRecord, ParamDescriptor};
use crate::values;

/// FTL drive fit of a ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FtlClass {
    /// Externally-mounted drive
    #[serde(rename = "EXT")]
    External,
    /// Internal drive
    #[serde(rename = "INT")]
    Internal,
    /// No FTL capability
    #[serde(rename = "NONE")]
    None,
}

/// Ship description submitted for rating
///
/// `engines` stays in shorthand form here; [`rate`] parses it on entry
/// and the parsed groups never outlive the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipInput {
    /// Hull length in meters
    pub length: f64,
    /// Primary weapon count
    pub main: f64,
    /// Secondary weapon count
    pub secondary: f64,
    /// Lance-like weapon count
    pub lances: f64,
    /// PDC-like weapon count
    pub pdc: f64,
    /// Torpedo/missile count
    pub torpedoes: f64,
    pub shield: bool,
    pub stealth: bool,
    /// Additional systems count
    pub systems: f64,
    /// Engine shorthand, e.g. `"4S 2M 1L"`
    pub engines: String,
    pub ftl: FtlClass,
    /// Cargo space, one unit per meter
    pub cargo: f64,
    pub drone: bool,
    /// Flat extra ER cost
    pub other: f64,
    pub boat: bool,
}

impl Default for ShipInput {
    fn default() -> Self {
        Self {
            length: 100.0,
            main: 0.0,
            secondary: 0.0,
            lances: 0.0,
            pdc: 0.0,
            torpedoes: 0.0,
            shield: false,
            stealth: false,
            systems: 0.0,
            engines: "0".to_string(),
            ftl: FtlClass::None,
            cargo: 0.0,
            drone: false,
            other: 0.0,
            boat: false,
        }
    }
}

impl ShipInput {
    /// Decode a raw form-value record keyed by parameter id
    ///
    /// Missing or malformed fields fall back to the declared defaults;
    /// decoding is total.
    pub fn from_values(record: &Map<String, Value>) -> Self {
        let defaults = ShipInput::default();
        Self {
            length: values::number_field(record, "length", defaults.length),
            main: values::number_field(record, "main", defaults.main),
            secondary: values::number_field(record, "secondary", defaults.secondary),
            lances: values::number_field(record, "lances", defaults.lances),
            pdc: values::number_field(record, "pdc", defaults.pdc),
            torpedoes: values::number_field(record, "torpedoes", defaults.torpedoes),
            shield: values::flag_field(record, "shield", defaults.shield),
            stealth: values::flag_field(record, "stealth", defaults.stealth),
            systems: values::number_field(record, "systems", defaults.systems),
            engines: values::text_field(record, "engines", &defaults.engines),
            ftl: values::select_field(record, "ftl", defaults.ftl),
            cargo: values::number_field(record, "cargo", defaults.cargo),
            drone: values::flag_field(record, "drone", defaults.drone),
            other: values::number_field(record, "other", defaults.other),
            boat: values::flag_field(record, "boat", defaults.boat),
        }
    }
}

// Per-currency engine rate tables. ER prices engines on its own scale;
// CM and EL happen to share values but are separate tables in the design
// rules.

fn engine_rate_er(size: EngineSize) -> f64 {
    match size {
        EngineSize::Small => 5.5,
        EngineSize::Medium => 7.5,
        EngineSize::Large => 10.5,
    }
}

fn engine_rate_cm(size: EngineSize) -> f64 {
    match size {
        EngineSize::Small => 50.0,
        EngineSize::Medium => 70.0,
        EngineSize::Large => 100.0,
    }
}

fn engine_rate_el(size: EngineSize) -> f64 {
    match size {
        EngineSize::Small => 50.0,
        EngineSize::Medium => 70.0,
        EngineSize::Large => 100.0,
    }
}

fn engine_rate_cs(size: EngineSize) -> f64 {
    match size {
        EngineSize::Small => 10.0,
        EngineSize::Medium => 20.0,
        EngineSize::Large => 30.0,
    }
}

/// ER sub-cost in x1e-3 units (the caller scales by 1e9)
///
/// The only sub-cost that charges `other`, and either FTL drive class
/// carries the same flat 1500 per meter.
fn er_cost(input: &ShipInput, engine_groups: &[EngineEntry]) -> f64 {
    let ftl_rate = match input.ftl {
        FtlClass::None => 0.0,
        _ => 1500.0,
    };
    let length_cost = input.length * (24.0 + if input.stealth { 2.0 } else { 0.0 } + ftl_rate);

    let main_cost = input.main * 15.0;
    let secondary_cost = input.secondary * 10.0;
    let lance_cost = input.lances * 50.0;
    let pdc_cost = input.pdc * 5.0;
    let torpedo_cost = input.torpedoes * 5.0;

    let other_cost = input.other;
    let shield_cost = if input.shield { 300.0 } else { 0.0 };
    let system_cost = input.systems * input.length;

    let cargo_cost = input.cargo;
    let drone_rate = if input.drone { 0.85 } else { 1.0 };

    let engine_cost = engines::engine_term(engine_groups, engine_rate_er);

    (length_cost + main_cost + secondary_cost + lance_cost + pdc_cost + torpedo_cost
        + shield_cost + system_cost + engine_cost + other_cost + cargo_cost)
        * drone_rate
        / 1000.0
}

/// CM sub-cost
///
/// Internal FTL drives cost more CM than external mounts (60 vs 40 per
/// meter); drones pay a 1.2 markup.
fn cm_cost(input: &ShipInput, engine_groups: &[EngineEntry]) -> f64 {
    let ftl_rate = match input.ftl {
        FtlClass::None => 0.0,
        FtlClass::Internal => 60.0,
        FtlClass::External => 40.0,
    };
    let length_cost = input.length * (50.0 + if input.stealth { 20.0 } else { 0.0 } + ftl_rate);

    let main_cost = input.main * 100.0;
    let secondary_cost = input.secondary * 50.0;
    let lance_cost = input.lances * 300.0;
    let pdc_cost = input.pdc * 25.0;
    let torpedo_cost = input.torpedoes * 25.0;

    let shield_cost = if input.shield { 1000.0 } else { 0.0 };
    let system_cost = input.systems * input.length;

    let cargo_cost = input.cargo * 10.0;
    let drone_rate = if input.drone { 1.2 } else { 1.0 };

    let engine_cost = engines::engine_term(engine_groups, engine_rate_cm);

    (length_cost + main_cost + secondary_cost + lance_cost + pdc_cost + torpedo_cost
        + shield_cost + system_cost + engine_cost + cargo_cost)
        * drone_rate
}

/// EL sub-cost
///
/// No base per-meter rate: an unshielded, non-stealth hull with no FTL
/// draws nothing for bare length. Drones pay a 1.5 markup.
fn el_cost(input: &ShipInput, engine_groups: &[EngineEntry]) -> f64 {
    let ftl_rate = match input.ftl {
        FtlClass::None => 0.0,
        FtlClass::Internal => 20.0,
        FtlClass::External => 10.0,
    };
    let length_cost = input.length * (if input.stealth { 10.0 } else { 0.0 } + ftl_rate);

    let main_cost = input.main * 100.0;
    let secondary_cost = input.secondary * 100.0;
    let lance_cost = input.lances * 200.0;
    let pdc_cost = input.pdc * 100.0;
    let torpedo_cost = input.torpedoes * 100.0;

    let shield_cost = if input.shield { 1000.0 } else { 0.0 };
    let system_cost = input.systems * input.length * 2.0;

    let cargo_cost = input.cargo * 5.0;
    let drone_rate = if input.drone { 1.5 } else { 1.0 };

    let engine_cost = engines::engine_term(engine_groups, engine_rate_el);

    (length_cost + main_cost + secondary_cost + lance_cost + pdc_cost + torpedo_cost
        + shield_cost + system_cost + engine_cost + cargo_cost)
        * drone_rate
}

/// CS sub-cost
///
/// Crew-side pricing ignores torpedoes, shields, stealth, and cargo;
/// drones halve it.
fn cs_cost(input: &ShipInput, engine_groups: &[EngineEntry]) -> f64 {
    let ftl_rate = match input.ftl {
        FtlClass::None => 0.0,
        _ => 10.0,
    };
    let length_cost = input.length * (5.0 + ftl_rate);

    let main_cost = input.main * 10.0;
    let secondary_cost = input.secondary * 10.0;
    let lance_cost = input.lances * 20.0;
    let pdc_cost = input.pdc * 10.0;

    let system_cost = input.systems * input.length * 2.0;

    let drone_rate = if input.drone { 0.5 } else { 1.0 };

    let engine_cost = engines::engine_term(engine_groups, engine_rate_cs);

    (length_cost + main_cost + secondary_cost + lance_cost + pdc_cost + system_cost + engine_cost)
        * drone_rate
}

/// Rate a ship design
///
/// Parses the engine shorthand (fallback size Medium), computes the four
/// independent sub-costs, applies the uniform boat multiplier, and
/// assembles the final record. Stateless and deterministic.
///
/// # Example
/// ```
/// use vehicle_rater_core_rs::ShipInput;
/// use vehicle_rater_core_rs::raters::ship;
///
/// let cost = ship::rate(&ShipInput::default());
/// assert_eq!(cost.cm, 5000.0);
/// assert_eq!(cost.cs_upkeep, (cost.cs / 6.0).ceil());
/// ```
pub fn rate(input: &ShipInput) -> CostRecord {
    let multiplier = if input.boat { 0.85 } else { 1.0 };
    let engine_groups = engines::parse_engine_spec(&input.engines, EngineSize::Medium);

    let cost_cs = cs_cost(input, &engine_groups);

    CostRecord {
        er: (er_cost(input, &engine_groups) * 1_000_000_000.0 * multiplier).ceil(),
        cm: (cm_cost(input, &engine_groups) * multiplier).ceil(),
        cs: (cost_cs * multiplier).ceil(),
        el: (el_cost(input, &engine_groups) * multiplier).ceil(),
        cs_upkeep: upkeep_for(cost_cs * multiplier),
    }
}

/// Ordered parameter schema for the ship rater form
pub fn params() -> Vec<ParamDescriptor> {
    vec![
        ParamDescriptor::number("length", "Length of the Ship", 100.0),
        ParamDescriptor::number("main", "Primary Weapon Count", 0.0),
        ParamDescriptor::number("secondary", "Secondary Weapon Count", 0.0),
        ParamDescriptor::number("lances", "Lance-like Weapon Count", 0.0),
        ParamDescriptor::number("pdc", "PDC-like Weapon Count", 0.0),
        ParamDescriptor::number("torpedoes", "Torpedo/Missile Count", 0.0),
        ParamDescriptor::flag("shield", "Has a Shield", false),
        ParamDescriptor::flag("stealth", "Has Stealth", false),
        ParamDescriptor::number("systems", "Additional systems", 0.0),
        ParamDescriptor::text("engines", "Engines (format: '4S 2M 1L')", "0"),
        ParamDescriptor::select("ftl", "FTL Type", &["EXT", "INT", "NONE"], "NONE"),
        ParamDescriptor::number("cargo", "Cargo Space (1 unit per meter)", 0.0),
        ParamDescriptor::flag("drone", "Is a drone", false),
        ParamDescriptor::number("other", "Other Costs", 0.0),
        ParamDescriptor::flag("boat", "Is a boat", false),
    ]
}
