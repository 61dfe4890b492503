//! Ground vehicle rater
//!
//! Pure function from a ground vehicle description to its cost record.
//! All four sub-costs are closed-form arithmetic over the input plus two
//! static coefficient tables (armor and active protection); nothing is
//! cached or accumulated between calls.
//!
//! Rounding happens in two stages, matching the published design rules:
//! every sub-cost is ceiling-rounded to two decimals, then the final
//! record ceiling-rounds each field to a whole value, with ER scaled by
//! one million first (ER is quoted in a smaller unit than the other
//! currencies).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{upkeep_for, CostRecord, ParamDescriptor};
use crate::values;

/// Armor weight class of a ground vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorClass {
    None,
    Light,
    Medium,
    Heavy,
}

/// Active protection fit of a ground vehicle
///
/// Soft-kill, hard-kill, or both; raises every currency except CS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtectionSuite {
    None,
    Soft,
    Hard,
    Both,
}

/// Per-currency armor coefficients
///
/// `er` is a divisor on the squared-length term, and the divisor shrinks
/// as armor gets heavier, so heavier hulls cost more ER. CM and EL are
/// plain additive coefficients. `cs_tier` feeds the four-way CS tier
/// comparison against the dominant weapon class.
struct ArmorRates {
    er: f64,
    cm: f64,
    el: f64,
    cs_tier: u8,
}

fn armor_rates(armor: ArmorClass) -> ArmorRates {
    match armor {
        ArmorClass::Heavy => ArmorRates { er: 24.0, cm: 90.0, el: 30.0, cs_tier: 4 },
        ArmorClass::Medium => ArmorRates { er: 26.0, cm: 50.0, el: 20.0, cs_tier: 3 },
        ArmorClass::Light => ArmorRates { er: 40.0, cm: 30.0, el: 12.5, cs_tier: 2 },
        ArmorClass::None => ArmorRates { er: 100.0, cm: 20.0, el: 10.0, cs_tier: 1 },
    }
}

/// Additive active-protection coefficients (ER joins the systems multiplier)
struct ProtectionRates {
    er: f64,
    cm: f64,
    el: f64,
}

fn protection_rates(protection: ProtectionSuite) -> ProtectionRates {
    match protection {
        ProtectionSuite::Both => ProtectionRates { er: 0.3, cm: 20.0, el: 25.0 },
        ProtectionSuite::Hard => ProtectionRates { er: 0.15, cm: 10.0, el: 10.0 },
        ProtectionSuite::Soft => ProtectionRates { er: 0.1, cm: 5.0, el: 15.0 },
        ProtectionSuite::None => ProtectionRates { er: 0.0, cm: 0.0, el: 0.0 },
    }
}

/// Ground vehicle description submitted for rating
///
/// Weapon counts and lengths are `f64` and deliberately unvalidated:
/// out-of-shape values (negative counts) propagate arithmetically, as
/// input checking belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundInput {
    /// Hull length in meters
    pub length: f64,
    pub armor: ArmorClass,
    pub protection: ProtectionSuite,
    /// Heavy weapon count
    pub heavy: f64,
    /// Medium weapon count
    pub medium: f64,
    /// Light weapon count
    pub light: f64,
    /// Rocket weapon count
    pub rocket: f64,
    pub shield: bool,
    /// Additional systems count
    pub systems: f64,
}

impl Default for GroundInput {
    fn default() -> Self {
        Self {
            length: 10.0,
            armor: ArmorClass::None,
            protection: ProtectionSuite::None,
            heavy: 0.0,
            medium: 0.0,
            light: 0.0,
            rocket: 0.0,
            shield: false,
            systems: 0.0,
        }
    }
}

impl GroundInput {
    /// Decode a raw form-value record keyed by parameter id
    ///
    /// Missing or malformed fields fall back to the declared defaults;
    /// decoding is total.
    pub fn from_values(record: &Map<String, Value>) -> Self {
        let defaults = GroundInput::default();
        Self {
            length: values::number_field(record, "length", defaults.length),
            armor: values::select_field(record, "armor", defaults.armor),
            protection: values::select_field(record, "protection", defaults.protection),
            heavy: values::number_field(record, "heavy", defaults.heavy),
            medium: values::number_field(record, "medium", defaults.medium),
            light: values::number_field(record, "light", defaults.light),
            rocket: values::number_field(record, "rocket", defaults.rocket),
            shield: values::flag_field(record, "shield", defaults.shield),
            systems: values::number_field(record, "systems", defaults.systems),
        }
    }
}

/// ER sub-cost, ceiling-rounded to two decimals
///
/// The dominant weapon class discounts the armor divisor (heavy 7,
/// medium 3, otherwise 0), so arming a hull raises the squared-length
/// term on top of the per-weapon rates. With the published tables the
/// divisor never reaches zero, but a non-positive divisor is accepted
/// and yields a non-finite cost rather than an error.
fn er_cost(input: &GroundInput) -> f64 {
    let armor = armor_rates(input.armor);
    let protection = protection_rates(input.protection);

    let weapon_system_rate = if input.heavy > 0.0 {
        7.0
    } else if input.medium > 0.0 {
        3.0
    } else {
        0.0
    };

    let length_cost = input.length.powi(2) / (armor.er - weapon_system_rate);

    let heavy_cost = input.heavy * 0.9;
    let medium_cost = input.medium * 0.3;
    let light_cost = input.light * 0.03;
    let rocket_cost = input.rocket * 0.08;
    let shield_cost = if input.shield { 1.0 } else { 0.0 };

    let system_rate = 1.0 + input.systems * 0.1 + protection.er;

    (system_rate * (length_cost + heavy_cost + medium_cost + light_cost + rocket_cost + shield_cost) * 100.0)
        .ceil()
        / 100.0
}

/// CM sub-cost, ceiling-rounded to two decimals
fn cm_cost(input: &GroundInput) -> f64 {
    let armor = armor_rates(input.armor);
    let protection = protection_rates(input.protection);

    let length_cost = input.length.powi(2) / 8.5 + armor.cm + protection.cm;

    let heavy_cost = input.heavy * 10.0;
    let medium_cost = input.medium * 2.0;
    let light_cost = input.light * 0.3;
    let rocket_cost = input.rocket;
    let shield_cost = if input.shield { 5.0 } else { 0.0 };

    let system_rate = input.systems + 1.0;

    (system_rate * (length_cost + heavy_cost + medium_cost + light_cost + rocket_cost + shield_cost) * 20.0)
        .ceil()
        / 100.0
}

/// EL sub-cost, ceiling-rounded to two decimals
///
/// A shield is not a flat adder here: it lifts the whole pre-shield
/// subtotal by 10% and then adds 30.
fn el_cost(input: &GroundInput) -> f64 {
    let armor = armor_rates(input.armor);
    let protection = protection_rates(input.protection);

    let length_cost = 3.0 * (input.length.powi(2) / 85.0 + armor.el + protection.el);

    let heavy_cost = input.heavy * 6.0;
    let medium_cost = input.medium * 10.0;
    let light_cost = input.light * 0.2;
    let rocket_cost = input.rocket * 0.2;

    let system_rate = input.systems * 1.5 + 1.0;

    let subtotal = system_rate * (length_cost + heavy_cost + medium_cost + light_cost + rocket_cost);
    let total = if input.shield { subtotal * 1.1 + 30.0 } else { subtotal };

    (total * 20.0).ceil() / 100.0
}

/// CS sub-cost, ceiling-rounded to two decimals
///
/// The flat base is picked by the higher of two tiers: the dominant
/// weapon class present (heavy/rocket 4, medium 3, light 2, none 1) and
/// the armor's own CS tier. On top of that, 10% of the already-computed
/// CM and EL costs passes through.
fn cs_cost(input: &GroundInput, cost_cm: f64, cost_el: f64) -> f64 {
    let armor = armor_rates(input.armor);

    let weapon_tier: u8 = if input.heavy > 0.0 || input.rocket > 0.0 {
        4
    } else if input.medium > 0.0 {
        3
    } else if input.light > 0.0 {
        2
    } else {
        1
    };

    let base_cost = match weapon_tier.max(armor.cs_tier) {
        4 => 50.0,
        3 => 30.0,
        2 => 15.0,
        _ => 10.0,
    };

    let system_cost = input.systems * 2.5;

    ((base_cost + system_cost + 0.1 * (cost_cm + cost_el)) * 20.0).ceil() / 100.0
}

/// Rate a ground vehicle design
///
/// Stateless and deterministic: the same input always yields a
/// bit-identical record.
///
/// # Example
/// ```
/// use vehicle_rater_core_rs::GroundInput;
/// use vehicle_rater_core_rs::raters::ground;
///
/// let cost = ground::rate(&GroundInput::default());
/// assert_eq!(cost.er, 1_000_000.0);
/// assert_eq!(cost.cs_upkeep, (cost.cs / 6.0).ceil());
/// ```
pub fn rate(input: &GroundInput) -> CostRecord {
    let cost_cm = cm_cost(input);
    let cost_el = el_cost(input);
    let cost_cs = cs_cost(input, cost_cm, cost_el);

    CostRecord {
        er: (er_cost(input) * 1_000_000.0).ceil(),
        cm: cost_cm.ceil(),
        cs: cost_cs.ceil(),
        el: cost_el.ceil(),
        cs_upkeep: upkeep_for(cost_cs),
    }
}

/// Ordered parameter schema for the ground rater form
pub fn params() -> Vec<ParamDescriptor> {
    vec![
        ParamDescriptor::number("length", "Length", 10.0),
        ParamDescriptor::select("armor", "Armor", &["none", "light", "medium", "heavy"], "none"),
        ParamDescriptor::select("protection", "Protection", &["none", "soft", "hard", "both"], "none"),
        ParamDescriptor::number("heavy", "Heavy Weapons", 0.0),
        ParamDescriptor::number("medium", "Medium Weapons", 0.0),
        ParamDescriptor::number("light", "Light Weapons", 0.0),
        ParamDescriptor::number("rocket", "Rocket Weapons", 0.0),
        ParamDescriptor::flag("shield", "Shield", false),
        ParamDescriptor::number("systems", "Systems", 0.0),
    ]
}
