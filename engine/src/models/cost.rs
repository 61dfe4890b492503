//! Vehicle cost record
//!
//! The five derived resource costs returned by every rating call.
//! Fields are whole values after the final ceiling pass, but stay `f64`
//! because degenerate ground inputs can legally produce a non-finite ER
//! (division by a non-positive armor divisor is accepted, not clamped).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five resource costs of a rated vehicle design
///
/// `cs_upkeep` is not an independent quantity: it is always
/// `ceil(cs / 6)`, the recurring share of the CS price.
///
/// # Example
/// ```
/// use vehicle_rater_core_rs::CostRecord;
///
/// let cost = CostRecord {
///     er: 1_000_000.0,
///     cm: 7.0,
///     cs: 3.0,
///     el: 7.0,
///     cs_upkeep: 1.0,
/// };
/// assert_eq!(cost.to_string(), "1000000 ER, 7 CM, 3 CS, 7 EL, 1 CS Upkeep");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    /// ER price. Scaled by a per-vehicle-class unit convention
    /// (x1e6 for ground, x1e9 for ships), so its magnitude dwarfs
    /// the other four fields.
    pub er: f64,

    /// CM price
    pub cm: f64,

    /// CS price
    pub cs: f64,

    /// EL price
    pub el: f64,

    /// Recurring CS cost, one sixth of CS rounded up
    pub cs_upkeep: f64,
}

/// Recurring CS cost for a given CS price
///
/// Both raters derive the upkeep from the pre-ceiling CS subtotal; the
/// result is identical to `ceil(cs_final / 6)` because rounding the
/// numerator up first never changes a ceiling division by six.
pub fn upkeep_for(cs: f64) -> f64 {
    (cs / 6.0).ceil()
}

impl fmt::Display for CostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ER, {} CM, {} CS, {} EL, {} CS Upkeep",
            self.er, self.cm, self.cs, self.el, self.cs_upkeep
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upkeep_rounds_up() {
        assert_eq!(upkeep_for(0.0), 0.0);
        assert_eq!(upkeep_for(1.0), 1.0);
        assert_eq!(upkeep_for(6.0), 1.0);
        assert_eq!(upkeep_for(6.1), 2.0);
        assert_eq!(upkeep_for(500.0), 84.0);
    }

    #[test]
    fn test_upkeep_agrees_with_ceiled_cs() {
        // ceil(ceil(x)/6) == ceil(x/6) for the raw subtotals both raters feed in
        for raw in [0.01, 2.27, 5.99, 6.0, 10.85, 424.9, 500.0, 610.0] {
            assert_eq!(upkeep_for(raw), (raw.ceil() / 6.0).ceil(), "raw = {}", raw);
        }
    }

    #[test]
    fn test_display_format() {
        let cost = CostRecord {
            er: 2_400_000_000.0,
            cm: 5000.0,
            cs: 500.0,
            el: 0.0,
            cs_upkeep: 84.0,
        };
        assert_eq!(
            cost.to_string(),
            "2400000000 ER, 5000 CM, 500 CS, 0 EL, 84 CS Upkeep"
        );
    }

    #[test]
    fn test_cost_record_serialize_deserialize() {
        let cost = CostRecord {
            er: 1_000_000.0,
            cm: 7.0,
            cs: 3.0,
            el: 7.0,
            cs_upkeep: 1.0,
        };
        let json = serde_json::to_string(&cost).unwrap();
        let restored: CostRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(cost, restored);
    }
}
