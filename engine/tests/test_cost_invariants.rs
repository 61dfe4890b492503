//! Property tests for the rating invariants
//!
//! - `cs_upkeep == ceil(cs / 6)` for every input, both raters
//! - non-negative inputs yield non-negative, finite records
//! - er/cm/el never decrease when length or a weapon count grows
//! - the boat multiplier never raises a field
//! - the shorthand parser is total and its sentinel stands alone

use proptest::prelude::*;

use vehicle_rater_core_rs::raters::{ground, ship};
use vehicle_rater_core_rs::{
    parse_engine_spec, ArmorClass, EngineSize, FtlClass, GroundInput, ProtectionSuite, ShipInput,
};

fn armor_strategy() -> impl Strategy<Value = ArmorClass> {
    prop_oneof![
        Just(ArmorClass::None),
        Just(ArmorClass::Light),
        Just(ArmorClass::Medium),
        Just(ArmorClass::Heavy),
    ]
}

fn protection_strategy() -> impl Strategy<Value = ProtectionSuite> {
    prop_oneof![
        Just(ProtectionSuite::None),
        Just(ProtectionSuite::Soft),
        Just(ProtectionSuite::Hard),
        Just(ProtectionSuite::Both),
    ]
}

fn ftl_strategy() -> impl Strategy<Value = FtlClass> {
    prop_oneof![
        Just(FtlClass::External),
        Just(FtlClass::Internal),
        Just(FtlClass::None),
    ]
}

prop_compose! {
    fn ground_input_strategy()(
        length in 0.0f64..400.0,
        armor in armor_strategy(),
        protection in protection_strategy(),
        heavy in 0u32..30,
        medium in 0u32..30,
        light in 0u32..60,
        rocket in 0u32..30,
        shield in any::<bool>(),
        systems in 0u32..12,
    ) -> GroundInput {
        GroundInput {
            length,
            armor,
            protection,
            heavy: heavy as f64,
            medium: medium as f64,
            light: light as f64,
            rocket: rocket as f64,
            shield,
            systems: systems as f64,
        }
    }
}

prop_compose! {
    fn ship_hull_strategy()(
        length in 0.0f64..600.0,
        main in 0u32..20,
        secondary in 0u32..20,
        lances in 0u32..10,
        pdc in 0u32..40,
        torpedoes in 0u32..40,
        systems in 0u32..10,
        engines in "[0-9SML x]{0,12}",
        cargo in 0u32..100,
    ) -> ShipInput {
        ShipInput {
            length,
            main: main as f64,
            secondary: secondary as f64,
            lances: lances as f64,
            pdc: pdc as f64,
            torpedoes: torpedoes as f64,
            systems: systems as f64,
            engines,
            cargo: cargo as f64,
            ..ShipInput::default()
        }
    }
}

prop_compose! {
    fn ship_input_strategy()(
        hull in ship_hull_strategy(),
        shield in any::<bool>(),
        stealth in any::<bool>(),
        ftl in ftl_strategy(),
        drone in any::<bool>(),
        other in 0u32..1000,
        boat in any::<bool>(),
    ) -> ShipInput {
        ShipInput {
            shield,
            stealth,
            ftl,
            drone,
            other: other as f64,
            boat,
            ..hull
        }
    }
}

proptest! {
    #[test]
    fn ground_upkeep_is_sixth_of_cs(input in ground_input_strategy()) {
        let cost = ground::rate(&input);
        prop_assert_eq!(cost.cs_upkeep, (cost.cs / 6.0).ceil());
    }

    #[test]
    fn ship_upkeep_is_sixth_of_cs(input in ship_input_strategy()) {
        let cost = ship::rate(&input);
        prop_assert_eq!(cost.cs_upkeep, (cost.cs / 6.0).ceil());
    }

    #[test]
    fn ground_costs_finite_and_non_negative(input in ground_input_strategy()) {
        let cost = ground::rate(&input);
        for field in [cost.er, cost.cm, cost.cs, cost.el, cost.cs_upkeep] {
            prop_assert!(field.is_finite());
            prop_assert!(field >= 0.0);
        }
    }

    #[test]
    fn ship_costs_finite_and_non_negative(input in ship_input_strategy()) {
        let cost = ship::rate(&input);
        for field in [cost.er, cost.cm, cost.cs, cost.el, cost.cs_upkeep] {
            prop_assert!(field.is_finite());
            prop_assert!(field >= 0.0);
        }
    }

    #[test]
    fn ground_growth_never_cheapens(input in ground_input_strategy(), bump in 1u32..5) {
        let base = ground::rate(&input);
        let bump = bump as f64;

        let longer = ground::rate(&GroundInput { length: input.length + bump, ..input.clone() });
        prop_assert!(longer.er >= base.er);
        prop_assert!(longer.cm >= base.cm);
        prop_assert!(longer.el >= base.el);

        let armed = ground::rate(&GroundInput { heavy: input.heavy + bump, ..input.clone() });
        prop_assert!(armed.er >= base.er);
        prop_assert!(armed.cm >= base.cm);
        prop_assert!(armed.el >= base.el);

        let rockets = ground::rate(&GroundInput { rocket: input.rocket + bump, ..input.clone() });
        prop_assert!(rockets.er >= base.er);
        prop_assert!(rockets.cm >= base.cm);
        prop_assert!(rockets.el >= base.el);
    }

    #[test]
    fn ship_growth_never_cheapens(input in ship_input_strategy(), bump in 1u32..5) {
        let base = ship::rate(&input);
        let bump = bump as f64;

        let longer = ship::rate(&ShipInput { length: input.length + bump, ..input.clone() });
        prop_assert!(longer.er >= base.er);
        prop_assert!(longer.cm >= base.cm);
        prop_assert!(longer.el >= base.el);

        let armed = ship::rate(&ShipInput { main: input.main + bump, ..input.clone() });
        prop_assert!(armed.er >= base.er);
        prop_assert!(armed.cm >= base.cm);
        prop_assert!(armed.el >= base.el);

        let lances = ship::rate(&ShipInput { lances: input.lances + bump, ..input.clone() });
        prop_assert!(lances.er >= base.er);
        prop_assert!(lances.cm >= base.cm);
        prop_assert!(lances.el >= base.el);
    }

    #[test]
    fn boat_never_raises_a_field(input in ship_input_strategy()) {
        let plain = ship::rate(&ShipInput { boat: false, ..input.clone() });
        let boat = ship::rate(&ShipInput { boat: true, ..input });

        prop_assert!(boat.er <= plain.er);
        prop_assert!(boat.cm <= plain.cm);
        prop_assert!(boat.cs <= plain.cs);
        prop_assert!(boat.el <= plain.el);
        prop_assert!(boat.cs_upkeep <= plain.cs_upkeep);
    }

    #[test]
    fn rating_is_deterministic(ground_fit in ground_input_strategy(), ship_fit in ship_input_strategy()) {
        prop_assert_eq!(ground::rate(&ground_fit), ground::rate(&ground_fit));
        prop_assert_eq!(ship::rate(&ship_fit), ship::rate(&ship_fit));
    }

    #[test]
    fn parser_is_total(spec in "\\PC*") {
        let groups = parse_engine_spec(&spec, EngineSize::Medium);
        prop_assert!(!groups.is_empty());
        // The sentinel only ever appears alone.
        if groups.iter().any(|g| g.is_unset()) {
            prop_assert_eq!(groups.len(), 1);
        }
    }
}
