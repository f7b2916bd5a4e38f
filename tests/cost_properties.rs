//! Property tests for the cost estimate and the registry
//!
//! Verifies the single-appliance formula, the empty total, additivity over
//! concatenated sequences, and handle-based removal of duplicates.

use appliance_cost_lib::core::Appliance;
use appliance_cost_lib::pricing::{monthly_cost, parse_tariff};
use appliance_cost_lib::registry::ApplianceRegistry;
use proptest::prelude::*;

fn appliance_strategy() -> impl Strategy<Value = Appliance> {
    ("[a-zA-Z ]{0,12}", 0i64..5_000, 0i64..=24)
        .prop_map(|(name, watts, hours)| Appliance::with_default_image(&name, watts, hours))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn single_appliance_matches_formula(p in 0i64..10_000, h in 0i64..=24, t in 0.0f64..10.0) {
        let appliance = Appliance::with_default_image("x", p, h);
        let expected = (p as f64 * h as f64 / 1000.0) * 30.0 * t;
        prop_assert_eq!(monthly_cost(&[appliance], t), expected);
    }

    #[test]
    fn empty_sequence_is_zero(t in -100.0f64..100.0) {
        let empty: Vec<Appliance> = Vec::new();
        prop_assert_eq!(monthly_cost(&empty, t), 0.0);
    }

    #[test]
    fn cost_is_additive(
        a in prop::collection::vec(appliance_strategy(), 0..8),
        b in prop::collection::vec(appliance_strategy(), 0..8),
        t in 0.0f64..5.0,
    ) {
        let joined: Vec<Appliance> = a.iter().chain(b.iter()).cloned().collect();
        let whole = monthly_cost(&joined, t);
        let parts = monthly_cost(&a, t) + monthly_cost(&b, t);
        prop_assert!(close(whole, parts), "{} vs {}", whole, parts);
    }

    #[test]
    fn removing_a_duplicate_removes_exactly_one(
        appliance in appliance_strategy(),
        copies in 2usize..6,
        pick in 0usize..6,
    ) {
        let mut registry: ApplianceRegistry =
            std::iter::repeat(appliance.clone()).take(copies).collect();
        let target = registry.id_at(pick % copies).unwrap();

        prop_assert_eq!(registry.remove(target), Some(appliance.clone()));
        prop_assert_eq!(registry.len(), copies - 1);
        prop_assert!(registry.get(target).is_none());
        prop_assert!(registry.appliances().all(|a| *a == appliance));
    }

    #[test]
    fn unparseable_tariff_zeroes_cost(
        items in prop::collection::vec(appliance_strategy(), 1..6),
        text in "[a-zA-Z]{1,8}",
    ) {
        // "inf"/"nan" spellings are non-finite and also map to zero
        let tariff = parse_tariff(&text);
        prop_assert_eq!(tariff, 0.0);
        prop_assert_eq!(monthly_cost(&items, tariff), 0.0);
    }
}

#[test]
fn scenario_add_then_remove_first() {
    let mut registry = ApplianceRegistry::new();
    let fan = registry.add(Appliance::with_default_image("Ventilador", 120, 5));
    registry.add(Appliance::with_default_image("Geladeira", 300, 24));
    assert_eq!(registry.len(), 2);

    registry.add(Appliance::with_default_image("Televisor", 100, 6));
    assert_eq!(registry.len(), 3);

    registry.remove(fan);
    assert_eq!(registry.len(), 2);

    let remaining = registry.list();
    let expected = monthly_cost(&remaining[..1], 0.85) + monthly_cost(&remaining[1..], 0.85);
    assert!(close(monthly_cost(registry.appliances(), 0.85), expected));
    assert_eq!(remaining[0].name(), "Geladeira");
    assert_eq!(remaining[1].name(), "Televisor");
}
