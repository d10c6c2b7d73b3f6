use appliance_running_cost::reference_data::{
    default_country, default_price_for, list_countries, list_units, lookup_country, lookup_unit,
};
use appliance_running_cost::units::ConsumptionUnit;

#[test]
fn every_country_lookup_returns_stored_pair() {
    for entry in list_countries() {
        let found = lookup_country(entry.name).expect("country present");
        assert_eq!(found.price_per_kwh, entry.price_per_kwh);
        assert_eq!(found.emission_factor_per_kwh, entry.emission_factor_per_kwh);
    }
    assert_eq!(list_countries().len(), 27);
}

#[test]
fn known_values() {
    let de = lookup_country("Germany").unwrap();
    assert_eq!((de.price_per_kwh, de.emission_factor_per_kwh), (0.32, 0.36));
    let se = lookup_country("sweden").unwrap();
    assert_eq!((se.price_per_kwh, se.emission_factor_per_kwh), (0.18, 0.01));
    assert!(lookup_country("Norway").is_none());
}

#[test]
fn default_price_prefill() {
    assert_eq!(default_price_for("Poland"), Some(0.15));
    assert_eq!(default_price_for("Narnia"), None);
    assert_eq!(default_country().name, "Austria");
}

#[test]
fn unit_table_order_and_bases() {
    let ids: Vec<_> = list_units().iter().map(|u| u.id).collect();
    assert_eq!(ids, ["per_year", "per_100_cycles", "per_cycle", "per_1000_hours"]);
    let bases: Vec<_> = list_units().iter().map(|u| u.normalization_base).collect();
    assert_eq!(bases, [1, 100, 1, 1000]);
    assert!(!lookup_unit("per_year").unwrap().needs_usage_prompt());
    for id in ["per_100_cycles", "per_cycle", "per_1000_hours"] {
        let def = lookup_unit(id).unwrap();
        assert!(def.needs_usage_prompt(), "{id}");
        assert!(def.prompt.unwrap().contains("week"), "{id}");
    }
    assert_eq!(lookup_unit("per_cycle").unwrap().unit, ConsumptionUnit::PerCycle);
}
