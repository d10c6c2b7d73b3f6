use appliance_running_cost::units::{convert_energy, convert_mass, EnergyUnit, MassUnit};

#[test]
fn kwh_to_megajoule() {
    let mj = convert_energy(1.0, EnergyUnit::KilowattHour, EnergyUnit::Megajoule);
    assert!((mj - 3.6).abs() < 1e-12);
    let kj = convert_energy(3.6, EnergyUnit::Megajoule, EnergyUnit::Kilojoule);
    assert!((kj - 3600.0).abs() < 1e-9);
}

#[test]
fn co2_mass_units() {
    assert!((convert_mass(72.0, MassUnit::Kilogram, MassUnit::Tonne) - 0.072).abs() < 1e-12);
    assert!((convert_mass(1.0, MassUnit::Kilogram, MassUnit::Pound) - 2.204624).abs() < 1e-5);
    assert!((convert_mass(500.0, MassUnit::Gram, MassUnit::Kilogram) - 0.5).abs() < 1e-12);
}
