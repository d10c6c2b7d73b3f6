//! 연간 kWh 정규화와 요금/CO2 계산 회귀 테스트.
use appliance_running_cost::estimate::{
    estimate_annual_cost_and_emissions, estimate_from_form, format_amount, CalculationInput,
    EstimateError, FormInput,
};
use appliance_running_cost::reference_data::{lookup_country, lookup_unit};
use appliance_running_cost::units::ConsumptionUnit;

const EPS: f64 = 1e-9;

fn input<'a>(
    price: &'a str,
    consumption: &'a str,
    unit: ConsumptionUnit,
    usage: Option<&'a str>,
    factor: f64,
) -> CalculationInput<'a> {
    CalculationInput {
        electricity_price: price,
        label_consumption_kwh: consumption,
        unit: unit.def(),
        weekly_usage: usage,
        emission_factor: factor,
    }
}

#[test]
fn per_year_ignores_usage() {
    for usage in [None, Some(""), Some("abc"), Some("7")] {
        let res = estimate_annual_cost_and_emissions(&input(
            "0.25",
            "150",
            ConsumptionUnit::PerYear,
            usage,
            0.4,
        ))
        .expect("per_year estimate");
        assert!((res.total_annual_kwh - 150.0).abs() < EPS);
        assert!((res.annual_cost - 150.0 * 0.25).abs() < EPS);
        assert!((res.annual_co2_kg - 150.0 * 0.4).abs() < EPS);
    }
}

#[test]
fn per_cycle_multiplies_by_weekly_usage_times_52() {
    let res = estimate_annual_cost_and_emissions(&input(
        "0.2",
        "0.9",
        ConsumptionUnit::PerCycle,
        Some("3"),
        0.1,
    ))
    .unwrap();
    let kwh = 0.9 * 3.0 * 52.0;
    assert!((res.total_annual_kwh - kwh).abs() < EPS);
    assert!((res.annual_cost - kwh * 0.2).abs() < EPS);
}

#[test]
fn per_100_cycles_divides_by_100() {
    let res = estimate_annual_cost_and_emissions(&input(
        "0.3",
        "54",
        ConsumptionUnit::Per100Cycles,
        Some("4"),
        0.2,
    ))
    .unwrap();
    let kwh = 54.0 * (4.0 * 52.0) / 100.0;
    assert!((res.total_annual_kwh - kwh).abs() < EPS, "{}", res.total_annual_kwh);
    assert!((res.annual_co2_kg - kwh * 0.2).abs() < EPS);
}

#[test]
fn per_1000_hours_divides_by_1000() {
    let res = estimate_annual_cost_and_emissions(&input(
        "0.3",
        "120",
        ConsumptionUnit::Per1000Hours,
        Some("10"),
        0.2,
    ))
    .unwrap();
    let kwh = 120.0 * (10.0 * 52.0) / 1000.0;
    assert!((res.total_annual_kwh - kwh).abs() < EPS);
}

#[test]
fn zero_usage_gives_zero_totals() {
    let res = estimate_annual_cost_and_emissions(&input(
        "0.3",
        "1.2",
        ConsumptionUnit::PerCycle,
        Some("0"),
        0.2,
    ))
    .unwrap();
    assert_eq!(res.total_annual_kwh, 0.0);
    assert_eq!(res.annual_cost, 0.0);
}

#[test]
fn consumption_must_be_strictly_positive() {
    for bad in ["0", "-1", "", "abc"] {
        let err = estimate_annual_cost_and_emissions(&input(
            "0.3",
            bad,
            ConsumptionUnit::PerYear,
            None,
            0.2,
        ))
        .unwrap_err();
        assert_eq!(err, EstimateError::InvalidConsumption, "input {bad:?}");
    }
}

#[test]
fn negative_price_rejected_zero_price_accepted() {
    let err = estimate_annual_cost_and_emissions(&input(
        "-0.01",
        "100",
        ConsumptionUnit::PerYear,
        None,
        0.2,
    ))
    .unwrap_err();
    assert_eq!(err, EstimateError::InvalidPrice);

    let res = estimate_annual_cost_and_emissions(&input(
        "0",
        "100",
        ConsumptionUnit::PerYear,
        None,
        0.2,
    ))
    .unwrap();
    assert_eq!(res.annual_cost, 0.0);
}

#[test]
fn usage_required_for_prompted_units() {
    for unit in [
        ConsumptionUnit::Per100Cycles,
        ConsumptionUnit::PerCycle,
        ConsumptionUnit::Per1000Hours,
    ] {
        for bad in [None, Some(""), Some("many"), Some("-2")] {
            let err = estimate_annual_cost_and_emissions(&input("0.3", "10", unit, bad, 0.2))
                .unwrap_err();
            assert_eq!(err, EstimateError::InvalidUsage, "{unit:?} {bad:?}");
        }
    }
}

#[test]
fn first_violation_wins() {
    let err = estimate_annual_cost_and_emissions(&input(
        "x",
        "0",
        ConsumptionUnit::PerCycle,
        None,
        0.2,
    ))
    .unwrap_err();
    assert_eq!(err, EstimateError::InvalidPrice);

    let err = estimate_annual_cost_and_emissions(&input(
        "0.1",
        "0",
        ConsumptionUnit::PerCycle,
        None,
        0.2,
    ))
    .unwrap_err();
    assert_eq!(err, EstimateError::InvalidConsumption);
}

#[test]
fn germany_per_year_scenario() {
    let de = lookup_country("Germany").unwrap();
    let res = estimate_annual_cost_and_emissions(&CalculationInput {
        electricity_price: "0.32",
        label_consumption_kwh: "200",
        unit: lookup_unit("per_year").unwrap(),
        weekly_usage: None,
        emission_factor: de.emission_factor_per_kwh,
    })
    .unwrap();
    assert_eq!(format_amount(res.annual_cost), "64.00");
    assert_eq!(format_amount(res.annual_co2_kg), "72.00");
}

#[test]
fn sweden_per_cycle_scenario() {
    let res = estimate_from_form(&FormInput {
        country: "Sweden",
        electricity_price: "0.18",
        unit_id: "per_cycle",
        label_consumption_kwh: "1.2",
        weekly_usage: "5",
    })
    .unwrap();
    assert!((res.total_annual_kwh - 312.0).abs() < 1e-9);
    assert_eq!(format_amount(res.annual_cost), "56.16");
    assert_eq!(format_amount(res.annual_co2_kg), "3.12");
}

#[test]
fn form_price_overrides_country_price() {
    let res = estimate_from_form(&FormInput {
        country: "Germany",
        electricity_price: "0.50",
        unit_id: "per_year",
        label_consumption_kwh: "100",
        weekly_usage: "",
    })
    .unwrap();
    assert!((res.annual_cost - 50.0).abs() < EPS);
    assert!((res.annual_co2_kg - 36.0).abs() < EPS);
}

#[test]
fn form_reports_unknown_country_and_unit() {
    let mut form = FormInput {
        country: "Atlantis",
        electricity_price: "0.2",
        unit_id: "per_year",
        label_consumption_kwh: "100",
        weekly_usage: "",
    };
    assert_eq!(
        estimate_from_form(&form).unwrap_err(),
        EstimateError::UnknownCountry("Atlantis".into())
    );
    form.unit_id = "per_week";
    assert_eq!(
        estimate_from_form(&form).unwrap_err(),
        EstimateError::UnknownUnit("per_week".into())
    );
    // 가격 오류가 국가/단위 조회보다 먼저다.
    form.electricity_price = "";
    assert_eq!(estimate_from_form(&form).unwrap_err(), EstimateError::InvalidPrice);
}

#[test]
fn repeated_calls_are_identical() {
    let i = input("0.27", "75", ConsumptionUnit::Per100Cycles, Some("4"), 0.16);
    let a = estimate_annual_cost_and_emissions(&i).unwrap();
    let b = estimate_annual_cost_and_emissions(&i).unwrap();
    assert_eq!(a, b);
}

#[test]
fn negative_zero_inputs_render_as_zero() {
    let res = estimate_from_form(&FormInput {
        country: "Germany",
        electricity_price: "-0",
        unit_id: "per_year",
        label_consumption_kwh: "200",
        weekly_usage: "",
    })
    .unwrap();
    assert_eq!(format_amount(res.annual_cost), "0.00");

    let res = estimate_from_form(&FormInput {
        country: "Sweden",
        electricity_price: "0.18",
        unit_id: "per_cycle",
        label_consumption_kwh: "1.2",
        weekly_usage: "-0",
    })
    .unwrap();
    assert_eq!(format_amount(res.annual_cost), "0.00");
    assert_eq!(format_amount(res.annual_co2_kg), "0.00");
}

#[test]
fn overflowing_totals_are_rejected() {
    let err = estimate_annual_cost_and_emissions(&input(
        "0.2",
        "10",
        ConsumptionUnit::PerCycle,
        Some("1e308"),
        0.3,
    ))
    .unwrap_err();
    assert_eq!(err, EstimateError::InvalidUsage);

    let err = estimate_annual_cost_and_emissions(&input(
        "1e308",
        "1e10",
        ConsumptionUnit::PerYear,
        None,
        0.3,
    ))
    .unwrap_err();
    assert_eq!(err, EstimateError::InvalidPrice);
}
