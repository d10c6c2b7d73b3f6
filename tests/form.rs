//! 폼 상태 규칙(가격 자동 입력, 사용량 초기화, 결과 초기화) 테스트.
use appliance_running_cost::estimate::EstimateError;
use appliance_running_cost::form::CalculatorForm;
use appliance_running_cost::units::ConsumptionUnit;

#[test]
fn default_form_uses_first_country_price() {
    let form = CalculatorForm::default();
    assert_eq!(form.country, "Austria");
    assert_eq!(form.electricity_price, "0.22");
    assert_eq!(form.unit, ConsumptionUnit::PerYear);
    assert!(form.usage_prompt().is_none());
}

#[test]
fn selecting_country_prefills_price() {
    let mut form = CalculatorForm::default();
    form.select_country("Denmark");
    assert_eq!(form.electricity_price, "0.34");
    form.select_country("Nowhere");
    assert_eq!(form.electricity_price, "0");
}

#[test]
fn user_price_survives_calculation() {
    let mut form = CalculatorForm::new("Germany");
    form.electricity_price = "0.40".into();
    form.label_consumption = "100".into();
    let res = form.calculate().unwrap();
    assert!((res.annual_cost - 40.0).abs() < 1e-9);
    assert_eq!(form.electricity_price, "0.40");
}

#[test]
fn switching_to_per_year_clears_usage() {
    let mut form = CalculatorForm::default();
    form.select_unit(ConsumptionUnit::PerCycle);
    form.weekly_usage = "5".into();
    form.select_unit(ConsumptionUnit::Per1000Hours);
    assert_eq!(form.weekly_usage, "5");
    form.select_unit(ConsumptionUnit::PerYear);
    assert!(form.weekly_usage.is_empty());
}

#[test]
fn error_clears_previous_result() {
    let mut form = CalculatorForm::new("Sweden");
    form.label_consumption = "1.2".into();
    form.select_unit_id("per_cycle").unwrap();
    form.weekly_usage = "5".into();
    assert!(form.calculate().is_ok());
    assert!(form.result().is_some());

    form.weekly_usage.clear();
    assert_eq!(form.calculate().unwrap_err(), EstimateError::InvalidUsage);
    assert!(form.result().is_none());
    assert_eq!(form.error(), Some(&EstimateError::InvalidUsage));

    form.weekly_usage = "2".into();
    form.calculate().unwrap();
    assert!(form.error().is_none());
}

#[test]
fn unknown_unit_id_is_reported() {
    let mut form = CalculatorForm::default();
    assert_eq!(
        form.select_unit_id("per_decade").unwrap_err(),
        EstimateError::UnknownUnit("per_decade".into())
    );
    assert_eq!(form.unit, ConsumptionUnit::PerYear);
}

#[test]
fn help_follows_appliance() {
    let mut form = CalculatorForm::default();
    form.select_appliance("Washing Machines");
    assert_eq!(form.help().typical_unit, ConsumptionUnit::Per100Cycles);
    form.select_appliance("Sauna");
    assert_eq!(form.help().title, "Energy label");
}
