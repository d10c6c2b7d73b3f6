//! 라벨 소비량과 사용량을 연간 kWh로 정규화하고 연간 요금/CO2 배출량을 계산한다.
//!
//! 모든 함수는 순수 함수이며, 참조 데이터 외의 상태를 갖지 않는다.

use crate::reference_data::{lookup_country, lookup_unit};
use crate::units::{ConsumptionUnit, ConsumptionUnitDef};

/// 사용량 기반 단위에서 연간 환산에 쓰는 주 수. 달력 기준 일수는 사용하지 않는다.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// 입력 검증 오류. 모두 사용자 입력 문제이며 시스템 오류는 없다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// 전기요금이 숫자가 아니거나 음수
    InvalidPrice,
    /// 라벨 소비량이 숫자가 아니거나 0 이하
    InvalidConsumption,
    /// 사용량이 필요한 단위인데 값이 없거나 음수
    InvalidUsage,
    /// 국가 표에 없는 국가
    UnknownCountry(String),
    /// 정의되지 않은 소비량 단위
    UnknownUnit(String),
}

impl std::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateError::InvalidPrice => write!(f, "Please enter a valid electricity price."),
            EstimateError::InvalidConsumption => {
                write!(f, "Please enter a valid energy consumption from the label.")
            }
            EstimateError::InvalidUsage => write!(f, "Please enter your estimated usage."),
            EstimateError::UnknownCountry(c) => write!(f, "Unknown country: {c}"),
            EstimateError::UnknownUnit(u) => write!(f, "Unknown consumption unit: {u}"),
        }
    }
}

impl std::error::Error for EstimateError {}

/// 계산 입력. 가격/소비량/사용량은 폼에서 받은 문자열 그대로 전달한다.
#[derive(Debug, Clone)]
pub struct CalculationInput<'a> {
    /// 전기요금 [EUR/kWh]
    pub electricity_price: &'a str,
    /// 라벨 소비량 [kWh / 단위]
    pub label_consumption_kwh: &'a str,
    pub unit: &'static ConsumptionUnitDef,
    /// 주간 사용량(회 또는 시간). 사용량이 필요 없는 단위에서는 무시된다.
    pub weekly_usage: Option<&'a str>,
    /// 배출계수 [kg CO2e/kWh]
    pub emission_factor: f64,
}

/// 폼 단위 입력. 국가와 단위를 이름/식별자로 받는다.
#[derive(Debug, Clone)]
pub struct FormInput<'a> {
    pub country: &'a str,
    pub electricity_price: &'a str,
    pub unit_id: &'a str,
    pub label_consumption_kwh: &'a str,
    pub weekly_usage: &'a str,
}

/// 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// 연간 환산 소비량 [kWh/년]
    pub total_annual_kwh: f64,
    /// 연간 요금 [EUR/년]
    pub annual_cost: f64,
    /// 연간 CO2 배출량 [kg/년]
    pub annual_co2_kg: f64,
}

/// 유한한 숫자만 받는다. "-0"은 0으로 정규화한다.
fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v + 0.0)
}

/// 전기요금 문자열을 검증한다. 0 이상이어야 한다.
pub fn parse_price(text: &str) -> Result<f64, EstimateError> {
    parse_number(text)
        .filter(|v| *v >= 0.0)
        .ok_or(EstimateError::InvalidPrice)
}

/// 라벨 소비량 문자열을 검증한다. 0보다 커야 한다.
pub fn parse_consumption(text: &str) -> Result<f64, EstimateError> {
    parse_number(text)
        .filter(|v| *v > 0.0)
        .ok_or(EstimateError::InvalidConsumption)
}

/// 주간 사용량 문자열을 검증한다. 0 이상이어야 한다.
pub fn parse_weekly_usage(text: Option<&str>) -> Result<f64, EstimateError> {
    text.and_then(parse_number)
        .filter(|v| *v >= 0.0)
        .ok_or(EstimateError::InvalidUsage)
}

/// 라벨 소비량을 연간 kWh로 환산한다.
///
/// `per_year` 단위는 사용량과 무관하게 계수 1을 쓰고, 나머지는
/// `주간 사용량 × 52 / 정규화 기준`을 곱한다. 사용량은 호출 전에 검증되어 있어야 한다.
fn total_annual_kwh(
    label_consumption_kwh: f64,
    unit: &ConsumptionUnitDef,
    weekly_usage: Option<f64>,
) -> f64 {
    let usage_factor = if unit.unit == ConsumptionUnit::PerYear {
        1.0
    } else {
        let annual_usage = weekly_usage.unwrap_or(0.0) * WEEKS_PER_YEAR;
        annual_usage / f64::from(unit.normalization_base)
    };
    label_consumption_kwh * usage_factor
}

/// 입력을 검증한 뒤 연간 요금과 CO2 배출량을 계산한다.
///
/// 검증 순서는 가격, 소비량, 사용량이며 처음 발견된 오류를 반환한다.
pub fn estimate_annual_cost_and_emissions(
    input: &CalculationInput<'_>,
) -> Result<CalculationResult, EstimateError> {
    let price = parse_price(input.electricity_price)?;
    let consumption = parse_consumption(input.label_consumption_kwh)?;
    let weekly_usage = if input.unit.needs_usage_prompt() {
        Some(parse_weekly_usage(input.weekly_usage)?)
    } else {
        None
    };

    let total = total_annual_kwh(consumption, input.unit, weekly_usage);
    if !total.is_finite() {
        return Err(if weekly_usage.is_some() {
            EstimateError::InvalidUsage
        } else {
            EstimateError::InvalidConsumption
        });
    }
    let annual_cost = total * price;
    if !annual_cost.is_finite() {
        return Err(EstimateError::InvalidPrice);
    }
    let result = CalculationResult {
        total_annual_kwh: total,
        annual_cost,
        annual_co2_kg: total * input.emission_factor,
    };
    tracing::debug!(
        unit = input.unit.id,
        total_annual_kwh = result.total_annual_kwh,
        annual_cost = result.annual_cost,
        annual_co2_kg = result.annual_co2_kg,
        "estimate computed"
    );
    Ok(result)
}

/// 폼 값(국가명, 단위 식별자 포함)으로 계산한다.
///
/// 가격/소비량을 먼저 검증하고, 이어서 단위와 국가를 조회한 다음 사용량을 검증한다.
/// 배출계수는 국가 표에서, 가격은 사용자가 입력한 값을 사용한다.
pub fn estimate_from_form(form: &FormInput<'_>) -> Result<CalculationResult, EstimateError> {
    parse_price(form.electricity_price)?;
    parse_consumption(form.label_consumption_kwh)?;
    let unit = lookup_unit(form.unit_id)
        .ok_or_else(|| EstimateError::UnknownUnit(form.unit_id.to_string()))?;
    let country = lookup_country(form.country)
        .ok_or_else(|| EstimateError::UnknownCountry(form.country.to_string()))?;

    estimate_annual_cost_and_emissions(&CalculationInput {
        electricity_price: form.electricity_price,
        label_consumption_kwh: form.label_consumption_kwh,
        unit,
        weekly_usage: Some(form.weekly_usage),
        emission_factor: country.emission_factor_per_kwh,
    })
}

/// 결과 값을 소수 둘째 자리까지 표시한다. 음의 0은 "0.00"으로 표시한다.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value + 0.0)
}
