//! 국가별 전기요금/배출계수 표와 소비량 단위 표.
//!
//! 값은 각 국가 전원 구성에 따른 추정치이며 빌드 시점에 고정된다.

use crate::units::{ConsumptionUnit, ConsumptionUnitDef, CONSUMPTION_UNITS};

/// 국가별 기준 데이터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryEntry {
    pub name: &'static str,
    /// 전기요금 [EUR/kWh]
    pub price_per_kwh: f64,
    /// 배출계수 [kg CO2e/kWh]
    pub emission_factor_per_kwh: f64,
}

impl CountryEntry {
    pub const fn new(name: &'static str, price_per_kwh: f64, emission_factor_per_kwh: f64) -> Self {
        Self {
            name,
            price_per_kwh,
            emission_factor_per_kwh,
        }
    }
}

/// 국가 표. 첫 항목이 폼의 기본 국가가 된다.
pub const COUNTRIES: &[CountryEntry] = &[
    CountryEntry::new("Austria", 0.22, 0.11),
    CountryEntry::new("Belgium", 0.27, 0.16),
    CountryEntry::new("Bulgaria", 0.10, 0.45),
    CountryEntry::new("Croatia", 0.13, 0.13),
    CountryEntry::new("Cyprus", 0.23, 0.65),
    CountryEntry::new("Czechia", 0.21, 0.42),
    CountryEntry::new("Denmark", 0.34, 0.12),
    CountryEntry::new("Estonia", 0.15, 0.68),
    CountryEntry::new("Finland", 0.18, 0.07),
    CountryEntry::new("France", 0.20, 0.05),
    CountryEntry::new("Germany", 0.32, 0.36),
    CountryEntry::new("Greece", 0.19, 0.55),
    CountryEntry::new("Hungary", 0.11, 0.25),
    CountryEntry::new("Ireland", 0.26, 0.29),
    CountryEntry::new("Italy", 0.28, 0.24),
    CountryEntry::new("Latvia", 0.16, 0.11),
    CountryEntry::new("Lithuania", 0.14, 0.02),
    CountryEntry::new("Luxembourg", 0.19, 0.04),
    CountryEntry::new("Malta", 0.17, 0.54),
    CountryEntry::new("Netherlands", 0.30, 0.38),
    CountryEntry::new("Poland", 0.15, 0.75),
    CountryEntry::new("Portugal", 0.22, 0.19),
    CountryEntry::new("Romania", 0.15, 0.26),
    CountryEntry::new("Slovakia", 0.18, 0.11),
    CountryEntry::new("Slovenia", 0.16, 0.22),
    CountryEntry::new("Spain", 0.25, 0.19),
    CountryEntry::new("Sweden", 0.18, 0.01),
];

pub fn list_countries() -> &'static [CountryEntry] {
    COUNTRIES
}

/// 국가명을 조회한다. 앞뒤 공백과 ASCII 대소문자는 무시한다.
pub fn lookup_country(name: &str) -> Option<&'static CountryEntry> {
    let name = name.trim();
    COUNTRIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// 국가 선택 시 가격 입력란에 미리 채울 기본 요금.
pub fn default_price_for(name: &str) -> Option<f64> {
    lookup_country(name).map(|c| c.price_per_kwh)
}

/// 폼 기본 국가.
pub fn default_country() -> &'static CountryEntry {
    &COUNTRIES[0]
}

pub fn list_units() -> &'static [ConsumptionUnitDef] {
    &CONSUMPTION_UNITS
}

pub fn lookup_unit(id: &str) -> Option<&'static ConsumptionUnitDef> {
    ConsumptionUnit::from_id(id).map(ConsumptionUnit::def)
}
