//! 계산기 입력 폼의 상태. CLI와 GUI가 같은 규칙으로 동작하도록 화면과 분리했다.

use crate::appliance::{self, ApplianceHelp};
use crate::estimate::{self, CalculationResult, EstimateError, FormInput};
use crate::reference_data;
use crate::units::ConsumptionUnit;

/// 폼 입력값과 마지막 계산 결과.
#[derive(Debug, Clone)]
pub struct CalculatorForm {
    pub country: String,
    pub electricity_price: String,
    pub appliance: String,
    pub label_consumption: String,
    pub unit: ConsumptionUnit,
    pub weekly_usage: String,
    result: Option<CalculationResult>,
    error: Option<EstimateError>,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::new(reference_data::default_country().name)
    }
}

impl CalculatorForm {
    /// 기본 국가를 선택한 상태의 폼을 만든다. 가격은 해당 국가 요금으로 채워진다.
    pub fn new(country: &str) -> Self {
        let mut form = Self {
            country: String::new(),
            electricity_price: String::new(),
            appliance: appliance::default_appliance().to_string(),
            label_consumption: String::new(),
            unit: ConsumptionUnit::PerYear,
            weekly_usage: String::new(),
            result: None,
            error: None,
        };
        form.select_country(country);
        form
    }

    /// 국가를 바꾸고 가격 입력란을 그 국가의 기본 요금으로 채운다.
    /// 표에 없는 국가면 0을 넣는다.
    pub fn select_country(&mut self, name: &str) {
        let price = reference_data::default_price_for(name).unwrap_or(0.0);
        self.country = name.to_string();
        self.electricity_price = price.to_string();
    }

    /// 단위를 바꾼다. 사용량이 필요 없는 단위로 바뀌면 사용량 입력을 비운다.
    pub fn select_unit(&mut self, unit: ConsumptionUnit) {
        self.unit = unit;
        if !unit.def().needs_usage_prompt() {
            self.weekly_usage.clear();
        }
    }

    /// 식별자로 단위를 바꾼다.
    pub fn select_unit_id(&mut self, id: &str) -> Result<(), EstimateError> {
        let unit =
            ConsumptionUnit::from_id(id).ok_or_else(|| EstimateError::UnknownUnit(id.to_string()))?;
        self.select_unit(unit);
        Ok(())
    }

    pub fn select_appliance(&mut self, name: &str) {
        self.appliance = name.to_string();
    }

    /// 현재 단위의 사용량 질문. `per_year`면 None.
    pub fn usage_prompt(&self) -> Option<&'static str> {
        self.unit.def().prompt
    }

    pub fn help(&self) -> &'static ApplianceHelp {
        appliance::help_for(&self.appliance)
    }

    /// 이전 결과/오류를 지우고 다시 계산한다.
    pub fn calculate(&mut self) -> Result<CalculationResult, EstimateError> {
        self.result = None;
        self.error = None;
        let outcome = estimate::estimate_from_form(&FormInput {
            country: &self.country,
            electricity_price: &self.electricity_price,
            unit_id: self.unit.id(),
            label_consumption_kwh: &self.label_consumption,
            weekly_usage: &self.weekly_usage,
        });
        match &outcome {
            Ok(res) => self.result = Some(*res),
            Err(e) => {
                tracing::debug!(error = %e, "form validation failed");
                self.error = Some(e.clone());
            }
        }
        outcome
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&EstimateError> {
        self.error.as_ref()
    }
}
