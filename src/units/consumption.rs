use serde::{Deserialize, Serialize};

/// 에너지 라벨에 표기되는 소비량 기준 단위.
///
/// 직렬화 시 식별자(`per_year` 등)를 그대로 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumptionUnit {
    #[serde(rename = "per_year")]
    PerYear,
    #[serde(rename = "per_100_cycles")]
    Per100Cycles,
    #[serde(rename = "per_cycle")]
    PerCycle,
    #[serde(rename = "per_1000_hours")]
    Per1000Hours,
}

impl ConsumptionUnit {
    /// 식별자 문자열을 반환한다.
    pub fn id(self) -> &'static str {
        self.def().id
    }

    /// 식별자 문자열로부터 단위를 찾는다. 대소문자와 `-`/`_` 차이는 무시한다.
    pub fn from_id(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace('-', "_");
        CONSUMPTION_UNITS
            .iter()
            .find(|d| d.id == norm)
            .map(|d| d.unit)
    }

    /// 단위 정의를 반환한다.
    pub fn def(self) -> &'static ConsumptionUnitDef {
        match self {
            ConsumptionUnit::PerYear => &CONSUMPTION_UNITS[0],
            ConsumptionUnit::Per100Cycles => &CONSUMPTION_UNITS[1],
            ConsumptionUnit::PerCycle => &CONSUMPTION_UNITS[2],
            ConsumptionUnit::Per1000Hours => &CONSUMPTION_UNITS[3],
        }
    }
}

/// 소비량 단위 정의(식별자, 표시명, 정규화 기준, 사용량 질문).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumptionUnitDef {
    pub unit: ConsumptionUnit,
    pub id: &'static str,
    pub label: &'static str,
    /// 라벨 값이 몇 회/시간 기준인지 나타내는 나눗수
    pub normalization_base: u32,
    /// 주간 사용량 입력을 요청할 때 보여줄 질문. 없으면 사용량이 필요 없다.
    pub prompt: Option<&'static str>,
}

impl ConsumptionUnitDef {
    /// 주간 사용량 입력이 필요한지 여부.
    pub fn needs_usage_prompt(&self) -> bool {
        self.prompt.is_some()
    }
}

/// 화면 표시 순서대로 정렬된 소비량 단위 표.
pub static CONSUMPTION_UNITS: [ConsumptionUnitDef; 4] = [
    ConsumptionUnitDef {
        unit: ConsumptionUnit::PerYear,
        id: "per_year",
        label: "per year",
        normalization_base: 1,
        prompt: None,
    },
    ConsumptionUnitDef {
        unit: ConsumptionUnit::Per100Cycles,
        id: "per_100_cycles",
        label: "per 100 cycles",
        normalization_base: 100,
        prompt: Some("How many cycles do you run per week?"),
    },
    ConsumptionUnitDef {
        unit: ConsumptionUnit::PerCycle,
        id: "per_cycle",
        label: "per cycle",
        normalization_base: 1,
        prompt: Some("How many cycles per week?"),
    },
    ConsumptionUnitDef {
        unit: ConsumptionUnit::Per1000Hours,
        id: "per_1000_hours",
        label: "per 1,000 hours",
        normalization_base: 1000,
        prompt: Some("How many hours per week do you use it?"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn def_table_matches_enum_order() {
        for def in &CONSUMPTION_UNITS {
            assert_eq!(def.unit.def().id, def.id);
        }
    }

    #[test]
    fn from_id_accepts_dashes_and_case() {
        assert_eq!(
            ConsumptionUnit::from_id("Per-100-Cycles"),
            Some(ConsumptionUnit::Per100Cycles)
        );
        assert_eq!(ConsumptionUnit::from_id("per_week"), None);
    }
}
