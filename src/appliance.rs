//! 가전 종류별 도움말 표. 계산에는 영향을 주지 않고 화면 표시에만 쓰인다.

use crate::units::ConsumptionUnit;

/// 가전 종류별 입력 도움말.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplianceHelp {
    pub appliance: &'static str,
    pub title: &'static str,
    pub example: &'static str,
    /// 해당 가전 라벨에서 흔히 쓰이는 소비량 단위
    pub typical_unit: ConsumptionUnit,
}

const APPLIANCE_HELP: &[ApplianceHelp] = &[
    ApplianceHelp {
        appliance: "Fridges",
        title: "Fridges and freezers",
        example: "The label shows annual consumption, e.g. 150 kWh/annum.",
        typical_unit: ConsumptionUnit::PerYear,
    },
    ApplianceHelp {
        appliance: "Washing Machines",
        title: "Washing machines",
        example: "The label shows consumption per 100 cycles in the eco 40-60 programme, e.g. 54 kWh/100 cycles.",
        typical_unit: ConsumptionUnit::Per100Cycles,
    },
    ApplianceHelp {
        appliance: "Tumble Dryers",
        title: "Tumble dryers",
        example: "The label shows consumption per 100 cycles, e.g. 176 kWh/100 cycles.",
        typical_unit: ConsumptionUnit::Per100Cycles,
    },
    ApplianceHelp {
        appliance: "Dishwashers",
        title: "Dishwashers",
        example: "The label shows consumption per 100 cycles in the eco programme, e.g. 75 kWh/100 cycles.",
        typical_unit: ConsumptionUnit::Per100Cycles,
    },
    ApplianceHelp {
        appliance: "Ovens",
        title: "Ovens",
        example: "The label shows consumption per cycle for each cavity, e.g. 0.9 kWh/cycle.",
        typical_unit: ConsumptionUnit::PerCycle,
    },
    ApplianceHelp {
        appliance: "Air conditioners",
        title: "Air conditioners",
        example: "The label shows annual consumption for cooling or heating, e.g. 180 kWh/annum.",
        typical_unit: ConsumptionUnit::PerYear,
    },
    ApplianceHelp {
        appliance: "Water heaters",
        title: "Water heaters",
        example: "The label shows annual electricity consumption, e.g. 1200 kWh/annum.",
        typical_unit: ConsumptionUnit::PerYear,
    },
    ApplianceHelp {
        appliance: "Range hoods",
        title: "Range hoods",
        example: "The label shows annual consumption, e.g. 40 kWh/annum.",
        typical_unit: ConsumptionUnit::PerYear,
    },
];

const FALLBACK_HELP: ApplianceHelp = ApplianceHelp {
    appliance: "Other",
    title: "Energy label",
    example: "Look for the kWh figure on the energy label and pick the matching unit.",
    typical_unit: ConsumptionUnit::PerYear,
};

/// 선택 가능한 가전 종류 목록(표시 순서).
pub fn list_appliances() -> impl Iterator<Item = &'static str> {
    APPLIANCE_HELP.iter().map(|h| h.appliance)
}

/// 가전 종류에 맞는 도움말을 반환한다. 모르는 종류면 기본 도움말을 준다.
pub fn help_for(appliance: &str) -> &'static ApplianceHelp {
    APPLIANCE_HELP
        .iter()
        .find(|h| h.appliance.eq_ignore_ascii_case(appliance.trim()))
        .unwrap_or(&FALLBACK_HELP)
}

pub fn default_appliance() -> &'static str {
    APPLIANCE_HELP[0].appliance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_appliance_falls_back() {
        assert_eq!(help_for("Toaster").title, "Energy label");
        assert_eq!(help_for("dishwashers").typical_unit, ConsumptionUnit::Per100Cycles);
    }

    #[test]
    fn eight_appliance_types() {
        assert_eq!(list_appliances().count(), 8);
        assert_eq!(default_appliance(), "Fridges");
    }
}
