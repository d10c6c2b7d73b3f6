use serde::{Deserialize, Serialize};

/// 연간 에너지 표시 단위. 내부 기준은 kWh이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    KilowattHour,
    Megajoule,
    Kilojoule,
}

impl EnergyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::Kilojoule => "kJ",
        }
    }
}

fn to_kwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => value,
        EnergyUnit::Megajoule => value / 3.6,
        EnergyUnit::Kilojoule => value / 3600.0,
    }
}

fn from_kwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => value,
        EnergyUnit::Megajoule => value * 3.6,
        EnergyUnit::Kilojoule => value * 3600.0,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let kwh = to_kwh(value, from);
    from_kwh(kwh, to)
}
