//! 단위 정의 및 변환 모듈 모음.

pub mod consumption;
pub mod energy;
pub mod mass;

pub use consumption::{ConsumptionUnit, ConsumptionUnitDef, CONSUMPTION_UNITS};
pub use energy::{convert_energy, EnergyUnit};
pub use mass::{convert_mass, MassUnit};
