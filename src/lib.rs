//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 계산을 사용하게 한다.

pub mod app;
pub mod appliance;
pub mod config;
pub mod estimate;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod reference_data;
pub mod ui_cli;
pub mod units;
