use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::appliance;
use crate::reference_data;
use crate::units::{EnergyUnit, MassUnit};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 표시 단위. 계산 자체는 항상 kWh/kg 기준이다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayUnits {
    pub energy: EnergyUnit,
    pub co2_mass: MassUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            energy: EnergyUnit::KilowattHour,
            co2_mass: MassUnit::Kilogram,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 폼을 열 때 선택할 국가
    pub default_country: String,
    /// 폼을 열 때 선택할 가전 종류
    pub appliance: String,
    /// auto / en-us / ko-kr / de-de
    pub language: String,
    pub language_pack_dir: Option<String>,
    pub display_units: DisplayUnits,
    pub window_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_country: reference_data::default_country().name.to_string(),
            appliance: appliance::default_appliance().to_string(),
            language: "auto".to_string(),
            language_pack_dir: None,
            display_units: DisplayUnits::default(),
            window_alpha: 1.0,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 반환한다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.sanitize();
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        tracing::info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

/// 설정을 지정 경로에 저장한다.
pub fn save_to(cfg: &Config, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 표에 없는 국가나 범위를 벗어난 값을 기본값으로 되돌린다.
    fn sanitize(&mut self) {
        if reference_data::lookup_country(&self.default_country).is_none() {
            let fallback = reference_data::default_country().name;
            tracing::warn!(
                country = %self.default_country,
                fallback,
                "unknown default country in config"
            );
            self.default_country = fallback.to_string();
        }
        self.window_alpha = self.window_alpha.clamp(0.3, 1.0);
    }
}
