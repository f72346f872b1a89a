use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::conversion::ConversionError;
use crate::quantity::QuantityKind;
use crate::units::*;

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// L, °C, °dKH, cm
    Metric,
    /// gal, °F, ppm, in
    Imperial,
    /// 물리량별로 직접 고른 단위
    Custom,
}

impl UnitSystem {
    /// 프리셋에 해당하는 단위 코드 묶음. `Custom` 은 고정된 묶음이 없다.
    pub fn preferences(self) -> Option<MeasurePreferences> {
        match self {
            UnitSystem::Metric => Some(MeasurePreferences::default()),
            UnitSystem::Imperial => Some(MeasurePreferences {
                capacity: CapacityUnit::Gallons.code(),
                temperature: TemperatureUnit::Fahrenheit.code(),
                alkalinity: AlkalinityUnit::Ppm.code(),
                length: LengthUnit::Inches.code(),
            }),
            UnitSystem::Custom => None,
        }
    }
}

/// 물리량별로 사용자가 고른 단위 코드. 고정 키로 저장된다.
///
/// 코드는 읽을 때 검사하지 않고 사용할 때 해석한다. 손상된 값은 그때 `UnknownMeasureCode` 가 된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurePreferences {
    #[serde(rename = "capacity_unit")]
    pub capacity: i32,
    #[serde(rename = "temperature_unit")]
    pub temperature: i32,
    #[serde(rename = "alkalinity_unit")]
    pub alkalinity: i32,
    #[serde(rename = "length_unit")]
    pub length: i32,
}

impl Default for MeasurePreferences {
    fn default() -> Self {
        Self {
            capacity: CapacityUnit::Liters.code(),
            temperature: TemperatureUnit::Celsius.code(),
            alkalinity: AlkalinityUnit::Dkh.code(),
            length: LengthUnit::Centimeters.code(),
        }
    }
}

impl MeasurePreferences {
    pub fn code(&self, quantity: QuantityKind) -> i32 {
        match quantity {
            QuantityKind::Capacity => self.capacity,
            QuantityKind::Temperature => self.temperature,
            QuantityKind::Alkalinity => self.alkalinity,
            QuantityKind::Length => self.length,
        }
    }

    pub fn set_code(&mut self, quantity: QuantityKind, code: i32) {
        match quantity {
            QuantityKind::Capacity => self.capacity = code,
            QuantityKind::Temperature => self.temperature = code,
            QuantityKind::Alkalinity => self.alkalinity = code,
            QuantityKind::Length => self.length = code,
        }
    }

    /// 저장된 코드를 단위로 해석한다.
    pub fn resolve(&self, quantity: QuantityKind) -> Result<Measure, ConversionError> {
        measure_for_code(quantity, self.code(quantity))
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub units: MeasurePreferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            units: MeasurePreferences::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 로 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 프리셋을 적용한다. `Custom` 은 현재 단위를 유지한 채 표시만 바꾼다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        if let Some(units) = system.preferences() {
            self.units = units;
        }
        self.unit_system = system;
    }

    /// 물리량 하나의 단위를 바꾼다. 코드가 유효하지 않으면 바꾸지 않는다.
    pub fn set_unit(&mut self, quantity: QuantityKind, code: i32) -> Result<Measure, ConversionError> {
        let measure = measure_for_code(quantity, code)?;
        self.units.set_code(quantity, code);
        self.unit_system = UnitSystem::Custom;
        Ok(measure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_uses_fixed_keys() {
        let text = toml::to_string_pretty(&Config::default()).expect("serialize");
        for key in [
            "capacity_unit",
            "temperature_unit",
            "alkalinity_unit",
            "length_unit",
        ] {
            assert!(text.contains(key), "missing {key} in\n{text}");
        }
        let back: Config = toml::from_str(&text).expect("parse");
        assert_eq!(back, Config::default());
    }

    #[test]
    fn missing_unit_keys_fall_back_to_defaults() {
        let cfg: Config = toml::from_str(
            "unit_system = \"Custom\"\n[units]\ntemperature_unit = 1\n",
        )
        .expect("parse");
        assert_eq!(cfg.units.temperature, 1);
        assert_eq!(cfg.units.capacity, 0);
    }

    #[test]
    fn corrupted_code_surfaces_on_resolve() {
        let cfg: Config =
            toml::from_str("unit_system = \"Metric\"\n[units]\ncapacity_unit = 77\n")
                .expect("parse");
        assert_eq!(
            cfg.units.resolve(QuantityKind::Capacity),
            Err(ConversionError::UnknownMeasureCode {
                quantity: QuantityKind::Capacity,
                code: 77
            })
        );
    }

    #[test]
    fn imperial_preset_and_custom_override() {
        let mut cfg = Config::default();
        cfg.apply_unit_system(UnitSystem::Imperial);
        assert_eq!(cfg.units.capacity, CapacityUnit::Gallons.code());
        assert_eq!(cfg.units.length, LengthUnit::Inches.code());

        let m = cfg
            .set_unit(QuantityKind::Temperature, TemperatureUnit::Kelvin.code())
            .expect("valid code");
        assert_eq!(m.symbol, "K");
        assert_eq!(cfg.unit_system, UnitSystem::Custom);

        assert!(cfg.set_unit(QuantityKind::Length, -1).is_err());
        assert_eq!(cfg.units.length, LengthUnit::Inches.code());
    }

    #[test]
    fn missing_file_is_created_then_reloaded() {
        let path = std::env::temp_dir().join(format!("aquarium_cfg_{}.toml", std::process::id()));
        let _ = fs::remove_file(&path);
        let created = load_or_default_from(&path).expect("create");
        assert_eq!(created, Config::default());
        assert!(path.exists());

        let mut cfg = created;
        cfg.apply_unit_system(UnitSystem::Imperial);
        cfg.save_to(&path).expect("save");
        assert_eq!(load_or_default_from(&path).expect("reload"), cfg);
        let _ = fs::remove_file(&path);
    }
}
