use serde::{Deserialize, Serialize};

use super::rule::ConversionRule;
use super::MeasureUnit;
use crate::quantity::QuantityKind;

const KELVIN_AT_ZERO_CELSIUS: f64 = 273.15;
const FAHRENHEIT_AT_ZERO_CELSIUS: f64 = 32.0;

/// 온도 단위를 정의한다. 내부 기준은 섭씨이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum TemperatureUnit {
    Celsius = 0,
    Fahrenheit = 1,
    Kelvin = 2,
}

impl MeasureUnit for TemperatureUnit {
    const QUANTITY: QuantityKind = QuantityKind::Temperature;
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];
    const CANONICAL: Self = TemperatureUnit::Celsius;

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TemperatureUnit::Celsius => &["°c", "celsius"],
            TemperatureUnit::Fahrenheit => &["°f", "fahrenheit"],
            TemperatureUnit::Kelvin => &["kelvin"],
        }
    }

    fn rule(self) -> ConversionRule {
        match self {
            TemperatureUnit::Celsius => ConversionRule::Affine {
                scale: 1.0,
                zero: 0.0,
            },
            // C = (F − 32) × 5/9
            TemperatureUnit::Fahrenheit => ConversionRule::Affine {
                scale: 5.0 / 9.0,
                zero: FAHRENHEIT_AT_ZERO_CELSIUS,
            },
            // C = K − 273.15
            TemperatureUnit::Kelvin => ConversionRule::Affine {
                scale: 1.0,
                zero: KELVIN_AT_ZERO_CELSIUS,
            },
        }
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let c = from.to_canonical(value);
    to.from_canonical(c)
}
