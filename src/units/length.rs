use serde::{Deserialize, Serialize};

use super::rule::ConversionRule;
use super::MeasureUnit;
use crate::quantity::QuantityKind;

/// 길이 단위. 내부 기준은 센티미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum LengthUnit {
    Centimeters = 0,
    Inches = 1,
    Feet = 2,
    Millimeters = 3,
    Meters = 4,
}

impl MeasureUnit for LengthUnit {
    const QUANTITY: QuantityKind = QuantityKind::Length;
    const ALL: &'static [Self] = &[
        LengthUnit::Centimeters,
        LengthUnit::Inches,
        LengthUnit::Feet,
        LengthUnit::Millimeters,
        LengthUnit::Meters,
    ];
    const CANONICAL: Self = LengthUnit::Centimeters;

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Centimeters => "Centimeters",
            LengthUnit::Inches => "Inches",
            LengthUnit::Feet => "Feet",
            LengthUnit::Millimeters => "Millimeters",
            LengthUnit::Meters => "Meters",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Centimeters => "cm",
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
            LengthUnit::Millimeters => "mm",
            LengthUnit::Meters => "m",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            LengthUnit::Centimeters => &["centimeter"],
            LengthUnit::Inches => &["inch", "\""],
            LengthUnit::Feet => &["foot", "'"],
            LengthUnit::Millimeters => &["millimeter"],
            LengthUnit::Meters => &["meter", "metre"],
        }
    }

    fn rule(self) -> ConversionRule {
        let factor = match self {
            LengthUnit::Centimeters => 1.0,
            LengthUnit::Inches => 2.54,
            LengthUnit::Feet => 30.48,
            LengthUnit::Millimeters => 0.1,
            LengthUnit::Meters => 100.0,
        };
        ConversionRule::Linear { factor }
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let cm = from.to_canonical(value);
    to.from_canonical(cm)
}
