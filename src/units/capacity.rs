use serde::{Deserialize, Serialize};

use super::rule::ConversionRule;
use super::MeasureUnit;
use crate::quantity::QuantityKind;

pub const ML_PER_LITER: f64 = 1000.0;
pub const ML_PER_US_GALLON: f64 = 3785.411784;
pub const ML_PER_CUBIC_FOOT: f64 = 28_316.846592;
pub const ML_PER_US_CUP: f64 = 236.5882365;
pub const ML_PER_US_TEASPOON: f64 = 4.928_921_593_75;
pub const ML_PER_US_TABLESPOON: f64 = 14.786_764_781_25;
pub const ML_PER_METRIC_CUP: f64 = 250.0;
pub const ML_PER_CUBIC_METER: f64 = 1_000_000.0;
pub const ML_PER_CUBIC_INCH: f64 = 16.387064;

/// 용량 단위. 내부 기준은 밀리리터이다.
///
/// 판별값이 곧 저장되는 단위 코드이므로 기존 값은 절대 바꾸지 않고 새 단위는 뒤에만 추가한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum CapacityUnit {
    Liters = 0,
    Gallons = 1,
    CubicFeet = 2,
    UsCups = 3,
    Teaspoons = 4,
    Tablespoons = 5,
    Milliliters = 6,
    MetricCups = 7,
    CubicMeters = 8,
    CubicInches = 9,
    CubicCentimeters = 10,
}

impl MeasureUnit for CapacityUnit {
    const QUANTITY: QuantityKind = QuantityKind::Capacity;
    const ALL: &'static [Self] = &[
        CapacityUnit::Liters,
        CapacityUnit::Gallons,
        CapacityUnit::CubicFeet,
        CapacityUnit::UsCups,
        CapacityUnit::Teaspoons,
        CapacityUnit::Tablespoons,
        CapacityUnit::Milliliters,
        CapacityUnit::MetricCups,
        CapacityUnit::CubicMeters,
        CapacityUnit::CubicInches,
        CapacityUnit::CubicCentimeters,
    ];
    const CANONICAL: Self = CapacityUnit::Milliliters;

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            CapacityUnit::Liters => "Liters",
            CapacityUnit::Gallons => "Gallons (US)",
            CapacityUnit::CubicFeet => "Cubic feet",
            CapacityUnit::UsCups => "US cups",
            CapacityUnit::Teaspoons => "Teaspoons",
            CapacityUnit::Tablespoons => "Tablespoons",
            CapacityUnit::Milliliters => "Milliliters",
            CapacityUnit::MetricCups => "Metric cups",
            CapacityUnit::CubicMeters => "Cubic meters",
            CapacityUnit::CubicInches => "Cubic inches",
            CapacityUnit::CubicCentimeters => "Cubic centimeters",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            CapacityUnit::Liters => "L",
            CapacityUnit::Gallons => "gal",
            CapacityUnit::CubicFeet => "ft3",
            CapacityUnit::UsCups => "cup",
            CapacityUnit::Teaspoons => "tsp",
            CapacityUnit::Tablespoons => "tbsp",
            CapacityUnit::Milliliters => "mL",
            CapacityUnit::MetricCups => "mcup",
            CapacityUnit::CubicMeters => "m3",
            CapacityUnit::CubicInches => "in3",
            CapacityUnit::CubicCentimeters => "cm3",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            CapacityUnit::Liters => &["l", "liter", "litre", "liters"],
            CapacityUnit::Gallons => &["gallon", "gallons", "usgal"],
            CapacityUnit::CubicFeet => &["ft^3", "cuft"],
            CapacityUnit::UsCups => &["uscup", "cups"],
            CapacityUnit::Teaspoons => &["teaspoon"],
            CapacityUnit::Tablespoons => &["tablespoon"],
            CapacityUnit::Milliliters => &["ml", "milliliter"],
            CapacityUnit::MetricCups => &["metric_cup"],
            CapacityUnit::CubicMeters => &["m^3"],
            CapacityUnit::CubicInches => &["in^3", "cuin"],
            CapacityUnit::CubicCentimeters => &["cc", "cm^3"],
        }
    }

    fn rule(self) -> ConversionRule {
        let factor = match self {
            CapacityUnit::Liters => ML_PER_LITER,
            CapacityUnit::Gallons => ML_PER_US_GALLON,
            CapacityUnit::CubicFeet => ML_PER_CUBIC_FOOT,
            CapacityUnit::UsCups => ML_PER_US_CUP,
            CapacityUnit::Teaspoons => ML_PER_US_TEASPOON,
            CapacityUnit::Tablespoons => ML_PER_US_TABLESPOON,
            CapacityUnit::Milliliters | CapacityUnit::CubicCentimeters => 1.0,
            CapacityUnit::MetricCups => ML_PER_METRIC_CUP,
            CapacityUnit::CubicMeters => ML_PER_CUBIC_METER,
            CapacityUnit::CubicInches => ML_PER_CUBIC_INCH,
        };
        ConversionRule::Linear { factor }
    }
}

/// 용량을 변환한다.
pub fn convert_capacity(value: f64, from: CapacityUnit, to: CapacityUnit) -> f64 {
    let ml = from.to_canonical(value);
    to.from_canonical(ml)
}
