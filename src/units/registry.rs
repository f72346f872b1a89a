use std::fmt;

use super::rule::ConversionRule;
use super::{AlkalinityUnit, CapacityUnit, LengthUnit, MeasureUnit, TemperatureUnit};
use crate::conversion::ConversionError;
use crate::quantity::QuantityKind;

/// 물리량 안의 구체적인 단위 하나.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    pub quantity: QuantityKind,
    pub code: i32,
    pub name: &'static str,
    pub symbol: &'static str,
    pub rule: ConversionRule,
}

impl Measure {
    pub fn to_canonical(&self, value: f64) -> f64 {
        self.rule.to_canonical(value)
    }

    pub fn from_canonical(&self, canonical: f64) -> f64 {
        self.rule.from_canonical(canonical)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

fn measures_of<U: MeasureUnit>() -> Vec<Measure> {
    U::ALL.iter().map(|u| u.measure()).collect()
}

fn lookup_code<U: MeasureUnit>(code: i32) -> Result<Measure, ConversionError> {
    U::try_from_code(code).map(U::measure)
}

fn lookup_symbol<U: MeasureUnit>(text: &str) -> Result<Measure, ConversionError> {
    if let Ok(code) = text.trim().parse::<i32>() {
        return lookup_code::<U>(code);
    }
    U::from_symbol(text)
        .map(U::measure)
        .ok_or_else(|| ConversionError::UnknownUnit {
            quantity: U::QUANTITY,
            text: text.to_string(),
        })
}

/// 물리량이 지원하는 모든 단위를 코드 순서대로 반환한다.
///
/// UI 목록 인덱스로 그대로 쓰이므로 순서는 버전이 바뀌어도 유지된다.
pub fn all_measures(quantity: QuantityKind) -> Vec<Measure> {
    match quantity {
        QuantityKind::Capacity => measures_of::<CapacityUnit>(),
        QuantityKind::Temperature => measures_of::<TemperatureUnit>(),
        QuantityKind::Alkalinity => measures_of::<AlkalinityUnit>(),
        QuantityKind::Length => measures_of::<LengthUnit>(),
    }
}

/// 코드에 해당하는 단위를 찾는다.
pub fn measure_for_code(quantity: QuantityKind, code: i32) -> Result<Measure, ConversionError> {
    match quantity {
        QuantityKind::Capacity => lookup_code::<CapacityUnit>(code),
        QuantityKind::Temperature => lookup_code::<TemperatureUnit>(code),
        QuantityKind::Alkalinity => lookup_code::<AlkalinityUnit>(code),
        QuantityKind::Length => lookup_code::<LengthUnit>(code),
    }
}

/// 기호, 별칭 또는 숫자 코드 문자열로 단위를 찾는다. CLI 입력용.
pub fn measure_for_symbol(quantity: QuantityKind, text: &str) -> Result<Measure, ConversionError> {
    match quantity {
        QuantityKind::Capacity => lookup_symbol::<CapacityUnit>(text),
        QuantityKind::Temperature => lookup_symbol::<TemperatureUnit>(text),
        QuantityKind::Alkalinity => lookup_symbol::<AlkalinityUnit>(text),
        QuantityKind::Length => lookup_symbol::<LengthUnit>(text),
    }
}

/// 물리량의 내부 기준 단위.
pub fn canonical_measure(quantity: QuantityKind) -> Measure {
    match quantity {
        QuantityKind::Capacity => CapacityUnit::CANONICAL.measure(),
        QuantityKind::Temperature => TemperatureUnit::CANONICAL.measure(),
        QuantityKind::Alkalinity => AlkalinityUnit::CANONICAL.measure(),
        QuantityKind::Length => LengthUnit::CANONICAL.measure(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dense_and_zero_based() {
        for quantity in QuantityKind::ALL {
            let measures = all_measures(quantity);
            assert!(!measures.is_empty());
            for (index, m) in measures.iter().enumerate() {
                assert_eq!(m.code, index as i32, "{quantity} {}", m.name);
                assert_eq!(m.quantity, quantity);
            }
        }
    }

    #[test]
    fn symbols_are_unique_within_quantity() {
        for quantity in QuantityKind::ALL {
            let measures = all_measures(quantity);
            for m in &measures {
                let found = measure_for_symbol(quantity, m.symbol).expect("symbol lookup");
                assert_eq!(found.code, m.code);
            }
        }
    }

    #[test]
    fn numeric_text_is_treated_as_code() {
        let m = measure_for_symbol(QuantityKind::Capacity, " 1 ").expect("code lookup");
        assert_eq!(m.symbol, "gal");
        assert!(matches!(
            measure_for_symbol(QuantityKind::Capacity, "42"),
            Err(ConversionError::UnknownMeasureCode { code: 42, .. })
        ));
    }

    #[test]
    fn canonical_measure_has_identity_rule() {
        for quantity in QuantityKind::ALL {
            let m = canonical_measure(quantity);
            assert_eq!(m.to_canonical(12.5), 12.5);
            assert_eq!(m.from_canonical(-3.0), -3.0);
        }
    }
}
