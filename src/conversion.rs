use thiserror::Error;

use crate::quantity::{ConversionResult, QuantityKind};
use crate::units::{measure_for_code, measure_for_symbol};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 범위를 벗어난 단위 코드. 손상된 설정값 등 데이터 오류이다.
    #[error("알 수 없는 {quantity} 단위 코드: {code}")]
    UnknownMeasureCode { quantity: QuantityKind, code: i32 },
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 {quantity} 단위: {text}")]
    UnknownUnit { quantity: QuantityKind, text: String },
}

/// 코드로 지정한 단위의 값을 기준 단위로 환산한다.
///
/// 음수/0 도 그대로 통과시킨다. 용량·길이의 부호 검사는 입력 검증 단계의 몫이다.
pub fn to_canonical(quantity: QuantityKind, code: i32, value: f64) -> Result<f64, ConversionError> {
    let measure = measure_for_code(quantity, code)?;
    let canonical = measure.to_canonical(value);
    tracing::trace!(%quantity, code, value, canonical, "to canonical");
    Ok(canonical)
}

/// 기준 단위 값을 코드로 지정한 단위로 환산한다.
pub fn from_canonical(
    quantity: QuantityKind,
    code: i32,
    canonical: f64,
) -> Result<f64, ConversionError> {
    let measure = measure_for_code(quantity, code)?;
    let value = measure.from_canonical(canonical);
    tracing::trace!(%quantity, code, canonical, value, "from canonical");
    Ok(value)
}

/// 두 단위 사이를 변환한다. 항상 기준 단위를 거친다.
pub fn convert(
    quantity: QuantityKind,
    from_code: i32,
    to_code: i32,
    value: f64,
) -> Result<f64, ConversionError> {
    let canonical = to_canonical(quantity, from_code, value)?;
    from_canonical(quantity, to_code, canonical)
}

/// [`convert`] 결과에 표현 단위 코드를 붙여 반환한다.
pub fn convert_to_result(
    quantity: QuantityKind,
    from_code: i32,
    to_code: i32,
    value: f64,
) -> Result<ConversionResult<f64>, ConversionError> {
    let converted = convert(quantity, from_code, to_code, value)?;
    Ok(ConversionResult::new(converted, to_code))
}

/// 선택 값(`None` 은 미측정)을 기준 단위로 환산한다.
///
/// `None` 은 그대로 두지만 코드는 값 유무와 관계없이 검사한다.
pub fn optional_to_canonical(
    quantity: QuantityKind,
    code: i32,
    value: Option<f64>,
) -> Result<Option<f64>, ConversionError> {
    let measure = measure_for_code(quantity, code)?;
    Ok(value.map(|v| measure.to_canonical(v)))
}

/// 선택 값을 기준 단위에서 표시 단위로 환산한다. `None` 은 그대로 둔다.
pub fn optional_from_canonical(
    quantity: QuantityKind,
    code: i32,
    canonical: Option<f64>,
) -> Result<Option<f64>, ConversionError> {
    let measure = measure_for_code(quantity, code)?;
    Ok(canonical.map(|v| measure.from_canonical(v)))
}

/// 문자열로 전달된 단위명(기호, 별칭 또는 코드)을 해석한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `L`, `gal`, `F`, `dKH`, `ppm`, `in` 등을 사용할 수 있다.
pub fn convert_by_symbol(
    quantity: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<ConversionResult<f64>, ConversionError> {
    let from = measure_for_symbol(quantity, from_unit_str)?;
    let to = measure_for_symbol(quantity, to_unit_str)?;
    tracing::debug!(%quantity, from = from.symbol, to = to.symbol, value, "convert");
    let converted = to.from_canonical(from.to_canonical(value));
    Ok(ConversionResult::new(converted, to.code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_none_stays_none() {
        assert_eq!(
            optional_to_canonical(QuantityKind::Temperature, 1, None),
            Ok(None)
        );
        assert_eq!(
            optional_from_canonical(QuantityKind::Capacity, 1, None),
            Ok(None)
        );
    }

    #[test]
    fn optional_none_still_checks_code() {
        assert_eq!(
            optional_to_canonical(QuantityKind::Length, 99, None),
            Err(ConversionError::UnknownMeasureCode {
                quantity: QuantityKind::Length,
                code: 99
            })
        );
    }

    #[test]
    fn symbol_conversion_reports_target_code() {
        let res = convert_by_symbol(QuantityKind::Capacity, 2.0, "L", "mL").expect("convert");
        assert_eq!(res.value, 2000.0);
        assert_eq!(res.code, 6);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = convert_by_symbol(QuantityKind::Length, 1.0, "furlong", "cm").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                quantity: QuantityKind::Length,
                text: "furlong".into()
            }
        );
    }
}
