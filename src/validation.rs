//! 사용자가 입력한 문자열을 숫자로 검증한다.
//!
//! 계산/변환 모듈은 문자열을 직접 다루지 않으며 여기서 검증된 값만 받는다.

use thiserror::Error;

/// 입력 검증 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("값을 입력하세요.")]
    BlankField,
    #[error("숫자(소수)를 입력하세요.")]
    NotDecimal,
    #[error("정수를 입력하세요.")]
    NotInteger,
    #[error("음수는 입력할 수 없습니다.")]
    Negative,
    #[error("0보다 큰 값을 입력하세요.")]
    NotPositive,
}

fn non_blank(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField);
    }
    Ok(trimmed)
}

/// 소수를 검증한다. 쉼표 소수점(`12,5`)도 허용한다. 무한대/NaN 은 숫자로 보지 않는다.
pub fn parse_decimal(text: &str) -> Result<f64, ValidationError> {
    let trimmed = non_blank(text)?;
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::NotDecimal),
    }
}

/// 0보다 큰 소수를 검증한다. 수조 치수 입력에 사용한다.
pub fn parse_positive_decimal(text: &str) -> Result<f64, ValidationError> {
    let value = parse_decimal(text)?;
    if value < 0.0 {
        return Err(ValidationError::Negative);
    }
    if value == 0.0 {
        return Err(ValidationError::NotPositive);
    }
    Ok(value)
}

pub fn parse_integer(text: &str) -> Result<i64, ValidationError> {
    non_blank(text)?
        .parse::<i64>()
        .map_err(|_| ValidationError::NotInteger)
}

pub fn parse_non_negative_integer(text: &str) -> Result<i64, ValidationError> {
    let value = parse_integer(text)?;
    if value < 0 {
        return Err(ValidationError::Negative);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_inputs() {
        assert_eq!(parse_decimal("   "), Err(ValidationError::BlankField));
        assert_eq!(parse_integer(""), Err(ValidationError::BlankField));
    }

    #[test]
    fn decimals() {
        assert_eq!(parse_decimal(" 12.5 "), Ok(12.5));
        assert_eq!(parse_decimal("12,5"), Ok(12.5));
        assert_eq!(parse_decimal("-4"), Ok(-4.0));
        assert_eq!(parse_decimal("abc"), Err(ValidationError::NotDecimal));
        assert_eq!(parse_decimal("inf"), Err(ValidationError::NotDecimal));
        assert_eq!(parse_decimal("NaN"), Err(ValidationError::NotDecimal));
    }

    #[test]
    fn positive_decimals() {
        assert_eq!(parse_positive_decimal("0.5"), Ok(0.5));
        assert_eq!(parse_positive_decimal("-0.1"), Err(ValidationError::Negative));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(parse_positive_decimal("0"), Err(ValidationError::NotPositive));
        assert_eq!(parse_positive_decimal("0,0"), Err(ValidationError::NotPositive));
        assert_eq!(parse_positive_decimal("-0"), Err(ValidationError::NotPositive));
    }

    #[test]
    fn integers() {
        assert_eq!(parse_integer("7"), Ok(7));
        assert_eq!(parse_integer("7.5"), Err(ValidationError::NotInteger));
        assert_eq!(parse_non_negative_integer("-2"), Err(ValidationError::Negative));
    }
}
