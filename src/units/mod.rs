//! 단위 정의 및 변환 모듈 모음.

pub mod alkalinity;
pub mod capacity;
pub mod length;
pub mod registry;
pub mod rule;
pub mod temperature;

use std::fmt;

pub use alkalinity::{convert_alkalinity, AlkalinityUnit};
pub use capacity::{convert_capacity, CapacityUnit};
pub use length::{convert_length, LengthUnit};
pub use registry::{all_measures, canonical_measure, measure_for_code, measure_for_symbol, Measure};
pub use rule::ConversionRule;
pub use temperature::{convert_temperature, TemperatureUnit};

use crate::conversion::ConversionError;
use crate::quantity::QuantityKind;

/// 한 물리량의 단위 집합을 표현하는 enum 이 구현하는 공통 동작.
///
/// `ALL` 의 순서가 곧 코드 순서이며, 코드는 0부터 빈틈없이 이어진다.
pub trait MeasureUnit: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const QUANTITY: QuantityKind;
    const ALL: &'static [Self];
    /// 내부 기준 단위.
    const CANONICAL: Self;

    /// 저장/목록 인덱스로 쓰이는 고정 코드.
    fn code(self) -> i32;
    fn name(self) -> &'static str;
    fn symbol(self) -> &'static str;
    /// 기호 외에 허용하는 입력 문자열(소문자).
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }
    fn rule(self) -> ConversionRule;

    fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.code() == code)
    }

    /// 코드를 단위로 바꾼다. 범위 밖 코드는 다른 단위로 대체하지 않고 오류로 돌려준다.
    fn try_from_code(code: i32) -> Result<Self, ConversionError> {
        Self::from_code(code).ok_or_else(|| {
            tracing::warn!(quantity = %Self::QUANTITY, code, "unknown measure code");
            ConversionError::UnknownMeasureCode {
                quantity: Self::QUANTITY,
                code,
            }
        })
    }

    /// 기호/별칭(대소문자 무시)으로 단위를 찾는다.
    fn from_symbol(text: &str) -> Option<Self> {
        let needle = text.trim().to_lowercase();
        Self::ALL.iter().copied().find(|u| {
            u.symbol().to_lowercase() == needle || u.aliases().iter().any(|a| *a == needle)
        })
    }

    fn measure(self) -> Measure {
        Measure {
            quantity: Self::QUANTITY,
            code: self.code(),
            name: self.name(),
            symbol: self.symbol(),
            rule: self.rule(),
        }
    }

    fn to_canonical(self, value: f64) -> f64 {
        self.rule().to_canonical(value)
    }

    fn from_canonical(self, canonical: f64) -> f64 {
        self.rule().from_canonical(canonical)
    }
}
