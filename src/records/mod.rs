//! 저장소가 소유하는 레코드(수조, 생물, 수초)의 측정 필드를 한꺼번에 단위 변환한다.
//!
//! 레코드는 항상 기준 단위(mL, °C, °dKH)로 저장되고, 화면에는 사용자가 고른 단위로 표시된다.
//! 값이 없는(`None`) 필드는 변환 후에도 `None` 이며 기본값으로 채우지 않는다.

pub mod aquarium;
pub mod dweller;
pub mod plant;

pub use aquarium::Aquarium;
pub use dweller::Dweller;
pub use plant::Plant;

use crate::config::MeasurePreferences;
use crate::conversion::ConversionError;
use crate::quantity::QuantityKind;
use crate::units::Measure;

/// 변환 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 기준 단위 → 사용자 표시 단위
    ToDisplay,
    /// 사용자 표시 단위 → 기준 단위
    ToCanonical,
}

/// 레코드 필드 변환에 쓰이는, 미리 해석해 둔 단위 묶음.
#[derive(Debug, Clone, Copy)]
pub struct FieldConverter {
    capacity: Measure,
    temperature: Measure,
    alkalinity: Measure,
    direction: Direction,
}

impl FieldConverter {
    /// 세 코드를 모두 먼저 해석한다. 필드 값이 비어 있어도 잘못된 코드는 오류가 된다.
    pub fn new(prefs: &MeasurePreferences, direction: Direction) -> Result<Self, ConversionError> {
        Ok(Self {
            capacity: prefs.resolve(QuantityKind::Capacity)?,
            temperature: prefs.resolve(QuantityKind::Temperature)?,
            alkalinity: prefs.resolve(QuantityKind::Alkalinity)?,
            direction,
        })
    }

    fn apply(&self, measure: &Measure, value: Option<f64>) -> Option<f64> {
        value.map(|v| match self.direction {
            Direction::ToDisplay => measure.from_canonical(v),
            Direction::ToCanonical => measure.to_canonical(v),
        })
    }

    pub fn capacity(&self, value: Option<f64>) -> Option<f64> {
        self.apply(&self.capacity, value)
    }

    pub fn temperature(&self, value: Option<f64>) -> Option<f64> {
        self.apply(&self.temperature, value)
    }

    /// 알칼리도와 경도(GH)는 같은 단위 설정을 공유한다.
    pub fn alkalinity(&self, value: Option<f64>) -> Option<f64> {
        self.apply(&self.alkalinity, value)
    }
}

/// 측정 필드를 가진 레코드.
pub trait MeasuredRecord: Sized {
    /// 측정 필드만 변환한 새 레코드를 만든다. 측정값이 아닌 필드는 그대로 복사한다.
    fn convert_with(&self, converter: &FieldConverter) -> Self;

    /// 저장된 기준 단위 값을 사용자 표시 단위로 변환한다.
    fn to_display_units(&self, prefs: &MeasurePreferences) -> Result<Self, ConversionError> {
        let converter = FieldConverter::new(prefs, Direction::ToDisplay)?;
        Ok(self.convert_with(&converter))
    }

    /// 사용자 표시 단위로 입력된 값을 저장용 기준 단위로 변환한다.
    fn to_canonical_units(&self, prefs: &MeasurePreferences) -> Result<Self, ConversionError> {
        let converter = FieldConverter::new(prefs, Direction::ToCanonical)?;
        Ok(self.convert_with(&converter))
    }
}
