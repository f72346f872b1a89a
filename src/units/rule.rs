use serde::{Deserialize, Serialize};

/// 단위 ↔ 기준 단위 환산 규칙.
///
/// 규칙 종류마다 정방향/역방향 식을 한 쌍으로 가진다. 새 단위는 기존 규칙 종류 중 하나로만 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConversionRule {
    /// `기준값 = 값 × factor`
    Linear { factor: f64 },
    /// `기준값 = (값 − zero) × scale`. 온도처럼 원점이 다른 척도에 사용한다.
    Affine { scale: f64, zero: f64 },
    /// °dKH 와 고정 배율로 연결된 화학적 척도(ppm CaCO₃, meq/L 등).
    /// 계산은 배율이지만 척도끼리 직접 변환하지 않고 항상 °dKH 를 거친다.
    Chemical { factor: f64 },
}

impl ConversionRule {
    /// 기준 단위 자체에 해당하는 항등 규칙.
    pub const IDENTITY: ConversionRule = ConversionRule::Linear { factor: 1.0 };

    /// 값을 기준 단위로 환산한다.
    pub fn to_canonical(&self, value: f64) -> f64 {
        match *self {
            ConversionRule::Linear { factor } | ConversionRule::Chemical { factor } => {
                value * factor
            }
            ConversionRule::Affine { scale, zero } => (value - zero) * scale,
        }
    }

    /// 기준 단위 값을 이 규칙의 단위로 되돌린다.
    pub fn from_canonical(&self, canonical: f64) -> f64 {
        match *self {
            ConversionRule::Linear { factor } | ConversionRule::Chemical { factor } => {
                canonical / factor
            }
            ConversionRule::Affine { scale, zero } => canonical / scale + zero,
        }
    }
}
