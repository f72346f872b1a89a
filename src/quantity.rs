use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 다루는 물리량 종류를 나타낸다.
///
/// 물리량마다 내부 기준 단위가 하나씩 정해져 있으며 모든 변환은 기준 단위를 거친다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    /// 용량. 기준 단위는 mL.
    Capacity,
    /// 온도. 기준 단위는 °C.
    Temperature,
    /// 알칼리도/경도. 기준 단위는 °dKH.
    Alkalinity,
    /// 길이. 기준 단위는 cm.
    Length,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 4] = [
        QuantityKind::Capacity,
        QuantityKind::Temperature,
        QuantityKind::Alkalinity,
        QuantityKind::Length,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityKind::Capacity => "capacity",
            QuantityKind::Temperature => "temperature",
            QuantityKind::Alkalinity => "alkalinity",
            QuantityKind::Length => "length",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 알 수 없는 물리량 이름.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("알 수 없는 물리량: {0}")]
pub struct UnknownQuantity(pub String);

impl FromStr for QuantityKind {
    type Err = UnknownQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "capacity" | "volume" | "cap" => Ok(QuantityKind::Capacity),
            "temperature" | "temp" => Ok(QuantityKind::Temperature),
            "alkalinity" | "hardness" | "kh" => Ok(QuantityKind::Alkalinity),
            "length" | "len" => Ok(QuantityKind::Length),
            _ => Err(UnknownQuantity(s.to_string())),
        }
    }
}

/// 변환 결과 값과 그 값이 표현된 단위 코드를 함께 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult<T> {
    pub value: T,
    pub code: i32,
}

impl<T> ConversionResult<T> {
    pub fn new(value: T, code: i32) -> Self {
        Self { value, code }
    }
}
