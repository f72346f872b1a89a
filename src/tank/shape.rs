use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 지원하는 수조 형상 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Cylinder,
    HalfCylinder,
    Bowfront,
    CornerBowfront,
    LShape,
    AngleLShape,
    EllipticalCylinder,
    Bullnose,
    Triangle,
    Trapezoid,
    FlatBackHex,
    RegularPolygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 13] = [
        ShapeKind::Rectangle,
        ShapeKind::Cylinder,
        ShapeKind::HalfCylinder,
        ShapeKind::Bowfront,
        ShapeKind::CornerBowfront,
        ShapeKind::LShape,
        ShapeKind::AngleLShape,
        ShapeKind::EllipticalCylinder,
        ShapeKind::Bullnose,
        ShapeKind::Triangle,
        ShapeKind::Trapezoid,
        ShapeKind::FlatBackHex,
        ShapeKind::RegularPolygon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::HalfCylinder => "half_cylinder",
            ShapeKind::Bowfront => "bowfront",
            ShapeKind::CornerBowfront => "corner_bowfront",
            ShapeKind::LShape => "l_shape",
            ShapeKind::AngleLShape => "angle_l_shape",
            ShapeKind::EllipticalCylinder => "elliptical_cylinder",
            ShapeKind::Bullnose => "bullnose",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::FlatBackHex => "flat_back_hex",
            ShapeKind::RegularPolygon => "regular_polygon",
        }
    }

    /// 형상이 요구하는 치수 이름. [`TankShape::from_dimensions`] 의 입력 순서와 같다.
    pub fn dimension_names(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Rectangle | ShapeKind::EllipticalCylinder => &["height", "width", "length"],
            ShapeKind::Cylinder | ShapeKind::HalfCylinder => &["height", "diameter"],
            ShapeKind::Bowfront | ShapeKind::CornerBowfront | ShapeKind::Bullnose => {
                &["height", "width", "full_width", "length"]
            }
            ShapeKind::LShape | ShapeKind::AngleLShape => {
                &["height", "length", "width", "length_arm", "width_arm"]
            }
            ShapeKind::Triangle => &["height", "side_a", "side_b", "side_c"],
            ShapeKind::Trapezoid => &["height", "width", "front_length", "back_length"],
            ShapeKind::FlatBackHex => &["height", "width", "length", "front_length", "side_width"],
            ShapeKind::RegularPolygon => &["height", "sides", "length"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 형상 정의/치수 해석 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TankError {
    #[error("알 수 없는 수조 형상: {0}")]
    UnknownShape(String),
    #[error("{shape} 형상은 치수 {expected}개가 필요합니다 (입력 {got}개)")]
    DimensionCount {
        shape: ShapeKind,
        expected: usize,
        got: usize,
    },
    #[error("다각형 변의 수는 0 이상의 정수여야 합니다: {0}")]
    InvalidSides(f64),
}

impl FromStr for ShapeKind {
    type Err = TankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('-', "_");
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == needle || k.name().replace('_', "") == needle)
            .ok_or_else(|| TankError::UnknownShape(s.to_string()))
    }
}

/// 형상별 치수를 담는 수조 정의. 모든 길이는 같은 단위(계산기 입력은 cm)이다.
///
/// 치수 검증은 하지 않는다. 0 이나 음수 치수는 의미 없는 값으로 그대로 계산된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum TankShape {
    Rectangle {
        height: f64,
        width: f64,
        length: f64,
    },
    Cylinder {
        height: f64,
        diameter: f64,
    },
    HalfCylinder {
        height: f64,
        diameter: f64,
    },
    /// 뒤쪽 직사각형(length × width) 앞에 원호 돌출부가 붙은 형상.
    /// `full_width` 는 돌출 중앙에서 잰 전체 폭.
    Bowfront {
        height: f64,
        width: f64,
        full_width: f64,
        length: f64,
    },
    /// 직각으로 만나는 두 뒷면(width, length)과 원호 앞면.
    /// `full_width` 는 뒤 모서리에서 앞면 중앙까지의 거리.
    CornerBowfront {
        height: f64,
        width: f64,
        full_width: f64,
        length: f64,
    },
    /// 바깥 치수 length × width, 각 팔의 깊이 length_arm / width_arm 인 L자 형상.
    LShape {
        height: f64,
        length: f64,
        width: f64,
        length_arm: f64,
        width_arm: f64,
    },
    /// L자의 안쪽 모서리를 사선으로 이은 오각형 형상.
    AngleLShape {
        height: f64,
        length: f64,
        width: f64,
        length_arm: f64,
        width_arm: f64,
    },
    EllipticalCylinder {
        height: f64,
        width: f64,
        length: f64,
    },
    /// 직사각형 앞면이 반타원으로 둥글게 튀어나온 형상.
    Bullnose {
        height: f64,
        width: f64,
        full_width: f64,
        length: f64,
    },
    Triangle {
        height: f64,
        side_a: f64,
        side_b: f64,
        side_c: f64,
    },
    Trapezoid {
        height: f64,
        width: f64,
        front_length: f64,
        back_length: f64,
    },
    /// 평평한 뒷면(length), 직각 옆면(side_width)과 세 장의 앞면(가운데 front_length)으로 된 반육각형.
    FlatBackHex {
        height: f64,
        width: f64,
        length: f64,
        front_length: f64,
        side_width: f64,
    },
    RegularPolygon {
        height: f64,
        sides: u32,
        length: f64,
    },
}

impl TankShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            TankShape::Rectangle { .. } => ShapeKind::Rectangle,
            TankShape::Cylinder { .. } => ShapeKind::Cylinder,
            TankShape::HalfCylinder { .. } => ShapeKind::HalfCylinder,
            TankShape::Bowfront { .. } => ShapeKind::Bowfront,
            TankShape::CornerBowfront { .. } => ShapeKind::CornerBowfront,
            TankShape::LShape { .. } => ShapeKind::LShape,
            TankShape::AngleLShape { .. } => ShapeKind::AngleLShape,
            TankShape::EllipticalCylinder { .. } => ShapeKind::EllipticalCylinder,
            TankShape::Bullnose { .. } => ShapeKind::Bullnose,
            TankShape::Triangle { .. } => ShapeKind::Triangle,
            TankShape::Trapezoid { .. } => ShapeKind::Trapezoid,
            TankShape::FlatBackHex { .. } => ShapeKind::FlatBackHex,
            TankShape::RegularPolygon { .. } => ShapeKind::RegularPolygon,
        }
    }

    pub fn height(&self) -> f64 {
        match *self {
            TankShape::Rectangle { height, .. }
            | TankShape::Cylinder { height, .. }
            | TankShape::HalfCylinder { height, .. }
            | TankShape::Bowfront { height, .. }
            | TankShape::CornerBowfront { height, .. }
            | TankShape::LShape { height, .. }
            | TankShape::AngleLShape { height, .. }
            | TankShape::EllipticalCylinder { height, .. }
            | TankShape::Bullnose { height, .. }
            | TankShape::Triangle { height, .. }
            | TankShape::Trapezoid { height, .. }
            | TankShape::FlatBackHex { height, .. }
            | TankShape::RegularPolygon { height, .. } => height,
        }
    }

    /// `kind.dimension_names()` 순서의 치수 목록으로 형상을 만든다.
    pub fn from_dimensions(kind: ShapeKind, dims: &[f64]) -> Result<TankShape, TankError> {
        let shape = match (kind, dims) {
            (ShapeKind::Rectangle, &[height, width, length]) => TankShape::Rectangle {
                height,
                width,
                length,
            },
            (ShapeKind::Cylinder, &[height, diameter]) => TankShape::Cylinder { height, diameter },
            (ShapeKind::HalfCylinder, &[height, diameter]) => {
                TankShape::HalfCylinder { height, diameter }
            }
            (ShapeKind::Bowfront, &[height, width, full_width, length]) => TankShape::Bowfront {
                height,
                width,
                full_width,
                length,
            },
            (ShapeKind::CornerBowfront, &[height, width, full_width, length]) => {
                TankShape::CornerBowfront {
                    height,
                    width,
                    full_width,
                    length,
                }
            }
            (ShapeKind::LShape, &[height, length, width, length_arm, width_arm]) => {
                TankShape::LShape {
                    height,
                    length,
                    width,
                    length_arm,
                    width_arm,
                }
            }
            (ShapeKind::AngleLShape, &[height, length, width, length_arm, width_arm]) => {
                TankShape::AngleLShape {
                    height,
                    length,
                    width,
                    length_arm,
                    width_arm,
                }
            }
            (ShapeKind::EllipticalCylinder, &[height, width, length]) => {
                TankShape::EllipticalCylinder {
                    height,
                    width,
                    length,
                }
            }
            (ShapeKind::Bullnose, &[height, width, full_width, length]) => TankShape::Bullnose {
                height,
                width,
                full_width,
                length,
            },
            (ShapeKind::Triangle, &[height, side_a, side_b, side_c]) => TankShape::Triangle {
                height,
                side_a,
                side_b,
                side_c,
            },
            (ShapeKind::Trapezoid, &[height, width, front_length, back_length]) => {
                TankShape::Trapezoid {
                    height,
                    width,
                    front_length,
                    back_length,
                }
            }
            (ShapeKind::FlatBackHex, &[height, width, length, front_length, side_width]) => {
                TankShape::FlatBackHex {
                    height,
                    width,
                    length,
                    front_length,
                    side_width,
                }
            }
            (ShapeKind::RegularPolygon, &[height, sides, length]) => TankShape::RegularPolygon {
                height,
                sides: whole_sides(sides)?,
                length,
            },
            _ => {
                return Err(TankError::DimensionCount {
                    shape: kind,
                    expected: kind.dimension_names().len(),
                    got: dims.len(),
                })
            }
        };
        Ok(shape)
    }

    /// 모든 길이 치수에 `f` 를 적용한다. 다각형 변의 수는 길이가 아니므로 그대로 둔다.
    pub fn map_lengths(self, mut f: impl FnMut(f64) -> f64) -> TankShape {
        match self {
            TankShape::Rectangle {
                height,
                width,
                length,
            } => TankShape::Rectangle {
                height: f(height),
                width: f(width),
                length: f(length),
            },
            TankShape::Cylinder { height, diameter } => TankShape::Cylinder {
                height: f(height),
                diameter: f(diameter),
            },
            TankShape::HalfCylinder { height, diameter } => TankShape::HalfCylinder {
                height: f(height),
                diameter: f(diameter),
            },
            TankShape::Bowfront {
                height,
                width,
                full_width,
                length,
            } => TankShape::Bowfront {
                height: f(height),
                width: f(width),
                full_width: f(full_width),
                length: f(length),
            },
            TankShape::CornerBowfront {
                height,
                width,
                full_width,
                length,
            } => TankShape::CornerBowfront {
                height: f(height),
                width: f(width),
                full_width: f(full_width),
                length: f(length),
            },
            TankShape::LShape {
                height,
                length,
                width,
                length_arm,
                width_arm,
            } => TankShape::LShape {
                height: f(height),
                length: f(length),
                width: f(width),
                length_arm: f(length_arm),
                width_arm: f(width_arm),
            },
            TankShape::AngleLShape {
                height,
                length,
                width,
                length_arm,
                width_arm,
            } => TankShape::AngleLShape {
                height: f(height),
                length: f(length),
                width: f(width),
                length_arm: f(length_arm),
                width_arm: f(width_arm),
            },
            TankShape::EllipticalCylinder {
                height,
                width,
                length,
            } => TankShape::EllipticalCylinder {
                height: f(height),
                width: f(width),
                length: f(length),
            },
            TankShape::Bullnose {
                height,
                width,
                full_width,
                length,
            } => TankShape::Bullnose {
                height: f(height),
                width: f(width),
                full_width: f(full_width),
                length: f(length),
            },
            TankShape::Triangle {
                height,
                side_a,
                side_b,
                side_c,
            } => TankShape::Triangle {
                height: f(height),
                side_a: f(side_a),
                side_b: f(side_b),
                side_c: f(side_c),
            },
            TankShape::Trapezoid {
                height,
                width,
                front_length,
                back_length,
            } => TankShape::Trapezoid {
                height: f(height),
                width: f(width),
                front_length: f(front_length),
                back_length: f(back_length),
            },
            TankShape::FlatBackHex {
                height,
                width,
                length,
                front_length,
                side_width,
            } => TankShape::FlatBackHex {
                height: f(height),
                width: f(width),
                length: f(length),
                front_length: f(front_length),
                side_width: f(side_width),
            },
            TankShape::RegularPolygon {
                height,
                sides,
                length,
            } => TankShape::RegularPolygon {
                height: f(height),
                sides,
                length: f(length),
            },
        }
    }
}

fn whole_sides(sides: f64) -> Result<u32, TankError> {
    if !sides.is_finite() || sides < 0.0 || sides.fract() != 0.0 || sides > f64::from(u32::MAX) {
        return Err(TankError::InvalidSides(sides));
    }
    Ok(sides as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_dimensions() {
        for kind in ShapeKind::ALL {
            let dims: Vec<f64> = (1..=kind.dimension_names().len())
                .map(|i| i as f64 * 3.0)
                .collect();
            let shape = TankShape::from_dimensions(kind, &dims).expect("valid dims");
            assert_eq!(shape.kind(), kind);
            assert_eq!(shape.height(), 3.0);
        }
    }

    #[test]
    fn wrong_dimension_count_is_reported() {
        let err = TankShape::from_dimensions(ShapeKind::Bowfront, &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            TankError::DimensionCount {
                shape: ShapeKind::Bowfront,
                expected: 4,
                got: 2
            }
        );
    }

    #[test]
    fn fractional_sides_are_rejected() {
        let err =
            TankShape::from_dimensions(ShapeKind::RegularPolygon, &[30.0, 5.5, 10.0]).unwrap_err();
        assert_eq!(err, TankError::InvalidSides(5.5));
    }

    #[test]
    fn shape_names_parse() {
        assert_eq!("corner-bowfront".parse::<ShapeKind>(), Ok(ShapeKind::CornerBowfront));
        assert_eq!("FlatBackHex".parse::<ShapeKind>(), Ok(ShapeKind::FlatBackHex));
        assert!("sphere".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn map_lengths_keeps_side_count() {
        let shape = TankShape::RegularPolygon {
            height: 1.0,
            sides: 6,
            length: 2.0,
        };
        let scaled = shape.map_lengths(|v| v * 10.0);
        assert_eq!(
            scaled,
            TankShape::RegularPolygon {
                height: 10.0,
                sides: 6,
                length: 20.0
            }
        );
    }
}
