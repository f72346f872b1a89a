//! 형상별 수조 내부 체적 계산.
//!
//! 입력 치수는 모두 cm, 결과는 mL(= cm³)이다. 바닥 단면적 × 높이로 계산한다.

use std::f64::consts::PI;

use super::shape::TankShape;

/// 수조 형상의 내부 체적을 mL 로 계산한다.
pub fn compute_volume_ml(shape: &TankShape) -> f64 {
    let volume = match *shape {
        TankShape::Rectangle {
            height,
            width,
            length,
        } => rectangle_volume(height, width, length),
        TankShape::Cylinder { height, diameter } => cylinder_volume(height, diameter),
        TankShape::HalfCylinder { height, diameter } => half_cylinder_volume(height, diameter),
        TankShape::Bowfront {
            height,
            width,
            full_width,
            length,
        } => bowfront_volume(height, width, full_width, length),
        TankShape::CornerBowfront {
            height,
            width,
            full_width,
            length,
        } => corner_bowfront_volume(height, width, full_width, length),
        TankShape::LShape {
            height,
            length,
            width,
            length_arm,
            width_arm,
        } => l_shape_volume(height, length, width, length_arm, width_arm),
        TankShape::AngleLShape {
            height,
            length,
            width,
            length_arm,
            width_arm,
        } => angle_l_shape_volume(height, length, width, length_arm, width_arm),
        TankShape::EllipticalCylinder {
            height,
            width,
            length,
        } => elliptical_cylinder_volume(height, width, length),
        TankShape::Bullnose {
            height,
            width,
            full_width,
            length,
        } => bullnose_volume(height, width, full_width, length),
        TankShape::Triangle {
            height,
            side_a,
            side_b,
            side_c,
        } => triangle_volume(height, side_a, side_b, side_c),
        TankShape::Trapezoid {
            height,
            width,
            front_length,
            back_length,
        } => trapezoid_volume(height, width, front_length, back_length),
        TankShape::FlatBackHex {
            height,
            width,
            length,
            front_length,
            side_width,
        } => flat_back_hex_volume(height, width, length, front_length, side_width),
        TankShape::RegularPolygon {
            height,
            sides,
            length,
        } => regular_polygon_volume(height, sides, length),
    };
    tracing::debug!(shape = %shape.kind(), volume_ml = volume, "tank volume");
    volume
}

/// 직사각형: `height × width × length`.
pub fn rectangle_volume(height: f64, width: f64, length: f64) -> f64 {
    height * width * length
}

/// 원기둥: `π × (diameter/2)² × height`.
pub fn cylinder_volume(height: f64, diameter: f64) -> f64 {
    let radius = diameter / 2.0;
    PI * radius * radius * height
}

/// 반원기둥: 원기둥 체적의 절반.
pub fn half_cylinder_volume(height: f64, diameter: f64) -> f64 {
    cylinder_volume(height, diameter) * 0.5
}

/// 직사각형 본체 + 앞면 원호(현 = length, 높이 = full_width − width).
pub fn bowfront_volume(height: f64, width: f64, full_width: f64, length: f64) -> f64 {
    let area = length * width + circular_segment_area(length, full_width - width);
    area * height
}

/// 두 뒷면이 직각인 직각삼각형 + 빗변 위의 원호.
/// 원호 높이는 뒤 모서리에서 앞 중앙까지(full_width)에서 삼각형 높이를 뺀 값이다.
pub fn corner_bowfront_volume(height: f64, width: f64, full_width: f64, length: f64) -> f64 {
    let hypotenuse = width.hypot(length);
    let triangle = width * length / 2.0;
    let bow = if hypotenuse > 0.0 {
        let altitude = width * length / hypotenuse;
        circular_segment_area(hypotenuse, full_width - altitude)
    } else {
        0.0
    };
    (triangle + bow) * height
}

/// L자 바닥(신발끈 공식) × height. 바깥 length × width 에서 팔 밖의 사각형을 뺀 면적이다.
pub fn l_shape_volume(
    height: f64,
    length: f64,
    width: f64,
    length_arm: f64,
    width_arm: f64,
) -> f64 {
    let outline = [
        (0.0, 0.0),
        (length, 0.0),
        (length, length_arm),
        (width_arm, length_arm),
        (width_arm, width),
        (0.0, width),
    ];
    polygon_area(&outline) * height
}

/// L자 안쪽 모서리를 사선으로 자른 오각형 바닥(신발끈 공식) × height.
pub fn angle_l_shape_volume(
    height: f64,
    length: f64,
    width: f64,
    length_arm: f64,
    width_arm: f64,
) -> f64 {
    let outline = [
        (0.0, 0.0),
        (length, 0.0),
        (length, length_arm),
        (width_arm, width),
        (0.0, width),
    ];
    polygon_area(&outline) * height
}

/// 타원기둥: `π × (length/2) × (width/2) × height`.
pub fn elliptical_cylinder_volume(height: f64, width: f64, length: f64) -> f64 {
    PI * (length / 2.0) * (width / 2.0) * height
}

/// 직사각형 본체 + 앞면 반타원(장반경 length/2, 단반경 full_width − width).
pub fn bullnose_volume(height: f64, width: f64, full_width: f64, length: f64) -> f64 {
    let nose = (full_width - width).max(0.0);
    let area = length * width + PI * (length / 2.0) * nose / 2.0;
    area * height
}

/// 세 변으로 정해지는 삼각형(헤론 공식). 성립하지 않는 삼각형은 면적 0.
pub fn triangle_volume(height: f64, side_a: f64, side_b: f64, side_c: f64) -> f64 {
    let s = (side_a + side_b + side_c) / 2.0;
    let q = s * (s - side_a) * (s - side_b) * (s - side_c);
    q.max(0.0).sqrt() * height
}

/// 사다리꼴 바닥: `(front_length + back_length)/2 × width × height`.
pub fn trapezoid_volume(height: f64, width: f64, front_length: f64, back_length: f64) -> f64 {
    (front_length + back_length) / 2.0 * width * height
}

/// 뒷면 직사각형(length × side_width) + 앞쪽 사다리꼴(length, front_length, 깊이 width − side_width).
pub fn flat_back_hex_volume(
    height: f64,
    width: f64,
    length: f64,
    front_length: f64,
    side_width: f64,
) -> f64 {
    let back = length * side_width;
    let front = (length + front_length) / 2.0 * (width - side_width);
    (back + front) * height
}

/// 정다각형 기둥. 변이 3개 미만이면 면적 0.
pub fn regular_polygon_volume(height: f64, sides: u32, length: f64) -> f64 {
    if sides < 3 {
        return 0.0;
    }
    let n = f64::from(sides);
    let area = n * length * length / (4.0 * (PI / n).tan());
    area * height
}

/// 현의 길이와 높이(sagitta)로 정해지는 원의 활꼴 면적. 높이가 0 이하이면 평평한 면으로 본다.
fn circular_segment_area(chord: f64, sagitta: f64) -> f64 {
    if chord <= 0.0 || sagitta <= 0.0 {
        return 0.0;
    }
    let half_chord = chord / 2.0;
    let radius = (half_chord * half_chord + sagitta * sagitta) / (2.0 * sagitta);
    let offset = radius - sagitta;
    let angle = (offset / radius).clamp(-1.0, 1.0).acos();
    radius * radius * angle - offset * half_chord
}

/// 꼭짓점 순서대로 주어진 다각형의 면적(신발끈 공식).
fn polygon_area(points: &[(f64, f64)]) -> f64 {
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&(x0, y0), &(x1, y1))| x0 * y1 - x1 * y0)
        .sum();
    twice.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn semicircle_segment() {
        assert_relative_eq!(circular_segment_area(2.0, 1.0), PI / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn deep_segment_exceeds_semicircle() {
        // 반원보다 깊은 활꼴: r = 1.25, 면적은 원 전체보다 작고 반원보다 크다.
        let area = circular_segment_area(2.0, 2.0);
        let r: f64 = 1.25;
        assert!(area > PI * r * r / 2.0);
        assert!(area < PI * r * r);
    }

    #[test]
    fn flat_segment_is_zero() {
        assert_eq!(circular_segment_area(60.0, 0.0), 0.0);
        assert_eq!(circular_segment_area(60.0, -2.0), 0.0);
    }

    #[test]
    fn unit_square_shoelace() {
        let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        assert_relative_eq!(polygon_area(&square), 1.0);
    }
}
