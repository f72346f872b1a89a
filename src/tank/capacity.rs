use crate::conversion::ConversionError;
use crate::quantity::{ConversionResult, QuantityKind};
use crate::units::measure_for_code;

use super::shape::TankShape;
use super::volume::compute_volume_ml;

/// 사용자 길이 단위로 입력된 형상의 용량을 사용자 용량 단위로 계산한다.
///
/// 치수를 cm 로 바꿔 mL 체적을 구한 뒤 `capacity_code` 단위로 되돌린다.
pub fn tank_capacity(
    shape: &TankShape,
    length_code: i32,
    capacity_code: i32,
) -> Result<ConversionResult<f64>, ConversionError> {
    let length = measure_for_code(QuantityKind::Length, length_code)?;
    let capacity = measure_for_code(QuantityKind::Capacity, capacity_code)?;
    let shape_cm = shape.map_lengths(|v| length.to_canonical(v));
    let ml = compute_volume_ml(&shape_cm);
    Ok(ConversionResult::new(
        capacity.from_canonical(ml),
        capacity.code,
    ))
}
