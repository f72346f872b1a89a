//! 단위 enum 을 직접 쓰는 변환 API 테스트.
use aquarium_toolbox::quantity::QuantityKind;
use aquarium_toolbox::units::alkalinity::PPM_CACO3_PER_DKH;
use aquarium_toolbox::units::{
    convert_alkalinity, convert_capacity, convert_length, convert_temperature, AlkalinityUnit,
    CapacityUnit, LengthUnit, MeasureUnit, TemperatureUnit,
};
use approx::assert_relative_eq;

#[test]
fn typed_conversions() {
    assert_relative_eq!(
        convert_capacity(10.0, CapacityUnit::Liters, CapacityUnit::MetricCups),
        40.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_capacity(3.0, CapacityUnit::Teaspoons, CapacityUnit::Tablespoons),
        1.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_temperature(-40.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        -40.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_alkalinity(1.0, AlkalinityUnit::Dkh, AlkalinityUnit::Ppm),
        PPM_CACO3_PER_DKH,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_length(25.4, LengthUnit::Millimeters, LengthUnit::Inches),
        1.0,
        max_relative = 1e-12
    );
}

#[test]
fn codes_follow_list_order() {
    for (i, unit) in CapacityUnit::ALL.iter().enumerate() {
        assert_eq!(unit.code(), i as i32);
        assert_eq!(CapacityUnit::from_code(i as i32), Some(*unit));
    }
    assert_eq!(TemperatureUnit::CANONICAL, TemperatureUnit::Celsius);
    assert_eq!(LengthUnit::from_code(-1), None);
    assert!(AlkalinityUnit::try_from_code(4).is_err());
}

#[test]
fn quantity_names() {
    assert_eq!("Volume".parse::<QuantityKind>(), Ok(QuantityKind::Capacity));
    assert_eq!("kh".parse::<QuantityKind>(), Ok(QuantityKind::Alkalinity));
    assert!("pressure".parse::<QuantityKind>().is_err());
    for q in QuantityKind::ALL {
        assert_eq!(q.to_string().parse::<QuantityKind>(), Ok(q));
    }
}
