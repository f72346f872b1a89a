//! 물리량별 단위 변환 회귀 테스트.
use aquarium_toolbox::conversion::{self, ConversionError};
use aquarium_toolbox::quantity::QuantityKind;
use aquarium_toolbox::units::{all_measures, measure_for_code, measure_for_symbol};
use approx::assert_relative_eq;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn roundtrip_every_unit_pair() {
    for quantity in QuantityKind::ALL {
        for from in all_measures(quantity) {
            for to in all_measures(quantity) {
                for value in [-12.5, 0.0, 1.0, 37.25, 1234.5] {
                    let there = conversion::convert(quantity, from.code, to.code, value)
                        .expect("forward");
                    let back = conversion::convert(quantity, to.code, from.code, there)
                        .expect("backward");
                    assert_close(&format!("{from} -> {to}"), back, value, 1e-9);
                }
            }
        }
    }
}

#[test]
fn same_unit_is_identity() {
    for quantity in QuantityKind::ALL {
        for m in all_measures(quantity) {
            let v = conversion::convert(quantity, m.code, m.code, 42.0).expect("convert");
            assert_relative_eq!(v, 42.0, max_relative = 1e-12);
        }
    }
}

#[test]
fn temperature_reference_points() {
    let c = conversion::convert(QuantityKind::Temperature, 1, 0, 32.0).expect("F->C");
    assert!(c.abs() < 1e-9, "32F = {c}C");
    let c = conversion::convert(QuantityKind::Temperature, 2, 0, 273.15).expect("K->C");
    assert!(c.abs() < 1e-9, "273.15K = {c}C");
    let f = conversion::convert(QuantityKind::Temperature, 0, 1, 100.0).expect("C->F");
    assert_relative_eq!(f, 212.0, max_relative = 1e-12);
}

#[test]
fn capacity_reference_points() {
    let ml = conversion::convert(QuantityKind::Capacity, 1, 6, 1.0).expect("gal->mL");
    assert_close("gal", ml, 3785.411784, 1e-9);
    let l = conversion::convert(QuantityKind::Capacity, 8, 0, 1.0).expect("m3->L");
    assert_relative_eq!(l, 1000.0, max_relative = 1e-12);
    let gal = conversion::convert(QuantityKind::Capacity, 9, 1, 231.0).expect("in3->gal");
    assert_relative_eq!(gal, 1.0, max_relative = 1e-12);
}

#[test]
fn alkalinity_reference_points() {
    let dkh = conversion::convert(QuantityKind::Alkalinity, 1, 0, 17.848).expect("ppm->dKH");
    assert_relative_eq!(dkh, 1.0, max_relative = 1e-12);
    let dkh = conversion::convert(QuantityKind::Alkalinity, 2, 0, 1.0).expect("meq->dKH");
    assert_relative_eq!(dkh, 2.8, max_relative = 1e-12);
    let mg = conversion::convert(QuantityKind::Alkalinity, 2, 3, 1.0).expect("meq->mg/L");
    assert_close("mg/L", mg, 61.0168, 1e-9);
}

#[test]
fn length_reference_points() {
    let inches = conversion::convert(QuantityKind::Length, 2, 1, 1.0).expect("ft->in");
    assert_relative_eq!(inches, 12.0, max_relative = 1e-12);
    let mm = conversion::convert(QuantityKind::Length, 4, 3, 1.5).expect("m->mm");
    assert_relative_eq!(mm, 1500.0, max_relative = 1e-12);
}

#[test]
fn unknown_codes_are_errors() {
    for quantity in QuantityKind::ALL {
        let count = all_measures(quantity).len() as i32;
        for code in [-1, count, i32::MAX] {
            let expected = ConversionError::UnknownMeasureCode { quantity, code };
            assert_eq!(measure_for_code(quantity, code), Err(expected.clone()));
            assert_eq!(conversion::to_canonical(quantity, code, 1.0), Err(expected.clone()));
            assert_eq!(conversion::from_canonical(quantity, code, 1.0), Err(expected.clone()));
            assert_eq!(conversion::convert(quantity, 0, code, 1.0), Err(expected));
        }
    }
}

#[test]
fn symbols_ignore_case() {
    let m = measure_for_symbol(QuantityKind::Capacity, "GAL").expect("gal");
    assert_eq!(m.code, 1);
    let r = conversion::convert_by_symbol(QuantityKind::Capacity, 2.0, "l", "ML").expect("L->mL");
    assert_relative_eq!(r.value, 2000.0, max_relative = 1e-12);
    assert_eq!(r.code, 6);
}

#[test]
fn unknown_symbol_is_error() {
    assert_eq!(
        conversion::convert_by_symbol(QuantityKind::Temperature, 1.0, "C", "R"),
        Err(ConversionError::UnknownUnit {
            quantity: QuantityKind::Temperature,
            text: "R".to_string(),
        })
    );
}

#[test]
fn result_carries_target_code() {
    let r = conversion::convert_to_result(QuantityKind::Length, 1, 0, 10.0).expect("in->cm");
    assert_eq!(r.code, 0);
    assert_relative_eq!(r.value, 25.4, max_relative = 1e-12);
}
