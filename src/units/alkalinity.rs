use serde::{Deserialize, Serialize};

use super::rule::ConversionRule;
use super::MeasureUnit;
use crate::quantity::QuantityKind;

/// 1 °dKH 에 해당하는 CaCO₃ 환산 ppm.
pub const PPM_CACO3_PER_DKH: f64 = 17.848;
/// 1 meq/L 에 해당하는 °dKH.
pub const DKH_PER_MEQ_PER_LITER: f64 = 2.8;
/// 1 meq/L 에 해당하는 중탄산(HCO₃⁻) mg/L.
pub const MG_BICARBONATE_PER_MEQ: f64 = 61.0168;

/// 알칼리도/경도 단위. 내부 기준은 °dKH 이다.
///
/// ppm, meq/L, mg/L 은 서로 다른 화학적 척도이므로 항상 °dKH 를 거쳐서만 변환한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum AlkalinityUnit {
    Dkh = 0,
    Ppm = 1,
    MeqPerLiter = 2,
    MgPerLiter = 3,
}

impl MeasureUnit for AlkalinityUnit {
    const QUANTITY: QuantityKind = QuantityKind::Alkalinity;
    const ALL: &'static [Self] = &[
        AlkalinityUnit::Dkh,
        AlkalinityUnit::Ppm,
        AlkalinityUnit::MeqPerLiter,
        AlkalinityUnit::MgPerLiter,
    ];
    const CANONICAL: Self = AlkalinityUnit::Dkh;

    fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            AlkalinityUnit::Dkh => "Degrees KH",
            AlkalinityUnit::Ppm => "Parts per million (CaCO3)",
            AlkalinityUnit::MeqPerLiter => "Milliequivalents per liter",
            AlkalinityUnit::MgPerLiter => "Milligrams per liter (HCO3)",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            AlkalinityUnit::Dkh => "dKH",
            AlkalinityUnit::Ppm => "ppm",
            AlkalinityUnit::MeqPerLiter => "meq/L",
            AlkalinityUnit::MgPerLiter => "mg/L",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            AlkalinityUnit::Dkh => &["°dkh", "kh", "dgh", "°dh"],
            AlkalinityUnit::Ppm => &["ppm caco3", "mg/l caco3"],
            AlkalinityUnit::MeqPerLiter => &["meq", "mmol/l"],
            AlkalinityUnit::MgPerLiter => &["mg/l hco3", "mgl"],
        }
    }

    fn rule(self) -> ConversionRule {
        match self {
            AlkalinityUnit::Dkh => ConversionRule::IDENTITY,
            AlkalinityUnit::Ppm => ConversionRule::Chemical {
                factor: 1.0 / PPM_CACO3_PER_DKH,
            },
            AlkalinityUnit::MeqPerLiter => ConversionRule::Chemical {
                factor: DKH_PER_MEQ_PER_LITER,
            },
            AlkalinityUnit::MgPerLiter => ConversionRule::Chemical {
                factor: DKH_PER_MEQ_PER_LITER / MG_BICARBONATE_PER_MEQ,
            },
        }
    }
}

/// 알칼리도를 변환한다.
pub fn convert_alkalinity(value: f64, from: AlkalinityUnit, to: AlkalinityUnit) -> f64 {
    let dkh = from.to_canonical(value);
    to.from_canonical(dkh)
}
