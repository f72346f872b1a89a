use serde::{Deserialize, Serialize};

use super::{FieldConverter, MeasuredRecord};

/// 수조에 사는 생물(어류, 새우 등) 레코드. 범위 필드는 사육 적정 범위이다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dweller {
    pub id: Option<i64>,
    pub aquarium_id: Option<i64>,
    pub name: String,
    pub species: Option<String>,
    pub amount: Option<i64>,
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub min_ph: Option<f64>,
    pub max_ph: Option<f64>,
    pub min_alkalinity: Option<f64>,
    pub max_alkalinity: Option<f64>,
    /// 한 개체가 필요로 하는 최소 수조 용량 [mL]
    pub min_capacity: Option<f64>,
}

impl MeasuredRecord for Dweller {
    fn convert_with(&self, converter: &FieldConverter) -> Self {
        Dweller {
            min_temperature: converter.temperature(self.min_temperature),
            max_temperature: converter.temperature(self.max_temperature),
            min_alkalinity: converter.alkalinity(self.min_alkalinity),
            max_alkalinity: converter.alkalinity(self.max_alkalinity),
            min_capacity: converter.capacity(self.min_capacity),
            ..self.clone()
        }
    }
}
