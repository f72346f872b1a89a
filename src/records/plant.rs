use serde::{Deserialize, Serialize};

use super::{FieldConverter, MeasuredRecord};

/// 수초 레코드.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: Option<i64>,
    pub aquarium_id: Option<i64>,
    pub name: String,
    pub species: Option<String>,
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub min_ph: Option<f64>,
    pub max_ph: Option<f64>,
    pub min_alkalinity: Option<f64>,
    pub max_alkalinity: Option<f64>,
}

impl MeasuredRecord for Plant {
    fn convert_with(&self, converter: &FieldConverter) -> Self {
        Plant {
            min_temperature: converter.temperature(self.min_temperature),
            max_temperature: converter.temperature(self.max_temperature),
            min_alkalinity: converter.alkalinity(self.min_alkalinity),
            max_alkalinity: converter.alkalinity(self.max_alkalinity),
            ..self.clone()
        }
    }
}
