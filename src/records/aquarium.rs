use serde::{Deserialize, Serialize};

use super::{FieldConverter, MeasuredRecord};

/// 수조 레코드.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aquarium {
    pub id: Option<i64>,
    pub name: String,
    /// 용량 [mL]
    pub capacity: Option<f64>,
    /// 수온 [°C]
    pub temperature: Option<f64>,
    /// 탄산염 경도 [°dKH]
    pub alkalinity: Option<f64>,
    /// 일반 경도 [°dKH 척도]
    pub general_hardness: Option<f64>,
    pub ph: Option<f64>,
    pub description: Option<String>,
}

impl MeasuredRecord for Aquarium {
    fn convert_with(&self, converter: &FieldConverter) -> Self {
        Aquarium {
            capacity: converter.capacity(self.capacity),
            temperature: converter.temperature(self.temperature),
            alkalinity: converter.alkalinity(self.alkalinity),
            general_hardness: converter.alkalinity(self.general_hardness),
            ..self.clone()
        }
    }
}
