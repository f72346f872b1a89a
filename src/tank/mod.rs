//! 수조 형상 정의와 내부 용량 계산 모듈 모음.

pub mod capacity;
pub mod shape;
pub mod volume;

pub use capacity::tank_capacity;
pub use shape::{ShapeKind, TankError, TankShape};
pub use volume::compute_volume_ml;
