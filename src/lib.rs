//! 단위 변환과 수조 용량 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod quantity;
pub mod records;
pub mod tank;
pub mod ui_cli;
pub mod units;
pub mod validation;
