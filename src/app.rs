use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::quantity::UnknownQuantity;
use crate::tank::TankError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::validation::ValidationError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 수조 형상/치수 오류
    #[error("수조 계산 오류: {0}")]
    Tank(#[from] TankError),
    /// 입력 검증 오류
    #[error("입력 오류: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Quantity(#[from] UnknownQuantity),
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정이 바뀌면 `config_path` 에 저장한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu()? {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(config),
            MenuChoice::TankVolume => ui_cli::handle_tank_volume(config),
            MenuChoice::UnitList => ui_cli::handle_unit_list(),
            MenuChoice::Settings => ui_cli::handle_settings(config)
                .and_then(|()| config.save_to(config_path).map_err(AppError::from)),
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        };
        // 입력/계산 오류는 메뉴로 돌아가 다시 입력받는다. 입출력 오류만 루프를 끝낸다.
        match outcome {
            Ok(()) => {}
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => println!("오류: {e}"),
        }
    }
    Ok(())
}
