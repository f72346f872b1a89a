use std::path::PathBuf;

use aquarium_toolbox::app::{self, AppError};
use aquarium_toolbox::config::{self, UnitSystem};
use aquarium_toolbox::quantity::QuantityKind;
use aquarium_toolbox::tank::{self, ShapeKind, TankShape};
use aquarium_toolbox::units::measure_for_symbol;
use aquarium_toolbox::{conversion, ui_cli, validation};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// 수조 용량 계산 및 수질 단위 변환 도구.
#[derive(Debug, Parser)]
#[command(name = "aquarium_toolbox", version)]
struct Cli {
    /// 단위 설정 파일 경로
    #[arg(long, global = true, default_value = config::CONFIG_FILE)]
    config: PathBuf,
    /// 하위 명령이 없으면 대화형 메뉴를 실행한다.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 물리량의 단위 목록(코드, 기호, 이름)
    Units { quantity: Option<QuantityKind> },
    /// 값 하나를 다른 단위로 변환
    Convert {
        quantity: QuantityKind,
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        to: String,
    },
    /// 형상과 치수로 수조 용량 계산
    Volume {
        shape: ShapeKind,
        /// 형상별 치수 (순서는 `volume <shape>` 오류 메시지 참고)
        #[arg(required = true, num_args = 1..)]
        dims: Vec<String>,
        /// 치수 단위 (기본: 설정값)
        #[arg(long)]
        length_unit: Option<String>,
        /// 결과 용량 단위 (기본: 설정값)
        #[arg(long)]
        capacity_unit: Option<String>,
    },
    /// 단위 설정 변경 후 저장
    Settings {
        #[arg(long, value_enum)]
        system: Option<SystemArg>,
        #[arg(long)]
        capacity: Option<String>,
        #[arg(long)]
        temperature: Option<String>,
        #[arg(long)]
        alkalinity: Option<String>,
        #[arg(long)]
        length: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SystemArg {
    Metric,
    Imperial,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    init_tracing();
    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default_from(&cli.config)?;
    match cli.command {
        None => app::run(&mut cfg, &cli.config)?,
        Some(Command::Units { quantity }) => match quantity {
            Some(q) => ui_cli::print_units(q),
            None => ui_cli::handle_unit_list()?,
        },
        Some(Command::Convert {
            quantity,
            value,
            from,
            to,
        }) => {
            let value = validation::parse_decimal(&value)?;
            let from_measure = measure_for_symbol(quantity, &from)?;
            let result = conversion::convert_by_symbol(quantity, value, &from, &to)?;
            ui_cli::print_conversion(value, &from_measure, result)?;
        }
        Some(Command::Volume {
            shape,
            dims,
            length_unit,
            capacity_unit,
        }) => {
            let dims = dims
                .iter()
                .map(|d| validation::parse_positive_decimal(d))
                .collect::<Result<Vec<_>, _>>()?;
            let tank_shape = TankShape::from_dimensions(shape, &dims)?;
            let length_code = match length_unit {
                Some(u) => measure_for_symbol(QuantityKind::Length, &u)?.code,
                None => cfg.units.length,
            };
            let capacity_code = match capacity_unit {
                Some(u) => measure_for_symbol(QuantityKind::Capacity, &u)?.code,
                None => cfg.units.capacity,
            };
            let result = tank::tank_capacity(&tank_shape, length_code, capacity_code)?;
            ui_cli::print_volume(&tank_shape, result)?;
        }
        Some(Command::Settings {
            system,
            capacity,
            temperature,
            alkalinity,
            length,
        }) => {
            if let Some(system) = system {
                cfg.apply_unit_system(match system {
                    SystemArg::Metric => UnitSystem::Metric,
                    SystemArg::Imperial => UnitSystem::Imperial,
                });
            }
            let overrides = [
                (QuantityKind::Capacity, capacity),
                (QuantityKind::Temperature, temperature),
                (QuantityKind::Alkalinity, alkalinity),
                (QuantityKind::Length, length),
            ];
            for (quantity, text) in overrides {
                if let Some(text) = text {
                    let measure = measure_for_symbol(quantity, &text)?;
                    cfg.set_unit(quantity, measure.code)?;
                }
            }
            cfg.save_to(&cli.config)?;
            println!("단위 시스템: {:?}", cfg.unit_system);
            for quantity in QuantityKind::ALL {
                println!("  {quantity}: {}", cfg.units.resolve(quantity)?);
            }
        }
    }
    Ok(())
}
