use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::quantity::{ConversionResult, QuantityKind};
use crate::tank::{self, ShapeKind, TankShape};
use crate::units::{all_measures, measure_for_code, measure_for_symbol, Measure};
use crate::validation::{self, ValidationError};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    TankVolume,
    UnitList,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Aquarium Toolbox ===");
    println!("1) 단위 변환기");
    println!("2) 수조 용량 계산");
    println!("3) 단위 목록");
    println!("4) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::TankVolume),
            "3" => return Ok(MenuChoice::UnitList),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    let quantity = read_quantity()?;
    let value = read_value("값 입력: ", validation::parse_decimal)?;
    let default_code = cfg.units.code(quantity);
    let from = read_measure(quantity, "입력 단위", default_code)?;
    let to = read_measure(quantity, "변환 단위", default_code)?;
    let result = conversion::convert_to_result(quantity, from.code, to.code, value)?;
    print_conversion(value, &from, result)?;
    Ok(())
}

/// 수조 용량 계산 메뉴를 처리한다.
pub fn handle_tank_volume(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 수조 용량 계산 --");
    for (i, kind) in ShapeKind::ALL.iter().enumerate() {
        println!("{:>2}) {}", i + 1, kind);
    }
    let kind = loop {
        let n = read_value("형상 번호: ", validation::parse_non_negative_integer)?;
        match usize::try_from(n).ok().and_then(|n| n.checked_sub(1)) {
            Some(i) if i < ShapeKind::ALL.len() => break ShapeKind::ALL[i],
            _ => println!("지원하지 않는 번호입니다."),
        }
    };
    let length = cfg.units.resolve(QuantityKind::Length)?;
    let mut dims = Vec::with_capacity(kind.dimension_names().len());
    for name in kind.dimension_names() {
        let prompt = if *name == "sides" {
            "sides (변의 수): ".to_string()
        } else {
            format!("{name} [{}]: ", length.symbol)
        };
        dims.push(read_value(&prompt, validation::parse_positive_decimal)?);
    }
    let shape = TankShape::from_dimensions(kind, &dims)?;
    let result = tank::tank_capacity(&shape, cfg.units.length, cfg.units.capacity)?;
    print_volume(&shape, result)?;
    Ok(())
}

/// 모든 물리량의 단위 목록을 출력한다.
pub fn handle_unit_list() -> Result<(), AppError> {
    for quantity in QuantityKind::ALL {
        print_units(quantity);
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 단위 시스템: {:?}", cfg.unit_system);
    for quantity in QuantityKind::ALL {
        match cfg.units.resolve(quantity) {
            Ok(m) => println!("  {quantity}: {m}"),
            Err(e) => println!("  {quantity}: {e}"),
        }
    }
    println!("1) Metric  2) Imperial  3) 물리량별 단위 변경");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => cfg.apply_unit_system(UnitSystem::Metric),
        "2" => cfg.apply_unit_system(UnitSystem::Imperial),
        "3" => {
            let quantity = read_quantity()?;
            let measure = read_measure(quantity, "새 단위", cfg.units.code(quantity))?;
            cfg.set_unit(quantity, measure.code)?;
        }
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            return Ok(());
        }
    }
    println!("단위 시스템이 {:?} 로 설정되었습니다.", cfg.unit_system);
    Ok(())
}

/// 물리량의 단위 목록(코드, 기호, 이름)을 출력한다.
pub fn print_units(quantity: QuantityKind) {
    println!("[{quantity}]");
    for m in all_measures(quantity) {
        println!("  {:>2}  {:<6} {}", m.code, m.symbol, m.name);
    }
}

pub fn print_conversion(
    value: f64,
    from: &Measure,
    result: ConversionResult<f64>,
) -> Result<(), AppError> {
    let to = measure_for_code(from.quantity, result.code)?;
    println!(
        "변환 결과: {} {} = {} {}",
        format_value(value),
        from.symbol,
        format_value(result.value),
        to.symbol
    );
    Ok(())
}

pub fn print_volume(shape: &TankShape, result: ConversionResult<f64>) -> Result<(), AppError> {
    let unit = measure_for_code(QuantityKind::Capacity, result.code)?;
    println!(
        "{} 수조 용량: {} {}",
        shape.kind(),
        format_value(result.value),
        unit.symbol
    );
    Ok(())
}

/// 화면 표시용 반올림. 계산 값 자체는 반올림하지 않는다.
pub fn format_value(value: f64) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn read_quantity() -> Result<QuantityKind, AppError> {
    println!("1) 용량  2) 온도  3) 알칼리도/경도  4) 길이");
    loop {
        let sel = read_line("항목 번호를 입력: ")?;
        match parse_quantity_choice(&sel) {
            Ok(kind) => return Ok(kind),
            Err(e) => println!("{e}"),
        }
    }
}

/// 메뉴 번호(1~4) 또는 물리량 이름을 해석한다.
fn parse_quantity_choice(text: &str) -> Result<QuantityKind, AppError> {
    match text.trim() {
        "1" => Ok(QuantityKind::Capacity),
        "2" => Ok(QuantityKind::Temperature),
        "3" => Ok(QuantityKind::Alkalinity),
        "4" => Ok(QuantityKind::Length),
        other => Ok(other.parse::<QuantityKind>()?),
    }
}

fn read_measure(quantity: QuantityKind, label: &str, default_code: i32) -> Result<Measure, AppError> {
    let symbols: Vec<&str> = all_measures(quantity).iter().map(|m| m.symbol).collect();
    println!("{label} ({}), 엔터는 기본값", symbols.join(", "));
    loop {
        let sel = read_line(&format!("{label}: "))?;
        let text = sel.trim();
        let found = if text.is_empty() {
            measure_for_code(quantity, default_code)
        } else {
            measure_for_symbol(quantity, text)
        };
        match found {
            Ok(m) => return Ok(m),
            Err(e) => println!("{e}"),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_value<T>(
    prompt: &str,
    parse: fn(&str) -> Result<T, ValidationError>,
) -> Result<T, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse(&s) {
            Ok(v) => return Ok(v),
            Err(e) => println!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_trims_trailing_zeros() {
        assert_eq!(format_value(54.0), "54");
        assert_eq!(format_value(12.56637), "12.5664");
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(-0.00001), "0");
    }

    #[test]
    fn quantity_choice_by_number_or_name() {
        assert_eq!(parse_quantity_choice("2\n").ok(), Some(QuantityKind::Temperature));
        assert_eq!(parse_quantity_choice(" Length ").ok(), Some(QuantityKind::Length));
        match parse_quantity_choice("9") {
            Err(AppError::Quantity(e)) => assert_eq!(e.0, "9"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
