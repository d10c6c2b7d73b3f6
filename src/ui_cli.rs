use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::appliance;
use crate::config::{Config, DisplayUnits};
use crate::estimate::{format_amount, CalculationResult};
use crate::form::CalculatorForm;
use crate::i18n::{keys, Translator};
use crate::reference_data;
use crate::units::{convert_energy, convert_mass, EnergyUnit, MassUnit, CONSUMPTION_UNITS};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Countries,
    Units,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    select_menu(tr, &mut io::stdin().lock())
}

/// 입력이 끝나면(EOF) 종료를 선택한 것으로 본다.
fn select_menu(tr: &Translator, input: &mut impl BufRead) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_COUNTRIES));
    println!("{}", tr.t(keys::MAIN_MENU_UNITS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = match read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(e) if is_end_of_input(&e) => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Countries),
            "3" => return Ok(MenuChoice::Units),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 계산 메뉴를 처리한다. 검증 오류는 메시지로 보여주고 메뉴로 돌아간다.
pub fn handle_calculate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::HELP_CALCULATE));
    let mut form = CalculatorForm::new(&cfg.default_country);
    form.select_appliance(&cfg.appliance);

    let country = read_with_default(tr, keys::PROMPT_COUNTRY, &form.country)?;
    form.select_country(&country);

    let price = read_with_default(tr, keys::PROMPT_PRICE, &form.electricity_price)?;
    form.electricity_price = price;

    let appliances: Vec<&str> = appliance::list_appliances().collect();
    for (i, name) in appliances.iter().enumerate() {
        println!("  {}) {name}", i + 1);
    }
    let sel = read_with_default(tr, keys::PROMPT_APPLIANCE, &form.appliance)?;
    if let Some(name) = pick_by_number(&sel, &appliances) {
        form.select_appliance(name);
    } else {
        form.select_appliance(&sel);
    }
    let help = form.help();
    println!("[{}] {}", help.title, help.example);

    form.label_consumption = read_line(tr.t(keys::PROMPT_CONSUMPTION))?.trim().to_string();

    for (i, def) in CONSUMPTION_UNITS.iter().enumerate() {
        println!("  {}) {}", i + 1, def.label);
    }
    let default_unit = help.typical_unit;
    let sel = read_with_default(tr, keys::PROMPT_UNIT, default_unit.id())?;
    let ids: Vec<&str> = CONSUMPTION_UNITS.iter().map(|d| d.id).collect();
    let unit_id = pick_by_number(&sel, &ids).unwrap_or(sel.as_str()).to_string();
    if let Err(e) = form.select_unit_id(&unit_id) {
        println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
        return Ok(());
    }

    if let Some(prompt) = form.usage_prompt() {
        form.weekly_usage = read_line(&format!("{prompt} "))?.trim().to_string();
    }

    match form.calculate() {
        Ok(res) => {
            println!("{}", render_result(tr, &cfg.display_units, &res));
            println!("{}", tr.t(keys::DISCLAIMER));
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 국가 표를 출력한다.
pub fn handle_countries(tr: &Translator) {
    println!("{}", tr.t(keys::COUNTRIES_HEADING));
    println!("{}", tr.t(keys::COUNTRIES_COLUMNS));
    for c in reference_data::list_countries() {
        println!(
            "{:<16} {:>8.2} {:>12.2}",
            c.name, c.price_per_kwh, c.emission_factor_per_kwh
        );
    }
}

/// 소비량 단위 목록을 출력한다.
pub fn handle_units(tr: &Translator) {
    println!("{}", tr.t(keys::UNITS_HEADING));
    for def in reference_data::list_units() {
        println!(
            "{:<16} {:<16} {}",
            def.id,
            def.label,
            def.prompt.unwrap_or(tr.t(keys::UNITS_NO_USAGE))
        );
    }
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true를 반환한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} / {} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.default_country,
        cfg.display_units.energy.symbol(),
        cfg.display_units.co2_mass.symbol()
    );
    let before = cfg.clone();

    let country = read_with_default(tr, keys::SETTINGS_PROMPT_COUNTRY, &cfg.default_country)?;
    match reference_data::lookup_country(&country) {
        Some(entry) => cfg.default_country = entry.name.to_string(),
        None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{}", tr.t(keys::SETTINGS_ENERGY_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.display_units.energy = EnergyUnit::KilowattHour,
        "2" => cfg.display_units.energy = EnergyUnit::Megajoule,
        "3" => cfg.display_units.energy = EnergyUnit::Kilojoule,
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{}", tr.t(keys::SETTINGS_MASS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.display_units.co2_mass = MassUnit::Kilogram,
        "2" => cfg.display_units.co2_mass = MassUnit::Gram,
        "3" => cfg.display_units.co2_mass = MassUnit::Tonne,
        "4" => cfg.display_units.co2_mass = MassUnit::Pound,
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    Ok(*cfg != before)
}

/// 계산 결과를 표시 단위로 환산해 여러 줄 문자열로 만든다.
pub fn render_result(tr: &Translator, units: &DisplayUnits, res: &CalculationResult) -> String {
    let energy = convert_energy(res.total_annual_kwh, EnergyUnit::KilowattHour, units.energy);
    let co2 = convert_mass(res.annual_co2_kg, MassUnit::Kilogram, units.co2_mass);
    format!(
        "{} {} {}\n{} € {}\n{} {} {}",
        tr.t(keys::RESULT_ANNUAL_ENERGY),
        format_amount(energy),
        units.energy.symbol(),
        tr.t(keys::RESULT_ANNUAL_COST),
        format_amount(res.annual_cost),
        tr.t(keys::RESULT_ANNUAL_CO2),
        format_amount(co2),
        units.co2_mass.symbol(),
    )
}

/// "1".."n" 입력을 목록 항목으로 바꾼다.
fn pick_by_number<'a>(sel: &str, items: &[&'a str]) -> Option<&'a str> {
    let n = sel.trim().parse::<usize>().ok()?;
    items.get(n.checked_sub(1)?).copied()
}

fn read_with_default(tr: &Translator, key: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(&format!(
        "{} [{default}] {}: ",
        tr.t(key),
        tr.t(keys::PROMPT_KEEP_DEFAULT)
    ))?;
    let s = s.trim();
    Ok(if s.is_empty() {
        default.to_string()
    } else {
        s.to_string()
    })
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 한 줄을 읽는다. 읽은 바이트가 0이면 `UnexpectedEof` 오류를 반환한다.
fn read_line_from(input: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(buf)
}

/// 표준 입력이 닫혀서 난 오류인지 확인한다.
pub fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_by_number_is_one_based() {
        let items = ["a", "b", "c"];
        assert_eq!(pick_by_number("1", &items), Some("a"));
        assert_eq!(pick_by_number(" 3 ", &items), Some("c"));
        assert_eq!(pick_by_number("0", &items), None);
        assert_eq!(pick_by_number("4", &items), None);
        assert_eq!(pick_by_number("b", &items), None);
    }

    #[test]
    fn closed_input_selects_exit() {
        let tr = Translator::new("en");
        let mut input = io::Cursor::new(Vec::<u8>::new());
        assert_eq!(select_menu(&tr, &mut input).unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn invalid_selection_retries_until_input_ends() {
        let tr = Translator::new("en");
        let mut input = io::Cursor::new(b"9\nabc\n".to_vec());
        assert_eq!(select_menu(&tr, &mut input).unwrap(), MenuChoice::Exit);

        let mut input = io::Cursor::new(b"x\n3\n".to_vec());
        assert_eq!(select_menu(&tr, &mut input).unwrap(), MenuChoice::Units);
    }

    #[test]
    fn read_line_reports_end_of_input() {
        let mut input = io::Cursor::new(b"42\n".to_vec());
        assert_eq!(read_line_from(&mut input, "").unwrap(), "42\n");
        let err = read_line_from(&mut input, "").unwrap_err();
        assert!(is_end_of_input(&err));
    }

    #[test]
    fn render_result_uses_display_units() {
        let tr = Translator::new("en");
        let res = CalculationResult {
            total_annual_kwh: 200.0,
            annual_cost: 64.0,
            annual_co2_kg: 72.0,
        };
        let units = DisplayUnits {
            energy: EnergyUnit::Megajoule,
            co2_mass: MassUnit::Gram,
        };
        let out = render_result(&tr, &units, &res);
        assert!(out.contains("720.00 MJ"), "{out}");
        assert!(out.contains("€ 64.00"), "{out}");
        assert!(out.contains("72000.00 g"), "{out}");
    }
}
