use std::path::Path;

use crate::config::{self, Config};
use crate::estimate::EstimateError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 입력 검증 오류
    Estimate(EstimateError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Estimate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<EstimateError> for AppError {
    fn from(value: EstimateError) -> Self {
        AppError::Estimate(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정 변경은 `config_path`에 저장한다.
pub fn run(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<(), AppError> {
    loop {
        let step = match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, config),
            MenuChoice::Countries => {
                ui_cli::handle_countries(tr);
                Ok(())
            }
            MenuChoice::Units => {
                ui_cli::handle_units(tr);
                Ok(())
            }
            MenuChoice::Settings => run_settings(config, tr, config_path),
            MenuChoice::Exit => break,
        };
        match step {
            Ok(()) => {}
            // 입력 도중 EOF면 메뉴로 돌아가지 않고 종료한다.
            Err(e) if ui_cli::is_end_of_input(&e) => break,
            Err(e) => return Err(e),
        }
    }
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}

fn run_settings(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<(), AppError> {
    if ui_cli::handle_settings(tr, config)? {
        config::save_to(config, config_path)?;
        println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
    }
    Ok(())
}
