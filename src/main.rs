use std::path::{Path, PathBuf};
use std::process::ExitCode;

use appliance_running_cost::{
    app::{self, AppError},
    config::{self, Config},
    estimate::EstimateError,
    form::CalculatorForm,
    i18n::{self, keys, Translator},
    logging, ui_cli,
};
use clap::{Args, Parser, Subcommand};

/// 가전 연간 전기요금/CO2 배출량 계산기 (CLI).
#[derive(Debug, Parser)]
#[command(name = "appliance_running_cost_cli", version)]
struct Cli {
    /// 표시 언어 (auto / en / ko / de)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 입력값으로 한 번 계산하고 종료한다.
    Estimate(EstimateArgs),
    /// 국가별 요금/배출계수 표를 출력한다.
    Countries,
    /// 소비량 단위 목록을 출력한다.
    Units,
}

#[derive(Debug, Args)]
struct EstimateArgs {
    /// 국가명. 생략하면 설정의 기본 국가.
    #[arg(long)]
    country: Option<String>,
    /// 전기요금 [EUR/kWh]. 생략하면 국가 기본 요금.
    #[arg(long, allow_hyphen_values = true)]
    price: Option<String>,
    /// 라벨 소비량 [kWh]
    #[arg(long, allow_hyphen_values = true)]
    consumption: String,
    /// per_year / per_100_cycles / per_cycle / per_1000_hours
    #[arg(long, default_value = "per_year")]
    unit: String,
    /// 주간 사용량(회 또는 시간)
    #[arg(long, allow_hyphen_values = true)]
    usage: Option<String>,
    /// 가전 종류(도움말 표시용)
    #[arg(long)]
    appliance: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    logging::init_tracing("warn");
    let cli = Cli::parse();

    let mut cfg = match config::load_from(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{}: {err}", Translator::new("en").t(keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match try_run(cli.command, &mut cfg, &tr, &cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(
    command: Option<Command>,
    cfg: &mut Config,
    tr: &Translator,
    config_path: &Path,
) -> Result<(), AppError> {
    match command {
        None => app::run(cfg, tr, config_path),
        Some(Command::Countries) => {
            ui_cli::handle_countries(tr);
            Ok(())
        }
        Some(Command::Units) => {
            ui_cli::handle_units(tr);
            Ok(())
        }
        Some(Command::Estimate(args)) => run_estimate(args, cfg, tr),
    }
}

fn run_estimate(args: EstimateArgs, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    let mut form = estimate_form(args, cfg)?;
    let res = form.calculate()?;
    println!("{}", ui_cli::render_result(tr, &cfg.display_units, &res));
    Ok(())
}

/// 명령행 인자를 폼에 채운다. 생략된 국가/가전은 설정값, 생략된 요금은 국가 기본 요금을 쓴다.
fn estimate_form(args: EstimateArgs, cfg: &Config) -> Result<CalculatorForm, EstimateError> {
    let country = args.country.unwrap_or_else(|| cfg.default_country.clone());
    let mut form = CalculatorForm::new(&country);
    form.select_appliance(args.appliance.as_deref().unwrap_or(&cfg.appliance));
    if let Some(price) = args.price {
        form.electricity_price = price;
    }
    form.label_consumption = args.consumption;
    form.select_unit_id(&args.unit)?;
    form.weekly_usage = args.usage.unwrap_or_default();
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate_args(argv: &[&str]) -> EstimateArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Some(Command::Estimate(args)) => args,
            other => panic!("expected estimate subcommand, got {other:?}"),
        }
    }

    fn german_config() -> Config {
        Config {
            default_country: "Germany".into(),
            ..Config::default()
        }
    }

    #[test]
    fn omitted_country_uses_configured_default() {
        let args = estimate_args(&["cli", "estimate", "--consumption", "200"]);
        let mut form = estimate_form(args, &german_config()).unwrap();
        assert_eq!(form.country, "Germany");
        assert_eq!(form.electricity_price, "0.32");
        let res = form.calculate().unwrap();
        assert!((res.annual_cost - 64.0).abs() < 1e-9);
        assert!((res.annual_co2_kg - 72.0).abs() < 1e-9);
    }

    #[test]
    fn price_flag_overrides_country_price() {
        let args = estimate_args(&[
            "cli",
            "estimate",
            "--country",
            "Sweden",
            "--price",
            "0.5",
            "--consumption",
            "1.2",
            "--unit",
            "per_cycle",
            "--usage",
            "5",
        ]);
        let mut form = estimate_form(args, &german_config()).unwrap();
        let res = form.calculate().unwrap();
        assert!((res.total_annual_kwh - 312.0).abs() < 1e-9);
        assert!((res.annual_cost - 156.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_unit_flag_is_rejected() {
        let args = estimate_args(&["cli", "estimate", "--consumption", "1", "--unit", "per_week"]);
        assert_eq!(
            estimate_form(args, &german_config()).unwrap_err(),
            EstimateError::UnknownUnit("per_week".into())
        );
    }

    #[test]
    fn validation_error_fails_the_run() {
        let cli = Cli::try_parse_from(["cli", "estimate", "--consumption", "-5"]).unwrap();
        let mut cfg = german_config();
        let tr = Translator::new("en");
        let path = std::env::temp_dir().join("appliance_running_cost_cli_unused.toml");
        let err = try_run(cli.command, &mut cfg, &tr, &path).unwrap_err();
        assert!(matches!(
            err,
            AppError::Estimate(EstimateError::InvalidConsumption)
        ));
    }
}
