use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const DISCLAIMER: &str = "general.disclaimer";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_COUNTRIES: &str = "main_menu.countries";
    pub const MAIN_MENU_UNITS: &str = "main_menu.units";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calculate.heading";
    pub const PROMPT_COUNTRY: &str = "prompt.country";
    pub const PROMPT_PRICE: &str = "prompt.price";
    pub const PROMPT_APPLIANCE: &str = "prompt.appliance";
    pub const PROMPT_CONSUMPTION: &str = "prompt.consumption";
    pub const PROMPT_UNIT: &str = "prompt.unit";
    pub const PROMPT_KEEP_DEFAULT: &str = "prompt.keep_default";
    pub const RESULT_ANNUAL_ENERGY: &str = "result.annual_energy";
    pub const RESULT_ANNUAL_COST: &str = "result.annual_cost";
    pub const RESULT_ANNUAL_CO2: &str = "result.annual_co2";

    pub const COUNTRIES_HEADING: &str = "countries.heading";
    pub const COUNTRIES_COLUMNS: &str = "countries.columns";
    pub const UNITS_HEADING: &str = "units.heading";
    pub const UNITS_NO_USAGE: &str = "units.no_usage";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_PROMPT_COUNTRY: &str = "settings.prompt_country";
    pub const SETTINGS_ENERGY_OPTIONS: &str = "settings.energy_options";
    pub const SETTINGS_MASS_OPTIONS: &str = "settings.mass_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_CALCULATE: &str = "help.calculate";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        tracing::debug!(
            lang = lang_code,
            pack_loaded = overrides.is_some(),
            "translator created"
        );
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        "de" | "de-de" => Some("de-de".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("de") => Some("de-de".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        "de" => Some("de-de".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = match toml::from_str(src) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "language pack parse failed");
            return None;
        }
    };
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "de-de" | "de" => parse_toml_to_map(include_str!("../locales/de-de.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        DISCLAIMER => "참고용 추정치입니다. 실제 요금과 배출량은 다를 수 있으니 제품 라벨과 전력사 정보를 확인하세요.",
        MAIN_MENU_TITLE => "\n=== 가전 전기요금 & CO2 계산기 ===",
        MAIN_MENU_CALCULATE => "1) 연간 요금/배출량 계산",
        MAIN_MENU_COUNTRIES => "2) 국가별 요금/배출계수 표",
        MAIN_MENU_UNITS => "3) 소비량 단위 목록",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CALC_HEADING => "\n-- 연간 요금/배출량 계산 --",
        PROMPT_COUNTRY => "국가",
        PROMPT_PRICE => "전기요금 [EUR/kWh]",
        PROMPT_APPLIANCE => "가전 종류",
        PROMPT_CONSUMPTION => "라벨 소비량 [kWh]: ",
        PROMPT_UNIT => "소비량 단위 번호",
        PROMPT_KEEP_DEFAULT => "(엔터 = 기본값)",
        RESULT_ANNUAL_ENERGY => "연간 소비량:",
        RESULT_ANNUAL_COST => "연간 요금:",
        RESULT_ANNUAL_CO2 => "연간 CO2 배출량:",
        COUNTRIES_HEADING => "\n-- 국가별 요금/배출계수 --",
        COUNTRIES_COLUMNS => "국가              EUR/kWh   kgCO2e/kWh",
        UNITS_HEADING => "\n-- 소비량 단위 --",
        UNITS_NO_USAGE => "(사용량 입력 불필요)",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_PROMPT_COUNTRY => "기본 국가",
        SETTINGS_ENERGY_OPTIONS => "에너지 표시 단위: 1=kWh 2=MJ 3=kJ",
        SETTINGS_MASS_OPTIONS => "CO2 표시 단위: 1=kg 2=g 3=t 4=lb",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        HELP_CALCULATE => "도움말: 국가 → 요금(엔터 시 국가 기본값) → 가전 → 라벨 소비량 → 단위 → 주간 사용량 순으로 입력.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        DISCLAIMER => "Disclaimer: this calculator provides an estimate for informational purposes only. Always consult the official energy label and your energy provider.",
        MAIN_MENU_TITLE => "\n=== Appliance Running Cost & CO2 Calculator ===",
        MAIN_MENU_CALCULATE => "1) Estimate annual cost & CO2",
        MAIN_MENU_COUNTRIES => "2) Country price/emission table",
        MAIN_MENU_UNITS => "3) Consumption units",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CALC_HEADING => "\n-- Annual cost & CO2 --",
        PROMPT_COUNTRY => "Country",
        PROMPT_PRICE => "Electricity price [EUR/kWh]",
        PROMPT_APPLIANCE => "Appliance type",
        PROMPT_CONSUMPTION => "Energy consumption from label [kWh]: ",
        PROMPT_UNIT => "Consumption unit number",
        PROMPT_KEEP_DEFAULT => "(enter = default)",
        RESULT_ANNUAL_ENERGY => "Annual consumption:",
        RESULT_ANNUAL_COST => "Estimated annual cost:",
        RESULT_ANNUAL_CO2 => "Estimated CO2 emissions:",
        COUNTRIES_HEADING => "\n-- Country price / emission factor --",
        COUNTRIES_COLUMNS => "Country           EUR/kWh   kgCO2e/kWh",
        UNITS_HEADING => "\n-- Consumption units --",
        UNITS_NO_USAGE => "(no usage input needed)",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_PROMPT_COUNTRY => "Default country",
        SETTINGS_ENERGY_OPTIONS => "Energy display unit: 1=kWh 2=MJ 3=kJ",
        SETTINGS_MASS_OPTIONS => "CO2 display unit: 1=kg 2=g 3=t 4=lb",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        HELP_CALCULATE => "Help: country → price (enter keeps the country default) → appliance → label kWh → unit → weekly usage.",
        _ => "[missing translation]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("de")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("de")), "de-de");
        assert_eq!(resolve_language("en-gb", None), "en-us");
    }

    #[test]
    fn korean_falls_back_to_built_in() {
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
        assert_eq!(tr.language(), Language::Ko);
    }

    #[test]
    fn built_in_pack_has_gui_keys() {
        let tr = Translator::new_with_pack("de-de", Some("does-not-exist"));
        assert!(tr.lookup("gui.form.calculate").is_some());
        // 언어팩에 있는 키는 내장 문자열보다 우선한다.
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Fehler");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[gui.form]\ncalculate = \"Go\"\n").unwrap();
        assert_eq!(map.get("gui.form.calculate").map(String::as_str), Some("Go"));
    }
}
