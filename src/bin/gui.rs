#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 계산기 폼.

use appliance_running_cost::{
    appliance, config,
    estimate::{format_amount, EstimateError},
    form::CalculatorForm,
    i18n, logging, reference_data,
    units::{
        convert_energy, convert_mass, ConsumptionUnit, EnergyUnit, MassUnit, CONSUMPTION_UNITS,
    },
};
use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path, path::PathBuf};

#[derive(Debug, Parser)]
#[command(name = "appliance_running_cost", version)]
struct GuiArgs {
    /// 표시 언어 (auto / en-us / ko-kr / de-de)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    logging::init_tracing("warn");
    let args = GuiArgs::parse();

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([760.0, 820.0])
        .with_transparent(true);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = match config::load_from(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "config load failed, using defaults");
            config::Config::default()
        }
    };
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    let config_path = args.config;
    eframe::run_native(
        "Appliance Running Cost & CO2 Calculator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::info!("{e}");
            }
            Box::new(GuiApp::new(app_cfg.clone(), config_path.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["assets/icon.png", "icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 폰트 바이트를 기본 글꼴 뒤에 폴백으로 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시를 위해 시스템 CJK 폰트를 찾아 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/NotoSansKR-Regular.ttf"),
        PathBuf::from("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc"),
        PathBuf::from("/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc"),
        PathBuf::from("/System/Library/Fonts/AppleSDGothicNeo.ttc"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.insert(0, fonts.join("malgun.ttf"));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }
    Err("CJK font not found; Korean text may not render.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn error_text(err: &EstimateError, txt: &dyn Fn(&str, &str) -> String) -> String {
    match err {
        EstimateError::InvalidPrice => txt("gui.error.invalid_price", &err.to_string()),
        EstimateError::InvalidConsumption => {
            txt("gui.error.invalid_consumption", &err.to_string())
        }
        EstimateError::InvalidUsage => txt("gui.error.invalid_usage", &err.to_string()),
        EstimateError::UnknownCountry(_) | EstimateError::UnknownUnit(_) => err.to_string(),
    }
}

fn unit_label(unit: ConsumptionUnit, txt: &dyn Fn(&str, &str) -> String) -> String {
    let def = unit.def();
    txt(&format!("gui.unit.label.{}", def.id), def.label)
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: i18n::Translator,
    form: CalculatorForm,
    lang_input: String,
    window_alpha: f32,
    show_settings_modal: bool,
    show_about_modal: bool,
    show_formula_modal: bool,
    save_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::debug!(lang = %lang_code, "GUI language resolved");
        let mut form = CalculatorForm::new(&config.default_country);
        form.select_appliance(&config.appliance);
        Self {
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            config_path,
            tr,
            form,
            show_settings_modal: false,
            show_about_modal: false,
            show_formula_modal: false,
            save_status: None,
        }
    }

    /// 설정 창의 값을 반영하고 저장한다. 번역기는 즉시 다시 만든다.
    fn apply_settings(&mut self) -> Result<(), config::ConfigError> {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr =
            i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        config::save_to(&self.config, &self.config_path)
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        ui.heading(txt(
            "gui.app_title",
            "Appliance Running Cost & CO2 Calculator",
        ));
        ui.label(
            egui::RichText::new(txt(
                "gui.subtitle",
                "Estimate your appliance's annual running cost and CO2 emissions.",
            ))
            .small(),
        );
        ui.add_space(12.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("calc_grid")
                .num_columns(2)
                .spacing([16.0, 10.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.form.country", "Country"),
                        &txt(
                            "gui.form.country_tip",
                            "Selecting a country fills in its average electricity price.",
                        ),
                    );
                    let mut country = self.form.country.clone();
                    egui::ComboBox::from_id_source("country")
                        .selected_text(&country)
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for c in reference_data::list_countries() {
                                ui.selectable_value(&mut country, c.name.to_string(), c.name);
                            }
                        });
                    if country != self.form.country {
                        self.form.select_country(&country);
                    }
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.form.price", "Electricity price (€/kWh)"),
                        &txt(
                            "gui.form.price_tip",
                            "You can overwrite the country default with your own tariff.",
                        ),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.electricity_price)
                            .desired_width(220.0),
                    );
                    ui.end_row();

                    ui.label(txt("gui.form.appliance", "Appliance type"));
                    let mut appliance_sel = self.form.appliance.clone();
                    egui::ComboBox::from_id_source("appliance")
                        .selected_text(&appliance_sel)
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for name in appliance::list_appliances() {
                                ui.selectable_value(&mut appliance_sel, name.to_string(), name);
                            }
                        });
                    if appliance_sel != self.form.appliance {
                        self.form.select_appliance(&appliance_sel);
                    }
                    ui.end_row();

                    ui.label(txt(
                        "gui.form.consumption",
                        "Energy consumption from label (kWh)",
                    ));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.label_consumption)
                            .hint_text(txt("gui.form.consumption_hint", "e.g., 54"))
                            .desired_width(220.0),
                    );
                    ui.end_row();

                    ui.label(txt("gui.form.unit", "Unit of energy consumption"));
                    let mut unit = self.form.unit;
                    egui::ComboBox::from_id_source("unit")
                        .selected_text(unit_label(unit, &txt))
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for def in &CONSUMPTION_UNITS {
                                ui.selectable_value(&mut unit, def.unit, unit_label(def.unit, &txt));
                            }
                        });
                    if unit != self.form.unit {
                        self.form.select_unit(unit);
                    }
                    ui.end_row();

                    if let Some(prompt) = self.form.usage_prompt() {
                        let key = format!("gui.unit.prompt.{}", self.form.unit.id());
                        ui.label(txt(&key, prompt));
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form.weekly_usage)
                                .hint_text(txt("gui.form.usage_hint", "e.g., 4"))
                                .desired_width(220.0),
                        );
                        ui.end_row();
                    }
                });
        });

        let help = self.form.help();
        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new(help.title).strong());
            ui.label(egui::RichText::new(help.example).small());
        });

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(
                egui::RichText::new(txt("gui.form.calculate", "Calculate")).strong(),
            )
            .min_size(egui::vec2(180.0, 36.0));
            if ui.add(button).clicked() {
                // 결과/오류는 form 내부 상태로 남는다.
                let _ = self.form.calculate();
            }
        });
        ui.add_space(8.0);

        if let Some(err) = self.form.error() {
            egui::Frame::group(ui.style())
                .fill(egui::Color32::from_rgb(254, 226, 226))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(error_text(err, &txt))
                            .color(egui::Color32::from_rgb(153, 27, 27)),
                    );
                });
        }

        if let Some(res) = self.form.result() {
            let units = &self.config.display_units;
            let energy =
                convert_energy(res.total_annual_kwh, EnergyUnit::KilowattHour, units.energy);
            let co2 = convert_mass(res.annual_co2_kg, MassUnit::Kilogram, units.co2_mass);
            let green = egui::Color32::from_rgb(22, 163, 74);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.columns(2, |cols| {
                    cols[0].vertical_centered(|ui| {
                        ui.label(txt("gui.result.cost", "Estimated Annual Cost"));
                        ui.label(
                            egui::RichText::new(format!("€ {}", format_amount(res.annual_cost)))
                                .size(32.0)
                                .strong()
                                .color(green),
                        );
                    });
                    cols[1].vertical_centered(|ui| {
                        ui.label(txt("gui.result.co2", "Estimated CO2 Emissions"));
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                format_amount(co2),
                                units.co2_mass.symbol()
                            ))
                            .size(32.0)
                            .strong()
                            .color(green),
                        );
                    });
                });
                ui.vertical_centered(|ui| {
                    ui.label(format!(
                        "{} {} {}",
                        txt("gui.result.energy", "Annual consumption:"),
                        format_amount(energy),
                        units.energy.symbol()
                    ));
                });
            });
        }

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(txt(
                "gui.disclaimer",
                "Disclaimer: This calculator provides an estimate for informational purposes only.",
            ))
            .small()
            .weak(),
        );
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };
        let mut open = self.show_settings_modal;
        let mut save_clicked = false;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(txt("gui.settings.language", "Language"));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            txt("gui.settings.lang.auto", "System"),
                        );
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        ui.selectable_value(&mut self.lang_input, "de-de".into(), "Deutsch");
                    });
                ui.separator();

                ui.label(txt("gui.settings.default_country", "Default country"));
                egui::ComboBox::from_id_source("default_country")
                    .selected_text(&self.config.default_country)
                    .show_ui(ui, |ui| {
                        for c in reference_data::list_countries() {
                            ui.selectable_value(
                                &mut self.config.default_country,
                                c.name.to_string(),
                                c.name,
                            );
                        }
                    });
                ui.separator();

                ui.label(txt("gui.settings.energy_unit", "Energy display unit"));
                ui.horizontal(|ui| {
                    for u in [
                        EnergyUnit::KilowattHour,
                        EnergyUnit::Megajoule,
                        EnergyUnit::Kilojoule,
                    ] {
                        ui.selectable_value(&mut self.config.display_units.energy, u, u.symbol());
                    }
                });
                ui.label(txt("gui.settings.mass_unit", "CO2 display unit"));
                ui.horizontal(|ui| {
                    for u in [
                        MassUnit::Kilogram,
                        MassUnit::Gram,
                        MassUnit::Tonne,
                        MassUnit::Pound,
                    ] {
                        ui.selectable_value(&mut self.config.display_units.co2_mass, u, u.symbol());
                    }
                });
                ui.separator();

                ui.label(txt("gui.settings.alpha", "Window transparency"));
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                ui.separator();

                if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                    save_clicked = true;
                }
                if let Some(msg) = &self.save_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;

        if save_clicked {
            self.save_status = Some(match self.apply_settings() {
                Ok(()) => txt("gui.settings.saved", "Saved."),
                Err(e) => format!("{}: {e}", txt("gui.settings.save_error", "Save error")),
            });
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(txt("gui.formula.button", "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_about_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        if self.show_about_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_about_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline appliance running cost & CO2 calculator",
                    ));
                    ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.data",
                        "Prices and emission factors are static estimates per country (EUR/kWh, kg CO2e/kWh).",
                    ));
                    ui.label(txt(
                        "gui.about.usage",
                        "Usage-based units ask for weekly usage; a year is counted as 52 weeks.",
                    ));
                });
        }

        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.label(txt(
                        "gui.formula.normalize",
                        "Annual kWh = label kWh × (per year: 1, otherwise weekly usage × 52 / base).",
                    ));
                    ui.label(txt(
                        "gui.formula.bases",
                        "Base: per year 1, per 100 cycles 100, per cycle 1, per 1,000 hours 1000.",
                    ));
                    ui.label(txt("gui.formula.cost", "Annual cost = annual kWh × price."));
                    ui.label(txt(
                        "gui.formula.co2",
                        "Annual CO2 = annual kWh × country emission factor.",
                    ));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_form(ui));
        });
    }
}
