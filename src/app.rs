use crate::app::conversion::ConversionApp;
use crate::app::file_handling::FileImportExport;
use crate::app::glyph_font::GlyphFont;
use crate::script::ErrorPolicy;
use eframe::{App, Frame, Storage};
use egui::{CentralPanel, Context};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum::{EnumIter, IntoEnumIterator};

mod conversion;
mod file_handling;
mod glyph_font;

pub const DEFAULT_GLYPH_SIZE: f32 = 22.;

/// Everything that survives a restart, and what a session export contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub mode: Mode,
    pub error_policy: ErrorPolicy,
    pub glyph_font_size: f32,
    pub glyph_font_path: Option<String>,
    pub input: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            mode: Default::default(),
            error_policy: Default::default(),
            glyph_font_size: DEFAULT_GLYPH_SIZE,
            glyph_font_path: None,
            input: String::new(),
        }
    }
}

pub struct ScribeApp {
    settings: AppSettings,
    conversion: ConversionApp,
    glyph_font: GlyphFont,
    session: FileImportExport,
    settings_open: bool,
}

impl ScribeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<AppSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let mut result = Self {
            conversion: ConversionApp::new(&settings.input),
            settings,
            glyph_font: Default::default(),
            session: FileImportExport::new("tengwar-scribe-session.json"),
            settings_open: false,
        };
        if let Some(path) = result.settings.glyph_font_path.clone() {
            result.glyph_font.load(&cc.egui_ctx, &path);
        }
        result
    }

    fn settings_panel(&mut self, ctx: &Context, _frame: &mut Frame) {
        let is_open = self.settings_open;
        egui::SidePanel::left("settings_panel")
            .resizable(false)
            .show_animated(ctx, is_open, |ui| {
                ui.add_space(4.);
                ui.vertical_centered(|ui| {
                    ui.heading("⚙ Settings");
                });
                ui.separator();

                ui.strong("Unsupported letters");
                for policy in ErrorPolicy::iter() {
                    ui.radio_value(&mut self.settings.error_policy, policy, policy.to_string());
                }
                ui.separator();

                ui.strong("Glyph font");
                ui.add(
                    egui::Slider::new(&mut self.settings.glyph_font_size, 10.0..=64.0)
                        .text("size"),
                );
                if let Some(path) = self.glyph_font.pick(ctx, ui) {
                    self.settings.glyph_font_path = Some(path);
                }
                ui.label(self.glyph_font.status());
                ui.separator();

                ui.strong("Session");
                let current = self.current_settings();
                ui.horizontal_wrapped(|ui| {
                    if let Some(imported) = self.session.display(ctx, ui, &current) {
                        self.restore(ctx, imported);
                    }
                });
            });
    }

    fn header_bar(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.separator();
                ui.toggle_value(&mut self.settings_open, "⚙ Settings");
                ui.separator();

                for mode in Mode::iter() {
                    if ui
                        .selectable_label(mode == self.settings.mode, mode.to_string())
                        .clicked()
                    {
                        self.settings.mode = mode
                    }
                }
                ui.separator();
                ui.label(format!("version: {}", crate::APP_VERSION));
            });
        });
    }

    fn current_settings(&self) -> AppSettings {
        AppSettings {
            input: self.conversion.input().to_string(),
            ..self.settings.clone()
        }
    }

    fn restore(&mut self, ctx: &Context, settings: AppSettings) {
        self.conversion = ConversionApp::new(&settings.input);
        if settings.glyph_font_path != self.settings.glyph_font_path {
            if let Some(path) = &settings.glyph_font_path {
                self.glyph_font.load(ctx, path);
            }
        }
        self.settings = settings;
    }
}

impl App for ScribeApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.current_settings())
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        self.glyph_font.begin_frame();
        self.header_bar(ctx, frame);

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                powered_by_egui_and_eframe(ui);
                egui::warn_if_debug_build(ui);
            });
        });

        self.settings_panel(ctx, frame);

        let font = self.glyph_font.font_id(self.settings.glyph_font_size);
        CentralPanel::default().show(ctx, |ui| {
            self.conversion.update(ui, &self.settings, font);
        });
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, EnumIter, Default)]
pub enum Mode {
    #[default]
    Script,
    Conlang,
}

impl Mode {
    /// Name used on buttons and messages.
    pub fn output_name(&self) -> &'static str {
        match self {
            Mode::Script => "Tengwar",
            Mode::Conlang => "Black Speech",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Mode::Script => "Tengwar Script",
                Mode::Conlang => "Black Speech",
            }
        )
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
