use crate::app::{AppSettings, Mode};
use crate::script::ErrorPolicy;
use crate::{ConlangTransliterator, ScriptTransliterator, TranslitError};
use egui::{FontId, ScrollArea, TextEdit, Ui};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Info(String),
    Warning(String),
}

/// Input box, buttons and output of one conversion.
pub struct ConversionApp {
    input: String,
    output: String,
    output_mode: Mode,
    errors: Vec<TranslitError>,
    notice: Option<Notice>,
}

impl ConversionApp {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            output: String::new(),
            output_mode: Mode::default(),
            errors: vec![],
            notice: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    fn convert(&mut self, settings: &AppSettings) {
        self.errors.clear();
        self.notice = None;
        let input = self.input.trim();
        if input.is_empty() {
            self.notice = Some(Notice::Warning(
                "Please enter some text to convert!".to_string(),
            ));
            return;
        }
        debug!("converting {} characters to {}", input.len(), settings.mode);
        let result = match settings.mode {
            Mode::Script => ScriptTransliterator::builtin().and_then(|engine| {
                let engine = engine.with_policy(settings.error_policy);
                match settings.error_policy {
                    ErrorPolicy::Abort => engine.transliterate(input),
                    ErrorPolicy::Mark => {
                        let report = engine.transliterate_report(input);
                        self.errors = report.errors;
                        Ok(report.output)
                    }
                }
            }),
            Mode::Conlang => {
                ConlangTransliterator::builtin().map(|engine| engine.transliterate(input))
            }
        };
        match result {
            Ok(output) => {
                self.output = output;
                self.output_mode = settings.mode;
            }
            Err(e) => {
                self.output.clear();
                self.notice = Some(Notice::Warning(format!("Conversion failed: {}", e)));
                self.errors.push(e);
            }
        }
    }

    fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.errors.clear();
        self.notice = None;
    }

    /// The text for the clipboard, if there is any.
    fn copy(&mut self) -> Option<String> {
        let name = self.output_mode.output_name();
        let output = self.output.trim();
        if output.is_empty() {
            self.notice = Some(Notice::Warning(format!("No {} text to copy!", name)));
            return None;
        }
        self.notice = Some(Notice::Info(format!("{} text copied to clipboard!", name)));
        Some(output.to_string())
    }

    pub fn update(&mut self, ui: &mut Ui, settings: &AppSettings, glyph_font: Option<FontId>) {
        let name = settings.mode.output_name();
        ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            ui.strong("Enter English text:");
            ui.add(
                TextEdit::multiline(&mut self.input)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal_wrapped(|ui| {
                if ui.button(format!("Convert to {}", name)).clicked() {
                    self.convert(settings);
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }
                if ui.button(format!("Copy {}", self.output_mode.output_name())).clicked() {
                    if let Some(text) = self.copy() {
                        ui.output_mut(|o| o.copied_text = text);
                    }
                }
            });

            match &self.notice {
                Some(Notice::Info(text)) => {
                    ui.label(text);
                }
                Some(Notice::Warning(text)) => {
                    ui.colored_label(ui.visuals().warn_fg_color, text);
                }
                None => {}
            }
            for e in &self.errors {
                ui.colored_label(ui.visuals().error_fg_color, e.to_string());
            }

            ui.add_space(12.);
            ui.strong(match self.output_mode {
                Mode::Script => "Tengwar output (use with a Tengwar Annatar compatible font):",
                Mode::Conlang => "Black Speech output:",
            });
            let mut output = self.output.as_str();
            let mut view = TextEdit::multiline(&mut output)
                .desired_rows(6)
                .desired_width(f32::INFINITY);
            if let (Mode::Script, Some(font)) = (self.output_mode, glyph_font) {
                view = view.font(font);
            }
            ui.add(view);

            ui.add_space(8.);
            for line in instructions(settings.mode) {
                ui.small(*line);
            }
        });
    }
}

fn instructions(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Script => &[
            "Tengwar Mode Instructions:",
            "1. Type English text in the input box",
            "2. Click 'Convert to Tengwar' to transliterate it into Tengwar script",
            "3. Use 'Copy Tengwar' to copy the result to the clipboard",
            "4. Load a Tengwar Annatar compatible font in the settings, or paste the result into a document using one",
        ],
        Mode::Conlang => &[
            "Black Speech Mode Instructions:",
            "1. Type English text in the input box",
            "2. Click 'Convert to Black Speech' to translate",
            "3. Use 'Copy Black Speech' to copy the result to the clipboard",
            "4. Known words are translated directly, unknown words are phonetically adapted",
        ],
    }
}
