use egui::{Context, FontData, FontDefinitions, FontFamily, FontId, Ui};
#[cfg(not(target_arch = "wasm32"))]
use egui_file::FileDialog;
use log::{error, info};

const FAMILY: &str = "glyphs";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum FontState {
    #[default]
    Missing,
    /// Handed to egui, usable from the next frame on.
    Pending(String),
    Ready(String),
    Failed(String),
}

/// A user supplied font matching the script's glyph repertoire.
#[derive(Default)]
pub struct GlyphFont {
    state: FontState,
    #[cfg(not(target_arch = "wasm32"))]
    dialog: Option<FileDialog>,
}

impl GlyphFont {
    pub fn begin_frame(&mut self) {
        if let FontState::Pending(path) = &self.state {
            self.state = FontState::Ready(path.clone());
        }
    }

    pub fn font_id(&self, size: f32) -> Option<FontId> {
        match self.state {
            FontState::Ready(_) => Some(FontId::new(size, FontFamily::Name(FAMILY.into()))),
            _ => None,
        }
    }

    pub fn status(&self) -> String {
        match &self.state {
            FontState::Missing => "No glyph font loaded, output uses the default font.".to_string(),
            FontState::Pending(path) | FontState::Ready(path) => format!("Using {}", path),
            FontState::Failed(reason) => format!("Could not load font: {}", reason),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(&mut self, ctx: &Context, path: &str) -> bool {
        match std::fs::read(path) {
            Ok(bytes) => {
                install(ctx, bytes);
                info!("loaded glyph font {}", path);
                self.state = FontState::Pending(path.to_string());
                true
            }
            Err(e) => {
                error!("{}: {}", path, e);
                self.state = FontState::Failed(e.to_string());
                false
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load(&mut self, _ctx: &Context, _path: &str) -> bool {
        self.state = FontState::Failed("fonts can only be loaded in the desktop app".to_string());
        false
    }

    /// Shows the "Load font" button. Returns the path of a newly loaded font.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pick(&mut self, ctx: &Context, ui: &mut Ui) -> Option<String> {
        if ui.button("Load font…").clicked() {
            let mut dialog = FileDialog::open_file(None);
            dialog.open();
            self.dialog = Some(dialog);
        }
        let path = self.dialog.as_mut().and_then(|d| {
            if d.show(ctx).selected() {
                d.path().map(|p| p.to_string_lossy().into_owned())
            } else {
                None
            }
        })?;
        self.dialog = None;
        self.load(ctx, &path).then_some(path)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn pick(&mut self, _ctx: &Context, ui: &mut Ui) -> Option<String> {
        ui.small("Install the glyph font on your system to see the script.");
        None
    }
}

fn install(ctx: &Context, bytes: Vec<u8>) {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FAMILY.to_owned(), FontData::from_owned(bytes));
    // Anything the glyph font lacks falls back to the regular fonts.
    let mut family = vec![FAMILY.to_owned()];
    family.extend(
        fonts
            .families
            .get(&FontFamily::Proportional)
            .cloned()
            .unwrap_or_default(),
    );
    fonts
        .families
        .insert(FontFamily::Name(FAMILY.into()), family);
    ctx.set_fonts(fonts);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_font_is_usable_one_frame_later() {
        let mut font = GlyphFont {
            state: FontState::Pending("annatar.ttf".to_string()),
            ..Default::default()
        };
        assert_eq!(font.font_id(20.), None);
        font.begin_frame();
        assert_eq!(
            font.font_id(20.),
            Some(FontId::new(20., FontFamily::Name(FAMILY.into())))
        );
        assert_eq!(font.status(), "Using annatar.ttf");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn t_missing_file() {
        let mut font = GlyphFont::default();
        assert!(!font.load(&Context::default(), "/no/such/font.ttf"));
        assert_eq!(font.font_id(20.), None);
        assert!(font.status().starts_with("Could not load font"));
    }
}
