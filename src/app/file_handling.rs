use egui::Ui;
#[cfg(not(target_arch = "wasm32"))]
use egui_file::FileDialog;
use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
#[cfg(not(target_arch = "wasm32"))]
use std::fs::File;
#[cfg(not(target_arch = "wasm32"))]
use std::io::{BufWriter, Write};
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Import and Export buttons for anything serializable as JSON.
pub struct FileImportExport {
    default_name: String,
    #[cfg(not(target_arch = "wasm32"))]
    import_dialog: Option<FileDialog>,
    #[cfg(not(target_arch = "wasm32"))]
    export_dialog: Option<FileDialog>,
    #[cfg(target_arch = "wasm32")]
    text_container: Option<String>,
}

impl FileImportExport {
    pub fn new(default_name: &str) -> Self {
        Self {
            default_name: default_name.to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            import_dialog: None,
            #[cfg(not(target_arch = "wasm32"))]
            export_dialog: None,
            #[cfg(target_arch = "wasm32")]
            text_container: None,
        }
    }

    pub fn display<T: Serialize + DeserializeOwned>(
        &mut self,
        ctx: &egui::Context,
        ui: &mut Ui,
        encode: &T,
    ) -> Option<T> {
        let r = self.import(ctx, ui);
        self.export(ctx, ui, encode);
        r
    }

    #[cfg(target_arch = "wasm32")]
    fn import<T: DeserializeOwned>(&mut self, ctx: &egui::Context, ui: &mut Ui) -> Option<T> {
        import_data(ctx, ui, &mut self.text_container)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn import<T: DeserializeOwned>(&mut self, ctx: &egui::Context, ui: &mut Ui) -> Option<T> {
        import_data(ctx, ui, &mut self.import_dialog)
    }

    #[cfg(target_arch = "wasm32")]
    fn export<T: Serialize>(&mut self, _ctx: &egui::Context, ui: &mut Ui, encode: &T) {
        export_data(ui, self.default_name.as_str(), encode);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn export<T: Serialize>(&mut self, ctx: &egui::Context, ui: &mut Ui, encode: &T) {
        export_data(
            ctx,
            ui,
            &mut self.export_dialog,
            self.default_name.as_str(),
            encode,
        );
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Option<T> {
    match serde_json::from_str(text) {
        Ok(v) => Some(v),
        Err(e) => {
            error!("could not import session: {}", e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn import_data<T: DeserializeOwned>(
    ctx: &egui::Context,
    ui: &mut Ui,
    text_container: &mut Option<String>,
) -> Option<T> {
    if ui.button("Import").clicked() {
        *text_container = Some(String::new());
    }
    let mut return_val = None;
    let mut open = true;
    let mut close = false;
    if let Some(t) = text_container {
        egui::Window::new("Import Session")
            .title_bar(true)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Paste an exported session:");
                if ui.button("Import").clicked() {
                    return_val = decode(t);
                    close = true;
                }
                ui.text_edit_multiline(t);
            });
    }
    if !open || close {
        *text_container = None;
    }
    return_val
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn import_data<T: DeserializeOwned>(
    ctx: &egui::Context,
    ui: &mut Ui,
    file_dialog: &mut Option<FileDialog>,
) -> Option<T> {
    if ui.button("Import").clicked() {
        let mut dialog = FileDialog::open_file(None);
        dialog.open();
        *file_dialog = Some(dialog);
    }
    let path = selected_path(ctx, file_dialog)?;
    match std::fs::read_to_string(&path) {
        Ok(text) => decode(&text),
        Err(e) => {
            error!("{}: {}", path.display(), e);
            None
        }
    }
}

/// The chosen path, once. The dialog is dropped after a selection.
#[cfg(not(target_arch = "wasm32"))]
fn selected_path(ctx: &egui::Context, file_dialog: &mut Option<FileDialog>) -> Option<PathBuf> {
    let mut selected = None;
    if let Some(d) = file_dialog {
        if d.show(ctx).selected() {
            selected = d.path().map(|p| p.to_path_buf());
        }
    }
    if selected.is_some() {
        *file_dialog = None;
    }
    selected
}

#[cfg(target_arch = "wasm32")]
pub fn export_data<T: Serialize>(ui: &mut Ui, file_name: &str, encode: &T) {
    if ui.button("Export").clicked() {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            error!("no document to export into");
            return;
        };
        let link = match doc.create_element("a") {
            Ok(link) => link,
            Err(e) => {
                error!("{:?}", e);
                return;
            }
        };
        match serde_json::to_string_pretty(encode) {
            Ok(s) => {
                let href = format!("data:text/json,{}", urlencoding::encode(&s));
                if link.set_attribute("href", href.as_str()).is_err()
                    || link.set_attribute("download", file_name).is_err()
                {
                    error!("could not prepare the download link");
                    return;
                }
                let link: web_sys::HtmlAnchorElement =
                    web_sys::HtmlAnchorElement::unchecked_from_js(link.into());
                link.click();
            }
            Err(e) => error!("{}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn export_data<T: Serialize>(
    ctx: &egui::Context,
    ui: &mut Ui,
    file_dialog: &mut Option<FileDialog>,
    file_name: &str,
    encode: &T,
) {
    if ui.button("Export").clicked() {
        let mut dialog = FileDialog::save_file(None).default_filename(file_name);
        dialog.open();
        *file_dialog = Some(dialog)
    };
    if let Some(p) = selected_path(ctx, file_dialog) {
        match File::create(&p) {
            Ok(f) => {
                let mut writer = BufWriter::new(f);
                if let Err(e) = serde_json::to_writer_pretty(&mut writer, encode) {
                    error!("{}", e);
                }
                if let Err(e) = writer.flush() {
                    error!("{}", e);
                }
            }
            Err(e) => error!("{}: {}", p.display(), e),
        }
    }
}
