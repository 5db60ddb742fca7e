mod actions_ui;
mod drop;
mod drop_zone_ui;

use arboard::Clipboard;
use eframe::egui;
use std::path::{Path, PathBuf};
use tinyfiledialogs as tfd;
use tracing::{debug, warn};

use crate::error::Result;
use crate::image_check::is_image;
use crate::launcher::LauncherWriter;
use actions_ui::Action;
use drop::Slot;

#[derive(Debug, Clone, Default)]
pub struct LauncherForm {
    pub title: String,
    pub icon_path: String,
    pub exec_path: String,
}

impl LauncherForm {
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.icon_path.is_empty() && !self.exec_path.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Created(PathBuf),
    Failed(String),
}

struct Hover {
    path: PathBuf,
    slot: Option<Slot>,
}

pub struct App {
    pub form: LauncherForm,
    pub status: Option<Status>,
    writer: Result<LauncherWriter>,
    clipboard: Option<Clipboard>,
    hover: Option<Hover>,
}

impl App {
    pub fn new(writer: Result<LauncherWriter>, clipboard: Option<Clipboard>) -> Self {
        Self {
            form: LauncherForm::default(),
            status: None,
            writer,
            clipboard,
            hover: None,
        }
    }

    fn highlighted(&self, slot: Slot) -> bool {
        self.hover.as_ref().and_then(|h| h.slot) == Some(slot)
    }

    /// Classifying decodes the file, so it only happens when the hovered path changes.
    fn update_hover(&mut self, hovered: &[PathBuf]) {
        match drop::single_file(hovered) {
            Some(path) => {
                if self.hover.as_ref().map(|h| h.path.as_path()) != Some(path) {
                    let slot = drop::classify_hover(path);
                    debug!("hovering {:?} -> {:?}", path, slot);
                    self.hover = Some(Hover {
                        path: path.to_path_buf(),
                        slot,
                    });
                }
            }
            None => self.hover = None,
        }
    }

    fn accept_drop(&mut self, dropped: &[PathBuf]) {
        self.hover = None;
        let Some(path) = drop::single_file(dropped) else {
            debug!("ignoring drop of {} files", dropped.len());
            return;
        };
        let value = drop::absolute_path_string(path);
        match drop::classify_drop(path) {
            Slot::Icon => self.form.icon_path = value,
            Slot::Executable => self.form.exec_path = value,
        }
    }

    fn handle_file_drag(&mut self, ctx: &egui::Context) {
        let (hovered, dropped): (Vec<PathBuf>, Vec<PathBuf>) = ctx.input(|i| {
            (
                i.raw
                    .hovered_files
                    .iter()
                    .filter_map(|f| f.path.clone())
                    .collect(),
                i.raw
                    .dropped_files
                    .iter()
                    .filter_map(|f| f.path.clone())
                    .collect(),
            )
        });
        if !dropped.is_empty() {
            self.accept_drop(&dropped);
        } else {
            self.update_hover(&hovered);
        }
    }

    fn pick_icon(&mut self, path: String) {
        if is_image(Path::new(&path)) {
            self.form.icon_path = path;
        } else {
            self.status = Some(Status::Failed(format!("{} is not a readable image", path)));
        }
    }

    pub fn clear(&mut self) {
        self.form = LauncherForm::default();
        self.hover = None;
        self.status = None;
    }

    /// Writes the launcher when the form is complete. Failures only end up in `status`.
    pub fn make_launcher(&mut self) {
        if !self.form.is_complete() {
            return;
        }
        let result = match &self.writer {
            Ok(writer) => writer.create(
                &self.form.title,
                &self.form.icon_path,
                &self.form.exec_path,
            ),
            Err(e) => {
                self.status = Some(Status::Failed(e.to_string()));
                return;
            }
        };
        self.status = Some(match result {
            Ok(path) => Status::Created(path),
            Err(e) => {
                warn!("launcher not created: {}", e);
                Status::Failed(e.to_string())
            }
        });
    }

    fn copy_created_path(&mut self) {
        let (Some(Status::Created(path)), Some(clipboard)) = (&self.status, self.clipboard.as_mut())
        else {
            return;
        };
        if let Err(e) = clipboard.set_text(path.to_string_lossy().to_string()) {
            warn!("could not copy to clipboard: {}", e);
        }
    }
}

impl eframe::App for App {
    fn ui(&mut self, ui: &mut egui::Ui, _: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        self.handle_file_drag(&ctx);
        let mut action = Action::None;
        let mut picked_icon: Option<String> = None;

        egui::CentralPanel::default().show_inside(ui, |ui| {
            ui.add_space(16.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.form.title)
                    .hint_text("Launcher name")
                    .font(egui::TextStyle::Heading)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(16.0);

            picked_icon = drop_zone_ui::drop_zone_ui(
                ui,
                "icon_drop_zone",
                "Drag-n-Drop logo",
                &self.form.icon_path,
                self.highlighted(Slot::Icon),
                |start_dir| {
                    tfd::open_file_dialog(
                        "Select Icon",
                        start_dir,
                        Some((
                            &["*.png", "*.jpg", "*.jpeg", "*.gif", "*.bmp", "*.ico", "*.webp"],
                            "Images",
                        )),
                    )
                },
            );
            ui.add_space(16.0);

            if let Some(path) = drop_zone_ui::drop_zone_ui(
                ui,
                "exec_drop_zone",
                "Drag-n-Drop executable",
                &self.form.exec_path,
                self.highlighted(Slot::Executable),
                |start_dir| tfd::open_file_dialog("Select Executable", start_dir, None),
            ) {
                self.form.exec_path = path;
            }
            ui.add_space(16.0);

            action = actions_ui::actions_ui(
                ui,
                &self.form,
                self.status.as_ref(),
                self.clipboard.is_some(),
            );
        });

        if let Some(path) = picked_icon {
            self.pick_icon(path);
        }
        match action {
            Action::None => {}
            Action::New => self.clear(),
            Action::MakeLauncher => self.make_launcher(),
            Action::CopyPath => self.copy_created_path(),
        }
    }
}
