use eframe::egui;

use super::drop_zone_ui::ACCENT;
use super::{LauncherForm, Status};

const NEW_BUTTON_COLOR: egui::Color32 = egui::Color32::from_rgb(0xD1, 0x66, 0x66);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xB0, 0x30, 0x30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    New,
    MakeLauncher,
    CopyPath,
}

fn status_ui(ui: &mut egui::Ui, status: Option<&Status>, can_copy: bool) -> Action {
    let mut action = Action::None;
    match status {
        Some(Status::Created(path)) => {
            ui.horizontal(|ui| {
                if can_copy && ui.button("Copy path").clicked() {
                    action = Action::CopyPath;
                }
                ui.add(egui::Label::new(format!("Created {}", path.display())).truncate());
            });
        }
        Some(Status::Failed(message)) => {
            ui.add(
                egui::Label::new(egui::RichText::new(message.as_str()).color(ERROR_COLOR)).wrap(),
            );
        }
        None => {}
    }
    action
}

/// Bottom row: "New" and "Make Launcher", then the result of the last attempt.
pub fn actions_ui(
    ui: &mut egui::Ui,
    form: &LauncherForm,
    status: Option<&Status>,
    can_copy: bool,
) -> Action {
    let mut action = Action::None;

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let make = egui::Button::new(egui::RichText::new("Make Launcher").color(egui::Color32::WHITE))
            .fill(ACCENT);
        if ui
            .add_enabled(form.is_complete(), make)
            .on_disabled_hover_text("Needs a name, an icon and an executable")
            .clicked()
        {
            action = Action::MakeLauncher;
        }
        let new = egui::Button::new(egui::RichText::new("New").color(egui::Color32::WHITE))
            .fill(NEW_BUTTON_COLOR);
        if ui.add(new).clicked() {
            action = Action::New;
        }
    });

    ui.add_space(8.0);
    match status_ui(ui, status, can_copy) {
        Action::None => action,
        other => other,
    }
}
