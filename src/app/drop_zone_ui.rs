use eframe::egui;
use std::path::Path;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x14, 0x62, 0xDC);
const BOX_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xF7, 0xF4, 0xF3);
const BOX_BORDER: egui::Color32 = egui::Color32::from_rgb(0xE7, 0xE5, 0xE4);
const BOX_HEIGHT: f32 = 160.0;
const HIGHLIGHT_SECONDS: f32 = 0.25;
const BROWSE_BUTTON_WIDTH: f32 = 24.0;

fn mix(from: egui::Color32, to: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    egui::Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}

/// Half-transparent accent laid over the box background.
fn highlight_color() -> egui::Color32 {
    mix(BOX_BACKGROUND, ACCENT, 0.5)
}

/// Renders one drop box. Returns a path picked through the `...` dialog, if any.
pub fn drop_zone_ui(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    path: &str,
    highlighted: bool,
    browse: impl FnOnce(&str) -> Option<String>,
) -> Option<String> {
    let t = ui
        .ctx()
        .animate_bool_with_time(egui::Id::new(id), highlighted, HIGHLIGHT_SECONDS);
    let fill = mix(BOX_BACKGROUND, highlight_color(), t);
    let border = mix(BOX_BORDER, highlight_color(), t);
    let mut picked = None;

    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(2.0, border))
        .corner_radius(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(BOX_HEIGHT);
            ui.vertical_centered(|ui| {
                ui.add_space(BOX_HEIGHT / 4.0);
                ui.label(egui::RichText::new("📄").size(40.0).color(ACCENT));
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(label)
                        .strong()
                        .size(16.0)
                        .color(egui::Color32::BLACK),
                );
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(if path.is_empty() { "<Empty>" } else { path })
                                .monospace()
                                .color(egui::Color32::DARK_GRAY),
                        )
                        .truncate(),
                    );
                    if ui
                        .add_sized(
                            egui::vec2(BROWSE_BUTTON_WIDTH, ui.spacing().interact_size.y),
                            egui::Button::new("..."),
                        )
                        .clicked()
                    {
                        let start_dir = Path::new(path)
                            .parent()
                            .and_then(|d| d.to_str())
                            .filter(|d| !d.is_empty())
                            .unwrap_or(".");
                        picked = browse(start_dir);
                    }
                });
            });
        });

    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_hits_both_ends() {
        assert_eq!(mix(BOX_BACKGROUND, ACCENT, 0.0), BOX_BACKGROUND);
        assert_eq!(mix(BOX_BACKGROUND, ACCENT, 1.0), ACCENT);
        assert_eq!(mix(BOX_BACKGROUND, ACCENT, 7.0), ACCENT);
    }

    #[test]
    fn highlight_sits_between_background_and_accent() {
        let c = highlight_color();
        assert!(c.b() > ACCENT.b().min(BOX_BACKGROUND.b()));
        assert!(c.r() < BOX_BACKGROUND.r() && c.r() > ACCENT.r());
    }
}
