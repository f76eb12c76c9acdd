use authordesk_core::Rgb;
use eframe::egui::{self, Color32};

#[derive(Debug, Clone, Copy)]
pub struct DeskPalette {
    pub background: Color32,
    pub panel: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub warning: Color32,
    pub trigger: Color32,
}

impl DeskPalette {
    pub fn new() -> Self {
        Self {
            background: Color32::from_rgb(30, 30, 30),
            panel: Color32::from_rgb(34, 34, 38),
            text_primary: Color32::from_rgb(232, 232, 240),
            text_muted: Color32::from_rgb(164, 164, 176),
            accent: Color32::from_rgb(138, 43, 226),
            warning: Color32::from_rgb(255, 120, 130),
            trigger: Color32::BLACK,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.panel;
        visuals.window_fill = self.background;
        visuals.override_text_color = Some(self.text_primary);
        visuals.selection.bg_fill = self.accent;
        visuals.hyperlink_color = self.accent;
        ctx.set_visuals(visuals);
    }
}

impl Default for DeskPalette {
    fn default() -> Self {
        Self::new()
    }
}

pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}
