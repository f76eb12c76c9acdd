use std::sync::Arc;

use authordesk_core::BioPanel;
use eframe::egui;

const PICTURE_MAX_WIDTH: f32 = 300.0;

/// Bio text followed by the pictures that resolved at startup.
pub struct AboutView {
    text: String,
    pictures: Vec<(String, Arc<[u8]>)>,
}

impl AboutView {
    pub fn new(panel: &BioPanel) -> Self {
        let pictures = panel
            .pictures()
            .iter()
            .map(|picture| {
                (
                    format!("bytes://about/{}", picture.name),
                    Arc::from(picture.bytes.as_slice()),
                )
            })
            .collect();
        Self {
            text: panel.text(),
            pictures,
        }
    }

    pub fn ui(&self, ui: &mut egui::Ui, panel: &BioPanel) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(&panel.profile().name);
                ui.add_space(8.0);
                ui.add(egui::Label::new(&self.text).wrap(true));
                for (uri, bytes) in &self.pictures {
                    ui.add_space(12.0);
                    ui.add(
                        egui::Image::from_bytes(uri.clone(), egui::load::Bytes::Shared(bytes.clone()))
                            .max_width(PICTURE_MAX_WIDTH),
                    );
                }
            });
    }
}
