use authordesk_core::{FeedPanel, LinkOpener, Notices};
use eframe::egui;

use super::theme::DeskPalette;

pub fn ui(
    ui: &mut egui::Ui,
    feed: &mut FeedPanel,
    palette: &DeskPalette,
    opener: &dyn LinkOpener,
    notices: &mut Notices,
) {
    ui.horizontal(|ui| {
        let refresh = ui.add_enabled(!feed.is_loading(), egui::Button::new("Refresh Feed"));
        if refresh.clicked() {
            feed.refresh();
        }
        if feed.is_loading() {
            ui.spinner();
        }
        ui.label(
            egui::RichText::new(feed.url())
                .small()
                .color(palette.text_muted),
        );
    });
    ui.separator();

    let mut activated = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (row, entry) in feed.rows() {
                let mut response = ui.selectable_label(false, &entry.title);
                if !entry.summary.is_empty() {
                    response = response.on_hover_text(&entry.summary);
                }
                if response.clicked() {
                    activated = Some(row);
                }
            }
        });

    if let Some(row) = activated {
        feed.activate_row(row, opener, notices);
    }
}
