use authordesk_core::{CatalogPanel, LinkOpener, Notices};
use eframe::egui;

pub fn ui(
    ui: &mut egui::Ui,
    catalog: &mut CatalogPanel,
    opener: &dyn LinkOpener,
    notices: &mut Notices,
) {
    let footer = 48.0;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - footer).max(0.0))
        .show(ui, |ui| {
            let mut clicked = None;
            for (row, item) in catalog.rows() {
                let selected = catalog.selected() == Some(row);
                if ui.selectable_label(selected, item.label()).clicked() {
                    clicked = Some(row);
                }
            }
            if let Some(row) = clicked {
                catalog.select(row);
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        for vendor in catalog.vendors() {
            if ui.button(format!("Buy on {vendor}")).clicked() {
                catalog.purchase(vendor, opener, notices);
            }
        }
    });
}
