use authordesk_core::{NoticeKind, Notices};
use eframe::egui::{self, Color32};

const TOAST_WIDTH: f32 = 320.0;

/// Paints queued notices as toasts in the top-right corner.
pub fn paint(ctx: &egui::Context, notices: &Notices) {
    let screen = ctx.input(|i| i.screen_rect());
    let layer = egui::LayerId::new(egui::Order::Tooltip, egui::Id::new("toasts"));
    let painter = ctx.layer_painter(layer);
    let mut y = 12.0;

    for notice in notices.iter() {
        let (bg, accent) = colors_for(notice.kind);
        let height = if notice.detail.is_some() { 64.0 } else { 44.0 };

        let rect = egui::Rect::from_min_max(
            egui::pos2(screen.max.x - 12.0 - TOAST_WIDTH, screen.min.y + y),
            egui::pos2(screen.max.x - 12.0, screen.min.y + y + height),
        );

        painter.rect(
            rect,
            12.0,
            Color32::from_rgba_unmultiplied(bg.r(), bg.g(), bg.b(), 220),
            egui::Stroke::new(1.0, accent),
        );
        painter.text(
            rect.min + egui::vec2(12.0, 12.0),
            egui::Align2::LEFT_TOP,
            &notice.title,
            egui::FontId::proportional(14.0),
            Color32::WHITE,
        );

        if let Some(detail) = &notice.detail {
            painter.text(
                rect.min + egui::vec2(12.0, 34.0),
                egui::Align2::LEFT_TOP,
                detail,
                egui::FontId::proportional(12.0),
                Color32::LIGHT_GRAY,
            );
        }

        y += height + 8.0;
    }
}

fn colors_for(kind: NoticeKind) -> (Color32, Color32) {
    match kind {
        NoticeKind::Info => (
            Color32::from_rgb(32, 56, 112),
            Color32::from_rgb(64, 128, 255),
        ),
        NoticeKind::Warning => (
            Color32::from_rgb(64, 48, 0),
            Color32::from_rgb(240, 200, 64),
        ),
        NoticeKind::Error => (
            Color32::from_rgb(72, 24, 24),
            Color32::from_rgb(240, 96, 96),
        ),
    }
}
