use std::time::Instant;

use authordesk_core::feedback::CAPTION_POINT_SIZE;
use authordesk_core::{FeedbackFrame, FeedbackPanel};
use eframe::egui;

use super::theme::{color32, DeskPalette};

pub fn ui(ui: &mut egui::Ui, feedback: &mut FeedbackPanel, palette: &DeskPalette) {
    let rect = ui.available_rect_before_wrap();

    if feedback.trigger_visible() {
        let button = egui::Button::new("")
            .fill(palette.trigger)
            .min_size(rect.size());
        if ui.put(rect, button).clicked() {
            feedback.trigger(Instant::now());
            ui.ctx().request_repaint();
        }
        return;
    }

    match feedback.frame() {
        FeedbackFrame::Trigger => {}
        FeedbackFrame::Fill {
            color,
            caption,
            text_color,
        } => {
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, color32(color));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                caption,
                egui::FontId::proportional(CAPTION_POINT_SIZE),
                color32(text_color),
            );
            if let Some(problem) = feedback.audio_problem() {
                painter.text(
                    rect.left_bottom() + egui::vec2(8.0, -8.0),
                    egui::Align2::LEFT_BOTTOM,
                    format!("Audio unavailable: {problem}"),
                    egui::FontId::proportional(12.0),
                    palette.warning,
                );
            }
            ui.allocate_rect(rect, egui::Sense::hover());
        }
    }
}
