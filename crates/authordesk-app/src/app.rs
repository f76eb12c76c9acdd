use std::time::Instant;

use authordesk_core::{Desk, PanelKind};
use eframe::egui;
use eframe::{App, CreationContext};

use crate::links::BrowserOpener;
use crate::ui::about::AboutView;
use crate::ui::theme::DeskPalette;
use crate::ui::{books, dont_press, feed, notifications};

pub struct AuthorDeskApp {
    desk: Desk,
    about: AboutView,
    palette: DeskPalette,
    opener: BrowserOpener,
}

impl AuthorDeskApp {
    pub fn new(desk: Desk, cc: &CreationContext<'_>) -> Self {
        let palette = DeskPalette::new();
        palette.apply(&cc.egui_ctx);
        Self {
            about: AboutView::new(&desk.bio),
            desk,
            palette,
            opener: BrowserOpener,
        }
    }

    fn draw_tab_bar(&mut self, ui: &mut egui::Ui) {
        let selected = self.desk.tabs.selected_index();
        let mut clicked = None;
        ui.horizontal(|ui| {
            for (index, label) in self.desk.tabs.labels().enumerate() {
                if ui.selectable_label(index == selected, label).clicked() {
                    clicked = Some(index);
                }
            }
        });
        if let Some(index) = clicked {
            self.desk.tabs.select(index);
        }
    }

    fn draw_selected(&mut self, ui: &mut egui::Ui) {
        let Desk {
            tabs,
            bio,
            catalog,
            feed: feed_panel,
            feedback,
            notices,
        } = &mut self.desk;
        match tabs.selected() {
            Some(PanelKind::About) => self.about.ui(ui, bio),
            Some(PanelKind::Books) => books::ui(ui, catalog, &self.opener, notices),
            Some(PanelKind::Feed) => feed::ui(ui, feed_panel, &self.palette, &self.opener, notices),
            Some(PanelKind::DontPress) => dont_press::ui(ui, feedback, &self.palette),
            None => {}
        }
    }
}

impl App for AuthorDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let wait = self.desk.update(Instant::now());

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| self.draw_tab_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.draw_selected(ui));
        notifications::paint(ctx, &self.desk.notices);

        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
    }
}
