//! The four desk panels composed behind one tab controller.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::assets::AssetResolver;
use crate::audio::{AssetLoadError, AudioOutput};
use crate::bio::BioPanel;
use crate::catalog::CatalogPanel;
use crate::config::DeskConfig;
use crate::content::DeskContent;
use crate::feed::FeedSource;
use crate::feed_panel::FeedPanel;
use crate::feedback::FeedbackPanel;
use crate::notice::Notices;
use crate::tabs::TabController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    About,
    Books,
    Feed,
    DontPress,
}

pub struct Desk {
    pub tabs: TabController<PanelKind>,
    pub bio: BioPanel,
    pub catalog: CatalogPanel,
    pub feed: FeedPanel,
    pub feedback: FeedbackPanel,
    pub notices: Notices,
}

impl Desk {
    /// Builds every panel. Fails only when the feedback audio cannot be loaded.
    pub fn new(
        config: &DeskConfig,
        content: DeskContent,
        source: Arc<dyn FeedSource>,
        assets: &dyn AssetResolver,
        audio: Box<dyn AudioOutput>,
    ) -> Result<Self, AssetLoadError> {
        let feedback = FeedbackPanel::load(assets, &config.feedback_settings(), audio)?;
        Ok(Self {
            tabs: TabController::compose([
                ("About Me", PanelKind::About),
                ("My Books", PanelKind::Books),
                ("Blog Feed", PanelKind::Feed),
                ("DONT PRESS", PanelKind::DontPress),
            ]),
            bio: BioPanel::new(content.bio, assets),
            catalog: CatalogPanel::new(content.books),
            feed: FeedPanel::new(config.feed_url.clone(), source),
            feedback,
            notices: Notices::default(),
        })
    }

    /// Runs once per UI frame. Returns how soon the next repaint is needed.
    pub fn update(&mut self, now: Instant) -> Option<Duration> {
        self.feed.poll(&mut self.notices);
        self.feedback.advance(now);
        self.notices.clear_finished(now);

        let feed_wait = self
            .feed
            .is_loading()
            .then_some(Duration::from_millis(100));
        let notice_wait = (!self.notices.is_empty()).then_some(Duration::from_millis(250));
        [feed_wait, notice_wait, self.feedback.next_tick_in(now)]
            .into_iter()
            .flatten()
            .min()
    }
}
