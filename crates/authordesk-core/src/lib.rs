//! Headless core of Author Desk: feed synchronisation, the feedback state
//! machine, static content panels and the tab controller that hosts them.

pub mod assets;
pub mod audio;
pub mod bio;
pub mod catalog;
pub mod config;
pub mod content;
pub mod desk;
pub mod feed;
pub mod feed_panel;
pub mod feedback;
pub mod links;
pub mod notice;
pub mod row;
pub mod tabs;
pub mod ticker;

pub use assets::{AssetError, AssetResolver, DirectoryAssets, MemoryAssets};
pub use audio::{AssetLoadError, AudioError, AudioOutput, LoopClip, SilentOutput};
pub use bio::{BioPanel, BioProfile, Picture};
pub use catalog::{CatalogItem, CatalogPanel, Purchase};
pub use config::{ConfigError, DeskConfig};
pub use content::DeskContent;
pub use desk::{Desk, PanelKind};
pub use feed::{parse_feed, FeedEntry, FeedSource, FetchError, HttpFeedSource};
pub use feed_panel::{Activation, FeedPanel, FeedState, RefreshOutcome};
pub use feedback::{
    FeedbackFrame, FeedbackPanel, FeedbackSettings, FeedbackState, Rgb, Transition, PALETTE,
};
pub use links::LinkOpener;
pub use notice::{Notice, NoticeKind, Notices};
pub use row::RowId;
pub use tabs::TabController;
pub use ticker::Ticker;
