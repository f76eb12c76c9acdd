//! Feed list state, refresh dispatch and entry activation.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::feed::{FeedEntry, FeedSource, FetchError};
use crate::links::LinkOpener;
use crate::notice::{Notice, NoticeKind, Notices};
use crate::row::{RowAllocator, RowId};

pub const FEED_ERROR_NOTICE: &str = "Failed to load RSS feed.";

#[derive(Debug, Default, Clone)]
pub struct FeedState {
    pub entries: Vec<FeedEntry>,
    pub last_fetch_failed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Started,
    AlreadyInFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Opened,
    NoLink,
    OpenFailed,
    UnknownRow,
}

type FetchResult = Result<Vec<FeedEntry>, FetchError>;

pub struct FeedPanel {
    url: String,
    source: Arc<dyn FeedSource>,
    state: FeedState,
    rows: IndexMap<RowId, usize>,
    allocator: RowAllocator,
    pending: Option<Receiver<FetchResult>>,
}

impl FeedPanel {
    /// Creates the panel and starts the initial fetch.
    pub fn new(url: impl Into<String>, source: Arc<dyn FeedSource>) -> Self {
        let mut panel = Self {
            url: url.into(),
            source,
            state: FeedState::default(),
            rows: IndexMap::new(),
            allocator: RowAllocator::default(),
            pending: None,
        };
        panel.refresh();
        panel
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.state.entries
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn rows(&self) -> impl Iterator<Item = (RowId, &FeedEntry)> + '_ {
        self.rows
            .iter()
            .filter_map(|(row, index)| self.state.entries.get(*index).map(|entry| (*row, entry)))
    }

    pub fn entry_for(&self, row: RowId) -> Option<&FeedEntry> {
        self.rows
            .get(&row)
            .and_then(|index| self.state.entries.get(*index))
    }

    /// Clears the list and fetches the feed on a worker thread.
    ///
    /// Requests made while a fetch is outstanding are ignored.
    pub fn refresh(&mut self) -> RefreshOutcome {
        if self.pending.is_some() {
            debug!(url = %self.url, "refresh ignored, fetch already in flight");
            return RefreshOutcome::AlreadyInFlight;
        }

        self.state.entries.clear();
        self.state.last_fetch_failed = false;
        self.rows.clear();

        let (tx, rx) = bounded(1);
        let source = Arc::clone(&self.source);
        let url = self.url.clone();
        let spawned = thread::Builder::new()
            .name("authordesk-feed".into())
            .spawn(move || {
                let _ = tx.send(source.fetch(&url));
            });

        match spawned {
            Ok(_) => {
                self.pending = Some(rx);
            }
            Err(err) => {
                warn!(?err, "failed to spawn feed worker");
                // Surfaced on the next poll like any other failed fetch.
                let (tx, rx) = bounded(1);
                let _ = tx.send(Err(FetchError::ParseOrNetworkFailure {
                    url: self.url.clone(),
                    detail: err.to_string(),
                }));
                self.pending = Some(rx);
            }
        }
        RefreshOutcome::Started
    }

    /// Applies a finished fetch, if any. Returns true when the state changed.
    pub fn poll(&mut self, notices: &mut Notices) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(self.worker_lost()),
        };
        self.finish(result, notices);
        true
    }

    /// Blocks until the outstanding fetch completes or the timeout elapses.
    pub fn wait(&mut self, timeout: Duration, notices: &mut Notices) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let result = match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => return false,
            Err(RecvTimeoutError::Disconnected) => Err(self.worker_lost()),
        };
        self.finish(result, notices);
        true
    }

    fn worker_lost(&self) -> FetchError {
        FetchError::ParseOrNetworkFailure {
            url: self.url.clone(),
            detail: "feed worker exited without a result".into(),
        }
    }

    fn finish(&mut self, result: FetchResult, notices: &mut Notices) {
        self.pending = None;
        self.rows.clear();
        match result {
            Ok(entries) => {
                info!(url = %self.url, count = entries.len(), "feed refreshed");
                for index in 0..entries.len() {
                    self.rows.insert(self.allocator.allocate(), index);
                }
                self.state.entries = entries;
                self.state.last_fetch_failed = false;
            }
            Err(err) => {
                warn!(%err, "feed refresh failed");
                self.state.entries.clear();
                self.state.last_fetch_failed = true;
                let notice = Notice::new(FEED_ERROR_NOTICE, NoticeKind::Error)
                    .with_detail(err.to_string());
                notices.push(notice);
            }
        }
    }

    pub fn activate(
        &self,
        entry: &FeedEntry,
        opener: &dyn LinkOpener,
        notices: &mut Notices,
    ) -> Activation {
        if !entry.has_link() {
            debug!(title = %entry.title, "feed entry has no link");
            return Activation::NoLink;
        }
        match opener.open(&entry.link) {
            Ok(()) => Activation::Opened,
            Err(err) => {
                warn!(link = %entry.link, ?err, "failed to open feed entry");
                notices.error(format!("Failed to open {}", entry.link));
                Activation::OpenFailed
            }
        }
    }

    pub fn activate_row(
        &self,
        row: RowId,
        opener: &dyn LinkOpener,
        notices: &mut Notices,
    ) -> Activation {
        match self.entry_for(row) {
            Some(entry) => self.activate(entry, opener, notices),
            None => Activation::UnknownRow,
        }
    }
}
