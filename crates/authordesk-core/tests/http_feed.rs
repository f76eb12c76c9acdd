mod common;

use std::sync::Arc;
use std::time::Duration;

use authordesk_core::{
    Activation, FeedPanel, FeedSource, HttpFeedSource, NoticeKind, Notices, RefreshOutcome,
};
use pretty_assertions::assert_eq;

use common::{unreachable_url, LoopbackFeed, RecordingOpener, Reply, THREE_ENTRY_RSS};

const WAIT: Duration = Duration::from_secs(10);

fn http_source(timeout: Duration) -> Arc<dyn FeedSource> {
    Arc::new(HttpFeedSource::new(timeout).expect("http client"))
}

#[test]
fn three_entry_feed_renders_rows_and_opens_second_link() {
    let server = LoopbackFeed::serve(vec![Reply::Ok(THREE_ENTRY_RSS)]);
    let mut notices = Notices::default();
    let mut panel = FeedPanel::new(server.url.clone(), http_source(WAIT));
    assert!(panel.wait(WAIT, &mut notices));

    let titles: Vec<_> = panel.rows().map(|(_, entry)| entry.title.clone()).collect();
    assert_eq!(titles, ["Chapter one", "Chapter two", "Chapter three"]);
    assert_eq!(panel.entries()[2].summary, "");

    let opener = RecordingOpener::default();
    let (second, _) = panel.rows().nth(1).unwrap();
    assert_eq!(
        panel.activate_row(second, &opener, &mut notices),
        Activation::Opened
    );
    assert_eq!(*opener.opened.borrow(), ["https://example.com/x"]);
    assert!(notices.is_empty());
    server.join();
}

#[test]
fn unreachable_then_healthy_endpoint_replaces_the_empty_list() {
    let server = LoopbackFeed::serve(vec![Reply::Hangup, Reply::Ok(THREE_ENTRY_RSS)]);
    let mut notices = Notices::default();
    let mut panel = FeedPanel::new(server.url.clone(), http_source(WAIT));
    assert!(panel.wait(WAIT, &mut notices));
    assert_eq!(panel.rows().count(), 0);
    assert!(panel.state().last_fetch_failed);
    assert_eq!(notices.count(NoticeKind::Error), 1);

    assert_eq!(panel.refresh(), RefreshOutcome::Started);
    assert!(panel.wait(WAIT, &mut notices));
    assert_eq!(panel.rows().count(), 3);
    assert!(!panel.state().last_fetch_failed);
    assert_eq!(notices.len(), 1);
    server.join();
}

#[test]
fn refused_connection_is_a_fetch_error() {
    let source = http_source(WAIT);
    assert!(source.fetch(&unreachable_url()).is_err());
}

#[test]
fn non_success_status_is_a_fetch_error() {
    let server = LoopbackFeed::serve(vec![Reply::Status(503)]);
    let source = http_source(WAIT);
    assert!(source.fetch(&server.url).is_err());
    server.join();
}

#[test]
fn non_feed_body_is_a_fetch_error() {
    let server = LoopbackFeed::serve(vec![Reply::Ok("<html><body>maintenance</body></html>")]);
    let mut notices = Notices::default();
    let mut panel = FeedPanel::new(server.url.clone(), http_source(WAIT));
    assert!(panel.wait(WAIT, &mut notices));
    assert!(panel.entries().is_empty());
    assert_eq!(notices.count(NoticeKind::Error), 1);
    server.join();
}

#[test]
fn stalled_endpoint_times_out() {
    let server = LoopbackFeed::serve(vec![Reply::Stall(Duration::from_secs(3))]);
    let source = http_source(Duration::from_millis(200));
    let started = std::time::Instant::now();
    assert!(source.fetch(&server.url).is_err());
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[test]
fn malformed_url_is_a_fetch_error() {
    let source = http_source(WAIT);
    assert!(source.fetch("not a url").is_err());
}
