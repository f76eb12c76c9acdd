use anyhow::Context;
use authordesk_core::LinkOpener;
use tracing::info;

/// Opens links with the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, uri: &str) -> anyhow::Result<()> {
        webbrowser::open(uri).with_context(|| format!("failed to open {uri}"))?;
        info!(%uri, "opened link in browser");
        Ok(())
    }
}
