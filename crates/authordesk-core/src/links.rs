/// Opens a URI in the user's default external handler.
pub trait LinkOpener {
    fn open(&self, uri: &str) -> anyhow::Result<()>;
}
