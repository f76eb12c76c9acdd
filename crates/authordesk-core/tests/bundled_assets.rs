use std::path::PathBuf;

use authordesk_core::{AssetResolver, BioPanel, DeskConfig, DeskContent, DirectoryAssets, LoopClip};

fn workspace_assets() -> DirectoryAssets {
    DirectoryAssets::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets"))
}

#[test]
fn default_feedback_audio_ships_with_the_workspace() {
    let config = DeskConfig::default();
    let bytes = workspace_assets()
        .resolve(&config.feedback_audio)
        .expect("bundled feedback audio");
    let clip = LoopClip::from_wav_bytes(&config.feedback_audio, &bytes).unwrap();
    assert!(clip.frames() > 0);
    assert_eq!(clip.sample_rate, 44_100);
}

#[test]
fn default_portrait_resolves() {
    let panel = BioPanel::new(DeskContent::default().bio, &workspace_assets());
    assert_eq!(panel.pictures().len(), 1);
    assert!(panel.pictures()[0].bytes.starts_with(b"\x89PNG"));
}
