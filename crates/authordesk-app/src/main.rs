mod app;
mod audio;
mod links;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use authordesk_core::audio::{render_default_loop, write_wav};
use authordesk_core::config::default_config_path;
use authordesk_core::{
    AudioOutput, Desk, DeskConfig, DeskContent, DirectoryAssets, FeedSource, HttpFeedSource,
    SilentOutput,
};
use clap::Parser;
use eframe::{egui, NativeOptions};
use egui_extras::install_image_loaders;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::AuthorDeskApp;
use crate::audio::CpalLoopOutput;

#[derive(Debug, Parser)]
#[command(author, version, about = "Author Desk: bio, books, blog feed and a button")]
struct Cli {
    /// Config file to read instead of the per-user default
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file with the bio and book catalog shown in the desk
    #[arg(long)]
    content: Option<PathBuf>,

    /// Override the syndication feed URL
    #[arg(long)]
    feed_url: Option<String>,

    /// Directory holding pictures and the feedback audio clip
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Never open an audio device
    #[arg(long, default_value_t = false)]
    mute: bool,

    /// Write the stock feedback loop as a WAV file and exit
    #[arg(long)]
    write_default_audio: Option<PathBuf>,

    /// Fetch the feed once, print its entries and exit
    #[arg(long, default_value_t = false)]
    print_feed: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long, default_value_t = false)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let args = Cli::parse();

    if let Some(path) = &args.write_default_audio {
        let clip = render_default_loop();
        write_wav(path, &clip)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!(
            "Wrote {} frames at {} Hz to {}",
            clip.frames(),
            clip.sample_rate,
            path.display()
        );
        return Ok(());
    }

    let (config_path, config) = load_config(&args)?;

    if args.save_config {
        config.save(&config_path)?;
        println!("Wrote configuration to {}", config_path.display());
        return Ok(());
    }

    let source = HttpFeedSource::new(config.fetch_timeout())
        .context("failed to build the feed client")?;

    if args.print_feed {
        let entries = source.fetch(&config.feed_url)?;
        if entries.is_empty() {
            println!("The feed at {} has no entries.", config.feed_url);
        }
        for entry in entries {
            println!("{}", entry.title);
            if entry.has_link() {
                println!("    {}", entry.link);
            }
        }
        return Ok(());
    }

    let content = match &args.content {
        Some(path) => DeskContent::load(path)?,
        None => DeskContent::default(),
    };
    let assets = match &args.assets {
        Some(root) => DirectoryAssets::new(root),
        None => DirectoryAssets::locate(),
    };
    info!(assets = %assets.root().display(), feed = %config.feed_url, "starting desk");

    let output: Box<dyn AudioOutput> = if args.mute {
        Box::new(SilentOutput::default())
    } else {
        Box::new(CpalLoopOutput::new())
    };
    let desk = Desk::new(&config, content, Arc::new(source), &assets, output)
        .context("failed to load desk assets")?;

    run_ui(&config, desk)
}

fn load_config(args: &Cli) -> anyhow::Result<(PathBuf, DeskConfig)> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let mut config = DeskConfig::load(&path)?;
    info!(path = %path.display(), "loaded configuration");
    if let Some(url) = &args.feed_url {
        config.feed_url = url.clone();
    }
    Ok((path, config))
}

fn run_ui(config: &DeskConfig, desk: Desk) -> anyhow::Result<()> {
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Author Desk")
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Author Desk",
        native_options,
        Box::new(move |cc| {
            install_image_loaders(&cc.egui_ctx);
            Box::new(AuthorDeskApp::new(desk, cc))
        }),
    )
    .map_err(|err| anyhow!(err.to_string()))
}
