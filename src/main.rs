//! trackwalk CLI
//!
//! Usage: trackwalk [--catalog <FILE>] [--config <FILE>] [-v]

mod cli;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use trackwalk::browser::{
    build_artist_tree, build_playlist_tree, intent_channel, LibrarySnapshot, Session, UiQueue,
};
use trackwalk::infrastructure::{bounded_reads, FileCatalog};
use trackwalk::logging::{effective_level, LogBuffer, LogPane};
use trackwalk::ui::{detect_capabilities, App, Palette, TerminalGuard};
use trackwalk::Config;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, warnings) =
        Config::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);

    let log = Arc::new(LogBuffer::new(config.log.scrollback));
    if let Some(path) = &config.log.file {
        log.tee_to(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
    }
    LogPane::new(
        Arc::clone(&log),
        effective_level(config.log.level.filter(), cli.verbose),
    )
    .install()
    .context("failed to install logger")?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let path = config
        .catalog_path()
        .context("no catalog configured; pass --catalog or set [catalog] path")?;
    let catalog = Arc::new(
        FileCatalog::open(&path)
            .with_context(|| format!("cannot open catalog {}", path.display()))?,
    );
    info!("catalog {}", catalog.path().display());

    let library = Arc::new(LibrarySnapshot::from_tracks(&catalog.saved_tracks()));
    let (source, mutations) = bounded_reads(catalog, config.request_timeout());

    let (intents, receiver) = intent_channel(config.events.queue_depth);
    let session = Session::new(source, mutations, library, intents);

    let artists = build_artist_tree(&session);
    let playlists = build_playlist_tree(&session);
    let tasks = UiQueue::new();
    let consumer = playlists
        .consumer(&session, tasks.handle())
        .spawn(receiver)
        .context("failed to start playlist updates")?;
    // The trees keep their own session clones; the intent channel closes
    // once they are gone.
    drop(session);

    let caps = detect_capabilities();
    let palette = Palette::resolve(config.ui.color, config.ui.unicode, &caps);
    let mut app = App::new(artists, playlists.tree, tasks, log, palette);

    let result = match TerminalGuard::enter(io::stdout()) {
        Ok(mut guard) => app.run(guard.out(), config.tick()),
        Err(e) => Err(e),
    };

    drop(app);
    match consumer.join() {
        Ok(added) => info!("{} tracks added this session", added),
        Err(_) => warn!("playlist update thread panicked"),
    }

    result.context("terminal error")
}
