use std::path::PathBuf;

use clap::Parser;
use trackwalk::config::ColorMode;
use trackwalk::Config;

/// trackwalk - browse a music catalog and edit your playlists from the terminal
#[derive(Parser, Debug)]
#[command(name = "trackwalk")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Keys: arrows navigate and expand, Esc collapses all, Tab switches pane.\n\
                  In the artist tree press a playlist's slot character to add the focused track;\n\
                  in the playlist tree press 'x' to remove it. 'q' quits."
)]
pub struct Cli {
    /// Config file (default: ~/.config/trackwalk/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Catalog snapshot (JSON)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Deadline for each catalog read in seconds, 0 disables it
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// When to use colors
    #[arg(long, value_parser = parse_color)]
    pub color: Option<ColorMode>,

    /// Also write log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// CLI flags take precedence over everything else
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.catalog {
            config.catalog.path = Some(path.clone());
        }
        if let Some(secs) = self.timeout {
            config.catalog.request_timeout_secs = secs;
        }
        if let Some(mode) = self.color {
            config.ui.color = mode;
        }
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
    }
}

fn parse_color(value: &str) -> Result<ColorMode, String> {
    ColorMode::parse(value).ok_or_else(|| format!("expected auto, always or never, got '{}'", value))
}
