//! Command-line flags. Anything given here overrides the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug, Default)]
#[command(name = "blocktris", version, about = "Falling-block puzzle game for the terminal")]
pub struct Args {
    /// Edition to play: prototype | classic | modern
    #[arg(short, long)]
    pub edition: Option<String>,

    /// RNG seed for a reproducible piece sequence
    #[arg(long)]
    pub seed: Option<u32>,

    /// Config file (default: $BLOCKTRIS_CONFIG or <config dir>/blocktris/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (the terminal is in raw mode while playing)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Level to start from (editions with levels only)
    #[arg(long)]
    pub start_level: Option<u32>,

    /// Number of upcoming pieces to show
    #[arg(long)]
    pub preview: Option<usize>,

    /// Piece randomizer: uniform | bag
    #[arg(long)]
    pub randomizer: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    pub fn apply(&self, config: &mut Config) {
        if let Some(edition) = &self.edition {
            config.game.edition = edition.clone();
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(level) = self.start_level {
            config.game.start_level = level;
        }
        if let Some(preview) = self.preview {
            config.game.preview = Some(preview);
        }
        if let Some(randomizer) = &self.randomizer {
            config.game.randomizer = randomizer.clone();
        }
        if let Some(file) = &self.log_file {
            config.log.file = file.clone();
        }
    }
}
