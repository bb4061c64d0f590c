//! Vowels-consonants game entry point.
//!
//! # Usage
//!
//! ```bash
//! # Play with the built-in words
//! vocon
//!
//! # Faster scrolling, masked words, custom list
//! vocon --speed 1 --complicate --words rounds.txt
//!
//! # Keep a debug log while playing
//! vocon --log-file vocon.log --log-level debug
//! ```

use std::{fs::File, io, path::PathBuf, sync::Mutex};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vocon_app::{App, GameConfig, Runtime, Speed};
use vocon_tui::{TerminalDriver, load_suite};
use vocon_words::VowelRule;

/// Count the vowels and consonants of words scrolling across the terminal
#[derive(Parser, Debug)]
#[command(name = "vocon")]
#[command(about = "Count the vowels and consonants of scrolling words")]
#[command(version)]
struct Args {
    /// Skip the splash banner
    #[arg(long)]
    no_show_banner: bool,

    /// Scroll speed; lower is faster (tick every (speed + 2) / 10 * 150ms)
    #[arg(long, default_value = "3", allow_negative_numbers = true)]
    speed: Speed,

    /// Intermittently mask the scrolling word
    #[arg(long)]
    complicate: bool,

    /// Word list: file path or http(s) URL, one round per line, words
    /// separated by commas
    #[arg(short, long, value_name = "SOURCE")]
    words: Option<String>,

    /// Count `y` as a consonant instead of a vowel
    #[arg(long)]
    y_consonant: bool,

    /// Write logs to this file (nothing is logged without it)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            speed: self.speed,
            complication: self.complicate,
            show_banner: !self.no_show_banner,
            vowel_rule: if self.y_consonant { VowelRule::ExcludeY } else { VowelRule::IncludeY },
        }
    }
}

/// Install the file logger. The terminal belongs to the game, so logs never
/// go to stdout or stderr.
fn init_logging(args: &Args) -> io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.game_config();
    tracing::info!(?config, "vocon starting");

    let suite = load_suite(args.words.as_deref()).await;

    let driver = TerminalDriver::new()?;
    let mut runtime = Runtime::new(driver, App::new(config, suite));
    runtime.run().await?;

    tracing::info!(rounds = runtime.app().rounds_played(), "vocon exiting");
    Ok(())
}
