use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use sortviz::algorithms::Algorithm;
use sortviz::config::{DEFAULT_ARRAY_SIZE, MAX_VALUE, MIN_VALUE};
use sortviz::playback::speed::DEFAULT_SPEED;
use sortviz::VizConfig;

#[derive(Parser, Debug)]
#[command(
    name = "sortviz",
    version,
    about = "Watch sorting algorithms work, one step at a time"
)]
struct Cli {
    /// bubble, insertion, selection, merge or quick (unknown names fall back to bubble)
    #[arg(short, long, default_value = "bubble")]
    algorithm: String,

    /// Number of bars (5-100)
    #[arg(short, long, default_value_t = DEFAULT_ARRAY_SIZE)]
    size: usize,

    /// Speed slider position (10-500, higher is faster)
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: u64,

    /// Color theme: default, terminal, dracula, nord
    #[arg(short, long, default_value = "default", env = "SORTVIZ_THEME")]
    theme: String,

    /// Seed for reproducible arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Print frames as text instead of opening the UI
    #[arg(long)]
    headless: bool,

    /// Start playing immediately
    #[arg(long)]
    autoplay: bool,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,

    /// Append logs to this file. Without it the UI discards logs, headless
    /// runs write them to stderr.
    #[arg(long, env = "SORTVIZ_LOG_FILE")]
    log_file: Option<PathBuf>,
}

/// Where log lines go. The UI owns the terminal, so stderr is only safe
/// for headless runs.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    fn choose(headless: bool, log_file: Option<&Path>) -> Self {
        match (log_file, headless) {
            (Some(path), _) => Self::File(path.to_path_buf()),
            (None, true) => Self::Stderr,
            (None, false) => Self::Discard,
        }
    }
}

impl Cli {
    fn into_config(self) -> VizConfig {
        VizConfig {
            algorithm: Algorithm::from_name(&self.algorithm),
            array_size: self.size,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            speed: self.speed,
            theme: self.theme,
            seed: self.seed,
            autoplay: self.autoplay,
            headless: self.headless,
        }
    }
}

fn init_tracing(directive: Option<&str>, target: &LogTarget) -> std::io::Result<()> {
    let filter = directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Discard => (BoxMakeWriter::new(std::io::sink), false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let target = LogTarget::choose(cli.headless, cli.log_file.as_deref());
    if let Err(err) = init_tracing(cli.log_filter.as_deref(), &target) {
        eprintln!("sortviz: cannot open log file: {err}");
        return ExitCode::FAILURE;
    }

    let config = cli.into_config();
    match sortviz::pipeline::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "sortviz failed");
            eprintln!("sortviz: {err}");
            ExitCode::FAILURE
        }
    }
}
