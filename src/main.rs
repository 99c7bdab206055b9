use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use emprec::commands;
use emprec_core::config::{Config, ViewStyle};
use emprec_formats::SourceFormat;

#[derive(Parser)]
#[command(name = "emprec", about = "Load, normalize and print employee records")]
struct Cli {
    /// Extra config file layered over the defaults and ./emprec.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to <tmp>/emprec-debug.log instead of stderr (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print one or more record documents (default: the configured samples).
    Show {
        paths: Vec<PathBuf>,
        /// Force the input format instead of detecting it from the extension.
        #[arg(long)]
        format: Option<SourceFormat>,
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
    },
    /// Verify that every document holds the same records.
    Check { paths: Vec<PathBuf> },
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Blocks,
    Table,
}

impl From<StyleArg> for ViewStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Blocks => ViewStyle::Blocks,
            StyleArg::Table => ViewStyle::Table,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug)?;

    let config = Config::load(cli.config.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    match cli.command.unwrap_or(Command::Show {
        paths: Vec::new(),
        format: None,
        style: None,
    }) {
        Command::Show { paths, format, style } => {
            commands::show(&mut stdout, &config, &paths, format, style.map(Into::into))
        }
        Command::Check { paths } => commands::check(&mut stdout, &config, &paths),
    }
}

fn init_tracing(verbose: u8, debug: bool) -> anyhow::Result<()> {
    let default_level = match (debug, verbose) {
        (true, _) => "debug",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    if debug {
        let path = std::env::temp_dir().join("emprec-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter)
            .init();
        tracing::info!("emprec debug log started — tail -f {}", path.display());
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
    Ok(())
}
