use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use typeahead::{config::SourceKind, Overrides};

#[derive(Parser)]
#[command(name = "typeahead", about = "Search-as-you-type in the terminal")]
struct Cli {
    /// Write debug logs to /tmp/typeahead-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.config/typeahead/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Search backend, overriding `[search] source`.
    #[arg(long, value_enum)]
    source: Option<SourceArg>,

    /// JSON array of records for the local source.
    #[arg(long, value_name = "FILE")]
    records: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Local,
    Algolia,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Local => SourceKind::Local,
            SourceArg::Algolia => SourceKind::Algolia,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/typeahead-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("typeahead debug log started — tail -f /tmp/typeahead-debug.log");
    }

    let config = typeahead::resolve_config(&Overrides {
        config: cli.config,
        source: cli.source.map(Into::into),
        records: cli.records,
    })?;
    let source = typeahead::sources::build_source(&config)?;
    typeahead::ui::run(config, source)
}
