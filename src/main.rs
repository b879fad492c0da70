use anyhow::Result;
use flowscore::cli::{parse_args, Commands};
use flowscore::commands::{self, AnalyzeConfig, SuggestConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // `log` records from the library are bridged into tracing by the subscriber.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = parse_args();

    let verbosity = match &cli.command {
        Commands::Analyze { verbosity, .. } => *verbosity,
        _ => 0,
    };
    init_logging(verbosity);

    match cli.command {
        Commands::Analyze {
            path,
            format,
            config,
            output,
            verbosity,
        } => commands::handle_analyze(AnalyzeConfig {
            path,
            format: format.into(),
            config,
            output,
            verbosity,
        }),
        Commands::Suggest {
            path,
            format,
            config,
            top,
        } => commands::handle_suggest(SuggestConfig {
            path,
            format: format.into(),
            config,
            top,
        }),
        Commands::Levels { path, format } => commands::handle_levels(&path, format.into()),
        Commands::Init { force } => commands::init_config(force),
    }
}
