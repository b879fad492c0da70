use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flowscore")]
#[command(about = "Structural quality scoring for process diagrams", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a diagram snapshot
    Analyze {
        /// Snapshot file (JSON with elements, connections and viewport)
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Configuration file (defaults to the nearest .flowscore.toml)
        #[arg(short, long, env = "FLOWSCORE_CONFIG")]
        config: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        /// -v: Show per-gateway and per-label details
        /// -vv: Also log analyzer internals
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List prioritized improvement suggestions for a diagram snapshot
    Suggest {
        /// Snapshot file
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Configuration file (defaults to the nearest .flowscore.toml)
        #[arg(short, long, env = "FLOWSCORE_CONFIG")]
        config: Option<PathBuf>,

        /// Show only the top N suggestions
        #[arg(long = "top")]
        top: Option<usize>,
    },

    /// Print the layout level of every node
    Levels {
        /// Snapshot file
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_analyze_command() {
        let cli = Cli::parse_from([
            "flowscore",
            "analyze",
            "order.json",
            "--format",
            "json",
            "-vv",
        ]);

        match cli.command {
            Commands::Analyze {
                path,
                format,
                verbosity,
                output,
                ..
            } => {
                assert_eq!(path, PathBuf::from("order.json"));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(verbosity, 2);
                assert_eq!(output, None);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parsing_suggest_command() {
        let cli = Cli::parse_from(["flowscore", "suggest", "order.json", "--top", "3"]);

        match cli.command {
            Commands::Suggest { top, format, .. } => {
                assert_eq!(top, Some(3));
                assert_eq!(format, OutputFormat::Terminal);
            }
            _ => panic!("Expected Suggest command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["flowscore", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
    }
}
