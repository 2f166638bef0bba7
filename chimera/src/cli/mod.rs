use crate::ops::chimerac_compile;
use chimera_tracing::{init_tracing_subscriber, TracingSubscriberOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
#[clap(
    name = "chimerac",
    about = "Scan, parse and type check Chimera programs",
    version
)]
pub struct Command {
    /// Source files, compiled one after the other.
    #[clap(required = true)]
    pub files: Vec<PathBuf>,

    /// Print every token the scanner produces.
    #[clap(long)]
    pub print_tokens: bool,

    /// Print the typed syntax tree of each file that checks.
    #[clap(long)]
    pub print_ast: bool,

    /// Do not print the symbol and procedure tables.
    #[clap(long)]
    pub no_tables: bool,

    /// Use verbose output.
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all output.
    #[clap(short = 's', long = "silent")]
    pub silent: bool,

    /// Set the log level, overriding `RUST_LOG` and `--verbose`.
    #[clap(long = "log-level")]
    pub log_level: Option<LevelFilter>,
}

impl Command {
    pub fn tracing_options(&self) -> TracingSubscriberOptions {
        TracingSubscriberOptions {
            verbosity: Some(self.verbose),
            silent: Some(self.silent),
            log_level: self.log_level,
            writer_mode: None,
        }
    }
}

pub fn run_cli() -> anyhow::Result<()> {
    let command = Command::parse();
    init_tracing_subscriber(command.tracing_options());
    chimerac_compile::compile(&command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Command::command().debug_assert();
    }

    #[test]
    fn parse_flags() {
        let command =
            Command::try_parse_from(["chimerac", "-vv", "--print-ast", "a.chi", "b.chi"]).unwrap();
        assert_eq!(command.verbose, 2);
        assert!(command.print_ast);
        assert!(!command.print_tokens);
        assert_eq!(command.files.len(), 2);
        assert_eq!(command.tracing_options().verbosity, Some(2));

        let command =
            Command::try_parse_from(["chimerac", "--log-level", "warn", "a.chi"]).unwrap();
        assert_eq!(command.log_level, Some(LevelFilter::WARN));
    }

    #[test]
    fn files_are_required() {
        assert!(Command::try_parse_from(["chimerac"]).is_err());
    }
}
