use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{ArgAction, Parser};
use tiny::{render_error, scanner::scanner::tokenize_with_diagnostics};
use tracing::level_filters::LevelFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a TINY source file and print its tokens.
#[derive(Debug, Parser)]
#[command(about, version(VERSION))]
struct Config {
    /// Log verbosity: -v for debug, -vv for trace
    #[arg(short, long, action(ArgAction::Count))]
    verbose: u8,
    /// TINY source file to scan
    file: PathBuf,
}

impl Config {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level())
        .init();

    let file_name = config
        .file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| config.file.display().to_string());

    let source = match read_to_string(&config.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", config.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let (tokens, errors) = tokenize_with_diagnostics(source.clone(), Some(file_name));
    tracing::info!("Scanned {} tokens in {:?}", tokens.len(), start.elapsed());

    for token in &tokens {
        println!("{}", token);
    }

    for error in &errors {
        eprint!("{}", render_error(error, &source));
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Parser};
    use tracing::level_filters::LevelFilter;

    use super::Config;

    #[test]
    fn test_counted_verbosity() {
        let quiet = Config::try_parse_from(["tiny", "prog.tny"]).unwrap();
        let debug = Config::try_parse_from(["tiny", "-v", "prog.tny"]).unwrap();
        let trace = Config::try_parse_from(["tiny", "-vv", "prog.tny"]).unwrap();

        assert_eq!(quiet.log_level(), LevelFilter::WARN);
        assert_eq!(debug.log_level(), LevelFilter::DEBUG);
        assert_eq!(trace.log_level(), LevelFilter::TRACE);
        assert_eq!(trace.file.to_str(), Some("prog.tny"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let error = Config::try_parse_from(["tiny", "-q", "prog.tny"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_not_verbosity() {
        let error = Config::try_parse_from(["tiny", "--help"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_file_is_required() {
        let error = Config::try_parse_from(["tiny", "-v"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_config_is_well_formed() {
        use clap::CommandFactory;

        Config::command().debug_assert();
    }
}
