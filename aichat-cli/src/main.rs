//! CLI entry point for aichat

mod commands;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use aichat_core::config::{validate_config, Config, LoggingConfig};
use aichat_core::logging::init_logging;
use aichat_providers::QianfanClient;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(name = "aichat")]
#[command(about = "Chat with a hosted AI app from the command line")]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding auth.txt and conversation_id.txt (before the command)
    #[arg(short, long)]
    dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and save a new conversation ID
    #[command(disable_help_flag = true)]
    Start {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        _rest: Vec<String>,
    },
    /// Send a message with the saved conversation ID
    #[command(disable_help_flag = true)]
    Send {
        /// Query text; only the first value is sent
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// What a command line asks for
#[derive(Debug, PartialEq)]
enum Invocation {
    Usage,
    Start { dir: Option<PathBuf> },
    Send { dir: Option<PathBuf>, query: String },
    MissingQuery,
    Unknown,
    /// Help or version text rendered by clap
    Info(String),
}

fn main() {
    init_logging(&LoggingConfig::default());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(std::env::args_os(), &mut out);
}

/// Parse `args` and run the selected command
///
/// Output failures (e.g. a closed pipe) are logged, never turned into an
/// exit status.
fn dispatch<I, T>(args: I, out: &mut impl Write)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let result = run(parse_invocation(args), out).and_then(|_| out.flush());
    if let Err(e) = result {
        debug!("Failed to write output: {}", e);
    }
}

fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return Invocation::Info(e.to_string());
            }
            debug!("Argument error: {}", e);
            return Invocation::Unknown;
        }
    };

    match cli.command {
        None => Invocation::Usage,
        Some(Commands::Start { .. }) => Invocation::Start { dir: cli.dir },
        Some(Commands::Send { query }) => match query.into_iter().next() {
            Some(query) => Invocation::Send {
                dir: cli.dir,
                query,
            },
            None => Invocation::MissingQuery,
        },
        Some(Commands::Unknown(args)) => {
            debug!("Unknown command: {:?}", args);
            Invocation::Unknown
        }
    }
}

fn run(invocation: Invocation, out: &mut impl Write) -> io::Result<()> {
    match invocation {
        Invocation::Usage => commands::usage(out),
        Invocation::Start { dir } => match prepare(dir, out)? {
            Some((config, client)) => commands::start(&config, &client, out),
            None => Ok(()),
        },
        Invocation::Send { dir, query } => match prepare(dir, out)? {
            Some((config, client)) => commands::send(&config, &client, &query, out),
            None => Ok(()),
        },
        Invocation::MissingQuery => writeln!(out, "{}", commands::MISSING_QUERY),
        Invocation::Unknown => writeln!(out, "{}", commands::UNKNOWN_COMMAND),
        Invocation::Info(text) => write!(out, "{}", text),
    }
}

/// Build the configuration and service client, reporting failures on `out`
fn prepare(
    dir: Option<PathBuf>,
    out: &mut impl Write,
) -> io::Result<Option<(Config, QianfanClient)>> {
    let config = match dir {
        Some(dir) => Ok(Config::in_dir(dir)),
        None => Config::from_current_dir(),
    }
    .and_then(|config| validate_config(&config).map(|_| config));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            debug!("Invalid configuration: {}", e);
            writeln!(out, "{}", e)?;
            return Ok(None);
        }
    };

    match QianfanClient::new(&config.service) {
        Ok(client) => Ok(Some((config, client))),
        Err(e) => {
            debug!("Cannot create service client: {}", e);
            writeln!(out, "{}", e)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A writer whose every write fails, like stdout on a closed pipe
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn parse(args: &[&str]) -> Invocation {
        parse_invocation(std::iter::once("aichat").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments_is_usage() {
        assert_eq!(parse(&[]), Invocation::Usage);
    }

    #[test]
    fn test_start_ignores_trailing_arguments() {
        assert_eq!(parse(&["start"]), Invocation::Start { dir: None });
        assert_eq!(parse(&["start", "extra"]), Invocation::Start { dir: None });
        assert_eq!(
            parse(&["start", "--help", "-d"]),
            Invocation::Start { dir: None }
        );
    }

    #[test]
    fn test_send_takes_first_argument_verbatim() {
        assert_eq!(
            parse(&["send", "hello there", "ignored"]),
            Invocation::Send {
                dir: None,
                query: "hello there".to_string(),
            }
        );
        assert_eq!(parse(&["send"]), Invocation::MissingQuery);
    }

    #[test]
    fn test_send_hyphen_query_is_not_a_flag() {
        for query in ["-d", "--help", "--dir"] {
            assert_eq!(
                parse(&["send", query]),
                Invocation::Send {
                    dir: None,
                    query: query.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_dir_option_before_command() {
        assert_eq!(
            parse(&["--dir", "/srv/chat", "send", "hi"]),
            Invocation::Send {
                dir: Some(PathBuf::from("/srv/chat")),
                query: "hi".to_string(),
            }
        );
    }

    #[test]
    fn test_other_tokens_are_unknown() {
        assert_eq!(parse(&["stop"]), Invocation::Unknown);
        assert_eq!(parse(&["help"]), Invocation::Unknown);
        assert_eq!(parse(&["--bogus"]), Invocation::Unknown);
        assert_eq!(parse(&["--dir"]), Invocation::Unknown);
    }

    #[test]
    fn test_help_flag_renders_help() {
        match parse(&["--help"]) {
            Invocation::Info(text) => assert!(text.contains("--dir")),
            other => panic!("expected help text, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_output() {
        let mut out = Vec::new();
        dispatch(["aichat", "help"], &mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", commands::UNKNOWN_COMMAND)
        );
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        dispatch(["aichat"], &mut ClosedPipe);
        dispatch(["aichat", "--bogus"], &mut ClosedPipe);
    }
}
