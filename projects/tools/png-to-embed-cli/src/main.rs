mod error;

use argh::FromArgs;
use error::CliError;
use png_to_embed::file_io::{encode_file, write_artifact};
use png_to_embed::is_c_identifier;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Used when the program name cannot be read from the command line.
const DEFAULT_COMMAND_NAME: &str = "png-to-embed";

#[derive(FromArgs, Debug)]
/// Embed an image file into a C/C++ header as a byte array
struct TopLevel {
    /// path to the image file to embed
    #[argh(positional)]
    image: PathBuf,

    /// further arguments are accepted and ignored
    #[argh(positional, arg_name = "ignored")]
    _ignored: Vec<String>,
}

#[derive(Debug)]
enum Invocation {
    Encode(TopLevel),
    Help(String),
}

/// Parses the full command line, including the program name.
///
/// Unlike [`argh::from_env`], every message ends up on stdout so scripts wrapping the tool
/// only need to capture one stream.
fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let command = args
        .first()
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_COMMAND_NAME);
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

    match TopLevel::from_args(&[command], &rest) {
        Ok(cli) => Ok(Invocation::Encode(cli)),
        Err(early_exit) => match early_exit.status {
            Ok(()) => Ok(Invocation::Help(early_exit.output)),
            Err(()) => Err(CliError::Usage(format!(
                "{}\n{}",
                early_exit.output.trim_end(),
                usage_line(command)
            ))),
        },
    }
}

/// First line of the generated help, e.g. `Usage: png-to-embed <image>`.
fn usage_line(command: &str) -> String {
    TopLevel::from_args(&[command], &["--help"])
        .err()
        .and_then(|help| help.output.lines().next().map(str::to_owned))
        .unwrap_or_else(|| format!("Usage: {command} <image>"))
}

/// Encodes the image named on the command line into `output_dir`.
///
/// # Returns
///
/// The file name of the generated header.
fn handle_encode(cli: TopLevel, output_dir: &Path) -> Result<String, CliError> {
    let artifact = encode_file(&cli.image)?;
    if !is_c_identifier(artifact.identifier()) {
        eprintln!(
            "Warning: '{}' is not a valid C identifier, the generated header will not compile as-is",
            artifact.identifier()
        );
    }

    write_artifact(&artifact, output_dir)?;
    Ok(artifact.output_file_name())
}

/// Result of a complete invocation: the message for stdout and the process exit status.
#[derive(Debug, PartialEq, Eq)]
struct RunOutput {
    status: u8,
    message: String,
}

/// Runs the tool for the given command line, writing headers into `output_dir`.
fn run(args: &[String], output_dir: &Path) -> RunOutput {
    let result = parse_args(args).and_then(|invocation| match invocation {
        Invocation::Encode(cli) => {
            let generated = handle_encode(cli, output_dir)?;
            Ok(format!("Generated {generated}"))
        }
        Invocation::Help(help) => Ok(help),
    });

    match result {
        Ok(message) => RunOutput { status: 0, message },
        Err(CliError::Usage(usage)) => RunOutput {
            status: 1,
            message: usage,
        },
        Err(e) => RunOutput {
            status: 1,
            message: format!("Error: {e}"),
        },
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let output = run(&args, Path::new("."));
    println!("{}", output.message);
    ExitCode::from(output.status)
}
