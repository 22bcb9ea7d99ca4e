//! Hand-rolled command-line parsing.

use crate::error::AppError;

pub const USAGE: &str = "\
Usage: workbridge [OPTIONS]

Options:
  -h, --help                 Print help
  -f, --config <PATH>        Path to configuration file (default: config/default.toml)
  -v, -vv, -vvv, -vvvv       Increase logging verbosity
      --members              List workspace members and their versions
      --json                 With --members, print the list as JSON";

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Level forced by `-v` flags; `None` keeps the configured level.
    pub log_level: Option<&'static str>,
    pub config_path: Option<String>,
    pub help: bool,
    pub members: bool,
    pub json: bool,
}

/// Parse arguments, excluding the program name. Unknown arguments are ignored.
pub fn parse<I>(args: I) -> Result<CliArgs, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut verbosity = 0u8;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-f" | "--config" => match iter.next() {
                Some(path) => cli.config_path = Some(path),
                None => return Err(AppError::Cli("-f/--config requires a path argument".into())),
            },
            "--members" => cli.members = true,
            "--json" => cli.json = true,
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add(u8::try_from(a.len() - 1).unwrap_or(u8::MAX));
            }
            _ => {}
        }
    }

    // Each -v raises verbosity one tier:
    //   -v → warn, -vv → info, -vvv → debug, -vvvv+ → trace
    cli.log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    Ok(cli)
}
