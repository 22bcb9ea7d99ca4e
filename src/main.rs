//! Workbridge: root entry point of the workspace.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse CLI args
//!   3. Load config
//!   4. Resolve effective log level (CLI `-v` flags > env > config)
//!   5. Init logger once
//!   6. Call across member crates and print the result

use std::io::{self, Write};

use tracing::info;

use workbridge::{cli, config, error, greeting, logger, members};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), error::AppError> {
    // Load .env if present; ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = cli::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let config = config::load(args.config_path.as_deref())?;

    // Reject a bad configured level even when a -v flag overrides it.
    let configured_level = logger::parse_level(&config.log_level)?;
    let effective_log_level = match args.log_level {
        Some(level) => logger::parse_level(level)?,
        None => configured_level,
    };
    let force_cli_level = args.log_level.is_some();

    logger::init(effective_log_level, force_cli_level, config.log_file.as_deref())?;

    info!(
        configured_log_level = %config.log_level,
        effective_log_level = %effective_log_level,
        log_file = ?config.log_file,
        "config loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.members {
        let list = members::members();
        info!(count = list.len(), json = args.json, "reporting workspace members");
        if args.json {
            let json = serde_json::to_string_pretty(&list)?;
            writeln!(out, "{json}")?;
        } else {
            out.write_all(members::render_table(&list).as_bytes())?;
        }
        out.flush()?;
        return Ok(());
    }

    greeting::write_to(&mut out)?;
    info!("greeting complete");

    Ok(())
}
