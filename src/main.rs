//! User Generator CLI
//!
//! Reads a newline-delimited list of emails and prints one back-office user
//! record per email as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --file emails.txt --hash sha256 --pretty > users.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use clap::builder::styling::AnsiColor;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::info;
use rand::rngs::OsRng;
use std::io::{self, IsTerminal};
use std::process;
use user_generator::{
    read_emails, write_output, Cli, Config, GeneratorError, Output, Result, UserGenerator,
};

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    if let Err(e) = run(cli) {
        report(&e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::try_from(cli)?;
    info!(
        "Generating users from {} with {} ({}-byte digest) into {}",
        config.input.display(),
        config.hash,
        config.hash.output_len(),
        config.output
    );

    let emails = read_emails(&config.input)?;

    let mut generator = UserGenerator::new(config.hash, OsRng);
    let records = generator.generate_all(&emails)?;
    info!("Generated {} {} users", records.len(), generator.hash());

    write_output(&records, &config)?;

    if let (Output::File(path), true) = (&config.output, config.pretty) {
        let created = format!("File [{}] created", path.display());
        println!("{}", paint(&created, AnsiColor::Green, io::stdout().is_terminal()));
    }

    Ok(())
}

fn report(e: &GeneratorError) {
    eprintln!(
        "{}",
        paint(&e.to_string(), AnsiColor::Red, io::stderr().is_terminal())
    );

    if e.is_usage() {
        eprintln!();
        eprintln!("{}", Cli::command().render_help());
    }
}

/// Wraps `message` in `color` when writing to a terminal.
fn paint(message: &str, color: AnsiColor, terminal: bool) -> String {
    if !terminal {
        return message.to_owned();
    }

    let style = color.on_default();
    format!("{}{}{}", style.render(), message, style.render_reset())
}
