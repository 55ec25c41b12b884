mod config;
mod logger;

use clap::{Parser, Subcommand};
use config::Settings;
use patchdoc::{flatten, merge, Node};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(version, author, about, long_about=None)]
#[command(arg_required_else_help = true)]
#[command(styles = CLAP_STYLE)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print configuration in json format
    Config {
        #[arg(long, short = 'C', value_name = "FILE")]
        conf: Option<PathBuf>,
    },
    /// Merge a partial update document into a record document
    Merge {
        /// Existing record document ('-' for stdin)
        record: PathBuf,
        /// Partial update document ('-' for stdin)
        update: PathBuf,
        #[arg(long, short = 'C', value_name = "FILE")]
        conf: Option<PathBuf>,
        /// Pretty print output
        #[arg(long)]
        pretty: bool,
    },
    /// Flatten a partial update document into dot-path field updates
    Flatten {
        /// Partial update document ('-' for stdin)
        update: PathBuf,
        #[arg(long, short = 'C', value_name = "FILE")]
        conf: Option<PathBuf>,
        /// Pretty print output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    match &args.command {
        Some(Commands::Config { conf }) => {
            let settings = load_settings(conf)?;
            serde_json::to_writer_pretty(io::stdout().lock(), &settings)?;
        }
        Some(Commands::Merge {
            record,
            update,
            conf,
            pretty,
        }) => {
            let settings = load_settings(conf)?;
            settings.init_logger();

            let existing = read_document(record)?;
            let update = read_document(update)?;

            log::debug!("Merging update into record");
            write_json(&merge(&existing, &update), *pretty || settings.output.pretty)?;
        }
        Some(Commands::Flatten {
            update,
            conf,
            pretty,
        }) => {
            let settings = load_settings(conf)?;
            settings.init_logger();

            let updates = flatten(&read_document(update)?);

            log::debug!("Update flattened into {} field(s)", updates.len());
            write_json(&updates, *pretty || settings.output.pretty)?;
        }
        None => (),
    }
    Ok(())
}

fn load_settings(conf: &Option<PathBuf>) -> Result<Settings, Box<dyn std::error::Error>> {
    Ok(match conf {
        Some(conf) => Settings::from_file(conf)?,
        None => Settings::new()?,
    })
}

/// Read a JSON document from file or stdin
fn read_document(path: &Path) -> Result<Node, Box<dyn std::error::Error>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    Ok(Node::from_json_str(&content)?)
}

fn write_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

const CLAP_STYLE: clap::builder::styling::Styles = clap::builder::styling::Styles::plain();
