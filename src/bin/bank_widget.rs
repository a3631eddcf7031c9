//! CLI tool for transaction display helpers.
//!
//! # Usage
//!
//! ```bash
//! # Mask a card or account field
//! bank-widget mask "Visa Platinum 7000792289606361"
//!
//! # Format a timestamp
//! bank-widget date 2024-03-11T02:26:18.671407
//!
//! # Print executed operations from an export, newest first
//! bank-widget report data/operations.json --state EXECUTED
//!
//! # Generate card numbers
//! bank-widget cards 1 5
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostic output on stderr.

use bank_widget::calllog::CallLogger;
use bank_widget::generators::{card_number_generator, random_card_number_generator, TransactionIterExt};
use bank_widget::processing::{filter_by_state, sort_by_date, DEFAULT_STATE};
use bank_widget::{format_date, loader, mask_account, mask_account_card, mask_card_number, render_transaction};
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bank-widget")]
#[command(author, version, about = "Mask card/account numbers and render bank operations")]
struct Cli {
    /// Append a line per masking call to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mask a labeled field such as "Visa Platinum 7000792289606361" or "Счет 7365..."
    Mask {
        /// Field to mask
        input: String,
    },

    /// Mask a bare card number
    Card {
        /// Card number (13-19 digits)
        number: String,
    },

    /// Mask a bare account number
    Account {
        /// Account number
        number: String,
    },

    /// Format an ISO-8601 timestamp as DD.MM.YYYY
    Date {
        /// Timestamp, e.g. 2024-03-11T02:26:18.671407
        date: String,
    },

    /// Print card numbers for an inclusive range
    Cards {
        /// First number
        start: u64,
        /// Last number
        end: u64,
    },

    /// Print random card numbers
    RandomCards {
        /// How many numbers to print
        #[arg(short, long, default_value = "5")]
        count: usize,
    },

    /// Render operations from a JSON export
    Report {
        /// Path to the JSON file
        file: PathBuf,

        /// Keep only operations in this state
        #[arg(short, long, default_value = DEFAULT_STATE)]
        state: String,

        /// Oldest first instead of newest first
        #[arg(short, long)]
        ascending: bool,

        /// Keep only operations in this currency (e.g. USD)
        #[arg(short, long)]
        currency: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print each operation's amount in rubles (needs API_KEY_CURRENCY)
    Convert {
        /// Path to the JSON file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let logger = cli.log_file.as_deref().map(CallLogger::to_file);

    match cli.command {
        Commands::Mask { input } => {
            let result = logged(logger.as_ref(), "mask_account_card", &input, || mask_account_card(&input));
            print_or_exit(result);
        }
        Commands::Card { number } => {
            let result = logged(logger.as_ref(), "mask_card_number", &number, || {
                mask_card_number(number.as_str())
            });
            print_or_exit(result);
        }
        Commands::Account { number } => {
            let result = logged(logger.as_ref(), "mask_account", &number, || mask_account(number.as_str()));
            print_or_exit(result);
        }
        Commands::Date { date } => {
            print_or_exit(format_date(&date));
        }
        Commands::Cards { start, end } => {
            for card in card_number_generator(start, end) {
                println!("{}", card);
            }
        }
        Commands::RandomCards { count } => {
            for card in random_card_number_generator(count) {
                println!("{}", card);
            }
        }
        Commands::Report {
            file,
            state,
            ascending,
            currency,
            output,
        } => {
            cmd_report(&file, &state, ascending, currency.as_deref(), output);
        }
        Commands::Convert { file } => {
            cmd_convert(&file);
        }
    }
}

/// Runs `f` through the call logger when one is configured.
fn logged<T, E: Display>(
    logger: Option<&CallLogger>,
    name: &str,
    input: &str,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    match logger {
        Some(logger) => logger.call(name, (input,), f),
        None => f(),
    }
}

fn print_or_exit<E: Display>(result: Result<String, E>) {
    match result {
        Ok(value) => println!("{}", value),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_report(file: &Path, state: &str, ascending: bool, currency: Option<&str>, output: OutputFormat) {
    let transactions = match loader::try_load_transactions(file) {
        Ok(transactions) => transactions,
        Err(e) => {
            eprintln!("Error: {}: {}", file.display(), e);
            std::process::exit(1);
        }
    };

    let selected = sort_by_date(&filter_by_state(&transactions, state), !ascending);
    let selected: Vec<_> = match currency {
        Some(code) => selected.iter().filter_by_currency(code).cloned().collect(),
        None => selected,
    };

    match output {
        OutputFormat::Text => {
            println!("Operations found: {}", selected.len());
            for tx in &selected {
                println!();
                match render_transaction(tx) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => eprintln!("Skipping operation {}: {}", tx.id, e),
                }
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&selected) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

#[cfg(feature = "convert")]
fn cmd_convert(file: &Path) {
    use bank_widget::convert::{convert_to_rubles, ApiLayerClient};

    let client = match ApiLayerClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for tx in loader::load_transactions(file) {
        match convert_to_rubles(&tx, &client) {
            Ok(rubles) => println!("{}: {:.2} RUB", tx.id, rubles),
            Err(e) => eprintln!("{}: {}", tx.id, e),
        }
    }
}

#[cfg(not(feature = "convert"))]
fn cmd_convert(_file: &Path) {
    eprintln!("Error: built without the `convert` feature");
    std::process::exit(1);
}
