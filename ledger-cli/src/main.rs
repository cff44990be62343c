use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ledger_core::{categorize_all, Transaction};
use ledger_ingest::{generate, parse_transactions_csv, sms_text};
use ledger_insights::{build_fingerprint, detect_fraud, forecast, metrics_for, tip_for};
use serde_json::json;
use std::path::PathBuf;

mod config;

#[derive(Parser, Debug)]
#[command(name = "ledger", version, about = "Living Ledger financial-insights CLI")]
struct Cli {
    /// Load records from a CSV instead of generating a synthetic batch
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Synthetic records per batch (default from config)
    #[arg(long, global = true)]
    count: Option<usize>,

    /// Seed for reproducible synthetic data
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit a fresh batch of raw bank-SMS style records
    Sms {
        /// Print the simulated SMS lines instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Run the categorizer pre-pass and emit categorized records
    Categorize,

    /// Scan a categorized batch for fraud alerts
    Fraud,

    /// Build the identity fingerprint of spending behavior
    Fingerprint,

    /// Fit per-category trends and project future daily spend
    Forecast {
        /// Days to project past the latest observed date
        #[arg(long)]
        horizon: Option<u32>,
    },

    /// Look up the budgeting tip for a category
    Tip { category: String },

    /// Write a default config to ~/.ledger/config.toml
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match &cli.command {
        Command::Init => {
            config::init_config()?;
        }

        Command::Sms { text } => {
            let records = load_records(&cli, &cfg)?;
            if *text {
                for txn in &records {
                    println!("{}", sms_text(txn));
                }
            } else {
                print_envelope(json!({ "transactions": records }))?;
            }
        }

        Command::Categorize => {
            let records = categorize_all(load_records(&cli, &cfg)?);
            print_envelope(json!({ "categorized_transactions": records }))?;
        }

        Command::Fraud => {
            let records = categorize_all(load_records(&cli, &cfg)?);
            print_envelope(json!({ "fraud_transactions": detect_fraud(&records)? }))?;
        }

        Command::Fingerprint => {
            let records = categorize_all(load_records(&cli, &cfg)?);
            print_envelope(json!({ "fingerprint": build_fingerprint(&records)? }))?;
        }

        Command::Forecast { horizon } => {
            let records = categorize_all(load_records(&cli, &cfg)?);
            let horizon = horizon.unwrap_or(cfg.forecast.horizon_days);
            print_envelope(json!({ "forecast": forecast(&records, horizon)? }))?;
        }

        Command::Tip { category } => {
            let records = categorize_all(load_records(&cli, &cfg)?);
            let metrics = metrics_for(category, &records)?;
            print_envelope(json!({
                "category": category,
                "tips": tip_for(category, &metrics),
            }))?;
        }
    }

    Ok(())
}

/// Fresh dataset per invocation: the CSV when given, synthetic otherwise.
fn load_records(cli: &Cli, cfg: &config::Config) -> Result<Vec<Transaction>> {
    if let Some(path) = &cli.csv {
        if !path.exists() {
            bail!("CSV not found: {} (pass --csv <path>)", path.display());
        }
        let records = parse_transactions_csv(path)
            .with_context(|| format!("parsing {}", path.display()))?;
        eprintln!("Loaded {} records from {}", records.len(), path.display());
        return Ok(records);
    }

    let count = cli.count.unwrap_or(cfg.generator.count);
    let seed = cli.seed.or(cfg.generator.seed);
    Ok(generate(count, seed))
}

fn print_envelope(envelope: serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
