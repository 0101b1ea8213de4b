use std::{fs::File, str::FromStr};

use anyhow::{Context, Result};
use bank_account::bin_utils::Service;
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let customer_name = args
        .next()
        .context("Expected a customer name as the first argument")?;
    let initial_balance = args
        .next()
        .context("Expected an initial balance as the second argument")?;
    let initial_balance = Decimal::from_str(&initial_balance)
        .with_context(|| format!("Invalid initial balance `{initial_balance}`"))?;
    let filename = args
        .next()
        .context("Expected a file name as the third argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        customer_name,
        initial_balance,
        error_printer: Box::new(|line, err| eprintln!("Error at line {line}: {err}")),
    };
    service.run()
}
