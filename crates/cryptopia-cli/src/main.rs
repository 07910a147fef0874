/*
[INPUT]:  CLI arguments, API credentials from flags or environment
[OUTPUT]: Unwrapped Cryptopia payloads printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or subcommands
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cryptopia_adapter::{ClientConfig, Credentials, CryptopiaClient, Operation, Params};

#[derive(Parser, Debug)]
#[command(name = "cryptopia-cli", version, about = "Cryptopia exchange API client")]
struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "api-key", env = "CRYPTOPIA_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long = "api-secret", env = "CRYPTOPIA_API_SECRET", hide_env_values = true)]
    api_secret: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all currencies
    Currencies,
    /// List all trade pairs
    TradePairs,
    /// Ticker data for every market
    Markets,
    /// Ticker data for one market
    Market { market: String },
    /// Recent trades for one market
    History { market: String },
    /// Order book for one market
    Orders { market: String },
    /// Account balances (requires credentials)
    Balance {
        #[arg(default_value = "")]
        currency: String,
    },
    /// Call any operation by name; values fill its parameters in order
    Call {
        operation: String,
        values: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let client = build_client(&args)?;
    debug!(base_url = %client.base_url(), signed = client.credentials().is_some(), "client ready");

    let payload = run(&client, args.command).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("render payload")?
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn build_client(args: &Cli) -> Result<CryptopiaClient> {
    let mut config = ClientConfig::default();
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }

    let client = match (&args.api_key, &args.api_secret) {
        (Some(key), Some(secret)) => {
            CryptopiaClient::with_credentials(config, Credentials::new(key, secret))
        }
        (None, None) => CryptopiaClient::with_config(config),
        _ => bail!("--api-key and --api-secret must be given together"),
    };
    client.context("create cryptopia client")
}

async fn run(client: &CryptopiaClient, command: Command) -> Result<Value> {
    let (operation, params) = match command {
        Command::Currencies => (Operation::GetCurrencies, Params::new()),
        Command::TradePairs => (Operation::GetTradePairs, Params::new()),
        Command::Markets => (Operation::GetMarkets, Params::new()),
        Command::Market { market } => (Operation::GetMarket, Params::new().with("market", market)),
        Command::History { market } => (
            Operation::GetMarketHistory,
            Params::new().with("market", market),
        ),
        Command::Orders { market } => (
            Operation::GetMarketOrders,
            Params::new().with("market", market),
        ),
        Command::Balance { currency } => (
            Operation::GetBalance,
            Params::new().with("Currency", currency),
        ),
        Command::Call { operation, values } => {
            let operation: Operation = operation.parse()?;
            let params = positional_params(operation, values)?;
            (operation, params)
        }
    };

    info!(operation = %operation, "calling cryptopia");
    client
        .dispatch(operation, params)
        .await
        .with_context(|| format!("{operation} failed"))
}

/// Body fields the exchange expects as JSON numbers
const NUMERIC_FIELDS: [&str; 5] = ["Rate", "Amount", "ActiveUsers", "OrderID", "TradePairID"];

/// Pair positional values with the operation's parameter names. Numeric fields
/// are sent as JSON numbers (`null` allowed), everything else as strings.
fn positional_params(operation: Operation, values: Vec<String>) -> Result<Params> {
    let names = operation.param_names();
    if operation.is_private() && values.len() != names.len() {
        bail!(
            "{operation} expects {} value(s): {}",
            names.len(),
            names.join(", ")
        );
    }

    values
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let key = names
                .get(index)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("arg{index}"));
            let value = if NUMERIC_FIELDS.contains(&key.as_str()) {
                numeric_value(&key, &raw)?
            } else {
                Value::String(raw)
            };
            Ok((key, value))
        })
        .collect()
}

fn numeric_value(key: &str, raw: &str) -> Result<Value> {
    match serde_json::from_str(raw) {
        Ok(value @ (Value::Number(_) | Value::Null)) => Ok(value),
        _ => bail!("{key} must be a number, got {raw:?}"),
    }
}
