use anyhow::Result;
use clap::Parser;
use crypto_evaluator::core::log::init_logging;
use crypto_evaluator::{AppConfig, EvaluatorError};

/// Calculates the 70/30 split of a USD holding across two crypto currencies
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "CLI that takes in a USD amount as holdings, and calculates the 70/30 split for 2 given crypto currencies",
    after_help = "Example:\n  crypto-evaluator 100 BTC ETH"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long)]
    config_path: Option<String>,

    /// Exchange rate endpoint, overrides the configuration file
    #[arg(short, long, env = "COINBASE_SERVER_URL")]
    endpoint: Option<String>,

    /// Holding in whole USD
    #[arg(value_parser = parse_usd_amount)]
    usd_amount: String,

    /// Currency receiving 70% of the holding
    currency_seventy: String,

    /// Currency receiving 30% of the holding
    currency_thirty: String,
}

fn parse_usd_amount(input: &str) -> Result<String, EvaluatorError> {
    match input.parse::<i64>() {
        Ok(amount) if amount >= 0 => Ok(input.to_string()),
        _ => Err(EvaluatorError::InvalidArgument {
            input: input.to_string(),
        }),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = AppConfig::load(cli.config_path.as_deref())?.with_endpoint(cli.endpoint);

    match crypto_evaluator::run(
        &cli.usd_amount,
        &cli.currency_seventy,
        &cli.currency_thirty,
        &config,
    )
    .await
    {
        Ok((seventy, thirty)) => {
            println!("{seventy}");
            println!("{thirty}");
        }
        Err(e) => {
            tracing::error!(error = %e, "Split calculation failed");
            println!("error: {e}");
        }
    }
    Ok(())
}
