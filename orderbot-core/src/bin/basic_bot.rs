// orderbot-core/src/bin/basic_bot.rs
// Place one order on the Binance futures testnet, then show what it left behind

use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use orderbot_core::config::{Credentials, Settings, API_KEY_VAR, API_SECRET_VAR};
use orderbot_core::exchange::BinanceFuturesConnector;
use orderbot_core::logging;
use orderbot_core::service::{reporter, OrderSubmitter, Reporter, ServiceError};
use orderbot_core::{OrderRequest, OrderType, Side};

#[derive(Parser, Debug)]
#[command(name = "basic_bot", about = "Simplified Binance Futures Testnet Bot")]
struct Cli {
    /// Trading pair, e.g. BTCUSDT
    #[arg(long)]
    symbol: String,

    /// Order side
    #[arg(long, value_enum, ignore_case = true)]
    side: CliSide,

    /// Order type
    #[arg(long = "type", value_enum, ignore_case = true)]
    order_type: CliOrderType,

    /// Order quantity
    #[arg(long, value_parser = parse_exact_decimal)]
    qty: Decimal,

    /// Price (for LIMIT/STOP_LIMIT)
    #[arg(long, value_parser = parse_exact_decimal)]
    price: Option<Decimal>,

    /// Stop price (for STOP_LIMIT)
    #[arg(long, value_parser = parse_exact_decimal)]
    stop: Option<Decimal>,

    /// Settings file to use instead of ./config.*
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Refuse values `Decimal` cannot hold without rounding (more than 28
/// fractional digits), instead of validating a number nobody typed.
fn parse_exact_decimal(raw: &str) -> Result<Decimal, String> {
    Decimal::from_str_exact(raw.trim())
        .map_err(|e| format!("'{}' is not an exact decimal: {}", raw, e))
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliSide {
    #[value(name = "BUY")]
    Buy,
    #[value(name = "SELL")]
    Sell,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliOrderType {
    #[value(name = "MARKET")]
    Market,
    #[value(name = "LIMIT")]
    Limit,
    #[value(name = "STOP_LIMIT")]
    StopLimit,
}

impl Cli {
    fn order_request(&self) -> OrderRequest {
        OrderRequest {
            symbol: self.symbol.clone(),
            side: match self.side {
                CliSide::Buy => Side::Buy,
                CliSide::Sell => Side::Sell,
            },
            order_type: match self.order_type {
                CliOrderType::Market => OrderType::Market,
                CliOrderType::Limit => OrderType::Limit,
                CliOrderType::StopLimit => OrderType::StopLimit,
            },
            quantity: self.qty,
            price: self.price,
            stop_price: self.stop,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Before logging::init there is no subscriber to carry the message
            if tracing::dispatcher::has_been_set() {
                error!("{}", e);
            } else {
                eprintln!("❌ {}", e);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), ServiceError> {
    let settings = Settings::load(cli.config.as_deref())?;
    let credentials = Credentials::from_env().ok_or_else(|| {
        ServiceError::Config(format!(
            "Missing API keys: set {} and {} (e.g. in .env)",
            API_KEY_VAR, API_SECRET_VAR
        ))
    })?;

    let log_path =
        logging::init(&settings.logging).map_err(|e| ServiceError::Config(format!("{:#}", e)))?;

    let connector = BinanceFuturesConnector::new(&settings.exchange, credentials)?;
    info!(
        base_url = connector.base_url(),
        log_file = %log_path.display(),
        "Binance Futures client initialized"
    );

    let request = cli.order_request();
    let resp = OrderSubmitter::new(&connector).place_order(&request).await?;

    let mut out = io::stdout();
    reporter::write_order_result(&resp, &mut out)?;
    Reporter::new(&connector)
        .report_account(&resp.symbol, &mut out)
        .await?;
    out.flush()?;

    Ok(())
}
