// orderbot-core/src/bin/testnet_check.rs
// Connectivity check against the futures REST API; needs no API keys
use anyhow::Result;
use orderbot_core::config::Settings;
use orderbot_core::exchange::BinanceFuturesConnector;

const SAMPLE_SIZE: usize = 5;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::new()?;

    println!("🧪 Testnet check: {}", settings.exchange.base_url());
    let connector = BinanceFuturesConnector::public(&settings.exchange)?;

    // Test 1: Ping
    match connector.ping().await {
        Ok(()) => println!("✅ Ping: OK"),
        Err(e) => println!("❌ Ping failed: {}", e),
    }

    // Test 2: Server time
    match connector.server_time().await {
        Ok(time) => match chrono::DateTime::from_timestamp_millis(time.server_time) {
            Some(ts) => println!("🕒 Server time: {} ({})", time.server_time, ts.to_rfc3339()),
            None => println!("🕒 Server time: {}", time.server_time),
        },
        Err(e) => println!("❌ Server time failed: {}", e),
    }

    // Test 3: Exchange info
    let info = connector.exchange_info().await?;
    let sample: Vec<&str> = info
        .symbols
        .iter()
        .take(SAMPLE_SIZE)
        .map(|s| s.symbol.as_str())
        .collect();
    println!(
        "📈 Exchange info sample: {:?} ({} symbols listed)",
        sample,
        info.symbols.len()
    );

    Ok(())
}
