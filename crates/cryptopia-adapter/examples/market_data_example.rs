/*
[INPUT]:  Market label (e.g., "DOT_BTC")
[OUTPUT]: Market data (ticker, order book, recent trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use cryptopia_adapter::*;

/// Example: Query market data (no credentials required)
#[tokio::main]
async fn main() {
    println!("=== Cryptopia Market Data Example ===\n");

    let client = match CryptopiaClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no credentials needed for public endpoints)\n");

    let market = "DOT_BTC";

    println!("Querying ticker for {}...", market);
    match client.get_market(market).await {
        Ok(Some(ticker)) => println!("✓ Last price: {} (bid {}, ask {})", ticker.last_price, ticker.bid_price, ticker.ask_price),
        Ok(None) => println!("✓ No data for {}", market),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", market);
    match client.get_market_orders(market).await {
        Ok(Some(book)) => println!("✓ {} bids, {} asks", book.buy.len(), book.sell.len()),
        Ok(None) => println!("✓ Empty order book"),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying trade history for {}...", market);
    match client.get_market_history(market).await {
        Ok(history) => println!("✓ {} trades", history.map_or(0, |h| h.len())),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
