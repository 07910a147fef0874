/*
[INPUT]:  CRYPTOPIA_API_KEY / CRYPTOPIA_API_SECRET environment variables
[OUTPUT]: Account balances from a signed request
[POS]:    Examples - private account queries
[UPDATE]: When private API or signing changes
*/

use cryptopia_adapter::*;

/// Example: Signed balance query
///
/// Private endpoints require:
/// 1. An API key and base64 secret
/// 2. An `amx` HMAC-SHA256 Authorization header per request (done by the client)
#[tokio::main]
async fn main() {
    println!("=== Cryptopia Balance Example ===\n");

    let (Ok(api_key), Ok(api_secret)) = (
        std::env::var("CRYPTOPIA_API_KEY"),
        std::env::var("CRYPTOPIA_API_SECRET"),
    ) else {
        eprintln!("Set CRYPTOPIA_API_KEY and CRYPTOPIA_API_SECRET to run this example");
        return;
    };

    let credentials = Credentials::new(api_key, api_secret);
    let client = match CryptopiaClient::with_credentials(ClientConfig::default(), credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created with credentials");

    // An empty currency asks for every balance on the account
    match client.get_balance("").await {
        Ok(Some(balances)) => {
            for balance in balances.iter().filter(|b| !b.total.is_zero()) {
                println!("  {:>8} total {} available {}", balance.symbol, balance.total, balance.available);
            }
        }
        Ok(None) => println!("✓ No balances returned"),
        Err(e) if e.is_auth_error() => println!("✗ Credential problem: {}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Balance example complete");
}
