/// Mining run example: orbit, survey, extract, dock, sell.
///
/// Survey and extraction both put the reactor on cooldown; the loop waits
/// out whatever the API reports instead of guessing.
///
/// Run with: SPACETRADERS_TOKEN=... SHIP=... cargo run --example mining_run
use std::time::Duration;

use spacetraders_sdk::{ApiConfig, SellCargoRequest, StClient, StError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = StClient::new(ApiConfig::default());
    let token = std::env::var("SPACETRADERS_TOKEN")?;
    let ship_symbol = std::env::var("SHIP")?;

    // 1. Make sure the ship is in orbit
    let nav = client.orbit_ship(&token, &ship_symbol).await?;
    println!("{} in orbit at {}", ship_symbol, nav.waypoint_symbol);

    // 2. Survey the waypoint for good deposits
    let survey = match client.create_survey(&token, &ship_symbol).await {
        Ok(data) => {
            for s in &data.surveys {
                let deposits: Vec<&str> =
                    s.deposits.iter().map(|d| d.symbol.as_str()).collect();
                println!("Survey {} [{}]: {}", s.signature, s.size, deposits.join(", "));
            }
            wait_for_cooldown(&client, &token, &ship_symbol).await?;
            data.surveys.into_iter().next()
        }
        Err(StError::Api { status, .. }) => {
            println!("Survey unavailable (HTTP {status}), extracting blind");
            None
        }
        Err(e) => return Err(e.into()),
    };

    // 3. Extract, targeted if a survey came back
    let extraction = match &survey {
        Some(survey) => {
            client
                .extract_resources_with_survey(&token, &ship_symbol, survey)
                .await?
        }
        None => client.extract_resources(&token, &ship_symbol).await?,
    };
    println!(
        "Extracted {}x {} — cargo {}/{}",
        extraction.extraction.r#yield.units,
        extraction.extraction.r#yield.symbol,
        extraction.cargo.units,
        extraction.cargo.capacity
    );

    // 4. Dock and sell the haul
    client.dock_ship(&token, &ship_symbol).await?;
    for item in &extraction.cargo.inventory {
        let req = SellCargoRequest {
            symbol: item.symbol.clone(),
            units: item.units,
        };
        match client.sell_cargo(&token, &ship_symbol, &req).await {
            Ok(sale) => println!(
                "Sold {}x {} for {} credits (balance {})",
                sale.transaction.units,
                sale.transaction.trade_symbol,
                sale.transaction.total_price,
                sale.agent.credits
            ),
            Err(StError::Api { status, .. }) => {
                println!("Market refused {} (HTTP {status})", item.symbol)
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

async fn wait_for_cooldown(
    client: &StClient,
    token: &str,
    ship_symbol: &str,
) -> Result<(), StError> {
    loop {
        let status = client.get_ship_cooldown(token, ship_symbol).await?;
        if !status.on_cooldown {
            return Ok(());
        }
        let secs = status.cooldown.remaining_seconds.max(1) as u64;
        println!("Cooldown: {secs}s remaining");
        tokio::time::sleep(Duration::from_secs(secs)).await;
    }
}
