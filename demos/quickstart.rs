/// Quickstart example: minimal SpaceTraders flow.
///
/// Demonstrates: register an agent (or reuse a token), fetch the agent,
/// list ships, and check a ship's cooldown.
///
/// Run with: SPACETRADERS_TOKEN=... cargo run --example quickstart
/// Omit the token to register a fresh agent instead.
use spacetraders_sdk::{ApiConfig, PageQuery, RegisterAgentRequest, StClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = StClient::new(ApiConfig::default());

    // 1. Get a token: from the environment, or by registering a new agent
    let token = match std::env::var("SPACETRADERS_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            println!("No SPACETRADERS_TOKEN set, registering a new agent...");
            let registered = client
                .register(&RegisterAgentRequest {
                    faction: "COSMIC".into(),
                    symbol: format!("RUST-{}", std::process::id()),
                    email: String::new(),
                })
                .await?;
            println!("Registered {}", registered.agent.symbol);
            println!("Token: {}", registered.token);
            registered.token
        }
    };

    // 2. Fetch the agent behind the token
    let agent = client.get_agent(&token).await?;
    println!(
        "{} — {} credits, HQ {}",
        agent.symbol, agent.credits, agent.headquarters
    );

    // 3. List the fleet
    let ships = client.list_ships(&token, PageQuery::new(20, 1)).await?;
    println!("Fleet ({} total):", ships.meta.total);
    for ship in &ships.data {
        println!(
            "  {} [{}] at {} ({})",
            ship.symbol, ship.registration.role, ship.nav.waypoint_symbol, ship.nav.status
        );
    }

    // 4. Check the first ship's cooldown
    if let Some(ship) = ships.data.first() {
        let status = client.get_ship_cooldown(&token, &ship.symbol).await?;
        if status.on_cooldown {
            println!(
                "{} on cooldown, {}s remaining",
                ship.symbol, status.cooldown.remaining_seconds
            );
        } else {
            println!("{} is ready", ship.symbol);
        }
    }

    Ok(())
}
