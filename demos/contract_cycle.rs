/// Contract lifecycle example: list, accept, deliver, fulfill.
///
/// Delivery and fulfillment only succeed when a ship actually holds the
/// required cargo at the destination, so those steps report API errors
/// instead of bailing out.
///
/// Run with: SPACETRADERS_TOKEN=... cargo run --example contract_cycle
use spacetraders_sdk::{
    ApiConfig, DeliverContractRequest, PageQuery, StClient, StError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = StClient::new(ApiConfig::default());
    let token = std::env::var("SPACETRADERS_TOKEN")?;

    // 1. List contracts
    let contracts = client.list_contracts(&token, PageQuery::default()).await?;
    println!("{} contracts:", contracts.meta.total);
    for c in &contracts.data {
        println!(
            "  {} [{}] from {} — accepted={} fulfilled={}",
            c.id, c.contract_type, c.faction_symbol, c.accepted, c.fulfilled
        );
        for d in &c.terms.deliver {
            println!(
                "    deliver {}x {} to {} ({} done)",
                d.units_required, d.trade_symbol, d.destination_symbol, d.units_fulfilled
            );
        }
    }

    let Some(contract) = contracts.data.iter().find(|c| !c.fulfilled) else {
        println!("Nothing open.");
        return Ok(());
    };

    // 2. Accept it (409 means it already was)
    match client.accept_contract(&token, &contract.id).await {
        Ok(accepted) => println!(
            "Accepted {} — advance paid, {} credits now",
            accepted.contract.id, accepted.agent.credits
        ),
        Err(StError::Api { status: 409, .. }) => {
            println!("{} was already accepted", contract.id)
        }
        Err(e) => return Err(e.into()),
    }

    // 3. Try a delivery for the first outstanding item
    if let Some(item) = contract
        .terms
        .deliver
        .iter()
        .find(|d| d.units_fulfilled < d.units_required)
    {
        let ships = client.list_ships(&token, PageQuery::default()).await?;
        let Some(ship) = ships.data.first() else {
            println!("No ships available.");
            return Ok(());
        };

        let req = DeliverContractRequest {
            ship_symbol: ship.symbol.clone(),
            trade_symbol: item.trade_symbol.clone(),
            units: item.units_required - item.units_fulfilled,
        };
        match client.deliver_contract(&token, &contract.id, &req).await {
            Ok(delivered) => {
                let done = &delivered.contract.terms.deliver[0];
                println!(
                    "Delivered — {}/{} {} fulfilled",
                    done.units_fulfilled, done.units_required, done.trade_symbol
                );
            }
            Err(StError::Api { status, body }) => {
                println!("Delivery rejected (HTTP {status}): {body}")
            }
            Err(e) => return Err(e.into()),
        }
    }

    // 4. Fulfill once all items are in
    match client.fulfill_contract(&token, &contract.id).await {
        Ok(fulfilled) => println!(
            "Fulfilled {} — {} credits now",
            fulfilled.contract.id, fulfilled.agent.credits
        ),
        Err(StError::Api { status, .. }) => {
            println!("Not fulfillable yet (HTTP {status})")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
