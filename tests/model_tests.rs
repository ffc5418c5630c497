/// Schema tests: upstream payload shapes decode into the canonical
/// models, and request bodies serialize with the exact camelCase names
/// the API expects.
use serde_json::json;

use spacetraders_sdk::{
    Contract, Data, DeliverContractRequest, Market, Paged, RegisterAgentRequest, SellCargoRequest,
    Ship, Survey, System, Waypoint,
};

mod common;
use common::*;

#[test]
fn ship_decodes_in_full() {
    let ship: Data<Ship> = serde_json::from_value(data(ship_json("RUSTY-VENTURES-1"))).unwrap();
    let ship = ship.data;

    assert_eq!(ship.symbol, "RUSTY-VENTURES-1");
    assert_eq!(ship.registration.faction_symbol, "COSMIC");
    assert_eq!(ship.nav.route.origin.symbol, "X1-DF55-69207D");
    assert_eq!(ship.frame.fuel_capacity, 400);
    assert_eq!(ship.mounts[0].deposits, vec!["IRON_ORE", "COPPER_ORE"]);
    assert_eq!(ship.cargo.inventory[0].units, 15);
    assert_eq!(ship.fuel.consumed.as_ref().unwrap().amount, 20);
    assert!(ship.nav.route.departure_time < ship.nav.route.arrival);
}

#[test]
fn paged_contract_list_decodes_with_meta() {
    let payload = paged(
        vec![contract_json("cl-1"), contract_json("cl-2")],
        2,
        1,
        10,
    );
    let page: Paged<Contract> = serde_json::from_value(payload).unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.total, 2);
    assert_eq!(page.data[0].contract_type, "PROCUREMENT");
    assert_eq!(page.data[0].terms.payment.on_fulfilled, 120_000);
    assert_eq!(page.data[0].terms.deliver[0].units_required, 100);
}

#[test]
fn contract_without_delivery_terms_decodes() {
    let mut value = contract_json("cl-1");
    value["terms"]
        .as_object_mut()
        .unwrap()
        .remove("deliver");
    let contract: Contract = serde_json::from_value(value).unwrap();
    assert!(contract.terms.deliver.is_empty());
}

#[test]
fn system_carries_abbreviated_waypoints() {
    let system: System = serde_json::from_value(system_json("X1-DF55")).unwrap();

    assert_eq!(system.system_type, "ORANGE_STAR");
    assert_eq!(system.waypoints.len(), 1);
    assert_eq!(system.waypoints[0].orbitals[0].symbol, "X1-DF55-20250B");
    assert_eq!(system.factions[0].symbol, "COSMIC");
}

#[test]
fn uncharted_waypoint_decodes_without_chart_or_faction() {
    let mut value = waypoint_json("X1-DF55-99999X");
    value.as_object_mut().unwrap().remove("chart");
    value.as_object_mut().unwrap().remove("faction");
    let waypoint: Waypoint = serde_json::from_value(value).unwrap();

    assert!(waypoint.chart.is_none());
    assert!(waypoint.faction.is_none());
    assert_eq!(waypoint.traits[0].symbol, "MINERAL_DEPOSITS");
}

#[test]
fn market_defaults_docked_only_sections() {
    let market: Market = serde_json::from_value(market_json("X1-DF55-20250Z")).unwrap();
    assert!(market.trade_goods.is_empty());
    assert!(market.transactions.is_empty());

    let mut value = market_json("X1-DF55-20250Z");
    value["tradeGoods"] = json!([{
        "symbol": "IRON_ORE",
        "tradeVolume": 100,
        "supply": "ABUNDANT",
        "purchasePrice": 25,
        "sellPrice": 22
    }]);
    let market: Market = serde_json::from_value(value).unwrap();
    assert_eq!(market.trade_goods[0].sell_price, 22);
}

#[test]
fn register_request_round_trips() {
    let req = RegisterAgentRequest {
        faction: "COSMIC".into(),
        symbol: "RUSTY-VENTURES".into(),
        email: "ops@example.com".into(),
    };
    let encoded = serde_json::to_string(&req).unwrap();
    let decoded: RegisterAgentRequest = serde_json::from_str(&encoded).unwrap();
    assert_eq!(req, decoded);
}

#[test]
fn deliver_request_round_trips_with_camel_case_keys() {
    let req = DeliverContractRequest {
        ship_symbol: "SHIP-1".into(),
        trade_symbol: "IRON_ORE".into(),
        units: 42,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        json!({ "shipSymbol": "SHIP-1", "tradeSymbol": "IRON_ORE", "units": 42 })
    );

    let decoded: DeliverContractRequest = serde_json::from_value(value).unwrap();
    assert_eq!(req, decoded);
}

#[test]
fn sell_request_round_trips() {
    let req = SellCargoRequest {
        symbol: "IRON_ORE".into(),
        units: 15,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, json!({ "symbol": "IRON_ORE", "units": 15 }));
    let decoded: SellCargoRequest = serde_json::from_value(value).unwrap();
    assert_eq!(req, decoded);
}

#[test]
fn survey_round_trips_as_a_request_body() {
    // A survey is decoded from the create-survey response, then sent back
    // verbatim inside the extract body; both directions must agree.
    let survey: Survey = serde_json::from_value(survey_json("SIG-1")).unwrap();
    let encoded = serde_json::to_value(&survey).unwrap();
    let decoded: Survey = serde_json::from_value(encoded).unwrap();
    assert_eq!(survey, decoded);
    assert_eq!(decoded.deposits.len(), 2);
}

#[test]
fn extraction_yield_field_uses_raw_identifier() {
    let value = json!({
        "shipSymbol": "SHIP-1",
        "yield": { "symbol": "IRON_ORE", "units": 7 }
    });
    let extraction: spacetraders_sdk::Extraction = serde_json::from_value(value).unwrap();
    assert_eq!(extraction.r#yield.units, 7);
}
