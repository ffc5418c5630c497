#![allow(dead_code)]
/// Shared JSON fixtures for mock-server tests.
///
/// Shapes mirror the upstream schema exactly; tests that need a variation
/// clone one of these and patch it.
use serde_json::{json, Value};

pub fn agent_json() -> Value {
    json!({
        "accountId": "cl-account-1",
        "symbol": "RUSTY-VENTURES",
        "headquarters": "X1-DF55-20250Z",
        "credits": 150_000,
        "startingFaction": "COSMIC"
    })
}

pub fn contract_json(id: &str) -> Value {
    json!({
        "id": id,
        "factionSymbol": "COSMIC",
        "type": "PROCUREMENT",
        "terms": {
            "deadline": "2023-12-01T00:00:00.000Z",
            "payment": { "onAccepted": 30_000, "onFulfilled": 120_000 },
            "deliver": [{
                "tradeSymbol": "IRON_ORE",
                "destinationSymbol": "X1-DF55-20250Z",
                "unitsRequired": 100,
                "unitsFulfilled": 0
            }]
        },
        "accepted": false,
        "fulfilled": false,
        "expiration": "2023-12-01T00:00:00.000Z",
        "deadlineToAccept": "2023-11-20T00:00:00.000Z"
    })
}

pub fn faction_json(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "name": "Cosmic Engineers",
        "description": "Shapers of dead worlds.",
        "headquarters": "X1-DF55-20250Z",
        "traits": [{
            "symbol": "INNOVATIVE",
            "name": "Innovative",
            "description": "Always pushing the envelope."
        }],
        "isRecruiting": true
    })
}

fn route_waypoint_json(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "type": "PLANET",
        "systemSymbol": "X1-DF55",
        "x": 10,
        "y": -5
    })
}

pub fn nav_json(status: &str) -> Value {
    json!({
        "systemSymbol": "X1-DF55",
        "waypointSymbol": "X1-DF55-20250Z",
        "route": {
            "destination": route_waypoint_json("X1-DF55-20250Z"),
            "origin": route_waypoint_json("X1-DF55-69207D"),
            "departureTime": "2023-11-18T11:00:00.000Z",
            "arrival": "2023-11-18T12:00:00.000Z"
        },
        "status": status,
        "flightMode": "CRUISE"
    })
}

pub fn cargo_json(capacity: i32, units: i32) -> Value {
    json!({
        "capacity": capacity,
        "units": units,
        "inventory": [{
            "symbol": "IRON_ORE",
            "name": "Iron Ore",
            "description": "Unrefined iron ore.",
            "units": units
        }]
    })
}

pub fn ship_json(symbol: &str) -> Value {
    let requirements = json!({ "power": 1, "crew": 10, "slots": 1 });
    json!({
        "symbol": symbol,
        "registration": {
            "name": symbol,
            "factionSymbol": "COSMIC",
            "role": "COMMAND"
        },
        "nav": nav_json("IN_ORBIT"),
        "crew": {
            "current": 57,
            "required": 57,
            "capacity": 80,
            "rotation": "STRICT",
            "morale": 100,
            "wages": 0
        },
        "frame": {
            "symbol": "FRAME_FRIGATE",
            "name": "Frigate",
            "description": "A medium-sized, multi-purpose vessel.",
            "condition": 100,
            "moduleSlots": 8,
            "mountingPoints": 5,
            "fuelCapacity": 400,
            "requirements": requirements
        },
        "reactor": {
            "symbol": "REACTOR_FISSION_I",
            "name": "Fission Reactor I",
            "description": "Stable fission reactor.",
            "condition": 100,
            "powerOutput": 31,
            "requirements": requirements
        },
        "engine": {
            "symbol": "ENGINE_ION_DRIVE_II",
            "name": "Ion Drive II",
            "description": "An advanced ion propulsion engine.",
            "condition": 100,
            "speed": 30,
            "requirements": requirements
        },
        "modules": [{
            "symbol": "MODULE_MINERAL_PROCESSOR_I",
            "capacity": 0,
            "range": 0,
            "name": "Mineral Processor",
            "description": "Crushes and processes extracted minerals.",
            "requirements": requirements
        }],
        "mounts": [{
            "symbol": "MOUNT_MINING_LASER_I",
            "name": "Mining Laser",
            "description": "Extracts minerals from deposits.",
            "strength": 10,
            "deposits": ["IRON_ORE", "COPPER_ORE"],
            "requirements": requirements
        }],
        "cargo": cargo_json(60, 15),
        "fuel": {
            "current": 380,
            "capacity": 400,
            "consumed": {
                "amount": 20,
                "timestamp": "2023-11-18T11:00:00.000Z"
            }
        }
    })
}

pub fn cooldown_json(ship_symbol: &str, remaining: i32) -> Value {
    json!({
        "shipSymbol": ship_symbol,
        "totalSeconds": 70,
        "remainingSeconds": remaining,
        "expiration": "2023-11-18T12:01:10.000Z"
    })
}

pub fn survey_json(signature: &str) -> Value {
    json!({
        "signature": signature,
        "symbol": "X1-DF55-17335A",
        "deposits": [{ "symbol": "IRON_ORE" }, { "symbol": "QUARTZ_SAND" }],
        "expiration": "2023-11-18T13:00:00.000Z",
        "size": "MODERATE"
    })
}

pub fn waypoint_json(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "type": "ASTEROID_FIELD",
        "systemSymbol": "X1-DF55",
        "x": 30,
        "y": 40,
        "orbitals": [],
        "traits": [{
            "symbol": "MINERAL_DEPOSITS",
            "name": "Mineral Deposits",
            "description": "Rich in common metal ores."
        }],
        "chart": {
            "waypointSymbol": symbol,
            "submittedBy": "COSMIC",
            "submittedOn": "2023-11-01T00:00:00.000Z"
        },
        "faction": { "symbol": "COSMIC" }
    })
}

pub fn system_json(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "sectorSymbol": "X1",
        "type": "ORANGE_STAR",
        "x": -9500,
        "y": 4000,
        "waypoints": [{
            "symbol": "X1-DF55-20250Z",
            "type": "PLANET",
            "x": 10,
            "y": -5,
            "orbitals": [{ "symbol": "X1-DF55-20250B" }]
        }],
        "factions": [{ "symbol": "COSMIC" }]
    })
}

pub fn market_json(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "exports": [{
            "symbol": "IRON",
            "name": "Iron",
            "description": "Refined iron, ready for manufacturing."
        }],
        "imports": [{
            "symbol": "FOOD",
            "name": "Galactic Cuisine",
            "description": "Foodstuffs for crews."
        }],
        "exchange": [{
            "symbol": "FUEL",
            "name": "Fuel",
            "description": "High-energy fuel for ship engines."
        }]
    })
}

/// `{"data": ...}` envelope.
pub fn data(value: Value) -> Value {
    json!({ "data": value })
}

/// `{"data": [...], "meta": ...}` envelope for list endpoints.
pub fn paged(values: Vec<Value>, total: u32, page: u32, limit: u32) -> Value {
    json!({
        "data": values,
        "meta": { "total": total, "page": page, "limit": limit }
    })
}
