/// Data models for the SpaceTraders API.
///
/// One canonical schema set for every upstream resource, shared by all
/// endpoint methods. Field names follow the upstream camelCase schema via
/// serde renames; timestamps are RFC 3339 and decode into
/// `chrono::DateTime<Utc>`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// Pagination metadata on list responses.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    pub total: u32,
    pub page: u32,
    pub limit: u32,
}

/// The `{"data": ...}` wrapper every upstream response uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Data<T> {
    pub data: T,
}

/// A paginated list response: `data` plus `meta`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}

// ---------------------------------------------------------------------------
// Agents
// ---------------------------------------------------------------------------

/// The player-controlled account record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub account_id: String,
    pub symbol: String,
    pub headquarters: String,
    /// Can go negative when funds are overdrawn.
    pub credits: i64,
    pub starting_faction: String,
}

/// Request body for POST /register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAgentRequest {
    pub faction: String,
    pub symbol: String,
    pub email: String,
}

/// Payload of POST /register: the new agent plus its starter kit and the
/// bearer token every later call authenticates with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAgentData {
    pub agent: Agent,
    pub contract: Contract,
    pub faction: Faction,
    pub ship: Ship,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

/// A delivery obligation offered by a faction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub faction_symbol: String,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub terms: ContractTerms,
    pub accepted: bool,
    pub fulfilled: bool,
    pub expiration: DateTime<Utc>,
    pub deadline_to_accept: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerms {
    pub deadline: DateTime<Utc>,
    pub payment: ContractPayment,
    #[serde(default)]
    pub deliver: Vec<ContractDelivery>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractPayment {
    pub on_accepted: i64,
    pub on_fulfilled: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractDelivery {
    pub trade_symbol: String,
    pub destination_symbol: String,
    pub units_required: i32,
    pub units_fulfilled: i32,
}

/// Payload of POST /my/contracts/{id}/accept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcceptContractData {
    pub agent: Agent,
    pub contract: Contract,
}

/// Request body for POST /my/contracts/{id}/deliver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliverContractRequest {
    pub ship_symbol: String,
    pub trade_symbol: String,
    pub units: i32,
}

/// Payload of POST /my/contracts/{id}/deliver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliverContractData {
    pub contract: Contract,
    pub cargo: ShipCargo,
}

/// Payload of POST /my/contracts/{id}/fulfill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FulfillContractData {
    pub agent: Agent,
    pub contract: Contract,
}

// ---------------------------------------------------------------------------
// Factions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub headquarters: String,
    #[serde(default)]
    pub traits: Vec<FactionTrait>,
    pub is_recruiting: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FactionTrait {
    pub symbol: String,
    pub name: String,
    pub description: String,
}

/// A faction referenced by symbol only, as systems and waypoints carry it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FactionSymbol {
    pub symbol: String,
}

// ---------------------------------------------------------------------------
// Fleet
// ---------------------------------------------------------------------------

/// A player-owned vessel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub symbol: String,
    pub registration: ShipRegistration,
    pub nav: ShipNav,
    pub crew: ShipCrew,
    pub frame: ShipFrame,
    pub reactor: ShipReactor,
    pub engine: ShipEngine,
    #[serde(default)]
    pub modules: Vec<ShipModule>,
    #[serde(default)]
    pub mounts: Vec<ShipMount>,
    pub cargo: ShipCargo,
    pub fuel: ShipFuel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipRegistration {
    pub name: String,
    pub faction_symbol: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipNav {
    pub system_symbol: String,
    pub waypoint_symbol: String,
    pub route: ShipRoute,
    pub status: String,
    pub flight_mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipRoute {
    pub destination: RouteWaypoint,
    pub origin: RouteWaypoint,
    pub departure_time: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteWaypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: String,
    pub system_symbol: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipCrew {
    pub current: i32,
    pub required: i32,
    pub capacity: i32,
    pub rotation: String,
    pub morale: i32,
    pub wages: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipRequirements {
    #[serde(default)]
    pub power: i32,
    #[serde(default)]
    pub crew: i32,
    #[serde(default)]
    pub slots: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipFrame {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub condition: i32,
    pub module_slots: i32,
    pub mounting_points: i32,
    pub fuel_capacity: i32,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipReactor {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub condition: i32,
    pub power_output: i32,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipEngine {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub condition: i32,
    pub speed: i32,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipModule {
    pub symbol: String,
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub range: i32,
    pub name: String,
    pub description: String,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipMount {
    pub symbol: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub deposits: Vec<String>,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipCargo {
    pub capacity: i32,
    pub units: i32,
    #[serde(default)]
    pub inventory: Vec<CargoItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CargoItem {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub units: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipFuel {
    pub current: i32,
    pub capacity: i32,
    #[serde(default)]
    pub consumed: Option<FuelConsumed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuelConsumed {
    pub amount: i32,
    pub timestamp: DateTime<Utc>,
}

/// A reactor cooldown after survey, extraction, or scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cooldown {
    pub ship_symbol: String,
    pub total_seconds: i32,
    pub remaining_seconds: i32,
    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,
}

/// Result of the cooldown fetch. HTTP 204 from upstream means the ship is
/// not on cooldown; `cooldown` is the zero value in that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CooldownStatus {
    pub on_cooldown: bool,
    pub cooldown: Cooldown,
}

/// A time-limited resource-yield hint used before extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub signature: String,
    pub symbol: String,
    pub deposits: Vec<SurveyDeposit>,
    pub expiration: DateTime<Utc>,
    pub size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDeposit {
    pub symbol: String,
}

/// Payload of POST /my/ships/{ship}/survey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyData {
    pub cooldown: Cooldown,
    pub surveys: Vec<Survey>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub ship_symbol: String,
    pub r#yield: ExtractionYield,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionYield {
    pub symbol: String,
    pub units: i32,
}

/// Payload of POST /my/ships/{ship}/extract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionData {
    pub cooldown: Cooldown,
    pub extraction: Extraction,
    pub cargo: ShipCargo,
}

/// Payload of POST /my/ships/{ship}/orbit and /dock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavData {
    pub nav: ShipNav,
}

/// Payload of POST /my/ships/{ship}/navigate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationData {
    pub fuel: ShipFuel,
    pub nav: ShipNav,
}

/// Payload of POST /my/ships/{ship}/chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub chart: Chart,
    pub waypoint: Waypoint,
}

/// Request body for POST /my/ships/{ship}/sell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellCargoRequest {
    pub symbol: String,
    pub units: i32,
}

/// Payload of POST /my/ships/{ship}/sell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellCargoData {
    pub agent: Agent,
    pub cargo: ShipCargo,
    pub transaction: MarketTransaction,
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct System {
    pub symbol: String,
    pub sector_symbol: String,
    #[serde(rename = "type")]
    pub system_type: String,
    pub x: i32,
    pub y: i32,
    /// Abbreviated entries; fetch the waypoint itself for traits and chart.
    #[serde(default)]
    pub waypoints: Vec<SystemWaypoint>,
    #[serde(default)]
    pub factions: Vec<FactionSymbol>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemWaypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: String,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub orbitals: Vec<WaypointOrbital>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: String,
    pub system_symbol: String,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub orbitals: Vec<WaypointOrbital>,
    #[serde(default)]
    pub traits: Vec<WaypointTrait>,
    /// Absent for uncharted waypoints.
    #[serde(default)]
    pub chart: Option<Chart>,
    #[serde(default)]
    pub faction: Option<FactionSymbol>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaypointOrbital {
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaypointTrait {
    pub symbol: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    #[serde(default)]
    pub waypoint_symbol: Option<String>,
    #[serde(default)]
    pub submitted_by: Option<String>,
    #[serde(default)]
    pub submitted_on: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Markets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub symbol: String,
    #[serde(default)]
    pub exports: Vec<TradeGood>,
    #[serde(default)]
    pub imports: Vec<TradeGood>,
    #[serde(default)]
    pub exchange: Vec<TradeGood>,
    /// Present only while one of the caller's ships is at the waypoint.
    #[serde(default)]
    pub transactions: Vec<MarketTransaction>,
    #[serde(default)]
    pub trade_goods: Vec<MarketTradeGood>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeGood {
    pub symbol: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketTradeGood {
    pub symbol: String,
    pub trade_volume: i32,
    pub supply: String,
    pub purchase_price: i32,
    pub sell_price: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketTransaction {
    pub waypoint_symbol: String,
    pub ship_symbol: String,
    pub trade_symbol: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub units: i32,
    pub price_per_unit: i32,
    pub total_price: i32,
    pub timestamp: DateTime<Utc>,
}
