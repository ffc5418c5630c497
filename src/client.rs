/// Typed endpoint methods for the SpaceTraders API.
///
/// `StClient` is the primary entry point. Every method is a thin façade
/// over [`StApi`]: one hard-coded path template, one response shape, no
/// logic of its own. The bearer token is passed per call — this layer
/// neither stores nor refreshes credentials.
use log::debug;
use reqwest::{Method, StatusCode};
use serde_json::json;

use crate::api::{self, PageQuery, StApi};
use crate::config::ApiConfig;
use crate::errors::StError;
use crate::models::*;

/// The high-level SpaceTraders client.
#[derive(Debug, Clone)]
pub struct StClient {
    pub api: StApi,
}

impl StClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: StApi::new(config),
        }
    }
}

impl Default for StClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl StClient {
    // -----------------------------------------------------------------------
    // Agents
    // -----------------------------------------------------------------------

    /// POST /register — create a new agent.
    ///
    /// The one unauthenticated endpoint; the response carries the bearer
    /// token used by every other call.
    pub async fn register(
        &self,
        req: &RegisterAgentRequest,
    ) -> Result<RegisterAgentData, StError> {
        debug!("client.register symbol={} faction={}", req.symbol, req.faction);
        let body = serde_json::to_value(req)?;
        let resp: Data<RegisterAgentData> = self
            .api
            .call(Method::POST, "/register", None, &[], Some(&body))
            .await?;
        Ok(resp.data)
    }

    /// GET /my/agent — the agent the token belongs to.
    pub async fn get_agent(&self, token: &str) -> Result<Agent, StError> {
        debug!("client.get_agent");
        let resp: Data<Agent> = self
            .api
            .call(Method::GET, "/my/agent", Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    // -----------------------------------------------------------------------
    // Contracts
    // -----------------------------------------------------------------------

    /// GET /my/contracts — all contracts, paginated.
    pub async fn list_contracts(
        &self,
        token: &str,
        page: PageQuery,
    ) -> Result<Paged<Contract>, StError> {
        debug!("client.list_contracts limit={} page={}", page.limit, page.page);
        self.api
            .call(Method::GET, "/my/contracts", Some(token), &page.params(), None)
            .await
    }

    /// GET /my/contracts/{id}.
    pub async fn get_contract(&self, token: &str, contract_id: &str) -> Result<Contract, StError> {
        debug!("client.get_contract contract_id={}", contract_id);
        let path = format!("/my/contracts/{contract_id}");
        let resp: Data<Contract> = self
            .api
            .call(Method::GET, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// POST /my/contracts/{id}/accept.
    pub async fn accept_contract(
        &self,
        token: &str,
        contract_id: &str,
    ) -> Result<AcceptContractData, StError> {
        debug!("client.accept_contract contract_id={}", contract_id);
        let path = format!("/my/contracts/{contract_id}/accept");
        let resp: Data<AcceptContractData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// POST /my/contracts/{id}/deliver — hand cargo over to a contract.
    pub async fn deliver_contract(
        &self,
        token: &str,
        contract_id: &str,
        req: &DeliverContractRequest,
    ) -> Result<DeliverContractData, StError> {
        debug!(
            "client.deliver_contract contract_id={} trade_symbol={} units={}",
            contract_id, req.trade_symbol, req.units
        );
        let path = format!("/my/contracts/{contract_id}/deliver");
        let body = serde_json::to_value(req)?;
        let resp: Data<DeliverContractData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], Some(&body))
            .await?;
        Ok(resp.data)
    }

    /// POST /my/contracts/{id}/fulfill — collect payment on a completed
    /// contract.
    pub async fn fulfill_contract(
        &self,
        token: &str,
        contract_id: &str,
    ) -> Result<FulfillContractData, StError> {
        debug!("client.fulfill_contract contract_id={}", contract_id);
        let path = format!("/my/contracts/{contract_id}/fulfill");
        let resp: Data<FulfillContractData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    // -----------------------------------------------------------------------
    // Factions
    // -----------------------------------------------------------------------

    /// GET /factions — all factions, paginated.
    pub async fn list_factions(
        &self,
        token: &str,
        page: PageQuery,
    ) -> Result<Paged<Faction>, StError> {
        debug!("client.list_factions limit={} page={}", page.limit, page.page);
        self.api
            .call(Method::GET, "/factions", Some(token), &page.params(), None)
            .await
    }

    /// GET /factions/{symbol}.
    pub async fn get_faction(&self, token: &str, faction_symbol: &str) -> Result<Faction, StError> {
        debug!("client.get_faction faction_symbol={}", faction_symbol);
        let path = format!("/factions/{faction_symbol}");
        let resp: Data<Faction> = self
            .api
            .call(Method::GET, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    // -----------------------------------------------------------------------
    // Fleet
    // -----------------------------------------------------------------------

    /// GET /my/ships — all ships, paginated.
    pub async fn list_ships(&self, token: &str, page: PageQuery) -> Result<Paged<Ship>, StError> {
        debug!("client.list_ships limit={} page={}", page.limit, page.page);
        self.api
            .call(Method::GET, "/my/ships", Some(token), &page.params(), None)
            .await
    }

    /// GET /my/ships/{ship}.
    pub async fn get_ship(&self, token: &str, ship_symbol: &str) -> Result<Ship, StError> {
        debug!("client.get_ship ship_symbol={}", ship_symbol);
        let path = format!("/my/ships/{ship_symbol}");
        let resp: Data<Ship> = self
            .api
            .call(Method::GET, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// GET /my/ships/{ship}/cargo.
    pub async fn get_ship_cargo(&self, token: &str, ship_symbol: &str) -> Result<ShipCargo, StError> {
        debug!("client.get_ship_cargo ship_symbol={}", ship_symbol);
        let path = format!("/my/ships/{ship_symbol}/cargo");
        let resp: Data<ShipCargo> = self
            .api
            .call(Method::GET, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// GET /my/ships/{ship}/nav.
    pub async fn get_ship_nav(&self, token: &str, ship_symbol: &str) -> Result<ShipNav, StError> {
        debug!("client.get_ship_nav ship_symbol={}", ship_symbol);
        let path = format!("/my/ships/{ship_symbol}/nav");
        let resp: Data<ShipNav> = self
            .api
            .call(Method::GET, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// GET /my/ships/{ship}/cooldown.
    ///
    /// Upstream answers HTTP 204 with no body when the ship is not on
    /// cooldown; that is translated here, never decoded.
    pub async fn get_ship_cooldown(
        &self,
        token: &str,
        ship_symbol: &str,
    ) -> Result<CooldownStatus, StError> {
        debug!("client.get_ship_cooldown ship_symbol={}", ship_symbol);
        let path = format!("/my/ships/{ship_symbol}/cooldown");
        let (status, bytes) = self
            .api
            .invoke(Method::GET, &path, Some(token), &[], None)
            .await?;
        if status == StatusCode::NO_CONTENT || bytes.is_empty() {
            return Ok(CooldownStatus::default());
        }
        let resp: Data<Cooldown> = api::decode(&bytes)?;
        Ok(CooldownStatus {
            on_cooldown: true,
            cooldown: resp.data,
        })
    }

    /// POST /my/ships/{ship}/orbit.
    pub async fn orbit_ship(&self, token: &str, ship_symbol: &str) -> Result<ShipNav, StError> {
        debug!("client.orbit_ship ship_symbol={}", ship_symbol);
        let path = format!("/my/ships/{ship_symbol}/orbit");
        let resp: Data<NavData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data.nav)
    }

    /// POST /my/ships/{ship}/dock.
    pub async fn dock_ship(&self, token: &str, ship_symbol: &str) -> Result<ShipNav, StError> {
        debug!("client.dock_ship ship_symbol={}", ship_symbol);
        let path = format!("/my/ships/{ship_symbol}/dock");
        let resp: Data<NavData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data.nav)
    }

    /// POST /my/ships/{ship}/chart — chart the current waypoint.
    pub async fn create_chart(&self, token: &str, ship_symbol: &str) -> Result<ChartData, StError> {
        debug!("client.create_chart ship_symbol={}", ship_symbol);
        let path = format!("/my/ships/{ship_symbol}/chart");
        let resp: Data<ChartData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// POST /my/ships/{ship}/survey — survey the current waypoint.
    ///
    /// Puts the ship's reactor on cooldown.
    pub async fn create_survey(&self, token: &str, ship_symbol: &str) -> Result<SurveyData, StError> {
        debug!("client.create_survey ship_symbol={}", ship_symbol);
        let path = format!("/my/ships/{ship_symbol}/survey");
        let resp: Data<SurveyData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// POST /my/ships/{ship}/navigate — set course to a waypoint in the
    /// current system. Body: `{"waypointSymbol": ...}`.
    pub async fn navigate_ship(
        &self,
        token: &str,
        ship_symbol: &str,
        waypoint_symbol: &str,
    ) -> Result<NavigationData, StError> {
        debug!(
            "client.navigate_ship ship_symbol={} waypoint_symbol={}",
            ship_symbol, waypoint_symbol
        );
        let path = format!("/my/ships/{ship_symbol}/navigate");
        let body = json!({ "waypointSymbol": waypoint_symbol });
        let resp: Data<NavigationData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], Some(&body))
            .await?;
        Ok(resp.data)
    }

    /// POST /my/ships/{ship}/extract — extract resources at the current
    /// waypoint. Puts the reactor on cooldown.
    pub async fn extract_resources(
        &self,
        token: &str,
        ship_symbol: &str,
    ) -> Result<ExtractionData, StError> {
        debug!("client.extract_resources ship_symbol={}", ship_symbol);
        let path = format!("/my/ships/{ship_symbol}/extract");
        let resp: Data<ExtractionData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], Some(&json!({})))
            .await?;
        Ok(resp.data)
    }

    /// POST /my/ships/{ship}/extract with a survey targeting specific
    /// deposits. Body: `{"survey": {...}}`.
    pub async fn extract_resources_with_survey(
        &self,
        token: &str,
        ship_symbol: &str,
        survey: &Survey,
    ) -> Result<ExtractionData, StError> {
        debug!(
            "client.extract_resources_with_survey ship_symbol={} signature={}",
            ship_symbol, survey.signature
        );
        let path = format!("/my/ships/{ship_symbol}/extract");
        let body = json!({ "survey": survey });
        let resp: Data<ExtractionData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], Some(&body))
            .await?;
        Ok(resp.data)
    }

    /// POST /my/ships/{ship}/sell — sell cargo at the docked market.
    pub async fn sell_cargo(
        &self,
        token: &str,
        ship_symbol: &str,
        req: &SellCargoRequest,
    ) -> Result<SellCargoData, StError> {
        debug!(
            "client.sell_cargo ship_symbol={} symbol={} units={}",
            ship_symbol, req.symbol, req.units
        );
        let path = format!("/my/ships/{ship_symbol}/sell");
        let body = serde_json::to_value(req)?;
        let resp: Data<SellCargoData> = self
            .api
            .call(Method::POST, &path, Some(token), &[], Some(&body))
            .await?;
        Ok(resp.data)
    }

    // -----------------------------------------------------------------------
    // Systems
    // -----------------------------------------------------------------------

    /// GET /systems — all systems, paginated.
    pub async fn list_systems(&self, token: &str, page: PageQuery) -> Result<Paged<System>, StError> {
        debug!("client.list_systems limit={} page={}", page.limit, page.page);
        self.api
            .call(Method::GET, "/systems", Some(token), &page.params(), None)
            .await
    }

    /// GET /systems/{system}.
    pub async fn get_system(&self, token: &str, system_symbol: &str) -> Result<System, StError> {
        debug!("client.get_system system_symbol={}", system_symbol);
        let path = format!("/systems/{system_symbol}");
        let resp: Data<System> = self
            .api
            .call(Method::GET, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// GET /systems/{system}/waypoints — waypoints in a system, paginated.
    pub async fn list_waypoints(
        &self,
        token: &str,
        system_symbol: &str,
        page: PageQuery,
    ) -> Result<Paged<Waypoint>, StError> {
        debug!(
            "client.list_waypoints system_symbol={} limit={} page={}",
            system_symbol, page.limit, page.page
        );
        let path = format!("/systems/{system_symbol}/waypoints");
        self.api
            .call(Method::GET, &path, Some(token), &page.params(), None)
            .await
    }

    /// GET /systems/{system}/waypoints/{waypoint}.
    pub async fn get_waypoint(
        &self,
        token: &str,
        system_symbol: &str,
        waypoint_symbol: &str,
    ) -> Result<Waypoint, StError> {
        debug!(
            "client.get_waypoint system_symbol={} waypoint_symbol={}",
            system_symbol, waypoint_symbol
        );
        let path = format!("/systems/{system_symbol}/waypoints/{waypoint_symbol}");
        let resp: Data<Waypoint> = self
            .api
            .call(Method::GET, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }

    /// GET /systems/{system}/waypoints/{waypoint}/market.
    ///
    /// Trade-good prices and the transaction log appear only while one of
    /// the caller's ships is at the waypoint.
    pub async fn get_market(
        &self,
        token: &str,
        system_symbol: &str,
        waypoint_symbol: &str,
    ) -> Result<Market, StError> {
        debug!(
            "client.get_market system_symbol={} waypoint_symbol={}",
            system_symbol, waypoint_symbol
        );
        let path = format!("/systems/{system_symbol}/waypoints/{waypoint_symbol}/market");
        let resp: Data<Market> = self
            .api
            .call(Method::GET, &path, Some(token), &[], None)
            .await?;
        Ok(resp.data)
    }
}
