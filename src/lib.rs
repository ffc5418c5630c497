//! SpaceTraders SDK for Rust.
//!
//! A typed client for the SpaceTraders API, a multiplayer space-trading
//! game played entirely through REST. Every endpoint is a straight line:
//! build the request, attach bearer auth, decode the JSON envelope,
//! return a typed struct.
//!
//! # What This SDK Provides
//!
//! - Typed endpoint methods across five domains: [`StClient`]
//! - The low-level authenticated invoker: [`api::StApi`]
//! - One canonical schema set for agents, contracts, factions, ships,
//!   systems, waypoints, and markets
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spacetraders_sdk::{ApiConfig, PageQuery, StClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), spacetraders_sdk::StError> {
//!     let client = StClient::new(ApiConfig::default());
//!     let token = std::env::var("SPACETRADERS_TOKEN").unwrap_or_default();
//!
//!     let agent = client.get_agent(&token).await?;
//!     println!("{} has {} credits", agent.symbol, agent.credits);
//!
//!     let ships = client.list_ships(&token, PageQuery::new(20, 1)).await?;
//!     println!("{} ships of {} total", ships.data.len(), ships.meta.total);
//!     Ok(())
//! }
//! ```
//!
//! # Tokens
//!
//! [`StClient::register`] is the one unauthenticated call; its response
//! carries the bearer token for the new agent. Every other method takes
//! the token per call — the SDK does not store, refresh, or manage
//! credentials.
//!
//! # Pagination
//!
//! List endpoints take a [`PageQuery`]. A zero `limit` or `page` is unset
//! and omitted from the request; upstream then applies its defaults. List
//! responses come back as [`Paged`] with the upstream
//! `meta: {total, page, limit}` block.
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/)
//! facade for every API call. Configure any compatible logger in your
//! binary and set `RUST_LOG=debug` to inspect request flow.
//!
//! # Errors
//!
//! All fallible operations return [`StError`]:
//!
//! - [`StError::Transport`] — the call never completed (DNS, connect,
//!   timeout)
//! - [`StError::Api`] — upstream rejected the call; status code and raw
//!   error payload attached
//! - [`StError::Decode`] — the 2xx body did not match the expected shape
//!
//! Nothing is retried internally. The game API enforces cooldowns and
//! rate limits; whether to retry, wait, or surface the failure is the
//! caller's decision. See [`guides::error_handling`].
//!
//! # Guides
//!
//! - [`guides::error_handling`] — error variants and recovery patterns
//! - [`guides::pagination`] — walking list endpoints with `PageQuery`
pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod guides;
pub mod models;

// Re-export primary types for convenience.
pub use api::{PageQuery, StApi};
pub use client::StClient;
pub use config::{ApiConfig, API_BASE};
pub use errors::StError;
pub use models::*;
