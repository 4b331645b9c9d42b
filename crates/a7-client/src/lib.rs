// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Client for the A7 analytics platform REST API.
//!
//! The platform exposes historical market data and analytics over HTTP:
//! reference data for T7 and CME markets, granular order book message
//! drill-down (EOBI/MDP), constructed order books, server-side algorithm
//! execution, auction simulations, customer datasets with precalculation
//! jobs, and market insights.
//!
//! [`A7Client`] is the entry point. It owns one configured connection pool
//! and hands out one stateless method group per resource family; every
//! method issues exactly one HTTP request and either returns the decoded
//! response or one [`A7Error`]. There are no retries and no caching.
//!
//! # Example
//!
//! ```no_run
//! use a7_client::{A7Client, A7Config};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = A7Client::with_config(
//!     A7Config::new("YOUR_A7_TOKEN").with_verify_tls(true),
//! )?;
//!
//! let markets = client.eobi().markets().await?;
//! let algos = client.algo().algorithms("dbag", Default::default()).await?;
//! println!("{markets:?} {algos:?}");
//!
//! client.close();
//! # Ok(())
//! # }
//! ```
//!
//! # Proxies and TLS
//!
//! Ambient proxy environment variables are honored by the underlying HTTP
//! client unless the `NO_PROXY`/`no_proxy` pattern list matches the base
//! URL, in which case the client bypasses any proxy. The environment is
//! read once, at construction. TLS verification can be disabled for dev
//! environments with self-signed certificates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod proxy;
mod transport;

/// Client configuration.
pub mod config;

/// Error taxonomy.
pub mod error;

/// The top-level client.
pub mod client;

/// Per-resource method groups.
pub mod resources;

pub use client::A7Client;
pub use config::{A7Config, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::A7Error;
pub use resources::DetailMode;
pub use resources::auction::{AuctionType, SegmentMode, Side, SimulationOrder};
pub use resources::dataset::DatasetQuery;
pub use resources::eobi::{ApplSeqQuery, TransactTimeQuery};
pub use resources::insights::{LatencyRegime, PorQuery, RollComparison, TargetAction};
pub use resources::mdp::SendingTimeQuery;
pub use resources::orderbook::{BookMode, OrderBookQuery};
pub use resources::precalc::ResultMode;
