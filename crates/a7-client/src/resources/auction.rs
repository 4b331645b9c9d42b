//! Auction simulation endpoints.
//!
//! Retrieves historical auction states for T7 exchanges and simulates the
//! outcome of opening/intraday/closing auctions with an additional order.
//! Securities are addressable either by market segment and security ID or
//! directly by trading symbol.

use serde_json::Value;

use crate::error::A7Error;
use crate::transport::HttpTransport;

/// Auction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionType {
    /// Opening auction.
    Opening,
    /// Intraday auction.
    Intraday,
    /// Closing auction.
    Closing,
}

impl AuctionType {
    /// Wire value used in the request path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Intraday => "intraday",
            Self::Closing => "closing",
        }
    }
}

/// Listing mode for the segment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentMode {
    /// Market segment IDs (default).
    #[default]
    Segment,
    /// Trading symbols.
    Symbol,
}

impl SegmentMode {
    /// Wire value of the `mode` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Symbol => "symbol",
        }
    }
}

/// Order side for a simulated order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

impl Side {
    /// Wire value of the `side` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

/// Additional order injected into an auction simulation.
///
/// Only fields that are set are sent; without any the endpoint returns
/// historical auction data alone.
#[derive(Debug, Clone, Default)]
pub struct SimulationOrder {
    /// Order side.
    pub side: Option<Side>,
    /// Limit price.
    pub px: Option<f64>,
    /// Quantity.
    pub qty: Option<i64>,
    /// Order priority.
    pub prio: Option<i64>,
}

impl SimulationOrder {
    /// Set the order side.
    #[must_use]
    pub const fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the limit price.
    #[must_use]
    pub const fn with_px(mut self, px: f64) -> Self {
        self.px = Some(px);
        self
    }

    /// Set the quantity.
    #[must_use]
    pub const fn with_qty(mut self, qty: i64) -> Self {
        self.qty = Some(qty);
        self
    }

    /// Set the order priority.
    #[must_use]
    pub const fn with_prio(mut self, prio: i64) -> Self {
        self.prio = Some(prio);
        self
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(side) = self.side {
            params.push(("side", side.as_str().to_string()));
        }
        if let Some(px) = self.px {
            params.push(("px", px.to_string()));
        }
        if let Some(qty) = self.qty {
            params.push(("qty", qty.to_string()));
        }
        if let Some(prio) = self.prio {
            params.push(("prio", prio.to_string()));
        }
        params
    }
}

/// Auction data and simulations for T7 exchanges.
#[derive(Debug, Clone, Copy)]
pub struct AuctionClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> AuctionClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// List exchanges available for auction simulations.
    pub async fn exchanges(&self) -> Result<Vec<String>, A7Error> {
        self.transport.get_json("/v1/simulation/auction/", &[]).await
    }

    /// List available trading days (YYYYMMDD) for an exchange.
    pub async fn dates(&self, exchange: &str) -> Result<Vec<u32>, A7Error> {
        self.transport
            .get_json(&format!("/v1/simulation/auction/{exchange}/"), &[])
            .await
    }

    /// List market segments or trading symbols for a trading day.
    pub async fn market_segments(
        &self,
        exchange: &str,
        date: u32,
        mode: SegmentMode,
    ) -> Result<Vec<String>, A7Error> {
        self.transport
            .get_json(
                &format!("/v1/simulation/auction/{exchange}/{date}/"),
                &[("mode", mode.as_str().to_string())],
            )
            .await
    }

    /// List security IDs for a market segment.
    pub async fn securities(
        &self,
        exchange: &str,
        date: u32,
        market_segment_id: i64,
    ) -> Result<Vec<i64>, A7Error> {
        self.transport
            .get_json(
                &format!("/v1/simulation/auction/{exchange}/{date}/{market_segment_id}/"),
                &[],
            )
            .await
    }

    /// Security reference data by segment and security ID.
    pub async fn security(
        &self,
        exchange: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(
                &format!(
                    "/v1/simulation/auction/{exchange}/{date}/{market_segment_id}/{security_id}"
                ),
                &[],
            )
            .await
    }

    /// Security reference data by trading symbol.
    pub async fn security_by_symbol(
        &self,
        exchange: &str,
        date: u32,
        symbol: &str,
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(&format!("/v1/simulation/auction/{exchange}/{date}/{symbol}"), &[])
            .await
    }

    /// Available auction types for a security.
    pub async fn auction_types(
        &self,
        exchange: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
    ) -> Result<Vec<String>, A7Error> {
        self.transport
            .get_json(
                &format!(
                    "/v1/simulation/auction/{exchange}/{date}/{market_segment_id}/{security_id}/"
                ),
                &[],
            )
            .await
    }

    /// Available auction types for a security by trading symbol.
    pub async fn auction_types_by_symbol(
        &self,
        exchange: &str,
        date: u32,
        symbol: &str,
    ) -> Result<Vec<String>, A7Error> {
        self.transport
            .get_json(&format!("/v1/simulation/auction/{exchange}/{date}/{symbol}/"), &[])
            .await
    }

    /// Historical auction data, optionally simulating an additional order.
    pub async fn auction(
        &self,
        exchange: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        auction_type: AuctionType,
        order: Option<&SimulationOrder>,
    ) -> Result<Value, A7Error> {
        let path = format!(
            "/v1/simulation/auction/{exchange}/{date}/{market_segment_id}/{security_id}/{}",
            auction_type.as_str()
        );
        let params = order.map(SimulationOrder::to_params).unwrap_or_default();
        self.transport.get_json(&path, &params).await
    }

    /// Historical auction data by trading symbol, optionally simulating an
    /// additional order.
    pub async fn auction_by_symbol(
        &self,
        exchange: &str,
        date: u32,
        symbol: &str,
        auction_type: AuctionType,
        order: Option<&SimulationOrder>,
    ) -> Result<Value, A7Error> {
        let path = format!(
            "/v1/simulation/auction/{exchange}/{date}/{symbol}/{}",
            auction_type.as_str()
        );
        let params = order.map(SimulationOrder::to_params).unwrap_or_default();
        self.transport.get_json(&path, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_order_sends_no_params() {
        assert!(SimulationOrder::default().to_params().is_empty());
    }

    #[test]
    fn full_order_sends_all_params() {
        let params = SimulationOrder::default()
            .with_side(Side::Buy)
            .with_px(100.5)
            .with_qty(1000)
            .with_prio(1)
            .to_params();
        assert_eq!(params[0], ("side", "buy".to_string()));
        assert!(params.contains(&("px", "100.5".to_string())));
        assert!(params.contains(&("qty", "1000".to_string())));
        assert!(params.contains(&("prio", "1".to_string())));
    }

    #[test]
    fn auction_type_wire_values() {
        assert_eq!(AuctionType::Opening.as_str(), "opening");
        assert_eq!(AuctionType::Intraday.as_str(), "intraday");
        assert_eq!(AuctionType::Closing.as_str(), "closing");
    }

    #[test]
    fn segment_mode_wire_values() {
        assert_eq!(SegmentMode::Segment.as_str(), "segment");
        assert_eq!(SegmentMode::Symbol.as_str(), "symbol");
    }
}
