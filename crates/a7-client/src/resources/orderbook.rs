//! Constructed order book endpoints.

use serde_json::Value;

use crate::error::A7Error;
use crate::transport::HttpTransport;

/// Order book representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookMode {
    /// Price levels aggregated per side (default).
    #[default]
    Aggregated,
    /// Every individual order.
    Complete,
}

impl BookMode {
    /// Wire value of the `orderbook` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aggregated => "aggregated",
            Self::Complete => "complete",
        }
    }
}

/// Parameters for order book retrieval.
///
/// `limit`, `levels`, `book`, `trades` and `indicatives` are always sent
/// with their defaults when unset; `from` and `to` only when given. With
/// `limit == 1` the endpoint answers with a single order book object,
/// otherwise with a list.
#[derive(Debug, Clone)]
pub struct OrderBookQuery {
    /// Starting timestamp (nanoseconds since 1970). When absent the first
    /// order book of the day is returned.
    pub from: Option<String>,
    /// Ending timestamp (nanoseconds since 1970).
    pub to: Option<String>,
    /// Maximum number of order books to return (1-10000).
    pub limit: u32,
    /// Order book depth.
    pub levels: u32,
    /// Aggregated price levels or the complete book.
    pub book: BookMode,
    /// Include trades.
    pub trades: bool,
    /// Include indicative auction uncrossings.
    pub indicatives: bool,
}

impl Default for OrderBookQuery {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            limit: 1,
            levels: 10,
            book: BookMode::default(),
            trades: false,
            indicatives: false,
        }
    }
}

impl OrderBookQuery {
    /// Set the starting timestamp (nanoseconds since 1970).
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the ending timestamp (nanoseconds since 1970).
    #[must_use]
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set the maximum number of order books to return.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the order book depth.
    #[must_use]
    pub const fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Choose between aggregated levels and the complete book.
    #[must_use]
    pub const fn with_book(mut self, book: BookMode) -> Self {
        self.book = book;
        self
    }

    /// Include trades in the response.
    #[must_use]
    pub const fn with_trades(mut self, trades: bool) -> Self {
        self.trades = trades;
        self
    }

    /// Include indicative auction uncrossings (T7 books only).
    #[must_use]
    pub const fn with_indicatives(mut self, indicatives: bool) -> Self {
        self.indicatives = indicatives;
        self
    }

    fn to_params(&self, indicatives: bool) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("levels", self.levels.to_string()),
            ("orderbook", self.book.as_str().to_string()),
            ("trades", self.trades.to_string()),
        ];
        if indicatives {
            params.push(("indicatives", self.indicatives.to_string()));
        }
        if let Some(ref from) = self.from {
            params.push(("from", from.clone()));
        }
        if let Some(ref to) = self.to {
            params.push(("to", to.clone()));
        }
        params
    }
}

/// Order books constructed from EOBI and MDP data.
#[derive(Debug, Clone, Copy)]
pub struct OrderBookClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> OrderBookClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Order book(s) for T7 markets (XEUR, XETR).
    pub async fn t7(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        query: &OrderBookQuery,
    ) -> Result<Value, A7Error> {
        let path = format!("/v1/ob/{market}/{date}/{market_segment_id}/{security_id}");
        self.transport.get_json(&path, &query.to_params(true)).await
    }

    /// Order book(s) for CME markets.
    ///
    /// The `indicatives` flag does not apply to CME books and is not sent.
    pub async fn cme(
        &self,
        exchange: &str,
        date: u32,
        asset: &str,
        security_id: i64,
        query: &OrderBookQuery,
    ) -> Result<Value, A7Error> {
        let path = format!("/v1/ob/{exchange}/{date}/{asset}/{security_id}");
        self.transport.get_json(&path, &query.to_params(false)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_always_sent() {
        let params = OrderBookQuery::default().to_params(true);
        assert!(params.contains(&("limit", "1".to_string())));
        assert!(params.contains(&("levels", "10".to_string())));
        assert!(params.contains(&("orderbook", "aggregated".to_string())));
        assert!(params.contains(&("trades", "false".to_string())));
        assert!(params.contains(&("indicatives", "false".to_string())));
    }

    #[test]
    fn cme_params_omit_indicatives() {
        let params = OrderBookQuery::default().to_params(false);
        assert!(!params.iter().any(|(name, _)| *name == "indicatives"));
    }

    #[test]
    fn time_range_only_sent_when_set() {
        let bare = OrderBookQuery::default().to_params(true);
        assert!(!bare.iter().any(|(name, _)| *name == "from"));

        let ranged = OrderBookQuery::default()
            .with_from("1691099685504424493")
            .with_to("1691127000575050335")
            .with_limit(10)
            .to_params(true);
        assert!(ranged.contains(&("from", "1691099685504424493".to_string())));
        assert!(ranged.contains(&("to", "1691127000575050335".to_string())));
        assert!(ranged.contains(&("limit", "10".to_string())));
    }

    #[test]
    fn complete_book_wire_value() {
        let params = OrderBookQuery::default()
            .with_book(BookMode::Complete)
            .to_params(true);
        assert!(params.contains(&("orderbook", "complete".to_string())));
    }
}
