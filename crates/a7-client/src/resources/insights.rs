//! Market data insights endpoints.
//!
//! Two benchmark families: Pace of the Roll (open-interest ratios for roll
//! timing) and latency histograms (market participants' reaction times
//! between a trigger product update and target product requests).

use serde::Deserialize;
use serde_json::Value;

use crate::error::A7Error;
use crate::transport::HttpTransport;

/// Comparison method for previous rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollComparison {
    /// Consecutive rolls (Jun, Mar, Dec, ...), the default.
    #[default]
    Consecutive,
    /// Same expiry month across years (Sep, Sep, Sep, ...).
    SameMonth,
}

impl RollComparison {
    /// Wire value of the `comp` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Consecutive => "c",
            Self::SameMonth => "s",
        }
    }
}

/// Parameters for Pace of the Roll details; all are always sent.
#[derive(Debug, Clone)]
pub struct PorQuery {
    /// Days till expiry including the expiry day (1-31).
    pub days: u32,
    /// Maximum number of previous rolls for quantile calculation.
    pub n: u32,
    /// Comparison method for previous rolls.
    pub comp: RollComparison,
}

impl Default for PorQuery {
    fn default() -> Self {
        Self {
            days: 10,
            n: 20,
            comp: RollComparison::default(),
        }
    }
}

impl PorQuery {
    /// Set the number of days till expiry.
    #[must_use]
    pub const fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Set the number of previous rolls used for quantiles.
    #[must_use]
    pub const fn with_n(mut self, n: u32) -> Self {
        self.n = n;
        self
    }

    /// Set the comparison method.
    #[must_use]
    pub const fn with_comp(mut self, comp: RollComparison) -> Self {
        self.comp = comp;
        self
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("days", self.days.to_string()),
            ("n", self.n.to_string()),
            ("comp", self.comp.as_str().to_string()),
        ]
    }
}

/// Latency interval regime of a histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyRegime {
    /// Up to 500 ns wire-to-wire latency at 1 ns resolution.
    Fast,
    /// Up to 50 us wire-to-wire latency at 100 ns resolution.
    Slow,
}

impl LatencyRegime {
    /// Wire value used in the request path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Slow => "slow",
        }
    }
}

/// Type of target action measured by a latency histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetAction {
    /// New order.
    New,
    /// Order modification.
    Modify,
    /// Order deletion.
    Delete,
}

impl TargetAction {
    /// Wire value used in the request path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Modify => "modify",
            Self::Delete => "delete",
        }
    }
}

#[derive(Debug, Deserialize)]
struct MarketSegmentsResponse {
    #[serde(rename = "MarketSegments", default)]
    market_segments: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RollsResponse {
    #[serde(rename = "Rolls", default)]
    rolls: Vec<u32>,
}

/// Pre-defined market data benchmarks.
#[derive(Debug, Clone, Copy)]
pub struct InsightsClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> InsightsClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// List market segments available for Pace of the Roll analysis.
    pub async fn por_market_segments(&self) -> Result<Vec<String>, A7Error> {
        let response: MarketSegmentsResponse =
            self.transport.get_json("/v1/insights/por", &[]).await?;
        Ok(response.market_segments)
    }

    /// List available rolls (YYYYMM) for a market segment.
    pub async fn por_rolls(&self, market_segment: &str) -> Result<Vec<u32>, A7Error> {
        let response: RollsResponse = self
            .transport
            .get_json(&format!("/v1/insights/por/{market_segment}"), &[])
            .await?;
        Ok(response.rolls)
    }

    /// Pace of the Roll details for one roll: the current and previous
    /// rolls' open-interest ratios plus historical quantiles.
    pub async fn por_data(
        &self,
        market_segment: &str,
        roll: u32,
        query: &PorQuery,
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(
                &format!("/v1/insights/por/{market_segment}/{roll}"),
                &query.to_params(),
            )
            .await
    }

    /// Latency histogram of reaction times between a trigger product update
    /// and target product requests.
    pub async fn latency_histogram(
        &self,
        date: u32,
        trigger: &str,
        target: &str,
        regime: LatencyRegime,
        action: TargetAction,
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(
                &Self::latency_path(date, trigger, target, regime, action),
                &[("format", "json".to_string())],
            )
            .await
    }

    /// Latency histogram in CSV form, returned as raw text.
    pub async fn latency_histogram_csv(
        &self,
        date: u32,
        trigger: &str,
        target: &str,
        regime: LatencyRegime,
        action: TargetAction,
    ) -> Result<String, A7Error> {
        self.transport
            .get_text(
                &Self::latency_path(date, trigger, target, regime, action),
                &[("format", "csv".to_string())],
            )
            .await
    }

    fn latency_path(
        date: u32,
        trigger: &str,
        target: &str,
        regime: LatencyRegime,
        action: TargetAction,
    ) -> String {
        format!(
            "/v1/insights/latencies/{date}/{trigger}/{target}/{}/{}",
            regime.as_str(),
            action.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn por_query_defaults() {
        let params = PorQuery::default().to_params();
        assert_eq!(
            params,
            vec![
                ("days", "10".to_string()),
                ("n", "20".to_string()),
                ("comp", "c".to_string()),
            ]
        );
    }

    #[test]
    fn por_query_builders() {
        let params = PorQuery::default()
            .with_days(15)
            .with_n(30)
            .with_comp(RollComparison::SameMonth)
            .to_params();
        assert!(params.contains(&("days", "15".to_string())));
        assert!(params.contains(&("n", "30".to_string())));
        assert!(params.contains(&("comp", "s".to_string())));
    }

    #[test]
    fn latency_path_segments_in_order() {
        let path = InsightsClient::latency_path(
            20210315,
            "FDAX",
            "FGBL",
            LatencyRegime::Fast,
            TargetAction::New,
        );
        assert_eq!(path, "/v1/insights/latencies/20210315/FDAX/FGBL/fast/new");
    }
}
