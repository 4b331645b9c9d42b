//! Enhanced Order Book Interface (EOBI) endpoints.
//!
//! EOBI exposes the most granular un-normalized historical order book data
//! for T7 markets as a drill-down hierarchy: market, trading day, market
//! segment, security, transaction time, application sequence number,
//! message sequence number. Each level is listable; the leaf is a single
//! message.

use serde::Deserialize;
use serde_json::Value;

use crate::error::A7Error;
use crate::transport::HttpTransport;

/// Filters for the transaction-time listing.
#[derive(Debug, Clone, Default)]
pub struct TransactTimeQuery {
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Starting timestamp (nanoseconds since 1970).
    pub from: Option<String>,
    /// Ending timestamp (nanoseconds since 1970).
    pub to: Option<String>,
    /// Application sequence number filter.
    pub appl_seq_num_filter: Option<String>,
}

impl TransactTimeQuery {
    /// Limit the number of results.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

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

    /// Only return times whose packets match this application sequence
    /// number filter.
    #[must_use]
    pub fn with_appl_seq_num_filter(mut self, filter: impl Into<String>) -> Self {
        self.appl_seq_num_filter = Some(filter.into());
        self
    }

    fn to_params(&self, mode: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("mode", mode.to_string())];
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(ref from) = self.from {
            params.push(("from", from.clone()));
        }
        if let Some(ref to) = self.to {
            params.push(("to", to.clone()));
        }
        if let Some(ref filter) = self.appl_seq_num_filter {
            params.push(("applSeqNumFilter", filter.clone()));
        }
        params
    }
}

/// Filters for the application-sequence-number level.
#[derive(Debug, Clone, Default)]
pub struct ApplSeqQuery {
    /// Message sequence number filter.
    pub msg_seq_num_filter: Option<String>,
    /// Template ID filter.
    pub template_id_filter: Option<String>,
}

impl ApplSeqQuery {
    /// Only return entries matching this message sequence number filter.
    #[must_use]
    pub fn with_msg_seq_num_filter(mut self, filter: impl Into<String>) -> Self {
        self.msg_seq_num_filter = Some(filter.into());
        self
    }

    /// Only return entries matching this template ID filter.
    #[must_use]
    pub fn with_template_id_filter(mut self, filter: impl Into<String>) -> Self {
        self.template_id_filter = Some(filter.into());
        self
    }

    fn to_params(&self, mode: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("mode", mode.to_string())];
        if let Some(ref filter) = self.msg_seq_num_filter {
            params.push(("msgSeqNumFilter", filter.clone()));
        }
        if let Some(ref filter) = self.template_id_filter {
            params.push(("templateIdFilter", filter.clone()));
        }
        params
    }
}

#[derive(Debug, Deserialize)]
struct MarketsResponse {
    #[serde(rename = "MarketIDs", default)]
    market_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DatesResponse {
    #[serde(rename = "Dates", default)]
    dates: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct MarketSegmentsResponse {
    #[serde(rename = "MarketSegmentIDs", default)]
    market_segment_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct SecuritiesResponse {
    #[serde(rename = "SecurityIDs", default)]
    security_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct TransactTimesResponse {
    #[serde(rename = "TransactTimes", default)]
    transact_times: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApplSeqNumsResponse {
    #[serde(rename = "ApplSeqNums", default)]
    appl_seq_nums: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct PacketsResponse {
    #[serde(rename = "Packets", default)]
    packets: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct MsgSeqNumsResponse {
    #[serde(rename = "MsgSeqNums", default)]
    msg_seq_nums: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(rename = "Messages", default)]
    messages: Vec<Value>,
}

/// EOBI market data message drill-down for T7 markets.
#[derive(Debug, Clone, Copy)]
pub struct EobiClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> EobiClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// List available markets, e.g. `["XEUR", "XETR"]`.
    pub async fn markets(&self) -> Result<Vec<String>, A7Error> {
        let response: MarketsResponse = self.transport.get_json("/v1/eobi", &[]).await?;
        Ok(response.market_ids)
    }

    /// List available trading days (YYYYMMDD) for a market.
    pub async fn dates(&self, market: &str) -> Result<Vec<u32>, A7Error> {
        let response: DatesResponse = self
            .transport
            .get_json(&format!("/v1/eobi/{market}"), &[])
            .await?;
        Ok(response.dates)
    }

    /// List market segments (products) for a market and trading day.
    pub async fn market_segments(&self, market: &str, date: u32) -> Result<Vec<i64>, A7Error> {
        let response: MarketSegmentsResponse = self
            .transport
            .get_json(&format!("/v1/eobi/{market}/{date}"), &[])
            .await?;
        Ok(response.market_segment_ids)
    }

    /// List securities for a market segment.
    pub async fn securities(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
    ) -> Result<Vec<i64>, A7Error> {
        let response: SecuritiesResponse = self
            .transport
            .get_json(&format!("/v1/eobi/{market}/{date}/{market_segment_id}"), &[])
            .await?;
        Ok(response.security_ids)
    }

    /// List transaction times (nanoseconds since 1970) for a security.
    pub async fn transact_times(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        query: &TransactTimeQuery,
    ) -> Result<Vec<String>, A7Error> {
        let path = format!("/v1/eobi/{market}/{date}/{market_segment_id}/{security_id}");
        let response: TransactTimesResponse = self
            .transport
            .get_json(&path, &query.to_params("reference"))
            .await?;
        Ok(response.transact_times)
    }

    /// List application sequence numbers at a transaction time.
    pub async fn appl_seq_nums(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        transact_time: &str,
        query: &ApplSeqQuery,
    ) -> Result<Vec<u64>, A7Error> {
        let path =
            format!("/v1/eobi/{market}/{date}/{market_segment_id}/{security_id}/{transact_time}");
        let response: ApplSeqNumsResponse = self
            .transport
            .get_json(&path, &query.to_params("reference"))
            .await?;
        Ok(response.appl_seq_nums)
    }

    /// Full packet details at a transaction time.
    ///
    /// Same endpoint as [`appl_seq_nums`](Self::appl_seq_nums) but queried
    /// in detailed mode.
    pub async fn appl_seq_packets(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        transact_time: &str,
        query: &ApplSeqQuery,
    ) -> Result<Vec<Value>, A7Error> {
        let path =
            format!("/v1/eobi/{market}/{date}/{market_segment_id}/{security_id}/{transact_time}");
        let response: PacketsResponse = self
            .transport
            .get_json(&path, &query.to_params("detailed"))
            .await?;
        Ok(response.packets)
    }

    /// List message sequence numbers within an application sequence number.
    pub async fn msg_seq_nums(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        transact_time: &str,
        appl_seq_num: u64,
        template_id_filter: Option<&str>,
    ) -> Result<Vec<u64>, A7Error> {
        let path = format!(
            "/v1/eobi/{market}/{date}/{market_segment_id}/{security_id}/{transact_time}/{appl_seq_num}"
        );
        let response: MsgSeqNumsResponse = self
            .transport
            .get_json(&path, &Self::mode_params("reference", template_id_filter))
            .await?;
        Ok(response.msg_seq_nums)
    }

    /// Full message details within an application sequence number.
    ///
    /// Same endpoint as [`msg_seq_nums`](Self::msg_seq_nums) but queried in
    /// detailed mode.
    pub async fn messages(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        transact_time: &str,
        appl_seq_num: u64,
        template_id_filter: Option<&str>,
    ) -> Result<Vec<Value>, A7Error> {
        let path = format!(
            "/v1/eobi/{market}/{date}/{market_segment_id}/{security_id}/{transact_time}/{appl_seq_num}"
        );
        let response: MessagesResponse = self
            .transport
            .get_json(&path, &Self::mode_params("detailed", template_id_filter))
            .await?;
        Ok(response.messages)
    }

    /// A single EOBI message addressed by its full identifier path.
    pub async fn message(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        transact_time: &str,
        appl_seq_num: u64,
        msg_seq_num: u64,
    ) -> Result<Value, A7Error> {
        let path = format!(
            "/v1/eobi/{market}/{date}/{market_segment_id}/{security_id}/{transact_time}/{appl_seq_num}/{msg_seq_num}"
        );
        self.transport.get_json(&path, &[]).await
    }

    fn mode_params(mode: &str, template_id_filter: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = vec![("mode", mode.to_string())];
        if let Some(filter) = template_id_filter {
            params.push(("templateIdFilter", filter.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transact_time_query_defaults_to_reference_mode_only() {
        let params = TransactTimeQuery::default().to_params("reference");
        assert_eq!(params, vec![("mode", "reference".to_string())]);
    }

    #[test]
    fn transact_time_query_builders_set_all_filters() {
        let params = TransactTimeQuery::default()
            .with_limit(15)
            .with_from("1691099685504424493")
            .with_to("1691127000575050335")
            .with_appl_seq_num_filter("42")
            .to_params("reference");
        assert!(params.contains(&("limit", "15".to_string())));
        assert!(params.contains(&("from", "1691099685504424493".to_string())));
        assert!(params.contains(&("to", "1691127000575050335".to_string())));
        assert!(params.contains(&("applSeqNumFilter", "42".to_string())));
    }

    #[test]
    fn appl_seq_query_carries_filters() {
        let params = ApplSeqQuery::default()
            .with_msg_seq_num_filter("7")
            .with_template_id_filter("13300")
            .to_params("detailed");
        assert_eq!(params[0], ("mode", "detailed".to_string()));
        assert!(params.contains(&("msgSeqNumFilter", "7".to_string())));
        assert!(params.contains(&("templateIdFilter", "13300".to_string())));
    }
}
