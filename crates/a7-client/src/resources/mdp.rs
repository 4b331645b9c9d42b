//! Market Data Platform (MDP) endpoints.
//!
//! Mirrors the EOBI drill-down shape for CME markets: exchange, trading
//! day, asset, security, sending time.

use serde::Deserialize;
use serde_json::Value;

use crate::error::A7Error;
use crate::transport::HttpTransport;

/// Filters for the sending-time listing.
#[derive(Debug, Clone, Default)]
pub struct SendingTimeQuery {
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Starting timestamp filter.
    pub from: Option<String>,
    /// Ending timestamp filter.
    pub to: Option<String>,
    /// Message sequence number filter.
    pub msg_seq_num: Option<u64>,
    /// Template ID filter.
    pub template_id: Option<u32>,
}

impl SendingTimeQuery {
    /// Limit the number of results.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the starting timestamp filter.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the ending timestamp filter.
    #[must_use]
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Only return entries with this message sequence number.
    #[must_use]
    pub const fn with_msg_seq_num(mut self, msg_seq_num: u64) -> Self {
        self.msg_seq_num = Some(msg_seq_num);
        self
    }

    /// Only return entries with this template ID.
    #[must_use]
    pub const fn with_template_id(mut self, template_id: u32) -> Self {
        self.template_id = Some(template_id);
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
        if let Some(msg_seq_num) = self.msg_seq_num {
            params.push(("msgSeqNum", msg_seq_num.to_string()));
        }
        if let Some(template_id) = self.template_id {
            params.push(("templateID", template_id.to_string()));
        }
        params
    }
}

#[derive(Debug, Deserialize)]
struct ExchangesResponse {
    #[serde(rename = "Exchanges", default)]
    exchanges: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DatesResponse {
    #[serde(rename = "Dates", default)]
    dates: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct AssetsResponse {
    #[serde(rename = "Assets", default)]
    assets: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SecuritiesResponse {
    #[serde(rename = "SecurityIDs", default)]
    security_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct SendingTimesResponse {
    #[serde(rename = "SendingTimes", default)]
    sending_times: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PacketsResponse {
    #[serde(rename = "Packets", default)]
    packets: Vec<Value>,
}

/// MDP market data messages for CME markets.
#[derive(Debug, Clone, Copy)]
pub struct MdpClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> MdpClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// List available exchanges, e.g. `["XCME", "NYUM", "XCBT"]`.
    pub async fn exchanges(&self) -> Result<Vec<String>, A7Error> {
        let response: ExchangesResponse = self.transport.get_json("/v1/mdp", &[]).await?;
        Ok(response.exchanges)
    }

    /// List available trading days (YYYYMMDD) for an exchange.
    pub async fn dates(&self, exchange: &str) -> Result<Vec<u32>, A7Error> {
        let response: DatesResponse = self
            .transport
            .get_json(&format!("/v1/mdp/{exchange}"), &[])
            .await?;
        Ok(response.dates)
    }

    /// List assets for an exchange and trading day.
    pub async fn assets(&self, exchange: &str, date: u32) -> Result<Vec<String>, A7Error> {
        let response: AssetsResponse = self
            .transport
            .get_json(&format!("/v1/mdp/{exchange}/{date}"), &[])
            .await?;
        Ok(response.assets)
    }

    /// List security IDs for an asset.
    pub async fn securities(
        &self,
        exchange: &str,
        date: u32,
        asset: &str,
    ) -> Result<Vec<i64>, A7Error> {
        let response: SecuritiesResponse = self
            .transport
            .get_json(&format!("/v1/mdp/{exchange}/{date}/{asset}"), &[])
            .await?;
        Ok(response.security_ids)
    }

    /// List sending times for a security.
    pub async fn sending_times(
        &self,
        exchange: &str,
        date: u32,
        asset: &str,
        security_id: i64,
        query: &SendingTimeQuery,
    ) -> Result<Vec<String>, A7Error> {
        let path = format!("/v1/mdp/{exchange}/{date}/{asset}/{security_id}");
        let response: SendingTimesResponse = self
            .transport
            .get_json(&path, &query.to_params("reference"))
            .await?;
        Ok(response.sending_times)
    }

    /// Full packet details for a security.
    ///
    /// Same endpoint as [`sending_times`](Self::sending_times) but queried
    /// in detailed mode.
    pub async fn packets(
        &self,
        exchange: &str,
        date: u32,
        asset: &str,
        security_id: i64,
        query: &SendingTimeQuery,
    ) -> Result<Vec<Value>, A7Error> {
        let path = format!("/v1/mdp/{exchange}/{date}/{asset}/{security_id}");
        let response: PacketsResponse = self
            .transport
            .get_json(&path, &query.to_params("detailed"))
            .await?;
        Ok(response.packets)
    }

    /// A single MDP packet addressed by its sending time.
    pub async fn message(
        &self,
        exchange: &str,
        date: u32,
        asset: &str,
        security_id: i64,
        sending_time: u64,
    ) -> Result<Value, A7Error> {
        let path = format!("/v1/mdp/{exchange}/{date}/{asset}/{security_id}/{sending_time}");
        self.transport.get_json(&path, &[]).await
    }
}
