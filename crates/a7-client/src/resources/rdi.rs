//! Reference Data Interface (RDI v2) endpoints.

use serde_json::Value;

use crate::error::A7Error;
use crate::transport::HttpTransport;

/// Reference data for T7 markets: markets, segments and security details.
#[derive(Debug, Clone, Copy)]
pub struct RdiClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> RdiClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// List available markets, e.g. `["XEUR", "XETR", "XFRA", "XEEE"]`.
    pub async fn markets(&self) -> Result<Vec<String>, A7Error> {
        self.transport.get_json("/v2/rdi/", &[]).await
    }

    /// List market segments for a market on a trading day (YYYYMMDD).
    pub async fn market_segments(&self, market: &str, date: u32) -> Result<Vec<Value>, A7Error> {
        self.transport
            .get_json(&format!("/v2/rdi/{market}/{date}/"), &[])
            .await
    }

    /// Reference data messages for a single security.
    pub async fn security_details(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(
                &format!("/v2/rdi/{market}/{date}/{market_segment_id}/{security_id}"),
                &[],
            )
            .await
    }

    /// Instrument snapshot messages for a specific message sequence number.
    pub async fn instrument_snapshot(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        msg_seq_num: u64,
    ) -> Result<Vec<Value>, A7Error> {
        self.transport
            .get_json(
                &format!("/v2/rdi/{market}/{date}/{market_segment_id}/{security_id}/{msg_seq_num}"),
                &[],
            )
            .await
    }
}
