//! Algorithm execution and management endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::Value;

use crate::error::A7Error;
use crate::resources::DetailMode;
use crate::transport::HttpTransport;

/// Algorithm names may contain characters that are reserved in URL paths;
/// encode everything outside the unreserved set.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_name(name: &str) -> String {
    utf8_percent_encode(name, PATH_SEGMENT).to_string()
}

#[derive(Debug, Deserialize)]
struct OwnersResponse {
    #[serde(rename = "Owners", default)]
    owners: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AlgosResponse {
    #[serde(rename = "Algos", default)]
    algos: Vec<String>,
}

/// Run, inspect, upload and delete algorithms for data extraction.
#[derive(Debug, Clone, Copy)]
pub struct AlgoClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> AlgoClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// List algorithm owners accessible to the current user.
    pub async fn owners(&self) -> Result<Vec<String>, A7Error> {
        let response: OwnersResponse = self.transport.get_json("/v1/algo", &[]).await?;
        Ok(response.owners)
    }

    /// List algorithm names for an owner.
    pub async fn algorithms(&self, owner: &str, mode: DetailMode) -> Result<Vec<String>, A7Error> {
        let response: AlgosResponse = self
            .transport
            .get_json(
                &format!("/v1/algo/{owner}"),
                &[("mode", mode.as_str().to_string())],
            )
            .await?;
        Ok(response.algos)
    }

    /// Metadata and configuration of one algorithm: parameters, result
    /// schema and, in full mode, source details.
    pub async fn metadata(
        &self,
        owner: &str,
        algorithm: &str,
        mode: DetailMode,
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(
                &format!("/v1/algo/{owner}/{}", encode_name(algorithm)),
                &[("mode", mode.as_str().to_string())],
            )
            .await
    }

    /// Execute an algorithm.
    ///
    /// `params` are passed through as query parameters; which ones an
    /// algorithm accepts is part of its metadata (common ones: `marketId`,
    /// `date`, `marketSegmentId`, `securityId`).
    pub async fn run(
        &self,
        owner: &str,
        algorithm: &str,
        params: &[(&str, String)],
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(
                &format!("/v1/algo/{owner}/{}/run", encode_name(algorithm)),
                params,
            )
            .await
    }

    /// Run the `top_level` algorithm for best bid/ask data.
    pub async fn run_top_level(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
    ) -> Result<Value, A7Error> {
        self.run(
            "a7",
            "top_level",
            &[
                ("marketId", market.to_string()),
                ("date", date.to_string()),
                ("marketSegmentId", market_segment_id.to_string()),
                ("securityId", security_id.to_string()),
            ],
        )
        .await
    }

    /// Run the `PriceLevelv2` algorithm for multi-level order book depth.
    pub async fn run_price_level_v2(
        &self,
        market: &str,
        date: u32,
        market_segment_id: i64,
        security_id: i64,
        level: u32,
    ) -> Result<Value, A7Error> {
        self.run(
            "a7",
            "PriceLevelv2",
            &[
                ("marketId", market.to_string()),
                ("date", date.to_string()),
                ("marketSegmentId", market_segment_id.to_string()),
                ("securityId", security_id.to_string()),
                ("Level", level.to_string()),
            ],
        )
        .await
    }

    /// Upload (create or replace) an algorithm from YAML source.
    ///
    /// The source string is sent unmodified with the YAML content type; the
    /// response reports the save/compile/runnable status.
    pub async fn upload(
        &self,
        owner: &str,
        algorithm: &str,
        yaml_source: impl Into<String>,
    ) -> Result<Value, A7Error> {
        self.transport
            .put_raw(
                &format!("/v1/algo/{owner}/{}", encode_name(algorithm)),
                "application/yaml",
                yaml_source.into(),
            )
            .await
    }

    /// Download an algorithm's YAML source.
    pub async fn download(&self, owner: &str, algorithm: &str) -> Result<String, A7Error> {
        self.transport
            .get_text(
                &format!("/v1/algo/{owner}/{}/download", encode_name(algorithm)),
                &[],
            )
            .await
    }

    /// Delete an algorithm.
    pub async fn delete(&self, owner: &str, algorithm: &str) -> Result<Value, A7Error> {
        self.transport
            .delete_json(&format!("/v1/algo/{owner}/{}", encode_name(algorithm)))
            .await
    }
}
