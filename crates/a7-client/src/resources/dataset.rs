//! Customer dataset endpoints.
//!
//! Datasets are generated by precalc jobs (see
//! [`precalc`](crate::resources::precalc)) and queried here with
//! SQL-like projection, filter and ordering parameters.

use serde::Deserialize;
use serde_json::Value;

use crate::error::A7Error;
use crate::resources::DetailMode;
use crate::transport::HttpTransport;

/// Projection and filter parameters for dataset queries.
#[derive(Debug, Clone, Default)]
pub struct DatasetQuery {
    /// Columns to return; all when empty.
    pub select: Vec<String>,
    /// SQL-style filter clause.
    pub filter: Option<String>,
    /// SQL-style ordering clause.
    pub order_by: Option<String>,
    /// Maximum number of rows.
    pub limit: Option<u32>,
}

impl DatasetQuery {
    /// Restrict the result to the given columns.
    #[must_use]
    pub fn with_select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set a SQL-style WHERE clause.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set a SQL-style ORDER BY clause.
    #[must_use]
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Limit the number of rows.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn to_params(&self, format: &str) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.select.is_empty() {
            params.push(("select", self.select.join(",")));
        }
        if let Some(ref filter) = self.filter {
            params.push(("where", filter.clone()));
        }
        if let Some(ref order_by) = self.order_by {
            params.push(("orderBy", order_by.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params.push(("format", format.to_string()));
        params
    }
}

#[derive(Debug, Deserialize)]
struct OwnersResponse {
    #[serde(rename = "Owners", default)]
    owners: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DatasetsResponse {
    #[serde(rename = "Datasets", default)]
    datasets: Vec<String>,
}

/// Customer dataset management and queries.
#[derive(Debug, Clone, Copy)]
pub struct DatasetClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> DatasetClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// List dataset owners accessible to the current user.
    pub async fn owners(&self, mode: DetailMode) -> Result<Vec<String>, A7Error> {
        let response: OwnersResponse = self
            .transport
            .get_json("/v1/dataset", &[("mode", mode.as_str().to_string())])
            .await?;
        Ok(response.owners)
    }

    /// List datasets for an owner.
    pub async fn datasets(&self, owner: &str) -> Result<Vec<String>, A7Error> {
        let response: DatasetsResponse = self
            .transport
            .get_json(&format!("/v1/dataset/{owner}"), &[])
            .await?;
        Ok(response.datasets)
    }

    /// Schema and metadata of a dataset.
    pub async fn metadata(&self, owner: &str, dataset: &str) -> Result<Value, A7Error> {
        self.transport
            .get_json(&format!("/v1/dataset/{owner}/{dataset}"), &[])
            .await
    }

    /// Query dataset rows as JSON.
    pub async fn data(
        &self,
        owner: &str,
        dataset: &str,
        query: &DatasetQuery,
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(
                &format!("/v1/dataset/{owner}/{dataset}/data"),
                &query.to_params("json"),
            )
            .await
    }

    /// Query dataset rows as CSV, returned as raw text.
    pub async fn data_csv(
        &self,
        owner: &str,
        dataset: &str,
        query: &DatasetQuery,
    ) -> Result<String, A7Error> {
        self.transport
            .get_text(
                &format!("/v1/dataset/{owner}/{dataset}/data"),
                &query.to_params("csv"),
            )
            .await
    }

    /// Delete a dataset.
    pub async fn delete(&self, owner: &str, dataset: &str) -> Result<Value, A7Error> {
        self.transport
            .delete_json(&format!("/v1/dataset/{owner}/{dataset}"))
            .await
    }
}
