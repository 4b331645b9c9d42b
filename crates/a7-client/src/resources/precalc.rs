//! Precalculation job management endpoints.
//!
//! Precalc jobs run algorithms on a schedule and store their results as
//! datasets. Jobs are identified by owner and name; results drill down by
//! trading day, task and result set.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::A7Error;
use crate::transport::HttpTransport;

/// Output mode for result data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultMode {
    /// JSON-decoded result data (default).
    #[default]
    Json,
    /// Raw result data as generated by the job.
    Raw,
}

impl ResultMode {
    /// Wire value of the `mode` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Raw => "raw",
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwnersResponse {
    #[serde(rename = "Owners", default)]
    owners: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct JobsResponse {
    #[serde(rename = "Jobs", default)]
    jobs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DatesResponse {
    #[serde(rename = "Dates", default)]
    dates: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct TasksResponse {
    #[serde(rename = "Tasks", default)]
    tasks: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ResultsResponse {
    #[serde(rename = "Results", default)]
    results: Vec<String>,
}

/// Precalculation job management and results.
#[derive(Debug, Clone, Copy)]
pub struct PrecalcClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> PrecalcClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// List precalc owners accessible to the current user.
    pub async fn owners(&self) -> Result<Vec<String>, A7Error> {
        let response: OwnersResponse = self.transport.get_json("/v1/precalc", &[]).await?;
        Ok(response.owners)
    }

    /// List precalc jobs for an owner.
    pub async fn jobs(&self, owner: &str) -> Result<Vec<String>, A7Error> {
        let response: JobsResponse = self
            .transport
            .get_json(&format!("/v1/precalc/{owner}"), &[])
            .await?;
        Ok(response.jobs)
    }

    /// Definition and configuration of a job.
    pub async fn definition(&self, owner: &str, job: &str) -> Result<Value, A7Error> {
        self.transport
            .get_json(&format!("/v1/precalc/{owner}/{job}"), &[])
            .await
    }

    /// Create a new job from a JSON definition.
    ///
    /// Existing jobs cannot be updated in place; delete first, then create
    /// again.
    pub async fn create<D: Serialize + ?Sized>(
        &self,
        owner: &str,
        job: &str,
        definition: &D,
    ) -> Result<Value, A7Error> {
        self.transport
            .put_json(&format!("/v1/precalc/{owner}/{job}"), definition)
            .await
    }

    /// Delete a job.
    ///
    /// Datasets generated by the job are not deleted with it.
    pub async fn delete(&self, owner: &str, job: &str) -> Result<Value, A7Error> {
        self.transport
            .delete_json(&format!("/v1/precalc/{owner}/{job}"))
            .await
    }

    /// Activate a job.
    pub async fn activate(&self, owner: &str, job: &str) -> Result<Value, A7Error> {
        self.transport
            .patch_json(&format!("/v1/precalc/{owner}/{job}/activate"))
            .await
    }

    /// Deactivate a job.
    pub async fn deactivate(&self, owner: &str, job: &str) -> Result<Value, A7Error> {
        self.transport
            .patch_json(&format!("/v1/precalc/{owner}/{job}/deactivate"))
            .await
    }

    /// List trading days (YYYYMMDD) with results for a job.
    pub async fn dates(&self, owner: &str, job: &str) -> Result<Vec<u32>, A7Error> {
        let response: DatesResponse = self
            .transport
            .get_json(&format!("/v1/precalc/{owner}/{job}/"), &[])
            .await?;
        Ok(response.dates)
    }

    /// List tasks of a job on a trading day.
    pub async fn tasks(&self, owner: &str, job: &str, date: u32) -> Result<Vec<String>, A7Error> {
        let response: TasksResponse = self
            .transport
            .get_json(&format!("/v1/precalc/{owner}/{job}/{date}"), &[])
            .await?;
        Ok(response.tasks)
    }

    /// List result sets of a task.
    pub async fn results(
        &self,
        owner: &str,
        job: &str,
        date: u32,
        task: &str,
    ) -> Result<Vec<String>, A7Error> {
        let response: ResultsResponse = self
            .transport
            .get_json(&format!("/v1/precalc/{owner}/{job}/{date}/{task}"), &[])
            .await?;
        Ok(response.results)
    }

    /// Generated data for one result set.
    pub async fn data(
        &self,
        owner: &str,
        job: &str,
        date: u32,
        task: &str,
        result: &str,
        mode: ResultMode,
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(
                &format!("/v1/precalc/{owner}/{job}/{date}/{task}/{result}"),
                &[("mode", mode.as_str().to_string())],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_mode_wire_values() {
        assert_eq!(ResultMode::Json.as_str(), "json");
        assert_eq!(ResultMode::Raw.as_str(), "raw");
        assert_eq!(ResultMode::default(), ResultMode::Json);
    }
}
