//! CME Security Details (SD v2) endpoints.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::A7Error;
use crate::transport::HttpTransport;

/// Reference data for CME Group markets.
///
/// Listing endpoints in this family answer either with a bare JSON list or
/// with the list wrapped in a single-key object; both forms are accepted.
#[derive(Debug, Clone, Copy)]
pub struct SdClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> SdClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// List available CME exchanges, e.g. `["XCME", "XCBT", "XNYM"]`.
    pub async fn exchanges(&self) -> Result<Vec<String>, A7Error> {
        let value = self.transport.get_json("/v2/sd/", &[]).await?;
        bare_or_keyed(value, "Exchanges")
    }

    /// List available trading days (YYYYMMDD) for an exchange.
    pub async fn dates(&self, exchange: &str) -> Result<Vec<u32>, A7Error> {
        let value = self
            .transport
            .get_json(&format!("/v2/sd/{exchange}/"), &[])
            .await?;
        bare_or_keyed(value, "Dates")
    }

    /// List assets (product codes) for an exchange and trading day.
    pub async fn assets(&self, exchange: &str, date: u32) -> Result<Vec<String>, A7Error> {
        let value = self
            .transport
            .get_json(&format!("/v2/sd/{exchange}/{date}/"), &[])
            .await?;
        bare_or_keyed(value, "Assets")
    }

    /// List security IDs for an asset.
    ///
    /// IDs come back as strings on this interface.
    pub async fn securities(
        &self,
        exchange: &str,
        date: u32,
        asset: &str,
    ) -> Result<Vec<String>, A7Error> {
        let value = self
            .transport
            .get_json(&format!("/v2/sd/{exchange}/{date}/{asset}/"), &[])
            .await?;
        bare_or_keyed(value, "SecurityIDs")
    }

    /// Security details for every security of an asset.
    pub async fn all_security_details(
        &self,
        exchange: &str,
        date: u32,
        asset: &str,
    ) -> Result<Vec<Value>, A7Error> {
        self.transport
            .get_json(&format!("/v2/sd/{exchange}/{date}/{asset}"), &[])
            .await
    }

    /// Security details for one security.
    pub async fn security_details(
        &self,
        exchange: &str,
        date: u32,
        asset: &str,
        security_id: &str,
    ) -> Result<Value, A7Error> {
        self.transport
            .get_json(&format!("/v2/sd/{exchange}/{date}/{asset}/{security_id}"), &[])
            .await
    }
}

/// Accept both a bare list and a `{key: [...]}` wrapper; a wrapper missing
/// the key yields an empty list.
fn bare_or_keyed<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, A7Error> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map
            .remove(key)
            .unwrap_or_else(|| Value::Array(Vec::new())),
        other => other,
    };
    serde_json::from_value(list)
        .map_err(|e| A7Error::Generic(format!("failed to decode response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_list_passes_through() {
        let value = json!(["XCME", "XCBT"]);
        let list: Vec<String> = bare_or_keyed(value, "Exchanges").unwrap();
        assert_eq!(list, vec!["XCME", "XCBT"]);
    }

    #[test]
    fn wrapped_list_is_unwrapped() {
        let value = json!({"Exchanges": ["XCME"]});
        let list: Vec<String> = bare_or_keyed(value, "Exchanges").unwrap();
        assert_eq!(list, vec!["XCME"]);
    }

    #[test]
    fn missing_key_yields_empty_list() {
        let value = json!({"Other": ["XCME"]});
        let list: Vec<String> = bare_or_keyed(value, "Exchanges").unwrap();
        assert!(list.is_empty());
    }
}
