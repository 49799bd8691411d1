use cocktaildb_core::{Config, Record};
use serde_json::Value;

use crate::transport::{HttpTransport, Transport};
use crate::{ClientError, Result};

/// TheCocktailDB API client
///
/// Stateless apart from its transport; every operation issues exactly one GET.
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Create a new client connected to the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(base_url))
    }

    /// Create a client from a loaded [`Config`]
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::from_config(config)?))
    }
}

impl Default for Client<HttpTransport> {
    fn default() -> Self {
        Self::new(cocktaildb_core::config::DEFAULT_BASE_URL)
    }
}

/// One API call: where to send it and which collection must come back
pub(crate) struct Endpoint<'a> {
    path: &'static str,
    query: Option<(&'static str, &'a str)>,
    collection: &'static str,
    not_found: String,
}

impl<'a> Endpoint<'a> {
    pub(crate) fn new(
        path: &'static str,
        collection: &'static str,
        not_found: impl Into<String>,
    ) -> Self {
        Self {
            path,
            query: None,
            collection,
            not_found: not_found.into(),
        }
    }

    pub(crate) fn query(mut self, key: &'static str, value: &'a str) -> Self {
        self.query = Some((key, value));
        self
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over any [`Transport`]
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue the call and return every record of the endpoint's collection.
    ///
    /// Transport errors pass through untouched. A missing response or body is
    /// `InvalidResponse`; a null, absent, non-array or empty collection is
    /// `NotFound`.
    pub(crate) async fn fetch_collection(&self, endpoint: Endpoint<'_>) -> Result<Vec<Record>> {
        let params: Vec<(&str, &str)> = endpoint.query.into_iter().collect();
        tracing::debug!("GET {} params={:?}", endpoint.path, params);

        let response = self.transport.get(endpoint.path, &params).await?;
        let data = response
            .and_then(|r| r.data)
            .filter(|data| !is_falsy(data))
            .ok_or(ClientError::InvalidResponse)?;

        let records: Vec<Record> = match data.get(endpoint.collection) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_object().cloned())
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                // filter.php answers misses with a bare string
                tracing::warn!(
                    "Unexpected '{}' value from {}: {}",
                    endpoint.collection,
                    endpoint.path,
                    other
                );
                Vec::new()
            }
        };

        if records.is_empty() {
            tracing::debug!("No '{}' in {} response", endpoint.collection, endpoint.path);
            return Err(ClientError::NotFound(endpoint.not_found));
        }

        tracing::debug!("{} returned {} record(s)", endpoint.path, records.len());
        Ok(records)
    }

    /// First record of the endpoint's collection
    pub(crate) async fn fetch_first(&self, endpoint: Endpoint<'_>) -> Result<Record> {
        let not_found = endpoint.not_found.clone();
        self.fetch_collection(endpoint)
            .await?
            .into_iter()
            .next()
            .ok_or(ClientError::NotFound(not_found))
    }
}

/// `null`, `false`, `0` and `""` bodies carry no data
fn is_falsy(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Reject empty or whitespace-only string parameters
pub(crate) fn require_non_empty(value: &str, param: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidArgument(format!(
            "The {param} parameter must be a non-empty string"
        )));
    }
    Ok(())
}
