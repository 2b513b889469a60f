use std::fmt;

use url::Url;

use crate::SearchState;

pub const DEFAULT_ENDPOINT: &str = "https://api.edamam.com/api/recipes/v2";

#[derive(Clone, PartialEq, Eq, Default)]
pub struct ApiCredentials {
    pub app_id: String,
    pub app_key: String,
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

/// Endpoint and credentials supplied from outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: Url,
    pub credentials: ApiCredentials,
}

impl ApiConfig {
    pub fn new(
        endpoint: &str,
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            credentials: ApiCredentials {
                app_id: app_id.into(),
                app_key: app_key.into(),
            },
        })
    }
}

/// Credential-free description of a search: the term plus restriction filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub term: String,
    pub filters: Vec<(&'static str, &'static str)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub endpoint: Url,
    pub params: Vec<(String, String)>,
}

/// Builds the query for the current selections, or `None` when no mode is chosen.
///
/// Each restriction becomes one `diet` or `health` filter, in toggle order.
pub fn build_query(state: &SearchState) -> Option<RecipeQuery> {
    let term = state.search_term()?;
    let filters = state
        .restrictions()
        .iter()
        .map(|restriction| (restriction.param_class().param_name(), restriction.value()))
        .collect();
    Some(RecipeQuery { term, filters })
}

impl RecipeQuery {
    pub fn into_request(self, config: &ApiConfig) -> RequestDescriptor {
        let mut params = Vec::with_capacity(4 + self.filters.len());
        params.push(("type".to_string(), "public".to_string()));
        params.push(("q".to_string(), self.term));
        params.push(("app_id".to_string(), config.credentials.app_id.clone()));
        params.push(("app_key".to_string(), config.credentials.app_key.clone()));
        params.extend(
            self.filters
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        RequestDescriptor {
            method: Method::Get,
            endpoint: config.endpoint.clone(),
            params,
        }
    }
}

impl RequestDescriptor {
    pub fn url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(
            self.params
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );
        url
    }

    /// Full URL with the `app_key` value masked, for logs.
    pub fn redacted_url(&self) -> String {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .extend_pairs(self.params.iter().map(|(name, value)| {
                if name == "app_key" {
                    (name.as_str(), "***")
                } else {
                    (name.as_str(), value.as_str())
                }
            }));
        url.to_string()
    }

    pub fn params_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
