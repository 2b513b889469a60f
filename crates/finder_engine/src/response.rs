use serde::Deserialize;

use crate::{FailureKind, FetchError};

/// Top-level search response. Only `hits` is read; missing or null means no hits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Option<Vec<Hit>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hit {
    pub recipe: RecipeRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeRecord {
    pub uri: String,
    pub label: String,
    pub image: String,
    pub source: String,
    pub url: String,
    pub diet_labels: Vec<String>,
    pub ingredient_lines: Vec<String>,
}

/// Parse a search body into its recipes, in API order.
pub fn parse_search_response(body: &[u8]) -> Result<Vec<RecipeRecord>, FetchError> {
    let response: SearchResponse = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))?;
    Ok(response
        .hits
        .unwrap_or_default()
        .into_iter()
        .map(|hit| hit.recipe)
        .collect())
}
