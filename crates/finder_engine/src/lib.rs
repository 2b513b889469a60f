//! Recipe finder engine: HTTP fetch of recipe searches and background execution.
mod engine;
mod fetch;
mod response;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use response::{parse_search_response, Hit, RecipeRecord, SearchResponse};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId};
