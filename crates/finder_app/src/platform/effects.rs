use finder_core::{ApiConfig, Effect, Msg, Recipe, RequestId, SearchResult};
use finder_engine::{EngineEvent, EngineHandle, FetchSettings, RecipeRecord};
use finder_logging::{finder_error, finder_info, finder_warn};

pub struct EffectRunner {
    engine: EngineHandle,
    api: ApiConfig,
    /// Completions produced without the engine, handed out by the next `poll`.
    pending: Vec<Msg>,
}

impl EffectRunner {
    pub fn new(api: ApiConfig, settings: FetchSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
            api,
            pending: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchRecipes { request_id, query } => {
                    let request = query.into_request(&self.api);
                    finder_info!(
                        "FetchRecipes request_id={} url={}",
                        request_id,
                        request.redacted_url()
                    );
                    if !self.engine.search(request_id, request.url().to_string()) {
                        self.pending.push(undelivered(request_id));
                    }
                }
            }
        }
    }

    /// Drains finished searches as core messages.
    pub fn poll(&mut self) -> Vec<Msg> {
        let mut msgs = std::mem::take(&mut self.pending);
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::SearchCompleted {
            request_id,
            result: match result {
                Ok(records) => SearchResult::Recipes(records.into_iter().map(map_record).collect()),
                Err(err) => {
                    finder_warn!("Search {} failed: {}", request_id, err);
                    SearchResult::Failed
                }
            },
        },
    }
}

fn undelivered(request_id: RequestId) -> Msg {
    finder_error!("Search {} not started: engine has stopped", request_id);
    Msg::SearchCompleted {
        request_id,
        result: SearchResult::Failed,
    }
}

fn map_record(record: RecipeRecord) -> Recipe {
    Recipe {
        uri: record.uri,
        label: record.label,
        image: record.image,
        source: record.source,
        url: record.url,
        diet_labels: record.diet_labels,
        ingredient_lines: record.ingredient_lines,
    }
}

#[cfg(test)]
mod tests {
    use finder_engine::{FailureKind, FetchError};

    use super::*;

    #[test]
    fn completed_search_maps_to_recipes() {
        let record = RecipeRecord {
            uri: "urn:1".to_string(),
            label: "Soup".to_string(),
            ingredient_lines: vec!["2 cups stock".to_string()],
            ..RecipeRecord::default()
        };
        let msg = map_event(EngineEvent::SearchCompleted {
            request_id: 4,
            result: Ok(vec![record]),
        });

        match msg {
            Msg::SearchCompleted {
                request_id: 4,
                result: SearchResult::Recipes(recipes),
            } => {
                assert_eq!(recipes.len(), 1);
                assert_eq!(recipes[0].label, "Soup");
                assert_eq!(recipes[0].ingredient_lines, vec!["2 cups stock"]);
            }
            other => panic!("unexpected msg {other:?}"),
        }
    }

    #[test]
    fn undelivered_search_ends_loading() {
        let state = finder_core::AppState::new();
        let (state, _) = finder_core::update(
            state,
            Msg::ModeSelected(finder_core::SearchMode::ByCuisine),
        );
        let (state, _) = finder_core::update(state, Msg::CuisineTextChanged("Thai".into()));
        let (state, effects) = finder_core::update(state, Msg::SearchClicked);
        let request_id = match effects.as_slice() {
            [Effect::FetchRecipes { request_id, .. }] => *request_id,
            other => panic!("expected one fetch, got {other:?}"),
        };
        assert!(state.is_loading());

        let (state, _) = finder_core::update(state, undelivered(request_id));
        assert!(!state.is_loading());
        assert_eq!(
            state.error(),
            Some(finder_core::SearchError::RequestFailure)
        );
    }

    #[test]
    fn failed_search_maps_to_failure() {
        let msg = map_event(EngineEvent::SearchCompleted {
            request_id: 9,
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(401),
                message: "401 Unauthorized".to_string(),
            }),
        });

        assert_eq!(
            msg,
            Msg::SearchCompleted {
                request_id: 9,
                result: SearchResult::Failed,
            }
        );
    }
}
