use crate::{build_query, AppState, Effect, Msg, SearchError, SearchResult};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModeSelected(mode) => {
            state.search_mut().set_mode(mode);
            state.clear_recipes();
            state.mark_dirty();
            Vec::new()
        }
        Msg::MealTypeSelected(meal_type) => {
            if state.search_mut().set_meal_type(meal_type) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CuisineTextChanged(text) => {
            if state.search_mut().set_cuisine_text(text) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RestrictionToggled(restriction) => {
            state.search_mut().toggle_restriction(restriction);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchClicked => {
            // One search at a time; the button is disabled while loading.
            if state.is_loading() || !state.search().is_search_enabled() {
                return (state, Vec::new());
            }
            match build_query(state.search()) {
                Some(query) => {
                    let request_id = state.begin_search();
                    vec![Effect::FetchRecipes { request_id, query }]
                }
                None => Vec::new(),
            }
        }
        Msg::SearchCompleted { request_id, result } => {
            if state.in_flight() != Some(request_id) {
                return (state, Vec::new());
            }
            let outcome = match result {
                SearchResult::Recipes(recipes) if recipes.is_empty() => {
                    Err(SearchError::NoResults)
                }
                SearchResult::Recipes(recipes) => Ok(recipes),
                SearchResult::Failed => Err(SearchError::RequestFailure),
            };
            state.finish_search(outcome);
            Vec::new()
        }
    };

    (state, effects)
}
