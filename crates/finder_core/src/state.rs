use std::fmt;

use crate::view_model::{AppViewModel, RecipeCardView, RestrictionToggleView};
use crate::{classify, Recipe, RequestId, Restriction, SearchState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The API answered but returned zero hits.
    NoResults,
    /// Bad status, transport failure or malformed body.
    RequestFailure,
}

impl SearchError {
    pub fn message(self) -> &'static str {
        match self {
            SearchError::NoResults => "No recipes found matching your criteria",
            SearchError::RequestFailure => "Failed to fetch recipes. Please try again.",
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    search: SearchState,
    recipes: Vec<Recipe>,
    loading: bool,
    error: Option<SearchError>,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub(crate) fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<SearchError> {
        self.error
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            mode: self.search.mode(),
            meal_type: self.search.meal_type(),
            cuisine_text: self.search.cuisine_text().map(ToOwned::to_owned),
            restrictions: Restriction::ALL
                .into_iter()
                .map(|restriction| RestrictionToggleView {
                    restriction,
                    selected: self.search.restrictions().contains(restriction),
                })
                .collect(),
            search_enabled: self.search.is_search_enabled() && !self.loading,
            loading: self.loading,
            error_message: self.error.map(|err| err.message().to_string()),
            cards: self.recipes.iter().map(card_for).collect(),
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_recipes(&mut self) {
        self.recipes.clear();
    }

    /// Marks a search as in flight and returns its id.
    pub(crate) fn begin_search(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.loading = true;
        self.error = None;
        self.in_flight = Some(self.next_request_id);
        self.dirty = true;
        self.next_request_id
    }

    pub(crate) fn finish_search(&mut self, outcome: Result<Vec<Recipe>, SearchError>) {
        self.loading = false;
        self.in_flight = None;
        match outcome {
            Ok(recipes) => {
                self.recipes = recipes;
                self.error = None;
            }
            Err(err) => {
                self.recipes.clear();
                self.error = Some(err);
            }
        }
        self.dirty = true;
    }
}

fn card_for(recipe: &Recipe) -> RecipeCardView {
    RecipeCardView {
        uri: recipe.uri.clone(),
        label: recipe.label.clone(),
        image: recipe.image.clone(),
        source: recipe.source.clone(),
        url: recipe.url.clone(),
        diet_labels: recipe.diet_labels.clone(),
        ingredient_lines: recipe.ingredient_lines.clone(),
        tastes: classify(&recipe.ingredient_lines),
    }
}
