use crate::{MealType, Recipe, RequestId, Restriction, SearchMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a search mode.
    ModeSelected(SearchMode),
    /// User picked a meal type from the list.
    MealTypeSelected(MealType),
    /// User edited the cuisine text box.
    CuisineTextChanged(String),
    /// User clicked a dietary restriction button.
    RestrictionToggled(Restriction),
    /// User clicked Find Recipes.
    SearchClicked,
    /// Fetch collaborator finished a search.
    SearchCompleted {
        request_id: RequestId,
        result: SearchResult,
    },
}

/// What the fetch collaborator reports for one search attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// 2xx response with parsed hits, possibly none.
    Recipes(Vec<Recipe>),
    /// Non-2xx status, transport error or unparseable body.
    Failed,
}
