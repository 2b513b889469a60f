use crate::{MealType, Restriction, SearchMode, TasteSet};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: SearchMode,
    pub meal_type: Option<MealType>,
    pub cuisine_text: Option<String>,
    pub restrictions: Vec<RestrictionToggleView>,
    pub search_enabled: bool,
    pub loading: bool,
    pub error_message: Option<String>,
    pub cards: Vec<RecipeCardView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionToggleView {
    pub restriction: Restriction,
    pub selected: bool,
}

/// One rendered recipe. `tastes` is derived from the ingredient lines at view time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCardView {
    pub uri: String,
    pub label: String,
    pub image: String,
    pub source: String,
    pub url: String,
    pub diet_labels: Vec<String>,
    pub ingredient_lines: Vec<String>,
    pub tastes: TasteSet,
}
