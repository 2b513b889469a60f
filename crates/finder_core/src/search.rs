use crate::{MealType, Restriction, RestrictionSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Unset,
    ByMealType,
    ByCuisine,
}

/// User selections that drive a recipe search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    mode: SearchMode,
    meal_type: Option<MealType>,
    cuisine_text: Option<String>,
    restrictions: RestrictionSet,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn meal_type(&self) -> Option<MealType> {
        self.meal_type
    }

    pub fn cuisine_text(&self) -> Option<&str> {
        self.cuisine_text.as_deref()
    }

    pub fn restrictions(&self) -> &RestrictionSet {
        &self.restrictions
    }

    /// Switches mode and drops both selections, even when the mode is unchanged.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
        self.meal_type = None;
        self.cuisine_text = None;
    }

    /// Ignored unless searching by meal type. Returns whether the state changed.
    pub fn set_meal_type(&mut self, meal_type: MealType) -> bool {
        if self.mode != SearchMode::ByMealType {
            return false;
        }
        self.meal_type = Some(meal_type);
        true
    }

    /// Ignored unless searching by cuisine. Returns whether the state changed.
    pub fn set_cuisine_text(&mut self, text: impl Into<String>) -> bool {
        if self.mode != SearchMode::ByCuisine {
            return false;
        }
        self.cuisine_text = Some(text.into());
        true
    }

    pub fn toggle_restriction(&mut self, restriction: Restriction) {
        self.restrictions.toggle(restriction);
    }

    /// Any non-empty cuisine text enables search; whitespace is not trimmed.
    pub fn is_search_enabled(&self) -> bool {
        match self.mode {
            SearchMode::Unset => false,
            SearchMode::ByMealType => self.meal_type.is_some(),
            SearchMode::ByCuisine => self
                .cuisine_text
                .as_deref()
                .is_some_and(|text| !text.is_empty()),
        }
    }

    /// Term sent as `q`, or `None` when no mode is chosen.
    pub fn search_term(&self) -> Option<String> {
        match self.mode {
            SearchMode::Unset => None,
            SearchMode::ByMealType => Some(
                self.meal_type
                    .map(|meal| meal.as_str().to_string())
                    .unwrap_or_default(),
            ),
            SearchMode::ByCuisine => Some(self.cuisine_text.clone().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty_and_disabled() {
        let state = SearchState::new();
        assert_eq!(state.mode(), SearchMode::Unset);
        assert_eq!(state.meal_type(), None);
        assert_eq!(state.cuisine_text(), None);
        assert!(state.restrictions().is_empty());
        assert!(!state.is_search_enabled());
    }

    #[test]
    fn meal_mode_requires_a_meal_type() {
        let mut state = SearchState::new();
        state.set_mode(SearchMode::ByMealType);
        assert!(!state.is_search_enabled());

        assert!(state.set_meal_type(MealType::Dinner));
        assert!(state.is_search_enabled());
    }

    #[test]
    fn whitespace_cuisine_text_enables_search() {
        let mut state = SearchState::new();
        state.set_mode(SearchMode::ByCuisine);
        assert!(state.set_cuisine_text(""));
        assert!(!state.is_search_enabled());

        assert!(state.set_cuisine_text(" "));
        assert!(state.is_search_enabled());
    }

    #[test]
    fn out_of_mode_mutations_are_ignored() {
        let mut state = SearchState::new();
        assert!(!state.set_meal_type(MealType::Lunch));
        assert!(!state.set_cuisine_text("Thai"));
        assert_eq!(state, SearchState::new());

        state.set_mode(SearchMode::ByCuisine);
        assert!(!state.set_meal_type(MealType::Lunch));
        assert_eq!(state.meal_type(), None);
    }

    #[test]
    fn set_mode_clears_selections() {
        let mut state = SearchState::new();
        state.set_mode(SearchMode::ByMealType);
        state.set_meal_type(MealType::Breakfast);
        state.toggle_restriction(Restriction::Vegan);

        state.set_mode(SearchMode::ByCuisine);
        assert_eq!(state.meal_type(), None);
        assert_eq!(state.cuisine_text(), None);
        assert!(state.restrictions().contains(Restriction::Vegan));

        state.set_cuisine_text("Italian");
        state.set_mode(SearchMode::ByCuisine);
        assert_eq!(state.cuisine_text(), None);
    }

    #[test]
    fn search_term_follows_mode() {
        let mut state = SearchState::new();
        assert_eq!(state.search_term(), None);

        state.set_mode(SearchMode::ByMealType);
        state.set_meal_type(MealType::Snack);
        assert_eq!(state.search_term().as_deref(), Some("Snack"));

        state.set_mode(SearchMode::ByCuisine);
        state.set_cuisine_text("  Mexican ");
        assert_eq!(state.search_term().as_deref(), Some("  Mexican "));
    }
}
