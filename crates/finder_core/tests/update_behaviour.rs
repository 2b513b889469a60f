use std::sync::Once;

use finder_core::{
    update, AppState, Effect, MealType, Msg, Recipe, RecipeQuery, RequestId, Restriction,
    SearchMode, SearchResult, Taste, TasteSet,
};
use finder_logging::finder_info;
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

fn apply(state: AppState, msgs: Vec<Msg>) -> (AppState, Vec<Effect>) {
    let mut state = state;
    let mut all_effects = Vec::new();
    for msg in msgs {
        let (next, effects) = update(state, msg);
        state = next;
        all_effects.extend(effects);
    }
    (state, all_effects)
}

fn recipe(uri: &str, label: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        uri: uri.to_string(),
        label: label.to_string(),
        image: format!("https://img.example.com/{label}.jpg"),
        source: "Example Kitchen".to_string(),
        url: format!("https://recipes.example.com/{label}"),
        diet_labels: vec!["Low-Carb".to_string()],
        ingredient_lines: ingredients.iter().map(|line| line.to_string()).collect(),
    }
}

fn breakfast_search() -> (AppState, RequestId, RecipeQuery) {
    let (state, effects) = apply(
        AppState::new(),
        vec![
            Msg::ModeSelected(SearchMode::ByMealType),
            Msg::MealTypeSelected(MealType::Breakfast),
            Msg::SearchClicked,
        ],
    );
    match effects.as_slice() {
        [Effect::FetchRecipes { request_id, query }] => (state, *request_id, query.clone()),
        other => panic!("expected one fetch, got {other:?}"),
    }
}

#[test]
fn search_disabled_without_mode() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchClicked);

    assert!(effects.is_empty());
    assert!(!state.is_loading());
    assert!(!state.view().search_enabled);
}

#[test]
fn search_disabled_for_meal_mode_without_meal() {
    init_logging();
    let (state, effects) = apply(
        AppState::new(),
        vec![Msg::ModeSelected(SearchMode::ByMealType), Msg::SearchClicked],
    );

    assert!(effects.is_empty());
    assert!(!state.view().search_enabled);
}

#[test]
fn whitespace_cuisine_starts_a_search() {
    init_logging();
    let (state, effects) = apply(
        AppState::new(),
        vec![
            Msg::ModeSelected(SearchMode::ByCuisine),
            Msg::CuisineTextChanged(" ".to_string()),
            Msg::SearchClicked,
        ],
    );

    assert!(state.is_loading());
    assert_eq!(
        effects,
        vec![Effect::FetchRecipes {
            request_id: 1,
            query: RecipeQuery {
                term: " ".to_string(),
                filters: Vec::new(),
            },
        }]
    );
}

#[test]
fn search_carries_restrictions_in_toggle_order() {
    init_logging();
    let (_state, effects) = apply(
        AppState::new(),
        vec![
            Msg::RestrictionToggled(Restriction::Vegan),
            Msg::RestrictionToggled(Restriction::HighProtein),
            Msg::RestrictionToggled(Restriction::LowSodium),
            Msg::RestrictionToggled(Restriction::LowSodium),
            Msg::ModeSelected(SearchMode::ByMealType),
            Msg::MealTypeSelected(MealType::Breakfast),
            Msg::SearchClicked,
        ],
    );

    assert_eq!(
        effects,
        vec![Effect::FetchRecipes {
            request_id: 1,
            query: RecipeQuery {
                term: "Breakfast".to_string(),
                filters: vec![("health", "vegan"), ("diet", "high-protein")],
            },
        }]
    );
}

#[test]
fn second_click_while_loading_is_ignored() {
    init_logging();
    let (state, _request_id, _query) = breakfast_search();
    let (state, effects) = update(state, Msg::SearchClicked);

    assert!(effects.is_empty());
    assert!(state.is_loading());
    assert!(!state.view().search_enabled);
}

#[test]
fn successful_search_replaces_recipes() {
    init_logging();
    let (state, request_id, _query) = breakfast_search();
    let recipes = vec![
        recipe("r1", "Pancakes", &["2 tbsp maple syrup", "1 cup flour"]),
        recipe("r2", "Shakshuka", &["4 eggs", "1 can tomatoes", "1 tsp paprika"]),
    ];

    let (mut state, effects) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            result: SearchResult::Recipes(recipes.clone()),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.is_loading());
    assert_eq!(state.recipes(), recipes.as_slice());
    assert!(state.consume_dirty());

    let view = state.view();
    assert_eq!(view.error_message, None);
    assert_eq!(view.cards.len(), 2);
    assert_eq!(view.cards[0].tastes, [Taste::Sweet].into_iter().collect::<TasteSet>());
    assert_eq!(
        view.cards[1].tastes,
        [Taste::Spicy, Taste::Tangy].into_iter().collect::<TasteSet>()
    );
    finder_info!("rendered {} cards", view.cards.len());
}

#[test]
fn empty_hits_reports_no_results() {
    init_logging();
    let (state, request_id, _query) = breakfast_search();
    let (state, _effects) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            result: SearchResult::Recipes(Vec::new()),
        },
    );

    assert!(!state.is_loading());
    assert!(state.recipes().is_empty());
    assert_eq!(
        state.view().error_message.as_deref(),
        Some("No recipes found matching your criteria")
    );
}

#[test]
fn failed_request_reports_failure_and_clears_recipes() {
    init_logging();
    let (state, request_id, _query) = breakfast_search();
    let (state, _effects) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            result: SearchResult::Recipes(vec![recipe("r1", "Toast", &["butter"])]),
        },
    );
    assert_eq!(state.recipes().len(), 1);

    let (state, effects) = update(state, Msg::SearchClicked);
    let request_id = match effects.as_slice() {
        [Effect::FetchRecipes { request_id, .. }] => *request_id,
        other => panic!("expected one fetch, got {other:?}"),
    };
    assert_eq!(request_id, 2);
    assert_eq!(state.view().error_message, None);

    let (state, _effects) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            result: SearchResult::Failed,
        },
    );

    assert!(!state.is_loading());
    assert!(state.recipes().is_empty());
    assert_eq!(
        state.view().error_message.as_deref(),
        Some("Failed to fetch recipes. Please try again.")
    );
    // Search can be retried by hand.
    assert!(state.view().search_enabled);
}

#[test]
fn completion_for_unknown_request_is_ignored() {
    init_logging();
    let (state, request_id, _query) = breakfast_search();
    let (state, effects) = update(
        state.clone(),
        Msg::SearchCompleted {
            request_id: request_id + 10,
            result: SearchResult::Failed,
        },
    );

    assert!(effects.is_empty());
    assert!(state.is_loading());
    assert_eq!(state.error(), None);
}

#[test]
fn mode_change_clears_selection_and_recipes() {
    init_logging();
    let (state, request_id, _query) = breakfast_search();
    let (state, _effects) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            result: SearchResult::Recipes(vec![recipe("r1", "Omelette", &["3 eggs"])]),
        },
    );
    assert_eq!(state.recipes().len(), 1);

    let (state, effects) = update(state, Msg::ModeSelected(SearchMode::ByCuisine));

    assert!(effects.is_empty());
    assert_eq!(state.search().meal_type(), None);
    assert_eq!(state.search().cuisine_text(), None);
    assert!(state.recipes().is_empty());
    assert!(state.view().cards.is_empty());
    assert!(!state.view().search_enabled);
}

#[test]
fn out_of_mode_input_is_ignored_and_not_dirty() {
    init_logging();
    let (mut state, _effects) = update(AppState::new(), Msg::ModeSelected(SearchMode::ByCuisine));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::MealTypeSelected(MealType::Lunch));

    assert!(effects.is_empty());
    assert_eq!(state.search().meal_type(), None);
    assert!(!state.consume_dirty());
}

#[test]
fn restriction_toggles_show_in_view() {
    init_logging();
    let (state, _effects) = apply(
        AppState::new(),
        vec![
            Msg::RestrictionToggled(Restriction::DairyFree),
            Msg::RestrictionToggled(Restriction::Balanced),
            Msg::RestrictionToggled(Restriction::DairyFree),
        ],
    );

    let selected: Vec<_> = state
        .view()
        .restrictions
        .into_iter()
        .filter(|toggle| toggle.selected)
        .map(|toggle| toggle.restriction)
        .collect();
    assert_eq!(selected, vec![Restriction::Balanced]);
    assert_eq!(state.view().restrictions.len(), Restriction::ALL.len());
}

#[test]
fn dirty_flag_is_consumed_once_per_change() {
    init_logging();
    let (mut state, _effects) = update(
        AppState::new(),
        Msg::RestrictionToggled(Restriction::HighFiber),
    );

    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
    assert!(state.search().restrictions().contains(Restriction::HighFiber));
}
