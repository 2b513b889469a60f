use std::fmt::Write;

use finder_core::{AppViewModel, RecipeCardView, SearchMode};

const TITLE: &str = "🤷 What-to-Cook 🤷";

/// Renders the whole screen as text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");

    let toggles: Vec<String> = view
        .restrictions
        .iter()
        .map(|toggle| {
            let mark = if toggle.selected { "x" } else { " " };
            format!(
                "[{mark}] {} {}",
                toggle.restriction.emoji(),
                toggle.restriction.label()
            )
        })
        .collect();
    let _ = writeln!(out, "Dietary restrictions: {}", toggles.join("  "));

    let selection = match view.mode {
        SearchMode::Unset => "Search by: (select search type)".to_string(),
        SearchMode::ByMealType => format!(
            "Search by: Meal Type | Meal type: {}",
            view.meal_type
                .map(|meal| meal.as_str())
                .unwrap_or("(select option)")
        ),
        SearchMode::ByCuisine => format!(
            "Search by: Cuisine Type | Cuisine: {:?}",
            view.cuisine_text.as_deref().unwrap_or("")
        ),
    };
    let _ = writeln!(out, "{selection}");
    let _ = writeln!(
        out,
        "Find Recipes: {}",
        if view.search_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    if view.loading {
        let _ = writeln!(out, "Loading recipes...");
    }
    if let Some(message) = &view.error_message {
        let _ = writeln!(out, "! {message}");
    }

    for (index, card) in view.cards.iter().enumerate() {
        render_card(&mut out, index + 1, card);
    }
    out
}

fn render_card(out: &mut String, number: usize, card: &RecipeCardView) {
    let tastes: String = card.tastes.iter().map(|taste| taste.emoji()).collect();
    if tastes.is_empty() {
        let _ = writeln!(out, "-- {number}. {}", card.label);
    } else {
        let _ = writeln!(out, "-- {number}. {} {tastes}", card.label);
    }
    let _ = writeln!(out, "   Source: {}", card.source);
    if !card.diet_labels.is_empty() {
        let _ = writeln!(out, "   Diet: {}", card.diet_labels.join(", "));
    }
    let _ = writeln!(out, "   Ingredients: {}", card.ingredient_lines.join("; "));
    let _ = writeln!(out, "   {}", card.url);
}
