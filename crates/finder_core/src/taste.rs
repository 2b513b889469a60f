use std::collections::BTreeSet;

/// Taste categories inferred from ingredient text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Taste {
    Sweet,
    Spicy,
    Savory,
    Tangy,
}

/// Set of tastes present in a recipe. Iterates in `Taste` declaration order.
pub type TasteSet = BTreeSet<Taste>;

/// Lowercase keyword substrings per taste, indexed by `Taste as usize`.
const TASTE_KEYWORDS: [(Taste, &[&str]); 4] = [
    (
        Taste::Sweet,
        &[
            "sugar",
            "honey",
            "maple",
            "sweet",
            "chocolate",
            "caramel",
            "molasses",
        ],
    ),
    (
        Taste::Spicy,
        &[
            "chili",
            "pepper",
            "jalapeno",
            "sriracha",
            "wasabi",
            "horseradish",
            "cayenne",
            "paprika",
            "spicy",
        ],
    ),
    (
        Taste::Savory,
        &[
            "salt",
            "soy sauce",
            "umami",
            "meat",
            "broth",
            "stock",
            "mushroom",
            "garlic",
            "onion",
        ],
    ),
    (
        Taste::Tangy,
        &[
            "lemon", "lime", "vinegar", "citrus", "orange", "yogurt", "sour", "tomato",
        ],
    ),
];

impl Taste {
    pub const ALL: [Taste; 4] = [Taste::Sweet, Taste::Spicy, Taste::Savory, Taste::Tangy];

    pub fn keywords(self) -> &'static [&'static str] {
        TASTE_KEYWORDS[self as usize].1
    }

    pub fn label(self) -> &'static str {
        match self {
            Taste::Sweet => "sweet",
            Taste::Spicy => "spicy",
            Taste::Savory => "savory",
            Taste::Tangy => "tangy",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Taste::Sweet => "🍭",
            Taste::Spicy => "🌶️",
            Taste::Savory => "🍽️",
            Taste::Tangy => "🍋",
        }
    }
}

/// Classify ingredient lines into taste categories.
///
/// A taste is present when any line, lowercased, contains any of its keywords as a
/// plain substring. Matching is not token-bounded: `"spicyfood"` counts as spicy.
pub fn classify<S: AsRef<str>>(ingredient_lines: &[S]) -> TasteSet {
    let mut tastes = TasteSet::new();
    for line in ingredient_lines {
        let lower = line.as_ref().to_lowercase();
        for (taste, keywords) in TASTE_KEYWORDS {
            if tastes.contains(&taste) {
                continue;
            }
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                tastes.insert(taste);
            }
        }
    }
    tastes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tastes: &[Taste]) -> TasteSet {
        tastes.iter().copied().collect()
    }

    #[test]
    fn keyword_table_is_indexed_by_taste() {
        for (index, taste) in Taste::ALL.into_iter().enumerate() {
            assert_eq!(TASTE_KEYWORDS[index].0, taste);
            assert!(!taste.keywords().is_empty());
        }
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let lines: [&str; 0] = [];
        assert!(classify(&lines).is_empty());
    }

    #[test]
    fn no_keywords_yields_empty_set() {
        assert!(classify(&["2 cups flour", "1 egg", "chicken thighs"]).is_empty());
    }

    #[test]
    fn lemon_chicken_with_chili_is_tangy_and_spicy() {
        let tastes = classify(&["lemon chicken", "chili flakes"]);
        assert_eq!(tastes, set(&[Taste::Spicy, Taste::Tangy]));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify(&["SUGAR cake"]), classify(&["sugar cake"]));
        assert_eq!(classify(&["SUGAR cake"]), set(&[Taste::Sweet]));
    }

    #[test]
    fn substring_match_is_not_token_bounded() {
        assert_eq!(classify(&["spicyfood"]), set(&[Taste::Spicy]));
        // "peppermint" contains "pepper".
        assert_eq!(classify(&["peppermint tea"]), set(&[Taste::Spicy]));
    }

    #[test]
    fn result_ignores_line_order_and_duplicates() {
        let forward = classify(&["honey", "soy sauce", "honey glaze"]);
        let backward = classify(&["honey glaze", "soy sauce", "honey"]);
        assert_eq!(forward, backward);
        assert_eq!(forward, set(&[Taste::Sweet, Taste::Savory]));
    }

    #[test]
    fn one_line_can_carry_several_tastes() {
        let tastes = classify(&["Maple-chipotle pepper glaze with orange zest and salt"]);
        assert_eq!(tastes, Taste::ALL.into_iter().collect::<TasteSet>());
    }

    #[test]
    fn every_keyword_triggers_its_taste() {
        for taste in Taste::ALL {
            for keyword in taste.keywords() {
                let line = format!("1 tbsp {}", keyword.to_uppercase());
                assert!(
                    classify(&[line.as_str()]).contains(&taste),
                    "{keyword} should mark {}",
                    taste.label()
                );
            }
        }
    }
}
