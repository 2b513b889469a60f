use std::fmt;
use std::str::FromStr;

/// Dietary filter the user can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Restriction {
    Balanced,
    HighProtein,
    HighFiber,
    LowSodium,
    Vegan,
    Vegetarian,
    DairyFree,
}

/// Query parameter a restriction is sent as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamClass {
    Diet,
    Health,
}

impl ParamClass {
    pub fn param_name(self) -> &'static str {
        match self {
            ParamClass::Diet => "diet",
            ParamClass::Health => "health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionInfo {
    pub restriction: Restriction,
    pub value: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub class: ParamClass,
}

/// Indexed by `Restriction as usize`.
pub const RESTRICTION_TABLE: [RestrictionInfo; 7] = [
    RestrictionInfo {
        restriction: Restriction::Balanced,
        value: "balanced",
        label: "Balanced",
        emoji: "⚖️",
        class: ParamClass::Diet,
    },
    RestrictionInfo {
        restriction: Restriction::HighProtein,
        value: "high-protein",
        label: "High Protein",
        emoji: "🥩",
        class: ParamClass::Diet,
    },
    RestrictionInfo {
        restriction: Restriction::HighFiber,
        value: "high-fiber",
        label: "High Fiber",
        emoji: "🌾",
        class: ParamClass::Diet,
    },
    RestrictionInfo {
        restriction: Restriction::LowSodium,
        value: "low-sodium",
        label: "Low Sodium",
        emoji: "🧂",
        class: ParamClass::Diet,
    },
    RestrictionInfo {
        restriction: Restriction::Vegan,
        value: "vegan",
        label: "Vegan",
        emoji: "🌱",
        class: ParamClass::Health,
    },
    RestrictionInfo {
        restriction: Restriction::Vegetarian,
        value: "vegetarian",
        label: "Vegetarian",
        emoji: "🥗",
        class: ParamClass::Health,
    },
    RestrictionInfo {
        restriction: Restriction::DairyFree,
        value: "dairy-free",
        label: "Dairy-Free",
        emoji: "🥛",
        class: ParamClass::Health,
    },
];

impl Restriction {
    pub const ALL: [Restriction; 7] = [
        Restriction::Balanced,
        Restriction::HighProtein,
        Restriction::HighFiber,
        Restriction::LowSodium,
        Restriction::Vegan,
        Restriction::Vegetarian,
        Restriction::DairyFree,
    ];

    pub fn info(self) -> &'static RestrictionInfo {
        &RESTRICTION_TABLE[self as usize]
    }

    /// Value sent to the recipe API.
    pub fn value(self) -> &'static str {
        self.info().value
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn emoji(self) -> &'static str {
        self.info().emoji
    }

    pub fn param_class(self) -> ParamClass {
        self.info().class
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dietary restriction {0:?}")]
pub struct UnknownRestriction(pub String);

impl FromStr for Restriction {
    type Err = UnknownRestriction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RESTRICTION_TABLE
            .iter()
            .find(|info| info.value.eq_ignore_ascii_case(wanted))
            .map(|info| info.restriction)
            .ok_or_else(|| UnknownRestriction(s.to_string()))
    }
}

/// Unique restrictions kept in the order they were toggled on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RestrictionSet {
    items: Vec<Restriction>,
}

impl RestrictionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `restriction` if absent, removes it if present.
    pub fn toggle(&mut self, restriction: Restriction) {
        if let Some(pos) = self.items.iter().position(|r| *r == restriction) {
            self.items.remove(pos);
        } else {
            self.items.push(restriction);
        }
    }

    pub fn contains(&self, restriction: Restriction) -> bool {
        self.items.contains(&restriction)
    }

    pub fn iter(&self) -> impl Iterator<Item = Restriction> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown meal type {0:?}")]
pub struct UnknownMealType(pub String);

impl FromStr for MealType {
    type Err = UnknownMealType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MealType::ALL
            .into_iter()
            .find(|meal| meal.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownMealType(s.to_string()))
    }
}
