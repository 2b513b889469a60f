use finder_core::{MealType, Msg, Restriction, SearchMode};

/// One line typed by the user, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  mode meal|cuisine|none   choose how to search
  meal <type>              Breakfast, Lunch, Dinner or Snack
  cuisine <text>           cuisine text, taken verbatim
  toggle <restriction>     balanced, high-protein, high-fiber, low-sodium,
                           vegan, vegetarian, dairy-free
  search                   find recipes
  show                     print the current screen
  help                     this text
  quit                     exit";

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return None;
    }
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    let command = match word.to_ascii_lowercase().as_str() {
        "mode" => match rest.trim().to_ascii_lowercase().as_str() {
            "meal" => Command::Dispatch(Msg::ModeSelected(SearchMode::ByMealType)),
            "cuisine" => Command::Dispatch(Msg::ModeSelected(SearchMode::ByCuisine)),
            "none" => Command::Dispatch(Msg::ModeSelected(SearchMode::Unset)),
            _ => Command::Unknown(line.to_string()),
        },
        "meal" => match rest.parse::<MealType>() {
            Ok(meal) => Command::Dispatch(Msg::MealTypeSelected(meal)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "cuisine" => Command::Dispatch(Msg::CuisineTextChanged(rest.to_string())),
        "toggle" => match rest.parse::<Restriction>() {
            Ok(restriction) => Command::Dispatch(Msg::RestrictionToggled(restriction)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "search" => Command::Dispatch(Msg::SearchClicked),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}
