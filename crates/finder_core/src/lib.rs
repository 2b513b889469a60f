//! Recipe finder core: taste classifier, search state machine, query builder,
//! and the pure update loop that ties them together.
mod effect;
mod msg;
mod query;
mod recipe;
mod restriction;
mod search;
mod state;
mod taste;
mod update;
mod view_model;

pub use effect::{Effect, RequestId};
pub use msg::{Msg, SearchResult};
pub use query::{
    build_query, ApiConfig, ApiCredentials, Method, RecipeQuery, RequestDescriptor,
    DEFAULT_ENDPOINT,
};
pub use recipe::Recipe;
pub use restriction::{
    MealType, ParamClass, Restriction, RestrictionInfo, RestrictionSet, UnknownMealType,
    UnknownRestriction, RESTRICTION_TABLE,
};
pub use search::{SearchMode, SearchState};
pub use state::{AppState, SearchError};
pub use taste::{classify, Taste, TasteSet};
pub use update::update;
pub use view_model::{AppViewModel, RecipeCardView, RestrictionToggleView};
