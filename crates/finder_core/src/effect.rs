use crate::RecipeQuery;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the query against the recipe API and report back with `Msg::SearchCompleted`.
    FetchRecipes {
        request_id: RequestId,
        query: RecipeQuery,
    },
}
