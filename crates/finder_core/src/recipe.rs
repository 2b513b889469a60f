/// Recipe as returned by the search API. Read-only once received.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipe {
    pub uri: String,
    pub label: String,
    pub image: String,
    pub source: String,
    pub url: String,
    pub diet_labels: Vec<String>,
    pub ingredient_lines: Vec<String>,
}
