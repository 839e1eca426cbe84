use crate::error::SearchError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Which API call produced the response being interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Recipe search; yields the id of the first match
    Search,
    /// Recipe lookup by id; yields the full recipe record
    Recipe,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Search => "search",
            QueryKind::Recipe => "recipe",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(QueryKind::Search),
            "recipe" => Ok(QueryKind::Recipe),
            _ => Err(SearchError::UnknownQueryKind(s.to_string())),
        }
    }
}

/// Body of a successful search call.
///
/// A typed view for callers that want more than the first id. Interpreting a
/// search does not go through it, so schema drift in unrelated fields never
/// hides the first match.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub criteria: Option<SearchCriteria>,
    pub total_match_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<RecipeMatch>,
    pub attribution: Option<Attribution>,
    pub facet_counts: Option<Value>,
}

/// Echo of the query the search was run with
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub q: Option<String>,
    pub allowed_ingredient: Option<Vec<String>>,
    pub excluded_ingredient: Option<Vec<String>>,
}

/// The only part of a match the interpreter relies on
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MatchId {
    pub id: String,
}

/// One candidate recipe in a search response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch {
    pub id: String,
    pub recipe_name: Option<String>,
    pub rating: Option<f64>,
    pub total_time_in_seconds: Option<u64>,
    pub source_display_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub small_image_urls: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_urls_by_size: HashMap<String, String>,
    pub attributes: Option<Value>,
    pub flavors: Option<Value>,
}

// The API sends `null` for empty collections as often as it omits them
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Attribution block the API requires clients to display
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Attribution {
    pub html: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub logo: Option<String>,
}

/// Full recipe record returned by a recipe call.
///
/// The decoded body is kept exactly as received; the accessors are read-only
/// typed views over it and return `None` when a field is missing or has an
/// unexpected type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RecipeDetail(Value);

impl RecipeDetail {
    pub fn new(body: Value) -> Self {
        RecipeDetail(body)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn number_of_servings(&self) -> Option<u64> {
        self.0.get("numberOfServings").and_then(Value::as_u64)
    }

    pub fn rating(&self) -> Option<f64> {
        self.0.get("rating").and_then(Value::as_f64)
    }

    pub fn total_time_in_seconds(&self) -> Option<u64> {
        self.0.get("totalTimeInSeconds").and_then(Value::as_u64)
    }

    /// Ingredient lines as printed on the recipe, non-string entries skipped
    pub fn ingredient_lines(&self) -> Vec<&str> {
        self.0
            .get("ingredientLines")
            .and_then(Value::as_array)
            .map(|lines| lines.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn source(&self) -> Option<RecipeSource> {
        self.0
            .get("source")
            .and_then(|source| serde_json::from_value(source.clone()).ok())
    }

    /// Nutrition estimates; entries that do not fit the schema are skipped
    pub fn nutrition_estimates(&self) -> Vec<NutritionEstimate> {
        self.0
            .get("nutritionEstimates")
            .and_then(Value::as_array)
            .map(|estimates| {
                estimates
                    .iter()
                    .filter_map(|e| serde_json::from_value(e.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<RecipeDetail> for Value {
    fn from(detail: RecipeDetail) -> Self {
        detail.0
    }
}

impl PartialEq<Value> for RecipeDetail {
    fn eq(&self, other: &Value) -> bool {
        &self.0 == other
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSource {
    pub source_display_name: Option<String>,
    pub source_recipe_url: Option<String>,
    pub source_site_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NutritionEstimate {
    pub attribute: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub unit: Option<NutritionUnit>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionUnit {
    pub id: Option<String>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub plural: Option<String>,
    pub plural_abbreviation: Option<String>,
    pub decimal: Option<bool>,
}

/// Successful outcome of interpreting a response
#[derive(Debug, Clone, PartialEq)]
pub enum Interpreted {
    /// Id of the first match of a search
    RecipeId(String),
    /// Recipe record, unchanged
    Recipe(RecipeDetail),
}

impl Interpreted {
    pub fn into_recipe_id(self) -> Option<String> {
        match self {
            Interpreted::RecipeId(id) => Some(id),
            Interpreted::Recipe(_) => None,
        }
    }

    pub fn into_recipe(self) -> Option<RecipeDetail> {
        match self {
            Interpreted::Recipe(detail) => Some(detail),
            Interpreted::RecipeId(_) => None,
        }
    }
}
