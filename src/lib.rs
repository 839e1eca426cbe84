//! Interpret responses of a recipe-search HTTP API.
//!
//! The HTTP client is left to the caller. Hand the finished response (status
//! code and JSON body) to [`parse_response`] or an [`Interpreter`] and get
//! back the id of the first search match or the full recipe record.
//!
//! ```
//! use recipe_search::{parse_response, Interpreted, RawResponse};
//!
//! let response = RawResponse::new(200, r#"{"matches": [{"id": "Onion-Soup-1"}]}"#);
//! let result = parse_response("search", &response).unwrap();
//! assert_eq!(result, Interpreted::RecipeId("Onion-Soup-1".to_string()));
//! ```

pub mod config;
pub mod error;
pub mod interpreter;
pub mod model;
pub mod response;

pub use config::{load_config, InterpreterConfig};
pub use error::SearchError;
pub use interpreter::{
    check_status, interpret, parse_response, recipe_detail, search_recipe_id, Interpreter,
};
pub use model::{
    Attribution, Interpreted, NutritionEstimate, NutritionUnit, QueryKind, RecipeDetail,
    RecipeMatch, RecipeSource, SearchCriteria, SearchResponse,
};
pub use response::{ApiResponse, RawResponse};
