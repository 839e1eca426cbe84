use crate::config::InterpreterConfig;
use crate::error::SearchError;
use crate::model::{Interpreted, MatchId, QueryKind, RecipeDetail};
use crate::response::ApiResponse;
use log::{debug, warn};
use serde_json::Value;

/// Map a status code to its failure, or `Ok(())` when the body should be read.
pub fn check_status(status: u16, config: &InterpreterConfig) -> Result<(), SearchError> {
    match status {
        200 => Ok(()),
        500 => Err(SearchError::ServerError),
        409 => Err(SearchError::RateLimited),
        400 => Err(SearchError::BadRequest),
        201..=299 if config.accept_any_success => Ok(()),
        other => Err(SearchError::UnexpectedStatus(other)),
    }
}

/// Turns recipe-search API responses into recipe ids and recipe records
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Interpreter { config }
    }

    /// Build an interpreter from `recipe_search.toml` and the environment
    pub fn from_env() -> Result<Self, SearchError> {
        Ok(Interpreter::new(InterpreterConfig::load()?))
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Interpret `response` as the answer to a `kind` call.
    ///
    /// Status-derived failures are returned without touching the body. A
    /// search yields the id of its first match, a recipe call yields the
    /// decoded body unchanged.
    pub fn interpret<R>(&self, kind: QueryKind, response: &R) -> Result<Interpreted, SearchError>
    where
        R: ApiResponse + ?Sized,
    {
        let body = self.checked_body(kind, response)?;
        match kind {
            QueryKind::Search => first_match_id(body).map(Interpreted::RecipeId),
            QueryKind::Recipe => Ok(Interpreted::Recipe(RecipeDetail::new(body))),
        }
    }

    /// Same as [`Interpreter::interpret`] with the kind given as a keyword
    pub fn parse_response<R>(&self, kind: &str, response: &R) -> Result<Interpreted, SearchError>
    where
        R: ApiResponse + ?Sized,
    {
        self.interpret(kind.parse()?, response)
    }

    pub fn search_recipe_id<R>(&self, response: &R) -> Result<String, SearchError>
    where
        R: ApiResponse + ?Sized,
    {
        first_match_id(self.checked_body(QueryKind::Search, response)?)
    }

    pub fn recipe_detail<R>(&self, response: &R) -> Result<RecipeDetail, SearchError>
    where
        R: ApiResponse + ?Sized,
    {
        Ok(RecipeDetail::new(self.checked_body(QueryKind::Recipe, response)?))
    }

    fn checked_body<R>(&self, kind: QueryKind, response: &R) -> Result<Value, SearchError>
    where
        R: ApiResponse + ?Sized,
    {
        let status = response.status_code();
        debug!("Interpreting {} response with status {}", kind, status);

        if let Err(e) = check_status(status, &self.config) {
            warn!("Recipe API {} call failed: {}", kind, e);
            return Err(e);
        }

        response.body()
    }
}

/// Id of the first match. Only `matches[0].id` is read, so the rest of the
/// body may drift from the documented schema.
fn first_match_id(body: Value) -> Result<String, SearchError> {
    let Value::Object(mut body) = body else {
        return Err(SearchError::MalformedBody(
            "search response is not a JSON object".to_string(),
        ));
    };

    let matches = match body.remove("matches") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(matches)) => matches,
        Some(_) => {
            return Err(SearchError::MalformedBody(
                "search response `matches` is not an array".to_string(),
            ))
        }
    };
    debug!(
        "Search returned {} matches (total {:?})",
        matches.len(),
        body.get("totalMatchCount").and_then(Value::as_u64)
    );

    let first = matches.into_iter().next().ok_or(SearchError::NoMatch)?;
    let first: MatchId = serde_json::from_value(first)?;
    Ok(first.id)
}

/// Interpret `response` with the default configuration
pub fn interpret<R>(kind: QueryKind, response: &R) -> Result<Interpreted, SearchError>
where
    R: ApiResponse + ?Sized,
{
    Interpreter::default().interpret(kind, response)
}

/// Interpret `response` for the keyword `"search"` or `"recipe"` with the
/// default configuration
pub fn parse_response<R>(kind: &str, response: &R) -> Result<Interpreted, SearchError>
where
    R: ApiResponse + ?Sized,
{
    Interpreter::default().parse_response(kind, response)
}

pub fn search_recipe_id<R>(response: &R) -> Result<String, SearchError>
where
    R: ApiResponse + ?Sized,
{
    Interpreter::default().search_recipe_id(response)
}

pub fn recipe_detail<R>(response: &R) -> Result<RecipeDetail, SearchError>
where
    R: ApiResponse + ?Sized,
{
    Interpreter::default().recipe_detail(response)
}
