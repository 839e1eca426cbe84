use recipe_search::{parse_response, search_recipe_id, ApiResponse, RawResponse, SearchError};

#[tokio::test]
async fn test_search_from_reqwest_response() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/v1/api/recipes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"totalMatchCount": 1, "matches": [{"id": "Easy-French-Onion-Soup-2038937"}]}"#)
        .create();

    let url = format!("{}/v1/api/recipes", server.url());
    let response = reqwest::get(&url).await.unwrap();
    let response = RawResponse::from_reqwest(response).await.unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        search_recipe_id(&response).unwrap(),
        "Easy-French-Onion-Soup-2038937"
    );
}

#[tokio::test]
async fn test_rate_limited_reqwest_response() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/v1/api/recipe/Easy-French-Onion-Soup-2038937")
        .with_status(409)
        .with_body("Rate limit exceeded")
        .create();

    let url = format!(
        "{}/v1/api/recipe/Easy-French-Onion-Soup-2038937",
        server.url()
    );
    let response = RawResponse::from_reqwest(reqwest::get(&url).await.unwrap())
        .await
        .unwrap();

    let err = parse_response("recipe", &response).unwrap_err();
    assert!(matches!(err, SearchError::RateLimited));
}

#[tokio::test]
async fn test_recipe_from_reqwest_response() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{"name": "Easy French Onion Soup", "numberOfServings": 4, "yield": null}"#;
    let _m = server
        .mock("GET", "/v1/api/recipe/Easy-French-Onion-Soup-2038937")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let url = format!(
        "{}/v1/api/recipe/Easy-French-Onion-Soup-2038937",
        server.url()
    );
    let response = RawResponse::from_reqwest(reqwest::get(&url).await.unwrap())
        .await
        .unwrap();

    let detail = parse_response("recipe", &response)
        .unwrap()
        .into_recipe()
        .unwrap();
    let expected: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(detail, expected);
    assert_eq!(detail.name(), Some("Easy French Onion Soup"));
}

#[test]
fn test_blocking_reqwest_response() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/v1/api/recipes")
        .with_status(500)
        .create();

    let url = format!("{}/v1/api/recipes", server.url());
    let response = RawResponse::from_blocking(reqwest::blocking::get(&url).unwrap()).unwrap();

    assert_eq!(response.status_code(), 500);
    let err = parse_response("search", &response).unwrap_err();
    assert!(matches!(err, SearchError::ServerError));
}
