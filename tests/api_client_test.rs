// ABOUTME: Integration tests for the recipe REST client against a mock backend
// ABOUTME: Covers decoding, search payloads, server error messages, and transport failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{api_for, pizza, selection};
use recipe_kitchen::api::{ApiError, HttpRecipeApi, RecipeApi, UNKNOWN_ERROR};
use recipe_kitchen::config::ClientConfig;
use recipe_kitchen::errors::{AppError, ErrorCode};
use serde_json::{json, Value};
use std::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_decodes_both_ingredient_formats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "pizza",
                "name": "pizza",
                "type": "main",
                "ingredients": {"tomato": {"amount": 2, "unit": ""}, "cheese": {"amount": "200", "unit": "g"}},
                "steps": ["1. Bake"],
                "time": ["15 min", "30 min"],
                "servings": 4
            },
            {
                "id": 7,
                "name": "toast",
                "ingredients": ["bread", "butter"],
                "time": "5 min"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let recipes = api_for(&server).list_recipes().await.unwrap();

    assert_eq!(recipes.len(), 2);
    let pizza = &recipes[0];
    assert_eq!(
        pizza.ingredients.names().collect::<Vec<_>>(),
        ["tomato", "cheese"]
    );
    assert_eq!(pizza.ingredients.iter().next().unwrap().amount, "2");

    let toast = &recipes[1];
    assert_eq!(toast.id, "7");
    assert_eq!(toast.recipe_type, "main");
    assert!(toast.ingredients.contains_ignore_case("butter"));
    assert_eq!(toast.time.prep.as_deref(), Some("5 min"));
    assert_eq!(toast.time.total.as_deref(), Some("5 min"));
    assert_eq!(toast.servings, None);
}

#[tokio::test]
async fn test_search_posts_selection_and_ignores_extra_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipes": [pizza()],
            "selected_items": ["tomato", "cheese"],
            "count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let found = api_for(&server)
        .search_recipes(&selection(&["tomato", "cheese"]))
        .await
        .unwrap();
    assert_eq!(found, vec![pizza()]);

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({"items": ["tomato", "cheese"]}));
}

#[tokio::test]
async fn test_search_without_recipes_field_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .mount(&server)
        .await;

    let found = api_for(&server)
        .search_recipes(&selection(&["salt"]))
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_missing_recipe_reports_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes/unicorn_pie"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Recipe not found"})),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).get_recipe("unicorn_pie").await.unwrap_err();
    match &err {
        ApiError::Status { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Recipe not found");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
    assert!(!err.is_transport());

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_error_without_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/pizza"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = api_for(&server).delete_recipe("pizza").await.unwrap_err();
    assert_eq!(err.user_message(), UNKNOWN_ERROR);
    assert_eq!(err.alert("deleting recipe"), "Error deleting recipe: Unknown error");
}

#[tokio::test]
async fn test_create_and_update_ignore_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Recipe created successfully",
            "recipe": pizza()
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/recipes/pizza"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.create_recipe(&pizza()).await.unwrap();
    api.update_recipe("pizza", &pizza()).await.unwrap();
}

#[tokio::test]
async fn test_health_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "message": "Recipe API is running"
        })))
        .mount(&server)
        .await;

    let health = api_for(&server).health().await.unwrap();
    assert!(health.is_ok());
    assert_eq!(health.message, "Recipe API is running");
}

#[tokio::test]
async fn test_null_optional_fields_do_not_fail_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"id": "soup", "name": "soup", "type": null, "materials": null, "steps": null},
                {"id": "salad", "name": "salad", "ingredients": ["lettuce"]}]"#,
        ))
        .mount(&server)
        .await;

    let recipes = api_for(&server).list_recipes().await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].recipe_type, "main");
    assert!(recipes[0].materials.is_empty());
    assert!(recipes[0].steps.is_empty());
}

#[tokio::test]
async fn test_undecodable_list_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).list_recipes().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.alert("loading recipes"), "Error loading recipes. Please try again.");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    common::init_test_logging();
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::default()
        .with_api_base(&format!("http://127.0.0.1:{port}/api"))
        .unwrap();

    let api = HttpRecipeApi::new(&config).unwrap();
    let err = api.list_recipes().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(
        err.alert("saving recipe"),
        "Error saving recipe. Please try again."
    );
}

#[test]
fn test_base_url_has_no_trailing_slash() {
    let config = ClientConfig::default()
        .with_api_base("http://recipes.local:5001/api/")
        .unwrap();
    let api = HttpRecipeApi::new(&config).unwrap();
    assert_eq!(api.base_url(), "http://recipes.local:5001/api");
}
