mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{spawn_app, spawn_app_without_llm, spawn_failing_gemini_stub, spawn_gemini_stub};

#[tokio::test]
async fn recipe_is_parsed_from_the_generated_reply() {
    let gemini = spawn_gemini_stub(
        "Recipe Name: Spinach Omelette\n\
         Ingredients: eggs, spinach, salt\n\
         Instructions:\n\
         1. Whisk the eggs.\n\
         \n\
         2. Fold in the spinach.",
    )
    .await;
    let app = spawn_app(gemini).await;

    let response = app
        .server
        .post("/api/generate-recipe")
        .json(&json!({ "inventory_items": ["eggs", "spinach"] }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "name": "Spinach Omelette",
        "ingredients": "eggs, spinach, salt",
        "instructions": "1. Whisk the eggs.\n2. Fold in the spinach."
    }));
}

#[tokio::test]
async fn unlabelled_reply_falls_back_to_defaults() {
    let gemini = spawn_gemini_stub("Just boil everything.").await;
    let app = spawn_app(gemini).await;

    let body: Value = app
        .server
        .post("/api/generate-recipe")
        .json(&json!({ "inventory_items": ["potatoes"] }))
        .await
        .json();

    assert_eq!(body["name"], "Generated Recipe");
    assert_eq!(body["ingredients"], "Could not parse ingredients.");
    assert_eq!(body["instructions"], "Could not parse instructions.");
}

#[tokio::test]
async fn empty_inventory_yields_the_placeholder() {
    let app = spawn_app_without_llm().await;

    let response = app
        .server
        .post("/api/generate-recipe")
        .json(&json!({ "inventory_items": [] }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "name": "No Items Provided",
        "ingredients": "No items in your inventory to generate a recipe.",
        "instructions": "Please add some food items to your inventory first!"
    }));
}

#[tokio::test]
async fn null_inventory_yields_the_placeholder() {
    let app = spawn_app_without_llm().await;

    let response = app
        .server
        .post("/api/generate-recipe")
        .json(&json!({ "inventory_items": null }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "No Items Provided");
}

#[tokio::test]
async fn missing_inventory_key_is_rejected() {
    let app = spawn_app_without_llm().await;

    let response = app
        .server
        .post("/api/generate-recipe")
        .json(&json!({ "items": ["eggs"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No inventory items provided");
}

#[tokio::test]
async fn generation_failure_answers_with_a_recipe_shaped_500() {
    let gemini = spawn_failing_gemini_stub().await;
    let app = spawn_app(gemini).await;

    let response = app
        .server
        .post("/api/generate-recipe")
        .json(&json!({ "inventory_items": ["eggs"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["name"], "Recipe Generation Failed");
    assert_eq!(body["ingredients"], "Please try again later.");
    let instructions = body["instructions"].as_str().unwrap();
    assert!(instructions.starts_with("An error occurred: LLM API returned error: 500"));
    assert!(instructions.ends_with("quota exhausted"));
}
