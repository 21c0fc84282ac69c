//! End-to-end tests against a live server and a real data file.

use recipe_sdk::{NewRecipe, SdkError};
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_fresh_store_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("recipes.json");
    let service = common::start_service(&data_file).await;

    let recipes = service.client().list_recipes().await.unwrap();
    assert!(recipes.is_empty());
    assert!(!data_file.exists(), "listing must not create the file");

    service.stop().await;
}

#[tokio::test]
async fn test_create_tea() {
    let dir = tempfile::tempdir().unwrap();
    let service = common::start_service(&dir.path().join("recipes.json")).await;

    let tea = NewRecipe::new("Tea", &["water", "tea leaf"], "Boil and steep");
    let created = service.client().create_recipe(&tea).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.title, "Tea");
    assert_eq!(created.ingredients, vec!["water", "tea leaf"]);
    assert_eq!(created.instructions, serde_json::json!("Boil and steep"));
    assert_eq!(created.cook_time, "");
    assert_eq!(created.difficulty, "medium");

    service.stop().await;
}

#[tokio::test]
async fn test_create_returns_201() {
    let dir = tempfile::tempdir().unwrap();
    let service = common::start_service(&dir.path().join("recipes.json")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/recipes", service.base_url()))
        .json(&serde_json::json!({
            "title": "Tea",
            "ingredients": ["water", "tea leaf"],
            "instructions": "Boil and steep"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    service.stop().await;
}

#[tokio::test]
async fn test_empty_fields_rejected_and_nothing_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("recipes.json");
    let service = common::start_service(&data_file).await;
    let client = service.client();

    let empty = NewRecipe {
        title: Some(String::new()),
        ingredients: Some(vec![]),
        instructions: Some(serde_json::json!("")),
        ..NewRecipe::default()
    };
    let err = client.create_recipe(&empty).await.unwrap_err();
    match err {
        SdkError::Status { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message, "Title, ingredients, and instructions are required.");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(client.list_recipes().await.unwrap().is_empty());
    assert!(!data_file.exists());

    service.stop().await;
}

#[tokio::test]
async fn test_sequential_creates_listed_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let service = common::start_service(&dir.path().join("recipes.json")).await;
    let client = service.client();

    let first = client
        .create_recipe(&NewRecipe::new("Tea", &["water", "tea leaf"], "Boil and steep"))
        .await
        .unwrap();
    let mut toast = NewRecipe::new("Toast", &["bread"], "");
    toast.instructions = Some(serde_json::json!(["Slice", "Toast"]));
    toast.cook_time = Some("3 min".into());
    toast.difficulty = Some("easy".into());
    let second = client.create_recipe(&toast).await.unwrap();

    assert_ne!(first.id, second.id);
    let listed = client.list_recipes().await.unwrap();
    assert_eq!(listed, vec![first.clone(), second]);

    // Reads are stable.
    assert_eq!(client.list_recipes().await.unwrap(), listed);

    service.stop().await;
}

#[tokio::test]
async fn test_records_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("nested").join("recipes.json");

    let service = common::start_service(&data_file).await;
    let created = service
        .client()
        .create_recipe(&NewRecipe::new("Soup", &["stock", "salt"], "Simmer"))
        .await
        .unwrap();
    service.stop().await;

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&data_file).unwrap()).unwrap();
    assert_eq!(stored[0]["id"], created.id);
    assert_eq!(stored[0]["cookTime"], "");

    let restarted = common::start_service(&data_file).await;
    assert_eq!(restarted.client().list_recipes().await.unwrap(), vec![created]);
    restarted.stop().await;
}

#[tokio::test]
async fn test_corrupt_file_reports_storage_errors() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("recipes.json");
    std::fs::write(&data_file, "this is not json").unwrap();
    let service = common::start_service(&data_file).await;
    let client = service.client();

    match client.list_recipes().await.unwrap_err() {
        SdkError::Status { status, message } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message, "Could not read recipes.");
        }
        other => panic!("unexpected error: {other}"),
    }

    match client
        .create_recipe(&NewRecipe::new("Tea", &["water"], "Boil"))
        .await
        .unwrap_err()
    {
        SdkError::Status { status, message } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message, "Could not save recipe.");
        }
        other => panic!("unexpected error: {other}"),
    }

    // The corrupt file is left as it was.
    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "this is not json");

    service.stop().await;
}
