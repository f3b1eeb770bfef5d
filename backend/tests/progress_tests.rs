// tests/progress_tests.rs

use codelab_backend::{
    config::Config,
    routes,
    state::AppState,
    store::{ContentStore, seed},
};

async fn spawn_app() -> String {
    let catalog = ContentStore::from_seed(seed::builtin()).expect("Failed to build catalog");
    let config = Config {
        learner_username: "progress_tester".to_string(),
        learner_password: "password123".to_string(),
        ..Config::default()
    };

    let state = AppState::new(catalog, config);
    let app = routes::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

#[tokio::test]
async fn test_progress_flow() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // 1. Fresh learner has no progress
    let initial: serde_json::Value = client
        .get(&format!("{}/api/user/progress", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(initial["progress"], serde_json::json!({}));

    // 2. Record an attempt, then a completion for the same exercise
    for (completed, score) in [(false, 40), (true, 100)] {
        let resp = client
            .post(&format!("{}/api/user/progress", address))
            .json(&serde_json::json!({
                "lessonId": 1, "exerciseId": 1, "completed": completed, "score": score
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["success"], true);
    }

    // 3. Second exercise
    client
        .post(&format!("{}/api/user/progress", address))
        .json(&serde_json::json!({
            "lessonId": 2, "exerciseId": 2, "completed": true, "score": 80
        }))
        .send()
        .await
        .unwrap();

    // 4. Progress is merged per exercise
    let progress: serde_json::Value = client
        .get(&format!("{}/api/user/progress", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let map = progress["progress"].as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["1-1"]["completed"], true);
    assert_eq!(map["1-1"]["score"], 100);
    assert!(map["1-1"]["updatedAt"].is_string());
    assert_eq!(map["2-2"]["score"], 80);
}

#[tokio::test]
async fn test_progress_rejects_bad_payloads() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Score out of range
    let resp = client
        .post(&format!("{}/api/user/progress", address))
        .json(&serde_json::json!({
            "lessonId": 1, "exerciseId": 1, "completed": true, "score": 101
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    // Unknown exercise
    let resp = client
        .post(&format!("{}/api/user/progress", address))
        .json(&serde_json::json!({
            "lessonId": 1, "exerciseId": 99, "completed": true, "score": 100
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    // Exercise from another lesson
    let resp = client
        .post(&format!("{}/api/user/progress", address))
        .json(&serde_json::json!({
            "lessonId": 1, "exerciseId": 3, "completed": true, "score": 100
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn test_concurrent_progress_updates() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for (lesson_id, exercise_id) in [(1, 1), (2, 2), (3, 3), (4, 4)] {
        let client = client.clone();
        let url = format!("{}/api/user/progress", address);
        handles.push(tokio::spawn(async move {
            client
                .post(&url)
                .json(&serde_json::json!({
                    "lessonId": lesson_id, "exerciseId": exercise_id,
                    "completed": true, "score": 100
                }))
                .send()
                .await
                .unwrap()
                .status()
                .as_u16()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), 200);
    }

    let progress: serde_json::Value = client
        .get(&format!("{}/api/user/progress", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(progress["progress"].as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn test_progress_missing_fields_is_json_400() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(&format!("{}/api/user/progress", address))
        .json(&serde_json::json!({ "lessonId": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}
