//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and return their credentials and token
async fn register_user(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Create a feature owned by the given token's user
async fn create_feature(server: &TestServer, token: &str) -> FeatureResponse {
    let request = CreateFeatureRequest::unique();
    let response = server
        .post_auth("/api/features", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    assert!(!auth.access_token.is_empty());
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.user_id.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        email: format!("weak{}@example.com", unique_suffix()),
        password: "alllowercase1".to_string(),
    };

    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, registered) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user_id, registered.user_id);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest {
        email: register_req.email,
        password: "WrongPass999".to_string(),
    };
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "TestPass123".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Feature Tests
// ============================================================================

#[tokio::test]
async fn test_create_feature() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CreateFeatureRequest::unique();
    let response = server
        .post_auth("/api/features", &auth.access_token, &request)
        .await
        .unwrap();
    let feature: FeatureResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(feature.title, request.title);
    assert_eq!(feature.description, request.description);
    assert_eq!(feature.owner_id, auth.user_id);
    assert_eq!(feature.vote_count, 0);
    assert!(!feature.voted);
}

#[tokio::test]
async fn test_create_feature_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateFeatureRequest::unique();

    let response = server.post("/api/features", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_feature_invalid_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateFeatureRequest::unique();

    let response = server
        .post_auth("/api/features", "not-a-real-token", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_feature_empty_title() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CreateFeatureRequest {
        title: String::new(),
        description: "Valid description".to_string(),
    };
    let response = server
        .post_auth("/api/features", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_feature() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let created = create_feature(&server, &auth.access_token).await;

    let response = server
        .get_auth(&format!("/api/features/{}", created.id), &auth.access_token)
        .await
        .unwrap();
    let feature: FeatureResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(feature.id, created.id);
    assert_eq!(feature.title, created.title);
}

#[tokio::test]
async fn test_get_feature_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/api/features/999999999999999", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_features() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let created = create_feature(&server, &auth.access_token).await;

    let response = server
        .get_auth("/api/features?limit=100", &auth.access_token)
        .await
        .unwrap();
    let list: FeatureListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(list.features.iter().any(|f| f.id == created.id));
}

#[tokio::test]
async fn test_list_features_invalid_sort() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/api/features?sort_by=popularity", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_features_rejects_trending_sort() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    // Trending has its own endpoint and is not a listing sort mode
    let response = server
        .get_auth("/api/features?sort_by=trending", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_features_invalid_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .get_auth("/api/features?page=0", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_cast_vote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let feature = create_feature(&server, &auth.access_token).await;

    let request = CastVoteRequest {
        feature_id: feature.id.clone(),
    };
    let response = server
        .post_auth("/api/votes", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Vote count and voted flag reflect the new vote
    let response = server
        .get_auth(&format!("/api/features/{}", feature.id), &auth.access_token)
        .await
        .unwrap();
    let fetched: FeatureResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.vote_count, 1);
    assert!(fetched.voted);
}

#[tokio::test]
async fn test_cast_vote_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let feature = create_feature(&server, &auth.access_token).await;

    let request = CastVoteRequest {
        feature_id: feature.id.clone(),
    };

    // Voting twice succeeds both times but only counts once
    for _ in 0..2 {
        let response = server
            .post_auth("/api/votes", &auth.access_token, &request)
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let response = server
        .get_auth(&format!("/api/features/{}", feature.id), &auth.access_token)
        .await
        .unwrap();
    let fetched: FeatureResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.vote_count, 1);
}

#[tokio::test]
async fn test_cast_vote_unknown_feature() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CastVoteRequest {
        feature_id: "999999999999999".to_string(),
    };
    let response = server
        .post_auth("/api/votes", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_cast_vote_malformed_feature_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CastVoteRequest {
        feature_id: "not-a-snowflake".to_string(),
    };
    let response = server
        .post_auth("/api/votes", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_retract_vote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let feature = create_feature(&server, &auth.access_token).await;

    let request = CastVoteRequest {
        feature_id: feature.id.clone(),
    };
    server
        .post_auth("/api/votes", &auth.access_token, &request)
        .await
        .unwrap();

    // Retract
    let response = server
        .delete_auth(&format!("/api/votes/{}", feature.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Retracting again is a no-op, still 204
    let response = server
        .delete_auth(&format!("/api/votes/{}", feature.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/features/{}", feature.id), &auth.access_token)
        .await
        .unwrap();
    let fetched: FeatureResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.vote_count, 0);
    assert!(!fetched.voted);
}

#[tokio::test]
async fn test_voted_flag_is_per_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_user(&server).await;
    let (_, other) = register_user(&server).await;
    let feature = create_feature(&server, &owner.access_token).await;

    let request = CastVoteRequest {
        feature_id: feature.id.clone(),
    };
    server
        .post_auth("/api/votes", &owner.access_token, &request)
        .await
        .unwrap();

    // The voter sees voted=true
    let response = server
        .get_auth(&format!("/api/features/{}", feature.id), &owner.access_token)
        .await
        .unwrap();
    let as_voter: FeatureResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(as_voter.voted);

    // Another user sees the same count but voted=false
    let response = server
        .get_auth(&format!("/api/features/{}", feature.id), &other.access_token)
        .await
        .unwrap();
    let as_other: FeatureResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(as_other.vote_count, 1);
    assert!(!as_other.voted);
}

// ============================================================================
// Ranking Tests
// ============================================================================

#[tokio::test]
async fn test_votes_sort_orders_by_count() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let (_, second_voter) = register_user(&server).await;

    let low = create_feature(&server, &auth.access_token).await;
    let high = create_feature(&server, &auth.access_token).await;

    // Two votes for `high`, none for `low`
    for token in [&auth.access_token, &second_voter.access_token] {
        let request = CastVoteRequest {
            feature_id: high.id.clone(),
        };
        server.post_auth("/api/votes", token, &request).await.unwrap();
    }

    let response = server
        .get_auth("/api/features?sort_by=votes&limit=100", &auth.access_token)
        .await
        .unwrap();
    let list: FeatureListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let high_pos = list.features.iter().position(|f| f.id == high.id);
    let low_pos = list.features.iter().position(|f| f.id == low.id);
    match (high_pos, low_pos) {
        (Some(h), Some(l)) => assert!(h < l, "higher-voted feature should rank first"),
        _ => panic!("both features should appear in the listing"),
    }
}

#[tokio::test]
async fn test_date_sort_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let older = create_feature(&server, &auth.access_token).await;
    let newer = create_feature(&server, &auth.access_token).await;

    let response = server
        .get_auth("/api/features?sort_by=date&limit=100", &auth.access_token)
        .await
        .unwrap();
    let list: FeatureListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let newer_pos = list.features.iter().position(|f| f.id == newer.id);
    let older_pos = list.features.iter().position(|f| f.id == older.id);
    match (newer_pos, older_pos) {
        (Some(n), Some(o)) => assert!(n < o, "newer feature should rank first"),
        _ => panic!("both features should appear in the listing"),
    }
}

#[tokio::test]
async fn test_trending_leaderboard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;
    let feature = create_feature(&server, &auth.access_token).await;

    let request = CastVoteRequest {
        feature_id: feature.id.clone(),
    };
    server
        .post_auth("/api/votes", &auth.access_token, &request)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/trending", &auth.access_token)
        .await
        .unwrap();
    let list: FeatureListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Fixed-size leaderboard
    assert!(list.features.len() <= 10);
    // A freshly created feature with a vote has the strongest momentum
    assert!(list.features.iter().any(|f| f.id == feature.id));
}

#[tokio::test]
async fn test_trending_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/trending").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}
