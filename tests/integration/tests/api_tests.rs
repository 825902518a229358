//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, Session, TestServer,
};
use reqwest::StatusCode;

/// Sign up a fresh user and return their session
async fn signup(server: &TestServer) -> (Session, AuthForm) {
    let session = server.session().expect("Failed to create session");
    let form = AuthForm::unique();
    let response = session.post_form("/signup", &form).await.unwrap();
    assert!(
        response.status().is_success(),
        "Signup failed: {}",
        response.status()
    );
    (session, form)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();
    let response = session.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();
    let response = session.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup_starts_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, _) = signup(&server).await;

    // The session cookie set by signup authenticates API calls
    let response = session.get("/api/user_info").await.unwrap();
    let info: UserInfoBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(info.trust_score, 100);
    assert!(!info.is_matched);
    assert!(info.matched_with.is_none());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, form) = signup(&server).await;

    // The taken username re-renders the auth page, no error status
    let other = server.session().unwrap();
    let response = other.post_form("/signup", &form).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Username already exists"));

    // And no session was started for the rejected signup
    let response = other.get("/api/user_info").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_and_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, form) = signup(&server).await;

    // Fresh session, correct credentials
    let session = server.session().unwrap();
    let response = session.post_form("/login", &form).await.unwrap();
    assert!(response.status().is_success());
    let response = session.get("/api/user_info").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Wrong password gets the auth page back with the generic error line
    let session = server.session().unwrap();
    let mut wrong = form.clone();
    wrong.password = "not-the-password".to_string();
    let response = session.post_form("/login", &wrong).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Invalid credentials"));

    // The failed login did not start a session
    let response = session.get("/api/user_info").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_clears_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, _) = signup(&server).await;

    let response = session.get("/logout").await.unwrap();
    assert!(response.status().is_success());

    let response = session.get("/api/user_info").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Authorization Tests
// ============================================================================

#[tokio::test]
async fn test_state_changes_require_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let anon = server.session().unwrap();

    let response = anon
        .post_json("/api/checkin", &CheckInBody::at(0.0, 0.0))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = anon.post("/api/checkout").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = anon
        .post_json("/api/send_request", &SendRequestBody { receiver_id: 1 })
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = anon
        .post_json("/api/respond_request", &RespondBody::accept(1))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_read_endpoints_degrade_for_anonymous() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let anon = server.session().unwrap();

    let response = anon.get("/api/nearby?lat=0.0&lon=0.0").await.unwrap();
    let nearby: Vec<NearbyEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(nearby.is_empty());

    let response = anon.get("/api/match_status").await.unwrap();
    let status: MatchStatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.matched);
    assert!(status.partner.is_none());

    let response = anon.get("/api/check_requests").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["type"], "none");
}

// ============================================================================
// Matchmaking Flow Tests
// ============================================================================

#[tokio::test]
async fn test_full_match_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, alice_form) = signup(&server).await;
    let (bob, bob_form) = signup(&server).await;
    let (lat, lon) = unique_origin();

    // Both go live a few hundred meters apart
    let response = alice
        .post_json("/api/checkin", &CheckInBody::at(lat, lon))
        .await
        .unwrap();
    let status: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "live");

    let response = bob
        .post_json("/api/checkin", &CheckInBody::at(lat + 0.003, lon))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Alice discovers Bob
    let response = alice
        .get(&format!("/api/nearby?lat={lat}&lon={lon}"))
        .await
        .unwrap();
    let nearby: Vec<NearbyEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    let bob_entry = nearby
        .iter()
        .find(|e| e.username == bob_form.username)
        .expect("Bob should be nearby");
    assert_eq!(bob_entry.trust_score, 100);
    let bob_id = bob_entry.id;

    // Alice sends a request, Bob sees it on his next poll
    let response = alice
        .post_json("/api/send_request", &SendRequestBody { receiver_id: bob_id })
        .await
        .unwrap();
    let status: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "sent");

    let response = bob.get("/api/check_requests").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["type"], "incoming");
    assert_eq!(body["data"]["username"], alice_form.username.as_str());
    let request_id = body["data"]["id"].as_i64().unwrap();

    // Bob accepts
    let response = bob
        .post_json("/api/respond_request", &RespondBody::accept(request_id))
        .await
        .unwrap();
    let status: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "accept");

    // Both sides see the match with the other's name
    let response = alice.get("/api/match_status").await.unwrap();
    let status: MatchStatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.matched);
    assert_eq!(status.partner.as_deref(), Some(bob_form.username.as_str()));

    let response = bob.get("/api/match_status").await.unwrap();
    let status: MatchStatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.matched);
    assert_eq!(status.partner.as_deref(), Some(alice_form.username.as_str()));

    // Accepting cleared both check-ins
    let response = alice
        .get(&format!("/api/nearby?lat={lat}&lon={lon}"))
        .await
        .unwrap();
    let nearby: Vec<NearbyEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!nearby.iter().any(|e| e.username == bob_form.username));
    assert!(!nearby.iter().any(|e| e.username == alice_form.username));
}

#[tokio::test]
async fn test_duplicate_request_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, _) = signup(&server).await;
    let (bob, bob_form) = signup(&server).await;
    let (lat, lon) = unique_origin();

    let response = bob
        .post_json("/api/checkin", &CheckInBody::at(lat, lon))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = alice
        .get(&format!("/api/nearby?lat={lat}&lon={lon}"))
        .await
        .unwrap();
    let nearby: Vec<NearbyEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    let bob_id = nearby
        .iter()
        .find(|e| e.username == bob_form.username)
        .expect("Bob should be nearby")
        .id;

    let response = alice
        .post_json("/api/send_request", &SendRequestBody { receiver_id: bob_id })
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = alice
        .post_json("/api/send_request", &SendRequestBody { receiver_id: bob_id })
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_respond_twice_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, _) = signup(&server).await;
    let (bob, bob_form) = signup(&server).await;
    let (lat, lon) = unique_origin();

    let response = bob
        .post_json("/api/checkin", &CheckInBody::at(lat, lon))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = alice
        .get(&format!("/api/nearby?lat={lat}&lon={lon}"))
        .await
        .unwrap();
    let nearby: Vec<NearbyEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    let bob_id = nearby
        .iter()
        .find(|e| e.username == bob_form.username)
        .expect("Bob should be nearby")
        .id;

    let response = alice
        .post_json("/api/send_request", &SendRequestBody { receiver_id: bob_id })
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = bob.get("/api/check_requests").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let request_id = body["data"]["id"].as_i64().unwrap();

    let response = bob
        .post_json("/api/respond_request", &RespondBody::decline(request_id))
        .await
        .unwrap();
    let status: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "decline");

    // The request is settled; a second answer of either kind is a conflict
    let response = bob
        .post_json("/api/respond_request", &RespondBody::accept(request_id))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_checkout_hides_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, _) = signup(&server).await;
    let (bob, bob_form) = signup(&server).await;
    let (lat, lon) = unique_origin();

    let response = bob
        .post_json("/api/checkin", &CheckInBody::at(lat, lon))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = bob.post("/api/checkout").await.unwrap();
    let status: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "off");

    let response = alice
        .get(&format!("/api/nearby?lat={lat}&lon={lon}"))
        .await
        .unwrap();
    let nearby: Vec<NearbyEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!nearby.iter().any(|e| e.username == bob_form.username));
}
