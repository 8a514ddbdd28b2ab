mod common;

use common::{recipe, TestEnvironment};
use pretty_assertions::assert_eq;
use recipe_tracker::{StatusKind, View};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_login_stores_token_and_fetches_recipes() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc" })))
        .expect(1)
        .mount(&env.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/recipes"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([recipe("1", "Pancakes", "Grandma")])),
        )
        .expect(1)
        .mount(&env.server)
        .await;

    env.tracker.login("a@b.com", "secret1").await;

    assert_eq!(env.store.peek(), Some("abc".to_string()));
    assert_eq!(env.tracker.session().token(), Some("abc".to_string()));
    assert_eq!(env.tracker.view(), View::Recipes);
    assert_eq!(env.tracker.status(), None);
    assert_eq!(env.tracker.recipes().len(), 1);
    assert_eq!(env.tracker.recipes()[0].to_string(), "Pancakes - Grandma");
}

#[tokio::test]
async fn test_login_shows_server_error() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&env.server)
        .await;

    env.tracker.login("a@b.com", "wrong-pass").await;

    let status = env.tracker.status().expect("status should be set");
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "Invalid credentials");
    assert_eq!(env.tracker.view(), View::Login);
    assert_eq!(env.store.peek(), None);
    assert!(!env.tracker.session().is_authenticated());
}

#[tokio::test]
async fn test_login_falls_back_to_generic_message() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&env.server)
        .await;

    env.tracker.login("a@b.com", "secret1").await;

    assert_eq!(env.tracker.status().unwrap().text, "Login failed.");
}

#[tokio::test]
async fn test_login_with_malformed_response_is_not_fatal() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&env.server)
        .await;

    env.tracker.login("a@b.com", "secret1").await;

    assert_eq!(
        env.tracker.status().unwrap().text,
        "Login failed. Make sure the backend is running and reachable."
    );
    assert_eq!(env.tracker.view(), View::Login);
    assert!(!env.tracker.session().is_authenticated());
}

#[tokio::test]
async fn test_login_validation_blocks_request() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    env.tracker.login("   ", "secret1").await;
    assert_eq!(
        env.tracker.status().unwrap().text,
        "Email and password are required."
    );

    env.tracker.login("a@bcom", "secret1").await;
    assert_eq!(
        env.tracker.status().unwrap().text,
        "Please enter a valid email address."
    );

    assert_eq!(env.total_requests().await, 0);
}

#[tokio::test]
async fn test_register_short_password_sends_nothing() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;
    env.tracker.show_register();

    env.tracker.register("cook", "a@b.com", "12345").await;

    assert_eq!(
        env.tracker.status().unwrap().text,
        "Password must be at least 6 characters long."
    );
    assert_eq!(env.tracker.view(), View::Register);
    assert_eq!(env.total_requests().await, 0);
}

#[tokio::test]
async fn test_register_success_returns_to_login() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;
    env.tracker.show_register();

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "username": "cook",
            "email": "a@b.com",
            "password": "123456"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "created" })))
        .expect(1)
        .mount(&env.server)
        .await;

    env.tracker.register(" cook ", "a@b.com", "123456").await;

    let status = env.tracker.status().unwrap();
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.text, "Registration successful! Please login.");
    assert_eq!(env.tracker.view(), View::Login);
    assert!(!env.tracker.session().is_authenticated());
}

#[tokio::test]
async fn test_register_shows_server_error() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;
    env.tracker.show_register();

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "User already exists" })),
        )
        .mount(&env.server)
        .await;

    env.tracker.register("cook", "a@b.com", "123456").await;

    assert_eq!(env.tracker.status().unwrap().text, "User already exists");
    assert_eq!(env.tracker.view(), View::Register);
}

#[tokio::test]
async fn test_switching_views_clears_status() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    env.tracker.login("", "").await;
    assert!(env.tracker.status().is_some());

    env.tracker.show_register();
    assert_eq!(env.tracker.view(), View::Register);
    assert_eq!(env.tracker.status(), None);

    env.tracker.show_login();
    assert_eq!(env.tracker.view(), View::Login);
}

#[tokio::test]
async fn test_restore_uses_persisted_token() {
    common::init_test_logging();
    let env = TestEnvironment::logged_in("persisted", json!([recipe("7", "Stew", "Blog")])).await;

    assert_eq!(env.tracker.view(), View::Recipes);
    assert_eq!(env.tracker.recipes().len(), 1);
    assert_eq!(env.request_count("GET", "/recipes").await, 1);
}

#[tokio::test]
async fn test_restore_without_token_stays_on_login() {
    common::init_test_logging();
    let mut env = TestEnvironment::new().await;

    assert!(!env.tracker.restore().await);
    assert_eq!(env.tracker.view(), View::Login);
    assert_eq!(env.total_requests().await, 0);
}

#[tokio::test]
async fn test_logout_clears_token_everywhere() {
    common::init_test_logging();
    let mut env = TestEnvironment::logged_in("abc", json!([recipe("1", "Soup", "Book")])).await;

    env.tracker.logout();

    assert_eq!(env.store.peek(), None);
    assert!(!env.tracker.session().is_authenticated());
    assert_eq!(env.tracker.view(), View::Login);
    assert!(env.tracker.recipes().is_empty());
    assert_eq!(env.tracker.status(), None);
}
