#![allow(dead_code)]

use recipe_tracker::{ClientConfig, MemoryTokenStore, RecipeTracker};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A tracker wired to a mock recipe API and an in-memory token store.
pub struct TestEnvironment {
    pub server: MockServer,
    pub store: MemoryTokenStore,
    pub tracker: RecipeTracker<MemoryTokenStore>,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        Self::with_store(MemoryTokenStore::new()).await
    }

    pub async fn with_store(store: MemoryTokenStore) -> Self {
        let server = MockServer::start().await;
        let config = ClientConfig::new(&server.uri(), "unused-token-path")
            .expect("mock server URI is a valid URL");
        let tracker = RecipeTracker::new(&config, store.clone());

        Self {
            server,
            store,
            tracker,
        }
    }

    /// Restores a session for `token` whose first list fetch returns
    /// `recipes`. Later fetches fall through to mocks mounted afterwards.
    pub async fn logged_in(token: &str, recipes: Value) -> Self {
        let mut env = Self::with_store(MemoryTokenStore::with_token(token)).await;

        Mock::given(method("GET"))
            .and(path("/recipes"))
            .and(header("Authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipes))
            .up_to_n_times(1)
            .mount(&env.server)
            .await;

        assert!(env.tracker.restore().await, "token should be restored");
        env
    }

    /// Serves `recipes` for every subsequent list fetch.
    pub async fn serve_list(&self, recipes: Value) {
        Mock::given(method("GET"))
            .and(path("/recipes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipes))
            .mount(&self.server)
            .await;
    }

    pub async fn request_count(&self, verb: &str, route: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.method.as_str() == verb && request.url.path() == route)
            .count()
    }

    pub async fn total_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .len()
    }
}

pub fn recipe(id: &str, name: &str, source: &str) -> Value {
    json!({ "_id": id, "name": name, "source": source })
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
