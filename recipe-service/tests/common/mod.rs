use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use recipe_service::config::TokenPolicy;
use recipe_service::credential::errors::AuthError;
use recipe_service::credential::models::Credential;
use recipe_service::credential::models::Username;
use recipe_service::credential::ports::CredentialRepository;
use recipe_service::credential::service::AuthService;
use recipe_service::inbound::http::router::create_router;
use recipe_service::outbound::cache::DisabledRecipeCache;
use recipe_service::recipe::errors::RecipeError;
use recipe_service::recipe::models::Recipe;
use recipe_service::recipe::models::RecipeId;
use recipe_service::recipe::ports::RecipeRepository;
use recipe_service::recipe::service::RecipeService;
use serde_json::json;
use tokio::sync::RwLock;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Authenticator,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator =
            Arc::new(Authenticator::new(TEST_SECRET).expect("Failed to create authenticator"));

        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryCredentialRepository::default()),
            Arc::clone(&authenticator),
            TokenPolicy::default(),
        ));
        let recipe_service = Arc::new(RecipeService::new(
            Arc::new(InMemoryRecipeRepository::default()),
            Arc::new(DisabledRecipeCache),
        ));

        let router = create_router(auth_service, recipe_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator: Authenticator::new(TEST_SECRET).expect("Failed to create authenticator"),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.put(self.url(path)).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(self.url(path)).bearer_auth(token)
    }

    /// Register `username` and return a freshly issued sign-in token.
    pub async fn sign_up_and_sign_in(&self, username: &str, password: &str) -> String {
        let credentials = json!({ "username": username, "password": password });

        let response = self
            .post("/signup")
            .json(&credentials)
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "sign-up failed");

        let response = self
            .post("/signin")
            .json(&credentials)
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "sign-in failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("token missing from sign-in response")
            .to_string()
    }

    /// Create a recipe and return its id.
    pub async fn create_recipe(&self, token: &str, recipe: serde_json::Value) -> String {
        let response = self
            .post_authenticated("/recipes", token)
            .json(&recipe)
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "recipe creation failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_str().expect("id missing").to_string()
    }
}

#[derive(Default)]
pub struct InMemoryCredentialRepository {
    credentials: RwLock<HashMap<String, Credential>>,
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn create(&self, credential: Credential) -> Result<Credential, AuthError> {
        let mut credentials = self.credentials.write().await;
        let key = credential.username.as_str().to_string();

        if credentials.contains_key(&key) {
            return Err(AuthError::UsernameAlreadyExists(key));
        }

        credentials.insert(key, credential.clone());
        Ok(credential)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Credential>, AuthError> {
        Ok(self.credentials.read().await.get(username.as_str()).cloned())
    }
}

/// Insertion-ordered recipe store.
#[derive(Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<Vec<Recipe>>,
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, RecipeError> {
        self.recipes.write().await.push(recipe.clone());
        Ok(recipe)
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeError> {
        Ok(self.recipes.read().await.iter().find(|r| r.id == *id).cloned())
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, RecipeError> {
        let mut recipes = self.recipes.write().await;
        let slot = recipes
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or(RecipeError::NotFound(recipe.id))?;

        *slot = recipe.clone();
        Ok(recipe)
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), RecipeError> {
        let mut recipes = self.recipes.write().await;
        let before = recipes.len();
        recipes.retain(|r| r.id != *id);

        if recipes.len() == before {
            return Err(RecipeError::NotFound(*id));
        }
        Ok(())
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .filter(|r| r.has_tag(tag))
            .cloned()
            .collect())
    }
}
