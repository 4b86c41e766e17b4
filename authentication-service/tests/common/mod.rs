#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::KeyLoader;
use auth::PasswordHasher;
use auth::TokenIssuer;
use authentication_service::domain::user::models::User;
use authentication_service::domain::user::ports::UserRepository;
use authentication_service::domain::user::service::AuthenticationService;
use authentication_service::inbound::http::router::create_router;
use authentication_service::outbound::authentication::TokenAuthenticator;
use authentication_service::user::errors::UserError;
use jsonwebtoken::decode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../auth/tests/fixtures");

/// Test application that spawns a real server
pub struct TestApp<UR = InMemoryUserRepository> {
    pub address: String,
    pub port: u16,
    pub users: Arc<UR>,
    pub api_client: reqwest::Client,
}

impl TestApp<InMemoryUserRepository> {
    /// Spawn the application backed by an empty in-memory user store
    pub async fn spawn() -> Self {
        Self::spawn_with(
            Arc::new(InMemoryUserRepository::default()),
            Duration::from_secs(10),
        )
        .await
    }
}

impl<UR: UserRepository> TestApp<UR> {
    /// Spawn the application in a background task with the given store and timeout
    pub async fn spawn_with(users: Arc<UR>, request_timeout: Duration) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let signing_key = KeyLoader::load_private_key(format!("{}/key.pem", FIXTURES))
            .expect("Failed to load signing key fixture");

        // Cheap work factor keeps the suite fast
        let password_hasher =
            PasswordHasher::with_params(8 * 1024, 1, 1).expect("Invalid hashing parameters");

        let authenticator = Arc::new(TokenAuthenticator::new(Arc::new(Authenticator::new(
            password_hasher,
            TokenIssuer::new(Arc::new(signing_key)),
        ))));

        let auth_service = Arc::new(AuthenticationService::new(
            Arc::clone(&users),
            authenticator,
        ));

        let router = create_router(auth_service, request_timeout);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            users,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to submit the signup form
    pub async fn signup(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/authentication/signup")
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Helper to submit the login form
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/authentication/login")
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Verify a token against the fixture public key and return its claims
pub fn verify_token(token: &str) -> Claims {
    let public_pem =
        std::fs::read(format!("{}/public.pem", FIXTURES)).expect("Failed to read public key");
    let decoding_key = DecodingKey::from_rsa_pem(&public_pem).expect("Invalid public key");

    let mut validation = Validation::new(Algorithm::RS256);
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &decoding_key, &validation)
        .expect("Failed to verify token")
        .claims
}

/// User store kept in memory, keyed by email
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn get(&self, email: &str) -> Option<User> {
        self.users.lock().unwrap().get(email).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.email) {
            return Err(UserError::EmailAlreadyExists(user.email));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }
}

/// User store whose every call fails as if the database were down
pub struct UnavailableUserRepository;

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn create(&self, _user: User) -> Result<User, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }
}

/// User store that answers lookups only after a delay
pub struct SlowUserRepository {
    pub delay: Duration,
}

#[async_trait]
impl UserRepository for SlowUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        tokio::time::sleep(self.delay).await;
        Ok(user)
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserError> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }
}
