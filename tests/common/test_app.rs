use resumedesk::{
    AppState, DbPool, app,
    config::{Config, DatabaseConfig, JwtConfig, ServerConfig},
    database,
};
use reqwest::Client;
use uuid::Uuid;

/// JWT secret used by every test app, so tests can decode issued tokens.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Generate a unique test email to avoid conflicts across tests
pub fn generate_test_email() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("test_{}@example.com", timestamp)
}

/// HTTP test application wrapper
///
/// Boots the real router on a random port against an isolated in-memory
/// SQLite database. Each test gets its own server instance, so tests run in
/// parallel without sharing state.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// HTTP client for making requests
    pub client: Client,
    /// Database pool, for tests that need to reach under the HTTP surface
    pub pool: DbPool,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                path: ":memory:".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: TEST_JWT_SECRET.to_string().into(),
                expiration_days: 7,
            },
        };

        let pool = database::init_pool(&config.database)
            .await
            .expect("Failed to initialize test database");

        let state = AppState::new(pool.clone(), config);
        let router = app(state);

        // Bind to port 0 so the OS assigns a free port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            address,
            client,
            pool,
        }
    }

    /// Get the full URL for an API endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Registers a fresh user and returns (token, user id, email).
    pub async fn register_user(&self) -> (String, Uuid, String) {
        let email = generate_test_email();
        let response = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&serde_json::json!({
                "name": "Test User",
                "email": email,
                "password": "secret123"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 201, "registration should succeed");

        let body: serde_json::Value = response.json().await.unwrap();
        let token = body["token"].as_str().unwrap().to_string();
        let user_id = body["user"]["id"].as_str().unwrap().parse().unwrap();

        (token, user_id, email)
    }

    /// Creates a resume for the given token and returns its id.
    pub async fn create_resume(
        &self,
        token: &str,
        title: &str,
        content: serde_json::Value,
        template: Option<&str>,
    ) -> Uuid {
        let mut body = serde_json::json!({
            "title": title,
            "content": content,
        });
        if let Some(template) = template {
            body["template"] = serde_json::json!(template);
        }

        let response = self
            .client
            .post(self.url("/api/resumes"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 201, "resume creation should succeed");

        let body: serde_json::Value = response.json().await.unwrap();
        body["resumeId"].as_str().unwrap().parse().unwrap()
    }

    /// Creates a job for the given token and returns its id.
    pub async fn create_job(&self, token: &str, body: serde_json::Value) -> Uuid {
        let response = self
            .client
            .post(self.url("/api/jobs"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 201, "job creation should succeed");

        let body: serde_json::Value = response.json().await.unwrap();
        body["jobId"].as_str().unwrap().parse().unwrap()
    }

    /// Lists resumes as the given user.
    pub async fn list_resumes(&self, token: &str) -> serde_json::Value {
        let response = self
            .client
            .get(self.url("/api/resumes"))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    }

    /// Lists jobs as the given user.
    pub async fn list_jobs(&self, token: &str) -> serde_json::Value {
        let response = self
            .client
            .get(self.url("/api/jobs"))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    }
}
