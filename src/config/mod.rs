use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

/// Process configuration, read from the environment once at startup.
pub struct Config {
    pub database_url: String,
    /// Base URL of the identity service; `auth/...` paths are appended.
    pub api_service_url: String,
    /// Base URL of the external checkout flow; the buyer id is appended.
    pub ticket_service_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/symposia".to_string()),
            api_service_url: env::var("API_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/".to_string()),
            ticket_service_url: env::var("TICKET_SERVICE_URL")
                .unwrap_or_else(|_| "https://tickets.example.com/".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
        }
    }
}
