use sqlx::PgPool;

use crate::auth::AuthClient;
use crate::config::Config;
use crate::tickets::PurchaseActionResolver;

/// Shared application state handed to every handler. Externally configured
/// URLs are baked into their consumers here, at construction, rather than
/// read from the environment at request time.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth: AuthClient,
    pub purchase: PurchaseActionResolver,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        Self {
            pool,
            auth: AuthClient::new(config.api_service_url.clone()),
            purchase: PurchaseActionResolver::new(config.ticket_service_url.clone()),
        }
    }
}
