//! Visitor identity: bearer-token session extraction, and the client for
//! the external identity service that owns credentials.

pub mod service;
pub mod session;

pub use service::AuthClient;
pub use session::{CurrentUser, OptionalUser};
