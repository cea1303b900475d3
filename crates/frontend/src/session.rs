//! Shopper session configuration.
//!
//! Sessions are cookie-backed with an in-memory store; the gateway
//! deliberately has no database. What the session carries is a single value:
//! the shopper id used as the cart key on the cart service, minted on first
//! visit.

use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use uuid::Uuid;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "copperline_session";

/// Session expiry (matches the original one-hour shopper cookie).
const SESSION_EXPIRY_SECONDS: i64 = 60 * 60;

/// Session value keys.
pub mod session_keys {
    /// The shopper id keying the cart on the cart service.
    pub const SHOPPER_ID: &str = "shopper_id";
}

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        // The demo serves plain HTTP
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Get the shopper id from the session, minting one on first visit.
///
/// The insert on first visit is what triggers the session cookie.
///
/// # Errors
///
/// Returns the session store's error if the session cannot be read or
/// written.
pub async fn shopper_id(session: &Session) -> Result<String, tower_sessions::session::Error> {
    if let Some(id) = session.get::<String>(session_keys::SHOPPER_ID).await? {
        return Ok(id);
    }

    let id = Uuid::new_v4().to_string();
    session.insert(session_keys::SHOPPER_ID, id.clone()).await?;
    tracing::debug!(shopper = %id, "issued new shopper id");
    Ok(id)
}
