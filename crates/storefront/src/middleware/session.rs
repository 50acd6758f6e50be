//! Session middleware configuration.
//!
//! Sessions live in process memory only. A restart forgets every bag and
//! hero preview.
//!
//! `MemoryStore` never evicts. A session idle past the inactivity window is
//! no longer loaded, but its record stays in the map until the process
//! restarts, so memory grows with the number of distinct visitors. The store
//! exposes no expiry deletion hook to run a periodic sweep against; a
//! deployment that outgrows this needs a store implementing
//! `ExpiredDeletion` in its place.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "anfa_session";

/// Session expiry time in seconds (1 day of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer backed by an in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
