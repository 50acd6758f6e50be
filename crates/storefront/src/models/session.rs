//! Per-visitor state kept in the in-memory session.

use tower_sessions::Session;

use super::bag::Bag;
use super::hero::HeroConfig;

/// Session keys.
pub mod keys {
    /// Key for the visitor's bag.
    pub const BAG: &str = "bag";

    /// Key for the hero admin preview.
    pub const HERO_PREVIEW: &str = "hero_preview";
}

/// Load the visitor's bag, seeding it on first visit.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn load_bag(session: &Session) -> Result<Bag, tower_sessions::session::Error> {
    Ok(session.get::<Bag>(keys::BAG).await?.unwrap_or_default())
}

/// Store the visitor's bag.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_bag(session: &Session, bag: &Bag) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::BAG, bag).await
}

/// Load the hero preview, or the default hero.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn load_hero_preview(
    session: &Session,
) -> Result<HeroConfig, tower_sessions::session::Error> {
    Ok(session
        .get::<HeroConfig>(keys::HERO_PREVIEW)
        .await?
        .unwrap_or_default())
}

/// Store the hero preview.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_hero_preview(
    session: &Session,
    hero: &HeroConfig,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::HERO_PREVIEW, hero).await
}
