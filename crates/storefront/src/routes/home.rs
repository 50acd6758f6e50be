//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use tower_sessions::Session;
use tracing::instrument;

use crate::content::{self, Highlight, ProductCard};
use crate::error::Result;
use crate::filters;
use crate::models::HeroConfig;
use crate::routes::chrome::SiteChrome;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: SiteChrome,
    pub hero: HeroConfig,
    pub featured: Vec<ProductCard>,
    pub highlights: Vec<Highlight>,
}

/// Display the home page.
#[instrument(skip(session))]
pub async fn home(session: Session) -> Result<HomeTemplate> {
    Ok(HomeTemplate {
        chrome: SiteChrome::load(&session, true).await?,
        hero: HeroConfig::default(),
        featured: content::featured_products(),
        highlights: content::process_highlights(),
    })
}
