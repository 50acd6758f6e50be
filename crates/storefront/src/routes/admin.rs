//! Hero admin preview route handlers.
//!
//! A staging form for the home hero. Submissions replace the preview held in
//! the visitor session; nothing is published to the live home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::hero::PREVIEW_UPDATED_MESSAGE;
use crate::models::{HeroConfig, HeroForm, session};
use crate::routes::chrome::SiteChrome;

/// Hero admin template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/hero.html")]
pub struct HeroAdminTemplate {
    pub chrome: SiteChrome,
    /// Values currently in the form fields.
    pub form: HeroConfig,
    /// Values shown in the preview card.
    pub preview: HeroConfig,
    pub message: Option<&'static str>,
}

/// Display the hero admin form.
#[instrument(skip(session))]
pub async fn hero_form(session: Session) -> Result<HeroAdminTemplate> {
    let preview = session::load_hero_preview(&session).await?;
    Ok(HeroAdminTemplate {
        chrome: SiteChrome::load(&session, false).await?,
        form: preview.clone(),
        preview,
        message: None,
    })
}

/// Replace the hero preview with the submitted values.
#[instrument(skip(session))]
pub async fn update_hero(
    session: Session,
    Form(form): Form<HeroForm>,
) -> Result<HeroAdminTemplate> {
    let preview = HeroConfig::from(form);
    session::save_hero_preview(&session, &preview).await?;
    tracing::info!(title = %preview.title, "Hero preview updated");

    Ok(HeroAdminTemplate {
        chrome: SiteChrome::load(&session, false).await?,
        form: preview.clone(),
        preview,
        message: Some(PREVIEW_UPDATED_MESSAGE),
    })
}
