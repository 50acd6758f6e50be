//! Bag route handlers.
//!
//! The bag lives in the visitor session. Every mutation redirects back to
//! `/bag` so a refresh never resubmits the form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use anfa_core::{BagItemId, ProductHandle};

use crate::content::{self, DEMO_LOOK_HANDLE};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::{Selection, session};
use crate::routes::chrome::SiteChrome;
use crate::state::AppState;

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateBagForm {
    pub id: String,
    pub delta: String,
}

/// Remove line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromBagForm {
    pub id: String,
}

/// Add to bag form data.
#[derive(Debug, Deserialize)]
pub struct AddToBagForm {
    pub handle: String,
    pub size: Option<String>,
    pub quantity: Option<String>,
}

fn parse_line_id(raw: &str) -> Result<BagItemId> {
    raw.trim()
        .parse::<i32>()
        .map(BagItemId::new)
        .map_err(|_| AppError::BadRequest(format!("invalid bag line id: {raw}")))
}

fn parse_delta(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid quantity change: {raw}")))
}

/// Bag page template.
#[derive(Template, WebTemplate)]
#[template(path = "bag/show.html")]
pub struct BagShowTemplate {
    pub chrome: SiteChrome,
}

/// Display the bag page.
///
/// The page reads the bag from `chrome`, the same copy the header preview
/// shows.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<BagShowTemplate> {
    Ok(BagShowTemplate {
        chrome: SiteChrome::load(&session, false).await?,
    })
}

/// Change a line's quantity by `delta`, clamped at 1.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateBagForm>) -> Result<Response> {
    let id = parse_line_id(&form.id)?;
    let delta = parse_delta(&form.delta)?;

    let mut bag = session::load_bag(&session).await?;
    bag.update_quantity(id, delta);
    session::save_bag(&session, &bag).await?;

    let line_id = id.to_string();
    add_breadcrumb(
        "bag",
        "Updated bag quantity",
        Some(&[("line_id", line_id.as_str()), ("delta", form.delta.as_str())]),
    );
    Ok(Redirect::to("/bag").into_response())
}

/// Remove a line from the bag.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromBagForm>) -> Result<Response> {
    let id = parse_line_id(&form.id)?;

    let mut bag = session::load_bag(&session).await?;
    if bag.remove(id) {
        session::save_bag(&session, &bag).await?;
        let line_id = id.to_string();
        add_breadcrumb("bag", "Removed bag line", Some(&[("line_id", line_id.as_str())]));
    } else {
        tracing::debug!(line_id = %id, "Remove requested for unknown bag line");
    }

    Ok(Redirect::to("/bag").into_response())
}

/// Add the selected product, size, and quantity to the bag.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToBagForm>,
) -> Result<Response> {
    let handle = ProductHandle::parse(form.handle.trim())
        .map_err(|e| AppError::BadRequest(format!("invalid product handle: {e}")))?;

    let product = if handle.as_str() == DEMO_LOOK_HANDLE {
        Some(content::demo_look().product)
    } else {
        state.catalog().product_by_handle(handle.as_str()).await
    };
    let product = product.ok_or_else(|| AppError::NotFound(format!("product {handle}")))?;

    let selection = Selection::new(form.size.as_deref(), form.quantity.as_deref());

    let mut bag = session::load_bag(&session).await?;
    let id = bag.add(
        product.title.clone(),
        selection.detail(),
        product.price,
        selection.quantity,
    );
    session::save_bag(&session, &bag).await?;

    tracing::info!(handle = %product.handle, line_id = %id, quantity = selection.quantity, "Added to bag");
    add_breadcrumb("bag", "Added to bag", Some(&[("handle", product.handle.as_str())]));

    Ok(Redirect::to("/bag").into_response())
}
