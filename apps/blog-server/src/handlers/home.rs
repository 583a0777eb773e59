//! Public post list.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkzenith_core::controllers::Step;

use crate::handlers::present;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/views/{view}/home
pub async fn show(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let (step, pages) = session.home().await;
    Ok(present::step(step, present::page(pages)))
}

/// POST /api/views/{view}/home - fetch the first page again.
pub async fn remount(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    session.reset_home();
    let (step, pages) = session.home().await;
    Ok(present::step(step, present::page(pages)))
}

/// POST /api/views/{view}/home/next
pub async fn next(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let pages = match session.home().await {
        (Step::Failed, pages) => return Ok(present::step(Step::Failed, present::page(pages))),
        (_, pages) => pages,
    };
    let step = pages.next_page().await;
    Ok(present::step(step, present::page(pages)))
}

/// POST /api/views/{view}/home/previous
pub async fn previous(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let pages = match session.home().await {
        (Step::Failed, pages) => return Ok(present::step(Step::Failed, present::page(pages))),
        (_, pages) => pages,
    };
    let step = pages.previous_page().await;
    Ok(present::step(step, present::page(pages)))
}
