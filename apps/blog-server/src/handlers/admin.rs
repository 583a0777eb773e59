//! Admin dashboard handlers. Every route requires an admin session.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkzenith_core::controllers::{Dashboard, Step};
use inkzenith_core::domain::PostId;
use inkzenith_shared::dto::SearchRequest;

use crate::handlers::present;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::ViewSession;

fn mounted(session: &mut ViewSession) -> AppResult<&mut Dashboard> {
    session
        .dashboard()
        .ok_or_else(|| AppError::Conflict("Dashboard is not mounted".to_string()))
}

/// POST /api/views/{view}/dashboard
pub async fn mount(
    state: web::Data<AppState>,
    admin: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    tracing::debug!(email = %admin.email, "Dashboard mounted");
    let (step, dashboard) = session.mount_dashboard().await;
    Ok(present::step(step, present::dashboard(dashboard)))
}

/// GET /api/views/{view}/dashboard
pub async fn show(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let dashboard = mounted(&mut session)?;
    Ok(present::step(Step::Applied, present::dashboard(dashboard)))
}

/// POST /api/views/{view}/dashboard/next
pub async fn next(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let dashboard = mounted(&mut session)?;
    let step = dashboard.next_page().await;
    Ok(present::step(step, present::dashboard(dashboard)))
}

/// POST /api/views/{view}/dashboard/previous
pub async fn previous(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let dashboard = mounted(&mut session)?;
    let step = dashboard.previous_page().await;
    Ok(present::step(step, present::dashboard(dashboard)))
}

/// POST /api/views/{view}/dashboard/search
pub async fn search(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<Uuid>,
    body: web::Json<SearchRequest>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let dashboard = mounted(&mut session)?;
    let step = dashboard.search(&body.query).await;
    Ok(present::step(step, present::dashboard(dashboard)))
}

/// DELETE /api/views/{view}/dashboard/search
pub async fn clear_search(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let dashboard = mounted(&mut session)?;
    let step = dashboard.clear_search();
    Ok(present::step(step, present::dashboard(dashboard)))
}

/// POST /api/views/{view}/dashboard/delete/{id} - open the confirmation prompt.
pub async fn request_delete(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<(Uuid, String)>,
) -> AppResult<HttpResponse> {
    let (view_id, post_id) = path.into_inner();
    let view = state.views.get(view_id).await?;
    let mut session = view.lock().await;

    let dashboard = mounted(&mut session)?;
    dashboard.request_delete(PostId::from(post_id));
    Ok(present::step(Step::Applied, present::dashboard(dashboard)))
}

/// POST /api/views/{view}/dashboard/delete/cancel
pub async fn cancel_delete(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let dashboard = mounted(&mut session)?;
    let step = dashboard.cancel_delete();
    Ok(present::step(step, present::dashboard(dashboard)))
}

/// POST /api/views/{view}/dashboard/delete/confirm
pub async fn confirm_delete(
    state: web::Data<AppState>,
    admin: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let dashboard = mounted(&mut session)?;
    if let Some(id) = dashboard.pending_delete() {
        tracing::info!(post_id = %id, email = %admin.email, "Delete confirmed");
    }
    let step = dashboard.confirm_delete().await;
    Ok(present::step(step, present::dashboard(dashboard)))
}
