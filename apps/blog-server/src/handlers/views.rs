//! View lifecycle, toasts and the post reader.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use inkzenith_core::Theme;
use inkzenith_core::controllers::PostViewState;
use inkzenith_shared::dto::{PostViewResponse, ToastResponse, ViewResponse};

use crate::handlers::present;
use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;
use crate::views::ViewSession;

/// POST /api/views
pub async fn mount(state: web::Data<AppState>, request_id: RequestId) -> HttpResponse {
    let session = ViewSession::new(state.store.clone(), state.ui.clone());
    let view_id = state.views.mount(session).await;
    tracing::info!(view_id = %view_id, request_id = %request_id.as_str(), "View mounted");

    let theme = match state.ui.theme {
        Theme::Light => "light",
    };

    HttpResponse::Created().json(ViewResponse {
        view_id: view_id.to_string(),
        theme: theme.to_string(),
    })
}

/// DELETE /api/views/{view}
pub async fn unmount(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let view_id = path.into_inner();
    if !state.views.unmount(view_id).await {
        return Err(AppError::NotFound(format!("View with id {} not found", view_id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/views/{view}/toasts
pub async fn toasts(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let session = view.lock().await;

    let active: Vec<ToastResponse> = session.toasts().active().iter().map(present::toast).collect();
    Ok(HttpResponse::Ok().json(active))
}

/// DELETE /api/views/{view}/toasts/{toast}
pub async fn dismiss_toast(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, u64)>,
) -> AppResult<HttpResponse> {
    let (view_id, toast_id) = path.into_inner();
    let view = state.views.get(view_id).await?;
    let session = view.lock().await;

    if !session.toasts().dismiss(toast_id) {
        return Err(AppError::NotFound(format!("Toast {} is no longer visible", toast_id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/views/{view}/posts/{title}
///
/// The title is handed over still percent-encoded, exactly as it appears in
/// the post link.
pub async fn read_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, String)>,
) -> AppResult<HttpResponse> {
    let (view_id, decoded) = path.into_inner();
    let encoded = req.uri().path().rsplit('/').next().unwrap_or(decoded.as_str());

    let view = state.views.get(view_id).await?;
    let mut reader = view.lock().await.reader();

    let response = match reader.load(encoded).await {
        PostViewState::Found(post) => PostViewResponse {
            found: true,
            post: Some(present::post(post)),
        },
        PostViewState::Loading | PostViewState::NotFound => PostViewResponse {
            found: false,
            post: None,
        },
    };
    Ok(HttpResponse::Ok().json(response))
}
