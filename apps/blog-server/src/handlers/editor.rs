//! Post editor handlers. Every route requires an admin session.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkzenith_core::controllers::{Editor, Step, Transition};
use inkzenith_core::domain::{PostDraft, PostId};
use inkzenith_shared::dto::DraftRequest;

use crate::handlers::present::{self, DASHBOARD_PATH};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::ViewSession;

fn opened(session: &mut ViewSession) -> AppResult<&mut Editor> {
    session
        .editor()
        .ok_or_else(|| AppError::Conflict("Editor is not open".to_string()))
}

async fn open(session: &mut ViewSession, id: Option<PostId>) -> HttpResponse {
    let editor = session.open_editor(id);
    match editor.mount().await {
        Transition::Stay => present::step(Step::Applied, present::editor(editor, None)),
        Transition::ToDashboard => {
            let response = present::editor(editor, Some(DASHBOARD_PATH));
            session.close_editor();
            present::step(Step::Failed, response)
        }
    }
}

/// POST /api/views/{view}/editor - blank form for a new post.
pub async fn create(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    Ok(open(&mut session, None).await)
}

/// POST /api/views/{view}/editor/{id} - load an existing post.
pub async fn edit(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<(Uuid, String)>,
) -> AppResult<HttpResponse> {
    let (view_id, post_id) = path.into_inner();
    let view = state.views.get(view_id).await?;
    let mut session = view.lock().await;

    Ok(open(&mut session, Some(PostId::from(post_id))).await)
}

/// PUT /api/views/{view}/editor/draft - replace the form fields.
pub async fn update_draft(
    state: web::Data<AppState>,
    _admin: Identity,
    path: web::Path<Uuid>,
    body: web::Json<DraftRequest>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let editor = opened(&mut session)?;
    let DraftRequest {
        title,
        image_url,
        content,
    } = body.into_inner();
    editor.set_form(PostDraft {
        title,
        image_url,
        content,
    });
    Ok(present::step(Step::Applied, present::editor(editor, None)))
}

/// POST /api/views/{view}/editor/submit
pub async fn submit(
    state: web::Data<AppState>,
    admin: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let view = state.views.get(path.into_inner()).await?;
    let mut session = view.lock().await;

    let editor = opened(&mut session)?;
    match editor.submit().await {
        Transition::Stay => Ok(present::step(Step::Failed, present::editor(editor, None))),
        Transition::ToDashboard => {
            tracing::debug!(email = %admin.email, "Editor closed after save");
            let response = present::editor(editor, Some(DASHBOARD_PATH));
            session.close_editor();
            Ok(present::step(Step::Applied, response))
        }
    }
}
