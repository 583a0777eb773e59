//! Authentication handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use inkzenith_core::ToastCenter;
use inkzenith_core::controllers::LoginForm;
use inkzenith_shared::dto::{AuthResponse, LoginRequest, SessionResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    /// View whose toasts should report the outcome.
    pub view: Option<Uuid>,
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    query: web::Query<LoginQuery>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let form = match query.view {
        Some(view_id) => {
            let view = state.views.get(view_id).await?;
            let session = view.lock().await;
            session.login_form(state.identity.clone())
        }
        // Nobody is watching toasts; the outcome is still logged.
        None => LoginForm::new(
            state.identity.clone(),
            Arc::new(ToastCenter::new(state.ui.toast_ttl)),
        ),
    };

    let session = form
        .submit(&req.email, &req.password)
        .await
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password.".to_string()))?;

    let expires_in = (session.expires_at - chrono::Utc::now()).num_seconds().max(0) as u64;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: session.access_token,
        token_type: "Bearer".to_string(),
        expires_in,
        expires_at: session.expires_at,
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(SessionResponse {
        user_id: identity.user_id.to_string(),
        email: identity.email,
    }))
}
