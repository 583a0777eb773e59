//! Controller state to wire DTOs.

use actix_web::HttpResponse;
use serde::Serialize;

use inkzenith_core::controllers::{Dashboard, Editor, EditorMode, Paginator, Step};
use inkzenith_core::domain::{Post, PostDraft};
use inkzenith_core::{Toast, ToastKind};
use inkzenith_shared::ApiResponse;
use inkzenith_shared::dto::{
    DashboardResponse, DraftRequest, EditorResponse, PageResponse, PostResponse, PromptResponse,
    ToastResponse,
};

/// Where the editor sends the view when it is done.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Wrap `data` in an envelope that reports how the interaction went.
pub fn step<T: Serialize>(step: Step, data: T) -> HttpResponse {
    let body = match step {
        Step::Applied => ApiResponse::ok(data),
        Step::Skipped => ApiResponse::ok_with_message(data, "skipped"),
        Step::Failed => ApiResponse::failed(data, "failed"),
    };
    HttpResponse::Ok().json(body)
}

pub fn post(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        display_title: post.display_title().to_string(),
        image_url: post.image_url.clone(),
        content: post.content.clone(),
        reader_path: post.reader_path(),
        edit_path: post.edit_path(),
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

pub fn page(pages: &Paginator) -> PageResponse {
    PageResponse {
        posts: pages.rows().iter().map(post).collect(),
        page: pages.page_number(),
        is_first_page: pages.is_first_page(),
        is_last_page: pages.is_last_page(),
    }
}

pub fn dashboard(dashboard: &Dashboard) -> DashboardResponse {
    let pages = dashboard.pages();
    let delete_prompt = dashboard
        .pending_delete()
        .zip(dashboard.delete_prompt())
        .map(|(id, prompt)| PromptResponse {
            post_id: id.to_string(),
            title: prompt.title.to_string(),
            message: prompt.message.to_string(),
        });

    DashboardResponse {
        posts: dashboard.visible().iter().map(post).collect(),
        page: pages.page_number(),
        is_first_page: pages.is_first_page(),
        is_last_page: pages.is_last_page(),
        searching: dashboard.is_searching(),
        query: dashboard.search_results().map(|r| r.query.clone()),
        delete_prompt,
    }
}

pub fn draft(draft: &PostDraft) -> DraftRequest {
    DraftRequest {
        title: draft.title.clone(),
        image_url: draft.image_url.clone(),
        content: draft.content.clone(),
    }
}

pub fn editor(editor: &Editor, navigate_to: Option<&str>) -> EditorResponse {
    let (mode, post_id) = match editor.mode() {
        EditorMode::Create => ("create", None),
        EditorMode::Edit(id) => ("edit", Some(id.to_string())),
    };

    EditorResponse {
        mode: mode.to_string(),
        post_id,
        loaded: editor.is_loaded(),
        draft: draft(editor.form()),
        navigate_to: navigate_to.map(String::from),
    }
}

pub fn toast(toast: &Toast) -> ToastResponse {
    let kind = match toast.kind {
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };

    ToastResponse {
        id: toast.id,
        kind: kind.to_string(),
        message: toast.message.clone(),
        expires_at: toast.expires_at,
    }
}
